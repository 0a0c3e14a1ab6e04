use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, CategoriesState};
use crate::models::{Announcement, CategoryWithAverage};
use crate::prefs::Palette;
use crate::utils::{aligned_row, format_percent, truncate_string};

fn format_category_item(entry: &CategoryWithAverage, width: usize) -> String {
    let title = if entry.category.icon.is_empty() {
        entry.category.title.clone()
    } else {
        format!("{} {}", entry.category.icon, entry.category.title)
    };
    aligned_row(
        &truncate_string(&title, width.saturating_sub(8)),
        &format_percent(entry.average),
        width,
    )
}

fn format_announcement_item(announcement: &Announcement) -> String {
    format!(
        "{} - {}",
        announcement.posted,
        truncate_string(&announcement.title, 48)
    )
}

fn draw_panel_header(
    area: ratatui::layout::Rect,
    title: &str,
    focused: bool,
    palette: &Palette,
    f: &mut Frame,
) {
    let style = if focused {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };

    let header = Paragraph::new(title)
        .style(style)
        .alignment(Alignment::Left)
        .block(Block::default());

    f.render_widget(header, area);
}

pub fn draw_menu(f: &mut Frame, app: &App, palette: &Palette) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(area);

    let title = Paragraph::new("Exam Reviewer v0.1.0")
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let category_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(chunks[1]);

    let announcement_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(chunks[2]);

    draw_panel_header(
        category_chunks[0],
        "[1] Categories",
        app.focused_panel == 0,
        palette,
        f,
    );

    let list_width = category_chunks[1].width.saturating_sub(2) as usize;
    let category_items: Vec<ListItem> = match &app.categories {
        CategoriesState::Loading => vec![ListItem::new("Loading...").style(
            Style::default()
                .fg(palette.dim)
                .add_modifier(Modifier::ITALIC),
        )],
        CategoriesState::Unavailable => vec![ListItem::new("Review content not found").style(
            Style::default()
                .fg(palette.dim)
                .add_modifier(Modifier::ITALIC),
        )],
        CategoriesState::Ready(list) if list.is_empty() => {
            vec![ListItem::new("No categories yet").style(
                Style::default()
                    .fg(palette.dim)
                    .add_modifier(Modifier::ITALIC),
            )]
        }
        CategoriesState::Ready(list) => list
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let text = format_category_item(entry, list_width);
                let style = if i == app.selected_category_index && app.focused_panel == 0 {
                    Style::default()
                        .fg(palette.emphasis)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(text).style(style)
            })
            .collect(),
    };

    let category_list = List::new(category_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if app.focused_panel == 0 {
                    Style::default().fg(palette.accent)
                } else {
                    Style::default().fg(palette.dim)
                }),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(category_list, category_chunks[1]);

    draw_panel_header(
        announcement_chunks[0],
        "[2] Announcements",
        app.focused_panel == 1,
        palette,
        f,
    );

    let announcement_items: Vec<ListItem> = if app.announcements.is_empty() {
        vec![ListItem::new("No announcements").style(
            Style::default()
                .fg(palette.dim)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        app.announcements
            .iter()
            .enumerate()
            .map(|(i, announcement)| {
                let text = format_announcement_item(announcement);
                let style = if i == app.selected_announcement_index && app.focused_panel == 1 {
                    Style::default()
                        .fg(palette.emphasis)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(text).style(style)
            })
            .collect()
    };

    let announcement_list = List::new(announcement_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if app.focused_panel == 1 {
                    Style::default().fg(palette.accent)
                } else {
                    Style::default().fg(palette.dim)
                }),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(announcement_list, announcement_chunks[1]);

    let help_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[3]);

    let (status_content, status_color) = match &app.categories {
        CategoriesState::Loading => (
            vec![Line::from("Library: Loading"), Line::from("Please wait")],
            palette.emphasis,
        ),
        CategoriesState::Unavailable => (
            vec![
                Line::from("Library: Missing"),
                Line::from("Add files under content/"),
            ],
            Color::Red,
        ),
        CategoriesState::Ready(list) => (
            vec![
                Line::from(format!("Library: {} categories", list.len())),
                Line::from(format!("{} announcements", app.announcements.len())),
            ],
            Color::Green,
        ),
    };

    let status = Paragraph::new(status_content)
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title("Library"));
    f.render_widget(status, help_chunks[0]);

    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let help_text = vec![
        Line::from(vec![
            Span::styled("1/2", key_style),
            Span::from(" Focus Panel  "),
            Span::styled("↑/↓", key_style),
            Span::from(" Navigate  "),
            Span::styled("Enter", key_style),
            Span::from(" Open"),
        ]),
        Line::from(vec![
            Span::styled("a", key_style),
            Span::from(" About  "),
            Span::styled("s", key_style),
            Span::from(" Settings  "),
            Span::styled("Esc/Ctrl+C", key_style),
            Span::from(" Quit"),
        ]),
    ];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, help_chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_format_category_item_aligns_average() {
        let entry = CategoryWithAverage {
            category: Category {
                id: "ethics".to_string(),
                title: "Ethics".to_string(),
                description: String::new(),
                icon: String::new(),
                settings: Vec::new(),
            },
            average: 62.5,
        };

        let row = format_category_item(&entry, 30);
        assert!(row.starts_with("Ethics"));
        assert!(row.ends_with("62.5%"));
        assert_eq!(row.len(), 30);
    }

    #[test]
    fn test_format_category_item_includes_icon() {
        let entry = CategoryWithAverage {
            category: Category {
                id: "law".to_string(),
                title: "Law".to_string(),
                description: String::new(),
                icon: "§".to_string(),
                settings: Vec::new(),
            },
            average: 0.0,
        };

        let row = format_category_item(&entry, 30);
        assert!(row.starts_with("§ Law"));
    }

    #[test]
    fn test_format_announcement_item() {
        let announcement = Announcement {
            title: "Exam dates".to_string(),
            message: String::new(),
            posted: "2024-03-01".to_string(),
        };

        assert_eq!(format_announcement_item(&announcement), "2024-03-01 - Exam dates");
    }
}
