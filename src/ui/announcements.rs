use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::prefs::Palette;
use crate::ui::layout::calculate_screen_chunks;
use crate::utils::truncate_string;

pub fn draw_announcements(f: &mut Frame, app: &App, palette: &Palette) {
    let layout = calculate_screen_chunks(f.area());

    let title = Paragraph::new("Announcements")
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(layout.body_area);

    let items: Vec<ListItem> = if app.announcements.is_empty() {
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
                let style = if i == app.selected_announcement_index {
                    Style::default()
                        .fg(palette.emphasis)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(truncate_string(&announcement.title, 36)).style(style)
            })
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(list, body_chunks[0]);

    let mut detail = Text::default();
    if let Some(announcement) = app.announcements.get(app.selected_announcement_index) {
        detail.push_line(Line::from(Span::styled(
            announcement.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        detail.push_line(Line::from(Span::styled(
            format!("Posted {}", announcement.posted),
            Style::default().fg(palette.dim),
        )));
        detail.push_line(Line::from(""));
        for line in announcement.message.lines() {
            detail.push_line(Line::from(line));
        }
    } else {
        detail.push_line(Line::from(Span::styled(
            "Nothing here yet",
            Style::default()
                .fg(palette.dim)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let detail_pane = Paragraph::new(detail)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(detail_pane, body_chunks[1]);

    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let help_text = vec![Line::from(vec![
        Span::styled("↑/↓", key_style),
        Span::from(" Navigate  "),
        Span::styled("Esc", key_style),
        Span::from(" Back  "),
        Span::styled("Ctrl+C", key_style),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
