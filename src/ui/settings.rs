use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::prefs::Palette;
use crate::ui::layout::calculate_screen_chunks;
use crate::utils::aligned_row;

pub fn draw_settings(f: &mut Frame, app: &App, palette: &Palette) {
    let layout = calculate_screen_chunks(f.area());

    let title = Paragraph::new("Settings")
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let body_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(layout.body_area);

    let list_width = body_chunks[0].width.saturating_sub(2) as usize;
    let rows = [
        aligned_row(
            "Theme",
            &format!("< {} >", app.prefs.theme.label()),
            list_width,
        ),
        aligned_row(
            "Accent",
            &format!("< {} >", app.prefs.accent.label()),
            list_width,
        ),
    ];
    let items: Vec<ListItem> = rows
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let style = if i == app.settings_cursor {
                Style::default()
                    .fg(palette.emphasis)
                    .add_modifier(Modifier::BOLD)
            } else if i == 1 {
                Style::default().fg(palette.accent)
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(list, body_chunks[0]);

    let note = Paragraph::new("Changes are saved immediately.")
        .style(
            Style::default()
                .fg(palette.dim)
                .add_modifier(Modifier::ITALIC),
        )
        .block(Block::default());
    f.render_widget(note, body_chunks[1]);

    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let help_text = vec![Line::from(vec![
        Span::styled("↑/↓", key_style),
        Span::from(" Move  "),
        Span::styled("Enter/→/Space", key_style),
        Span::from(" Change  "),
        Span::styled("Esc", key_style),
        Span::from(" Back"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
