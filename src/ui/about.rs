use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::prefs::Palette;
use crate::ui::layout::calculate_screen_chunks;

pub fn draw_about(f: &mut Frame, app: &App, palette: &Palette) {
    let layout = calculate_screen_chunks(f.area());

    let heading = app
        .about
        .as_ref()
        .filter(|about| !about.title.is_empty())
        .map(|about| about.title.clone())
        .unwrap_or_else(|| "About".to_string());
    let title = Paragraph::new(heading)
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut body = Text::default();
    let mut has_link = false;
    if let Some(about) = app.about.as_ref() {
        for line in about.message.lines() {
            body.push_line(Line::from(line));
        }
        if !about.link.trim().is_empty() {
            has_link = true;
            body.push_line(Line::from(""));
            body.push_line(Line::from(Span::styled(
                about.link.as_str(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::UNDERLINED),
            )));
        }
    } else {
        body.push_line(Line::from(Span::styled(
            "No app information available",
            Style::default()
                .fg(palette.dim)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let about_pane = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(about_pane, layout.body_area);

    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let mut help_spans = Vec::new();
    if has_link {
        help_spans.extend([Span::styled("o", key_style), Span::from(" Open Link  ")]);
    }
    help_spans.extend([
        Span::styled("Esc", key_style),
        Span::from(" Back  "),
        Span::styled("Ctrl+C", key_style),
        Span::from(" Quit"),
    ]);
    let help = Paragraph::new(vec![Line::from(help_spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
