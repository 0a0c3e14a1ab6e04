use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::prefs::Palette;
use crate::timer::format_clock;
use crate::ui::layout::calculate_screen_chunks;
use crate::utils::format_percent;

fn score_color(percent: f64) -> Color {
    if percent >= 70.0 {
        Color::Green
    } else if percent >= 40.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

pub fn draw_score(f: &mut Frame, app: &App, palette: &Palette) {
    let Some(board) = app.score.as_ref() else {
        return;
    };

    let layout = calculate_screen_chunks(f.area());

    let title = Paragraph::new(format!("Score - {}", board.category.title))
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let percent = board.percent();
    let mut body = Text::default();
    body.push_line(Line::from(""));
    body.push_line(Line::from(Span::styled(
        format!(
            "Score: {} / {} ({})",
            board.score,
            board.total,
            format_percent(percent)
        ),
        Style::default()
            .fg(score_color(percent))
            .add_modifier(Modifier::BOLD),
    )));
    body.push_line(Line::from(""));
    body.push_line(Line::from(format!(
        "Setting: {} questions / {} minutes",
        board.setting.questions, board.setting.minutes
    )));
    body.push_line(Line::from(format!(
        "Time used: {} of {}",
        format_clock(board.time_used),
        format_clock(board.time_total)
    )));
    if let Some(notice) = &board.notice {
        body.push_line(Line::from(""));
        body.push_line(Line::from(Span::styled(
            format!("Could not save this run: {}", notice),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let summary = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, layout.body_area);

    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let help_text = vec![Line::from(vec![
        Span::styled("v/Enter", key_style),
        Span::from(" Review Answers  "),
        Span::styled("m/Esc", key_style),
        Span::from(" Main Menu  "),
        Span::styled("Ctrl+C", key_style),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
