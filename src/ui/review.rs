use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::prefs::Palette;
use crate::ui::layout::calculate_screen_chunks;
use crate::utils::truncate_string;

fn option_prefix(correct: bool, picked: bool) -> &'static str {
    if correct {
        "✓"
    } else if picked {
        "✗"
    } else {
        "·"
    }
}

pub fn draw_review(f: &mut Frame, app: &App, palette: &Palette) {
    let Some(board) = app.score.as_ref() else {
        return;
    };

    let layout = calculate_screen_chunks(f.area());

    let title = Paragraph::new(format!(
        "Review - {} ({} / {})",
        board.category.title, board.score, board.total
    ))
    .style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut body = Text::default();
    for (i, question) in board.questions.iter().enumerate() {
        let picked = board.selections.get(question);
        let solved = picked.is_some_and(|set| *set == question.correct);
        let marker = if solved { "[✓]" } else { "[✗]" };
        let heading_style = if solved {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        };
        body.push_line(Line::from(Span::styled(
            format!(
                "{} {}. {}",
                marker,
                i + 1,
                truncate_string(&question.prompt, 70)
            ),
            heading_style,
        )));

        for option in &question.choices {
            let is_correct = question.correct.contains(option);
            let is_picked = picked.is_some_and(|set| set.contains(option));
            let suffix = if is_picked { " (your pick)" } else { "" };
            let style = if is_correct {
                Style::default().fg(Color::Green)
            } else if is_picked {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(palette.dim)
            };
            body.push_line(Line::from(Span::styled(
                format!(
                    "  {} {}{}",
                    option_prefix(is_correct, is_picked),
                    option,
                    suffix
                ),
                style,
            )));
        }
        body.push_line(Line::from(""));
    }

    let review = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .scroll((app.review_scroll, 0))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(review, layout.body_area);

    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let help_text = vec![Line::from(vec![
        Span::styled("↑/↓", key_style),
        Span::from(" Scroll  "),
        Span::styled("PgUp/PgDn", key_style),
        Span::from(" Faster  "),
        Span::styled("Esc", key_style),
        Span::from(" Score  "),
        Span::styled("m", key_style),
        Span::from(" Main Menu"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
