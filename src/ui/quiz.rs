use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::Question;
use crate::prefs::Palette;
use crate::ui::layout::calculate_quiz_chunks;

fn choice_marker(question: &Question, picked: bool) -> &'static str {
    match (question.is_multi(), picked) {
        (false, false) => "( )",
        (false, true) => "(•)",
        (true, false) => "[ ]",
        (true, true) => "[x]",
    }
}

pub fn draw_quiz(f: &mut Frame, app: &App, palette: &Palette) {
    let Some(quiz) = app.quiz.as_ref() else {
        return;
    };
    let Some(question) = quiz.current() else {
        return;
    };

    let layout = calculate_quiz_chunks(f.area());

    let clock_style = if quiz.countdown.is_low() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    };
    let header_line = Line::from(vec![
        Span::styled(
            format!(
                "Question {} / {} - {}",
                quiz.current_index + 1,
                quiz.questions.len(),
                quiz.category.title
            ),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from("   "),
        Span::styled(quiz.countdown.clock(), clock_style),
    ]);
    let header = Paragraph::new(header_line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let question_title = if question.is_multi() {
        "Question - select all that apply"
    } else {
        "Question"
    };
    let prompt = Paragraph::new(question.prompt.as_str())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(question_title));
    f.render_widget(prompt, layout.question_area);

    let picks = quiz.selections.borrow();
    let selected = picks.get(question);
    let choice_items: Vec<ListItem> = question
        .choices
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let picked = selected.is_some_and(|set| set.contains(option));
            let text = format!("{} {}. {}", choice_marker(question, picked), i + 1, option);
            let style = if i == quiz.cursor {
                Style::default()
                    .fg(palette.emphasis)
                    .add_modifier(Modifier::BOLD)
            } else if picked {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let choices = List::new(choice_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "Answered {} / {}",
                    quiz.answered(),
                    quiz.questions.len()
                ))
                .border_style(Style::default().fg(palette.accent)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(choices, layout.choices_area);

    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let help_text = vec![
        Line::from(vec![
            Span::styled("↑/↓", key_style),
            Span::from(" Move  "),
            Span::styled("←/→", key_style),
            Span::from(" Question  "),
            Span::styled("Enter/Space", key_style),
            Span::from(" Pick  "),
            Span::styled("1-9", key_style),
            Span::from(" Jump"),
        ]),
        Line::from(vec![
            Span::styled("s", key_style),
            Span::from(" Submit  "),
            Span::styled("Esc", key_style),
            Span::from(" Quit to Menu  "),
            Span::styled("Ctrl+C", key_style),
            Span::from(" Exit App"),
        ]),
    ];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit Quiz")
        .style(
            Style::default()
                .fg(palette.emphasis)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Leave this run? Your selections will be discarded.")
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Back to Menu)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Keep Going)  "),
        Span::styled(
            "Ctrl+C",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
