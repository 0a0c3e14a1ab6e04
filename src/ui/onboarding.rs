use std::time::{Duration, UNIX_EPOCH};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, OnBoarding};
use crate::prefs::Palette;
use crate::ui::layout::calculate_screen_chunks;
use crate::utils::{aligned_row, format_percent};

const DATE_FORMAT_TODAY: &str = "Today %H:%M";
const DATE_FORMAT_YESTERDAY: &str = "Yesterday %H:%M";
const DATE_FORMAT_OTHER: &str = "%Y-%m-%d";

pub fn format_run_date(timestamp: u64) -> String {
    let run_time = UNIX_EPOCH + Duration::from_secs(timestamp);
    let datetime: chrono::DateTime<chrono::Local> = run_time.into();

    let today = chrono::Local::now();
    let run_date = datetime.date_naive();

    if run_date == today.date_naive() {
        datetime.format(DATE_FORMAT_TODAY).to_string()
    } else if run_date == today.date_naive() - chrono::Duration::days(1) {
        datetime.format(DATE_FORMAT_YESTERDAY).to_string()
    } else {
        datetime.format(DATE_FORMAT_OTHER).to_string()
    }
}

fn format_setting_item(onboarding: &OnBoarding, index: usize, width: usize) -> String {
    let setting = &onboarding.category.settings[index];
    let label = format!("{} questions / {} min", setting.questions, setting.minutes);
    aligned_row(
        &label,
        &format_percent(onboarding.setting_average(index)),
        width,
    )
}

pub fn draw_onboarding(f: &mut Frame, app: &App, palette: &Palette) {
    let Some(onboarding) = app.onboarding.as_ref() else {
        return;
    };

    let layout = calculate_screen_chunks(f.area());

    let title = Paragraph::new(onboarding.category.title.as_str())
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
        .constraints([
            Constraint::Length(4),
            Constraint::Min(4),
            Constraint::Length(5),
        ])
        .split(layout.body_area);

    let description = Paragraph::new(onboarding.category.description.as_str())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("About"));
    f.render_widget(description, body_chunks[0]);

    let list_width = body_chunks[1].width.saturating_sub(2) as usize;
    let setting_items: Vec<ListItem> = if onboarding.category.settings.is_empty() {
        vec![ListItem::new("No settings defined").style(
            Style::default()
                .fg(palette.dim)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        (0..onboarding.category.settings.len())
            .map(|i| {
                let text = format_setting_item(onboarding, i, list_width);
                let style = if i == onboarding.selected_setting {
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

    let settings_list = List::new(setting_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Pick a setting")
                .border_style(Style::default().fg(palette.accent)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(settings_list, body_chunks[1]);

    let mut stats_lines = vec![Line::from(format!(
        "Overall average: {}",
        format_percent(onboarding.overall())
    ))];
    if let Some(latest) = onboarding.averages.last() {
        stats_lines.push(Line::from(format!(
            "Runs recorded: {}",
            onboarding.averages.len()
        )));
        // Rows stored before the date column existed carry a zero timestamp.
        if latest.recorded_at > 0 {
            stats_lines.push(Line::from(format!(
                "Last attempt: {}",
                format_run_date(latest.recorded_at)
            )));
        }
    } else {
        stats_lines.push(Line::from("No runs recorded yet"));
    }
    if onboarding.loading {
        stats_lines.push(Line::from(Span::styled(
            "Preparing questions...",
            Style::default()
                .fg(palette.emphasis)
                .add_modifier(Modifier::ITALIC),
        )));
    } else if onboarding.no_questions {
        stats_lines.push(Line::from(Span::styled(
            "No questions available for this category",
            Style::default().fg(Color::Red),
        )));
    }

    let stats = Paragraph::new(stats_lines)
        .block(Block::default().borders(Borders::ALL).title("Your results"));
    f.render_widget(stats, body_chunks[2]);

    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let help_text = vec![Line::from(vec![
        Span::styled("↑/↓", key_style),
        Span::from(" Setting  "),
        Span::styled("Enter", key_style),
        Span::from(" Start  "),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Average, Category, QuestionSetting};

    #[test]
    fn test_format_run_date_today() {
        let now = chrono::Local::now().timestamp() as u64;
        let formatted = format_run_date(now);
        assert!(formatted.starts_with("Today "));
    }

    #[test]
    fn test_format_run_date_older_is_plain_date() {
        let formatted = format_run_date(1_500_000_000);
        assert_eq!(formatted.len(), 10);
        assert_eq!(formatted.matches('-').count(), 2);
    }

    #[test]
    fn test_format_setting_item_shows_setting_average() {
        let onboarding = OnBoarding {
            category: Category {
                id: "ethics".to_string(),
                title: "Ethics".to_string(),
                description: String::new(),
                icon: String::new(),
                settings: vec![QuestionSetting {
                    questions: 10,
                    minutes: 20,
                }],
            },
            averages: vec![Average {
                setting_index: 0,
                score: 5,
                count: 10,
                category_id: "ethics".to_string(),
                recorded_at: 0,
            }],
            selected_setting: 0,
            loading: false,
            no_questions: false,
        };

        let row = format_setting_item(&onboarding, 0, 40);
        assert!(row.starts_with("10 questions / 20 min"));
        assert!(row.ends_with("50.0%"));
    }
}
