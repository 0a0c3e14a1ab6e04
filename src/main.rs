use std::io;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rusqlite::Connection;

use exam_reviewer::app::{App, AppState};
use exam_reviewer::loader::{spawn_loader, LoadRequest, LoadResponse};
use exam_reviewer::{content, db, logger, prefs, session, ui};

fn main() -> io::Result<()> {
    logger::init();

    let conn = db::init_db().map_err(io::Error::other)?;

    let settings_path = prefs::settings_path();
    let user_data = prefs::load(&settings_path);

    let (request_tx, request_rx) = unbounded();
    let (response_tx, response_rx) = unbounded();
    let _loader = spawn_loader(content::content_dir(), response_tx, request_rx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(user_data, settings_path);
    let _ = request_tx.send(LoadRequest::Categories);
    let _ = request_tx.send(LoadRequest::Announcements);
    let _ = request_tx.send(LoadRequest::About);

    let result = run_app(&mut terminal, &mut app, &conn, &request_tx, &response_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    conn: &Connection,
    request_tx: &Sender<LoadRequest>,
    response_rx: &Receiver<LoadResponse>,
) -> io::Result<()> {
    loop {
        while let Ok(response) = response_rx.try_recv() {
            match response {
                LoadResponse::Categories(categories) => {
                    let averages = db::average::load_all_averages(conn).unwrap_or_default();
                    app.set_categories(categories, &averages);
                }
                LoadResponse::Unavailable => app.content_unavailable(),
                LoadResponse::Announcements(announcements) => app.set_announcements(announcements),
                LoadResponse::About(about) => app.about = about,
                LoadResponse::Questions {
                    category_id,
                    setting_index,
                    questions,
                } => app.begin_quiz(&category_id, setting_index, questions),
            }
        }

        if app.countdown_expired() {
            app.finish_quiz(conn);
        }

        terminal.draw(|f| {
            let palette = app.prefs.palette();
            match app.state {
                AppState::Menu => ui::draw_menu(f, app, &palette),
                AppState::OnBoarding => ui::draw_onboarding(f, app, &palette),
                AppState::Quiz => ui::draw_quiz(f, app, &palette),
                AppState::QuizQuitConfirm => ui::draw_quit_confirmation(f, &palette),
                AppState::Score => ui::draw_score(f, app, &palette),
                AppState::Review => ui::draw_review(f, app, &palette),
                AppState::Announcements => ui::draw_announcements(f, app, &palette),
                AppState::About => ui::draw_about(f, app, &palette),
                AppState::Settings => ui::draw_settings(f, app, &palette),
            }
        })?;

        if event::poll(Duration::from_millis(200))?
            && let Event::Key(key) = event::read()?
        {
            session::handle_key(app, key, conn, request_tx);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
