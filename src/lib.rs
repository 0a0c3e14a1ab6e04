pub mod answers;
pub mod app;
pub mod content;
pub mod db;
pub mod loader;
pub mod logger;
pub mod models;
pub mod platform;
pub mod prefs;
pub mod session;
pub mod timer;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use answers::{AnswerSheet, Selections};
pub use app::{App, AppState, CategoriesState, OnBoarding, QuizSession, ScoreBoard};
pub use loader::{spawn_loader, LoadRequest, LoadResponse};
pub use models::{
    About, Announcement, Average, Category, CategoryWithAverage, Choice, Question, QuestionSetting,
};
pub use session::handle_key;
pub use timer::{format_clock, Countdown};
pub use ui::{
    draw_about, draw_announcements, draw_menu, draw_onboarding, draw_quit_confirmation, draw_quiz,
    draw_review, draw_score, draw_settings,
};
