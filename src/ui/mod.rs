pub mod layout;

mod about;
mod announcements;
mod menu;
mod onboarding;
mod quiz;
mod review;
mod score;
mod settings;

pub use about::draw_about;
pub use announcements::draw_announcements;
pub use layout::{calculate_quiz_chunks, calculate_screen_chunks};
pub use menu::draw_menu;
pub use onboarding::{draw_onboarding, format_run_date};
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use review::draw_review;
pub use score::draw_score;
pub use settings::draw_settings;
