use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use rusqlite::Connection;
use tokio::sync::watch;

use crate::answers::{AnswerSheet, Selections};
use crate::db;
use crate::logger;
use crate::models::{
    About, Announcement, Average, Category, CategoryWithAverage, Choice, Question,
    QuestionSetting, overall_average,
};
use crate::prefs::UserData;
use crate::timer::Countdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    OnBoarding,
    Quiz,
    QuizQuitConfirm,
    Score,
    Review,
    Announcements,
    About,
    Settings,
}

/// Browse screen content. Starts out `Loading` until the loader answers.
#[derive(Debug)]
pub enum CategoriesState {
    Loading,
    Ready(Vec<CategoryWithAverage>),
    Unavailable,
}

/// Category detail shown before a quiz starts: description, the available
/// settings and the averages scored so far.
#[derive(Debug)]
pub struct OnBoarding {
    pub category: Category,
    pub averages: Vec<Average>,
    pub selected_setting: usize,
    pub loading: bool,
    pub no_questions: bool,
}

impl OnBoarding {
    pub fn setting(&self) -> Option<&QuestionSetting> {
        self.category.settings.get(self.selected_setting)
    }

    /// Average across the runs taken under one specific setting.
    pub fn setting_average(&self, index: usize) -> f64 {
        let records: Vec<Average> = self
            .averages
            .iter()
            .filter(|record| record.setting_index == index)
            .cloned()
            .collect();
        overall_average(&records)
    }

    pub fn overall(&self) -> f64 {
        overall_average(&self.averages)
    }
}

/// An active quiz run. The answer sheet lives exactly as long as the run,
/// so no selection can leak into the next one.
#[derive(Debug)]
pub struct QuizSession {
    pub category: Category,
    pub setting_index: usize,
    pub setting: QuestionSetting,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub cursor: usize,
    pub sheet: AnswerSheet,
    pub selections: watch::Receiver<Selections>,
    pub countdown: Countdown,
}

impl QuizSession {
    pub fn new(
        category: Category,
        setting_index: usize,
        setting: QuestionSetting,
        questions: Vec<Question>,
    ) -> Self {
        let sheet = AnswerSheet::new();
        let selections = sheet.subscribe();
        let countdown = Countdown::minutes(setting.minutes);
        Self {
            category,
            setting_index,
            setting,
            questions,
            current_index: 0,
            cursor: 0,
            sheet,
            selections,
            countdown,
        }
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Records the highlighted option for the current question, replacing
    /// or toggling depending on the question kind.
    pub fn pick_current(&mut self) {
        let Some(question) = self.current() else {
            return;
        };
        let Some(option) = question.choices.get(self.cursor) else {
            return;
        };
        let choice = Choice::new(question.clone(), option.clone());
        self.sheet.record(choice);
    }

    /// Highlights choice `index` and records it in one step.
    pub fn jump_pick(&mut self, index: usize) {
        if let Some(question) = self.current()
            && index < question.choices.len()
        {
            self.cursor = index;
            self.pick_current();
        }
    }

    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn cursor_down(&mut self) {
        if let Some(question) = self.current()
            && self.cursor + 1 < question.choices.len()
        {
            self.cursor += 1;
        }
    }

    pub fn next_question(&mut self) {
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.cursor = 0;
        }
    }

    pub fn previous_question(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.cursor = 0;
        }
    }

    pub fn answered(&self) -> usize {
        self.sheet.answered()
    }
}

/// Everything the score and review screens need once the run is over.
#[derive(Debug)]
pub struct ScoreBoard {
    pub category: Category,
    pub setting: QuestionSetting,
    pub questions: Vec<Question>,
    pub selections: Selections,
    pub score: usize,
    pub total: usize,
    pub time_used: Duration,
    pub time_total: Duration,
    /// Storage failure to surface on the score screen, verbatim.
    pub notice: Option<String>,
}

impl ScoreBoard {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.score as f64 / self.total as f64 * 100.0
        }
    }
}

pub struct App {
    pub state: AppState,
    pub categories: CategoriesState,
    pub selected_category_index: usize,
    pub focused_panel: usize,
    pub announcements: Vec<Announcement>,
    pub selected_announcement_index: usize,
    pub about: Option<About>,
    pub onboarding: Option<OnBoarding>,
    pub quiz: Option<QuizSession>,
    pub score: Option<ScoreBoard>,
    pub review_scroll: u16,
    pub settings_cursor: usize,
    pub prefs: UserData,
    pub settings_path: PathBuf,
    pub should_quit: bool,
}

impl App {
    pub fn new(prefs: UserData, settings_path: PathBuf) -> Self {
        Self {
            state: AppState::Menu,
            categories: CategoriesState::Loading,
            selected_category_index: 0,
            focused_panel: 0,
            announcements: Vec::new(),
            selected_announcement_index: 0,
            about: None,
            onboarding: None,
            quiz: None,
            score: None,
            review_scroll: 0,
            settings_cursor: 0,
            prefs,
            settings_path,
            should_quit: false,
        }
    }

    pub fn categories(&self) -> &[CategoryWithAverage] {
        match &self.categories {
            CategoriesState::Ready(list) => list,
            _ => &[],
        }
    }

    pub fn selected_category(&self) -> Option<&CategoryWithAverage> {
        self.categories().get(self.selected_category_index)
    }

    /// Joins loaded categories with their stored runs into the browse list.
    pub fn set_categories(
        &mut self,
        categories: Vec<Category>,
        averages: &HashMap<String, Vec<Average>>,
    ) {
        let list: Vec<CategoryWithAverage> = categories
            .into_iter()
            .map(|category| {
                let average = averages
                    .get(&category.id)
                    .map(|records| overall_average(records))
                    .unwrap_or(0.0);
                CategoryWithAverage { category, average }
            })
            .collect();
        if self.selected_category_index >= list.len() {
            self.selected_category_index = list.len().saturating_sub(1);
        }
        self.categories = CategoriesState::Ready(list);
    }

    pub fn content_unavailable(&mut self) {
        self.categories = CategoriesState::Unavailable;
    }

    pub fn set_announcements(&mut self, announcements: Vec<Announcement>) {
        if self.selected_announcement_index >= announcements.len() {
            self.selected_announcement_index = announcements.len().saturating_sub(1);
        }
        self.announcements = announcements;
    }

    /// Opens the category detail for the highlighted category.
    pub fn open_onboarding(&mut self, averages: Vec<Average>) {
        let Some(selected) = self.selected_category() else {
            return;
        };
        self.onboarding = Some(OnBoarding {
            category: selected.category.clone(),
            averages,
            selected_setting: 0,
            loading: false,
            no_questions: false,
        });
        self.state = AppState::OnBoarding;
    }

    /// Consumes a questions response. Stale deliveries are dropped: the
    /// screen was left, or the category or setting no longer matches the
    /// fetch in flight.
    pub fn begin_quiz(
        &mut self,
        category_id: &str,
        setting_index: usize,
        questions: Vec<Question>,
    ) {
        if self.state != AppState::OnBoarding {
            return;
        }
        let Some(onboarding) = self.onboarding.as_mut() else {
            return;
        };
        if !onboarding.loading
            || onboarding.category.id != category_id
            || onboarding.selected_setting != setting_index
        {
            return;
        }
        onboarding.loading = false;
        if questions.is_empty() {
            onboarding.no_questions = true;
            return;
        }
        let Some(setting) = onboarding.category.settings.get(setting_index).copied() else {
            return;
        };
        let category = onboarding.category.clone();
        self.quiz = Some(QuizSession::new(category, setting_index, setting, questions));
        self.state = AppState::Quiz;
    }

    /// True while an active countdown has run out, in which case the run
    /// is scored no matter what the user was doing.
    pub fn countdown_expired(&self) -> bool {
        matches!(self.state, AppState::Quiz | AppState::QuizQuitConfirm)
            && self
                .quiz
                .as_ref()
                .is_some_and(|quiz| quiz.countdown.is_finished())
    }

    /// Scores the active quiz, stores the run and moves to the score
    /// screen. A failed insert becomes a notice there instead of an abort.
    pub fn finish_quiz(&mut self, conn: &Connection) {
        let Some(quiz) = self.quiz.take() else {
            return;
        };
        let score = quiz.sheet.score();
        let total = quiz.questions.len();
        let record = Average {
            setting_index: quiz.setting_index,
            score: score as u32,
            count: total as u32,
            category_id: quiz.category.id.clone(),
            recorded_at: db::average::now(),
        };
        let notice = match db::average::insert_average(conn, &record) {
            Ok(()) => None,
            Err(e) => {
                logger::log(&format!("failed to store run: {}", e));
                Some(e.to_string())
            }
        };
        let selections = quiz.selections.borrow().clone();
        self.score = Some(ScoreBoard {
            time_used: quiz.countdown.elapsed(),
            time_total: quiz.countdown.total(),
            category: quiz.category,
            setting: quiz.setting,
            questions: quiz.questions,
            selections,
            score,
            total,
            notice,
        });
        self.review_scroll = 0;
        self.state = AppState::Score;
    }

    /// Throws the active run away without scoring or storing it.
    pub fn abandon_quiz(&mut self) {
        if let Some(quiz) = self.quiz.as_mut() {
            quiz.sheet.clear();
        }
        self.quiz = None;
    }

    /// Back to the browse screen with every per-run state dropped and a
    /// fresh categories load pending.
    pub fn refresh_menu(&mut self) {
        self.abandon_quiz();
        self.score = None;
        self.onboarding = None;
        self.categories = CategoriesState::Loading;
        self.state = AppState::Menu;
    }

    /// Back to the browse screen without reloading anything.
    pub fn return_to_menu(&mut self) {
        self.onboarding = None;
        self.state = AppState::Menu;
    }
}
