use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::models::{About, Announcement, Category, Question, QuestionSetting};

/// Root of the content store, relative to the working directory.
pub const CONTENT_DIR: &str = "content";

pub fn content_dir() -> PathBuf {
    PathBuf::from(CONTENT_DIR)
}

/// The whole store is reachable or it isn't; screens fall back to their
/// unavailable state when it is missing.
pub fn is_available(dir: &Path) -> bool {
    dir.is_dir()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CategoryDoc {
    id: String,
    title: String,
    description: String,
    icon: String,
    settings: Vec<SettingDoc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingDoc {
    questions: usize,
    minutes: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QuestionDoc {
    question: String,
    correct_choices: Vec<String>,
    wrong_choices: Vec<String>,
}

/// Reads a JSON array, treating a missing file or a parse failure as an
/// empty collection. Content problems never bubble up as errors.
fn read_array<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let Ok(raw) = fs::read_to_string(path) else {
        return Vec::new();
    };
    serde_json::from_str(&raw).unwrap_or_default()
}

pub fn load_categories(dir: &Path) -> Vec<Category> {
    read_array::<CategoryDoc>(&dir.join("categories.json"))
        .into_iter()
        .filter(|doc| !doc.id.trim().is_empty() && !doc.title.trim().is_empty())
        .map(|doc| Category {
            id: doc.id,
            title: doc.title,
            description: doc.description,
            icon: doc.icon,
            settings: doc
                .settings
                .into_iter()
                .filter(|setting| setting.questions > 0 && setting.minutes > 0)
                .map(|setting| QuestionSetting {
                    questions: setting.questions,
                    minutes: setting.minutes,
                })
                .collect(),
        })
        .filter(|category| !category.settings.is_empty())
        .collect()
}

/// Full question pool of one category. Documents without a prompt or
/// without any correct choice are skipped.
pub fn load_questions(dir: &Path, category_id: &str) -> Vec<Question> {
    let path = dir.join("questions").join(format!("{category_id}.json"));
    read_array::<QuestionDoc>(&path)
        .into_iter()
        .filter_map(|doc| {
            let prompt = doc.question.trim();
            if prompt.is_empty() {
                return None;
            }
            let correct: BTreeSet<String> = doc
                .correct_choices
                .into_iter()
                .filter(|choice| !choice.trim().is_empty())
                .collect();
            if correct.is_empty() {
                return None;
            }
            let wrong: BTreeSet<String> = doc
                .wrong_choices
                .into_iter()
                .filter(|choice| !choice.trim().is_empty())
                .collect();
            Some(Question::new(prompt.to_string(), correct, wrong))
        })
        .collect()
}

/// Draws a quiz's worth of questions: the whole pool, shuffled, cut down
/// to `amount`. Fewer than `amount` available means all of them are used.
pub fn fetch_questions(dir: &Path, category_id: &str, amount: usize) -> Vec<Question> {
    let mut questions = load_questions(dir, category_id);
    questions.shuffle(&mut rand::thread_rng());
    questions.truncate(amount);
    questions
}

pub fn load_announcements(dir: &Path) -> Vec<Announcement> {
    read_array::<Announcement>(&dir.join("announcements.json"))
        .into_iter()
        .filter(|item| !item.title.trim().is_empty() || !item.message.trim().is_empty())
        .collect()
}

pub fn load_about(dir: &Path) -> Option<About> {
    let raw = fs::read_to_string(dir.join("about.json")).ok()?;
    serde_json::from_str(&raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_content(dir: &Path, name: &str, body: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, body).unwrap();
    }

    #[test]
    fn test_is_available() {
        let dir = tempdir().unwrap();
        assert!(is_available(dir.path()));
        assert!(!is_available(&dir.path().join("missing")));
    }

    #[test]
    fn test_load_categories() {
        let dir = tempdir().unwrap();
        write_content(
            dir.path(),
            "categories.json",
            r#"[
                {
                    "id": "ethics",
                    "title": "Professional Ethics",
                    "description": "Values and dilemmas",
                    "icon": "E",
                    "settings": [
                        { "questions": 10, "minutes": 15 },
                        { "questions": 20, "minutes": 30 }
                    ]
                }
            ]"#,
        );

        let categories = load_categories(dir.path());
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, "ethics");
        assert_eq!(categories[0].settings.len(), 2);
        assert_eq!(categories[0].settings[0].questions, 10);
        assert_eq!(categories[0].settings[1].minutes, 30);
    }

    #[test]
    fn test_load_categories_defaults_missing_fields() {
        let dir = tempdir().unwrap();
        write_content(
            dir.path(),
            "categories.json",
            r#"[
                {
                    "id": "casework",
                    "title": "Casework",
                    "settings": [{ "questions": 5, "minutes": 10 }]
                }
            ]"#,
        );

        let categories = load_categories(dir.path());
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].description, "");
        assert_eq!(categories[0].icon, "");
        assert_eq!(categories[0].settings.len(), 1);
    }

    #[test]
    fn test_load_categories_skips_unusable_documents() {
        let dir = tempdir().unwrap();
        write_content(
            dir.path(),
            "categories.json",
            r#"[
                { "title": "No id", "settings": [{ "questions": 5, "minutes": 5 }] },
                { "id": "no-settings", "title": "No settings", "settings": [] },
                { "id": "zeroed", "title": "Zeroed", "settings": [{ "questions": 0, "minutes": 5 }] },
                { "id": "untimed", "title": "Untimed", "settings": [{ "questions": 5 }] },
                { "id": "ok", "title": "Usable", "settings": [{ "questions": 5, "minutes": 5 }] }
            ]"#,
        );

        let categories = load_categories(dir.path());
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, "ok");
    }

    #[test]
    fn test_load_categories_malformed_json_is_empty() {
        let dir = tempdir().unwrap();
        write_content(dir.path(), "categories.json", "{ not json ]");

        assert!(load_categories(dir.path()).is_empty());
    }

    #[test]
    fn test_load_categories_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        assert!(load_categories(dir.path()).is_empty());
    }

    #[test]
    fn test_load_questions() {
        let dir = tempdir().unwrap();
        write_content(
            dir.path(),
            "questions/ethics.json",
            r#"[
                {
                    "question": "Which value is core to the profession?",
                    "correct_choices": ["Service"],
                    "wrong_choices": ["Profit", "Prestige"]
                },
                {
                    "question": "Select every mandated reporter duty.",
                    "correct_choices": ["Report suspected abuse", "Document the report"],
                    "wrong_choices": ["Confront the abuser"]
                }
            ]"#,
        );

        let questions = load_questions(dir.path(), "ethics");
        assert_eq!(questions.len(), 2);
        assert!(!questions[0].is_multi());
        assert!(questions[1].is_multi());
        assert_eq!(questions[0].choices.len(), 3);
    }

    #[test]
    fn test_load_questions_skips_unusable_documents() {
        let dir = tempdir().unwrap();
        write_content(
            dir.path(),
            "questions/ethics.json",
            r#"[
                { "question": "", "correct_choices": ["x"], "wrong_choices": [] },
                { "question": "No correct choice", "correct_choices": [], "wrong_choices": ["y"] },
                { "question": "Blank correct choice", "correct_choices": ["  "], "wrong_choices": ["y"] },
                { "question": "Fine", "correct_choices": ["x"], "wrong_choices": ["y"] }
            ]"#,
        );

        let questions = load_questions(dir.path(), "ethics");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt, "Fine");
    }

    #[test]
    fn test_fetch_questions_truncates_to_amount() {
        let dir = tempdir().unwrap();
        let docs: Vec<String> = (0..8)
            .map(|i| {
                format!(
                    r#"{{ "question": "Q{i}", "correct_choices": ["right {i}"], "wrong_choices": ["wrong {i}"] }}"#
                )
            })
            .collect();
        write_content(
            dir.path(),
            "questions/ethics.json",
            &format!("[{}]", docs.join(",")),
        );

        let drawn = fetch_questions(dir.path(), "ethics", 3);
        assert_eq!(drawn.len(), 3);

        let pool = load_questions(dir.path(), "ethics");
        for question in &drawn {
            assert!(pool.contains(question));
        }
    }

    #[test]
    fn test_fetch_questions_with_small_pool_returns_all() {
        let dir = tempdir().unwrap();
        write_content(
            dir.path(),
            "questions/ethics.json",
            r#"[{ "question": "Only one", "correct_choices": ["x"], "wrong_choices": [] }]"#,
        );

        assert_eq!(fetch_questions(dir.path(), "ethics", 10).len(), 1);
        assert!(fetch_questions(dir.path(), "missing", 10).is_empty());
    }

    #[test]
    fn test_load_announcements_filters_blank_entries() {
        let dir = tempdir().unwrap();
        write_content(
            dir.path(),
            "announcements.json",
            r#"[
                { "title": "New question bank", "message": "Ethics pool grew.", "posted": "2024-03-01" },
                { "title": "", "message": "" }
            ]"#,
        );

        let announcements = load_announcements(dir.path());
        assert_eq!(announcements.len(), 1);
        assert_eq!(announcements[0].title, "New question bank");
    }

    #[test]
    fn test_load_about() {
        let dir = tempdir().unwrap();
        write_content(
            dir.path(),
            "about.json",
            r#"{ "title": "Exam Reviewer", "message": "Practice companion.", "link": "https://example.org" }"#,
        );

        let about = load_about(dir.path()).unwrap();
        assert_eq!(about.title, "Exam Reviewer");
        assert_eq!(about.link, "https://example.org");

        assert!(load_about(&dir.path().join("missing")).is_none());
    }
}
