use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use rand::seq::SliceRandom;
use serde::Deserialize;

/// One exam question with its full choice pool.
///
/// `choices` is the shuffled display order, derived once at construction.
/// Equality and hashing cover only the structural content (prompt and the
/// two choice sets) so a question keeps working as a map key no matter how
/// its choices were shuffled.
#[derive(Debug, Clone)]
pub struct Question {
    pub prompt: String,
    pub correct: BTreeSet<String>,
    pub wrong: BTreeSet<String>,
    pub choices: Vec<String>,
}

impl Question {
    pub fn new(prompt: String, correct: BTreeSet<String>, wrong: BTreeSet<String>) -> Self {
        let mut choices: Vec<String> = correct.iter().chain(wrong.iter()).cloned().collect();
        choices.shuffle(&mut rand::thread_rng());
        Self {
            prompt,
            correct,
            wrong,
            choices,
        }
    }

    /// Questions with more than one correct choice accumulate selections
    /// instead of replacing them.
    pub fn is_multi(&self) -> bool {
        self.correct.len() > 1
    }
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.prompt == other.prompt && self.correct == other.correct && self.wrong == other.wrong
    }
}

impl Eq for Question {}

impl Hash for Question {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.prompt.hash(state);
        self.correct.hash(state);
        self.wrong.hash(state);
    }
}

/// A single picked option for a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub question: Question,
    pub option: String,
}

impl Choice {
    pub fn new(question: Question, option: impl Into<String>) -> Self {
        Self {
            question,
            option: option.into(),
        }
    }
}

/// One way a quiz can be taken: how many questions and how much time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionSetting {
    pub questions: usize,
    pub minutes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub settings: Vec<QuestionSetting>,
}

/// Category paired with the overall average across all of its stored runs.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWithAverage {
    pub category: Category,
    pub average: f64,
}

/// One finished run: how many questions were answered correctly out of how
/// many asked, under which setting of which category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Average {
    pub setting_index: usize,
    pub score: u32,
    pub count: u32,
    pub category_id: String,
    pub recorded_at: u64,
}

/// Folds a set of runs into a single percentage:
/// (sum of scores / sum of question counts) * 100, or 0 when no questions
/// were ever asked.
pub fn overall_average(records: &[Average]) -> f64 {
    let total: u32 = records.iter().map(|record| record.count).sum();
    if total == 0 {
        return 0.0;
    }
    let score: u32 = records.iter().map(|record| record.score).sum();
    f64::from(score) / f64::from(total) * 100.0
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Announcement {
    pub title: String,
    pub message: String,
    pub posted: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct About {
    pub title: String,
    pub message: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn run(score: u32, count: u32) -> Average {
        Average {
            setting_index: 0,
            score,
            count,
            category_id: "casework".to_string(),
            recorded_at: 0,
        }
    }

    #[test]
    fn test_question_choices_cover_both_sets() {
        let question = Question::new(
            "Pick the primary colors".to_string(),
            set(&["red", "blue"]),
            set(&["green", "purple"]),
        );

        assert_eq!(question.choices.len(), 4);
        for option in ["red", "blue", "green", "purple"] {
            assert!(question.choices.iter().any(|c| c == option));
        }
    }

    #[test]
    fn test_question_equality_ignores_display_order() {
        let a = Question::new("Q".to_string(), set(&["x"]), set(&["y", "z"]));
        let mut b = a.clone();
        b.choices.reverse();

        assert_eq!(a, b);
    }

    #[test]
    fn test_question_usable_as_map_key_after_reshuffle() {
        let original = Question::new("Q".to_string(), set(&["x"]), set(&["y", "z"]));
        let reshuffled = Question::new("Q".to_string(), set(&["x"]), set(&["y", "z"]));

        let mut map = HashMap::new();
        map.insert(original, 7usize);
        assert_eq!(map.get(&reshuffled), Some(&7));
    }

    #[test]
    fn test_is_multi() {
        let single = Question::new("Q".to_string(), set(&["x"]), set(&["y"]));
        let multi = Question::new("Q".to_string(), set(&["x", "y"]), set(&["z"]));

        assert!(!single.is_multi());
        assert!(multi.is_multi());
    }

    #[test]
    fn test_overall_average_perfect_runs() {
        let records: Vec<Average> = (0..10).map(|_| run(10, 10)).collect();
        assert_eq!(overall_average(&records), 100.0);
    }

    #[test]
    fn test_overall_average_zero_counts() {
        let records: Vec<Average> = (0..10).map(|_| run(0, 0)).collect();
        assert_eq!(overall_average(&records), 0.0);
    }

    #[test]
    fn test_overall_average_empty() {
        assert_eq!(overall_average(&[]), 0.0);
    }

    #[test]
    fn test_overall_average_mixed_runs() {
        let records = vec![run(5, 10), run(10, 10)];
        assert_eq!(overall_average(&records), 75.0);
    }
}
