use std::collections::{BTreeSet, HashMap};

use tokio::sync::watch;

use crate::models::{Choice, Question};

/// Snapshot of every question's selected options.
pub type Selections = HashMap<Question, BTreeSet<String>>;

/// In-memory record of what the user has picked during the active quiz.
///
/// Every mutation publishes the full question-to-selections mapping on a
/// watch channel, so subscribers always observe the latest snapshot, even
/// when they subscribe after the mutation happened.
#[derive(Debug)]
pub struct AnswerSheet {
    selected: Selections,
    publisher: watch::Sender<Selections>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        let (publisher, _) = watch::channel(Selections::new());
        Self {
            selected: Selections::new(),
            publisher,
        }
    }

    /// Receiver that immediately holds the current snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Selections> {
        self.publisher.subscribe()
    }

    /// Records a pick, branching on the question kind: multi-answer
    /// questions toggle the option, single-answer questions replace
    /// whatever was selected before.
    pub fn record(&mut self, choice: Choice) {
        if choice.question.is_multi() {
            self.toggle_multiple(choice);
        } else {
            self.select_single(choice);
        }
    }

    /// Replaces the question's selection with the one given option, so a
    /// single-answer question never holds more than one pick.
    pub fn select_single(&mut self, choice: Choice) {
        let entry = self.selected.entry(choice.question).or_default();
        entry.clear();
        entry.insert(choice.option);
        self.publish();
    }

    /// Adds the option if absent, removes it if present.
    pub fn toggle_multiple(&mut self, choice: Choice) {
        let entry = self.selected.entry(choice.question).or_default();
        if !entry.remove(&choice.option) {
            entry.insert(choice.option);
        }
        self.publish();
    }

    /// Number of questions whose selection matches the correct set exactly.
    /// Partial matches and supersets count nothing.
    pub fn score(&self) -> usize {
        self.selected
            .iter()
            .filter(|(question, picked)| **picked == question.correct)
            .count()
    }

    pub fn selected_for(&self, question: &Question) -> Option<&BTreeSet<String>> {
        self.selected.get(question)
    }

    /// Number of questions with at least one option picked.
    pub fn answered(&self) -> usize {
        self.selected.values().filter(|set| !set.is_empty()).count()
    }

    /// Drops every recorded selection and resets the published snapshot.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.publish();
    }

    fn publish(&self) {
        self.publisher.send_replace(self.selected.clone());
    }
}

impl Default for AnswerSheet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(prompt: &str) -> Question {
        Question::new(
            prompt.to_string(),
            ["right"].iter().map(|s| s.to_string()).collect(),
            ["wrong a", "wrong b"].iter().map(|s| s.to_string()).collect(),
        )
    }

    fn multi(prompt: &str) -> Question {
        Question::new(
            prompt.to_string(),
            ["right a", "right b"].iter().map(|s| s.to_string()).collect(),
            ["wrong"].iter().map(|s| s.to_string()).collect(),
        )
    }

    fn picked(sheet: &AnswerSheet, question: &Question) -> Vec<String> {
        sheet
            .selected_for(question)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_single_choice_keeps_only_latest_pick() {
        let mut sheet = AnswerSheet::new();
        let question = single("Q1");

        sheet.select_single(Choice::new(question.clone(), "wrong a"));
        sheet.select_single(Choice::new(question.clone(), "wrong b"));
        sheet.select_single(Choice::new(question.clone(), "right"));

        assert_eq!(picked(&sheet, &question), vec!["right".to_string()]);
    }

    #[test]
    fn test_toggle_parity_decides_membership() {
        let mut sheet = AnswerSheet::new();
        let question = multi("Q1");

        for _ in 0..3 {
            sheet.toggle_multiple(Choice::new(question.clone(), "right a"));
        }
        assert_eq!(picked(&sheet, &question), vec!["right a".to_string()]);

        sheet.toggle_multiple(Choice::new(question.clone(), "right a"));
        assert!(picked(&sheet, &question).is_empty());
    }

    #[test]
    fn test_record_replaces_for_single_and_toggles_for_multi() {
        let mut sheet = AnswerSheet::new();
        let one = single("Q1");
        let many = multi("Q2");

        sheet.record(Choice::new(one.clone(), "wrong a"));
        sheet.record(Choice::new(one.clone(), "right"));
        assert_eq!(picked(&sheet, &one), vec!["right".to_string()]);

        sheet.record(Choice::new(many.clone(), "right a"));
        sheet.record(Choice::new(many.clone(), "right b"));
        sheet.record(Choice::new(many.clone(), "right b"));
        assert_eq!(picked(&sheet, &many), vec!["right a".to_string()]);
    }

    #[test]
    fn test_score_counts_exact_matches_only() {
        let mut sheet = AnswerSheet::new();
        let exact = single("Q1");
        let missed = single("Q2");
        let partial = multi("Q3");
        let superset = multi("Q4");

        sheet.record(Choice::new(exact.clone(), "right"));
        sheet.record(Choice::new(missed.clone(), "wrong a"));
        sheet.record(Choice::new(partial.clone(), "right a"));
        sheet.record(Choice::new(superset.clone(), "right a"));
        sheet.record(Choice::new(superset.clone(), "right b"));
        sheet.record(Choice::new(superset.clone(), "wrong"));

        assert_eq!(sheet.score(), 1);

        sheet.record(Choice::new(partial.clone(), "right b"));
        assert_eq!(sheet.score(), 2);

        sheet.record(Choice::new(superset.clone(), "wrong"));
        assert_eq!(sheet.score(), 3);
    }

    #[test]
    fn test_unanswered_question_scores_nothing() {
        let sheet = AnswerSheet::new();
        assert_eq!(sheet.score(), 0);
    }

    #[test]
    fn test_clear_empties_map_and_published_snapshot() {
        let mut sheet = AnswerSheet::new();
        let receiver = sheet.subscribe();
        let question = single("Q1");

        sheet.record(Choice::new(question.clone(), "right"));
        assert_eq!(receiver.borrow().len(), 1);

        sheet.clear();

        assert_eq!(sheet.score(), 0);
        assert!(sheet.selected_for(&question).is_none());
        assert!(receiver.borrow().is_empty());
    }

    #[test]
    fn test_late_subscriber_sees_current_snapshot() {
        let mut sheet = AnswerSheet::new();
        let question = single("Q1");
        sheet.record(Choice::new(question.clone(), "right"));

        let receiver = sheet.subscribe();
        let snapshot = receiver.borrow();
        let expected: BTreeSet<String> = ["right".to_string()].into_iter().collect();
        assert_eq!(snapshot.get(&question), Some(&expected));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_answered_counts_nonempty_selections() {
        let mut sheet = AnswerSheet::new();
        let one = single("Q1");
        let many = multi("Q2");

        sheet.record(Choice::new(one.clone(), "right"));
        sheet.record(Choice::new(many.clone(), "right a"));
        assert_eq!(sheet.answered(), 2);

        sheet.record(Choice::new(many.clone(), "right a"));
        assert_eq!(sheet.answered(), 1);
    }
}
