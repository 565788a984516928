//! The progress store: sole owner of completions, points, unlocked
//! achievements and the user's custom challenges.

use chrono::{NaiveDate, Utc};
use thiserror::Error;

use crate::achievements;
use crate::catalogue::{builtin_challenges, ACHIEVEMENTS};
use crate::reset::{self, LoadOutcome};
use crate::stats::{self, Stats};
use crate::storage::{
    self, KeyValueStore, COMPLETED_CHALLENGES_KEY, CUSTOM_CHALLENGES_KEY, TOTAL_POINTS_KEY,
    UNLOCKED_ACHIEVEMENTS_KEY,
};
use crate::types::{
    Achievement, CategoryFilter, Challenge, ChallengeDraft, ProgressSnapshot, ProgressState,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProgressError {
    #[error("Challenge {0} not found")]
    ChallengeNotFound(i64),
    #[error("Invalid challenge: {0}")]
    InvalidChallenge(&'static str),
    #[error("Challenge {0} is not a custom challenge")]
    NotCustom(i64),
}

pub struct ProgressStore<S: KeyValueStore> {
    storage: S,
    builtins: Vec<Challenge>,
    achievements: &'static [Achievement],
    custom: Vec<Challenge>,
    state: ProgressState,
    notifications: Vec<Achievement>,
    storage_healthy: bool,
}

impl<S: KeyValueStore> ProgressStore<S> {
    /// Loads the store with the built-in catalogue, applying the daily reset.
    pub fn load(storage: S, today: NaiveDate) -> Self {
        Self::load_with_catalogue(storage, today, builtin_challenges(), ACHIEVEMENTS)
    }

    pub fn load_with_catalogue(
        mut storage: S,
        today: NaiveDate,
        builtins: Vec<Challenge>,
        achievements: &'static [Achievement],
    ) -> Self {
        let (state, outcome) = reset::load_state(&mut storage, today);
        let reset_persisted = !matches!(outcome, LoadOutcome::Reset { persisted: false });
        let stored_custom: Vec<Challenge> =
            storage::read_json(&storage, CUSTOM_CHALLENGES_KEY).unwrap_or_default();

        let mut custom: Vec<Challenge> = Vec::with_capacity(stored_custom.len());
        for mut challenge in stored_custom {
            let taken = builtins.iter().chain(custom.iter()).any(|c| c.id == challenge.id);
            if taken {
                log::warn!("Skipping stored custom challenge with duplicate id {}", challenge.id);
                continue;
            }
            challenge.is_custom = true;
            custom.push(challenge);
        }

        let mut store = Self {
            storage,
            builtins,
            achievements,
            custom,
            state,
            notifications: Vec::new(),
            storage_healthy: reset_persisted,
        };

        if outcome == LoadOutcome::Restored {
            store.drop_unknown_completions();
            let stored_points = store.state.total_points;
            let points = store.recompute_total_points();
            if points != stored_points {
                log::warn!(
                    "Stored points {} did not match progress, corrected to {}",
                    stored_points,
                    points
                );
            }
            store.persist_progress();
        }

        store.run_achievement_pass();
        store
    }

    // ========================================================================
    // Intents
    // ========================================================================

    /// Flips the completion of a challenge and returns whether it is now completed.
    pub fn toggle_completion(&mut self, challenge_id: i64) -> Result<bool, ProgressError> {
        let points = self
            .find_challenge(challenge_id)
            .map(|c| u64::from(c.points))
            .ok_or(ProgressError::ChallengeNotFound(challenge_id))?;

        let completed = match self
            .state
            .completed_challenge_ids
            .iter()
            .position(|id| *id == challenge_id)
        {
            Some(pos) => {
                self.state.completed_challenge_ids.remove(pos);
                self.state.total_points = self.state.total_points.saturating_sub(points);
                false
            }
            None => {
                self.state.completed_challenge_ids.push(challenge_id);
                self.state.total_points += points;
                true
            }
        };
        log::debug!(
            "Challenge {} {} ({} points total)",
            challenge_id,
            if completed { "completed" } else { "reopened" },
            self.state.total_points
        );

        self.persist_progress();
        self.run_achievement_pass();
        Ok(completed)
    }

    pub fn add_custom_challenge(&mut self, draft: ChallengeDraft) -> Result<Challenge, ProgressError> {
        self.add_custom_challenge_at(draft, Utc::now().timestamp_millis())
    }

    /// Adds a custom challenge whose id derives from `now_millis`, bumped past
    /// every existing id when needed.
    pub fn add_custom_challenge_at(
        &mut self,
        draft: ChallengeDraft,
        now_millis: i64,
    ) -> Result<Challenge, ProgressError> {
        let title = draft.title.trim();
        let description = draft.description.trim();
        if title.is_empty() {
            return Err(ProgressError::InvalidChallenge("title is required"));
        }
        if description.is_empty() {
            return Err(ProgressError::InvalidChallenge("description is required"));
        }

        let max_id = self.all_challenges().map(|c| c.id).max().unwrap_or(0);
        let next_id = max_id
            .checked_add(1)
            .ok_or(ProgressError::InvalidChallenge("no challenge id left"))?;
        let challenge = Challenge {
            id: now_millis.max(next_id),
            title: title.to_string(),
            description: description.to_string(),
            category: draft.category,
            difficulty: draft.difficulty,
            points: draft.points,
            is_qadr_night: false,
            is_custom: true,
        };
        log::debug!("Added custom challenge {}", challenge.id);

        self.custom.push(challenge.clone());
        self.persist_custom();
        Ok(challenge)
    }

    /// Removes a custom challenge, reversing its points if it was completed.
    pub fn delete_custom_challenge(&mut self, challenge_id: i64) -> Result<(), ProgressError> {
        let Some(pos) = self.custom.iter().position(|c| c.id == challenge_id) else {
            if self.builtins.iter().any(|c| c.id == challenge_id) {
                return Err(ProgressError::NotCustom(challenge_id));
            }
            return Err(ProgressError::ChallengeNotFound(challenge_id));
        };

        let removed = self.custom.remove(pos);
        if let Some(done) = self
            .state
            .completed_challenge_ids
            .iter()
            .position(|id| *id == challenge_id)
        {
            self.state.completed_challenge_ids.remove(done);
            self.state.total_points = self
                .state
                .total_points
                .saturating_sub(u64::from(removed.points));
        }
        log::debug!("Deleted custom challenge {}", challenge_id);

        self.persist_progress();
        self.persist_custom();
        Ok(())
    }

    /// Rebuilds the point total from the completed and unlocked ids.
    pub fn recompute_total_points(&mut self) -> u64 {
        let challenge_points: u64 = self
            .state
            .completed_challenge_ids
            .iter()
            .filter_map(|id| self.find_challenge(*id))
            .map(|c| u64::from(c.points))
            .sum();
        let achievement_points =
            achievements::unlocked_points(self.achievements, &self.state.unlocked_achievement_ids);

        self.state.total_points = challenge_points + achievement_points;
        self.state.total_points
    }

    /// Drains the achievements unlocked since the last call, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Achievement> {
        std::mem::take(&mut self.notifications)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            completed_challenge_ids: self.state.completed_challenge_ids.clone(),
            total_points: self.state.total_points,
            unlocked_achievement_ids: self.state.unlocked_achievement_ids.clone(),
            custom_challenges: self.custom.clone(),
            builtin_count: self.builtins.len(),
        }
    }

    pub fn is_completed(&self, challenge_id: i64) -> bool {
        self.state.is_completed(challenge_id)
    }

    /// Built-in challenges first, then custom ones in creation order.
    pub fn all_challenges(&self) -> impl Iterator<Item = &Challenge> {
        self.builtins.iter().chain(self.custom.iter())
    }

    pub fn filtered_challenges(&self, filter: CategoryFilter) -> Vec<Challenge> {
        self.all_challenges()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect()
    }

    pub fn builtin_challenges(&self) -> &[Challenge] {
        &self.builtins
    }

    pub fn custom_challenges(&self) -> &[Challenge] {
        &self.custom
    }

    pub fn achievements(&self) -> &'static [Achievement] {
        self.achievements
    }

    pub fn unlocked_achievements(&self) -> Vec<&'static Achievement> {
        let achievements = self.achievements;
        achievements
            .iter()
            .filter(|a| self.state.is_unlocked(a.id))
            .collect()
    }

    pub fn stats(&self) -> Stats {
        stats::compute(
            &self.builtins,
            &self.state.completed_challenge_ids,
            self.state.total_points,
        )
    }

    /// False once a write to storage has failed; progress then lives only in memory.
    pub fn storage_healthy(&self) -> bool {
        self.storage_healthy
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn find_challenge(&self, challenge_id: i64) -> Option<&Challenge> {
        self.all_challenges().find(|c| c.id == challenge_id)
    }

    fn drop_unknown_completions(&mut self) {
        let known: Vec<i64> = self
            .state
            .completed_challenge_ids
            .iter()
            .copied()
            .filter(|id| self.find_challenge(*id).is_some())
            .collect();
        if known.len() != self.state.completed_challenge_ids.len() {
            log::warn!(
                "Dropping {} completions of challenges that no longer exist",
                self.state.completed_challenge_ids.len() - known.len()
            );
        }
        self.state.completed_challenge_ids = known;
    }

    /// Completed ids that belong to the built-in catalogue, in completion order.
    fn completed_builtin_ids(&self) -> Vec<i64> {
        self.state
            .completed_challenge_ids
            .iter()
            .copied()
            .filter(|id| self.builtins.iter().any(|c| c.id == *id))
            .collect()
    }

    /// One evaluation pass over built-in completions; points credited here are
    /// seen by the next pass only.
    fn run_achievement_pass(&mut self) {
        let completed = self.completed_builtin_ids();
        let unlocked: Vec<Achievement> = achievements::evaluate(
            self.achievements,
            &completed,
            self.state.total_points,
            &self.state.unlocked_achievement_ids,
        )
        .into_iter()
        .copied()
        .collect();

        if unlocked.is_empty() {
            return;
        }

        for achievement in unlocked {
            self.state.unlocked_achievement_ids.push(achievement.id);
            self.state.total_points += u64::from(achievement.points);
            log::info!("Achievement unlocked: {} (+{})", achievement.id, achievement.points);
            self.notifications.push(achievement);
        }
        self.persist_progress();
    }

    fn persist_progress(&mut self) {
        let completed = storage::write_json(
            &mut self.storage,
            COMPLETED_CHALLENGES_KEY,
            &self.state.completed_challenge_ids,
        );
        let points =
            storage::write_json(&mut self.storage, TOTAL_POINTS_KEY, &self.state.total_points);
        let unlocked = storage::write_json(
            &mut self.storage,
            UNLOCKED_ACHIEVEMENTS_KEY,
            &self.state.unlocked_achievement_ids,
        );
        if !(completed && points && unlocked) {
            self.storage_healthy = false;
        }
    }

    fn persist_custom(&mut self) {
        if !storage::write_json(&mut self.storage, CUSTOM_CHALLENGES_KEY, &self.custom) {
            self.storage_healthy = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reset::date_key;
    use crate::storage::{MemoryStore, LAST_UPDATE_DATE_KEY};
    use crate::types::{Category, Difficulty};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 21).unwrap()
    }

    fn fresh() -> ProgressStore<MemoryStore> {
        init_logger();
        ProgressStore::load(MemoryStore::new(), today())
    }

    fn draft(title: &str, points: u32) -> ChallengeDraft {
        ChallengeDraft {
            title: title.to_string(),
            description: "وصف".to_string(),
            category: Category::Charity,
            difficulty: Difficulty::Medium,
            points,
        }
    }

    fn assert_reconciled(store: &mut ProgressStore<MemoryStore>) {
        let live = store.state().total_points;
        assert_eq!(store.recompute_total_points(), live);
    }

    #[test]
    fn test_first_completion_unlocks_first_achievement() {
        let mut store = fresh();

        assert_eq!(store.toggle_completion(1), Ok(true));

        assert_eq!(store.state().total_points, 150);
        assert_eq!(store.state().unlocked_achievement_ids, vec![1]);
        let notified: Vec<i64> = store.take_notifications().iter().map(|a| a.id).collect();
        assert_eq!(notified, vec![1]);
        assert!(store.take_notifications().is_empty());
    }

    #[test]
    fn test_five_completions_settle_at_650() {
        let mut store = fresh();
        for id in [1, 2, 3, 5, 6] {
            assert_eq!(store.toggle_completion(id), Ok(true));
        }

        assert_eq!(store.state().total_points, 650);
        assert_eq!(store.state().unlocked_achievement_ids, vec![1, 2]);
        assert_reconciled(&mut store);
    }

    #[test]
    fn test_all_ten_unlock_every_achievement() {
        let mut store = fresh();
        for id in 1..=10 {
            store.toggle_completion(id).unwrap();
        }

        // 650 for the challenges, 850 for the three achievements
        assert_eq!(store.state().total_points, 1500);
        assert_eq!(store.unlocked_achievements().len(), 3);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut store = fresh();
        store.toggle_completion(1).unwrap();
        let before = store.state().clone();

        assert_eq!(store.toggle_completion(3), Ok(true));
        assert_eq!(store.toggle_completion(3), Ok(false));

        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_unlocks_survive_reopening_challenges() {
        let mut store = fresh();
        store.toggle_completion(1).unwrap();
        store.toggle_completion(1).unwrap();

        assert!(store.state().completed_challenge_ids.is_empty());
        assert_eq!(store.state().unlocked_achievement_ids, vec![1]);
        assert_eq!(store.state().total_points, 100);
        assert_reconciled(&mut store);
    }

    #[test]
    fn test_custom_completion_alone_unlocks_nothing() {
        let mut store = fresh();
        let custom = store.add_custom_challenge_at(draft("زيارة مريض", 30), 1).unwrap();

        assert_eq!(store.toggle_completion(custom.id), Ok(true));

        assert_eq!(store.state().total_points, 30);
        assert!(store.state().unlocked_achievement_ids.is_empty());
        assert!(store.take_notifications().is_empty());
    }

    #[test]
    fn test_five_custom_completions_unlock_nothing() {
        let mut store = fresh();
        for n in 0..5 {
            let custom = store.add_custom_challenge_at(draft("تحدي", 10), 100 + n).unwrap();
            store.toggle_completion(custom.id).unwrap();
        }

        assert_eq!(store.state().completed_challenge_ids.len(), 5);
        assert_eq!(store.state().total_points, 50);
        assert!(store.state().unlocked_achievement_ids.is_empty());
    }

    #[test]
    fn test_custom_completions_do_not_reach_the_next_tier() {
        let mut store = fresh();
        for id in 1..=4 {
            store.toggle_completion(id).unwrap();
        }
        let custom = store.add_custom_challenge_at(draft("تحدي", 10), 1).unwrap();
        store.toggle_completion(custom.id).unwrap();

        assert_eq!(store.state().unlocked_achievement_ids, vec![1]);

        store.toggle_completion(5).unwrap();
        assert_eq!(store.state().unlocked_achievement_ids, vec![1, 2]);
        assert_reconciled(&mut store);
    }

    #[test]
    fn test_toggle_sequences_stay_reconciled() {
        let mut store = fresh();
        let custom = store.add_custom_challenge_at(draft("زيارة مريض", 30), 1).unwrap();
        let mut ids: Vec<i64> = (1..=10).collect();
        ids.push(custom.id);

        let mut seed: u64 = 7;
        for _ in 0..200 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let id = ids[(seed >> 33) as usize % ids.len()];
            store.toggle_completion(id).unwrap();
            assert_reconciled(&mut store);
        }
    }

    #[test]
    fn test_unknown_challenge_is_rejected_without_changes() {
        let mut store = fresh();
        store.toggle_completion(2).unwrap();
        let before = store.state().clone();

        assert_eq!(
            store.toggle_completion(999),
            Err(ProgressError::ChallengeNotFound(999))
        );
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_add_custom_challenge() {
        let mut store = fresh();
        let challenge = store
            .add_custom_challenge_at(draft("  ختم جزء  ", 80), 1742400000000)
            .unwrap();

        assert_eq!(challenge.id, 1742400000000);
        assert_eq!(challenge.title, "ختم جزء");
        assert!(challenge.is_custom);
        assert!(!store.is_completed(challenge.id));
        assert_eq!(store.custom_challenges().len(), 1);
        assert_eq!(store.all_challenges().count(), 11);
    }

    #[test]
    fn test_custom_ids_are_unique_within_same_millisecond() {
        let mut store = fresh();
        let first = store.add_custom_challenge_at(draft("أ", 10), 5000).unwrap();
        let second = store.add_custom_challenge_at(draft("ب", 10), 5000).unwrap();
        let early = store.add_custom_challenge_at(draft("ج", 10), 3).unwrap();

        assert_eq!(first.id, 5000);
        assert_eq!(second.id, 5001);
        assert_eq!(early.id, 5002);
    }

    #[test]
    fn test_custom_id_overflow_is_rejected() {
        init_logger();
        let storage = MemoryStore::new().with_entry(
            CUSTOM_CHALLENGES_KEY,
            r#"[{"id":9223372036854775807,"title":"x","description":"y","category":"dhikr","difficulty":"سهل","points":5}]"#,
        );
        let mut store = ProgressStore::load(storage, today());

        assert!(matches!(
            store.add_custom_challenge_at(draft("عنوان", 10), 1),
            Err(ProgressError::InvalidChallenge(_))
        ));
        assert_eq!(store.custom_challenges().len(), 1);
    }

    #[test]
    fn test_custom_challenge_requires_title_and_description() {
        let mut store = fresh();

        let mut missing_title = draft("", 10);
        missing_title.title = "   ".to_string();
        assert!(matches!(
            store.add_custom_challenge_at(missing_title, 1),
            Err(ProgressError::InvalidChallenge(_))
        ));

        let mut missing_description = draft("عنوان", 10);
        missing_description.description = String::new();
        assert!(matches!(
            store.add_custom_challenge_at(missing_description, 1),
            Err(ProgressError::InvalidChallenge(_))
        ));

        assert!(store.custom_challenges().is_empty());
    }

    #[test]
    fn test_delete_completed_custom_challenge_reverses_points() {
        let mut store = fresh();
        let custom = store.add_custom_challenge_at(draft("صدقة سر", 80), 1).unwrap();
        store.toggle_completion(2).unwrap();
        store.toggle_completion(custom.id).unwrap();
        let before = store.state().total_points;

        store.delete_custom_challenge(custom.id).unwrap();

        assert_eq!(store.state().total_points, before - 80);
        assert!(!store.is_completed(custom.id));
        assert!(store.custom_challenges().is_empty());
        assert_reconciled(&mut store);
    }

    #[test]
    fn test_delete_open_custom_challenge_keeps_points() {
        let mut store = fresh();
        let custom = store.add_custom_challenge_at(draft("صدقة سر", 80), 1).unwrap();
        store.toggle_completion(2).unwrap();
        let before = store.state().total_points;

        store.delete_custom_challenge(custom.id).unwrap();

        assert_eq!(store.state().total_points, before);
    }

    #[test]
    fn test_delete_rejects_builtin_and_unknown_ids() {
        let mut store = fresh();
        assert_eq!(store.delete_custom_challenge(1), Err(ProgressError::NotCustom(1)));
        assert_eq!(
            store.delete_custom_challenge(424242),
            Err(ProgressError::ChallengeNotFound(424242))
        );
        assert_eq!(store.builtin_challenges().len(), 10);
    }

    #[test]
    fn test_progress_is_persisted_in_browser_layout() {
        let mut store = fresh();
        store.toggle_completion(1).unwrap();
        store.add_custom_challenge_at(draft("قيام", 20), 1742400000000).unwrap();

        let storage = store.storage();
        assert_eq!(storage.get(COMPLETED_CHALLENGES_KEY), Some("[1]"));
        assert_eq!(storage.get(TOTAL_POINTS_KEY), Some("150"));
        assert_eq!(storage.get(UNLOCKED_ACHIEVEMENTS_KEY), Some("[1]"));
        assert_eq!(storage.get(LAST_UPDATE_DATE_KEY), Some("Fri Mar 21 2025"));

        let custom = storage.get(CUSTOM_CHALLENGES_KEY).unwrap();
        assert!(custom.contains("\"isCustom\":true"));
        assert!(custom.contains("\"id\":1742400000000"));
    }

    #[test]
    fn test_reload_same_day_restores_everything() {
        let mut store = fresh();
        let custom = store.add_custom_challenge_at(draft("قيام", 20), 9000).unwrap();
        store.toggle_completion(4).unwrap();
        store.toggle_completion(custom.id).unwrap();
        let snapshot = store.snapshot();

        let reloaded = ProgressStore::load(store.into_storage(), today());

        assert_eq!(reloaded.snapshot(), snapshot);
        assert!(reloaded.is_completed(custom.id));
    }

    #[test]
    fn test_reload_next_day_clears_progress_but_keeps_custom_challenges() {
        let mut store = fresh();
        store.add_custom_challenge_at(draft("قيام", 20), 9000).unwrap();
        store.toggle_completion(1).unwrap();

        let tomorrow = today().succ_opt().unwrap();
        let reloaded = ProgressStore::load(store.into_storage(), tomorrow);

        assert!(reloaded.state().completed_challenge_ids.is_empty());
        assert!(reloaded.state().unlocked_achievement_ids.is_empty());
        assert_eq!(reloaded.state().total_points, 0);
        assert_eq!(reloaded.custom_challenges().len(), 1);
        assert_eq!(
            reloaded.storage().get(LAST_UPDATE_DATE_KEY),
            Some(date_key(tomorrow).as_str())
        );
    }

    #[test]
    fn test_load_repairs_stale_points_and_dangling_ids() {
        init_logger();
        let storage = MemoryStore::new()
            .with_entry(COMPLETED_CHALLENGES_KEY, "[1,2,555]")
            .with_entry(TOTAL_POINTS_KEY, "9999")
            .with_entry(UNLOCKED_ACHIEVEMENTS_KEY, "[1]")
            .with_entry(LAST_UPDATE_DATE_KEY, &date_key(today()));

        let store = ProgressStore::load(storage, today());

        assert_eq!(store.state().completed_challenge_ids, vec![1, 2]);
        assert_eq!(store.state().total_points, 225);
        assert_eq!(store.storage().get(TOTAL_POINTS_KEY), Some("225"));
    }

    #[test]
    fn test_load_unlocks_achievements_missing_from_storage() {
        init_logger();
        let storage = MemoryStore::new()
            .with_entry(COMPLETED_CHALLENGES_KEY, "[1,2,3,5,6]")
            .with_entry(TOTAL_POINTS_KEY, "300")
            .with_entry(LAST_UPDATE_DATE_KEY, &date_key(today()));

        let mut store = ProgressStore::load(storage, today());

        assert_eq!(store.state().unlocked_achievement_ids, vec![1, 2]);
        assert_eq!(store.state().total_points, 650);
        assert_eq!(store.take_notifications().len(), 2);
    }

    #[test]
    fn test_load_skips_custom_challenges_colliding_with_builtins() {
        init_logger();
        let storage = MemoryStore::new().with_entry(
            CUSTOM_CHALLENGES_KEY,
            r#"[{"id":3,"title":"x","description":"y","category":"dhikr","difficulty":"سهل","points":5},
                {"id":77,"title":"x","description":"y","category":"dhikr","difficulty":"سهل","points":5}]"#,
        );

        let store = ProgressStore::load(storage, today());

        assert_eq!(store.custom_challenges().len(), 1);
        assert_eq!(store.custom_challenges()[0].id, 77);
        assert!(store.custom_challenges()[0].is_custom);
    }

    #[test]
    fn test_malformed_custom_list_is_ignored() {
        init_logger();
        let storage = MemoryStore::new().with_entry(CUSTOM_CHALLENGES_KEY, "[{\"id\":");
        let store = ProgressStore::load(storage, today());
        assert!(store.custom_challenges().is_empty());
    }

    #[test]
    fn test_write_failures_keep_in_memory_state() {
        init_logger();
        let mut store = ProgressStore::load(MemoryStore::read_only(), today());
        assert!(!store.storage_healthy());

        assert_eq!(store.toggle_completion(1), Ok(true));

        assert_eq!(store.state().total_points, 150);
        assert!(!store.storage_healthy());
        assert!(store.storage().get(COMPLETED_CHALLENGES_KEY).is_none());
    }

    #[test]
    fn test_successful_load_reports_healthy_storage() {
        let store = fresh();
        assert!(store.storage_healthy());

        let reloaded = ProgressStore::load(store.into_storage(), today());
        assert!(reloaded.storage_healthy());
    }

    #[test]
    fn test_filtered_challenges_include_custom() {
        let mut store = fresh();
        store.add_custom_challenge_at(draft("إطعام", 40), 1).unwrap();

        let charity = store.filtered_challenges(CategoryFilter::Only(Category::Charity));
        let ids: Vec<i64> = charity.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 8, 11]);
        assert_eq!(store.filtered_challenges(CategoryFilter::All).len(), 11);
    }

    #[test]
    fn test_stats_reflect_progress() {
        let mut store = fresh();
        for id in [1, 5] {
            store.toggle_completion(id).unwrap();
        }
        let stats = store.stats();

        assert_eq!(stats.completed_count, 2);
        assert_eq!(stats.completion_rate, 20);
        assert_eq!(stats.total_points, 225);
    }
}
