//! Once-per-day progress reset, checked when the store is loaded.
//!
//! The check runs only at load time. A page left open across midnight keeps
//! the previous day's progress until it is reloaded.

use chrono::NaiveDate;

use crate::storage::{
    self, KeyValueStore, COMPLETED_CHALLENGES_KEY, LAST_UPDATE_DATE_KEY, TOTAL_POINTS_KEY,
    UNLOCKED_ACHIEVEMENTS_KEY,
};
use crate::types::ProgressState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Stored progress was from today and has been restored.
    Restored,
    /// Stored progress was from another day, or missing, and was cleared.
    /// `persisted` is false when any of the cleared values failed to save.
    Reset { persisted: bool },
}

/// The browser's default date string for a day, e.g. `Fri Mar 21 2025`.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Restores today's progress, or clears and re-stamps storage on a new day.
pub fn load_state<S>(store: &mut S, today: NaiveDate) -> (ProgressState, LoadOutcome)
where
    S: KeyValueStore + ?Sized,
{
    let today_key = date_key(today);
    let last_update = storage::read_string(&*store, LAST_UPDATE_DATE_KEY);

    if last_update.as_deref() != Some(today_key.as_str()) {
        log::info!(
            "Starting a new day ({}), previous progress from {:?} cleared",
            today_key,
            last_update
        );
        let writes = [
            storage::write_json(store, COMPLETED_CHALLENGES_KEY, &Vec::<i64>::new()),
            storage::write_json(store, TOTAL_POINTS_KEY, &0u64),
            storage::write_json(store, UNLOCKED_ACHIEVEMENTS_KEY, &Vec::<i64>::new()),
            storage::write_string(store, LAST_UPDATE_DATE_KEY, &today_key),
        ];
        let persisted = writes.iter().all(|ok| *ok);

        let state = ProgressState {
            last_reset_date: today_key,
            ..ProgressState::default()
        };
        return (state, LoadOutcome::Reset { persisted });
    }

    let completed: Vec<i64> =
        storage::read_json(&*store, COMPLETED_CHALLENGES_KEY).unwrap_or_default();
    let unlocked: Vec<i64> =
        storage::read_json(&*store, UNLOCKED_ACHIEVEMENTS_KEY).unwrap_or_default();
    let total_points: u64 = storage::read_json(&*store, TOTAL_POINTS_KEY).unwrap_or_default();

    let state = ProgressState {
        completed_challenge_ids: dedup_preserving_order(completed),
        total_points,
        unlocked_achievement_ids: dedup_preserving_order(unlocked),
        last_reset_date: today_key,
    };
    log::debug!(
        "Restored {} completed challenges and {} achievements",
        state.completed_challenge_ids.len(),
        state.unlocked_achievement_ids.len()
    );
    (state, LoadOutcome::Restored)
}

fn dedup_preserving_order(ids: Vec<i64>) -> Vec<i64> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}
