use crate::types::Achievement;

/// Achievements newly satisfied by the current progress, ascending by id.
///
/// One pass only: points the caller credits for these unlocks are not seen
/// until the next call.
pub fn evaluate<'a>(
    achievements: &'a [Achievement],
    completed: &[i64],
    total_points: u64,
    already_unlocked: &[i64],
) -> Vec<&'a Achievement> {
    let mut unlocked: Vec<&Achievement> = achievements
        .iter()
        .filter(|a| !already_unlocked.contains(&a.id))
        .filter(|a| a.is_met(completed, total_points))
        .collect();
    unlocked.sort_by_key(|a| a.id);
    unlocked
}

/// Sum of the bonus points for the given unlocked ids. Unknown ids count as zero.
pub fn unlocked_points(achievements: &[Achievement], unlocked: &[i64]) -> u64 {
    unlocked
        .iter()
        .filter_map(|id| achievements.iter().find(|a| a.id == *id))
        .map(|a| u64::from(a.points))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::ACHIEVEMENTS;

    fn ids(unlocked: &[&Achievement]) -> Vec<i64> {
        unlocked.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_nothing_unlocks_on_empty_progress() {
        assert!(evaluate(ACHIEVEMENTS, &[], 0, &[]).is_empty());
    }

    #[test]
    fn test_first_completion_unlocks_first_achievement() {
        assert_eq!(ids(&evaluate(ACHIEVEMENTS, &[1], 50, &[])), vec![1]);
    }

    #[test]
    fn test_multiple_unlocks_in_id_order() {
        let completed: Vec<i64> = (1..=10).collect();
        assert_eq!(ids(&evaluate(ACHIEVEMENTS, &completed, 700, &[])), vec![1, 2, 3]);
    }

    #[test]
    fn test_evaluate_is_idempotent_once_unlocked() {
        let completed = [1, 2, 3, 4, 5];
        let first = ids(&evaluate(ACHIEVEMENTS, &completed, 300, &[]));
        assert_eq!(first, vec![1, 2]);

        let second = evaluate(ACHIEVEMENTS, &completed, 650, &first);
        assert!(second.is_empty());
    }

    #[test]
    fn test_unordered_definitions_still_unlock_by_id() {
        let reversed: Vec<Achievement> = ACHIEVEMENTS.iter().rev().copied().collect();
        let completed: Vec<i64> = (1..=10).collect();
        assert_eq!(ids(&evaluate(&reversed, &completed, 0, &[])), vec![1, 2, 3]);
    }

    #[test]
    fn test_unlocked_points() {
        assert_eq!(unlocked_points(ACHIEVEMENTS, &[1, 2]), 350);
        assert_eq!(unlocked_points(ACHIEVEMENTS, &[3, 99]), 500);
        assert_eq!(unlocked_points(ACHIEVEMENTS, &[]), 0);
    }
}
