use crate::catalogue::WINDOW_NIGHTS;
use crate::types::{Category, Challenge};

/// Figures for the end-of-window report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub total_challenges: usize,
    pub completed_count: usize,
    /// Rounded percentage. Custom completions count toward it, so it can pass 100.
    pub completion_rate: u64,
    pub total_points: u64,
    pub average_points_per_day: u64,
    /// Completed built-in challenges per category.
    pub category_stats: Vec<(Category, usize)>,
}

fn rounded_div(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    (numerator + denominator / 2) / denominator
}

pub fn compute(builtins: &[Challenge], completed: &[i64], total_points: u64) -> Stats {
    let total_challenges = builtins.len();
    let completed_count = completed.len();

    let category_stats = Category::ALL
        .iter()
        .map(|category| {
            let count = builtins
                .iter()
                .filter(|c| c.category == *category && completed.contains(&c.id))
                .count();
            (*category, count)
        })
        .collect();

    Stats {
        total_challenges,
        completed_count,
        completion_rate: rounded_div(completed_count as u64 * 100, total_challenges as u64),
        total_points,
        average_points_per_day: rounded_div(total_points, WINDOW_NIGHTS),
        category_stats,
    }
}
