use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Challenge Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Prayer,
    Quran,
    Charity,
    Dhikr,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Prayer,
        Category::Quran,
        Category::Charity,
        Category::Dhikr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Prayer => "prayer",
            Category::Quran => "quran",
            Category::Charity => "charity",
            Category::Dhikr => "dhikr",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Prayer => "الصلاة",
            Category::Quran => "القرآن",
            Category::Charity => "الصدقة",
            Category::Dhikr => "الذكر",
        }
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prayer" => Ok(Category::Prayer),
            "quran" => Ok(Category::Quran),
            "charity" => Ok(Category::Charity),
            "dhikr" => Ok(Category::Dhikr),
            _ => Err(()),
        }
    }
}

/// Stored with the Arabic labels so existing browser data keeps loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "سهل", alias = "easy")]
    Easy,
    #[serde(rename = "متوسط", alias = "medium")]
    Medium,
    #[serde(rename = "متقدم", alias = "advanced")]
    Advanced,
    #[serde(rename = "ليلة القدر", alias = "qadr-night")]
    QadrNight,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Advanced,
        Difficulty::QadrNight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Advanced => "advanced",
            Difficulty::QadrNight => "qadr-night",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "سهل",
            Difficulty::Medium => "متوسط",
            Difficulty::Advanced => "متقدم",
            Difficulty::QadrNight => "ليلة القدر",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "easy" | "سهل" => Ok(Difficulty::Easy),
            "medium" | "متوسط" => Ok(Difficulty::Medium),
            "advanced" | "متقدم" => Ok(Difficulty::Advanced),
            "qadr-night" | "ليلة القدر" => Ok(Difficulty::QadrNight),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub points: u32,
    #[serde(default)]
    pub is_qadr_night: bool,
    #[serde(default)]
    pub is_custom: bool,
}

/// Form payload for a user-created challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub points: u32,
}

impl Default for ChallengeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: Category::Prayer,
            difficulty: Difficulty::Easy,
            points: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, challenge: &Challenge) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => challenge.category == *category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "الكل",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

// ============================================================================
// Achievement Types
// ============================================================================

/// Predicate over the completed challenge ids and the current point total.
pub type AchievementCondition = fn(&[i64], u64) -> bool;

#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub id: i64,
    pub title: &'static str,
    pub description: &'static str,
    pub points: u32,
    pub condition: AchievementCondition,
}

impl Achievement {
    pub fn is_met(&self, completed: &[i64], total_points: u64) -> bool {
        (self.condition)(completed, total_points)
    }
}

impl PartialEq for Achievement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

// ============================================================================
// Progress Types
// ============================================================================

/// Mutable session state. `total_points` is a cached projection of the two id lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    pub completed_challenge_ids: Vec<i64>,
    pub total_points: u64,
    pub unlocked_achievement_ids: Vec<i64>,
    pub last_reset_date: String,
}

impl ProgressState {
    pub fn is_completed(&self, challenge_id: i64) -> bool {
        self.completed_challenge_ids.contains(&challenge_id)
    }

    pub fn is_unlocked(&self, achievement_id: i64) -> bool {
        self.unlocked_achievement_ids.contains(&achievement_id)
    }
}

/// Read-only copy of the store handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub completed_challenge_ids: Vec<i64>,
    pub total_points: u64,
    pub unlocked_achievement_ids: Vec<i64>,
    pub custom_challenges: Vec<Challenge>,
    pub builtin_count: usize,
}

impl ProgressSnapshot {
    pub fn is_completed(&self, challenge_id: i64) -> bool {
        self.completed_challenge_ids.contains(&challenge_id)
    }

    /// Completed count over the built-in catalogue size, clamped to 0..=100.
    pub fn progress_percent(&self) -> f32 {
        if self.builtin_count == 0 {
            return 0.0;
        }
        let ratio = self.completed_challenge_ids.len() as f32 / self.builtin_count as f32;
        (ratio * 100.0).clamp(0.0, 100.0)
    }

    pub fn progress_text(&self) -> String {
        format!(
            "أكملت {} من {} تحديات",
            self.completed_challenge_ids.len(),
            self.builtin_count
        )
    }
}

// ============================================================================
// Devotional Content Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevotionalText {
    pub id: u32,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoSection {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

// ============================================================================
// Tests
// ============================================================================
