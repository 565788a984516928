use leptos::*;
use shared::{Challenge, Difficulty};

#[derive(Default, Clone, Copy, PartialEq)]
pub enum BadgeVariant {
    #[default]
    Difficulty,
    QadrNight,
    Custom,
    Achievement,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Difficulty => "challenge-badge",
            BadgeVariant::QadrNight => "challenge-badge badge-qadr",
            BadgeVariant::Custom => "challenge-badge badge-custom",
            BadgeVariant::Achievement => "challenge-badge badge-achievement",
        }
    }

    pub fn for_challenge(challenge: &Challenge) -> Self {
        if challenge.is_custom {
            BadgeVariant::Custom
        } else if challenge.is_qadr_night || challenge.difficulty == Difficulty::QadrNight {
            BadgeVariant::QadrNight
        } else {
            BadgeVariant::Difficulty
        }
    }
}

#[component]
pub fn Badge(#[prop(optional)] variant: BadgeVariant, children: Children) -> impl IntoView {
    view! {
        <span class=variant.class()>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::catalogue::builtin_challenges;

    #[test]
    fn test_badge_variant_for_challenge() {
        let challenges = builtin_challenges();
        assert!(matches!(
            BadgeVariant::for_challenge(&challenges[0]),
            BadgeVariant::Difficulty
        ));
        assert!(matches!(
            BadgeVariant::for_challenge(&challenges[3]),
            BadgeVariant::QadrNight
        ));

        let mut custom = challenges[0].clone();
        custom.is_custom = true;
        assert_eq!(BadgeVariant::for_challenge(&custom).class(), "challenge-badge badge-custom");
    }
}
