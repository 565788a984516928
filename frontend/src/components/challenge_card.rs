use leptos::*;
use shared::Challenge;

use crate::app::use_tracker;
use crate::components::badge::{Badge, BadgeVariant};
use crate::components::points_display::PointsBadge;

fn card_class(completed: bool, qadr_night: bool) -> String {
    let mut classes = vec!["challenge-item"];
    if completed {
        classes.push("completed");
    }
    if qadr_night {
        classes.push("qadr-night");
    }
    classes.join(" ")
}

/// One challenge row: checkbox, text, difficulty and points.
/// Custom challenges also get a delete button.
#[component]
pub fn ChallengeCard(challenge: Challenge) -> impl IntoView {
    let tracker = use_tracker();
    let id = challenge.id;
    let is_custom = challenge.is_custom;
    let qadr_night = challenge.is_qadr_night;
    let variant = BadgeVariant::for_challenge(&challenge);

    let completed = Signal::derive(move || tracker.store.with(|s| s.is_completed(id)));
    let checkbox_id = format!("challenge-{}", id);

    view! {
        <div
            class=move || card_class(completed.get(), qadr_night)
            data-category=challenge.category.as_str()
        >
            <label class="challenge-checkbox" for=checkbox_id.clone()>
                <input
                    type="checkbox"
                    id=checkbox_id.clone()
                    class="challenge-check"
                    prop:checked=move || completed.get()
                    on:change=move |_| tracker.toggle(id)
                />
                <span class="checkmark"></span>
            </label>
            <div class="challenge-content">
                <div class="challenge-title">{challenge.title.clone()}</div>
                <div class="challenge-description">{challenge.description.clone()}</div>
                <div class="challenge-meta">
                    <Badge variant=variant>{challenge.difficulty.label()}</Badge>
                    <PointsBadge points=challenge.points />
                </div>
            </div>
            {is_custom.then(|| view! {
                <button
                    class="delete-challenge-btn"
                    type="button"
                    title="حذف التحدي"
                    on:click=move |_| tracker.delete_custom(id)
                >
                    "×"
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_class() {
        assert_eq!(card_class(false, false), "challenge-item");
        assert_eq!(card_class(true, false), "challenge-item completed");
        assert_eq!(card_class(true, true), "challenge-item completed qadr-night");
    }
}
