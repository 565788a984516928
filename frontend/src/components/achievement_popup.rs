use leptos::*;

use crate::app::use_tracker;

/// Toast for the most recent unlock; cleared by the session after a few seconds.
#[component]
pub fn AchievementPopup() -> impl IntoView {
    let tracker = use_tracker();

    move || {
        tracker.popup.get().map(|achievement| view! {
            <div class="achievement-popup">
                <div class="achievement-icon">"🏆"</div>
                <div class="achievement-content">
                    <h3>{achievement.title}</h3>
                    <p>{achievement.description}</p>
                    <p class="achievement-points">"+" {achievement.points} " نقطة"</p>
                </div>
            </div>
        })
    }
}
