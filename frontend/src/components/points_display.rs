use leptos::*;

/// Points pill shown on each challenge card.
#[component]
pub fn PointsBadge(points: u32) -> impl IntoView {
    view! {
        <span class="challenge-points">
            "★ " {points} " نقطة"
        </span>
    }
}

/// Running total in the page header.
#[component]
pub fn PointsDisplay(#[prop(into)] points: Signal<u64>) -> impl IntoView {
    view! {
        <div class="points-display">
            <span>"★ " {move || points.get()} " نقطة"</span>
        </div>
    }
}

#[component]
pub fn PointsCard(#[prop(into)] value: String, label: &'static str) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}
