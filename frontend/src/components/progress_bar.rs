use leptos::*;

/// Width of the filled part, as an inline style.
fn bar_style(value: f32) -> String {
    format!(
        "width: {:.1}%; transition: width 0.3s;",
        value.clamp(0.0, 100.0)
    )
}

/// Completion bar with its caption underneath.
#[component]
pub fn ProgressBar(
    #[prop(into)] value: Signal<f32>,
    #[prop(into)] text: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-bar" style=move || bar_style(value.get())></div>
            <div class="progress-text">{move || text.get()}</div>
        </div>
    }
}
