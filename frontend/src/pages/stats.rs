use leptos::*;

use crate::components::stats_report::StatsReport;

#[component]
pub fn StatsPage() -> impl IntoView {
    view! {
        <StatsReport />
        <nav class="page-footer">
            <a href="/" class="btn btn-outline">"← العودة إلى التحديات"</a>
        </nav>
    }
}
