use leptos::*;
use shared::Stats;

use crate::app::use_tracker;
use crate::components::points_display::PointsCard;

fn category_line(label: &str, count: usize) -> String {
    format!("{}: {} تحديات", label, count)
}

/// Summary of the window: completion count and rate, points, and per-category counts.
#[component]
pub fn StatsReport() -> impl IntoView {
    let tracker = use_tracker();
    let stats = Signal::derive(move || tracker.store.with(|s| s.stats()));

    view! {
        <div class="stats-report card">
            <div class="stats-header">
                <h2>"تقرير العشر الأواخر"</h2>
                <p>"إحصائيات أدائك خلال العشر الأواخر"</p>
            </div>
            {move || {
                let Stats {
                    completed_count,
                    completion_rate,
                    total_points,
                    average_points_per_day,
                    category_stats,
                    ..
                } = stats.get();
                view! {
                    <div class="stats-grid">
                        <PointsCard value=completed_count.to_string() label="التحديات المكتملة" />
                        <PointsCard value=format!("{}%", completion_rate) label="نسبة الإنجاز" />
                        <PointsCard value=total_points.to_string() label="إجمالي النقاط" />
                        <PointsCard value=average_points_per_day.to_string() label="متوسط النقاط اليومي" />
                    </div>
                    <div class="stats-summary">
                        <h3>"توزيع التحديات حسب الفئة"</h3>
                        <ul>
                            {category_stats
                                .into_iter()
                                .map(|(category, count)| view! {
                                    <li>{category_line(category.label(), count)}</li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                }
            }}
        </div>
    }
}
