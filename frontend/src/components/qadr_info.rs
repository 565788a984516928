use leptos::*;
use shared::catalogue::QADR_NIGHT_INFO;

#[component]
pub fn QadrInfo() -> impl IntoView {
    view! {
        <div class="qadr-info">
            <h2>"ليلة القدر"</h2>
            <p>"ليلة القدر خير من ألف شهر، تحرَّ ليلة القدر في الليالي الوترية من العشر الأواخر."</p>
            <div class="qadr-night-info">
                {QADR_NIGHT_INFO.iter().map(|section| view! {
                    <div class="qadr-section">
                        <h3>{section.title}</h3>
                        <ul>
                            {section.points.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
                        </ul>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
