use leptos::*;
use shared::catalogue::find_text;
use shared::DevotionalText;

/// Numbered dropdown over a fixed list of texts, showing the selected one below.
#[component]
pub fn TextSelector(
    heading: &'static str,
    prefix: &'static str,
    texts: &'static [DevotionalText],
) -> impl IntoView {
    let selected = create_rw_signal(texts.first().map(|t| t.id).unwrap_or_default());
    let current_text = move || {
        find_text(texts, selected.get())
            .or_else(|| texts.first())
            .map(|t| t.text)
            .unwrap_or_default()
    };

    view! {
        <div class="dua-section">
            <h2>{heading}</h2>
            <div class="dua-selector">
                <select
                    class="dua-select"
                    on:change=move |ev| {
                        if let Ok(id) = event_target_value(&ev).parse::<u32>() {
                            selected.set(id);
                        }
                    }
                >
                    {texts.iter().map(|t| {
                        let id = t.id;
                        view! {
                            <option value=id.to_string() selected=move || selected.get() == id>
                                {format!("{} {}", prefix, id)}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
            <div class="dua-text">{current_text}</div>
        </div>
    }
}
