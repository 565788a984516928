use leptos::*;
use shared::{Category, ChallengeDraft, Difficulty};

use crate::app::use_tracker;
use crate::components::modal::Modal;

const DEFAULT_POINTS: u32 = 50;
const SELECTABLE_DIFFICULTIES: [Difficulty; 3] =
    [Difficulty::Easy, Difficulty::Medium, Difficulty::Advanced];

/// Builds a draft from raw form values. Unknown selections keep the defaults
/// and unparsable points fall back to 50.
fn draft_from_form(
    title: String,
    description: String,
    category: &str,
    difficulty: &str,
    points: &str,
) -> ChallengeDraft {
    let defaults = ChallengeDraft::default();
    ChallengeDraft {
        title,
        description,
        category: category.parse().unwrap_or(defaults.category),
        difficulty: difficulty.parse().unwrap_or(defaults.difficulty),
        points: points.trim().parse().unwrap_or(DEFAULT_POINTS),
    }
}

/// Form for a user-defined challenge. Closes only when the store accepts it.
#[component]
pub fn CustomChallengeModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let tracker = use_tracker();

    let title = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let category = create_rw_signal(Category::Prayer.as_str().to_string());
    let difficulty = create_rw_signal(Difficulty::Easy.as_str().to_string());
    let points = create_rw_signal(DEFAULT_POINTS.to_string());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = draft_from_form(
            title.get_untracked(),
            description.get_untracked(),
            &category.get_untracked(),
            &difficulty.get_untracked(),
            &points.get_untracked(),
        );
        if tracker.add_custom(draft) {
            on_close.call(());
        }
    };

    view! {
        <Modal title="إضافة تحدي جديد" on_close=on_close>
            <form on:submit=on_submit>
                <div class="modal-body">
                    <div class="form-group">
                        <input
                            type="text"
                            class="form-input"
                            placeholder="عنوان التحدي"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <textarea
                            class="form-input"
                            placeholder="وصف التحدي"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <select
                            class="form-select"
                            on:change=move |ev| category.set(event_target_value(&ev))
                        >
                            {Category::ALL.into_iter().map(|c| view! {
                                <option
                                    value=c.as_str()
                                    selected=move || category.get() == c.as_str()
                                >
                                    {c.label()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <select
                            class="form-select"
                            on:change=move |ev| difficulty.set(event_target_value(&ev))
                        >
                            {SELECTABLE_DIFFICULTIES.into_iter().map(|d| view! {
                                <option
                                    value=d.as_str()
                                    selected=move || difficulty.get() == d.as_str()
                                >
                                    {d.label()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <input
                            type="number"
                            class="form-input"
                            min="0"
                            placeholder="النقاط"
                            prop:value=move || points.get()
                            on:input=move |ev| points.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="modal-footer">
                    <button type="submit" class="btn btn-primary add-btn">"إضافة"</button>
                    <button
                        type="button"
                        class="btn btn-outline cancel-btn"
                        on:click=move |_| on_close.call(())
                    >
                        "إلغاء"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
