use leptos::*;
use shared::{Category, CategoryFilter};

fn filter_options() -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
        .collect()
}

/// Row of category buttons above the challenge list.
#[component]
pub fn CategoryFilterBar(filter: RwSignal<CategoryFilter>) -> impl IntoView {
    view! {
        <div class="challenge-filters">
            {filter_options().into_iter().map(|option| {
                view! {
                    <button
                        type="button"
                        class=move || {
                            if filter.get() == option {
                                "challenge-filter active"
                            } else {
                                "challenge-filter"
                            }
                        }
                        on:click=move |_| filter.set(option)
                    >
                        {option.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
