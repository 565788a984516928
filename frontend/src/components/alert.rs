use leptos::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum AlertVariant {
    #[default]
    Info,
    Warning,
    Error,
}

impl AlertVariant {
    fn class(&self) -> &'static str {
        match self {
            AlertVariant::Info => "alert",
            AlertVariant::Warning => "alert alert-warning",
            AlertVariant::Error => "alert alert-error",
        }
    }
}

/// Banner for messages from the progress store.
#[component]
pub fn Alert(
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=variant.class() role="alert">
            {children()}
            {on_dismiss.map(|callback| view! {
                <button
                    class="alert-dismiss"
                    type="button"
                    on:click=move |_| callback.call(())
                >
                    "×"
                </button>
            })}
        </div>
    }
}
