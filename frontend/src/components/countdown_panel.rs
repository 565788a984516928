use leptos::*;
use shared::{to_arabic_digits, Countdown};

use crate::app::use_tracker;

fn units(countdown: &Countdown) -> [(i64, &'static str); 4] {
    [
        (countdown.days, "أيام"),
        (countdown.hours, "ساعات"),
        (countdown.minutes, "دقائق"),
        (countdown.seconds, "ثواني"),
    ]
}

/// Days/hours/minutes/seconds until the window opens or closes.
/// Re-renders on every tick of the session clock.
#[component]
pub fn CountdownPanel() -> impl IntoView {
    let tracker = use_tracker();
    let countdown = Signal::derive(move || {
        let now = tracker.now.get();
        tracker.config.with_value(|config| config.countdown(now))
    });

    view! {
        <div class="countdown-section">
            <h2 class="countdown-title">{move || countdown.get().phase.headline()}</h2>
            <div class="countdown-grid">
                {move || {
                    units(&countdown.get())
                        .into_iter()
                        .map(|(value, label)| view! {
                            <div class="countdown-item">
                                <div class="countdown-value">{to_arabic_digits(value)}</div>
                                <div class="countdown-label">{label}</div>
                            </div>
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Phase;

    #[test]
    fn test_units_order() {
        let countdown = Countdown {
            days: 3,
            hours: 2,
            minutes: 1,
            seconds: 0,
            phase: Phase::WithinWindow,
        };
        let values: Vec<i64> = units(&countdown).iter().map(|(v, _)| *v).collect();
        assert_eq!(values, vec![3, 2, 1, 0]);
    }
}
