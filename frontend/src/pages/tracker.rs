use leptos::*;
use shared::catalogue::{pick_for_day, DAILY_DUAS, DAILY_TIPS, QURAN_DUAS, WASAYA};
use shared::{Achievement, CategoryFilter, Phase};

use crate::app::use_tracker;
use crate::components::achievement_popup::AchievementPopup;
use crate::components::alert::{Alert, AlertVariant};
use crate::components::badge::{Badge, BadgeVariant};
use crate::components::category_filter::CategoryFilterBar;
use crate::components::challenge_card::ChallengeCard;
use crate::components::countdown_panel::CountdownPanel;
use crate::components::custom_challenge_modal::CustomChallengeModal;
use crate::components::points_display::PointsDisplay;
use crate::components::progress_bar::ProgressBar;
use crate::components::qadr_info::QadrInfo;
use crate::components::stats_report::StatsReport;
use crate::components::text_selector::TextSelector;

#[component]
fn AchievementCard(achievement: Achievement, unlocked: Signal<bool>) -> impl IntoView {
    view! {
        <div class=move || {
            if unlocked.get() {
                "achievement-card unlocked"
            } else {
                "achievement-card locked"
            }
        }>
            <div class="achievement-icon">"🏆"</div>
            <h3>{achievement.title}</h3>
            <p>{achievement.description}</p>
            <Badge variant=BadgeVariant::Achievement>{achievement.points} " نقطة"</Badge>
        </div>
    }
}

#[component]
pub fn TrackerPage() -> impl IntoView {
    let tracker = use_tracker();
    let filter = create_rw_signal(CategoryFilter::All);
    let show_add_modal = create_rw_signal(false);

    let today = tracker.now.get_untracked().date();
    let daily_dua = pick_for_day(DAILY_DUAS, today).copied().unwrap_or_default();
    let daily_tip = pick_for_day(DAILY_TIPS, today).copied().unwrap_or_default();

    let total_points = Signal::derive(move || tracker.store.with(|s| s.state().total_points));
    let snapshot = Signal::derive(move || tracker.store.with(|s| s.snapshot()));
    let progress = Signal::derive(move || snapshot.with(|s| s.progress_percent()));
    let progress_text = Signal::derive(move || snapshot.with(|s| s.progress_text()));
    let window_over = Signal::derive(move || {
        let now = tracker.now.get();
        tracker.config.with_value(|c| c.countdown(now).phase == Phase::AfterWindow)
    });
    let challenges = move || tracker.store.with(|s| s.filtered_challenges(filter.get()));

    view! {
        <header class="page-header">
            <h1 class="page-title">"العشر الأواخر من رمضان"</h1>
            <p class="page-subtitle">"رفيقك لاغتنام الليالي العشر"</p>
            <PointsDisplay points=total_points />
        </header>

        {move || tracker.error.get().map(|message| view! {
            <Alert
                variant=AlertVariant::Error
                on_dismiss=Callback::new(move |_| tracker.dismiss_error())
            >
                {message}
            </Alert>
        })}

        <AchievementPopup />

        <CountdownPanel />
        <Show when=move || window_over.get()>
            <StatsReport />
        </Show>

        <ProgressBar value=progress text=progress_text />

        <TextSelector heading="أدعية القرآن الكريم بالترتيب" prefix="دعاء" texts=QURAN_DUAS />
        <TextSelector
            heading="أفكار ذهبية خلال العشر الأواخر من رمضان"
            prefix="فكرة"
            texts=WASAYA
        />

        <QadrInfo />

        <div class="daily-tip">
            <p>{daily_tip}</p>
        </div>

        <div class="challenges">
            <h2>"التحديات اليومية"</h2>
            <CategoryFilterBar filter=filter />
            <div class="challenge-list">
                <For
                    each=challenges
                    key=|challenge| challenge.id
                    children=|challenge| view! { <ChallengeCard challenge=challenge /> }
                />
            </div>
            <div class="challenges-header">
                <button
                    class="btn btn-primary add-challenge-btn"
                    type="button"
                    on:click=move |_| show_add_modal.set(true)
                >
                    "إضافة تحدي جديد +"
                </button>
            </div>
        </div>

        <Show when=move || show_add_modal.get()>
            <CustomChallengeModal on_close=Callback::new(move |_| show_add_modal.set(false)) />
        </Show>

        <div class="achievements-section">
            <h2>"الإنجازات"</h2>
            <div class="achievements-grid">
                {tracker.store.with_untracked(|s| s.achievements()).iter().map(|achievement| {
                    let id = achievement.id;
                    let unlocked = Signal::derive(move || {
                        tracker.store.with(|s| s.state().is_unlocked(id))
                    });
                    view! { <AchievementCard achievement=*achievement unlocked=unlocked /> }
                }).collect_view()}
            </div>
        </div>

        <div class="dua-section">
            <h2>"دعاء اليوم"</h2>
            <div class="dua-text">{daily_dua}</div>
        </div>

        <nav class="page-footer">
            <a href="/stats" class="btn btn-outline">"تقرير العشر الأواخر"</a>
        </nav>
    }
}
