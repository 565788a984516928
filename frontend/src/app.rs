use chrono::NaiveDateTime;
use gloo_timers::callback::{Interval, Timeout};
use leptos::*;
use leptos_router::*;
use shared::{Achievement, ChallengeDraft, ProgressError, ProgressStore, TrackerConfig};

use crate::logger;
use crate::pages::{stats::StatsPage, tracker::TrackerPage};
use crate::storage::BrowserStorage;
use crate::utils::{now_in_tz, today_in_tz};

const CONFIG_JSON: &str = include_str!("../config.json");
const POPUP_MILLIS: u32 = 3_000;

/// Session state. The store is the single owner of progress; components only
/// read snapshots from it and send intents through the methods below.
#[derive(Clone, Copy)]
pub struct TrackerState {
    pub store: RwSignal<ProgressStore<BrowserStorage>>,
    pub config: StoredValue<TrackerConfig>,
    pub now: RwSignal<NaiveDateTime>,
    pub popup: RwSignal<Option<Achievement>>,
    pub error: RwSignal<Option<String>>,
}

impl TrackerState {
    fn new(store: ProgressStore<BrowserStorage>, config: TrackerConfig) -> Self {
        let now = now_in_tz(config.timezone.as_deref());
        Self {
            store: create_rw_signal(store),
            config: store_value(config),
            now: create_rw_signal(now),
            popup: create_rw_signal(None),
            error: create_rw_signal(None),
        }
    }

    pub fn toggle(&self, challenge_id: i64) {
        self.mutate(|store| store.toggle_completion(challenge_id));
    }

    /// Returns false when the draft was rejected, so the form can stay open.
    pub fn add_custom(&self, draft: ChallengeDraft) -> bool {
        self.mutate(|store| store.add_custom_challenge(draft)).is_some()
    }

    pub fn delete_custom(&self, challenge_id: i64) {
        self.mutate(|store| store.delete_custom_challenge(challenge_id));
    }

    pub fn dismiss_error(&self) {
        self.error.set(None);
    }

    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut ProgressStore<BrowserStorage>) -> Result<T, ProgressError>,
    ) -> Option<T> {
        let mut outcome = None;
        self.store.update(|store| {
            let result = f(store);
            outcome = Some((result, store.take_notifications(), store.storage_healthy()));
        });
        let (result, unlocked, healthy) = outcome?;

        if let Some(latest) = unlocked.last() {
            self.show_achievement(*latest);
        }
        if !healthy {
            self.error.set(Some(STORAGE_WARNING.to_string()));
        }

        match result {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("{}", e);
                self.error.set(Some(error_message(&e).to_string()));
                None
            }
        }
    }

    fn announce_pending(&self) {
        let (unlocked, healthy) = self
            .store
            .try_update(|store| (store.take_notifications(), store.storage_healthy()))
            .unwrap_or((Vec::new(), true));
        if let Some(latest) = unlocked.last() {
            self.show_achievement(*latest);
        }
        if !healthy {
            self.error.set(Some(STORAGE_WARNING.to_string()));
        }
    }

    fn show_achievement(&self, achievement: Achievement) {
        let popup = self.popup;
        popup.set(Some(achievement));
        Timeout::new(POPUP_MILLIS, move || {
            if popup.get_untracked().map(|a| a.id) == Some(achievement.id) {
                popup.set(None);
            }
        })
        .forget();
    }
}

pub fn use_tracker() -> TrackerState {
    expect_context::<TrackerState>()
}

const STORAGE_WARNING: &str = "تعذر حفظ التقدم في المتصفح، سيبقى محفوظاً حتى إغلاق الصفحة فقط";

pub fn error_message(error: &ProgressError) -> &'static str {
    match error {
        ProgressError::ChallengeNotFound(_) => "التحدي غير موجود",
        ProgressError::InvalidChallenge(_) => "يرجى إدخال عنوان التحدي ووصفه",
        ProgressError::NotCustom(_) => "لا يمكن حذف التحديات الأساسية",
    }
}

fn load_config() -> TrackerConfig {
    match TrackerConfig::from_json(CONFIG_JSON) {
        Ok(config) => {
            logger::init(config.level_filter());
            config
        }
        Err(e) => {
            let config = TrackerConfig::default();
            logger::init(config.level_filter());
            log::warn!("Using default configuration: {}", e);
            config
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let timezone = config.timezone.clone();

    let store = ProgressStore::load(BrowserStorage, today_in_tz(timezone.as_deref()));
    log::info!(
        "Loaded progress: {} completed, {} points",
        store.state().completed_challenge_ids.len(),
        store.state().total_points
    );

    let state = TrackerState::new(store, config);
    provide_context(state);

    // Unlocks and storage failures from loading still get announced
    state.announce_pending();

    let tick = Interval::new(1_000, move || {
        state.now.set(now_in_tz(timezone.as_deref()));
    });
    on_cleanup(move || drop(tick));

    view! {
        <Router>
            <main dir="rtl" class="min-h-screen">
                <Routes>
                    <Route path="/" view=TrackerPage />
                    <Route path="/stats" view=StatsPage />
                </Routes>
            </main>
        </Router>
    }
}
