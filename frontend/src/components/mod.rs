pub mod achievement_popup;
pub mod alert;
pub mod badge;
pub mod category_filter;
pub mod challenge_card;
pub mod countdown_panel;
pub mod custom_challenge_modal;
pub mod modal;
pub mod points_display;
pub mod progress_bar;
pub mod qadr_info;
pub mod stats_report;
pub mod text_selector;
