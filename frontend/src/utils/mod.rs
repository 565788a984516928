pub mod timezone;

pub use timezone::{local_time, now_in_tz, today_in_tz};
