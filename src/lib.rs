pub mod api;
pub mod changes;
pub mod config;
pub mod fake_history;
pub mod grade;
pub mod hiscores;
pub mod metrics;
pub mod models;
pub mod time_series;
