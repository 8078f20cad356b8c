use std::env;

use crate::models::Mode;
use crate::time_series::ZoomWindow;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub mode: Mode,
    pub zoom: ZoomWindow,
    pub demo_days: u32,
    pub demo_seed: u64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Keys4,
            zoom: ZoomWindow::FULL,
            demo_days: 60,
            demo_seed: 42,
        }
    }
}

impl ChartConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let mode = lookup("QT_MODE")
            .and_then(|val| Mode::parse(&val))
            .unwrap_or(defaults.mode);
        let zoom_start = lookup("QT_ZOOM_START")
            .and_then(|val| val.trim().parse::<f64>().ok())
            .unwrap_or(defaults.zoom.start_pct);
        let zoom_end = lookup("QT_ZOOM_END")
            .and_then(|val| val.trim().parse::<f64>().ok())
            .unwrap_or(defaults.zoom.end_pct);
        let demo_days = lookup("QT_DEMO_DAYS")
            .and_then(|val| val.trim().parse::<u32>().ok())
            .unwrap_or(defaults.demo_days)
            .clamp(2, 365);
        let demo_seed = lookup("QT_DEMO_SEED")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(defaults.demo_seed);
        Self {
            mode,
            zoom: ZoomWindow::new(zoom_start, zoom_end),
            demo_days,
            demo_seed,
        }
    }
}
