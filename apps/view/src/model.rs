use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Activity snapshot of one region as served by `GET /region/{region}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionSnapshot {
    pub name: String,
    pub spotters: Vec<String>,
    pub num_spotter_spots: u64,
    pub band_activities: Vec<BandActivity>,
    pub call_info: HashMap<String, CallInfo>,
}

/// Callsigns heard on one band, grouped by trailing time window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandActivity {
    pub band: String,
    pub active_1min: Vec<String>,
    pub active_5min: Vec<String>,
    pub active_15min: Vec<String>,
}

impl BandActivity {
    pub fn callsigns(&self, window: ActivityWindow) -> &[String] {
        match window {
            ActivityWindow::OneMinute => &self.active_1min,
            ActivityWindow::FiveMinutes => &self.active_5min,
            ActivityWindow::FifteenMinutes => &self.active_15min,
        }
    }
}

/// Per-callsign telemetry collected from the spots in a region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallInfo {
    /// Spotted frequencies in kHz
    pub frequencies: Vec<f64>,
    pub wpm: Vec<u32>,
    pub db: Vec<i32>,
}

/// Body of `GET /frequency/{hz}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyLookupResult {
    pub callsigns: Vec<String>,
}

/// Body of `GET /regions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionList {
    pub names: Vec<String>,
}

/// Body of `GET /stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerStats {
    pub running_since: String,
    pub total_spots: u64,
    pub total_regions: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityWindow {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
}

impl ActivityWindow {
    pub const ALL: [Self; 3] = [Self::OneMinute, Self::FiveMinutes, Self::FifteenMinutes];

    pub const fn label(self) -> &'static str {
        match self {
            Self::OneMinute => "1 min",
            Self::FiveMinutes => "5 min",
            Self::FifteenMinutes => "15 min",
        }
    }
}
