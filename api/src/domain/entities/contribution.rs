//! Contribution heatmap entities

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Length of the trailing heatmap window, today included
pub const HEATMAP_DAYS: usize = 365;

/// One heatmap cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,
    /// 0-4, see [`intensity_level`]
    pub level: u8,
}

impl ContributionDay {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self {
            date,
            count,
            level: intensity_level(count),
        }
    }
}

/// Where the heatmap counts came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatmapSource {
    Events,
    Synthetic,
}

/// Bucket a day's count: 0, 1-2, 3-5, 6-9, 10+.
pub fn intensity_level(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=9 => 3,
        _ => 4,
    }
}
