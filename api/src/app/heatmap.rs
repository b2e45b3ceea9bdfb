//! Contribution heatmap
//!
//! One cell per UTC calendar day over the trailing [`HEATMAP_DAYS`] window,
//! oldest first and ending today.

use chrono::{Days, NaiveDate};

use crate::domain::entities::{ContributionDay, Event, HeatmapSource, HEATMAP_DAYS};
use crate::domain::ports::RandomSource;

/// Fraction of the window after which synthetic days are biased upward
const RECENT_FRACTION: f64 = 0.7;

/// Dates in the window, oldest first
pub fn heatmap_window(today: NaiveDate) -> Vec<NaiveDate> {
    (0..HEATMAP_DAYS as u64)
        .rev()
        .map(|back| today - Days::new(back))
        .collect()
}

/// Build the heatmap from events, or synthesize one when there are none.
pub fn build_heatmap<R>(
    events: &[Event],
    today: NaiveDate,
    random: &R,
) -> (Vec<ContributionDay>, HeatmapSource)
where
    R: RandomSource + ?Sized,
{
    if events.is_empty() {
        (synthetic_heatmap(today, random), HeatmapSource::Synthetic)
    } else {
        (heatmap_from_events(events, today), HeatmapSource::Events)
    }
}

/// Count event weight per day. Events outside the window are ignored.
pub fn heatmap_from_events(events: &[Event], today: NaiveDate) -> Vec<ContributionDay> {
    let window = heatmap_window(today);
    let start = window[0];
    let mut counts = vec![0u32; window.len()];

    for event in events {
        let day = event.created_at.date_naive();
        let offset = day.signed_duration_since(start).num_days();
        if let Ok(idx) = usize::try_from(offset) {
            if let Some(count) = counts.get_mut(idx) {
                *count = count.saturating_add(event.contribution_weight());
            }
        }
    }

    window
        .into_iter()
        .zip(counts)
        .map(|(date, count)| ContributionDay::new(date, count))
        .collect()
}

/// Placeholder activity so the heatmap is never blank: `0..=1` per day for
/// most of the window, `2..=5` for the most recent stretch.
pub fn synthetic_heatmap<R>(today: NaiveDate, random: &R) -> Vec<ContributionDay>
where
    R: RandomSource + ?Sized,
{
    let window = heatmap_window(today);
    let recent_from = window.len() as f64 * RECENT_FRACTION;

    window
        .into_iter()
        .enumerate()
        .map(|(i, date)| {
            let bias = if i as f64 > recent_from { 2 } else { 0 };
            let spread = if bias > 0 { 5 } else { 3 };
            let count = random.below(spread).saturating_sub(1) + bias;
            ContributionDay::new(date, count)
        })
        .collect()
}
