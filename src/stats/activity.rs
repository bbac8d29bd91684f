//! Weekday, month and hour-of-day activity.

use chrono::Weekday;
use serde::Serialize;

use super::Tally;
use crate::record::DAY_NAMES;
use crate::table::TableView;

/// Columns of the heatmap: one per hour of the day.
pub const HOURS: usize = 24;

/// Messages carrying one label (a day name or a month name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCount {
    pub label: &'static str,
    pub messages: usize,
}

/// Counts messages per weekday name, busiest first.
///
/// Only weekdays that occur are listed.
pub fn week_activity_map(view: &TableView<'_>) -> Vec<ActivityCount> {
    rank_labels(view.iter().map(|r| r.day_name))
}

/// Counts messages per month name, busiest first.
///
/// Months of different years share a label.
pub fn month_activity_map(view: &TableView<'_>) -> Vec<ActivityCount> {
    rank_labels(view.iter().map(|r| r.month_name))
}

fn rank_labels(labels: impl Iterator<Item = &'static str>) -> Vec<ActivityCount> {
    let mut tally = Tally::new();
    tally.extend(labels);
    tally
        .ranked()
        .into_iter()
        .map(|(label, messages)| ActivityCount { label, messages })
        .collect()
}

/// Weekday x hour message counts.
///
/// Always 7 rows (Monday to Sunday) by 24 columns (hour 0 to 23); cells with
/// no messages hold zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityHeatmap {
    /// Row labels, Monday first.
    pub days: [&'static str; 7],
    /// `cells[day][hour]`, with `day` counted from Monday.
    pub cells: [[usize; HOURS]; 7],
}

impl Default for ActivityHeatmap {
    fn default() -> Self {
        Self {
            days: DAY_NAMES,
            cells: [[0; HOURS]; 7],
        }
    }
}

impl ActivityHeatmap {
    /// Count for one weekday and hour. Hours past 23 read as zero.
    pub fn get(&self, weekday: Weekday, hour: u32) -> usize {
        self.row(weekday)
            .get(hour as usize)
            .copied()
            .unwrap_or_default()
    }

    /// All 24 hourly counts of one weekday.
    pub fn row(&self, weekday: Weekday) -> &[usize; HOURS] {
        &self.cells[weekday.num_days_from_monday() as usize]
    }

    /// Rows with their day names, Monday first.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &[usize; HOURS])> + '_ {
        self.days.iter().copied().zip(self.cells.iter())
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// The busiest `(weekday name, hour)` cell, if any message exists.
    ///
    /// Ties resolve to the earliest day, then the earliest hour.
    pub fn peak(&self) -> Option<(&'static str, u32, usize)> {
        let mut best: Option<(&'static str, u32, usize)> = None;
        for (day, row) in self.rows() {
            for (hour, &count) in row.iter().enumerate() {
                if count > 0 && best.is_none_or(|(_, _, top)| count > top) {
                    best = Some((day, hour as u32, count));
                }
            }
        }
        best
    }
}

/// Builds the weekday x hour heatmap.
pub fn activity_heatmap(view: &TableView<'_>) -> ActivityHeatmap {
    let mut heatmap = ActivityHeatmap::default();
    for record in view.iter() {
        let day = record.weekday.num_days_from_monday() as usize;
        let hour = record.hour as usize;
        if let Some(cell) = heatmap.cells[day].get_mut(hour) {
            *cell += 1;
        }
    }
    heatmap
}
