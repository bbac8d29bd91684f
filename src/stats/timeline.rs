//! Message counts over calendar time.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::record::month_name;
use crate::table::TableView;

/// Messages in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBucket {
    pub year: i32,
    pub month_num: u32,
    pub month_name: &'static str,
    /// `"<Month>-<Year>"`, e.g. `"January-2020"`.
    pub label: String,
    pub messages: usize,
}

/// Messages on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub messages: usize,
}

/// Counts messages per `(year, month)`, oldest month first.
///
/// Months without messages are absent.
pub fn monthly_timeline(view: &TableView<'_>) -> Vec<MonthlyBucket> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in view.iter() {
        *months.entry((record.year, record.month_num)).or_default() += 1;
    }

    months
        .into_iter()
        .map(|((year, month_num), messages)| {
            let month_name = month_name(month_num);
            MonthlyBucket {
                year,
                month_num,
                month_name,
                label: format!("{month_name}-{year}"),
                messages,
            }
        })
        .collect()
}

/// Counts messages per calendar date, oldest first.
///
/// Days without messages are absent.
pub fn daily_timeline(view: &TableView<'_>) -> Vec<DailyBucket> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in view.iter() {
        *days.entry(record.date).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, messages)| DailyBucket { date, messages })
        .collect()
}
