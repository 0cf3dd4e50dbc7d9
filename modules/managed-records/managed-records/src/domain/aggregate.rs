//! Page aggregation: sentinel detection, cursors and disposition buckets.

use std::num::NonZeroU32;

use managed_records_sdk::{OpenRecord, PageSummary, Record};

use super::classify::is_primary_color;
use super::query::FETCH_LIMIT;

/// Split off the sentinel record, if the fetch returned one.
///
/// Returns the records of the logical page and whether a further page exists.
/// Only a length of exactly [`FETCH_LIMIT`] counts; any other length is a
/// complete final page.
#[must_use]
pub fn split_sentinel(mut records: Vec<Record>) -> (Vec<Record>, bool) {
    if records.len() == FETCH_LIMIT {
        records.truncate(FETCH_LIMIT - 1);
        (records, true)
    } else {
        (records, false)
    }
}

fn has_primary_color(record: &Record) -> bool {
    record.color().is_some_and(is_primary_color)
}

/// Summarize one fetched page of records for `page`.
#[must_use]
pub fn aggregate(records: Vec<Record>, page: NonZeroU32) -> PageSummary {
    let (records, has_next) = split_sentinel(records);

    let ids = records.iter().map(|record| record.id.clone()).collect();

    let closed_primary_count = records
        .iter()
        .filter(|record| record.is_closed() && has_primary_color(record))
        .count();

    let open = records
        .into_iter()
        .filter(Record::is_open)
        .map(|record| {
            let is_primary = has_primary_color(&record);
            OpenRecord::new(record, is_primary)
        })
        .collect();

    PageSummary {
        ids,
        open,
        closed_primary_count,
        previous_page: (page.get() != 1).then(|| page.get() - 1),
        next_page: page.get().checked_add(1).filter(|_| has_next),
    }
}
