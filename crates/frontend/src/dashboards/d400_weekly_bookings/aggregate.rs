//! Weekly summary of booking payments.
//!
//! Bookings are bucketed into the 7 trailing Sunday–Saturday weeks ending with
//! the week of `as_of`, oldest first. Each bucket keeps per-day sums for the
//! three amount fields and the bookings that fell into it.

use crate::shared::date_utils::{format_week_label, parse_calendar_day};
use chrono::{Datelike, Duration, NaiveDate};
use contracts::domain::a002_booking::{BookingAmountField, BookingRecord};
use std::collections::BTreeMap;

pub const WEEK_COUNT: usize = 7;

/// Суммы по дням: день -> сумма поля
pub type DailyTotals = BTreeMap<NaiveDate, i64>;

/// Inclusive 7-day span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRange {
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    pub fn label(&self) -> String {
        format_week_label(self.start, self.end)
    }
}

/// Воскресенье той же недели (само `as_of`, если это воскресенье)
pub fn most_recent_sunday(as_of: NaiveDate) -> NaiveDate {
    as_of - Duration::days(i64::from(as_of.weekday().num_days_from_sunday()))
}

/// 7 недель, заканчивая текущей; первая в списке самая старая
pub fn trailing_weeks(as_of: NaiveDate) -> Vec<WeekRange> {
    let this_sunday = most_recent_sunday(as_of);
    (0..WEEK_COUNT as i64)
        .rev()
        .map(|weeks_back| WeekRange::starting(this_sunday - Duration::weeks(weeks_back)))
        .collect()
}

/// Одна строка сводки
#[derive(Debug, Clone, PartialEq)]
pub struct WeekBucket {
    pub range: WeekRange,
    pub paid: DailyTotals,
    pub original: DailyTotals,
    pub refund: DailyTotals,
    /// Drill-down list, in input order. The displayed count is its length.
    pub bookings: Vec<BookingRecord>,
}

impl WeekBucket {
    pub fn daily(&self, field: BookingAmountField) -> &DailyTotals {
        match field {
            BookingAmountField::Paid => &self.paid,
            BookingAmountField::Original => &self.original,
            BookingAmountField::Refund => &self.refund,
        }
    }

    /// Sum over all days of one field
    pub fn total(&self, field: BookingAmountField) -> i64 {
        self.daily(field)
            .values()
            .fold(0_i64, |acc, v| acc.saturating_add(*v))
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.len()
    }
}

/// Bookings whose `updated_at` day falls in `range`, in input order.
/// Bookings with an unparseable timestamp never match.
pub fn bookings_in_range<'a>(
    bookings: &'a [BookingRecord],
    range: &WeekRange,
) -> Vec<&'a BookingRecord> {
    bookings
        .iter()
        .filter(|b| booking_day(b).is_some_and(|day| range.contains(day)))
        .collect()
}

/// Per-day sums of `field` over the bookings in `range`
pub fn total_by_day(
    bookings: &[BookingRecord],
    field: BookingAmountField,
    range: &WeekRange,
) -> DailyTotals {
    let mut totals = DailyTotals::new();
    for booking in bookings {
        let Some(day) = booking_day(booking).filter(|d| range.contains(*d)) else {
            continue;
        };
        let entry = totals.entry(day).or_insert(0);
        *entry = entry.saturating_add(booking.amount(field));
    }
    totals
}

fn booking_day(booking: &BookingRecord) -> Option<NaiveDate> {
    booking.updated_at.as_ref().and_then(parse_calendar_day)
}

/// Build the 7 weekly buckets for `as_of`
pub fn aggregate_weeks(bookings: &[BookingRecord], as_of: NaiveDate) -> Vec<WeekBucket> {
    trailing_weeks(as_of)
        .into_iter()
        .map(|range| WeekBucket {
            range,
            paid: total_by_day(bookings, BookingAmountField::Paid, &range),
            original: total_by_day(bookings, BookingAmountField::Original, &range),
            refund: total_by_day(bookings, BookingAmountField::Refund, &range),
            bookings: bookings_in_range(bookings, &range)
                .into_iter()
                .cloned()
                .collect(),
        })
        .collect()
}
