//! Family booking viewer
//!
//! Read-only. Filters are derived from whatever bookings are loaded and
//! combine by AND; at most one booking is expanded at a time.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use hc_client::models::FamilyBooking;

/// Selected filter values; `None` matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFilter {
    pub constituency: Option<String>,
    pub part_number: Option<i64>,
    pub center: Option<String>,
}

impl BookingFilter {
    pub fn matches(&self, booking: &FamilyBooking) -> bool {
        let constituency = self
            .constituency
            .as_ref()
            .is_none_or(|c| booking.constituency_name.as_ref() == Some(c));
        let part = self
            .part_number
            .is_none_or(|p| booking.part_number == Some(p));
        let center = self
            .center
            .as_ref()
            .is_none_or(|c| booking.center_name.as_ref() == Some(c));
        constituency && part && center
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Choices offered by each filter selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub constituencies: Vec<String>,
    pub part_numbers: Vec<i64>,
    pub centers: Vec<String>,
}

impl FilterOptions {
    /// Distinct values in first-seen order; part numbers ascending
    pub fn from_bookings(bookings: &[FamilyBooking]) -> Self {
        let mut options = Self::default();
        for booking in bookings {
            push_distinct(&mut options.constituencies, &booking.constituency_name);
            push_distinct(&mut options.centers, &booking.center_name);
            if let Some(part) = booking.part_number {
                if !options.part_numbers.contains(&part) {
                    options.part_numbers.push(part);
                }
            }
        }
        options.part_numbers.sort_unstable();
        options
    }
}

fn push_distinct(values: &mut Vec<String>, value: &Option<String>) {
    if let Some(value) = value {
        if !values.contains(value) {
            values.push(value.clone());
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FamilyBookingViewer {
    pub filter: BookingFilter,
    expanded: Option<i64>,
}

impl FamilyBookingViewer {
    pub fn expanded(&self) -> Option<i64> {
        self.expanded
    }

    /// Expand `id`, collapsing any other; toggling the open one closes it
    pub fn toggle(&mut self, id: i64) {
        self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
    }

    pub fn is_expanded(&self, id: i64) -> bool {
        self.expanded == Some(id)
    }

    pub fn visible<'a>(&self, bookings: &'a [FamilyBooking]) -> Vec<&'a FamilyBooking> {
        bookings.iter().filter(|b| self.filter.matches(b)).collect()
    }

    /// "Showing 2 of 5 bookings"
    pub fn summary(&self, bookings: &[FamilyBooking]) -> String {
        format!(
            "Showing {} of {} bookings",
            self.visible(bookings).len(),
            bookings.len()
        )
    }
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok())
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok())
}

/// "5 March 2025, 02:30 PM"; unparseable input is returned as is
pub fn format_booking_time(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%-d %B %Y, %I:%M %p").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// "5/3/2025"
pub fn format_appointment_date(value: &str) -> String {
    let date = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%-d/%-m/%Y").to_string())
        .unwrap_or_else(|_| value.to_string())
}
