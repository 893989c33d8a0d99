use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::dates::format_draw_date;

/// One configured calendar ticket, tagged with whether its number was drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: String,
    pub won: bool,
}

/// What the presentation layer consumes: the draw date it was built for and
/// every configured ticket in configuration order.
#[derive(Debug, Serialize)]
pub struct DrawReport {
    pub draw_date: String,
    pub day_of_year: u32,
    pub items: Vec<Item>,
}

/// Tags each configured ticket ID against the day's winning numbers.
/// Membership is exact string equality; numbers drawn for tickets nobody
/// configured are ignored.
pub fn mark_winners(calendar_ids: &[String], winning_numbers: &[String]) -> Vec<Item> {
    calendar_ids
        .iter()
        .map(|id| Item {
            id: id.clone(),
            won: winning_numbers.iter().any(|number| number == id),
        })
        .collect()
}

pub fn build_report(
    reference: NaiveDate,
    calendar_ids: &[String],
    winning_numbers: &[String],
) -> DrawReport {
    DrawReport {
        draw_date: format_draw_date(reference),
        day_of_year: reference.ordinal(),
        items: mark_winners(calendar_ids, winning_numbers),
    }
}
