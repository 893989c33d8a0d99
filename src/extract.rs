use chrono::{Datelike, NaiveDate};
use scraper::{Html, Node};
use ego_tree::NodeRef;

use crate::dates::parse_draw_date;
use crate::text_manipulators::{node_text, split_comma_list};

/// Collects today's winning numbers from the draw page.
///
/// Walks every node of the parsed document in pre-order, parent before
/// children, siblings in document order, and inspects each `<tr>`: if its
/// first child node reads as a `DD.MM.YYYY` date on the same day-of-year as
/// `reference`, the comma-separated value of child node 3 is appended to the
/// result. Rows with unparseable dates or fewer than four child nodes are
/// skipped, never reported. Multiple matching rows concatenate in document
/// order.
///
/// Pure in its inputs: the same html and reference always produce the same
/// sequence.
pub fn winning_numbers(html: &str, reference: NaiveDate) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut numbers = Vec::new();
    for node in document.tree.root().descendants() {
        if let Some(row_numbers) = match_row(node, reference) {
            numbers.extend(row_numbers);
        }
    }
    numbers
}

/// The winning numbers contributed by a single node, or `None` if it is not
/// a draw row matching `reference`.
fn match_row(node: NodeRef<'_, Node>, reference: NaiveDate) -> Option<Vec<String>> {
    let element = node.value().as_element()?;
    if element.name() != "tr" {
        return None;
    }
    // Indexing is over raw child nodes, as the source table carries its
    // cells without intervening text nodes. A date cell that turns out to
    // be whitespace simply fails to parse below.
    let cells: Vec<NodeRef<'_, Node>> = node.children().collect();
    let date = parse_draw_date(&node_text(*cells.first()?))?;
    // The year is deliberately left out of the comparison; the table only
    // ever lists the current season.
    if date.ordinal() != reference.ordinal() || cells.len() <= 3 {
        return None;
    }
    Some(split_comma_list(&node_text(cells[3])))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn christmas() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()
    }

    fn table(rows: &str) -> String {
        format!("<html><body><table>{rows}</table></body></html>")
    }

    #[test]
    fn no_matching_row_yields_empty_set() {
        let html = table("<tr><td>24.12.2024</td><td>x</td><td>y</td><td>1111</td></tr>");
        assert!(winning_numbers(&html, christmas()).is_empty());
        assert!(winning_numbers("<p>no tables here</p>", christmas()).is_empty());
    }

    #[test]
    fn matching_row_tokens_come_out_trimmed_and_ordered() {
        let html = table("<tr><td>25.12.2024</td><td>x</td><td>y</td><td> 2190, 2172 ,2238</td></tr>");
        assert_eq!(
            winning_numbers(&html, christmas()),
            vec!["2190", "2172", "2238"]
        );
    }

    #[test]
    fn unparseable_date_skips_the_row() {
        let html = table("<tr><td>not-a-date</td><td>x</td><td>y</td><td>2190</td></tr>");
        assert!(winning_numbers(&html, christmas()).is_empty());
    }

    #[test]
    fn matching_row_without_a_numbers_cell_contributes_nothing() {
        let html = table("<tr><td>25.12.2024</td><td>x</td><td>y</td></tr>");
        assert!(winning_numbers(&html, christmas()).is_empty());
    }

    #[test]
    fn day_of_year_match_ignores_the_year() {
        // Both non-leap years, so 25.12. falls on the same ordinal.
        let html = table("<tr><td>25.12.2019</td><td>x</td><td>y</td><td>42</td></tr>");
        let reference = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(winning_numbers(&html, reference), vec!["42"]);
    }

    #[test]
    fn matching_rows_concatenate_in_document_order() {
        let html = table(
            "<tr><td>25.12.2024</td><td>x</td><td>y</td><td>1, 2</td></tr>\
             <tr><td>24.12.2024</td><td>x</td><td>y</td><td>9</td></tr>\
             <tr><td>25.12.2024</td><td>x</td><td>y</td><td>3</td></tr>",
        );
        assert_eq!(winning_numbers(&html, christmas()), vec!["1", "2", "3"]);
    }

    #[test]
    fn rows_in_nested_tables_are_visited() {
        // The outer row's first cell swallows the inner table's text and
        // fails to parse as a date; only the inner row matches.
        let html = table(
            "<tr><td><table><tr><td>25.12.2024</td><td>x</td><td>y</td><td>42</td></tr></table></td></tr>",
        );
        assert_eq!(winning_numbers(&html, christmas()), vec!["42"]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let html = table("<tr><td>25.12.2024</td><td>x</td><td>y</td><td>7,8</td></tr>");
        assert_eq!(
            winning_numbers(&html, christmas()),
            winning_numbers(&html, christmas())
        );
    }
}
