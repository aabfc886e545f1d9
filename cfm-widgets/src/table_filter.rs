//! Row visibility for the searchable budget table.
//!
//! Visibility is recomputed from scratch on every search event: a data row is
//! shown iff at least one of its cells contains the query, case-insensitively.
//! The header row is kept outside [`Table::rows`] so it is never filtered.

use serde::Serialize;

/// A table of plain cell text, header separate from the data rows.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Visibility flag for each data row, in row order.
    pub fn visibility(&self, query: &str) -> Vec<bool> {
        row_visibility(&self.rows, query)
    }

    /// Rows that stay visible for `query`.
    pub fn visible_rows<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Vec<String>> + 'a {
        let needle = query.to_lowercase();
        self.rows
            .iter()
            .filter(move |row| row_matches_lowered(row, &needle))
    }
}

/// True iff any cell contains `query`, ignoring case.
///
/// An empty query matches every row that has at least one cell.
pub fn row_matches<S: AsRef<str>>(cells: &[S], query: &str) -> bool {
    row_matches_lowered(cells, &query.to_lowercase())
}

/// Visibility flag for every row in `rows`.
pub fn row_visibility<S: AsRef<str>>(rows: &[Vec<S>], query: &str) -> Vec<bool> {
    let needle = query.to_lowercase();
    let flags: Vec<bool> = rows
        .iter()
        .map(|row| row_matches_lowered(row, &needle))
        .collect();
    log::debug!(
        "table_filter: {} of {} rows visible for {:?}",
        flags.iter().filter(|v| **v).count(),
        flags.len(),
        query
    );
    flags
}

/// CSS `display` value for a row: empty keeps the default, `none` hides it.
pub fn display_style(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        "none"
    }
}

fn row_matches_lowered<S: AsRef<str>>(cells: &[S], needle: &str) -> bool {
    cells
        .iter()
        .any(|cell| cell.as_ref().to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        let mut table = Table::new(vec![
            "Category".to_string(),
            "Budget".to_string(),
            "Status".to_string(),
        ]);
        table.push_row(vec![
            "Professor".to_string(),
            "72,000,000.00".to_string(),
            "OK".to_string(),
        ]);
        table.push_row(vec![
            "Guest Faculty".to_string(),
            "2,400,000.00".to_string(),
            "Over Spent".to_string(),
        ]);
        table.push_row(vec![
            "Library".to_string(),
            "5,000,000.00".to_string(),
            "OK".to_string(),
        ]);
        table
    }

    #[test]
    fn empty_query_shows_every_row() {
        let table = sample_table();
        assert_eq!(table.visibility(""), vec![true, true, true]);
        assert_eq!(table.visible_rows("").count(), 3);
    }

    #[test]
    fn match_is_case_insensitive() {
        let table = sample_table();
        assert_eq!(table.visibility("LIBRARY"), vec![false, false, true]);
        assert_eq!(table.visibility("over spent"), vec![false, true, false]);
    }

    #[test]
    fn any_cell_can_match() {
        let table = sample_table();
        // ",000.00" appears in every budget cell
        assert_eq!(table.visibility(",000.00"), vec![true, true, true]);
        // "ok" only appears in the status column of two rows
        assert_eq!(table.visibility("ok"), vec![true, false, true]);
    }

    #[test]
    fn no_match_hides_everything() {
        let table = sample_table();
        assert_eq!(table.visibility("hostel"), vec![false, false, false]);
        assert_eq!(table.visible_rows("hostel").count(), 0);
    }

    #[test]
    fn substring_match_within_cell() {
        assert!(row_matches(&["Assistant Professor"], "stant prof"));
        assert!(!row_matches(&["Assistant Professor"], "professors"));
    }

    #[test]
    fn row_without_cells_never_matches() {
        let rows: Vec<Vec<&str>> = vec![vec![], vec!["Electricity"]];
        assert_eq!(row_visibility(&rows, ""), vec![false, true]);
    }

    #[test]
    fn visible_rows_keeps_order() {
        let table = sample_table();
        let names: Vec<&str> = table
            .visible_rows("o")
            .map(|row| row[0].as_str())
            .collect();
        assert_eq!(names, vec!["Professor", "Guest Faculty", "Library"]);
    }

    #[test]
    fn display_style_maps_visibility() {
        assert_eq!(display_style(true), "");
        assert_eq!(display_style(false), "none");
    }
}
