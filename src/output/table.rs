//
//  lakefs-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Table rendering with `comfy-table`.
//!
//! ```rust,no_run
//! use lakefs_client::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["ID", "Commit"])
//!     .row(["main", "c0ffee"])
//!     .print();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// Creates an empty table with the default style.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Fluent builder over a [`Table`].
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    /// Enables or disables colored headers.
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors a diff type (`added`, `removed`, `changed`, `conflict`).
pub fn format_diff_type(diff_type: &str, color: bool) -> String {
    if !color {
        return diff_type.to_string();
    }

    use console::style;
    match diff_type {
        "added" => style(diff_type).green().to_string(),
        "removed" => style(diff_type).red().to_string(),
        "changed" => style(diff_type).yellow().to_string(),
        "conflict" => style(diff_type).red().bold().to_string(),
        _ => diff_type.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_contains_cells() {
        let table = TableBuilder::new()
            .color(false)
            .headers(["ID", "Commit"])
            .row(["main", "c0ffee"])
            .build();

        let rendered = table.to_string();
        assert!(rendered.contains("ID"));
        assert!(rendered.contains("main"));
        assert!(rendered.contains("c0ffee"));
    }

    #[test]
    fn test_format_diff_type_plain() {
        assert_eq!(format_diff_type("added", false), "added");
    }
}
