//
//  lakefs-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Formatting
//!
//! Every `lkfs` command prints through an [`OutputWriter`], which renders
//! either a human-readable table or JSON (`--json`).
//!
//! Types opt in to table rendering through [`TableOutput`]. Collections
//! get it for free when their item type implements [`TableRow`]:
//!
//! ```rust,ignore
//! impl TableRow for Branch {
//!     fn headers() -> Vec<&'static str> {
//!         vec!["Branch", "Commit"]
//!     }
//!
//!     fn cells(&self, _color: bool) -> Vec<String> {
//!         vec![self.id.clone(), self.commit_id.clone().unwrap_or_default()]
//!     }
//! }
//!
//! writer.write(&page)?; // table of branches, or the page as JSON
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde::Serialize;

use crate::api::Page;

/// How command output is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Writes command results and status messages.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// Picks the format from the global `--json` flag.
    pub fn from_flag(json: bool) -> Self {
        Self::new(if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        })
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Renders `value` in the configured format.
    pub fn write<T: Serialize + TableOutput + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value)?,
            OutputFormat::Table => value.print_table(self.color),
        }
        Ok(())
    }

    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    /// Prints a success message. Suppressed in JSON mode so stdout stays
    /// parseable.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.is_json() {
            return;
        }
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Human-readable rendering of a value.
pub trait TableOutput {
    fn print_table(&self, color: bool);
}

/// One row of a listing table.
pub trait TableRow {
    fn headers() -> Vec<&'static str>;

    fn cells(&self, color: bool) -> Vec<String>;
}

/// Builds the table for `rows`.
pub fn rows_table<T: TableRow>(rows: &[T], color: bool) -> comfy_table::Table {
    let mut builder = TableBuilder::new().color(color).headers(T::headers());
    for row in rows {
        builder = builder.row(row.cells(color));
    }
    builder.build()
}

impl<T: TableRow> TableOutput for [T] {
    fn print_table(&self, color: bool) {
        if self.is_empty() {
            println!("No results");
            return;
        }
        println!("{}", rows_table(self, color));
    }
}

impl<T: TableRow> TableOutput for Vec<T> {
    fn print_table(&self, color: bool) {
        self.as_slice().print_table(color);
    }
}

impl<T: TableRow> TableOutput for Page<T> {
    fn print_table(&self, color: bool) {
        self.results.print_table(color);
        if let Some(next) = self.next_offset().filter(|_| self.has_more()) {
            use console::style;
            let hint = format!("More results available; continue with --after {}", next);
            if color {
                println!("{}", style(hint).dim());
            } else {
                println!("{}", hint);
            }
        } else if self.has_more() {
            println!("More results available");
        }
    }
}

/// Prints a bold header line with an underline.
pub fn print_header(text: &str) {
    use console::style;
    println!("{}", style(text).bold());
    println!("{}", "-".repeat(text.chars().count()));
}

/// Prints a `key: value` line.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}
