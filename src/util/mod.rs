//
//  lakefs-client
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Functions
//!
//! Formatting helpers for terminal output: timestamps, sizes, commit ids and
//! long strings.

use chrono::{DateTime, Local};

/// Formats a Unix timestamp (seconds) in the local timezone.
///
/// Timestamps that cannot be represented yield `"Unknown"`.
///
/// ```rust
/// use lakefs_client::util::format_time;
///
/// assert_eq!(format_time(i64::MAX), "Unknown");
/// assert_eq!(format_time(1704067200).len(), "2024-01-01 00:00:00".len());
/// ```
pub fn format_time(timestamp: i64) -> String {
    if let Some(dt) = DateTime::from_timestamp(timestamp, 0) {
        let local: DateTime<Local> = dt.into();
        local.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        "Unknown".to_string()
    }
}

/// Formats an optional timestamp, showing `-` when absent.
pub fn format_optional_time(timestamp: Option<i64>) -> String {
    timestamp.map(format_time).unwrap_or_else(|| "-".to_string())
}

/// Truncates `s` to at most `max_len` characters, ending with `...` when
/// there is room for it.
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Returns the abbreviated form of a commit id.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(12) {
        Some((index, _)) => &id[..index],
        None => id,
    }
}

/// Formats a byte count with binary units (1 KB = 1024 bytes).
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
