//! Terminal rendering for listings and summaries.
//!
//! Plain text only; the engine has no UI-facing behavior of its own, so
//! everything user-visible lives here.

use api::{FileRecord, ListingSummary};
use chrono::{DateTime, Local, Utc};
use client::UserProfile;

/// Print the derived view as a table.
pub fn print_listing(files: &[FileRecord]) {
    if files.is_empty() {
        println!("No files.");
        return;
    }

    println!(
        "{:<26} {:<28} {:<6} {:>10} {:<10} {}",
        "ID", "NAME", "TYPE", "SIZE", "VISIBILITY", "UPDATED"
    );
    for f in files {
        println!(
            "{:<26} {:<28} {:<6} {:>10} {:<10} {}",
            f.id,
            f.original_name,
            f.extension().to_uppercase(),
            format_bytes(f.size_bytes),
            f.visibility,
            format_timestamp(f.updated_at)
        );
    }
}

/// Print the aggregate figures for the signed-in user.
pub fn print_summary(summary: &ListingSummary, user: &UserProfile) {
    println!("Signed in as {} ({})", user.name, user.role);
    println!("  Files:     {}", summary.count);
    println!("  Storage:   {}", format_bytes(summary.total_bytes));
    println!("  Public:    {}", summary.public_count);
    println!("  Downloads: {}", summary.total_downloads);
}

/// Human-readable byte count: 1024-based, one decimal below 10.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if value >= 10.0 || unit == 0 {
        format!("{:.0} {}", value, UNITS[unit])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Local-time `dd/mm/yyyy hh:mm` rendering of a server instant.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_zero() {
        assert_eq!(format_bytes(0), "0 B");
    }

    #[test]
    fn test_format_bytes_small_values_have_no_decimal() {
        assert_eq!(format_bytes(1), "1 B");
        assert_eq!(format_bytes(345), "345 B");
        assert_eq!(format_bytes(1023), "1023 B");
    }

    #[test]
    fn test_format_bytes_one_decimal_below_ten() {
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(2_621_440), "2.5 MB");
    }

    #[test]
    fn test_format_bytes_no_decimal_from_ten_up() {
        assert_eq!(format_bytes(15 * 1024), "15 KB");
        assert_eq!(format_bytes(420_000), "410 KB");
    }

    #[test]
    fn test_format_bytes_gb() {
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn test_format_timestamp_shape() {
        let out = format_timestamp("2025-03-01T12:34:00Z".parse().unwrap());
        // dd/mm/yyyy hh:mm regardless of the local zone
        assert_eq!(out.len(), 16);
        assert_eq!(&out[2..3], "/");
        assert_eq!(&out[5..6], "/");
        assert_eq!(&out[10..11], " ");
        assert_eq!(&out[13..14], ":");
    }
}
