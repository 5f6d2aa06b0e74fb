//! Report rendering.
//!
//! Turns the engine's report into the console summary and the persisted
//! results file. Fixed `$x,xxx.xx` currency formatting; locale handling is
//! out of scope for this tool.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use tally_core::{Money, SalesReport};

const BANNER: &str =
    "======================================================================";

/// Formats a monetary amount as `$1,234.56` (rounded to two digits).
pub fn format_currency(amount: Money) -> String {
    let repr = amount.round_2().to_string();
    let (number, sign) = match repr.strip_prefix('-') {
        Some(stripped) => (stripped, "-"),
        None => (repr.as_str(), ""),
    };
    let (int_part, frac_part) = number.split_once('.').unwrap_or((number, "00"));
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// The console summary printed at the end of a run.
pub fn render_console(report: &SalesReport, elapsed_secs: f64) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "SALES COMPUTATION RESULTS");
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Total Sales Processed: {}", report.records_processed);
    let _ = writeln!(out, "Valid Records: {}", report.valid_records);
    let _ = writeln!(out, "Total Cost: {}", format_currency(report.total_cost));
    let _ = writeln!(out, "Execution Time: {elapsed_secs:.4} seconds");
    let _ = writeln!(out);
    if report.is_clean() {
        let _ = writeln!(out, "No errors encountered during processing.");
    } else {
        let _ = writeln!(out, "Total Errors Found: {}", report.errors.len());
    }
    let _ = writeln!(out, "{BANNER}");

    out
}

/// The persisted results file: the summary plus one line per rejected
/// record, in original input order.
pub fn render_file(report: &SalesReport, elapsed_secs: f64, generated: DateTime<Utc>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "SALES COMPUTATION RESULTS");
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Generated: {}", generated.format("%Y-%m-%d %H:%M:%S UTC"));
    let _ = writeln!(out, "Total Sales Processed: {}", report.records_processed);
    let _ = writeln!(out, "Valid Records: {}", report.valid_records);
    let _ = writeln!(out, "Total Cost: {}", format_currency(report.total_cost));
    let _ = writeln!(out, "Execution Time: {elapsed_secs:.4} seconds");
    let _ = writeln!(out);

    if report.is_clean() {
        let _ = writeln!(out, "No errors encountered during processing.");
    } else {
        let _ = writeln!(out, "{BANNER}");
        let _ = writeln!(out, "ERRORS FOUND: {}", report.errors.len());
        let _ = writeln!(out, "{BANNER}");
        for rejected in &report.errors {
            let _ = writeln!(out, "  - {rejected}");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;
    use tally_core::{ErrorKind, RejectedRecord};

    fn report_with_errors() -> SalesReport {
        SalesReport {
            records_processed: 4,
            valid_records: 2,
            total_cost: Money::new(dec!(988.54)),
            errors: vec![
                RejectedRecord {
                    index: 1,
                    kind: ErrorKind::NegativeQuantity,
                    detail: "'Quantity' must be positive, got 0".to_string(),
                },
                RejectedRecord {
                    index: 3,
                    kind: ErrorKind::UnknownProduct,
                    detail: "'Widget X' not found in catalogue".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Money::zero()), "$0.00");
        assert_eq!(format_currency(Money::new(dec!(988.54))), "$988.54");
        assert_eq!(format_currency(Money::new(dec!(1234567.891))), "$1,234,567.89");
        assert_eq!(format_currency(Money::new(dec!(1000))), "$1,000.00");
        assert_eq!(format_currency(Money::new(dec!(-1234.5))), "-$1,234.50");
    }

    #[test]
    fn test_render_console_summary() {
        let rendered = render_console(&report_with_errors(), 0.1234);
        assert!(rendered.contains("SALES COMPUTATION RESULTS"));
        assert!(rendered.contains("Total Sales Processed: 4"));
        assert!(rendered.contains("Valid Records: 2"));
        assert!(rendered.contains("Total Cost: $988.54"));
        assert!(rendered.contains("Execution Time: 0.1234 seconds"));
        assert!(rendered.contains("Total Errors Found: 2"));
    }

    #[test]
    fn test_render_file_lists_errors_in_order() {
        let generated = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();
        let rendered = render_file(&report_with_errors(), 0.5, generated);

        assert!(rendered.contains("Generated: 2026-08-05 12:00:00 UTC"));
        assert!(rendered.contains("ERRORS FOUND: 2"));

        let first = rendered
            .find("Record 1: NegativeQuantity")
            .expect("first error line");
        let second = rendered
            .find("Record 3: UnknownProduct")
            .expect("second error line");
        assert!(first < second);
    }

    #[test]
    fn test_render_file_clean_run() {
        let report = SalesReport {
            records_processed: 0,
            valid_records: 0,
            total_cost: Money::zero().round_2(),
            errors: vec![],
        };
        let generated = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();
        let rendered = render_file(&report, 0.0, generated);

        assert!(rendered.contains("Total Cost: $0.00"));
        assert!(rendered.contains("No errors encountered during processing."));
        assert!(!rendered.contains("ERRORS FOUND"));
    }
}
