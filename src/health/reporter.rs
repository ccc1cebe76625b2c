//! Formatting and reporting for health check results
//!
//! Output follows the Nagios plugin convention:
//!
//! ```text
//! OK: nfsstat output successfully parsed|write=42c read=7c
//! write: 42
//! read: 7
//! ```

use std::io::{self, Write};

use super::check::HealthResult;

/// Formats a health result as plugin output, newline-terminated
pub fn format_report(result: &HealthResult) -> String {
    let mut output = format!(
        "{}{}|{}\n",
        result.status.prefix(),
        result.text,
        result.perfdata
    );

    for line in &result.details {
        output.push_str(line);
        output.push('\n');
    }

    output
}

/// Writes a health result to `out` and returns the exit code to use
pub fn write_report<W: Write>(out: &mut W, result: &HealthResult) -> io::Result<i32> {
    out.write_all(format_report(result).as_bytes())?;
    out.flush()?;
    Ok(result.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::check::StatusLevel;

    #[test]
    fn status_line_without_details() {
        let result = HealthResult::warning("nfsstat output was empty");
        assert_eq!(format_report(&result), "WARNING: nfsstat output was empty|\n");
    }

    #[test]
    fn details_follow_status_line() {
        let result = HealthResult::ok("parsed")
            .with_perfdata("write=42c read=7c ")
            .with_details(vec!["write: 42".into(), "read: 7".into()]);

        assert_eq!(
            format_report(&result),
            "OK: parsed|write=42c read=7c \nwrite: 42\nread: 7\n"
        );
    }

    #[test]
    fn undefined_level_reports_unknown() {
        let result = HealthResult::new(StatusLevel::Undefined(9), "odd");

        assert_eq!(
            format_report(&result),
            "UNKNOWN: Exit code '9' undefined: odd|\n"
        );
        assert_eq!(result.exit_code(), 3);
    }

    #[test]
    fn write_report_returns_exit_code() {
        let mut buf = Vec::new();
        let code = write_report(&mut buf, &HealthResult::critical("down")).unwrap();

        assert_eq!(code, 2);
        assert_eq!(String::from_utf8(buf).unwrap(), "CRITICAL: down|\n");
    }
}
