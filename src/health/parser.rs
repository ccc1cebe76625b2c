//! nfsstat output parsing
//!
//! Turns `nfsstat -c -l` text into counter perfdata. Lines look like
//! `nfs v3 client      getattr:       45`; every `name: value` pair with a
//! lowercase name becomes a `name=valuec` token.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::check::HealthResult;

/// Summary used when nfsstat printed nothing useful
pub const EMPTY_OUTPUT_TEXT: &str = "nfsstat output was empty";

/// Summary used once the output has been scanned
pub const PARSED_TEXT: &str = "nfsstat output successfully parsed";

// Name must start the line or follow whitespace, so `Write: 4` does not yield `rite`.
// Whitespace and digits are ASCII only; perfdata values must be plain integers.
static METRIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|(?-u:\s))(?P<name>[a-z]+):(?-u:\s)+(?P<value>[0-9]+)")
        .expect("metric pattern is valid")
});

/// A single counter extracted from one output line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric<'a> {
    pub name: &'a str,
    pub value: &'a str,
    /// Text from the start of the name to the end of the value
    pub raw: &'a str,
}

impl Metric<'_> {
    /// Perfdata token for this counter, including the trailing separator
    pub fn perfdata_token(&self) -> String {
        format!("{}={}c ", self.name, self.value)
    }
}

/// Finds the first metric on a line, if any
pub fn parse_metric(line: &str) -> Option<Metric<'_>> {
    let caps = METRIC_RE.captures(line)?;
    let name = caps.name("name")?;
    let value = caps.name("value")?;

    Some(Metric {
        name: name.as_str(),
        value: value.as_str(),
        raw: &line[name.start()..value.end()],
    })
}

/// Parses nfsstat output into a health result
///
/// Output without any line break is reported as WARNING. Otherwise the result
/// is OK, even when no line carried a metric.
pub fn parse_nfsstat_output(output: &str) -> HealthResult {
    if !output.contains('\n') {
        return HealthResult::warning(EMPTY_OUTPUT_TEXT);
    }

    let mut perfdata = String::new();
    let mut details = Vec::new();

    for line in output.split('\n').filter(|l| !l.is_empty()) {
        debug!("line: {}", line);
        if let Some(metric) = parse_metric(line) {
            debug!(metric = metric.name, value = metric.value, "metric");
            perfdata.push_str(&metric.perfdata_token());
            details.push(metric.raw.to_string());
        }
    }
    debug!(%perfdata);

    HealthResult::ok(PARSED_TEXT)
        .with_perfdata(perfdata)
        .with_details(details)
}
