use chrono::{DateTime, Datelike, Utc};

/// Set by build.rs as an RFC 3339 timestamp.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn built_at() -> Option<DateTime<Utc>> {
    parse_build_time(BUILD_TIME)
}

fn parse_build_time(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Footer "last built" line, e.g. `Last built 2025-11-03`.
pub fn built_stamp() -> Option<String> {
    built_at().map(|t| format!("Last built {}", t.format("%Y-%m-%d")))
}

/// Year for the footer copyright line.
pub fn copyright_year() -> i32 {
    built_at().unwrap_or_else(Utc::now).year()
}
