// Domain rules - Normalization, sanitization and parsing of tool output

use std::path::MAIN_SEPARATOR;

use serde::Deserialize;

use crate::domain::model::*;
use crate::error::{GrabError, GrabResult};

/// Fixed-width template durations are padded against
const DURATION_TEMPLATE: &str = "00:00:00";

/// Stem used when nothing in the title survives sanitization
const FALLBACK_STEM: &str = "video";

/// Left-pad a raw duration against `00:00:00`.
///
/// `"4:32"` becomes `"00:04:32"`. Strings of eight or more characters pass
/// through unchanged. Numeric ranges are not checked.
pub fn normalize_duration(raw: &str) -> String {
    let len = raw.chars().count();
    if len >= DURATION_TEMPLATE.len() {
        return raw.to_string();
    }
    format!("{}{}", &DURATION_TEMPLATE[..DURATION_TEMPLATE.len() - len], raw)
}

/// `H+:MM:SS` with an optional `.fraction` on the seconds
pub fn is_well_formed_timestamp(value: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() != 3 {
        return false;
    }

    let (seconds, fraction) = match parts[2].split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (parts[2], None),
    };

    all_digits(parts[0])
        && parts[1].len() == 2
        && all_digits(parts[1])
        && seconds.len() == 2
        && all_digits(seconds)
        && fraction.map_or(true, all_digits)
}

/// ASCII letters, Cyrillic letters, underscore, hyphen and space
fn is_allowed_filename_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ('а'..='я').contains(&c)
        || ('А'..='Я').contains(&c)
        || matches!(c, 'ё' | 'Ё' | 'і' | 'І' | 'ї' | 'Ї' | '_' | '-' | ' ')
}

/// Strip every character outside the filename allow-list
pub fn sanitize_title(title: &str) -> String {
    title.chars().filter(|&c| is_allowed_filename_char(c)).collect()
}

/// Default output filename for a video title
pub fn output_filename_for(title: &str) -> String {
    let stem = sanitize_title(title);
    if stem.trim().is_empty() {
        format!("{}{}", FALLBACK_STEM, OUTPUT_EXTENSION)
    } else {
        format!("{}{}", stem, OUTPUT_EXTENSION)
    }
}

/// Join destination and filename with exactly one separator.
///
/// An empty destination yields the bare filename.
pub fn join_destination(destination: &str, filename: &str) -> String {
    if destination.is_empty() {
        return filename.to_string();
    }

    let trimmed = destination.trim_end_matches(['/', MAIN_SEPARATOR]);
    format!("{}{}{}", trimmed, MAIN_SEPARATOR, filename)
}

/// Split resolver output into ordered links
pub fn parse_links(stdout: &str) -> GrabResult<Vec<String>> {
    let links: Vec<String> = stdout
        .trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if links.is_empty() {
        return Err(GrabError::NoLinks);
    }
    Ok(links)
}

/// Single JSON record printed by the extractor in probe mode
#[derive(Debug, Deserialize)]
struct ProbeRecord {
    formats_table: Option<String>,
    duration_string: Option<String>,
    title: Option<String>,
    fulltitle: Option<String>,
    is_live: Option<bool>,
    live_status: Option<LiveStatus>,
}

/// Parse probe output into metadata with a normalized duration
pub fn parse_metadata(stdout: &str) -> GrabResult<Metadata> {
    let record: ProbeRecord =
        serde_json::from_str(stdout.trim()).map_err(|e| GrabError::MalformedMetadata {
            message: e.to_string(),
        })?;

    let title = record.title.unwrap_or_default();
    Ok(Metadata {
        full_title: record.fulltitle.unwrap_or_else(|| title.clone()),
        title,
        duration: normalize_duration(record.duration_string.as_deref().unwrap_or("")),
        formats_table: record.formats_table.unwrap_or_default(),
        is_live: record.is_live.unwrap_or(false),
        live_status: record.live_status.unwrap_or_default(),
    })
}
