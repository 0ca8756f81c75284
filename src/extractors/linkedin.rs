// src/extractors/linkedin.rs
//! Parser for LinkedIn "X-ray" results: search-engine hits that mirror
//! LinkedIn profiles, copied as plain text.
//!
//! A result looks like:
//!
//! ```text
//! Jane Doe, BSN, RN - Critical Care Nurse at Acme Hospital
//! LinkedIn · Jane Doe, BSN, RN
//! 500+ followers
//! Austin, Texas, United States · Critical Care Nurse · Acme Hospital
//! Experienced ICU nurse ... Read more
//! ```
//!
//! The `LinkedIn · <Name>` attribution is the anchor. The title comes from the
//! header line above it when possible, otherwise from the dot-separated info
//! line below it. Location comes from the info line or the snippet text.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::patterns;
use super::result::PersonRecord;
use super::ExtractionStrategy;

// --- Regex Patterns (Lazy Static) ---

static ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^LinkedIn\s*[·•]\s*(.+)$").expect("Failed to compile ANCHOR_RE")
});

static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s+[-–—]\s+(.+)$").expect("Failed to compile HEADER_RE")
});

// "| LinkedIn" / "- LinkedIn" left at the end of a search-result title.
static LINKEDIN_TRAILER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\s*[|\-–—]\s*)LinkedIn$").expect("Failed to compile LINKEDIN_TRAILER_RE")
});

static FOLLOWERS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[\d,.]+[KM]?\+?\s+followers$").expect("Failed to compile FOLLOWERS_RE")
});

static DOT_SPLIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*[·•]\s*").expect("Failed to compile DOT_SPLIT_RE")
});

static CITY_STATE_COUNTRY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z .'-]*),\s*([A-Za-z][A-Za-z ]*),\s*United States$")
        .expect("Failed to compile CITY_STATE_COUNTRY_RE")
});

static CITY_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z .'-]*),\s*([A-Z]{2})$").expect("Failed to compile CITY_CODE_RE")
});

static CITY_STATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z .'-]*),\s*([A-Za-z][A-Za-z ]*)$")
        .expect("Failed to compile CITY_STATE_RE")
});

// "City, State, United States" anywhere inside snippet prose.
static EMBEDDED_LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\b([A-Z][A-Za-z.'-]*(?:\s[A-Z][A-Za-z.'-]*)*),\s*",
        r"([A-Z][A-Za-z]*(?:\s[A-Z][A-Za-z]*)*),\s*United States",
    ))
    .expect("Failed to compile EMBEDDED_LOCATION_RE")
});

static TITLE_AT_COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s+at\s+(.+)$").expect("Failed to compile TITLE_AT_COMPANY_RE")
});

static READ_MORE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:\.{3}|…)?\s*Read more").expect("Failed to compile READ_MORE_RE")
});

static TRAILING_ELLIPSIS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*(?:\.{3}|…)$").expect("Failed to compile TRAILING_ELLIPSIS_RE")
});

static METADATA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:experience|education)\s*(?::|$)|^(?:location:|view\s)",
        r"|(?:connections|profile) on linkedin|connections$|followers$",
    ))
    .expect("Failed to compile METADATA_RE")
});

static TITLE_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:nurse|manager|director|engineer|developer|specialist|coordinator|",
        r"assistant|technician|technologist|therapist|analyst|consultant|supervisor|",
        r"administrator|officer|president|vp|founder|owner|recruiter|lead|physician|",
        r"practitioner|pharmacist|educator|teacher|instructor|professor|aide|coach|",
        r"executive|representative|head|chief|ceo|cfo|coo|cto|cno|cmo|cio|partner|associate|",
        r"advisor|counselor|clinician|paramedic|surgeon|midwife|designer|scientist|",
        r"researcher|architect|accountant|attorney|intern|resident|navigator|planner)\b",
    ))
    .expect("Failed to compile TITLE_KEYWORD_RE")
});

static COMPANY_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:hospitals?|health|healthcare|medical|clinic|university|college|",
        r"school|academy|inc|llc|ltd|corp|corporation|company|group|systems|",
        r"solutions|services|associates|partners|foundation|institute|network|",
        r"bank|agency|pharmacy|labs?)\b",
    ))
    .expect("Failed to compile COMPANY_KEYWORD_RE")
});

// --- Lookup Tables ---

static US_STATE_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "alabama", "alaska", "arizona", "arkansas", "california", "colorado",
        "connecticut", "delaware", "florida", "georgia", "hawaii", "idaho",
        "illinois", "indiana", "iowa", "kansas", "kentucky", "louisiana", "maine",
        "maryland", "massachusetts", "michigan", "minnesota", "mississippi",
        "missouri", "montana", "nebraska", "nevada", "new hampshire", "new jersey",
        "new mexico", "new york", "north carolina", "north dakota", "ohio",
        "oklahoma", "oregon", "pennsylvania", "rhode island", "south carolina",
        "south dakota", "tennessee", "texas", "utah", "vermont", "virginia",
        "washington", "west virginia", "wisconsin", "wyoming",
        "district of columbia", "puerto rico",
    ]
    .into_iter()
    .collect()
});

static US_STATE_CODES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL",
        "IN", "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT",
        "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI",
        "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY", "DC", "PR",
    ]
    .into_iter()
    .collect()
});

const BARE_COUNTRIES: &[&str] = &["united states", "canada", "united kingdom"];

#[derive(Debug, Default, Clone, Copy)]
pub struct LinkedInXrayStrategy;

impl ExtractionStrategy for LinkedInXrayStrategy {
    fn name(&self) -> &'static str {
        "linkedin_xray"
    }

    fn parse(&self, text: &str) -> Vec<PersonRecord> {
        parse(text)
    }

    fn label(&self, line: &str) -> &'static str {
        label(line)
    }
}

pub fn parse(text: &str) -> Vec<PersonRecord> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let anchors: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| anchor_name(line).is_some())
        .map(|(idx, _)| idx)
        .collect();

    let mut people = Vec::new();
    let mut floor = 0;

    for (k, &anchor) in anchors.iter().enumerate() {
        let (person, end) = parse_result(&lines, floor, anchor, anchors.get(k + 1).copied());
        people.extend(person);
        floor = end;
    }

    people
}

/// Parses the result anchored at `anchor`. The header is searched no earlier
/// than `floor`. Returns the record and the index where this result's lines end.
fn parse_result(
    lines: &[&str],
    floor: usize,
    anchor: usize,
    next_anchor: Option<usize>,
) -> (Option<PersonRecord>, usize) {
    let ceiling = next_anchor.unwrap_or(lines.len());
    let name = patterns::strip_credential_suffix(anchor_name(lines[anchor]).unwrap_or_default());

    let mut title = previous_nonblank(lines, floor, anchor).and_then(|idx| header_title(lines[idx]));
    let mut location: Option<String> = None;

    let mut cursor = next_nonblank(lines, anchor + 1).min(ceiling);
    if cursor < ceiling && FOLLOWERS_RE.is_match(lines[cursor]) {
        cursor = next_nonblank(lines, cursor + 1).min(ceiling);
    }

    // The next result's header closes this one.
    let end = match next_anchor {
        Some(next) => previous_nonblank(lines, cursor, next)
            .filter(|&idx| HEADER_RE.is_match(lines[idx]))
            .unwrap_or(next),
        None => lines.len(),
    };

    if cursor < end {
        read_info_line(lines[cursor], name, &mut location, &mut title);
        for line in &lines[cursor + 1..end] {
            if location.is_some() {
                break;
            }
            location = description_location(line);
        }
    }

    if name.is_empty() {
        tracing::debug!("LinkedIn anchor at line {} has no usable name", anchor + 1);
        return (None, end);
    }

    let mut person = PersonRecord::new(name, location.unwrap_or_default());
    if let Some(title) = title {
        person.push_title(TRAILING_ELLIPSIS_RE.replace(&title, "").trim());
    }
    tracing::debug!(
        "LinkedIn profile '{}' (location: '{}', titles: {:?})",
        person.name,
        person.location,
        person.titles
    );
    (Some(person), end)
}

/// Mines the line under the anchor (after any follower count) for location and title.
fn read_info_line(info: &str, name: &str, location: &mut Option<String>, title: &mut Option<String>) {
    if info.contains('·') || info.contains('•') {
        let segments: Vec<&str> = DOT_SPLIT_RE
            .split(info)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if location.is_none() {
            *location = segments.iter().find_map(|seg| match_location(seg));
        }
        if title.is_none() {
            *title = pick_title_segment(&segments).map(str::to_string);
        }
        return;
    }

    if title.is_none() {
        *title = TITLE_AT_COMPANY_RE
            .captures(info)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|text| !starts_with_first_name(text, name))
            .map(str::to_string);
    }
    if location.is_none() {
        *location = description_location(info);
    }
}

fn starts_with_first_name(text: &str, name: &str) -> bool {
    match (name.split_whitespace().next(), text.split_whitespace().next()) {
        (Some(first), Some(word)) => word.trim_end_matches([',', '.']).eq_ignore_ascii_case(first),
        _ => false,
    }
}

/// Title from a search-result header shaped `"<Name> - <rest>"`.
pub fn header_title(header: &str) -> Option<String> {
    let caps = HEADER_RE.captures(header)?;
    let rest = LINKEDIN_TRAILER_RE.replace(caps.get(2)?.as_str().trim(), "");
    let rest = rest.trim();

    if let Some(pos) = rest.find(" at ") {
        let before = rest[..pos].trim();
        return (!before.is_empty()).then(|| before.to_string());
    }

    if rest.is_empty()
        || rest.starts_with("The ")
        || COMPANY_KEYWORD_RE.is_match(rest)
        || patterns::is_credential_list(rest)
    {
        return None;
    }
    Some(rest.to_string())
}

/// First title-shaped segment carrying a job-title keyword, else the first
/// title-shaped segment.
fn pick_title_segment<'a>(segments: &[&'a str]) -> Option<&'a str> {
    let candidates: Vec<(&str, bool)> = segments
        .iter()
        .filter_map(|seg| title_candidate(seg).map(|keyword| (*seg, keyword)))
        .collect();

    candidates
        .iter()
        .find(|(_, keyword)| *keyword)
        .or_else(|| candidates.first())
        .map(|(seg, _)| *seg)
}

/// `None` when the segment cannot be a title; otherwise whether it carries a
/// job-title keyword.
fn title_candidate(segment: &str) -> Option<bool> {
    let lower = segment.to_lowercase();
    if segment.is_empty()
        || match_location(segment).is_some()
        || BARE_COUNTRIES.contains(&lower.as_str())
        || METADATA_RE.is_match(segment)
    {
        return None;
    }

    if TITLE_KEYWORD_RE.is_match(segment) {
        return Some(true);
    }
    if COMPANY_KEYWORD_RE.is_match(segment) {
        return None;
    }
    if segment.len() <= 24 && (is_all_caps_run(segment) || patterns::is_credential_list(segment)) {
        return None;
    }
    Some(false)
}

fn is_all_caps_run(text: &str) -> bool {
    text.chars().any(char::is_alphabetic) && !text.chars().any(char::is_lowercase)
}

/// Matches one of the three location grammars against a whole segment.
pub fn match_location(segment: &str) -> Option<String> {
    let segment = segment.trim();

    if let Some(caps) = CITY_STATE_COUNTRY_RE.captures(segment) {
        if is_state_name(&caps[2]) {
            return Some(segment.to_string());
        }
    }
    if let Some(caps) = CITY_CODE_RE.captures(segment) {
        let city = caps[1].trim();
        if US_STATE_CODES.contains(&caps[2])
            && !is_all_caps_run(city)
            && !patterns::is_credential_list(city)
        {
            return Some(segment.to_string());
        }
    }
    if let Some(caps) = CITY_STATE_RE.captures(segment) {
        if is_state_name(&caps[2]) {
            return Some(segment.to_string());
        }
    }
    None
}

fn is_state_name(text: &str) -> bool {
    US_STATE_NAMES.contains(text.trim().to_lowercase().as_str())
}

/// Location from snippet text: whole segments first, then an embedded
/// `"City, State, United States"` anywhere in the line.
fn description_location(line: &str) -> Option<String> {
    let cleaned = READ_MORE_RE.replace_all(line, "");

    if let Some(found) = DOT_SPLIT_RE.split(&cleaned).find_map(match_location) {
        return Some(found);
    }

    EMBEDDED_LOCATION_RE
        .captures_iter(&cleaned)
        .find(|caps| is_state_name(&caps[2]))
        .and_then(|caps| caps.get(0))
        .map(|m| m.as_str().to_string())
}

pub fn anchor_name(line: &str) -> Option<&str> {
    ANCHOR_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

fn previous_nonblank(lines: &[&str], floor: usize, before: usize) -> Option<usize> {
    (floor..before).rev().find(|&idx| !lines[idx].is_empty())
}

fn next_nonblank(lines: &[&str], start: usize) -> usize {
    let mut idx = start;
    while idx < lines.len() && lines[idx].is_empty() {
        idx += 1;
    }
    idx
}

/// Context-free classification of a single line in this dialect's precedence order.
pub fn label(line: &str) -> &'static str {
    if line.is_empty() {
        "blank"
    } else if anchor_name(line).is_some() {
        "anchor"
    } else if FOLLOWERS_RE.is_match(line) {
        "followers"
    } else if HEADER_RE.is_match(line) {
        "header"
    } else if line.contains('·') || line.contains('•') {
        "info"
    } else if match_location(line).is_some() {
        "location"
    } else {
        "snippet"
    }
}
