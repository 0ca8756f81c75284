// src/extractors/indeed.rs
//! Parser for candidate lists copied out of the Indeed resume search.
//!
//! A profile opens with a name (often printed twice) followed by a
//! `"City, ST"` line. Everything after it, up to the next such anchor, is
//! work history: job titles interleaved with employer/date lines, then
//! education and certification sections that carry no titles.

use super::patterns;
use super::result::PersonRecord;
use super::ExtractionStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Education,
    Certifications,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Enter(Section),
    Skip,
}

type LineRule = (fn(&str) -> bool, Action);

// Consulted before profile-boundary detection. First match wins.
const HEADER_RULES: &[LineRule] = &[
    (patterns::is_education_header, Action::Enter(Section::Education)),
    (patterns::is_certifications_header, Action::Enter(Section::Certifications)),
    (patterns::is_experience_header, Action::Enter(Section::None)),
    (patterns::is_skip_line, Action::Skip),
];

// Consulted once a line failed to open a new profile.
const FIELD_RULES: &[LineRule] = &[
    (patterns::is_location_line, Action::Skip),
    (patterns::is_employer_line, Action::Skip),
    (patterns::is_year_range_line, Action::Skip),
];

fn first_match(rules: &[LineRule], line: &str) -> Option<Action> {
    rules
        .iter()
        .find(|(predicate, _)| predicate(line))
        .map(|(_, action)| *action)
}

/// A confirmed profile anchor: the location that followed the name, and the
/// index of the first line after the anchor.
struct Boundary<'a> {
    location: &'a str,
    next: usize,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IndeedStrategy;

impl ExtractionStrategy for IndeedStrategy {
    fn name(&self) -> &'static str {
        "indeed"
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
    let mut people = Vec::new();
    let mut current: Option<PersonRecord> = None;
    let mut section = Section::None;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if line.is_empty() {
            i += 1;
            continue;
        }

        if let Some(action) = first_match(HEADER_RULES, line) {
            if let Action::Enter(next) = action {
                section = next;
            }
            i += 1;
            continue;
        }

        if let Some(boundary) = detect_boundary(&lines, i) {
            if let Some(done) = current.take() {
                people.push(done);
            }
            tracing::debug!("Indeed profile boundary at line {}: '{}' ({})", i + 1, line, boundary.location);
            current = Some(PersonRecord::new(line, boundary.location));
            section = Section::None;
            i = boundary.next;
            continue;
        }

        if first_match(FIELD_RULES, line).is_some() || section != Section::None {
            i += 1;
            continue;
        }

        if let Some(person) = current.as_mut() {
            if !patterns::is_cert_line(line) && !patterns::is_education_line(line) {
                tracing::trace!("Indeed title for '{}': '{}'", person.name, line);
                person.push_title(line);
            }
        }
        i += 1;
    }

    people.extend(current);
    people
}

/// Confirms a profile anchor at `i`: a name-shaped line followed by either a
/// duplicate of itself and then a location, or directly by a location.
fn detect_boundary<'a>(lines: &[&'a str], i: usize) -> Option<Boundary<'a>> {
    let line = lines[i];
    if !patterns::is_name_line(line) {
        return None;
    }

    let ahead = next_nonblank(lines, i + 1);
    let ahead_line = line_at(lines, ahead);

    if ahead_line == line {
        let ahead2 = next_nonblank(lines, ahead + 1);
        let location = line_at(lines, ahead2);
        return patterns::is_location_line(location).then_some(Boundary {
            location,
            next: ahead2 + 1,
        });
    }

    patterns::is_location_line(ahead_line).then_some(Boundary {
        location: ahead_line,
        next: ahead + 1,
    })
}

fn next_nonblank(lines: &[&str], start: usize) -> usize {
    let mut idx = start;
    while idx < lines.len() && lines[idx].is_empty() {
        idx += 1;
    }
    idx
}

fn line_at<'a>(lines: &[&'a str], idx: usize) -> &'a str {
    lines.get(idx).copied().unwrap_or("")
}

/// Context-free classification of a single line in this dialect's precedence order.
pub fn label(line: &str) -> &'static str {
    if line.is_empty() {
        "blank"
    } else if patterns::is_education_header(line)
        || patterns::is_certifications_header(line)
        || patterns::is_experience_header(line)
    {
        "section"
    } else if patterns::is_skip_line(line) {
        "noise"
    } else if patterns::is_name_line(line) {
        "name?"
    } else if patterns::is_location_line(line) {
        "location"
    } else if patterns::is_employer_line(line) || patterns::is_year_range_line(line) {
        "employer"
    } else if patterns::is_cert_line(line) {
        "cert"
    } else if patterns::is_education_line(line) {
        "education"
    } else {
        "title"
    }
}
