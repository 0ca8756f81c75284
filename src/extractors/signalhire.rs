// src/extractors/signalhire.rs
//! Parser for SignalHire search-result pages.
//!
//! Each profile card starts with an alphabetical index glyph (`"A"` or
//! `"* A"`), then the name, an optional `"<title> at"` line, the company
//! wrapped in double underscores and a `"City, State[, Area], United States"`
//! location. Everything after the location (experience, skills, previous
//! roles) is dropped until the next glyph.

use once_cell::sync::Lazy;
use regex::Regex;

use super::result::PersonRecord;
use super::ExtractionStrategy;

static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\*\s)?[A-Z]$").expect("Failed to compile MARKER_RE")
});

static TITLE_AT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(.+?)\s+at$").expect("Failed to compile TITLE_AT_RE")
});

static COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^__.+__$").expect("Failed to compile COMPANY_RE")
});

static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z][A-Za-z .'-]*,\s*[A-Za-z][A-Za-z .'-]*",
        r"(?:,\s*[A-Za-z][A-Za-z .'()-]*)?,\s*United States$",
    ))
    .expect("Failed to compile LOCATION_RE")
});

/// Search-UI labels that show up between cards.
const NOISE_PHRASES: &[&str] = &[
    "watched",
    "show contacts",
    "get contacts",
    "contacts",
    "add to project",
    "add to list",
    "select all",
    "experience",
    "skills",
    "education",
    "previous",
    "current",
    "more",
    "show more",
    "people",
    "filters",
    "clear all",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct SignalHireStrategy;

impl ExtractionStrategy for SignalHireStrategy {
    fn name(&self) -> &'static str {
        "signalhire"
    }

    fn parse(&self, text: &str) -> Vec<PersonRecord> {
        parse(text)
    }

    fn label(&self, line: &str) -> &'static str {
        label(line)
    }
}

pub fn is_marker(line: &str) -> bool {
    MARKER_RE.is_match(line)
}

/// `"Registered Nurse at"` yields `"Registered Nurse"`.
pub fn title_before_at(line: &str) -> Option<&str> {
    TITLE_AT_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

pub fn is_company_line(line: &str) -> bool {
    COMPANY_RE.is_match(line)
}

pub fn is_location_line(line: &str) -> bool {
    LOCATION_RE.is_match(line)
}

pub fn is_noise_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    NOISE_PHRASES.contains(&lower.as_str()) || line.matches(',').count() >= 3
}

pub fn parse(text: &str) -> Vec<PersonRecord> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut people = Vec::new();

    // Filter and search chrome above the first card is dropped.
    let mut i = next_marker(&lines, 0);

    while i < lines.len() {
        // Consume the glyph, then the name.
        let name_idx = next_nonblank(&lines, i + 1);
        let Some(&name) = lines.get(name_idx) else {
            break;
        };
        if is_marker(name) {
            tracing::debug!("SignalHire card at line {} has no name", i + 1);
            i = name_idx;
            continue;
        }

        let mut person = PersonRecord::new(name, "");
        let mut title: Option<&str> = None;
        let mut j = name_idx + 1;

        while j < lines.len() && !is_marker(lines[j]) {
            let line = lines[j];
            j += 1;

            if line.is_empty() || line.eq_ignore_ascii_case("Watched") {
                continue;
            }
            if title.is_none() {
                if let Some(captured) = title_before_at(line) {
                    title = Some(captured);
                    continue;
                }
            }
            if is_company_line(line) {
                continue;
            }
            if is_location_line(line) {
                person.location = line.to_string();
                // Experience, skills and history after the location are not kept.
                j = next_marker(&lines, j);
                break;
            }
            // Noise phrases, comma-heavy skill lists and anything unrecognized
            // are dropped here; NOISE_PHRASES only feeds `label`.
        }

        if let Some(title) = title {
            person.push_title(title);
        }
        tracing::debug!(
            "SignalHire profile '{}' (location: '{}', titles: {:?})",
            person.name,
            person.location,
            person.titles
        );
        people.push(person);
        i = j;
    }

    people
}

fn next_marker(lines: &[&str], start: usize) -> usize {
    lines[start.min(lines.len())..]
        .iter()
        .position(|line| is_marker(line))
        .map_or(lines.len(), |offset| start + offset)
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
    } else if is_marker(line) {
        "marker"
    } else if line.eq_ignore_ascii_case("Watched") {
        "noise"
    } else if title_before_at(line).is_some() {
        "title"
    } else if is_company_line(line) {
        "company"
    } else if is_location_line(line) {
        "location"
    } else if is_noise_line(line) {
        "noise"
    } else {
        "other"
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_card_and_discards_fields_after_location() {
        let text = "\
* A
John Smith
Watched
Registered Nurse at
__Acme Hospital__
Austin, Texas, United States
5 years exp
Charge Nurse at
* B
Mary Jones
ICU Nurse at
__Saint Mary's__
Round Rock, Texas, Williamson County, United States
";
        let people = parse(text);

        assert_eq!(people.len(), 2);
        assert_eq!(
            people[0],
            PersonRecord {
                name: "John Smith".into(),
                location: "Austin, Texas, United States".into(),
                titles: vec!["Registered Nurse".into()],
            }
        );
        assert_eq!(people[1].name, "Mary Jones");
        assert_eq!(people[1].location, "Round Rock, Texas, Williamson County, United States");
        assert_eq!(people[1].titles, vec!["ICU Nurse"]);
    }

    #[test]
    fn chrome_before_first_marker_is_ignored() {
        let text = "Filters\nNurse at\nClear all\nDallas, Texas, United States\nB\nAnn Lee\nDallas, Texas, United States";
        let people = parse(text);

        assert_eq!(people.len(), 1);
        assert_eq!(people[0].name, "Ann Lee");
        assert!(people[0].titles.is_empty());
    }

    #[test]
    fn missing_location_and_title_give_partial_record() {
        let text = "* C\n\nCarl Diaz\n__Acme__\nPatient care, Triage, EMR, Epic\n* D\nDana Fox\nNurse Manager at";
        let people = parse(text);

        assert_eq!(people.len(), 2);
        assert_eq!(people[0].name, "Carl Diaz");
        assert_eq!(people[0].location, "");
        assert!(people[0].titles.is_empty());
        assert_eq!(people[1].titles, vec!["Nurse Manager"]);
    }

    #[test]
    fn first_title_wins() {
        let people = parse("A\nEve Ray\nLead Nurse at\nStaff Nurse at\nMiami, Florida, United States");
        assert_eq!(people[0].titles, vec!["Lead Nurse"]);
    }

    #[test]
    fn noise_lines_inside_a_card_are_dropped() {
        let text = "A\nAnn Lee\nShow contacts\nEMR, Epic, Triage, IV\nNurse at\n__Acme__\nDallas, Texas, United States";
        let people = parse(text);

        assert_eq!(people.len(), 1);
        assert_eq!(people[0].titles, vec!["Nurse"]);
        assert_eq!(people[0].location, "Dallas, Texas, United States");
        assert_eq!(label("Show contacts"), "noise");
    }

    #[test]
    fn marker_without_name_is_skipped() {
        let people = parse("* A\n\n* B\nBob Stone\n* C\n   ");
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].name, "Bob Stone");
    }

    #[test]
    fn no_markers_means_no_people() {
        assert!(parse("John Smith\nNurse at\nAustin, Texas, United States").is_empty());
        assert!(parse("   \n\n").is_empty());
    }

    #[test]
    fn line_predicates() {
        assert!(is_marker("A"));
        assert!(is_marker("* Z"));
        assert!(!is_marker("AB"));
        assert!(!is_marker("*A"));
        assert_eq!(title_before_at("Registered Nurse AT"), Some("Registered Nurse"));
        assert_eq!(title_before_at("at"), None);
        assert!(is_company_line("__Acme Hospital__"));
        assert!(!is_company_line("Acme Hospital"));
        assert!(is_location_line("Austin, Texas, United States"));
        assert!(!is_location_line("Austin, Texas"));
        assert!(is_noise_line("Show contacts"));
        assert!(is_noise_line("IV, EMR, Triage, Epic"));
    }

    #[test]
    fn labels_follow_precedence() {
        assert_eq!(label("* A"), "marker");
        assert_eq!(label("Watched"), "noise");
        assert_eq!(label("Registered Nurse at"), "title");
        assert_eq!(label("__Acme__"), "company");
        assert_eq!(label("Austin, Texas, United States"), "location");
        assert_eq!(label("5 years exp"), "other");
    }
}
