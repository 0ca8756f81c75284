// src/extractors/patterns.rs
//! Line predicates shared by the dialect parsers.
//!
//! Every predicate expects a line that has already been trimmed. Classification
//! is purely lexical; the parsers decide precedence by the order in which they
//! consult these functions.

use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns (Lazy Static) ---

// "City, ST" with a two-letter uppercase state code.
static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z .'()-]+,\s*[A-Z]{2}$")
        .expect("Failed to compile LOCATION_RE")
});

// Employer line ending in a year range: "Acme Co, 2020 - Present".
static EMPLOYER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d{4}\s*-\s*(?:Present|\d{4})\s*$")
        .expect("Failed to compile EMPLOYER_RE")
});

static YEAR_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\d{4}\s*-\s*(?:Present|\d{4})$")
        .expect("Failed to compile YEAR_RANGE_RE")
});

static EDUCATION_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^Education$").expect("Failed to compile EDUCATION_HEADER_RE")
});

static CERTIFICATIONS_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^Licenses and certifications$")
        .expect("Failed to compile CERTIFICATIONS_HEADER_RE")
});

static EXPERIENCE_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^Relevant Work Experience$")
        .expect("Failed to compile EXPERIENCE_HEADER_RE")
});

// Section labels, freshness hints and pagination chrome.
static SKIP_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^Relevant Work Experience$",
        r"(?i)^Education$",
        r"(?i)^Licenses and certifications$",
        r"(?i)^Recently updated:",
        r"(?i)^Active\s",
        r"^\+\d+ more$",
        r"(?i)^Contacted via",
        r"(?i)^Military\s*\(",
    ]
    .iter()
    .filter_map(|pat| Regex::new(pat).ok())
    .collect()
});

static CERT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:RN|LPN|LVN|CNA|BLS|ACLS|NIHSS|AED|CPR|CCRN|CPI|CNOR|",
        r"TNCC|ENPC|WCC|CHHA|ARNP|APN|APRN|SHRM|IV Certification|",
        r"Driver's License|Compact License|Graduate Nurse|",
        r"Paramedic License|Non-CDL Class C|Pharmacy Technician License|",
        r"Pharmacy Technician Certification|Licensed Nursing Home Administrator|",
        r"Certified Registered Nurse Practitioner|SHRM Certified Professional|",
        r"BLS Instructor Certification|Certified Case Manager|",
        r"First Aid Certification|Heartsaver Certification)$",
    ))
    .expect("Failed to compile CERT_RE")
});

static FOUR_DIGITS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{4}").expect("Failed to compile FOUR_DIGITS_RE")
});

// Trailing ", MBA, RN" style run on a name-shaped line.
static NAME_CREDENTIAL_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i),\s*(?:MBA|SHRM-CP|RN|BSN|MSN|PhD|MD|DO|NP|CRNP|DNP|LPN)",
        r"(?:\s*,\s*(?:MBA|SHRM-CP|RN|BSN|MSN|PhD|MD|DO|NP|CRNP|DNP|LPN))*\s*$",
    ))
    .expect("Failed to compile NAME_CREDENTIAL_SUFFIX_RE")
});

static NAME_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z'-]+$").expect("Failed to compile NAME_WORD_RE")
});

/// Degree names, school levels and vocational terms. Matched as lowercase substrings.
const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "associate",
    "diploma",
    "certificate",
    "certification",
    "b.s.",
    "b.a.",
    "m.s.",
    "m.a.",
    "bsn",
    "msn",
    "m.b.a.",
    "mba",
    "phd",
    "ph.d.",
    "some college",
    "high school",
    "cosmetologist",
    "licensed practitioner nurse",
];

/// Degree, license and certification abbreviations that trail names and
/// headlines in search-result dialects.
const CREDENTIAL_TOKENS: &[&str] = &[
    "RN", "BSN", "MSN", "ADN", "ASN", "LPN", "LVN", "CNA", "APRN", "ARNP", "NP", "FNP",
    "FNP-BC", "FNP-C", "AGNP", "AGNP-C", "AGACNP-BC", "PMHNP-BC", "CRNP", "CRNA", "DNP",
    "CCRN", "CEN", "CPN", "CNOR", "CMSRN", "PCCN", "OCN", "RNC", "RNC-OB", "NE-BC",
    "TCRN", "CPEN", "CHPN", "WCC", "CWOCN", "CDCES", "BLS", "ACLS", "PALS", "NRP",
    "TNCC", "MD", "DO", "PA", "PA-C", "PHD", "PH.D.", "PHARMD", "DPT", "PT", "OT",
    "OTR", "OTR/L", "SLP", "CCC-SLP", "RRT", "CRT", "RT", "MPH", "MHA", "MPA", "MBA",
    "MS", "MA", "BS", "BA", "MSW", "LCSW", "LMSW", "LPC", "LMFT", "CPA", "PMP", "CPHQ",
    "CPHIMS", "SHRM-CP", "SHRM-SCP", "PHR", "SPHR", "CHHA", "CMA", "CPT", "CPHT",
    "EMT", "EMT-P", "FACHE", "CCM", "CPC", "RHIA", "RHIT",
];

// --- Predicates ---

/// `"<City>, <ST>"` with a two-letter uppercase state code, anchored to the full line.
pub fn is_location_line(line: &str) -> bool {
    LOCATION_RE.is_match(line)
}

/// Line ending in a year range, tolerating a leading employer name.
pub fn is_employer_line(line: &str) -> bool {
    EMPLOYER_RE.is_match(line)
}

/// A bare year range such as `"2022 - 2023"` or `"2025 - Present"`.
pub fn is_year_range_line(line: &str) -> bool {
    YEAR_RANGE_RE.is_match(line)
}

pub fn is_education_header(line: &str) -> bool {
    EDUCATION_HEADER_RE.is_match(line)
}

pub fn is_certifications_header(line: &str) -> bool {
    CERTIFICATIONS_HEADER_RE.is_match(line)
}

pub fn is_experience_header(line: &str) -> bool {
    EXPERIENCE_HEADER_RE.is_match(line)
}

/// Blank lines and known section/metadata headers and trailers.
pub fn is_skip_line(line: &str) -> bool {
    line.is_empty() || SKIP_RE.iter().any(|re| re.is_match(line))
}

pub fn is_education_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    EDUCATION_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

pub fn is_cert_line(line: &str) -> bool {
    CERT_RE.is_match(line)
}

/// A name is 2 to 6 words of letters, apostrophes and hyphens (parentheses and
/// periods tolerated), with no 4-digit run and an optional credential suffix.
pub fn is_name_line(line: &str) -> bool {
    if line.is_empty() || FOUR_DIGITS_RE.is_match(line) {
        return false;
    }

    let name_part = NAME_CREDENTIAL_SUFFIX_RE.replace(line, "");
    let words: Vec<&str> = name_part.split_whitespace().collect();
    if !(2..=6).contains(&words.len()) {
        return false;
    }

    words.iter().all(|word| {
        let cleaned: String = word.chars().filter(|c| !matches!(c, '(' | ')' | '.')).collect();
        NAME_WORD_RE.is_match(&cleaned)
    })
}

/// True when `token` is a known credential abbreviation (case-insensitive).
pub fn is_credential_token(token: &str) -> bool {
    let upper = token.trim().to_uppercase();
    !upper.is_empty() && CREDENTIAL_TOKENS.contains(&upper.as_str())
}

/// True when every comma- or whitespace-separated token of `text` is a credential.
pub fn is_credential_list(text: &str) -> bool {
    let mut tokens = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .peekable();
    tokens.peek().is_some() && tokens.all(is_credential_token)
}

/// Removes a trailing run of comma-separated credentials:
/// `"Jane Doe, BSN, RN"` becomes `"Jane Doe"`.
pub fn strip_credential_suffix(text: &str) -> &str {
    let mut end = text.trim_end().len();
    loop {
        let head = &text[..end];
        let Some(comma) = head.rfind(',') else { break };
        if !is_credential_list(&head[comma + 1..]) {
            break;
        }
        end = head[..comma].trim_end().len();
    }
    text[..end].trim()
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_requires_two_letter_uppercase_state() {
        assert!(is_location_line("Austin, TX"));
        assert!(is_location_line("St. Mary's (North), MO"));
        assert!(is_location_line("Winston-Salem,NC"));
        assert!(!is_location_line("Austin, Texas"));
        assert!(!is_location_line("Austin, tx"));
        assert!(!is_location_line("Jane Doe"));
    }

    #[test]
    fn employer_line_matches_trailing_year_range() {
        assert!(is_employer_line("Acme Co, 2020 - Present"));
        assert!(is_employer_line("Baylor Scott & White 2018-2021"));
        assert!(is_employer_line("Acme 2020 - present  "));
        assert!(!is_employer_line("Acme Co, 2020"));
        assert!(!is_employer_line("2020 - Present at Acme"));
    }

    #[test]
    fn year_range_is_full_line_only() {
        assert!(is_year_range_line("2025 - Present"));
        assert!(is_year_range_line("2022 - 2023"));
        assert!(!is_year_range_line("Acme Co, 2020 - Present"));
    }

    #[test]
    fn skip_lines_cover_headers_and_chrome() {
        assert!(is_skip_line(""));
        assert!(is_skip_line("Education"));
        assert!(is_skip_line("LICENSES AND CERTIFICATIONS"));
        assert!(is_skip_line("Recently updated: 3 days ago"));
        assert!(is_skip_line("Active today"));
        assert!(is_skip_line("+4 more"));
        assert!(is_skip_line("Contacted via email"));
        assert!(is_skip_line("Military (4 years)"));
        assert!(!is_skip_line("Activities Coordinator"));
        assert!(!is_skip_line("Registered Nurse"));
    }

    #[test]
    fn section_headers_are_case_insensitive() {
        assert!(is_education_header("EDUCATION"));
        assert!(is_certifications_header("Licenses and Certifications"));
        assert!(is_experience_header("relevant work experience"));
        assert!(!is_education_header("Education Coordinator"));
    }

    #[test]
    fn education_keywords_match_substrings() {
        assert!(is_education_line("BSN Nursing"));
        assert!(is_education_line("Bachelor's degree in Biology"));
        assert!(is_education_line("High School Diploma"));
        assert!(!is_education_line("Registered Nurse"));
    }

    #[test]
    fn cert_line_is_full_line_match() {
        assert!(is_cert_line("RN"));
        assert!(is_cert_line("bls"));
        assert!(is_cert_line("Driver's License"));
        assert!(is_cert_line("First Aid Certification"));
        assert!(!is_cert_line("RN Case Manager"));
    }

    #[test]
    fn name_shaped_lines() {
        assert!(is_name_line("Jane A. Doe"));
        assert!(is_name_line("Mary-Kate O'Neil"));
        assert!(is_name_line("Robert (Bob) Smith"));
        assert!(is_name_line("John Smith, MBA, SHRM-CP"));
        assert!(is_name_line("Charge Nurse Supervisor"));
        assert!(!is_name_line("Jane"));
        assert!(!is_name_line("Austin, TX"));
        assert!(!is_name_line("Acme Co 2020"));
        assert!(!is_name_line("one two three four five six seven"));
    }

    #[test]
    fn credential_tokens_and_lists() {
        assert!(is_credential_token("bsn"));
        assert!(is_credential_token(" RN "));
        assert!(!is_credential_token("Nurse"));
        assert!(is_credential_list("BSN, RN, CCRN"));
        assert!(is_credential_list("MSN RN"));
        assert!(!is_credential_list(""));
        assert!(!is_credential_list("RN Case Manager"));
    }

    #[test]
    fn strips_trailing_credential_runs() {
        assert_eq!(strip_credential_suffix("Jane Doe, BSN, RN"), "Jane Doe");
        assert_eq!(strip_credential_suffix("Jane Doe, MSN RN"), "Jane Doe");
        assert_eq!(strip_credential_suffix("Jane Doe"), "Jane Doe");
        assert_eq!(strip_credential_suffix("Doe, Jane"), "Doe, Jane");
    }
}
