// src/extractors/mod.rs
pub mod indeed;
pub mod linkedin;
pub mod patterns;
pub mod result;
pub mod signalhire;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::error::ExtractError;

// Re-export key extraction types for convenience
pub use indeed::IndeedStrategy;
pub use linkedin::LinkedInXrayStrategy;
pub use result::{PersonRecord, ProfileResult};
pub use signalhire::SignalHireStrategy;

/// A parser for one sourcing tool's text layout.
pub trait ExtractionStrategy: Send + Sync {
    /// Stable identifier used in logs.
    fn name(&self) -> &'static str;

    /// Splits the pasted text into person records, in the order they appear.
    fn parse(&self, text: &str) -> Vec<PersonRecord>;

    /// Lexical class of one trimmed line, for debug annotation only.
    fn label(&self, line: &str) -> &'static str;
}

/// The tool the text was copied from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    #[default]
    Indeed,
    Signalhire,
    LinkedinXray,
}

static INDEED: IndeedStrategy = IndeedStrategy;
static SIGNALHIRE: SignalHireStrategy = SignalHireStrategy;
static LINKEDIN_XRAY: LinkedInXrayStrategy = LinkedInXrayStrategy;

impl Source {
    pub fn strategy(self) -> &'static dyn ExtractionStrategy {
        match self {
            Source::Indeed => &INDEED,
            Source::Signalhire => &SIGNALHIRE,
            Source::LinkedinXray => &LINKEDIN_XRAY,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.strategy().name()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "indeed" => Ok(Source::Indeed),
            "signalhire" | "signal_hire" | "signal-hire" => Ok(Source::Signalhire),
            "linkedin_xray" | "linkedin-xray" | "linkedin" | "xray" => Ok(Source::LinkedinXray),
            other => Err(ExtractError::UnknownSource(other.to_string())),
        }
    }
}

/// Extracts people from text copied out of `source`.
///
/// Never fails: unrecognized lines are skipped, so malformed input yields an
/// empty or partial result.
pub fn extract(text: &str, source: Source) -> ProfileResult {
    let strategy = source.strategy();
    let people = strategy.parse(text);
    let result = ProfileResult::from_people(people);

    tracing::debug!(
        "{} extraction: {} people, {} names, {} locations, {} titles",
        strategy.name(),
        result.people.len(),
        result.names.len(),
        result.locations.len(),
        result.titles.len()
    );
    result
}
