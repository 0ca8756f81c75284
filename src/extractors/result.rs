// src/extractors/result.rs
use serde::{Deserialize, Serialize};

/// One detected profile. Titles never repeat within a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    pub location: String, // Empty when the dialect never located the person
    pub titles: Vec<String>,
}

impl PersonRecord {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            titles: Vec::new(),
        }
    }

    /// Appends `title` unless it is empty or already recorded for this person.
    pub fn push_title(&mut self, title: &str) {
        if !title.is_empty() && !self.titles.iter().any(|t| t == title) {
            self.titles.push(title.to_string());
        }
    }
}

/// Public shape of one extraction call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResult {
    pub names: Vec<String>,
    pub locations: Vec<String>,
    pub titles: Vec<String>,
    pub people: Vec<PersonRecord>,
}

impl ProfileResult {
    /// Folds parsed records into the result, keeping the first occurrence of
    /// every name, location and title. `people` is passed through unchanged.
    pub fn from_people(people: Vec<PersonRecord>) -> Self {
        let mut result = Self::default();

        for person in &people {
            push_unique(&mut result.names, &person.name);
            push_unique(&mut result.locations, &person.location);
            for title in &person.titles {
                push_unique(&mut result.titles, title);
            }
        }

        result.people = people;
        result
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

fn push_unique(seen: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !seen.iter().any(|v| v == value) {
        seen.push(value.to_string());
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, location: &str, titles: &[&str]) -> PersonRecord {
        let mut record = PersonRecord::new(name, location);
        for title in titles {
            record.push_title(title);
        }
        record
    }

    #[test]
    fn push_title_skips_duplicates_and_blanks() {
        let record = person("Jane Doe", "", &["Nurse", "", "Nurse", "Charge Nurse"]);
        assert_eq!(record.titles, vec!["Nurse", "Charge Nurse"]);
    }

    #[test]
    fn flat_lists_keep_first_seen_order() {
        let result = ProfileResult::from_people(vec![
            person("Jane Doe", "Austin, TX", &["Nurse", "Charge Nurse"]),
            person("John Roe", "", &["Charge Nurse", "Supervisor"]),
            person("Jane Doe", "Dallas, TX", &["Nurse"]),
        ]);

        assert_eq!(result.names, vec!["Jane Doe", "John Roe"]);
        assert_eq!(result.locations, vec!["Austin, TX", "Dallas, TX"]);
        assert_eq!(result.titles, vec!["Nurse", "Charge Nurse", "Supervisor"]);
        assert_eq!(result.people.len(), 3);
        assert_eq!(result.people[1].location, "");
    }

    #[test]
    fn empty_input_gives_empty_result() {
        let result = ProfileResult::from_people(Vec::new());
        assert!(result.is_empty());
        assert_eq!(result, ProfileResult::default());
    }

    #[test]
    fn serializes_to_the_public_json_shape() {
        let result = ProfileResult::from_people(vec![person("Jane Doe", "Austin, TX", &["Nurse"])]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "names": ["Jane Doe"],
                "locations": ["Austin, TX"],
                "titles": ["Nurse"],
                "people": [{"name": "Jane Doe", "location": "Austin, TX", "titles": ["Nurse"]}],
            })
        );
    }
}
