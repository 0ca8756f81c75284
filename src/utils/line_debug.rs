// src/utils/line_debug.rs
use std::fmt::Write;

use crate::extractors::Source;

/// One non-blank input line with the class the dialect's predicates assign it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedLine<'a> {
    pub number: usize, // 1-based line number in the original text
    pub label: &'static str,
    pub text: &'a str,
}

/// Classifies every non-blank line of `text` the way `source`'s parser would
/// see it in isolation. Context (lookahead, section state) is not applied.
pub fn annotate_lines(text: &str, source: Source) -> Vec<AnnotatedLine<'_>> {
    let strategy = source.strategy();
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| AnnotatedLine {
            number,
            label: strategy.label(line),
            text: line,
        })
        .collect()
}

/// Renders annotations one per line: `"  12 [location    ] Austin, TX"`.
pub fn render_annotations(lines: &[AnnotatedLine<'_>]) -> String {
    let mut out = String::new();
    for line in lines {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{:>4} [{:<12}] {}", line.number, line.label, line.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotates_non_blank_lines_with_original_numbers() {
        let text = "Jane Doe\n\n  Austin, TX  \nRegistered Nurse\nAcme, 2020 - Present\n";
        let lines = annotate_lines(text, Source::Indeed);

        let summary: Vec<(usize, &str)> = lines.iter().map(|l| (l.number, l.label)).collect();
        assert_eq!(
            summary,
            vec![(1, "name?"), (3, "location"), (4, "name?"), (5, "employer")]
        );
        assert_eq!(lines[1].text, "Austin, TX");
    }

    #[test]
    fn labels_depend_on_source() {
        let line = "Austin, Texas, United States";
        assert_eq!(annotate_lines(line, Source::Signalhire)[0].label, "location");
        assert_eq!(annotate_lines(line, Source::Indeed)[0].label, "title");
    }

    #[test]
    fn renders_aligned_columns() {
        let rendered = render_annotations(&annotate_lines("* A\nJohn Smith", Source::Signalhire));
        assert_eq!(rendered, "   1 [marker      ] * A\n   2 [other       ] John Smith\n");
    }
}
