// ABOUTME: Splits generated text into named sections using colon-terminated header lines
// ABOUTME: Provides a case-insensitive section map consumed by the field extractors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

use std::collections::HashMap;

use super::markers::starts_with_marker;

/// Case-insensitive map from section name to section body
///
/// Names are stored upper-cased. Bodies are the section's non-blank lines,
/// each trimmed, joined with `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    sections: HashMap<String, String>,
}

impl SectionMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a section
    pub fn insert(&mut self, name: &str, body: String) {
        self.sections.insert(name.trim().to_uppercase(), body);
    }

    /// Look up a section body by name, ignoring case
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.sections
            .get(&name.trim().to_uppercase())
            .map(String::as_str)
    }

    /// First non-blank body among `names`, in the order given
    #[must_use]
    pub fn first_non_empty(&self, names: &[&str]) -> Option<&str> {
        names
            .iter()
            .filter_map(|name| self.get(name))
            .find(|body| !body.trim().is_empty())
    }

    /// Whether a section with this name exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Section names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sections.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of sections
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether no sections were found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Header name if `line` is a section header
///
/// A header is a trimmed line ending in `:` that does not start with a list
/// marker. Returns `None` for non-headers and for headers whose name is blank.
fn header_name(line: &str) -> Option<&str> {
    let name = line.strip_suffix(':')?;
    if starts_with_marker(line) {
        return None;
    }
    Some(name.trim())
}

/// Parse raw text into sections
///
/// Lines before the first header are discarded. A repeated header replaces
/// the earlier section of the same name.
#[must_use]
pub fn parse_sections(text: &str) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut current_section: Option<&str> = None;
    let mut current_content: Vec<&str> = Vec::new();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = header_name(line) {
            if let Some(section_name) = current_section {
                save_section(&mut sections, section_name, &current_content);
            }
            current_section = (!name.is_empty()).then_some(name);
            current_content.clear();
        } else if current_section.is_some() {
            current_content.push(line);
        }
    }

    if let Some(section_name) = current_section {
        save_section(&mut sections, section_name, &current_content);
    }

    sections
}

fn save_section(sections: &mut SectionMap, name: &str, lines: &[&str]) {
    sections.insert(name, lines.join("\n"));
}
