// ABOUTME: Line marker detection and stripping for bulleted and numbered list items
// ABOUTME: Shared by the section parser and the list extraction strategies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

use std::sync::LazyLock;

use regex::Regex;

/// Characters accepted as bullet markers
pub(crate) const BULLET_CHARS: [char; 3] = ['•', '-', '*'];

/// Matches a leading numbered marker such as `1.` or `12.`
/// Stored as Option to handle compilation failures gracefully (should never fail for static patterns)
static NUMBERED_MARKER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d+\.").ok());

/// Matches a numbered marker together with the whitespace after it
static NUMBERED_PREFIX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d+\.\s*").ok());

/// Matches a bullet marker together with the whitespace after it
static BULLET_PREFIX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[•\-\*]\s*").ok());

/// Whether the trimmed line begins with a bullet marker
pub(crate) fn starts_with_bullet(line: &str) -> bool {
    line.trim_start().starts_with(BULLET_CHARS)
}

/// Whether the trimmed line begins with a numbered marker
pub(crate) fn starts_with_number(line: &str) -> bool {
    NUMBERED_MARKER
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(line.trim_start()))
}

/// Whether the trimmed line begins with any list marker
pub(crate) fn starts_with_marker(line: &str) -> bool {
    starts_with_bullet(line) || starts_with_number(line)
}

/// Remove a leading bullet marker and following whitespace
pub(crate) fn strip_bullet(line: &str) -> &str {
    let line = line.trim_start();
    BULLET_PREFIX
        .as_ref()
        .and_then(|pattern| pattern.find(line))
        .map_or(line, |m| &line[m.end()..])
}

/// Remove a leading numbered marker and following whitespace
pub(crate) fn strip_number(line: &str) -> &str {
    let line = line.trim_start();
    NUMBERED_PREFIX
        .as_ref()
        .and_then(|pattern| pattern.find(line))
        .map_or(line, |m| &line[m.end()..])
}

/// Normalize a list item: strip a bullet marker, or failing that a numbered marker, then trim
pub(crate) fn clean_item(line: &str) -> String {
    let trimmed = line.trim();
    let stripped = if starts_with_bullet(trimmed) {
        strip_bullet(trimmed)
    } else {
        strip_number(trimmed)
    };
    stripped.trim().to_owned()
}
