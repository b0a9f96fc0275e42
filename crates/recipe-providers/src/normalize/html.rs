// ABOUTME: Markup stripping for provider-supplied HTML summaries
// ABOUTME: Removes tags, keeps inner text, and leaves entities untouched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use regex::Regex;
use std::sync::LazyLock;

/// Any opening, closing, or self-closing tag
static HTML_TAG_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[^>]*>").ok());

/// Remove HTML tags from `input` and trim the result
#[must_use]
pub fn strip_html(input: &str) -> String {
    HTML_TAG_PATTERN.as_ref().map_or_else(
        || input.trim().to_owned(),
        |pattern| pattern.replace_all(input, "").trim().to_owned(),
    )
}
