//! Industry suggestions for a company.

use std::fmt;

/// Ordered pool used to pad short suggestion lists.
pub const FALLBACK_POOL: [&str; 5] = ["Technology", "Finance", "Healthcare", "Retail", "Manufacturing"];

/// Exactly three candidate industries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryList([String; 3]);

impl IndustryList {
    pub fn new(first: impl Into<String>, second: impl Into<String>, third: impl Into<String>) -> Self {
        Self([first.into(), second.into(), third.into()])
    }

    /// `Technology`, `Finance`, `Healthcare`; used when the suggestion request fails.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_POOL[0], FALLBACK_POOL[1], FALLBACK_POOL[2])
    }

    /// Parse a numbered-list response into three industries.
    ///
    /// A line counts as an item when its trimmed form starts with a digit; the label
    /// is whatever follows the first `.`, trimmed. Missing entries are filled from
    /// [`FALLBACK_POOL`], surplus entries are dropped.
    pub fn from_response(text: &str) -> Self {
        let mut items: Vec<String> = Vec::with_capacity(3);
        for line in text.lines() {
            if items.len() == 3 {
                break;
            }
            let Some(label) = numbered_item(line) else { continue };
            if label.is_empty() || items.iter().any(|existing| existing == label) {
                continue;
            }
            items.push(label.to_string());
        }

        for fallback in FALLBACK_POOL {
            if items.len() == 3 {
                break;
            }
            if !items.iter().any(|existing| existing == fallback) {
                items.push(fallback.to_string());
            }
        }

        let mut items = items.into_iter();
        // FALLBACK_POOL has five distinct entries, so at most two can collide.
        let mut next = || items.next().unwrap_or_default();
        Self([next(), next(), next()])
    }

    /// Industry at a 1-based menu position.
    pub fn get(&self, position: usize) -> Option<&str> {
        position.checked_sub(1).and_then(|index| self.0.get(index)).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for IndustryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

fn numbered_item(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if !trimmed.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    let (_, label) = trimmed.split_once('.')?;
    Some(label.trim())
}
