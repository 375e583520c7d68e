// Morphological pattern templates
//
// A template is a string of fixed Arabic letters and diacritics
// interleaved with the positional placeholders '1', '2', '3', which stand
// for the root's radicals. There is no escaping mechanism: a digit in a
// template is always a placeholder, so a template cannot contain a literal
// '1', '2' or '3'. That is a documented limitation of the format.

use std::fmt;

use sarf_core::Root;
use sarf_core::character::{is_arabic_letter, is_diacritic};

/// Error raised when a pattern template fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// The template was empty.
    #[error("template is empty")]
    Empty,

    /// The template contains no placeholder at all.
    #[error("template has no root placeholders")]
    NoPlaceholders,

    /// Some of the placeholders 1, 2, 3 never appear.
    #[error("template is missing root positions {missing:?}")]
    MissingPlaceholders { missing: Vec<u8> },

    /// The template contains a character that is neither a placeholder nor
    /// an Arabic letter or diacritic.
    #[error("invalid character in template: '{ch}'")]
    InvalidChar { ch: char },
}

/// A validated morphological pattern template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    /// Validate and build a template.
    ///
    /// Every character must be a placeholder ('1', '2' or '3'), an Arabic
    /// letter, or a diacritic, and each of the three placeholders must
    /// appear at least once.
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TemplateError::Empty);
        }

        let mut seen = [false; 3];
        let mut any_placeholder = false;
        for ch in text.chars() {
            match ch {
                '1' | '2' | '3' => {
                    seen[ch as usize - '1' as usize] = true;
                    any_placeholder = true;
                }
                _ if is_arabic_letter(ch) || is_diacritic(ch) => {}
                _ => return Err(TemplateError::InvalidChar { ch }),
            }
        }
        if !any_placeholder {
            return Err(TemplateError::NoPlaceholders);
        }
        let missing: Vec<u8> = (1..=3u8).filter(|&p| !seen[p as usize - 1]).collect();
        if !missing.is_empty() {
            return Err(TemplateError::MissingPlaceholders { missing });
        }

        Ok(Template {
            text: text.to_string(),
        })
    }

    /// Apply the template to a root: a single left-to-right scan where each
    /// placeholder emits the corresponding radical and every other
    /// character is emitted verbatim. O(template length).
    pub fn apply(&self, root: &Root) -> String {
        self.text
            .chars()
            .map(|ch| match ch {
                '1' => root.radical(1),
                '2' => root.radical(2),
                '3' => root.radical(3),
                other => other,
            })
            .collect()
    }

    /// Number of placeholder occurrences in the template.
    pub fn placeholder_count(&self) -> usize {
        self.text.chars().filter(|c| matches!(c, '1'..='3')).count()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
