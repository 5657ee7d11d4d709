// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Language tags for the `LANGUAGE` parameter (RFC 5646 syntax).
//!
//! Tags are resolved through a [`LanguageTagRegistry`] owned by the caller,
//! which hands out one shared [`LanguageTag`] per distinct tag.

use std::collections::HashMap;
use std::fmt::{self, Display};
use std::sync::Arc;

use crate::error::{IcsError, Result};
use crate::keyword::KW_LANGUAGE;

/// A language tag in normalised casing, e.g. `en-US` or `zh-Hant-TW`.
///
/// Clones share the same allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageTag(Arc<str>);

impl LanguageTag {
    /// The tag as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag, e.g. `en` for `en-US`.
    #[must_use]
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or_default()
    }

    /// Whether two handles point at the same registry entry.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deduplicating registry of language tags.
///
/// Lookups ignore ASCII case, so `EN-us` and `en-US` resolve to the same tag.
#[derive(Debug, Default)]
pub struct LanguageTagRegistry {
    tags: HashMap<String, LanguageTag>,
}

impl LanguageTagRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a tag, registering it on first use.
    ///
    /// ## Errors
    /// Returns [`IcsError::InvalidValue`] if the text is not a well-formed tag.
    pub fn resolve(&mut self, tag: &str) -> Result<LanguageTag> {
        let key = tag.trim().to_ascii_lowercase();
        if let Some(found) = self.tags.get(&key) {
            return Ok(found.clone());
        }

        let normalized = normalize(tag.trim())
            .ok_or_else(|| IcsError::invalid_value(KW_LANGUAGE, tag, "malformed language tag"))?;
        let resolved = LanguageTag(Arc::from(normalized));
        tracing::trace!(tag = %resolved, "registered language tag");
        self.tags.insert(key, resolved.clone());
        Ok(resolved)
    }

    /// Look up a tag without registering it.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&LanguageTag> {
        self.tags.get(&tag.trim().to_ascii_lowercase())
    }

    /// Number of distinct tags registered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether no tag was registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Normalise the casing of each subtag, or `None` if the tag is malformed.
///
/// The primary subtag is lower-cased, a four-letter script subtag is
/// title-cased and a two-letter region subtag is upper-cased. Subtags after
/// a singleton (`x`, `u`, ...) are lower-cased.
fn normalize(tag: &str) -> Option<String> {
    let mut out = String::with_capacity(tag.len());
    let mut in_extension = false;

    for (i, subtag) in tag.split('-').enumerate() {
        if !(1..=8).contains(&subtag.len()) || !subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        if i == 0 && !subtag.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        if i > 0 {
            out.push('-');
        }

        if i == 0 || in_extension {
            out.push_str(&subtag.to_ascii_lowercase());
        } else if subtag.len() == 4 && subtag.chars().all(|c| c.is_ascii_alphabetic()) {
            let mut chars = subtag.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(&chars.as_str().to_ascii_lowercase());
            }
        } else if subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()) {
            out.push_str(&subtag.to_ascii_uppercase());
        } else {
            out.push_str(&subtag.to_ascii_lowercase());
        }

        if i > 0 && subtag.len() == 1 {
            in_extension = true;
        }
    }
    Some(out)
}
