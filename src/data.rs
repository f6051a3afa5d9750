//! Translation entry data and the two-level index it is stored in.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single translatable entry discovered by an extractor.
///
/// The `context` field doubles as the outer grouping key of the index the
/// entry lives under: an entry stored in bucket `C` always carries
/// `context == C`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationData {
    /// The translatable text.
    pub value: String,

    /// Grouping dimension, typically a namespace. The empty string is an
    /// ordinary context, not a sentinel for "no context".
    #[serde(default)]
    pub context: String,

    /// Provenance metadata (e.g. "src/app/home.component.html:12").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Free-form translator note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl TranslationData {
    pub fn new(value: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            context: context.into(),
            reference: None,
            comment: None,
        }
    }

    /// Attach a source reference.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Attach a translator comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Entries of a single context, keyed by translation key.
pub type ContextBucket = IndexMap<String, TranslationData>;

/// Two-level index: context -> (key -> entry).
///
/// Insertion order is preserved on both levels, which is what makes the
/// iteration-order contract of [`sort`](crate::TranslationCollection::sort)
/// representable.
pub type TranslationIndex = IndexMap<String, ContextBucket>;
