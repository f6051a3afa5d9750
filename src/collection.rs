//! The immutable translation collection and its operation set.
//!
//! Every transform builds a fresh working index through
//! [`TranslationCollection::assign`] and publishes it as a new collection;
//! the receiver is never modified. Traversal (`iter`/`for_each`) borrows the
//! current instance instead of constructing anything.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::data::{TranslationData, TranslationIndex};
use crate::error::CollectionError;

/// Immutable two-level collection of translation entries, grouped by
/// context and keyed by translation key within each context.
///
/// # Example
///
/// ```
/// use lingot::{TranslationCollection, TranslationData};
///
/// let extracted = TranslationCollection::default()
///     .add("title", TranslationData::new("Welcome", "home"))
///     .add("title", TranslationData::new("Settings", "settings"));
///
/// // Same key may live in several contexts.
/// assert_eq!(extracted.count("home"), 1);
/// assert_eq!(extracted.count("settings"), 1);
/// assert_eq!(extracted.remove("title").len(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationCollection {
    values: TranslationIndex,
}

impl TranslationCollection {
    /// Merge one entry into a working index, keyed under the entry's own
    /// `context` field. Overwrites an existing entry at the same key.
    ///
    /// This is the single place entries are written, which is what keeps the
    /// bucket/`context` agreement invariant: an entry can only ever land in
    /// the bucket its `context` names.
    pub fn assign(values: &mut TranslationIndex, key: impl Into<String>, data: TranslationData) {
        values
            .entry(data.context.clone())
            .or_default()
            .insert(key.into(), data);
    }

    /// Wrap an existing index directly, without copying.
    pub fn new(values: TranslationIndex) -> Self {
        Self { values }
    }

    /// Read-only view of the underlying index.
    pub fn values(&self) -> &TranslationIndex {
        &self.values
    }

    /// Add a single entry, overwriting any existing entry at the same key
    /// and context. Contexts on either side that don't collide carry
    /// through unchanged.
    pub fn add(&self, key: impl Into<String>, data: TranslationData) -> Self {
        let mut batch = TranslationIndex::new();
        Self::assign(&mut batch, key, data);
        self.merged(batch)
    }

    /// Add parallel sequences of keys and entries as one batch. Later pairs
    /// at the same key and context overwrite earlier ones within the batch;
    /// the batch then merges like [`add`](Self::add).
    ///
    /// Fails with [`CollectionError::LengthMismatch`] before anything is
    /// merged when the sequences differ in length, since zipping misaligned
    /// sequences would silently attach entries to the wrong keys.
    pub fn add_keys(
        &self,
        keys: Vec<impl Into<String>>,
        data: Vec<TranslationData>,
    ) -> Result<Self, CollectionError> {
        if keys.len() != data.len() {
            return Err(CollectionError::LengthMismatch {
                keys: keys.len(),
                data: data.len(),
            });
        }

        let mut batch = TranslationIndex::new();
        for (key, entry) in keys.into_iter().zip(data) {
            Self::assign(&mut batch, key, entry);
        }
        Ok(self.merged(batch))
    }

    /// Remove a key from every context it appears in.
    pub fn remove(&self, key: &str) -> Self {
        self.filter(|k, _| k != key)
    }

    /// Iterate over every `(key, entry)` pair, contexts in index order and
    /// keys in bucket order. Order is only contractual immediately after
    /// [`sort`](Self::sort)/[`sort_by`](Self::sort_by).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TranslationData)> {
        self.values
            .values()
            .flat_map(|bucket| bucket.iter().map(|(key, data)| (key.as_str(), data)))
    }

    /// Visit every `(key, entry)` pair. Returns `&self` for chaining;
    /// unlike the transforms, traversal never constructs a new collection.
    pub fn for_each(&self, mut f: impl FnMut(&str, &TranslationData)) -> &Self {
        for (key, data) in self.iter() {
            f(key, data);
        }
        self
    }

    /// Keep only the pairs the predicate accepts. Contexts left without
    /// entries are absent from the result, not kept as empty buckets.
    pub fn filter(&self, mut pred: impl FnMut(&str, &TranslationData) -> bool) -> Self {
        let mut values = TranslationIndex::new();
        for (key, data) in self.iter() {
            if pred(key, data) {
                Self::assign(&mut values, key, data.clone());
            }
        }
        Self::new(values)
    }

    /// Replace each entry with `f`'s result. The returned entry's own
    /// `context` field decides placement, so a context-changing `f` moves
    /// the entry to a different bucket under the same key.
    pub fn map(&self, mut f: impl FnMut(&str, &TranslationData) -> TranslationData) -> Self {
        let mut values = TranslationIndex::new();
        for (key, data) in self.iter() {
            Self::assign(&mut values, key, f(key, data));
        }
        Self::new(values)
    }

    /// Deep merge with another collection, context-by-context and
    /// key-by-key; `other`'s entry wins when both sides hold the same key
    /// in the same context.
    pub fn union(&self, other: &Self) -> Self {
        self.merged(other.values.clone())
    }

    /// Keep the entries of `self` whose key and context also exist in
    /// `other`. Entry contents always come from `self`; `other` only acts
    /// as the membership filter.
    pub fn intersect(&self, other: &Self) -> Self {
        self.filter(|key, data| other.has(key, &data.context))
    }

    /// True iff the context exists and contains the key.
    pub fn has(&self, key: &str, context: &str) -> bool {
        self.values
            .get(context)
            .is_some_and(|bucket| bucket.contains_key(key))
    }

    /// Look up an entry; `None` when the context or key is absent.
    pub fn get(&self, key: &str, context: &str) -> Option<&TranslationData> {
        self.values.get(context).and_then(|bucket| bucket.get(key))
    }

    /// Keys of a context in current iteration order.
    ///
    /// Addressing an absent context fails with
    /// [`CollectionError::ContextNotFound`]; the graceful degradation paths
    /// live on [`count`](Self::count) and [`is_empty`](Self::is_empty).
    pub fn keys(&self, context: &str) -> Result<Vec<&str>, CollectionError> {
        self.values
            .get(context)
            .map(|bucket| bucket.keys().map(String::as_str).collect())
            .ok_or_else(|| CollectionError::ContextNotFound(context.to_string()))
    }

    /// Number of entries in a context, 0 when the context is absent.
    pub fn count(&self, context: &str) -> usize {
        self.values.get(context).map_or(0, |bucket| bucket.len())
    }

    /// True iff the context is absent or holds no entries.
    pub fn is_empty(&self, context: &str) -> bool {
        self.values.get(context).is_none_or(|bucket| bucket.is_empty())
    }

    /// Context names in index order.
    pub fn contexts(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }

    /// Total number of entries across all contexts.
    pub fn len(&self) -> usize {
        self.values.values().map(|bucket| bucket.len()).sum()
    }

    /// True iff no context holds any entry.
    pub fn is_collection_empty(&self) -> bool {
        self.values.values().all(|bucket| bucket.is_empty())
    }

    /// Rebuild each context with its keys in natural string order.
    ///
    /// This is the one transform whose resulting iteration order is
    /// contractual: enumeration on the result visits keys in sorted order
    /// within each context. Context order itself stays untouched.
    pub fn sort(&self) -> Self {
        self.sort_by(|a, b| a.cmp(b))
    }

    /// Like [`sort`](Self::sort) with a caller-supplied key comparator.
    pub fn sort_by(&self, mut cmp: impl FnMut(&str, &str) -> Ordering) -> Self {
        let mut values = TranslationIndex::new();
        for bucket in self.values.values() {
            for (key, data) in bucket.clone().sorted_by(|a, _, b, _| cmp(a, b)) {
                Self::assign(&mut values, key, data);
            }
        }
        Self::new(values)
    }

    /// Deep merge of the current index and a working overlay: contexts
    /// present on one side only carry through, shared contexts merge
    /// key-by-key with the overlay winning on collision.
    fn merged(&self, overlay: TranslationIndex) -> Self {
        let mut values = self.values.clone();
        for (context, bucket) in overlay {
            values.entry(context).or_default().extend(bucket);
        }
        Self::new(values)
    }
}
