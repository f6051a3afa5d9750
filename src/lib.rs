//! Lingot - immutable translation catalog collection
//!
//! Lingot is the accumulation core of an i18n text-extraction pipeline.
//! Extractors push `(key, entry)` pairs into a [`TranslationCollection`] as
//! they discover translatable text across input sources; exporters enumerate
//! the collected entries (usually after [`TranslationCollection::sort`])
//! before writing an output format such as JSON or PO.
//!
//! Collections are immutable values: every transforming operation returns a
//! brand-new collection and leaves the receiver untouched, so partial results
//! from different sources can be combined freely with `union`/`intersect`
//! without aliasing surprises.
//!
//! ## Module Structure
//!
//! - `collection`: The immutable two-level collection and its operation set
//! - `data`: The translation entry type and the underlying index aliases
//! - `error`: Error types for caller contract violations
//!
//! ## Example
//!
//! ```
//! use lingot::{TranslationCollection, TranslationData};
//!
//! let collection = TranslationCollection::default()
//!     .add("hello", TranslationData::new("Hello", "greeting"))
//!     .add("bye", TranslationData::new("Bye", "greeting"));
//!
//! assert_eq!(collection.count("greeting"), 2);
//! assert!(collection.has("hello", "greeting"));
//! assert!(collection.get("missing", "greeting").is_none());
//! ```

pub mod collection;
pub mod data;
pub mod error;

pub use collection::TranslationCollection;
pub use data::{ContextBucket, TranslationData, TranslationIndex};
pub use error::CollectionError;
