// crates/ugaloc-core/src/traits.rs

use crate::text::fold_key;
use serde::Deserialize;

/// Storage backend for the strings held by the database.
///
/// This abstraction allows the crate to swap how textual data is stored
/// internally (for example to use a more compact interned type) without
/// changing the public API of accessors that return `&str` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and ensure the
/// associated type can be serialized/deserialized so databases can be
/// round-tripped through serde.
pub trait LocBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + serde::Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;

    /// Convert an `&str` into the backend string representation.
    fn str_from(s: &str) -> Self::Str;

    /// Convert backend string to owned Rust `String`.
    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes Unicode-aware, accent-insensitive and
/// case-insensitive comparisons based on [`fold_key`]. Implementors provide a
/// `&str` view of their canonical name via [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`] — equality on folded form
/// - [`NameMatch::name_contains`] — substring match on folded form
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive (and accent-insensitive) name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Case-insensitive (and accent-insensitive) substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}
