//! Typed, enumerable word tables backing the per-language profiles.
//!
//! One file per concern. Tables are static slices; `LanguageProfile` folds
//! them into hash sets once at engine construction, so the hot path never
//! does string-keyed dispatch.

pub(crate) mod appositions;
pub(crate) mod auxiliaries;
pub(crate) mod connectors;
pub(crate) mod domains;
pub(crate) mod emphatics;
pub(crate) mod prepositions;
pub(crate) mod units;
