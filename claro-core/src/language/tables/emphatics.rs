//! Emphatic particles per language.
//!
//! Recognizers emit emphatic repetition as a burst of one-word segments
//! ("No." "No." "No."); the emphatic merge pass collapses such runs. Entries
//! are the canonical accented lowercase forms.

pub(crate) const ENGLISH: &[&str] = &["no", "yes"];

pub(crate) const SPANISH: &[&str] = &["no", "sí"];

pub(crate) const FRENCH: &[&str] = &["oui", "non"];

pub(crate) const GERMAN: &[&str] = &["ja", "nein"];
