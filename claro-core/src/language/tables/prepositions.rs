//! Common prepositions per language.
//!
//! A sentence that would end on one of these is always a recognizer artifact,
//! so the grammatical guard vetoes the boundary.

pub(crate) const ENGLISH: &[&str] = &[
    "of", "in", "on", "at", "to", "for", "with", "from", "by", "about", "into", "over", "under",
    "between", "through", "during", "without", "against", "towards",
];

pub(crate) const SPANISH: &[&str] = &[
    "de", "del", "en", "a", "al", "con", "por", "para", "sin", "sobre", "entre", "hacia", "hasta",
    "desde", "contra", "según", "durante", "mediante", "tras",
];

pub(crate) const FRENCH: &[&str] = &[
    "de", "du", "des", "à", "au", "aux", "en", "dans", "avec", "pour", "par", "sans", "sur",
    "sous", "entre", "vers", "chez", "depuis", "pendant", "contre",
];

pub(crate) const GERMAN: &[&str] = &[
    "von", "vom", "zu", "zum", "zur", "in", "im", "an", "am", "auf", "mit", "für", "ohne", "über",
    "unter", "zwischen", "durch", "bei", "beim", "nach", "seit", "gegen", "aus",
];
