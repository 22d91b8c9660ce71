//! Domain-name data: TLD sets, per-language label exclusions, and the
//! well-known-domain allowlist.
//!
//! Compound TLDs must be matched before single TLDs so that `bbc.co.uk` never
//! half-captures as `bbc.co`.

/// Single-label TLDs recognized in `label.tld` patterns.
pub(crate) const SINGLE_TLDS: &[&str] = &[
    "com", "net", "org", "info", "io", "co", "es", "de", "fr", "it", "mx", "br", "ar", "cl",
    "uk", "us", "tv", "me", "app", "dev", "ai", "edu", "gov",
];

/// Enumerated compound TLDs.
pub(crate) const COMPOUND_TLDS: &[&str] = &[
    "co.uk", "org.uk", "gov.uk", "com.mx", "com.ar", "com.br", "co.jp", "com.au", "co.nz",
    "com.es",
];

/// Common Spanish words that coincide with a plausible domain label.
///
/// "uno.de" in Spanish speech is "uno de", not a German domain.
pub(crate) const SPANISH_LABEL_EXCLUSIONS: &[&str] = &[
    "uno", "una", "algo", "nada", "cosa", "casa", "jugar", "trabajo", "tiempo", "gente", "mundo",
    "vida", "parte", "forma", "caso", "lugar", "momento", "hablar", "tratar", "acabar",
];

pub(crate) const ENGLISH_LABEL_EXCLUSIONS: &[&str] = &[
    "just", "like", "about", "tell", "trust", "join", "do", "let", "see", "show", "follow",
    "help", "call", "kind", "sort",
];

pub(crate) const FRENCH_LABEL_EXCLUSIONS: &[&str] = &[
    "un", "une", "chose", "rien", "temps", "gens", "monde", "vie", "part", "moment", "jouer",
    "parler",
];

pub(crate) const GERMAN_LABEL_EXCLUSIONS: &[&str] = &[
    "eins", "etwas", "nichts", "ding", "haus", "zeit", "leute", "welt", "leben", "teil",
    "moment", "spielen",
];

/// Well-known real `.de` domains that stay maskable even for Spanish, where
/// the `.de` TLD is otherwise dropped from the candidate set.
pub(crate) const WELL_KNOWN_DE_DOMAINS: &[&str] = &[
    "amazon.de", "google.de", "web.de", "gmx.de", "spiegel.de", "bild.de", "zeit.de",
];
