//! Geographic apposition heads for the appositive merge pass.
//!
//! "de Texas." + "Estados Unidos" is one apposition ("de Texas, Estados
//! Unidos"), not two sentences. Only Spanish carries entries today; the pass
//! is data-driven, so other languages are an additional table, not new code.

pub(crate) const SPANISH: &[&str] = &[
    "Estados Unidos",
    "México",
    "España",
    "Argentina",
    "Colombia",
    "Chile",
    "Perú",
    "Venezuela",
    "Ecuador",
    "Bolivia",
    "Uruguay",
    "Paraguay",
    "Guatemala",
    "Honduras",
    "Nicaragua",
    "Costa Rica",
    "Panamá",
    "Cuba",
    "Puerto Rico",
    "República Dominicana",
    "América Latina",
    "Latinoamérica",
    "Centroamérica",
    "Sudamérica",
    "Norteamérica",
    "Europa",
    "Reino Unido",
];

pub(crate) const ENGLISH: &[&str] = &[];
pub(crate) const FRENCH: &[&str] = &[];
pub(crate) const GERMAN: &[&str] = &[];
