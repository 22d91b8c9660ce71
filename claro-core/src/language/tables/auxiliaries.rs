//! Auxiliary and continuative verb forms, plus past-participle shape tables.
//!
//! Two guard rules read these: a sentence never ends on an auxiliary, and a
//! boundary between an auxiliary and a following past participle is vetoed
//! ("ha" + "terminado" must stay together).

pub(crate) const ENGLISH: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am", "has", "have", "had", "do", "does",
    "did", "will", "would", "can", "could", "shall", "should", "may", "might", "must",
];

pub(crate) const SPANISH: &[&str] = &[
    "es", "son", "era", "eran", "fue", "fueron", "ser", "está", "están", "estaba", "estaban",
    "estoy", "estamos", "estar", "he", "ha", "has", "han", "hemos", "había", "habían", "haber",
    "hay", "voy", "vas", "va", "vamos", "van", "iba", "iban", "puede", "pueden", "podía", "debe",
    "deben", "quiere", "quieren", "tiene", "tienen", "tenía", "tenían",
];

pub(crate) const FRENCH: &[&str] = &[
    "est", "sont", "était", "étaient", "être", "suis", "sommes", "êtes", "a", "ai", "as", "avons",
    "avez", "ont", "avait", "avaient", "avoir", "va", "vais", "vont", "peut", "peuvent", "doit",
    "doivent", "fait", "font", "sera", "seront", "aura", "auront",
];

pub(crate) const GERMAN: &[&str] = &[
    "ist", "sind", "war", "waren", "sein", "bin", "bist", "seid", "hat", "habe", "hast", "haben",
    "hatte", "hatten", "wird", "werden", "wurde", "wurden", "kann", "können", "konnte", "muss",
    "müssen", "soll", "sollen", "will", "wollen", "darf", "mag",
];

/// Regular past-participle suffixes, checked against the stripped word.
pub(crate) const ENGLISH_PARTICIPLE_SUFFIXES: &[&str] = &["ed"];

pub(crate) const SPANISH_PARTICIPLE_SUFFIXES: &[&str] = &[
    "ado", "ido", "ada", "ida", "ados", "idos", "adas", "idas",
];

pub(crate) const FRENCH_PARTICIPLE_SUFFIXES: &[&str] =
    &["é", "ée", "és", "ées", "i", "ie", "is", "ies", "u", "ue", "us", "ues"];

// German regular participles are recognized structurally (ge- prefix with a
// -t/-en tail) in LanguageProfile::looks_like_participle.
pub(crate) const GERMAN_PARTICIPLE_SUFFIXES: &[&str] = &[];

pub(crate) const ENGLISH_IRREGULAR_PARTICIPLES: &[&str] = &[
    "done", "gone", "seen", "been", "made", "said", "taken", "given", "known", "shown", "found",
    "told", "thought", "brought", "bought", "built", "sent", "spent", "kept", "left", "lost",
    "met", "paid", "put", "read", "run", "set", "won", "written", "spoken", "broken", "chosen",
    "driven", "eaten", "fallen", "forgotten", "held", "heard", "hidden", "hit", "hurt", "led",
    "meant", "sold", "stood", "understood", "worn",
];

pub(crate) const SPANISH_IRREGULAR_PARTICIPLES: &[&str] = &[
    "hecho", "dicho", "visto", "puesto", "escrito", "abierto", "vuelto", "muerto", "roto",
    "cubierto", "resuelto", "impreso", "frito", "satisfecho",
];

pub(crate) const FRENCH_IRREGULAR_PARTICIPLES: &[&str] = &[
    "fait", "dit", "mis", "pris", "vu", "su", "pu", "dû", "été", "eu", "venu", "tenu", "mort",
    "né", "ouvert", "offert", "écrit", "compris", "appris", "reçu", "vécu", "lu", "cru", "bu",
];

pub(crate) const GERMAN_IRREGULAR_PARTICIPLES: &[&str] = &[
    "verstanden", "begonnen", "erhalten", "verloren", "vergessen", "bekommen", "erfahren",
    "besprochen", "entschieden", "erreicht", "verkauft", "bezahlt", "erzählt", "verbracht",
];
