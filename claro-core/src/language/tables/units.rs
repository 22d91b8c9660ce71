//! Time and measurement unit words per language.
//!
//! A boundary between a number and one of these ("cinco" | "años") is a
//! recognizer artifact, never a sentence end. Stored lowercase; lookups go
//! through `strip_word`.

pub(crate) const ENGLISH: &[&str] = &[
    "years", "year", "months", "month", "days", "day", "hours", "hour", "minutes", "minute",
    "seconds", "second", "weeks", "week", "percent", "dollars", "euros", "miles", "kilometers",
    "meters", "pounds", "kilos", "grams", "liters", "times", "thousand", "million", "billion",
    "degrees",
];

pub(crate) const SPANISH: &[&str] = &[
    "años", "año", "meses", "mes", "días", "día", "horas", "hora", "minutos", "minuto",
    "segundos", "segundo", "semanas", "semana", "ciento", "euros", "dólares", "pesos",
    "kilómetros", "metros", "kilos", "gramos", "litros", "veces", "mil", "millones", "millón",
    "grados", "puntos",
];

pub(crate) const FRENCH: &[&str] = &[
    "ans", "an", "mois", "jours", "jour", "heures", "heure", "minutes", "minute", "secondes",
    "seconde", "semaines", "semaine", "euros", "kilomètres", "mètres", "kilos", "grammes",
    "litres", "fois", "mille", "millions", "degrés", "points",
];

pub(crate) const GERMAN: &[&str] = &[
    "jahre", "jahren", "jahr", "monate", "monaten", "monat", "tage", "tagen", "tag", "stunden",
    "stunde", "minuten", "minute", "sekunden", "sekunde", "wochen", "woche", "prozent", "euro",
    "kilometer", "meter", "kilo", "gramm", "liter", "mal", "uhr", "tausend", "millionen", "grad",
];
