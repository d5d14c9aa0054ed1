//! Built-in Spanish connective inventories.
//!
//! Default phrase lists for the additive and temporal taggers, covering the
//! common Coh-Metrix-style connective classes for Spanish. Callers working
//! on other languages or corpora supply their own lists instead.

/// Additive connectives: addition and reinforcement
pub const SPANISH_ADDITIVE: &[&str] = &[
    "además",
    "asimismo",
    "también",
    "igualmente",
    "de igual manera",
    "de igual modo",
    "del mismo modo",
    "por añadidura",
    "encima",
    "es más",
    "más aún",
    "incluso",
    "por otra parte",
    "por otro lado",
];

/// Temporal connectives: sequencing and simultaneity
pub const SPANISH_TEMPORAL: &[&str] = &[
    "después",
    "después de que",
    "luego",
    "antes",
    "antes de que",
    "mientras",
    "mientras tanto",
    "entretanto",
    "tan pronto como",
    "en cuanto",
    "posteriormente",
    "previamente",
    "simultáneamente",
    "finalmente",
    "al principio",
    "al final",
    "cuando",
];
