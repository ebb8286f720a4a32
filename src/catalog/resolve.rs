//! Name resolution chain
//!
//! Lab reports and extraction services name the same biomarker in many ways.
//! Resolution tries a fixed sequence of pure steps and stops at the first hit:
//!
//! 1. exact canonical key (`"vitaminD"`)
//! 2. lowercased canonical key (`"LDL"` → `ldl`)
//! 3. case-insensitive alias table (`"HGB"` → `hemoglobin`, `"t4, total"` → `totalT4`)
//! 4. case-insensitive catalog display name (`"Non-HDL-C"` → `nonHdlC`)
//! 5. camelCase guess from separated words (`"Free T4"` → `freeT4`)

use rustc_hash::FxHashMap;

use super::references::REFERENCES;
use crate::models::biomarker::BiomarkerId;

/// A single resolution step
pub type ResolveStep = fn(&str, &FxHashMap<&'static str, BiomarkerId>) -> Option<BiomarkerId>;

/// The ordered resolution chain, with a name for each step
pub const RESOLUTION_CHAIN: &[(&str, ResolveStep)] = &[
    ("exact", exact),
    ("lowercase", lowercase),
    ("alias", alias),
    ("display-name", display_name),
    ("camel-case", camel_case),
];

/// Step 1: the input is already a canonical key
pub fn exact(name: &str, _aliases: &FxHashMap<&'static str, BiomarkerId>) -> Option<BiomarkerId> {
    BiomarkerId::from_key(name)
}

/// Step 2: the lowercased input is a canonical key
pub fn lowercase(
    name: &str,
    _aliases: &FxHashMap<&'static str, BiomarkerId>,
) -> Option<BiomarkerId> {
    BiomarkerId::from_key(&name.trim().to_lowercase())
}

/// Step 3: the lowercased input is a known alias
pub fn alias(name: &str, aliases: &FxHashMap<&'static str, BiomarkerId>) -> Option<BiomarkerId> {
    aliases.get(name.trim().to_lowercase().as_str()).copied()
}

/// Step 4: the input matches a catalog display name, ignoring case
pub fn display_name(
    name: &str,
    _aliases: &FxHashMap<&'static str, BiomarkerId>,
) -> Option<BiomarkerId> {
    let normalized = name.trim().to_lowercase();
    REFERENCES
        .iter()
        .find(|reference| reference.name.to_lowercase() == normalized)
        .map(|reference| reference.id)
}

/// Step 5: join separated words into a camelCase key
pub fn camel_case(
    name: &str,
    _aliases: &FxHashMap<&'static str, BiomarkerId>,
) -> Option<BiomarkerId> {
    BiomarkerId::from_key(&to_camel_case(&name.trim().to_lowercase()))
}

/// Drop every run of characters outside `[a-z0-9]` and uppercase the character
/// that follows it. A trailing run is kept as-is.
#[must_use]
pub fn to_camel_case(lower: &str) -> String {
    let mut out = String::with_capacity(lower.len());
    let mut pending = String::new();

    for c in lower.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending.is_empty() {
                out.push(c);
            } else {
                pending.clear();
                out.push(c.to_ascii_uppercase());
            }
        } else {
            pending.push(c);
        }
    }

    out.push_str(&pending);
    out
}
