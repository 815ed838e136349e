//! Realm vocabulary
//!
//! Maps the long realm names used in model descriptions (`atmospheric-chemistry`) to
//! their realm codes (`Ac`) and display colours. The built-in table covers the eight
//! earth-system realms; applications add their own through [Vocabulary::insert] or the
//! `[vocabulary]` configuration section.
//!
//! Names are normalised before lookup: surrounding whitespace is trimmed, letters are
//! lowercased and underscores become dashes, so `Land_Surface` finds `land-surface`.

use crate::crs::graph::{CodeError, RealmCode};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Colour for realms without an entry
pub const DEFAULT_COLOR: &str = "#94a3b8";

/// (name, code, colour)
const BUILTIN_REALMS: &[(&str, &str, &str)] = &[
    ("aerosol", "Ae", "#e9c46a"),
    ("atmosphere", "A", "#e76f51"),
    ("atmospheric-chemistry", "Ac", "#f4a261"),
    ("land-ice", "Li", "#7cadbe"),
    ("land-surface", "L", "#8ab17d"),
    ("ocean", "O", "#264653"),
    ("ocean-biogeochemistry", "Ob", "#287271"),
    ("sea-ice", "Si", "#2a9d8f"),
];

static BUILTIN: Lazy<Vocabulary> = Lazy::new(|| {
    let mut vocabulary = Vocabulary::empty();
    for (name, code, color) in BUILTIN_REALMS {
        vocabulary.insert_entry(name, RealmCode::from_validated(code), Some(color));
    }
    vocabulary
});

/// One named realm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealmEntry {
    pub name: String,
    pub code: RealmCode,
    pub color: String,
}

/// Lookup table between realm names, codes and colours
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    by_name: BTreeMap<String, RealmEntry>,
}

/// Normalise a realm name for lookup
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase().replace('_', "-")
}

impl Vocabulary {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in earth-system realms
    pub fn builtin() -> &'static Vocabulary {
        &BUILTIN
    }

    /// Add or replace a realm. The code is checked; a missing colour falls back to
    /// [DEFAULT_COLOR].
    pub fn insert(&mut self, name: &str, code: &str, color: Option<&str>) -> Result<(), CodeError> {
        let code = RealmCode::new(code)?;
        self.insert_entry(name, code, color);
        Ok(())
    }

    fn insert_entry(&mut self, name: &str, code: RealmCode, color: Option<&str>) {
        let name = normalize_name(name);
        let entry = RealmEntry {
            name: name.clone(),
            code,
            color: color.unwrap_or(DEFAULT_COLOR).to_string(),
        };
        self.by_name.insert(name, entry);
    }

    pub fn get(&self, name: &str) -> Option<&RealmEntry> {
        self.by_name.get(&normalize_name(name))
    }

    pub fn code_for(&self, name: &str) -> Option<&RealmCode> {
        self.get(name).map(|entry| &entry.code)
    }

    /// The first name (alphabetically) registered for `code`
    pub fn name_for(&self, code: &RealmCode) -> Option<&str> {
        self.by_name
            .values()
            .find(|entry| &entry.code == code)
            .map(|entry| entry.name.as_str())
    }

    /// Entries in name order
    pub fn entries(&self) -> impl Iterator<Item = &RealmEntry> {
        self.by_name.values()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
