//! Play catalog: categories, plays, and the id-to-play lookup table.
//!
//! The catalog is built once from a JSON document and is read-only
//! afterwards. Category tags are validated while building, so every
//! [`Play`] held by a [`Catalog`] carries a known [`PlayCategory`].

use crate::error::{BillingError, Result};
use crate::money::Cents;
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

/// Pricing category of a play.
///
/// The set is closed: adding a category means adding a variant and its
/// arms in [`charge_cents`](PlayCategory::charge_cents) and
/// [`credits`](PlayCategory::credits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCategory {
    Tragedy,
    Comedy,
}

impl PlayCategory {
    /// Parses a category tag from a catalog document.
    ///
    /// Accepts both the Portuguese tags used by existing data files
    /// (`"tragedia"`, `"comedia"`) and the English spellings.
    /// Returns `None` for anything else.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "tragedia" | "tragedy" => Some(PlayCategory::Tragedy),
            "comedia" | "comedy" => Some(PlayCategory::Comedy),
            _ => None,
        }
    }

    /// Charge for one performance with the given audience, in cents.
    ///
    /// Tragedies: 40000, plus 1000 per seat above 30.
    /// Comedies: 30000, plus 10000 and 500 per seat above 20 once the
    /// audience passes 20, plus a 300-per-seat surcharge on every seat.
    pub fn charge_cents(self, audience: u32) -> Cents {
        let audience = u64::from(audience);
        let total = match self {
            PlayCategory::Tragedy => {
                let mut total = 40_000;
                if audience > 30 {
                    total += 1_000 * (audience - 30);
                }
                total
            }
            PlayCategory::Comedy => {
                let mut total = 30_000;
                if audience > 20 {
                    total += 10_000 + 500 * (audience - 20);
                }
                total + 300 * audience
            }
        };
        Cents::new(total)
    }

    /// Loyalty credits earned by one performance with the given audience.
    ///
    /// Every category earns one credit per seat above 30. Comedies earn
    /// an extra credit per five seats (truncating division) on top.
    pub fn credits(self, audience: u32) -> u64 {
        let audience = u64::from(audience);
        let mut credits = audience.saturating_sub(30);
        if self == PlayCategory::Comedy {
            credits += audience / 5;
        }
        credits
    }
}

/// A catalog entry: the play's display name and pricing category.
#[derive(Debug, Clone)]
pub struct Play {
    pub name: String,
    pub category: PlayCategory,
}

/// Raw catalog entry as read from the JSON document.
///
/// The category is kept as a string here so that unknown tags surface as
/// a typed error naming the offending value, not as a parse failure.
#[derive(Debug, Deserialize)]
struct PlayRecord {
    #[serde(rename = "nome", alias = "name")]
    name: String,

    #[serde(rename = "tipo", alias = "category")]
    category: String,
}

/// Lookup table from play id to [`Play`].
///
/// Never mutated after construction; the engine borrows it read-only.
#[derive(Debug)]
pub struct Catalog {
    plays: HashMap<String, Play>,
}

impl Catalog {
    /// Loads and validates a catalog from a JSON document mapping play id
    /// to `{nome, tipo}` (or `{name, category}`).
    ///
    /// Fails with [`BillingError::UnknownCategory`] if any entry carries
    /// a category tag outside the known set.
    pub fn from_json<R: Read>(reader: R) -> Result<Self> {
        let records: HashMap<String, PlayRecord> = serde_json::from_reader(reader)?;

        let mut plays = HashMap::with_capacity(records.len());
        for (id, record) in records {
            let category = PlayCategory::from_tag(&record.category).ok_or_else(|| {
                BillingError::UnknownCategory {
                    id: id.clone(),
                    category: record.category.clone(),
                }
            })?;
            plays.insert(
                id,
                Play {
                    name: record.name,
                    category,
                },
            );
        }

        debug!("Loaded catalog with {} plays", plays.len());
        Ok(Catalog { plays })
    }

    /// Resolves a play id.
    ///
    /// Fails with [`BillingError::UnknownPlay`] if the id is absent.
    pub fn get(&self, play_id: &str) -> Result<&Play> {
        self.plays.get(play_id).ok_or_else(|| BillingError::UnknownPlay {
            id: play_id.to_string(),
        })
    }

    /// Number of plays in the catalog.
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Returns `true` if the catalog holds no plays.
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_tag_accepts_both_spellings() {
        assert_eq!(PlayCategory::from_tag("tragedia"), Some(PlayCategory::Tragedy));
        assert_eq!(PlayCategory::from_tag("tragedy"), Some(PlayCategory::Tragedy));
        assert_eq!(PlayCategory::from_tag("comedia"), Some(PlayCategory::Comedy));
        assert_eq!(PlayCategory::from_tag("comedy"), Some(PlayCategory::Comedy));
        assert_eq!(PlayCategory::from_tag("  Comedia  "), Some(PlayCategory::Comedy));
    }

    #[test]
    fn test_from_tag_rejects_unknown() {
        assert_eq!(PlayCategory::from_tag("opera"), None);
        assert_eq!(PlayCategory::from_tag(""), None);
    }

    #[test]
    fn test_tragedy_charge_at_and_below_threshold() {
        assert_eq!(PlayCategory::Tragedy.charge_cents(0), Cents::new(40_000));
        assert_eq!(PlayCategory::Tragedy.charge_cents(30), Cents::new(40_000));
    }

    #[test]
    fn test_tragedy_charge_above_threshold() {
        assert_eq!(PlayCategory::Tragedy.charge_cents(31), Cents::new(41_000));
        assert_eq!(PlayCategory::Tragedy.charge_cents(55), Cents::new(65_000));
    }

    #[test]
    fn test_comedy_charge_at_and_below_threshold() {
        assert_eq!(PlayCategory::Comedy.charge_cents(0), Cents::new(30_000));
        // Per-seat surcharge applies even below the threshold
        assert_eq!(PlayCategory::Comedy.charge_cents(20), Cents::new(36_000));
    }

    #[test]
    fn test_comedy_charge_above_threshold() {
        assert_eq!(PlayCategory::Comedy.charge_cents(21), Cents::new(46_800));
        assert_eq!(PlayCategory::Comedy.charge_cents(35), Cents::new(58_000));
    }

    #[test]
    fn test_credits_base_rule_applies_to_every_category() {
        assert_eq!(PlayCategory::Tragedy.credits(30), 0);
        assert_eq!(PlayCategory::Tragedy.credits(55), 25);
        assert_eq!(PlayCategory::Comedy.credits(35), 5 + 7);
    }

    #[test]
    fn test_comedy_credit_bonus_truncates() {
        assert_eq!(PlayCategory::Comedy.credits(20), 4);
        assert_eq!(PlayCategory::Comedy.credits(24), 4);
        assert_eq!(PlayCategory::Comedy.credits(4), 0);
    }

    #[test]
    fn test_from_json_builds_catalog() {
        let json = r#"{
            "hamlet": {"nome": "Hamlet", "tipo": "tragedia"},
            "as-like": {"nome": "As You Like It", "tipo": "comedia"}
        }"#;

        let catalog = Catalog::from_json(Cursor::new(json)).unwrap();
        assert_eq!(catalog.len(), 2);

        let hamlet = catalog.get("hamlet").unwrap();
        assert_eq!(hamlet.name, "Hamlet");
        assert_eq!(hamlet.category, PlayCategory::Tragedy);
    }

    #[test]
    fn test_from_json_accepts_english_keys() {
        let json = r#"{"hamlet": {"name": "Hamlet", "category": "tragedy"}}"#;

        let catalog = Catalog::from_json(Cursor::new(json)).unwrap();
        assert_eq!(catalog.get("hamlet").unwrap().category, PlayCategory::Tragedy);
    }

    #[test]
    fn test_from_json_rejects_unknown_category() {
        let json = r#"{"carmen": {"nome": "Carmen", "tipo": "opera"}}"#;

        let err = Catalog::from_json(Cursor::new(json)).unwrap_err();
        match err {
            BillingError::UnknownCategory { id, category } => {
                assert_eq!(id, "carmen");
                assert_eq!(category, "opera");
            }
            other => panic!("Expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_get_unknown_play() {
        let catalog = Catalog::from_json(Cursor::new("{}")).unwrap();
        assert!(catalog.is_empty());

        let err = catalog.get("hamlet").unwrap_err();
        assert!(matches!(err, BillingError::UnknownPlay { id } if id == "hamlet"));
    }
}
