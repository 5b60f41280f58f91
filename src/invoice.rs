//! Invoice input records and validation.

use crate::error::{BillingError, Result};
use log::debug;
use serde::Deserialize;
use std::io::Read;

/// Raw performance record as read from the invoice document.
///
/// The audience is kept signed here so that negative counts reach
/// validation and produce a typed error instead of a parse failure.
#[derive(Debug, Deserialize)]
struct PerformanceRecord {
    #[serde(rename = "id", alias = "playId")]
    play_id: String,

    #[serde(rename = "audiencia", alias = "audience")]
    audience: i64,
}

/// Raw invoice document.
#[derive(Debug, Deserialize)]
struct InvoiceRecord {
    #[serde(rename = "cliente", alias = "customer")]
    customer: String,

    #[serde(rename = "apresentacoes", alias = "performances")]
    performances: Vec<PerformanceRecord>,
}

impl InvoiceRecord {
    /// Validates the raw records into an [`Invoice`].
    ///
    /// Fails with [`BillingError::InvalidAudience`] on any negative
    /// audience count. Play ids are resolved later, against the catalog.
    fn validate(self) -> Result<Invoice> {
        let mut performances = Vec::with_capacity(self.performances.len());
        for record in self.performances {
            let audience =
                u32::try_from(record.audience).map_err(|_| BillingError::InvalidAudience {
                    play_id: record.play_id.clone(),
                    audience: record.audience,
                })?;
            performances.push(Performance {
                play_id: record.play_id,
                audience,
            });
        }

        debug!(
            "Loaded invoice for \"{}\" with {} performances",
            self.customer,
            performances.len()
        );
        Ok(Invoice {
            customer: self.customer,
            performances,
        })
    }
}

/// A single billable event: one showing of a play for a counted audience.
#[derive(Debug, Clone)]
pub struct Performance {
    /// Key into the play catalog.
    pub play_id: String,

    /// Seat count. Validated non-negative on load.
    pub audience: u32,
}

/// A customer's invoice: the ordered list of performances to bill.
///
/// Performance order determines statement line order; the totals are
/// order-independent sums.
#[derive(Debug, Clone)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

impl Invoice {
    /// Loads and validates an invoice from a JSON document with
    /// `cliente`/`apresentacoes` (or `customer`/`performances`) fields.
    pub fn from_json<R: Read>(reader: R) -> Result<Self> {
        let record: InvoiceRecord = serde_json::from_reader(reader)?;
        record.validate()
    }
}
