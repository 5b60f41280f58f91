//! Pricing and credit computation over a catalog and an invoice.
//!
//! Every operation is a pure function of the borrowed catalog and its
//! arguments. Any lookup failure aborts the whole computation; the engine
//! never produces a partial statement and never prints.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::invoice::{Invoice, Performance};
use crate::money::Cents;
use log::debug;
use serde::Serialize;

/// One statement line: a priced performance.
#[derive(Debug, Clone, Serialize)]
pub struct StatementLine {
    pub play_name: String,
    pub charge: Cents,
    pub audience: u32,
}

/// The computed billing statement for one invoice.
///
/// Lines appear in invoice order; `total` and `credits` are
/// order-independent sums over the same performances.
#[derive(Debug, Clone, Serialize)]
pub struct Statement {
    pub customer: String,
    pub lines: Vec<StatementLine>,
    pub total: Cents,
    pub credits: u64,
}

/// The pricing and credit engine.
///
/// Borrows a read-only [`Catalog`]; independent callers may run any
/// number of engines over the same catalog without coordination.
pub struct BillingEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> BillingEngine<'a> {
    /// Creates an engine over the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        BillingEngine { catalog }
    }

    /// Charge for a single performance, in cents.
    pub fn charge(&self, performance: &Performance) -> Result<Cents> {
        let play = self.catalog.get(&performance.play_id)?;
        Ok(play.category.charge_cents(performance.audience))
    }

    /// Loyalty credits earned by a single performance.
    pub fn credits(&self, performance: &Performance) -> Result<u64> {
        let play = self.catalog.get(&performance.play_id)?;
        Ok(play.category.credits(performance.audience))
    }

    /// Sum of charges over the given performances.
    pub fn invoice_total(&self, performances: &[Performance]) -> Result<Cents> {
        let mut total = Cents::ZERO;
        for performance in performances {
            total += self.charge(performance)?;
        }
        Ok(total)
    }

    /// Sum of credits over the given performances.
    pub fn total_credits(&self, performances: &[Performance]) -> Result<u64> {
        let mut credits = 0;
        for performance in performances {
            credits += self.credits(performance)?;
        }
        Ok(credits)
    }

    /// Computes the full statement for an invoice: one line per
    /// performance in input order, plus the invoice total and the
    /// accumulated credits.
    pub fn statement(&self, invoice: &Invoice) -> Result<Statement> {
        let mut lines = Vec::with_capacity(invoice.performances.len());
        let mut total = Cents::ZERO;
        let mut credits = 0;

        for performance in &invoice.performances {
            let play = self.catalog.get(&performance.play_id)?;
            let charge = play.category.charge_cents(performance.audience);
            let earned = play.category.credits(performance.audience);

            debug!(
                "{}: charge {} cents, {} credits ({} seats)",
                play.name, charge, earned, performance.audience
            );

            total += charge;
            credits += earned;
            lines.push(StatementLine {
                play_name: play.name.clone(),
                charge,
                audience: performance.audience,
            });
        }

        Ok(Statement {
            customer: invoice.customer.clone(),
            lines,
            total,
            credits,
        })
    }
}
