//! # Theater Billing
//!
//! Computes a theater subscriber's billing statement: a per-performance
//! charge, the invoice total, and the accumulated loyalty credits, then
//! renders the result as plain text or HTML.
//!
//! ## Design Principles
//!
//! - **Integer cents**: the whole pricing path works in whole cents, so
//!   repeated additions never drift
//! - **Closed category set**: pricing and credit rules live on an enum;
//!   category tags are validated when the catalog is loaded
//! - **Pure computation**: the engine performs no I/O and returns either
//!   a complete statement or a typed error, never a partial result
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use theater_billing::{BillingEngine, Catalog, Invoice};
//!
//! let plays = r#"{"hamlet": {"nome": "Hamlet", "tipo": "tragedia"}}"#;
//! let invoice = r#"{"cliente": "BigCo",
//!                   "apresentacoes": [{"id": "hamlet", "audiencia": 55}]}"#;
//!
//! let catalog = Catalog::from_json(Cursor::new(plays)).unwrap();
//! let invoice = Invoice::from_json(Cursor::new(invoice)).unwrap();
//!
//! let statement = BillingEngine::new(&catalog).statement(&invoice).unwrap();
//! assert_eq!(statement.total.value(), 65000);
//! assert_eq!(statement.credits, 25);
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod invoice;
pub mod money;
pub mod statement;

pub use catalog::{Catalog, Play, PlayCategory};
pub use engine::{BillingEngine, Statement, StatementLine};
pub use error::{BillingError, Result};
pub use invoice::{Invoice, Performance};
pub use money::Cents;
