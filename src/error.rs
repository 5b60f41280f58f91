//! Error types for the billing engine.

use thiserror::Error;

/// Result type alias for billing operations
pub type Result<T> = std::result::Result<T, BillingError>;

/// Errors that can occur while loading inputs or computing a statement.
///
/// All of these are fatal to the enclosing computation: there is no
/// partial invoice and no partial statement.
#[derive(Error, Debug)]
pub enum BillingError {
    /// Failed to open or read an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error in the catalog or invoice document
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A performance references a play id absent from the catalog
    #[error("Unknown play \"{id}\"")]
    UnknownPlay { id: String },

    /// A catalog entry carries a category tag outside the known set
    #[error("Unknown play category \"{category}\" for play \"{id}\"")]
    UnknownCategory { id: String, category: String },

    /// A performance has a negative audience count
    #[error("Invalid audience {audience} for play \"{play_id}\"")]
    InvalidAudience { play_id: String, audience: i64 },

    /// Missing input file arguments
    #[error("Missing input file arguments. Usage: theater-billing <plays.json> <invoice.json> [--html]")]
    MissingArgument,
}
