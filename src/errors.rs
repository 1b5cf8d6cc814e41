use std::io;

use thiserror::Error;

use crate::types::SourceId;

/// Error type for sheet-source fetch, schema, IO, and configuration failures.
///
/// Field-level problems (unparsable numerics, missing columns) are not
/// errors; the normalizer recovers them to `None`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("sheet source '{source_id}' fetch failed: {reason}")]
    FetchFailed { source_id: SourceId, reason: String },
    #[error("sheet source '{source_id}' returned an invalid schema: {details}")]
    SchemaInvalid {
        source_id: SourceId,
        details: String,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
}
