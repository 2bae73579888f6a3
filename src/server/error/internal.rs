use std::num::TryFromIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored primary key cannot be represented as an API ID
    ///
    /// Results in a 500 Internal Server Error.
    #[error("Stored ID {value} is outside the API ID range: {source}")]
    StoredIdOutOfRange {
        /// The stored primary key
        value: i32,
        /// The underlying conversion error
        #[source]
        source: TryFromIntError,
    },
}
