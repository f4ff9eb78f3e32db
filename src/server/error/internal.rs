use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to serialize a structured value into a JSON column.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to serialize {what} to JSON: {source}")]
    SerializeJson {
        /// Which value was being serialized
        what: &'static str,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// A computed session date fell outside the representable range.
    #[error("Failed to compute occurrence {occurrence} of recurring session")]
    OccurrenceOutOfRange {
        /// 1-based occurrence index
        occurrence: u32,
    },
}
