use thiserror::Error;

/// Errors raised while building outbound records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The injected clock precedes the elapsed-time epoch; relative
    /// offsets are unsigned and must never wrap.
    #[error("clock precedes the elapsed-time epoch")]
    TimeBeforeEpoch,
}

/// Errors raised while reading inbound records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer ended before the requested scalar.
    #[error("buffer truncated")]
    Truncated,
}

/// Errors raised while fragmenting a record for transport.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SegmentationError {
    /// The negotiated transport unit cannot carry a 1-byte payload plus
    /// the segment header.
    #[error("no viable transport unit")]
    NoViableTransportUnit,
}
