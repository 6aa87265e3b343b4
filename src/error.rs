use thiserror::Error;

/// Error type for gtf2gff3 operations.
#[derive(Debug, Error)]
pub enum Gtf2Gff3Error {
    /// An attribute segment without a key/value separator under the `fail` policy.
    #[error("line {line}: attribute segment {segment:?} has no key/value separator")]
    BareAttribute { line: usize, segment: String },
    /// Wraps standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for gtf2gff3 operations.
pub type Result<T> = std::result::Result<T, Gtf2Gff3Error>;
