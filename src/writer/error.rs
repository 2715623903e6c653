/// Errors that can occur during writing
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// I/O error on the underlying sink. Treated as an unrecoverable
    /// environment fault: no retry, no partial-write recovery.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Writer settings file could not be parsed.
    #[error("config error: {0}")]
    ConfigError(#[from] toml::de::Error),

    /// Lifecycle misuse: the writer has no open sink.
    #[error("writer is not open")]
    NotOpen,

    /// Lifecycle misuse: `init` called on a writer that already opened its sink.
    #[error("writer is already open")]
    AlreadyOpen,
}
