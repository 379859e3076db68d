//! FTP error types

use thiserror::Error;

/// FTP protocol and connection errors
#[derive(Error, Debug)]
pub enum FtpError {
    /// IO error during network operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection or reply-wait timeout
    #[error("Connection timeout")]
    Timeout,

    /// A reply line could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Unexpected FTP reply code
    #[error("FTP error {code}: {message}")]
    Protocol {
        /// FTP reply code (e.g., 500, 550)
        code: u16,
        /// Reply text from the server
        message: String,
    },

    /// Login rejected (530 after PASS)
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Target file or directory does not exist (550 on DELE/RNFR/SIZE/MDTM)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Local download destination refuses overwrite
    #[error("Already exists: {0}")]
    Exists(String),

    /// Illegal input (empty paths, empty rename operands)
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// Server does not advertise a feature required for the operation
    #[error("Required feature not supported by server: {0}")]
    FeatureMissing(&'static str),

    /// Control channel closed (by QUIT or after a fatal I/O error)
    #[error("Connection closed")]
    ConnectionClosed,

    /// Generic error for conditions not covered by a dedicated variant
    #[error("{0}")]
    Other(String),
}

/// Result type alias using FtpError
pub type Result<T> = std::result::Result<T, FtpError>;
