//! Async FTP client speaking RFC 959 plus the EPSV, FEAT, MLSD/MLST, MDTM,
//! MFMT, SIZE, UTF8 and OPTS extensions.
//!
//! ```no_run
//! use ftp_rs::{ConnectionConfig, FtpClient};
//!
//! # async fn example() -> ftp_rs::Result<()> {
//! let config = ConnectionConfig::anonymous("ftp.example.com");
//! let mut client = FtpClient::connect(config).await?;
//! client.login().await?;
//!
//! for file in client.get_files(None).await? {
//!     println!("{} ({} bytes)", file.name, file.size.unwrap_or(0));
//! }
//! # Ok(())
//! # }
//! ```

mod client;
/// FTP command builders and reply parsers
pub mod commands;
mod config;
mod error;
mod features;
/// Incremental control-channel reply parser
pub mod reply_parser;
mod response;

pub use client::FtpClient;
pub use commands::{DirEntry, EntryKind};
pub use config::ConnectionConfig;
pub use error::{FtpError, Result};
pub use features::FeatureSet;
pub use reply_parser::ReplyParser;
pub use response::{codes, Reply};
