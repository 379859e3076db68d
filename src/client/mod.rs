//! FTP client implementation: control channel, login, navigation, metadata
//! and transfer operations.

mod connection;
mod data_channel;
mod io;
mod login;
mod metadata;
mod navigation;
mod state;
mod transfer;

use crate::config::ConnectionConfig;
use crate::features::FeatureSet;
use crate::reply_parser::ReplyParser;
use crate::response::Reply;
use state::{ConnectionState, TransferMode};
use std::collections::VecDeque;
use tokio::io::BufReader;
use tokio::net::TcpStream;
use tracing::debug;

/// Async FTP client speaking RFC 959 plus EPSV/FEAT/MLSD/MDTM/MFMT extensions.
///
/// # Example
///
/// ```no_run
/// use ftp_rs::{ConnectionConfig, FtpClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ConnectionConfig::anonymous("ftp.example.com");
/// let mut client = FtpClient::connect(config).await?;
/// client.login().await?;
///
/// let files = client.get_files(None).await?;
/// println!("{} files in home directory", files.len());
/// # Ok(())
/// # }
/// ```
#[must_use]
pub struct FtpClient {
    /// Control channel socket
    stream: BufReader<TcpStream>,
    /// Incremental reply parser for the control channel byte stream
    parser: ReplyParser,
    /// FIFO queue of replies parsed but not yet consumed by a command
    replies: VecDeque<Reply>,
    /// Login state
    state: ConnectionState,
    /// Connection configuration (host, port, credentials, timeouts)
    config: ConnectionConfig,
    /// Features negotiated via FEAT during login
    features: FeatureSet,
    /// Transfer mode selected at login
    transfer_mode: TransferMode,
}

impl FtpClient {
    /// Whether the client has completed login
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, ConnectionState::Authenticated)
    }

    /// Return the feature set negotiated during login
    pub fn get_features(&self) -> FeatureSet {
        self.features
    }

    fn mark_closed(&mut self) {
        self.state = ConnectionState::Closed;
    }
}

impl Drop for FtpClient {
    fn drop(&mut self) {
        debug!("FtpClient dropped");
    }
}
