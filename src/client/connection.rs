//! Connection establishment for the FTP client
//!
//! Handles TCP connection, socket tuning, and server greeting validation.

use crate::config::ConnectionConfig;
use crate::error::{FtpError, Result};
use crate::features::FeatureSet;
use crate::reply_parser::ReplyParser;
use crate::response::codes;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::io::BufReader;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use super::FtpClient;
use super::state::{ConnectionState, TransferMode};

impl FtpClient {
    /// Connect to an FTP server and validate its greeting.
    ///
    /// Does not log in; call [`login`](Self::login) afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP connection or the greeting wait times out,
    /// or if the server's greeting reply is not in the 2xx range.
    pub async fn connect(config: ConnectionConfig) -> Result<Self> {
        debug!("Connecting to FTP server {}:{}", config.host, config.port);

        let addr = format!("{}:{}", config.host, config.port);
        let dial_timeout = Duration::from_millis(config.timeout_ms);

        let tcp_stream = timeout(dial_timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| FtpError::Timeout)??;

        tcp_stream.set_nodelay(true)?;

        let stream = BufReader::new(tcp_stream);

        let mut client = Self {
            stream,
            parser: ReplyParser::new(),
            replies: VecDeque::new(),
            state: ConnectionState::Ready,
            config,
            features: FeatureSet::default(),
            transfer_mode: TransferMode::Binary,
        };

        let greeting = client.recv_reply().await?;
        debug!("Server greeting: {} {}", greeting.code, greeting.text);

        if greeting.code != codes::SERVICE_READY {
            return Err(FtpError::Protocol {
                code: greeting.code,
                message: greeting.text,
            });
        }

        Ok(client)
    }

    /// Send `QUIT` and close the control connection.
    ///
    /// Idempotent: calling this after the channel is already closed is a no-op.
    pub async fn disconnect(&mut self) -> Result<()> {
        if matches!(self.state, ConnectionState::Closed) {
            return Ok(());
        }

        self.send_line(crate::commands::quit()).await?;
        let reply = self.recv_reply().await?;
        self.mark_closed();

        if reply.code != codes::CLOSING_CONTROL {
            return Err(FtpError::Protocol {
                code: reply.code,
                message: reply.text,
            });
        }

        Ok(())
    }
}
