//! Passive-mode data channel: short-lived TCP connection for a single
//! transfer or listing.

use crate::commands;
use crate::error::{FtpError, Result};
use crate::response::codes;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::trace;

use super::FtpClient;

const TRANSFER_CHUNK_SIZE: usize = 64 * 1024;

/// A single-use data connection opened for one transfer or listing.
#[must_use]
pub(super) struct DataChannel {
    stream: TcpStream,
}

impl DataChannel {
    /// Stream all inbound bytes to a newly created file at `dest`, invoking
    /// `on_chunk(bytes_in_this_chunk)` after each read.
    pub async fn download_to(
        mut self,
        dest: &Path,
        mut on_chunk: impl FnMut(u64),
    ) -> Result<()> {
        let mut file = File::create(dest).await?;
        let mut buf = [0u8; TRANSFER_CHUNK_SIZE];
        loop {
            let n = self.stream.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            file.write_all(&buf[..n]).await?;
            on_chunk(n as u64);
        }
        file.flush().await?;
        Ok(())
    }

    /// Stream the contents of `src` to the socket, invoking
    /// `on_total(total_bytes_sent_so_far)` after each chunk. Closes the
    /// socket on EOF of the file so the server can detect completion.
    pub async fn upload_from(mut self, src: &Path, mut on_total: impl FnMut(u64)) -> Result<()> {
        let mut file = File::open(src).await?;
        let mut buf = [0u8; TRANSFER_CHUNK_SIZE];
        let mut sent: u64 = 0;
        loop {
            let n = file.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            self.stream.write_all(&buf[..n]).await?;
            sent += n as u64;
            on_total(sent);
        }
        self.stream.shutdown().await?;
        Ok(())
    }

    /// Collect all inbound bytes into memory until the peer closes.
    pub async fn read_to_end(mut self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        self.stream.read_to_end(&mut data).await?;
        Ok(data)
    }
}

impl FtpClient {
    /// Issue `EPSV`, parse the returned port, and connect to it on the
    /// control channel's host.
    pub(super) async fn open_passive(&mut self) -> Result<DataChannel> {
        self.send_line(commands::epsv()).await?;
        let reply = self.recv_reply().await?;
        if reply.code != codes::ENTERING_EXTENDED_PASSIVE {
            return Err(FtpError::Protocol {
                code: reply.code,
                message: reply.text,
            });
        }

        let port = commands::parse_epsv_port(&reply.text)?;
        let addr = format!("{}:{}", self.config.host, port);
        trace!("Opening passive data connection to {}", addr);

        let stream = tokio::time::timeout(
            std::time::Duration::from_millis(self.config.timeout_ms),
            TcpStream::connect(&addr),
        )
        .await
        .map_err(|_| FtpError::Timeout)??;

        Ok(DataChannel { stream })
    }
}
