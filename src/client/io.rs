//! Low-level I/O primitives for the control channel: line transmission and
//! reply reception, built on top of [`ReplyParser`](crate::reply_parser::ReplyParser).

use crate::error::{FtpError, Result};
use crate::response::Reply;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::time::timeout;
use tracing::trace;

use super::FtpClient;
use super::state::ConnectionState;

const READ_CHUNK_SIZE: usize = 4096;

impl FtpClient {
    /// Write `line + CRLF` to the control socket.
    ///
    /// `line` should not already carry a line terminator.
    pub(super) async fn send_line(&mut self, line: &str) -> Result<()> {
        if matches!(self.state, ConnectionState::Closed) {
            return Err(FtpError::ConnectionClosed);
        }

        trace!("Sending: {}", line.trim_end());
        let bytes = format!("{line}\r\n");
        if let Err(e) = self.stream.get_mut().write_all(bytes.as_bytes()).await {
            self.mark_closed();
            return Err(FtpError::Io(e));
        }
        if let Err(e) = self.stream.get_mut().flush().await {
            self.mark_closed();
            return Err(FtpError::Io(e));
        }
        Ok(())
    }

    /// Deliver the next queued reply, reading more bytes off the socket and
    /// feeding the parser as needed, bounded by `config.timeout_ms`.
    pub(super) async fn recv_reply(&mut self) -> Result<Reply> {
        if let Some(reply) = self.replies.pop_front() {
            return Ok(reply);
        }

        let timeout_duration = Duration::from_millis(self.config.timeout_ms);

        let read_future = async {
            let mut buf = [0u8; READ_CHUNK_SIZE];
            loop {
                let n = self.stream.read(&mut buf).await?;
                if n == 0 {
                    return Err(FtpError::ConnectionClosed);
                }
                let mut new_replies = self.parser.feed(&buf[..n]).into_iter();
                if let Some(first) = new_replies.next() {
                    self.replies.extend(new_replies);
                    trace!("Received: {} {}", first.code, first.text);
                    return Ok(first);
                }
            }
        };

        match timeout(timeout_duration, read_future).await {
            Ok(result) => {
                if result.is_err() {
                    self.mark_closed();
                }
                result
            }
            Err(_) => {
                self.mark_closed();
                Err(FtpError::Timeout)
            }
        }
    }
}
