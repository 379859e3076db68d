//! Incremental, I/O-free parser turning a raw control-channel byte stream
//! into a sequence of [`Reply`] values.
//!
//! Kept free of any socket or `tokio` dependency so that chunking behavior
//! can be tested directly: feeding the same byte stream split at any set of
//! boundaries must produce the same sequence of replies.

use crate::response::Reply;

struct OpenReply {
    code: u16,
    lines: Vec<String>,
}

/// Incremental FTP reply parser
///
/// Call [`feed`](Self::feed) with bytes as they arrive off the socket; it
/// returns every reply that became complete as a result of that chunk.
/// Partial lines and partially-received multi-line replies are retained
/// internally between calls.
#[must_use]
#[derive(Default)]
pub struct ReplyParser {
    residual: Vec<u8>,
    open: Option<OpenReply>,
}

impl OpenReply {
    fn new(code: u16) -> Self {
        Self {
            code,
            lines: Vec::new(),
        }
    }
}

impl std::fmt::Debug for ReplyParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyParser")
            .field("residual_len", &self.residual.len())
            .field("open", &self.open.as_ref().map(|o| o.code))
            .finish()
    }
}

/// First three bytes of `line` form a decimal reply code, i.e. `line[0..3]`
/// are ASCII digits. Returns the parsed code and the byte after it, if any.
fn leading_code(line: &str) -> Option<(u16, Option<u8>)> {
    let bytes = line.as_bytes();
    if bytes.len() < 3
        || !bytes[0].is_ascii_digit()
        || !bytes[1].is_ascii_digit()
        || !bytes[2].is_ascii_digit()
    {
        return None;
    }
    let code = line[0..3].parse::<u16>().ok()?;
    Some((code, bytes.get(3).copied()))
}

impl ReplyParser {
    /// Create an empty parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed newly-received bytes, returning every `Reply` completed as a
    /// result. Bytes belonging to a still-incomplete line or an open
    /// multi-line reply are buffered internally.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<Reply> {
        self.residual.extend_from_slice(bytes);

        let mut replies = Vec::new();
        loop {
            let Some(pos) = find_crlf_or_lf(&self.residual) else {
                break;
            };
            let (line_bytes, consumed) = split_line(&self.residual, pos);
            let line = String::from_utf8_lossy(line_bytes).into_owned();
            self.residual.drain(..consumed);

            if let Some(reply) = self.process_line(&line) {
                replies.push(reply);
            }
        }

        replies
    }

    fn process_line(&mut self, line: &str) -> Option<Reply> {
        match self.open.take() {
            None => {
                let (code, next) = leading_code(line)?;
                match next {
                    Some(b'-') => {
                        let mut open = OpenReply::new(code);
                        open.lines.push(line[4.min(line.len())..].to_string());
                        self.open = Some(open);
                        None
                    }
                    Some(b' ') | None => {
                        let text = if line.len() > 4 {
                            line[4..].to_string()
                        } else {
                            String::new()
                        };
                        Some(Reply { code, text })
                    }
                    _ => {
                        // Digit code followed by neither space nor dash; treat the
                        // whole line as a single-line reply body per RFC leniency.
                        let text = line[3..].trim_start().to_string();
                        Some(Reply { code, text })
                    }
                }
            }
            Some(mut open) => {
                if line.len() >= 4 && line.starts_with(&open.code.to_string()) && line.as_bytes()[3] == b' ' {
                    open.lines.push(line[4..].to_string());
                    Some(Reply {
                        code: open.code,
                        text: open.lines.join("\r\n"),
                    })
                } else {
                    open.lines.push(line.to_string());
                    self.open = Some(open);
                    None
                }
            }
        }
    }
}

/// Find the end of the next complete line: the index one past its terminator.
/// Accepts `\r\n` or a bare `\n` (some servers/tests omit the CR).
fn find_crlf_or_lf(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == b'\n')
}

/// Split off the line content (without its terminator) ending at `nl_pos`
/// (the index of `\n`), and return how many bytes to drain from the buffer.
fn split_line(buf: &[u8], nl_pos: usize) -> (&[u8], usize) {
    let end = if nl_pos > 0 && buf[nl_pos - 1] == b'\r' {
        nl_pos - 1
    } else {
        nl_pos
    };
    (&buf[..end], nl_pos + 1)
}
