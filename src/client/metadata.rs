//! File and directory metadata: SIZE, MDTM, MFMT.

use crate::commands;
use crate::error::{FtpError, Result};
use crate::response::{codes, Reply};
use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::trace;

use super::FtpClient;

fn format_mdtm_stamp(date: DateTime<Utc>) -> String {
    date.format("%Y%m%d%H%M%S").to_string()
}

fn parse_mdtm_stamp(text: &str) -> Result<DateTime<Utc>> {
    let text = text.trim();
    let naive = NaiveDateTime::parse_from_str(text, "%Y%m%d%H%M%S")
        .map_err(|_| FtpError::InvalidResponse(text.to_string()))?;
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

impl FtpClient {
    async fn size_raw(&mut self, path: &str) -> Result<Reply> {
        let cmd = commands::size(path);
        self.send_line(&cmd).await?;
        self.recv_reply().await
    }

    /// Query a file's size via `SIZE`.
    ///
    /// # Errors
    ///
    /// Returns [`FtpError::FeatureMissing`] if the server did not advertise
    /// SIZE, or [`FtpError::NotFound`] if the file does not exist.
    pub async fn get_file_size(&mut self, path: &str) -> Result<u64> {
        self.require_feature("SIZE", self.features.size)?;
        let reply = self.size_raw(path).await?;
        match reply.code {
            codes::FILE_STATUS => reply
                .text
                .trim()
                .parse::<u64>()
                .map_err(|_| FtpError::InvalidResponse(reply.text)),
            codes::FILE_UNAVAILABLE_PERMANENT => Err(FtpError::NotFound(path.to_string())),
            _ => Err(FtpError::Protocol {
                code: reply.code,
                message: reply.text,
            }),
        }
    }

    /// Check whether a file exists via `SIZE`.
    ///
    /// Never surfaces [`FtpError::NotFound`] to the caller: a 550 reply maps
    /// to `Ok(false)`. Any other failure propagates.
    pub async fn file_exists(&mut self, path: &str) -> Result<bool> {
        let reply = self.size_raw(path).await?;
        match reply.code {
            codes::FILE_STATUS => Ok(true),
            codes::FILE_UNAVAILABLE_PERMANENT => Ok(false),
            _ => Err(FtpError::Protocol {
                code: reply.code,
                message: reply.text,
            }),
        }
    }

    /// Query a file's last modification time via `MDTM`.
    pub async fn get_last_modification_time(&mut self, path: &str) -> Result<DateTime<Utc>> {
        self.require_feature("MDTM", self.features.mdtm)?;

        let cmd = commands::mdtm(path);
        self.send_line(&cmd).await?;
        let reply = self.recv_reply().await?;

        match reply.code {
            codes::FILE_STATUS => parse_mdtm_stamp(&reply.text),
            codes::FILE_UNAVAILABLE_PERMANENT => Err(FtpError::NotFound(path.to_string())),
            _ => Err(FtpError::Protocol {
                code: reply.code,
                message: reply.text,
            }),
        }
    }

    /// Set a file's modification time via `MFMT`.
    ///
    /// Gates on the `MFMT` feature rather than `MDTM` — a server can support
    /// reading modification times without supporting setting them.
    pub async fn set_modification_time(&mut self, path: &str, date: DateTime<Utc>) -> Result<()> {
        self.require_feature("MFMT", self.features.mfmt)?;

        let stamp = format_mdtm_stamp(date);
        trace!("Setting modification time of {} to {}", path, stamp);
        let cmd = commands::mfmt(&stamp, path);
        self.send_line(&cmd).await?;
        let reply = self.recv_reply().await?;

        match reply.code {
            codes::FILE_STATUS => Ok(()),
            codes::FILE_UNAVAILABLE_PERMANENT => Err(FtpError::NotFound(path.to_string())),
            _ => Err(FtpError::Protocol {
                code: reply.code,
                message: reply.text,
            }),
        }
    }
}
