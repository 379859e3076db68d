//! Directory listing and file transfer: LIST/MLSD, STOR, RETR, DELE, rename.

use crate::commands::{self, DirEntry, EntryKind};
use crate::error::{FtpError, Result};
use crate::response::codes;
use std::path::Path;
use tracing::debug;

use super::FtpClient;

fn path_arg(path: Option<&str>) -> Option<&str> {
    match path {
        Some(p) if !p.trim().is_empty() => Some(p),
        _ => None,
    }
}

impl FtpClient {
    /// List directory entries at `path` (or the current directory if `None`).
    ///
    /// Uses `MLSD` when the server advertises it, falling back to `LIST`.
    pub async fn list(&mut self, path: Option<&str>) -> Result<Vec<DirEntry>> {
        let path = path_arg(path);
        let channel = self.open_passive().await?;

        let use_mlsd = self.features.mlsd;
        let cmd = if use_mlsd {
            commands::mlsd(path)
        } else {
            commands::list(path)
        };
        self.send_line(&cmd).await?;

        let preliminary = self.recv_reply().await?;
        if !preliminary.is_continuation() {
            return Err(FtpError::Protocol {
                code: preliminary.code,
                message: preliminary.text,
            });
        }

        let data = channel.read_to_end().await?;
        let text = String::from_utf8_lossy(&data);

        let final_reply = self.recv_reply().await?;
        if final_reply.code >= 400 {
            return Err(FtpError::Protocol {
                code: final_reply.code,
                message: final_reply.text,
            });
        }

        let mut entries = Vec::new();
        for line in text.lines() {
            let parsed = if use_mlsd {
                commands::parse_mlsd_line(line)
            } else {
                commands::parse_unix_list_line(line)
            };
            if let Some(entry) = parsed {
                if entry.name != "." && entry.name != ".." {
                    entries.push(entry);
                }
            }
        }

        Ok(entries)
    }

    /// List only the files at `path` (or the current directory).
    pub async fn get_files(&mut self, path: Option<&str>) -> Result<Vec<DirEntry>> {
        Ok(self
            .list(path)
            .await?
            .into_iter()
            .filter(|e| e.kind == EntryKind::File)
            .collect())
    }

    /// List only the subdirectories at `path` (or the current directory).
    pub async fn get_directories(&mut self, path: Option<&str>) -> Result<Vec<DirEntry>> {
        Ok(self
            .list(path)
            .await?
            .into_iter()
            .filter(|e| e.kind == EntryKind::Dir)
            .collect())
    }

    /// Upload a local file, optionally under a different remote name.
    ///
    /// # Errors
    ///
    /// Returns [`FtpError::NotFound`] if `local_path` does not exist.
    pub async fn upload(
        &mut self,
        local_path: &Path,
        target: Option<&str>,
        mut on_progress: Option<&mut dyn FnMut(u64, u64)>,
    ) -> Result<()> {
        let metadata = tokio::fs::metadata(local_path)
            .await
            .map_err(|_| FtpError::NotFound(local_path.display().to_string()))?;
        let total = metadata.len();

        let remote_name = target.map(str::to_string).unwrap_or_else(|| {
            local_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        debug!("Uploading {} to {}", local_path.display(), remote_name);

        let channel = self.open_passive().await?;
        let cmd = commands::stor(&remote_name);
        self.send_line(&cmd).await?;

        let preliminary = self.recv_reply().await?;
        if !preliminary.is_continuation() {
            return Err(FtpError::Protocol {
                code: preliminary.code,
                message: preliminary.text,
            });
        }

        channel
            .upload_from(local_path, |sent| {
                if let Some(cb) = on_progress.as_deref_mut() {
                    cb(sent, total);
                }
            })
            .await?;

        let final_reply = self.recv_reply().await?;
        if final_reply.code >= 400 {
            return Err(FtpError::Protocol {
                code: final_reply.code,
                message: final_reply.text,
            });
        }

        Ok(())
    }

    /// Download a remote file to a local path.
    ///
    /// # Errors
    ///
    /// Returns [`FtpError::Exists`] if `dst` already exists and `overwrite`
    /// is false.
    pub async fn download(
        &mut self,
        src: &str,
        dst: &Path,
        overwrite: bool,
        mut on_progress: Option<&mut dyn FnMut(u64, u64)>,
    ) -> Result<()> {
        if !overwrite && tokio::fs::metadata(dst).await.is_ok() {
            return Err(FtpError::Exists(dst.display().to_string()));
        }

        let total = self.get_file_size(src).await.unwrap_or(0);

        debug!("Downloading {} to {}", src, dst.display());

        let channel = self.open_passive().await?;
        let cmd = commands::retr(src);
        self.send_line(&cmd).await?;

        let preliminary = self.recv_reply().await?;
        if !preliminary.is_continuation() {
            return Err(FtpError::Protocol {
                code: preliminary.code,
                message: preliminary.text,
            });
        }

        let mut received: u64 = 0;
        channel
            .download_to(dst, |chunk| {
                received += chunk;
                if let Some(cb) = on_progress.as_deref_mut() {
                    cb(received, total);
                }
            })
            .await?;

        let final_reply = self.recv_reply().await?;
        if final_reply.code >= 400 {
            return Err(FtpError::Protocol {
                code: final_reply.code,
                message: final_reply.text,
            });
        }

        Ok(())
    }

    /// Delete a remote file via `DELE`.
    pub async fn delete_file(&mut self, path: &str) -> Result<()> {
        let cmd = commands::dele(path);
        self.send_line(&cmd).await?;
        let reply = self.recv_reply().await?;

        match reply.code {
            codes::FILE_ACTION_OK => Ok(()),
            codes::FILE_UNAVAILABLE_PERMANENT => Err(FtpError::NotFound(path.to_string())),
            _ => Err(FtpError::Protocol {
                code: reply.code,
                message: reply.text,
            }),
        }
    }

    /// Rename a remote file or directory via `RNFR`/`RNTO`.
    pub async fn rename(&mut self, from: &str, to: &str) -> Result<()> {
        if from.trim().is_empty() || to.trim().is_empty() {
            return Err(FtpError::Argument(
                "rename operands must not be empty".to_string(),
            ));
        }

        let cmd = commands::rnfr(from);
        self.send_line(&cmd).await?;
        let reply = self.recv_reply().await?;
        match reply.code {
            codes::FILE_ACTION_PENDING => {}
            codes::FILE_UNAVAILABLE_PERMANENT => return Err(FtpError::NotFound(from.to_string())),
            _ => {
                return Err(FtpError::Protocol {
                    code: reply.code,
                    message: reply.text,
                });
            }
        }

        let cmd = commands::rnto(to);
        self.send_line(&cmd).await?;
        let reply = self.recv_reply().await?;
        match reply.code {
            codes::FILE_ACTION_OK => Ok(()),
            codes::FILE_UNAVAILABLE_PERMANENT => Err(FtpError::NotFound(to.to_string())),
            _ => Err(FtpError::Protocol {
                code: reply.code,
                message: reply.text,
            }),
        }
    }
}
