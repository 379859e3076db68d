//! Directory navigation: PWD, CWD, CDUP and recursive MKD/RMD helpers.

use crate::commands;
use crate::error::{FtpError, Result};
use crate::response::codes;

use super::FtpClient;

impl FtpClient {
    /// Query the current working directory via `PWD`.
    pub async fn get_current_directory(&mut self) -> Result<String> {
        self.send_line(commands::pwd()).await?;
        let reply = self.recv_reply().await?;
        if reply.code != codes::PATHNAME_CREATED {
            return Err(FtpError::Protocol {
                code: reply.code,
                message: reply.text,
            });
        }
        commands::parse_pwd_response(&reply)
    }

    /// Change the current working directory via `CWD`.
    ///
    /// # Errors
    ///
    /// Returns [`FtpError::NotFound`] if the server rejects the change.
    pub async fn set_current_directory(&mut self, path: &str) -> Result<()> {
        if self.cwd_raw(path).await? {
            Ok(())
        } else {
            Err(FtpError::NotFound(path.to_string()))
        }
    }

    /// Move up one directory level via `CDUP`.
    pub async fn cdup(&mut self) -> Result<()> {
        self.send_line(commands::cdup()).await?;
        let reply = self.recv_reply().await?;
        if reply.code >= 400 {
            return Err(FtpError::Protocol {
                code: reply.code,
                message: reply.text,
            });
        }
        Ok(())
    }

    /// Send `CWD path`, returning whether the server accepted it (non-fatal
    /// on rejection — used both as an existence probe and internally by
    /// [`set_current_directory`](Self::set_current_directory)).
    pub(super) async fn cwd_raw(&mut self, path: &str) -> Result<bool> {
        let cmd = commands::cwd(path);
        self.send_line(&cmd).await?;
        let reply = self.recv_reply().await?;
        Ok(reply.code < 300)
    }

    async fn mkd_raw(&mut self, name: &str) -> Result<()> {
        let cmd = commands::mkd(name);
        self.send_line(&cmd).await?;
        let reply = self.recv_reply().await?;
        if reply.code != codes::PATHNAME_CREATED {
            return Err(FtpError::Protocol {
                code: reply.code,
                message: reply.text,
            });
        }
        Ok(())
    }

    async fn rmd_raw(&mut self, path: &str) -> Result<()> {
        let cmd = commands::rmd(path);
        self.send_line(&cmd).await?;
        let reply = self.recv_reply().await?;
        if reply.code == codes::FILE_UNAVAILABLE_PERMANENT {
            return Err(FtpError::NotFound(path.to_string()));
        }
        if reply.code != codes::FILE_ACTION_OK {
            return Err(FtpError::Protocol {
                code: reply.code,
                message: reply.text,
            });
        }
        Ok(())
    }

    /// Create a directory, optionally creating every missing intermediate
    /// path component (`recursive`).
    pub async fn create_dir(&mut self, path: &str, recursive: bool) -> Result<()> {
        if path.trim().is_empty() {
            return Err(FtpError::Argument("path must not be empty".to_string()));
        }

        if !recursive {
            self.mkd_raw(path).await?;
            return Ok(());
        }

        self.cwd_raw("/").await?;

        let mut prefix = String::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            prefix.push('/');
            prefix.push_str(segment);

            if !self.cwd_raw(&prefix).await? {
                self.mkd_raw(segment).await?;
                if !self.cwd_raw(&prefix).await? {
                    return Err(FtpError::Protocol {
                        code: 0,
                        message: format!("failed to enter newly created directory {prefix}"),
                    });
                }
            }
        }

        Ok(())
    }

    /// Check whether `path` exists as a directory, restoring the current
    /// directory unconditionally afterwards.
    pub async fn directory_exists(&mut self, path: &str) -> Result<bool> {
        let saved = self.get_current_directory().await?;
        let exists = self.cwd_raw(path).await;
        self.cwd_raw(&saved).await?;
        exists
    }

    /// Delete a directory, optionally recursing into its contents first.
    pub async fn delete_directory(&mut self, path: &str, recursive: bool) -> Result<()> {
        if !recursive {
            return self.rmd_raw(path).await;
        }

        let saved = self.get_current_directory().await?;

        if !self.cwd_raw(path).await? {
            return Err(FtpError::NotFound(path.to_string()));
        }

        let entries = self.list(None).await?;
        for entry in entries {
            match entry.kind {
                crate::commands::EntryKind::File => {
                    self.delete_file(&entry.name).await?;
                }
                crate::commands::EntryKind::Dir => {
                    Box::pin(self.delete_directory(&entry.name, true)).await?;
                }
                _ => {}
            }
        }

        self.cdup().await?;
        self.rmd_raw(path).await?;
        self.cwd_raw(&saved).await?;
        Ok(())
    }
}
