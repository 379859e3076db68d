//! Login handshake: USER/PASS, FEAT negotiation, optional UTF8, TYPE I.

use crate::commands;
use crate::error::{FtpError, Result};
use crate::features::FeatureSet;
use crate::response::codes;
use tracing::debug;

use super::FtpClient;
use super::state::{ConnectionState, TransferMode};

impl FtpClient {
    /// Log in with the configured credentials and negotiate features.
    ///
    /// Sends `USER`, `PASS` (if challenged), `FEAT`, `OPTS UTF8 ON` (if the
    /// server advertises UTF8), and `TYPE I`.
    ///
    /// # Errors
    ///
    /// Returns [`FtpError::Auth`] if the server rejects the credentials, or
    /// [`FtpError::Protocol`] for any other unexpected reply.
    pub async fn login(&mut self) -> Result<()> {
        debug!("Logging in as {}", self.config.user);

        let cmd = commands::user(&self.config.user);
        self.send_line(&cmd).await?;
        let reply = self.recv_reply().await?;

        if reply.code == codes::USERNAME_OK_NEED_PASSWORD {
            let cmd = commands::pass(&self.config.password);
            self.send_line(&cmd).await?;
            let reply = self.recv_reply().await?;
            if reply.code == codes::NOT_LOGGED_IN {
                return Err(FtpError::Auth(reply.text));
            }
            if !reply.is_success() {
                return Err(FtpError::Protocol {
                    code: reply.code,
                    message: reply.text,
                });
            }
        } else if reply.code == codes::NOT_LOGGED_IN {
            return Err(FtpError::Auth(reply.text));
        } else if !reply.is_success() {
            return Err(FtpError::Protocol {
                code: reply.code,
                message: reply.text,
            });
        }

        self.negotiate_features().await?;

        if self.features.utf8 {
            self.send_line(commands::opts_utf8_on()).await?;
            let reply = self.recv_reply().await?;
            if !reply.is_success() {
                return Err(FtpError::Protocol {
                    code: reply.code,
                    message: reply.text,
                });
            }
        }

        self.send_line(commands::type_i()).await?;
        let reply = self.recv_reply().await?;
        if !reply.is_success() {
            return Err(FtpError::Protocol {
                code: reply.code,
                message: reply.text,
            });
        }
        self.transfer_mode = TransferMode::Binary;

        self.state = ConnectionState::Authenticated;
        debug!("Login successful, features: {:?}", self.features);
        Ok(())
    }

    async fn negotiate_features(&mut self) -> Result<()> {
        self.send_line(commands::feat()).await?;
        let reply = self.recv_reply().await?;
        if reply.code != codes::SYSTEM_STATUS {
            return Err(FtpError::Protocol {
                code: reply.code,
                message: reply.text,
            });
        }
        self.features = FeatureSet::parse(&reply.text);
        Ok(())
    }

    /// Require a negotiated feature, failing fast if the server didn't advertise it.
    pub(super) fn require_feature(&self, name: &'static str, present: bool) -> Result<()> {
        if present {
            Ok(())
        } else {
            Err(FtpError::FeatureMissing(name))
        }
    }
}
