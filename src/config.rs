//! FTP connection configuration

/// Connection parameters for an FTP server
///
/// Immutable once a [`crate::FtpClient`] has been constructed from it.
///
/// # Example
///
/// ```
/// use ftp_rs::ConnectionConfig;
///
/// // Recommended: use the constructor methods
/// let config = ConnectionConfig::anonymous("ftp.example.com");
///
/// // Or construct manually
/// let config = ConnectionConfig {
///     host: "ftp.example.com".to_string(),
///     port: 21,
///     user: "anonymous".to_string(),
///     password: "anonymous".to_string(),
///     timeout_ms: 10_000,
///     keepalive_ms: 10_000,
/// };
/// ```
#[must_use]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectionConfig {
    /// Server hostname (e.g., "ftp.example.com")
    pub host: String,

    /// Server port (typically 21)
    #[cfg_attr(feature = "serde", serde(default = "default_port"))]
    pub port: u16,

    /// Username for authentication
    #[cfg_attr(feature = "serde", serde(default = "default_user"))]
    pub user: String,

    /// Password for authentication
    #[cfg_attr(feature = "serde", serde(default = "default_password"))]
    pub password: String,

    /// Milliseconds to wait for a reply before failing with `Timeout`
    #[cfg_attr(feature = "serde", serde(default = "default_timeout_ms"))]
    pub timeout_ms: u64,

    /// Milliseconds of idle control-channel time before a keepalive `NOOP` is sent
    #[cfg_attr(feature = "serde", serde(default = "default_keepalive_ms"))]
    pub keepalive_ms: u64,
}

#[cfg(feature = "serde")]
fn default_port() -> u16 {
    21
}

#[cfg(feature = "serde")]
fn default_user() -> String {
    "anonymous".to_string()
}

#[cfg(feature = "serde")]
fn default_password() -> String {
    "anonymous".to_string()
}

#[cfg(feature = "serde")]
fn default_timeout_ms() -> u64 {
    10_000
}

#[cfg(feature = "serde")]
fn default_keepalive_ms() -> u64 {
    10_000
}

impl ConnectionConfig {
    /// Create a new connection configuration
    ///
    /// # Arguments
    ///
    /// * `host` - Server hostname
    /// * `port` - Server port
    /// * `user` - Authentication username
    /// * `password` - Authentication password
    pub fn new(
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            user: user.into(),
            password: password.into(),
            timeout_ms: 10_000,
            keepalive_ms: 10_000,
        }
    }

    /// Create a configuration for anonymous login on the standard port (21)
    pub fn anonymous(host: impl Into<String>) -> Self {
        Self::new(host, 21, "anonymous", "anonymous")
    }

    /// Create a configuration with credentials on the standard port (21)
    pub fn with_credentials(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::new(host, 21, user, password)
    }

    /// Override the reply-wait timeout, in milliseconds
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Override the keepalive interval, in milliseconds
    pub fn keepalive_ms(mut self, keepalive_ms: u64) -> Self {
        self.keepalive_ms = keepalive_ms;
        self
    }
}
