//! FTP command builders and reply parsers

// Module declarations
pub mod listing;
pub mod navigation;
pub mod response;

// Re-export all public items for backward compatibility
pub use listing::*;
pub use navigation::*;
pub use response::*;

// Login and session commands

/// Build USER command
pub fn user(username: &str) -> String {
    format!("USER {}", username)
}

/// Build PASS command
pub fn pass(password: &str) -> String {
    format!("PASS {}", password)
}

/// Build FEAT command (RFC 2389)
///
/// Requests the list of extensions supported by the server. Response is
/// multi-line, starting with 211.
pub fn feat() -> &'static str {
    "FEAT"
}

/// Build OPTS UTF8 ON command (RFC 2640)
pub fn opts_utf8_on() -> &'static str {
    "OPTS UTF8 ON"
}

/// Build TYPE I command, selecting binary (image) transfer mode
pub fn type_i() -> &'static str {
    "TYPE I"
}

/// Build TYPE A command, selecting ASCII transfer mode
pub fn type_a() -> &'static str {
    "TYPE A"
}

/// Build NOOP command
pub fn noop() -> &'static str {
    "NOOP"
}

/// Build QUIT command
pub fn quit() -> &'static str {
    "QUIT"
}

// Passive-mode data connection setup

/// Build EPSV command (RFC 2428)
pub fn epsv() -> &'static str {
    "EPSV"
}

// File and directory metadata

/// Build SIZE command (RFC 3659 §4)
pub fn size(path: &str) -> String {
    format!("SIZE {}", path)
}

/// Build MDTM command, querying a file's last modification time (RFC 3659 §3)
pub fn mdtm(path: &str) -> String {
    format!("MDTM {}", path)
}

/// Build MFMT command, setting a file's modification time
///
/// `stamp` must already be formatted as `YYYYMMDDHHMMSS`.
pub fn mfmt(stamp: &str, path: &str) -> String {
    format!("MFMT {} {}", stamp, path)
}

// File and directory manipulation

/// Build DELE command
pub fn dele(path: &str) -> String {
    format!("DELE {}", path)
}

/// Build RNFR command (first half of a rename)
pub fn rnfr(path: &str) -> String {
    format!("RNFR {}", path)
}

/// Build RNTO command (second half of a rename)
pub fn rnto(path: &str) -> String {
    format!("RNTO {}", path)
}

// Directory listings and data transfer

/// Build MLSD command (RFC 3659 §7), optionally scoped to `path`
pub fn mlsd(path: Option<&str>) -> String {
    match path {
        Some(path) => format!("MLSD {}", path),
        None => "MLSD".to_string(),
    }
}

/// Build LIST command, optionally scoped to `path`
pub fn list(path: Option<&str>) -> String {
    match path {
        Some(path) => format!("LIST {}", path),
        None => "LIST".to_string(),
    }
}

/// Build STOR command, uploading to `name` over the data connection
pub fn stor(name: &str) -> String {
    format!("STOR {}", name)
}

/// Build RETR command, downloading `path` over the data connection
pub fn retr(path: &str) -> String {
    format!("RETR {}", path)
}
