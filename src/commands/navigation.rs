//! Directory navigation command builders (CWD, PWD, CDUP, MKD, RMD)

use super::response::parse_quoted_path;
use crate::error::Result;
use crate::response::Reply;

/// Build PWD command
pub fn pwd() -> &'static str {
    "PWD"
}

/// Build CWD command
pub fn cwd(path: &str) -> String {
    format!("CWD {}", path)
}

/// Build CDUP command
pub fn cdup() -> &'static str {
    "CDUP"
}

/// Build MKD command
pub fn mkd(path: &str) -> String {
    format!("MKD {}", path)
}

/// Build RMD command
pub fn rmd(path: &str) -> String {
    format!("RMD {}", path)
}

/// Parse a PWD or MKD reply (`257 "/path" ...`) into the bare path
pub fn parse_pwd_response(reply: &Reply) -> Result<String> {
    parse_quoted_path(&reply.text)
}
