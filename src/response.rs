//! FTP reply types and status codes

/// A single (possibly multi-line) FTP server reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// 3-digit FTP reply code
    pub code: u16,
    /// Reply text (intermediate lines of a multi-line reply joined by CRLF)
    pub text: String,
}

impl Reply {
    /// Check if reply indicates success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// Check if reply indicates a preliminary/continuation status (1xx or 3xx)
    pub fn is_continuation(&self) -> bool {
        (100..200).contains(&self.code) || (300..400).contains(&self.code)
    }

    /// Check if reply indicates an error (4xx or 5xx)
    pub fn is_error(&self) -> bool {
        self.code >= 400
    }
}

/// FTP reply codes (RFC 959 and extensions)
#[allow(dead_code)]
pub mod codes {
    // 1xx - Preliminary
    /// Restart marker reply
    pub const RESTART_MARKER: u16 = 110;
    /// Service ready in nnn minutes
    pub const SERVICE_READY_SOON: u16 = 120;
    /// Data connection already open; transfer starting
    pub const DATA_CONNECTION_OPEN: u16 = 125;
    /// File status okay; about to open data connection
    pub const FILE_STATUS_OKAY: u16 = 150;

    // 2xx - Success
    /// Command okay
    pub const COMMAND_OK: u16 = 200;
    /// System status / help reply
    pub const SYSTEM_STATUS: u16 = 211;
    /// Directory status
    pub const DIRECTORY_STATUS: u16 = 212;
    /// File status (SIZE, MDTM, MFMT)
    pub const FILE_STATUS: u16 = 213;
    /// Help message
    pub const HELP_MESSAGE: u16 = 214;
    /// Service ready for new user
    pub const SERVICE_READY: u16 = 220;
    /// Service closing control connection
    pub const CLOSING_CONTROL: u16 = 221;
    /// Data connection open, no transfer in progress
    pub const DATA_CONNECTION_IDLE: u16 = 225;
    /// Closing data connection; requested action successful
    pub const CLOSING_DATA_CONNECTION: u16 = 226;
    /// Entering Passive Mode
    pub const ENTERING_PASSIVE: u16 = 227;
    /// Entering Extended Passive Mode (RFC 2428)
    pub const ENTERING_EXTENDED_PASSIVE: u16 = 229;
    /// User logged in, proceed
    pub const USER_LOGGED_IN: u16 = 230;
    /// Requested file action okay, completed (DELE, RNTO, RMD)
    pub const FILE_ACTION_OK: u16 = 250;
    /// "PATHNAME" created (PWD, MKD)
    pub const PATHNAME_CREATED: u16 = 257;

    // 3xx - Continuation
    /// User name okay, need password
    pub const USERNAME_OK_NEED_PASSWORD: u16 = 331;
    /// Need account for login
    pub const NEED_ACCOUNT: u16 = 332;
    /// Requested file action pending further information (RNFR, STOR w/ restart)
    pub const FILE_ACTION_PENDING: u16 = 350;

    // 4xx - Transient failures
    /// Service not available, closing control connection
    pub const SERVICE_NOT_AVAILABLE: u16 = 421;
    /// Can't open data connection
    pub const CANT_OPEN_DATA_CONNECTION: u16 = 425;
    /// Connection closed; transfer aborted
    pub const CONNECTION_CLOSED_ABORTED: u16 = 426;
    /// Requested file action not taken; file unavailable (busy)
    pub const FILE_UNAVAILABLE: u16 = 450;
    /// Requested action aborted; local error in processing
    pub const LOCAL_ERROR: u16 = 451;
    /// Insufficient storage space
    pub const INSUFFICIENT_STORAGE: u16 = 452;

    // 5xx - Permanent failures
    /// Syntax error, command unrecognized
    pub const SYNTAX_ERROR: u16 = 500;
    /// Syntax error in parameters or arguments
    pub const SYNTAX_ERROR_PARAMS: u16 = 501;
    /// Command not implemented
    pub const NOT_IMPLEMENTED: u16 = 502;
    /// Bad sequence of commands
    pub const BAD_SEQUENCE: u16 = 503;
    /// Command not implemented for that parameter
    pub const NOT_IMPLEMENTED_PARAM: u16 = 504;
    /// Not logged in
    pub const NOT_LOGGED_IN: u16 = 530;
    /// Need account for storing files
    pub const NEED_ACCOUNT_FOR_STORING: u16 = 532;
    /// Requested action not taken; file unavailable (not found, no access)
    pub const FILE_UNAVAILABLE_PERMANENT: u16 = 550;
    /// Requested action aborted; page type unknown
    pub const PAGE_TYPE_UNKNOWN: u16 = 551;
    /// Requested file action aborted; exceeded storage allocation
    pub const EXCEEDED_STORAGE_ALLOCATION: u16 = 552;
    /// Requested action not taken; file name not allowed
    pub const FILE_NAME_NOT_ALLOWED: u16 = 553;
}
