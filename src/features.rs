//! FEAT reply parsing (RFC 2389)
//!
//! The FEAT command returns a multi-line advertisement of the extensions a
//! server supports. This module reduces that advertisement down to the fixed
//! set of booleans the rest of the client needs to decide whether it may use
//! MDTM, SIZE, MLST, MLSD, UTF8, MFMT or EPSV.

/// Server extensions negotiated once during login and read-only afterwards
#[must_use]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureSet {
    /// Server supports the MDTM command (query modification time)
    pub mdtm: bool,
    /// Server supports the SIZE command
    pub size: bool,
    /// Server supports MLST (single-file machine listing)
    pub mlst: bool,
    /// Server supports MLSD (directory machine listing)
    pub mlsd: bool,
    /// Server supports UTF8 control-channel encoding
    pub utf8: bool,
    /// Server supports MFMT (set modification time)
    pub mfmt: bool,
    /// Server supports EPSV (extended passive mode)
    pub epsv: bool,
}

impl FeatureSet {
    /// Parse a `FeatureSet` out of the text of a FEAT reply
    ///
    /// Each advertised feature is matched as a case-sensitive substring of
    /// the reply text, mirroring how real FEAT replies list one token (with
    /// optional parameters) per line.
    pub fn parse(text: &str) -> Self {
        Self {
            mdtm: text.contains("MDTM"),
            size: text.contains("SIZE"),
            mlst: text.contains("MLST"),
            mlsd: text.contains("MLSD"),
            utf8: text.contains("UTF8"),
            mfmt: text.contains("MFMT"),
            epsv: text.contains("EPSV"),
        }
    }
}
