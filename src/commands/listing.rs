//! Directory listing parsers: MLSD (machine-readable) and Unix `ls -l` LIST

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Kind of filesystem entry reported by a directory listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file
    File,
    /// A directory
    Dir,
    /// A symbolic link
    Symlink,
    /// An entry whose kind the listing parser could not classify
    Unknown,
}

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Entry name (never `.` or `..`)
    pub name: String,
    /// Size in bytes, when reported
    pub size: Option<u64>,
    /// Last-modification time, when reported
    pub modify: Option<DateTime<Utc>>,
    /// Kind of entry
    pub kind: EntryKind,
}

fn parse_mdtm_timestamp(value: &str) -> Option<DateTime<Utc>> {
    // Some servers append fractional seconds (e.g. "20180608233854.000")
    let value = value.split('.').next().unwrap_or(value);
    let naive = NaiveDateTime::parse_from_str(value, "%Y%m%d%H%M%S").ok()?;
    Some(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

/// Parse a single MLSD line: `fact1=value1;fact2=value2;...; name`
///
/// Returns `None` for blank lines. Unknown facts are ignored.
pub fn parse_mlsd_line(line: &str) -> Option<DirEntry> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return None;
    }

    let mut facts_and_name = line.splitn(2, ' ');
    let facts_part = facts_and_name.next().unwrap_or("");
    let name = facts_and_name.next()?.to_string();

    let mut size = None;
    let mut modify = None;
    let mut kind = EntryKind::Unknown;

    for fact in facts_part.split(';') {
        let fact = fact.trim();
        if fact.is_empty() {
            continue;
        }
        let Some((key, value)) = fact.split_once('=') else {
            continue;
        };
        match key.to_ascii_lowercase().as_str() {
            "size" => size = value.parse::<u64>().ok(),
            "modify" => modify = parse_mdtm_timestamp(value),
            "type" => {
                kind = match value.to_ascii_lowercase().as_str() {
                    "file" => EntryKind::File,
                    "dir" | "cdir" | "pdir" => EntryKind::Dir,
                    _ => EntryKind::Unknown,
                };
            }
            _ => {}
        }
    }

    Some(DirEntry {
        name,
        size,
        modify,
        kind,
    })
}

fn entry_kind_from_type_char(c: char) -> EntryKind {
    match c {
        'd' => EntryKind::Dir,
        'e' | 'l' => EntryKind::Symlink,
        'b' | 'f' | '-' => EntryKind::File,
        _ => EntryKind::Unknown,
    }
}

fn month_number(name: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name))
        .map(|idx| idx as u32 + 1)
}

/// Parse a single Unix `ls -l` style LIST line
///
/// Format (approximate): `<type-char><perm 9 chars>[+]? <links> <owner>
/// <group> <size> <month> <day> <time-or-year> <name>`. Returns `None` for
/// blank lines, lines that don't match the expected shape, or entries named
/// `.`/`..`.
pub fn parse_unix_list_line(line: &str) -> Option<DirEntry> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return None;
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 9 {
        return None;
    }

    let type_char = fields[0].chars().next()?;
    let kind = entry_kind_from_type_char(type_char);
    let size = fields[4].parse::<u64>().ok();

    let month = month_number(fields[5]);
    let day = fields[6].parse::<u32>().ok();
    let modify = match (month, day) {
        (Some(month), Some(day)) => {
            if let Some((h, m)) = fields[7].split_once(':') {
                let year = Utc::now().year_naive_if_past_else_current(month, day);
                NaiveDate::from_ymd_opt(year, month, day)
                    .and_then(|d| d.and_hms_opt(h.parse().ok()?, m.parse().ok()?, 0))
                    .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
            } else {
                let year = fields[7].parse::<i32>().ok()?;
                NaiveDate::from_ymd_opt(year, month, day)
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
            }
        }
        _ => None,
    };

    // Name is everything after the 8 fixed fields, preserving internal spacing.
    let name = name_after_fixed_fields(line, 8)?;
    if name == "." || name == ".." {
        return None;
    }

    Some(DirEntry {
        name,
        size,
        modify,
        kind,
    })
}

/// Recover the tail of `line` after skipping `n` whitespace-separated fields,
/// preserving any internal spacing the name itself may contain.
fn name_after_fixed_fields(line: &str, n: usize) -> Option<String> {
    let mut idx = 0;
    let mut fields_seen = 0;
    let bytes = line.as_bytes();
    while fields_seen < n {
        while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
            idx += 1;
        }
        if idx >= bytes.len() {
            return None;
        }
        while idx < bytes.len() && !bytes[idx].is_ascii_whitespace() {
            idx += 1;
        }
        fields_seen += 1;
    }
    while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
        idx += 1;
    }
    if idx >= bytes.len() {
        return None;
    }
    Some(line[idx..].to_string())
}

trait CurrentYearHeuristic {
    fn year_naive_if_past_else_current(&self, month: u32, day: u32) -> i32;
}

impl CurrentYearHeuristic for DateTime<Utc> {
    /// LIST entries with a `HH:MM` time field omit the year; the convention
    /// (matching most Unix `ls`) is that it is the current year unless that
    /// would place the date in the future, in which case it is last year.
    fn year_naive_if_past_else_current(&self, month: u32, day: u32) -> i32 {
        use chrono::Datelike;
        let current_year = self.year();
        let candidate = NaiveDate::from_ymd_opt(current_year, month, day);
        match candidate {
            Some(d) if d > self.date_naive() => current_year - 1,
            Some(_) => current_year,
            None => current_year,
        }
    }
}
