// File: crates/chart-core/src/data.rs
// Summary: Engagement record model and delimited-file loader (Likes/Date coercion, malformed-row policy).

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::LoadError;

/// One row of the engagement table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub platform: String,
    pub post_type: String,
    pub date: NaiveDate,
    /// Trimmed source text of the Date field; used for axis labels.
    pub date_label: String,
    pub likes: u64,
}

/// Loaded records. Immutable once built; renderers borrow it.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<Record>,
    skipped: usize,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records, skipped: 0 }
    }
    pub fn records(&self) -> &[Record] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    /// Rows dropped under [`MalformedRows::Skip`].
    pub fn skipped(&self) -> usize { self.skipped }
}

/// What to do with a row whose Likes or Date cannot be parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedRows {
    /// Abort the whole load with the first bad row.
    #[default]
    Fail,
    /// Drop the row, log a warning and keep going.
    Skip,
}

#[derive(Clone, Copy, Debug)]
pub struct LoadOptions {
    pub delimiter: u8,
    pub malformed: MalformedRows,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',', malformed: MalformedRows::Fail }
    }
}

/// Load a dataset from a file on disk.
pub fn load_path(path: impl AsRef<Path>, opts: &LoadOptions) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    let ds = load_reader(file, opts)?;
    debug!(path = %path.display(), records = ds.len(), skipped = ds.skipped, "dataset loaded");
    Ok(ds)
}

/// Load a dataset from any reader holding delimited text with a header row.
pub fn load_reader<R: Read>(reader: R, opts: &LoadOptions) -> Result<Dataset, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(opts.delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .collect::<Vec<_>>();
    let idx = |name: &'static str| -> Result<usize, LoadError> {
        let want = name.to_ascii_lowercase();
        headers.iter().position(|h| *h == want).ok_or(LoadError::MissingColumn(name))
    };
    let i_platform = idx("Platform")?;
    let i_post_type = idx("PostType")?;
    let i_date = idx("Date")?;
    let i_likes = idx("Likes")?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in rdr.records() {
        let row = row?;
        // Header is line 1.
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let field = |i: usize| row.get(i).unwrap_or("").trim();

        match parse_row(line, field(i_platform), field(i_post_type), field(i_date), field(i_likes)) {
            Ok(rec) => records.push(rec),
            Err(e) if opts.malformed == MalformedRows::Skip => {
                warn!(line, error = %e, "skipping malformed row");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(Dataset { records, skipped })
}

fn parse_row(line: u64, platform: &str, post_type: &str, date: &str, likes: &str) -> Result<Record, LoadError> {
    let likes = parse_likes(likes)
        .ok_or_else(|| LoadError::InvalidLikes { line, value: likes.to_string() })?;
    let parsed = parse_date(date)
        .ok_or_else(|| LoadError::InvalidDate { line, value: date.to_string() })?;
    Ok(Record {
        platform: platform.to_string(),
        post_type: post_type.to_string(),
        date: parsed,
        date_label: date.to_string(),
        likes,
    })
}

/// Strict non-negative integer parse. Empty text is rejected, not read as 0.
pub fn parse_likes(s: &str) -> Option<u64> {
    let s = s.trim();
    let digits = s.strip_prefix('+').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u64>().ok()
}

/// Parse a calendar date, ignoring a trailing parenthesised comment
/// such as `3/1/2024 (Friday)`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let core = match s.find('(') {
        Some(i) if s.ends_with(')') => s[..i].trim_end(),
        _ => s,
    };
    if core.is_empty() {
        return None;
    }
    // Pick the layout from the shape of the text so two-digit years never
    // parse as year 24 AD.
    let fmt = if core.contains('-') {
        "%Y-%m-%d"
    } else if core.split('/').next().map_or(false, |y| y.len() == 4) {
        "%Y/%m/%d"
    } else if core.rsplit('/').next().map_or(false, |y| y.len() == 2) {
        "%m/%d/%y"
    } else {
        "%m/%d/%Y"
    };
    NaiveDate::parse_from_str(core, fmt).ok()
}
