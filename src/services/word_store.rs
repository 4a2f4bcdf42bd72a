use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use csv::{ByteRecord, ReaderBuilder, StringRecord};
use log::{debug, info, warn};
use crate::error::WordStoreError;
use crate::models::{WordCollection, WordEntry};

/// What to do with a row that cannot be turned into a `WordEntry`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Log the row and keep going
    #[default]
    Skip,
    /// Abort the whole load on the first bad row
    Strict,
}

const TERM_HEADERS: &[&str] = &["word", "term", "french", "french_term", "lemme"];
const TRANSLATION_HEADERS: &[&str] = &["translation", "english", "meaning"];
const POS_HEADERS: &[&str] = &["pos", "status", "type"];
const CATEGORY_HEADERS: &[&str] = &["gender_or_group", "category", "tag", "gender", "group"];

/// Column positions resolved from the header row
#[derive(Debug, PartialEq, Eq)]
struct Columns {
    term: usize,
    translation: Option<usize>,
    pos: Option<usize>,
    category: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let names: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();

        Columns {
            // Files without a recognised term header carry the word first
            term: find_column(&names, TERM_HEADERS).unwrap_or(0),
            translation: find_column(&names, TRANSLATION_HEADERS),
            pos: find_column(&names, POS_HEADERS),
            category: find_column(&names, CATEGORY_HEADERS),
        }
    }
}

fn find_column(names: &[String], aliases: &[&str]) -> Option<usize> {
    names.iter().position(|n| aliases.iter().any(|a| *a == n.as_str()))
}

/// Load a word list from a CSV file with a header row
pub fn load(path: impl AsRef<Path>, label: &str, policy: LoadPolicy) -> Result<WordCollection, WordStoreError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| WordStoreError::file_access(path, e))?;

    let collection = load_from_reader(file, label, path, policy)?;
    info!("Loaded {} {} words from {}", collection.len(), label, path.display());
    Ok(collection)
}

/// Same as [`load`] over any reader; `source` is only used in errors and logs
pub fn load_from_reader<R: Read>(
    reader: R,
    label: &str,
    source: &Path,
    policy: LoadPolicy,
) -> Result<WordCollection, WordStoreError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| WordStoreError::file_access(source, e))?
        .clone();
    if headers.is_empty() {
        return Err(WordStoreError::file_access(
            source,
            io::Error::new(io::ErrorKind::InvalidData, "missing header row"),
        ));
    }

    let columns = Columns::from_headers(&headers);
    debug!("Columns for {}: {:?}", source.display(), columns);

    let mut entries = Vec::new();
    let mut skipped = 0usize;
    let mut record = ByteRecord::new();

    loop {
        match reader.read_byte_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => return Err(WordStoreError::file_access(source, e)),
        }

        let line = record.position().map(|p| p.line()).unwrap_or(0);
        match parse_record(&record, &columns, headers.len(), source, line) {
            Ok(entry) => entries.push(entry),
            Err(e) if policy == LoadPolicy::Skip => {
                warn!("Skipping row: {}", e);
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    if skipped > 0 {
        warn!("Skipped {} bad rows in {}", skipped, source.display());
    }

    Ok(WordCollection::new(label, source.to_path_buf(), entries))
}

fn parse_record(
    record: &ByteRecord,
    columns: &Columns,
    expected: usize,
    source: &Path,
    line: u64,
) -> Result<WordEntry, WordStoreError> {
    if record.len() != expected {
        return Err(WordStoreError::Malformed {
            path: source.to_path_buf(),
            line,
            expected,
            found: record.len(),
        });
    }

    let parse_error = |reason: String| WordStoreError::Parse {
        path: source.to_path_buf(),
        line,
        reason,
    };

    let record = StringRecord::from_byte_record(record.clone())
        .map_err(|e| parse_error(e.utf8_error().to_string()))?;

    let term = cell(&record, Some(columns.term))
        .ok_or_else(|| parse_error("empty term".to_string()))?;

    Ok(WordEntry {
        term,
        translation: cell(&record, columns.translation),
        pos: cell(&record, columns.pos),
        category: cell(&record, columns.category),
    })
}

fn cell(record: &StringRecord, index: Option<usize>) -> Option<String> {
    index
        .and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
