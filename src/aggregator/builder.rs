use std::fmt::Display;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, TimeZone};

use crate::aggregator::log_files::list_log_files;
use crate::models::NormalizedRecord;
use crate::parsers::{extract_records, parse_entries};

/// Collect cleaned records from every log file in `log_dir`, in local time
///
/// Files are processed oldest first by modification time; within a file,
/// records follow fragment order. Directories are skipped.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or if any file fails
/// (see [`parse_log_file`]). Processing stops at the first failing file.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use daslog_clean::collect_records;
///
/// let records = collect_records(&PathBuf::from("/home/alice/Documents/CozmoLogs"))?;
/// for record in &records {
///     println!("{}", record);
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn collect_records(log_dir: &Path) -> Result<Vec<NormalizedRecord>> {
    collect_records_in(log_dir, &Local)
}

/// Same as [`collect_records`], formatting timestamps in `tz`
pub fn collect_records_in<Tz>(log_dir: &Path, tz: &Tz) -> Result<Vec<NormalizedRecord>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut records = Vec::new();

    for path in list_log_files(log_dir)? {
        if !path.is_file() {
            log::debug!("Skipping non-file entry {}", path.display());
            continue;
        }

        match parse_log_file(&path, tz) {
            Ok(file_records) => records.extend(file_records),
            Err(e) => {
                log::error!("Issue in {}", path.display());
                return Err(e.context(format!("Issue in {}", path.display())));
            }
        }
    }

    log::info!("Collected {} records from {}", records.len(), log_dir.display());

    Ok(records)
}

/// Read one Daslog file and flatten each of its fragments into a record
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 text or if any
/// fragment carries a non-numeric `$ts`.
pub fn parse_log_file<Tz>(path: &Path, tz: &Tz) -> Result<Vec<NormalizedRecord>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read log file: {}", path.display()))?;

    let outcome = parse_entries(&content);
    log::debug!(
        "Parsed {}: {} fragments ({} unparseable)",
        path.display(),
        outcome.entries.len(),
        outcome.failures
    );

    extract_records(&outcome.entries, tz)
}
