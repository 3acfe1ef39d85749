use std::fs::File;
use std::io::{BufRead, BufReader};

use encoding_rs::WINDOWS_1252;

use crate::txt::support;
use crate::types::errors::ParseError;
use crate::types::schema::ColumnSchema;
use crate::types::table::LogTable;

/// Parses a whitespace-delimited CAN text log and builds a [`LogTable`].
///
/// The function reads the file **line by line** and applies the line parser
/// with the given schema. Lines that fail to parse (corrupt timestamp,
/// truncated row) are dropped and counted in `LogTable::skipped_lines`; the
/// surviving records keep their relative file order. A log with scattered
/// corruption still yields the maximum usable subset of records.
///
/// Lines are decoded as **Windows-1252**, so logs written by legacy Windows
/// tools parse instead of failing UTF-8 validation.
///
/// # Parameters
/// - `path`: Path to the log file.
/// - `schema`: Column layout of the file (see [`ColumnSchema`]). Chosen
///   explicitly by the caller, never sniffed from column counts.
///
/// # Returns
/// - `Ok(LogTable)` with all surviving records in file order.
/// - `Err(ParseError::FileUnreadable)` if the file cannot be opened or read.
/// - `Err(ParseError::EmptyLog)` if the file yields **zero** records (empty
///   file, or every line corrupt). File-level failures never produce a
///   partial table.
pub fn from_file(path: &str, schema: &ColumnSchema) -> Result<LogTable, ParseError> {
    let file: File = File::open(path).map_err(|source| ParseError::FileUnreadable {
        path: path.to_string(),
        source,
    })?;

    let table: LogTable = from_reader(BufReader::new(file), schema, path)?;
    if table.is_empty() {
        return Err(ParseError::EmptyLog {
            path: path.to_string(),
        });
    }
    Ok(table)
}

/// Builds a [`LogTable`] from any buffered byte source.
///
/// Same per-line behavior as [`from_file`]; `label` only names the source in
/// error messages. No empty-table check here: an in-memory source with zero
/// records is a valid (empty) table.
pub fn from_reader<R: BufRead>(
    mut reader: R,
    schema: &ColumnSchema,
    label: &str,
) -> Result<LogTable, ParseError> {
    let mut table: LogTable = LogTable::default();

    // Buffer for raw bytes of a line
    let mut raw_line: Vec<u8> = Vec::with_capacity(256);

    loop {
        raw_line.clear();
        let read: usize =
            reader
                .read_until(b'\n', &mut raw_line)
                .map_err(|source| ParseError::FileUnreadable {
                    path: label.to_string(),
                    source,
                })?;
        if read == 0 {
            break;
        }

        let (decoded, _, _) = WINDOWS_1252.decode(&raw_line);
        let mut line: String = decoded.into_owned();
        // trim trailing CR/LF to behave like .lines()
        while line.ends_with(['\n', '\r']) {
            line.pop();
        }

        push_line(&mut table, &line, schema);
    }

    Ok(table)
}

/// Builds a [`LogTable`] from lines already held in memory.
///
/// Blank lines are ignored; erroring lines are skipped and counted, exactly
/// as in [`from_file`].
pub fn from_lines<I, S>(lines: I, schema: &ColumnSchema) -> LogTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table: LogTable = LogTable::default();
    for line in lines {
        push_line(&mut table, line.as_ref(), schema);
    }
    table
}

// Per-line errors are recovered here: drop the line, bump the counter.
fn push_line(table: &mut LogTable, line: &str, schema: &ColumnSchema) {
    if line.trim().is_empty() {
        return;
    }
    match support::line::parse(line, schema) {
        Ok(record) => table.records.push(record),
        Err(_) => table.skipped_lines += 1,
    }
}
