use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

/// One row of a comma-delimited record file: `id,name,age`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub age: u32,
}

/// Parse a record file into structured entries.
///
/// Rows that don't fit the format are skipped with a warning naming the line
/// number: blank lines, lines without exactly three comma-separated fields,
/// and lines whose age is not an integer. Only an unreadable file is an
/// error.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("can't read record file {}", path.display()))?;

    let mut records = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line.trim();
        if line.is_empty() {
            warn!("line {line_no} is empty, skipped");
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        let [id, name, age] = fields.as_slice() else {
            warn!("line {line_no} has an invalid format: {line:?}, expected 'id,name,age'");
            continue;
        };

        match age.parse::<u32>() {
            Ok(age) => records.push(Record {
                id: id.to_string(),
                name: name.to_string(),
                age,
            }),
            Err(_) => warn!("line {line_no} has a non-integer age: {age:?}, skipped"),
        }
    }
    Ok(records)
}
