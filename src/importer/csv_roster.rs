use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One row of a roster CSV export: `name,class`
#[derive(Debug, Clone, Deserialize)]
pub struct MemberRecord {
    pub name: String,
    pub class: String,
}

pub fn read_member_records(path: &Path) -> Result<Vec<MemberRecord>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open roster file: {}", path.display()))?;
    parse_member_records(file)
}

/// Rows with a blank name are skipped; the sheet export pads with them
pub fn parse_member_records<R: Read>(input: R) -> Result<Vec<MemberRecord>> {
    let mut reader = csv::Reader::from_reader(input);
    let mut records = Vec::new();

    for row in reader.deserialize() {
        let record: MemberRecord = row.context("Failed to parse roster row")?;
        if record.name.trim().is_empty() {
            continue;
        }
        records.push(record);
    }

    Ok(records)
}
