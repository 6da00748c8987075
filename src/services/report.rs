use crate::domain::models::HintRecord;
use std::path::{Path, PathBuf};

pub const CLUE_SHEET_HEADER: [&str; 4] = [
    "Person",
    "Hint Description",
    "Requirement",
    "Encrypted Character",
];

/// Writes the clue sheet as `hints-<encrypted_key>.csv` under `out_dir`,
/// creating the directory if needed. Returns the written path.
pub fn write_clue_sheet(
    out_dir: &Path,
    encrypted_key: &str,
    records: &[HintRecord],
) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join(format!("hints-{encrypted_key}.csv"));
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(CLUE_SHEET_HEADER)?;
    for record in records {
        let encrypted = record.encrypted_char.to_string();
        writer.write_record([
            record.person.as_str(),
            record.hint_text.as_str(),
            record.requirement.as_str(),
            encrypted.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(path)
}
