//! Directory of JSON order records.
use crate::record::OrderRecord;
use ataix_common::Result;
use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default directory for records, relative to the working directory.
pub const DEFAULT_RECORDS_DIR: &str = "order_results";

/// Append-only store; one pretty-printed file per record.
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Write `record` and return the file path. The directory is created on demand.
    pub fn save(&self, record: &OrderRecord) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(record.file_name());
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, record)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        debug!("Record written to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ataix_common::ExchangeError;
    use serde_json::Value;

    #[test]
    fn creates_directory_and_writes_pretty_json() {
        let tmp = tempfile::tempdir().unwrap();
        let store = RecordStore::new(tmp.path().join("nested").join(DEFAULT_RECORDS_DIR));
        let err = ExchangeError::Transport(String::from("timed out"));
        let record = OrderRecord::from_error("ETH/USDT", None, &err, None);

        let path = store.save(&record).unwrap();
        assert!(path.starts_with(tmp.path()));
        assert_eq!(path.file_name().unwrap().to_string_lossy(), record.file_name());

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"status\": false"));
        let body: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["error"], "Transport error: timed out");
        assert_eq!(body["symbol"], "ETH/USDT");
    }
}
