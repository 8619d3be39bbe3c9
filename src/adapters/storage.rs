use crate::domain::model::WordSet;
use crate::domain::ports::WordlistSink;
use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Writes a wordlist as UTF-8 text, one word per line.
#[derive(Debug, Clone)]
pub struct LocalFileSink {
    path: PathBuf,
}

impl LocalFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn write_lines(file: File, words: &WordSet) -> Result<()> {
    let mut writer = BufWriter::new(file);
    for word in words {
        writer.write_all(word.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

impl WordlistSink for LocalFileSink {
    fn write_words(&self, words: &WordSet) -> Result<String> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.path)?;
        tracing::debug!("Writing {} words to {}", words.len(), self.path.display());

        // 寫入失敗時不留下不完整的檔案
        if let Err(e) = write_lines(file, words) {
            if let Err(cleanup) = fs::remove_file(&self.path) {
                tracing::warn!(
                    "Could not remove partial wordlist {}: {}",
                    self.path.display(),
                    cleanup
                );
            }
            return Err(e);
        }

        Ok(self.path.display().to_string())
    }
}
