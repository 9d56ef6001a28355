//! The save file of submitted prompts and the random pick of prompts at startup.
//!
//! The file is append-only: every record is the submitted text followed by
//! [`SAVE_FILE_DELIMITER`].

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, info};

use crate::constants::{SAVE_FILE_DELIMITER, TEXT_BOX_BUFFER_SIZE};

/// Number of prompt slots filled from the save file (Pac-Man, Blinky, Inky).
pub const PROMPT_SLOTS: usize = 3;

/// Splits a save file stream into records.
///
/// A record ends at the delimiter, or after [`TEXT_BOX_BUFFER_SIZE`] bytes
/// without one. Either way its last byte is dropped. A trailing record with
/// neither is ignored.
pub fn read_records<R: Read>(reader: R) -> io::Result<Vec<String>> {
    let mut records = Vec::new();
    let mut line = Vec::with_capacity(TEXT_BOX_BUFFER_SIZE);

    for byte in BufReader::new(reader).bytes() {
        let byte = byte?;
        line.push(byte);
        if line.len() == TEXT_BOX_BUFFER_SIZE || byte == SAVE_FILE_DELIMITER {
            line.pop();
            records.push(String::from_utf8_lossy(&line).into_owned());
            line.clear();
        }
    }

    Ok(records)
}

/// Uniformly samples up to `k` records (reservoir sampling, Algorithm R).
///
/// Slot `i` stays `None` when fewer than `i + 1` records exist.
pub fn sample<R: Rng + ?Sized, const K: usize>(
    records: impl IntoIterator<Item = String>,
    rng: &mut R,
) -> [Option<String>; K] {
    let mut reservoir: [Option<String>; K] = std::array::from_fn(|_| None);

    for (seen, record) in records.into_iter().enumerate() {
        if seen < K {
            reservoir[seen] = Some(record);
        } else {
            let slot = rng.random_range(0..=seen);
            if slot < K {
                reservoir[slot] = Some(record);
            }
        }
    }

    reservoir
}

/// Picks the startup prompts from a save file stream.
pub fn load_prompts<R: Read, G: Rng + ?Sized>(reader: R, rng: &mut G) -> io::Result<[Option<String>; PROMPT_SLOTS]> {
    let records = read_records(reader)?;
    debug!(records = records.len(), "Read saved prompts");
    Ok(sample(records, rng))
}

/// Writes one record.
pub fn append_record<W: Write>(mut writer: W, text: &str) -> io::Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.write_all(&[SAVE_FILE_DELIMITER])?;
    writer.flush()
}

/// The save file kept open for the whole session.
#[derive(Debug)]
pub struct SaveFile {
    path: PathBuf,
    file: File,
}

impl SaveFile {
    /// Opens (creating if needed) the save file for reading and appending.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().read(true).append(true).create(true).open(&path)?;
        info!(path = %path.display(), "Save file opened");
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Samples the startup prompts from everything saved so far.
    pub fn load_prompts<G: Rng + ?Sized>(&mut self, rng: &mut G) -> io::Result<[Option<String>; PROMPT_SLOTS]> {
        self.file.seek(SeekFrom::Start(0))?;
        load_prompts(&mut self.file, rng)
    }

    pub fn append(&mut self, text: &str) -> io::Result<()> {
        append_record(&mut self.file, text)?;
        debug!(text, "Prompt saved");
        Ok(())
    }
}
