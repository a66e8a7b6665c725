use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Sentinel accepted by [`Selection::parse`] for "every set in the directory".
pub const ALL_SETS: &str = "ALL";

const SOURCE_EXTENSION: &str = "csv";

/// One flashcard: a word and its combined meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    pub word: String,
    pub meaning: String,
}

/// Which source files a quiz run draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Files(Vec<String>),
}

impl Selection {
    /// Parse the raw `files` form value: `ALL` or a comma separated list.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_SETS {
            return Selection::All;
        }

        let files = raw
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        Selection::Files(files)
    }
}

/// Reads vocabulary sets out of a single source directory.
#[derive(Debug, Clone)]
pub struct WordLoader {
    source_dir: PathBuf,
}

impl WordLoader {
    pub fn new<P: Into<PathBuf>>(source_dir: P) -> Self {
        Self {
            source_dir: source_dir.into(),
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Sorted names of the `*.csv` files in the source directory.
    ///
    /// A missing or unreadable directory yields an empty list.
    pub fn list_sources(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.source_dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %self.source_dir.display(), error = %e, "cannot read source directory");
                return Vec::new();
            }
        };

        let mut names = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let is_csv = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == SOURCE_EXTENSION);
            if !is_csv {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                // hidden files are not part of any set listing
                if !name.starts_with('.') {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();
        names
    }

    /// Turn a selection into the ordered list of paths to read.
    ///
    /// Explicit names must be plain file names; anything that would escape
    /// the source directory is dropped.
    pub fn resolve(&self, selection: &Selection) -> Vec<PathBuf> {
        match selection {
            Selection::All => self
                .list_sources()
                .into_iter()
                .map(|name| self.source_dir.join(name))
                .collect(),
            Selection::Files(names) => names
                .iter()
                .filter(|name| {
                    let plain = is_plain_file_name(name);
                    if !plain {
                        warn!(name = %name, "ignoring set name that is not a plain file name");
                    }
                    plain
                })
                .map(|name| self.source_dir.join(name))
                .collect(),
        }
    }

    /// Load, deduplicate and shuffle the words of a selection.
    pub fn load(&self, selection: &Selection) -> Vec<WordEntry> {
        self.load_with_rng(selection, &mut rand::rng())
    }

    /// Seeded form of [`WordLoader::load`]; the shuffle draws from `rng`.
    pub fn load_with_rng<R: Rng + ?Sized>(
        &self,
        selection: &Selection,
        rng: &mut R,
    ) -> Vec<WordEntry> {
        let mut words = Vec::new();
        let mut seen = HashSet::new();

        for path in self.resolve(selection) {
            if !path.exists() {
                debug!(path = %path.display(), "skipping missing set file");
                continue;
            }

            if let Err(e) = read_source_file(&path, &mut seen, &mut words) {
                warn!(path = %path.display(), error = %format!("{e:#}"), "skipping unreadable set file");
            }
        }

        words.shuffle(rng);
        info!(count = words.len(), "loaded words");
        words
    }
}

/// Append the new words of one CSV file, skipping its header row.
fn read_source_file(
    path: &Path,
    seen: &mut HashSet<String>,
    words: &mut Vec<WordEntry>,
) -> Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open set file: {}", path.display()))?;

    for (index, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!(path = %path.display(), row = index + 1, error = %e, "skipping malformed row");
                continue;
            }
        };

        let Some(entry) = parse_row(&record) else {
            continue;
        };

        if seen.insert(entry.word.clone()) {
            words.push(entry);
        }
    }

    Ok(())
}

/// First cell is the word, the remaining non-empty cells form the meaning.
fn parse_row(record: &csv::StringRecord) -> Option<WordEntry> {
    let word = record.get(0)?.trim();
    if word.is_empty() {
        return None;
    }

    let meaning = record
        .iter()
        .skip(1)
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    Some(WordEntry {
        word: word.to_string(),
        meaning,
    })
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}
