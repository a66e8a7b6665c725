use std::fmt;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::Result;

/// Header row written once at the top of every result log.
pub const LOG_HEADER: [&str; 2] = ["Word", "Meaning"];

/// Outcome recorded for a presented word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Right,
    Wrong,
}

impl Verdict {
    /// `"right"` is a right answer; any other status counts as wrong.
    pub fn from_status(status: &str) -> Self {
        if status == "right" {
            Verdict::Right
        } else {
            Verdict::Wrong
        }
    }

    /// Name of an existing log: exactly `"right"` or `"wrong"`.
    pub fn parse_log(name: &str) -> Option<Self> {
        match name {
            "right" => Some(Verdict::Right),
            "wrong" => Some(Verdict::Wrong),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Right => "right",
            Verdict::Wrong => "wrong",
        }
    }

    fn log_file_name(&self) -> String {
        format!("{}.csv", self.as_str())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a result log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    pub word: String,
    pub meaning: String,
}

/// An append-only two column CSV log inside a session directory.
#[derive(Debug, Clone)]
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    pub fn for_verdict(session_dir: &Path, verdict: Verdict) -> Self {
        Self {
            path: session_dir.join(verdict.log_file_name()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row, creating the log with its header on first use.
    ///
    /// Nothing is validated or deduplicated: recording the same word twice
    /// yields two rows.
    pub fn append(&self, word: &str, meaning: &str) -> Result<()> {
        let write_header = !self.path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);

        if write_header {
            writer.write_record(LOG_HEADER)?;
        }
        writer.write_record([word, meaning])?;
        writer.flush()?;

        debug!(path = %self.path.display(), word, "appended result");
        Ok(())
    }

    /// Every row after the header, in append order.
    ///
    /// A log that was never written reads as empty.
    pub fn read_all(&self) -> Result<Vec<ResultRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            if row.is_empty() {
                continue;
            }
            records.push(ResultRecord {
                word: row.get(0).unwrap_or_default().to_string(),
                meaning: row.get(1).unwrap_or_default().to_string(),
            });
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_verdict_from_status() {
        assert_eq!(Verdict::from_status("right"), Verdict::Right);
        assert_eq!(Verdict::from_status("wrong"), Verdict::Wrong);
        assert_eq!(Verdict::from_status("Right"), Verdict::Wrong);
        assert_eq!(Verdict::from_status(""), Verdict::Wrong);
        assert_eq!(Verdict::from_status("../../etc/passwd"), Verdict::Wrong);
    }

    #[test]
    fn test_verdict_parse_log_is_strict() {
        assert_eq!(Verdict::parse_log("right"), Some(Verdict::Right));
        assert_eq!(Verdict::parse_log("wrong"), Some(Verdict::Wrong));
        for bad in ["Right", "right.csv", "bogus", ""] {
            assert_eq!(Verdict::parse_log(bad), None, "{bad:?} should not name a log");
        }
    }

    #[test]
    fn test_log_file_names() {
        let dir = Path::new("/tmp/session_x");
        assert_eq!(
            ResultLog::for_verdict(dir, Verdict::Right).path(),
            dir.join("right.csv")
        );
        assert_eq!(
            ResultLog::for_verdict(dir, Verdict::Wrong).path(),
            dir.join("wrong.csv")
        );
    }

    #[test]
    fn test_first_append_writes_header() {
        let dir = TempDir::new().unwrap();
        let log = ResultLog::for_verdict(dir.path(), Verdict::Right);

        log.append("xyz", "m").unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents, "Word,Meaning\r\nxyz,m\r\n");
    }

    #[test]
    fn test_header_written_once() {
        let dir = TempDir::new().unwrap();
        let log = ResultLog::for_verdict(dir.path(), Verdict::Wrong);

        log.append("abate", "to lessen").unwrap();
        log.append("abate", "to lessen").unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["Word,Meaning", "abate,to lessen", "abate,to lessen"]);
    }

    #[test]
    fn test_read_all_in_append_order() {
        let dir = TempDir::new().unwrap();
        let log = ResultLog::for_verdict(dir.path(), Verdict::Right);

        for i in 0..5 {
            log.append(&format!("word{i}"), &format!("meaning, with comma {i}"))
                .unwrap();
        }

        let records = log.read_all().unwrap();
        assert_eq!(records.len(), 5);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.word, format!("word{i}"));
            assert_eq!(record.meaning, format!("meaning, with comma {i}"));
        }
    }

    #[test]
    fn test_read_missing_log_is_empty() {
        let dir = TempDir::new().unwrap();
        let log = ResultLog::for_verdict(dir.path(), Verdict::Right);
        assert!(log.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_read_tolerates_short_rows() {
        let dir = TempDir::new().unwrap();
        let log = ResultLog::for_verdict(dir.path(), Verdict::Wrong);
        fs::write(log.path(), "Word,Meaning\nlonely\nfull,row\n").unwrap();

        let records = log.read_all().unwrap();
        assert_eq!(
            records,
            vec![
                ResultRecord {
                    word: "lonely".to_string(),
                    meaning: String::new(),
                },
                ResultRecord {
                    word: "full".to_string(),
                    meaning: "row".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_word_is_recorded() {
        let dir = TempDir::new().unwrap();
        let log = ResultLog::for_verdict(dir.path(), Verdict::Right);

        log.append("", "").unwrap();
        log.append("next", "one").unwrap();

        let records = log.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].word, "");
        assert_eq!(records[1].word, "next");
    }
}
