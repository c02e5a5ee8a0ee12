use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::CaseResult;

/// Directory that exported case reports are written to.
#[derive(Clone, Debug)]
pub struct ReportStore {
    base_path: PathBuf,
}

impl ReportStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> CaseResult<Self> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// `case_{type}_{number}_{year}.{extension}`, safe to use as a single path component.
    pub fn file_name(case_type: &str, case_number: &str, case_year: &str, extension: &str) -> String {
        format!(
            "case_{}_{}_{}.{}",
            sanitize(case_type),
            sanitize(case_number),
            sanitize(case_year),
            extension
        )
    }

    /// Writes `contents` under `file_name`, replacing an earlier export of the same case.
    pub fn save(&self, file_name: &str, contents: &[u8]) -> CaseResult<PathBuf> {
        let path = self.base_path.join(file_name);
        fs::write(&path, contents)?;
        debug!("Wrote report {} ({} bytes)", path.display(), contents.len());
        Ok(path)
    }
}

fn sanitize(component: &str) -> String {
    let cleaned: String = component
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches('.').to_string();
    if cleaned.is_empty() {
        "na".to_string()
    } else {
        cleaned
    }
}
