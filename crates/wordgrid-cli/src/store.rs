use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::util::{self, Output};

/// Namespace key under which the high score is stored.
pub const HIGH_SCORE_KEY: &str = "wordGridHighScore_v2";

/// Integer values keyed by namespace, persisted as a JSON object.
///
/// A missing file reads as an empty store.
#[derive(Debug)]
pub struct HighScoreStore {
    path: PathBuf,
    entries: BTreeMap<String, u32>,
}

impl HighScoreStore {
    pub fn open<P>(path: P) -> anyhow::Result<Self>
    where
        P: Into<PathBuf>,
    {
        let path = path.into();
        let exists = path
            .try_exists()
            .with_context(|| format!("Failed to access high score file: {}", path.display()))?;
        let entries = if exists {
            util::read_json_file("high score", &path)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> u32 {
        self.entries.get(key).copied().unwrap_or(0)
    }

    pub fn high_score(&self) -> u32 {
        self.get(HIGH_SCORE_KEY)
    }

    /// Stores `score` as the high score and writes the file.
    pub fn save_high_score(&mut self, score: u32) -> anyhow::Result<()> {
        self.entries.insert(HIGH_SCORE_KEY.to_owned(), score);
        Output::save_json(&self.entries, Some(self.path.clone()))?;
        tracing::info!(score, path = %self.path.display(), "high score saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_missing_file_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::open(dir.path().join("high_score.json")).unwrap();
        assert_eq!(store.high_score(), 0);
    }

    #[test]
    fn test_missing_key_is_zero() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), r#"{"otherGame": 900}"#).unwrap();
        let store = HighScoreStore::open(file.path()).unwrap();
        assert_eq!(store.high_score(), 0);
        assert_eq!(store.get("otherGame"), 900);
    }

    #[test]
    fn test_save_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("high_score.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"otherGame": 900, "wordGridHighScore_v2": 100}"#).unwrap();

        let mut store = HighScoreStore::open(&path).unwrap();
        assert_eq!(store.high_score(), 100);
        store.save_high_score(450).unwrap();

        let reopened = HighScoreStore::open(&path).unwrap();
        assert_eq!(reopened.high_score(), 450);
        assert_eq!(reopened.get("otherGame"), 900);
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "not json").unwrap();
        assert!(HighScoreStore::open(file.path()).is_err());
    }
}
