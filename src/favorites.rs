//! Favorites
//!
//! Per-movie favorite flags kept on the local device, keyed `fav_<id>`.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use thiserror::Error;
use tracing::debug;

use crate::models::MovieId;

/// Errors raised by favorites storage.
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// Reading or writing the file failed.
    #[error("favorites file could not be accessed: {0}")]
    Io(#[from] io::Error),

    /// The file holds something other than a flag map.
    #[error("favorites file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Another thread panicked while holding the store.
    #[error("favorites store lock was poisoned")]
    Poisoned,
}

/// Storage key for a movie's flag.
pub fn favorite_key(id: MovieId) -> String {
    format!("fav_{id}")
}

/// Boolean flag storage. Unknown movies are not favorites.
pub trait FavoritesStore: Send + Sync {
    /// Whether `id` is flagged.
    fn is_favorite(&self, id: MovieId) -> Result<bool, FavoritesError>;

    /// Store the flag for `id`.
    fn set_favorite(&self, id: MovieId, favorite: bool) -> Result<(), FavoritesError>;

    /// Flip the flag and return the new value.
    fn toggle(&self, id: MovieId) -> Result<bool, FavoritesError> {
        let favorite = !self.is_favorite(id)?;

        self.set_favorite(id, favorite)?;

        Ok(favorite)
    }
}

type Flags = BTreeMap<String, bool>;

/// Flags held in a flat JSON object on disk.
///
/// The whole file is read on every lookup and rewritten on every change.
#[derive(Debug)]
pub struct JsonFileFavorites {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileFavorites {
    /// Store flags in `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_flags(&self) -> Result<Flags, FavoritesError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(Flags::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Flags::new()),
            Err(error) => Err(error.into()),
        }
    }
}

impl FavoritesStore for JsonFileFavorites {
    fn is_favorite(&self, id: MovieId) -> Result<bool, FavoritesError> {
        let _guard = self.lock.lock().map_err(|_poisoned| FavoritesError::Poisoned)?;

        Ok(self
            .read_flags()?
            .get(&favorite_key(id))
            .copied()
            .unwrap_or(false))
    }

    fn set_favorite(&self, id: MovieId, favorite: bool) -> Result<(), FavoritesError> {
        let _guard = self.lock.lock().map_err(|_poisoned| FavoritesError::Poisoned)?;

        let mut flags = self.read_flags()?;
        flags.insert(favorite_key(id), favorite);

        fs::write(&self.path, serde_json::to_vec_pretty(&flags)?)?;

        debug!(%id, favorite, path = %self.path.display(), "favorite flag written");

        Ok(())
    }
}

/// Flags that live only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryFavorites {
    flags: Mutex<Flags>,
}

impl FavoritesStore for MemoryFavorites {
    fn is_favorite(&self, id: MovieId) -> Result<bool, FavoritesError> {
        let flags = self.flags.lock().map_err(|_poisoned| FavoritesError::Poisoned)?;

        Ok(flags.get(&favorite_key(id)).copied().unwrap_or(false))
    }

    fn set_favorite(&self, id: MovieId, favorite: bool) -> Result<(), FavoritesError> {
        self.flags
            .lock()
            .map_err(|_poisoned| FavoritesError::Poisoned)?
            .insert(favorite_key(id), favorite);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn key_matches_device_storage_layout() {
        assert_eq!(favorite_key(MovieId::new(12)), "fav_12");
    }

    #[test]
    fn memory_store_toggles() -> TestResult {
        let store = MemoryFavorites::default();
        let id = MovieId::new(4);

        assert!(!store.is_favorite(id)?);
        assert!(store.toggle(id)?);
        assert!(store.is_favorite(id)?);
        assert!(!store.toggle(id)?);

        Ok(())
    }

    #[test]
    fn missing_file_reads_as_no_favorites() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = JsonFileFavorites::new(dir.path().join("favorites.json"));

        assert!(!store.is_favorite(MovieId::new(1))?);

        Ok(())
    }

    #[test]
    fn file_store_persists_across_instances() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("favorites.json");

        JsonFileFavorites::new(&path).set_favorite(MovieId::new(7), true)?;

        let reopened = JsonFileFavorites::new(&path);

        assert!(reopened.is_favorite(MovieId::new(7))?);
        assert!(!reopened.is_favorite(MovieId::new(8))?);

        let raw: Flags = serde_json::from_slice(&fs::read(&path)?)?;
        assert_eq!(raw.get("fav_7"), Some(&true));

        Ok(())
    }

    #[test]
    fn corrupt_file_is_reported() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("favorites.json");
        fs::write(&path, "not json")?;

        let result = JsonFileFavorites::new(&path).is_favorite(MovieId::new(1));

        assert!(matches!(result, Err(FavoritesError::Json(_))));

        Ok(())
    }
}
