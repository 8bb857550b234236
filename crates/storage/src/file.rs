use std::{
    collections::VecDeque,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use ironplan_app::{Settings, SettingsRepository, log};
use ironplan_domain::{ReadError, StorageError, WriteError};
use serde::{Serialize, de::DeserializeOwned};

const SETTINGS_FILE: &str = "settings.json";
const LOG_FILE: &str = "log.json";

/// Application data kept as JSON files in a single directory.
#[derive(Clone, Debug)]
pub struct Config {
    dir: PathBuf,
}

impl Config {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    #[must_use]
    pub fn log(&self) -> Log {
        Log {
            path: self.dir.join(LOG_FILE),
        }
    }
}

impl SettingsRepository for Config {
    async fn read_settings(&self) -> Result<Settings, ReadError> {
        Ok(read(&self.settings_path())?.unwrap_or_default())
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), WriteError> {
        write(&self.settings_path(), &settings)
    }
}

/// Most recent log entries, newest first.
#[derive(Clone, Debug)]
pub struct Log {
    path: PathBuf,
}

impl Log {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        read(&self.path)
            .map(Option::unwrap_or_default)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(log::CAPACITY);
        write(&self.path, &entries).map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

fn read<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ReadError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(
            serde_json::from_str(&content).map_err(|err| ReadError::Other(Box::new(err)))?,
        )),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(StorageError::Io(err).into()),
    }
}

fn write<T: Serialize>(path: &Path, value: &T) -> Result<(), WriteError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(StorageError::Io)?;
    }
    let content =
        serde_json::to_string_pretty(value).map_err(|err| WriteError::Other(Box::new(err)))?;
    std::fs::write(path, content).map_err(StorageError::Io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use ironplan_app::log::Repository as _;
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(message: &str) -> log::Entry {
        log::Entry {
            time: "Oct 19 08:00:00".into(),
            level: ::log::Level::Info,
            message: message.into(),
        }
    }

    #[test]
    fn test_read_settings_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(
            block_on(Config::new(dir.path()).read_settings()).unwrap(),
            Settings::default()
        );
    }

    #[test]
    fn test_write_settings() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().join("ironplan"));
        let settings = Settings {
            bodyweight: 92.0,
            goal: "strength".into(),
            equipment: vec!["barbell".into(), "bench".into()],
            ..Settings::default()
        };

        block_on(config.write_settings(settings.clone())).unwrap();

        assert!(config.settings_path().exists());
        assert_eq!(block_on(config.read_settings()).unwrap(), settings);
    }

    #[test]
    fn test_read_settings_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path());
        std::fs::write(config.settings_path(), "{ goal = strength }").unwrap();

        assert!(matches!(
            block_on(config.read_settings()),
            Err(ReadError::Other(_))
        ));
    }

    #[test]
    fn test_read_entries_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        assert!(Config::new(dir.path()).log().read_entries().unwrap().is_empty());
    }

    #[test]
    fn test_write_entry() {
        let dir = tempfile::tempdir().unwrap();
        let log = Log::new(dir.path().join(LOG_FILE));

        log.write_entry(entry("first")).unwrap();
        log.write_entry(entry("second")).unwrap();

        assert_eq!(
            log.read_entries().unwrap(),
            VecDeque::from([entry("second"), entry("first")])
        );
    }

    #[test]
    fn test_write_entry_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let log = Log::new(dir.path().join(LOG_FILE));

        for i in 0..=log::CAPACITY {
            log.write_entry(entry(&i.to_string())).unwrap();
        }

        let entries = log.read_entries().unwrap();
        assert_eq!(entries.len(), log::CAPACITY);
        assert_eq!(entries[0].message, log::CAPACITY.to_string());
        assert_eq!(entries[log::CAPACITY - 1].message, "1");
    }
}
