//! Storage backends
//!
//! A backend only knows how to load and save the whole [`Dataset`]. The
//! in-memory working copy lives in [`super::connection::Store`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, info};
use crate::models::{AttendanceRecord, Course, Event, ForumPost, Schedule, StoredUser};
use crate::utils::errors::{CampusError, Result};

/// Every collection the application keeps
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Vec<StoredUser>,
    pub courses: Vec<Course>,
    pub sessions: Vec<String>,
    pub schedules: Vec<Schedule>,
    pub events: Vec<Event>,
    pub attendance: Vec<AttendanceRecord>,
    pub forum: Vec<ForumPost>,
}

/// Load/save contract for a persistence layer
pub trait StorageBackend: Send + Sync + fmt::Debug {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn load(&self) -> Result<Dataset>;

    fn save(&self, data: &Dataset) -> Result<()>;

    fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

/// Keeps the last saved snapshot in memory; nothing outlives the process
#[derive(Debug, Default)]
pub struct MemoryBackend {
    snapshot: Mutex<Dataset>,
}

impl MemoryBackend {
    pub fn new(seed: Dataset) -> Self {
        Self {
            snapshot: Mutex::new(seed),
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn load(&self) -> Result<Dataset> {
        let snapshot = self
            .snapshot
            .lock()
            .map_err(|_| CampusError::Storage("memory snapshot lock poisoned".to_string()))?;
        Ok(snapshot.clone())
    }

    fn save(&self, data: &Dataset) -> Result<()> {
        let mut snapshot = self
            .snapshot
            .lock()
            .map_err(|_| CampusError::Storage("memory snapshot lock poisoned".to_string()))?;
        *snapshot = data.clone();
        Ok(())
    }
}

/// One JSON file per collection, each wrapping its array under a single key:
/// `users.json` holds `{"users": [...]}`.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    dir: PathBuf,
}

impl JsonFileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let path = self.dir.join(format!("{}.json", key));
        if !path.exists() {
            debug!(path = %path.display(), "Collection file missing, starting empty");
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&path)?;
        let mut document: serde_json::Value = serde_json::from_str(&raw)?;
        match document.get_mut(key).map(serde_json::Value::take) {
            Some(items) => Ok(serde_json::from_value(items)?),
            None => Err(CampusError::Storage(format!(
                "{} has no top-level \"{}\" array",
                path.display(),
                key
            ))),
        }
    }

    fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let mut document = serde_json::Map::new();
        document.insert(key.to_string(), serde_json::to_value(items)?);

        let path = self.dir.join(format!("{}.json", key));
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, serde_json::to_string_pretty(&document)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl StorageBackend for JsonFileBackend {
    fn name(&self) -> &'static str {
        "json"
    }

    fn load(&self) -> Result<Dataset> {
        let data = Dataset {
            users: self.read_collection("users")?,
            courses: self.read_collection("courses")?,
            sessions: self.read_collection("sessions")?,
            schedules: self.read_collection("schedules")?,
            events: self.read_collection("events")?,
            attendance: self.read_collection("attendance")?,
            forum: self.read_collection("forum")?,
        };
        info!(
            dir = %self.dir.display(),
            users = data.users.len(),
            schedules = data.schedules.len(),
            events = data.events.len(),
            "Loaded JSON data"
        );
        Ok(data)
    }

    fn save(&self, data: &Dataset) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        self.write_collection("users", &data.users)?;
        self.write_collection("courses", &data.courses)?;
        self.write_collection("sessions", &data.sessions)?;
        self.write_collection("schedules", &data.schedules)?;
        self.write_collection("events", &data.events)?;
        self.write_collection("attendance", &data.attendance)?;
        self.write_collection("forum", &data.forum)?;
        Ok(())
    }

    fn health_check(&self) -> Result<()> {
        if self.dir.is_dir() {
            Ok(())
        } else {
            Err(CampusError::Storage(format!(
                "data directory {} does not exist",
                self.dir.display()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, User};

    fn sample() -> Dataset {
        Dataset {
            users: vec![StoredUser {
                user: User {
                    id: "1".to_string(),
                    email: "admin@school.edu".to_string(),
                    is_suspended: false,
                    role: Role::Admin,
                },
                password: "admin@school.edu".to_string(),
            }],
            sessions: vec!["2020-21".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_memory_backend_keeps_last_save() {
        let backend = MemoryBackend::default();
        assert!(backend.load().unwrap().users.is_empty());
        backend.save(&sample()).unwrap();
        assert_eq!(backend.load().unwrap().users.len(), 1);
    }

    #[test]
    fn test_json_backend_roundtrip_and_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path());

        let empty = backend.load().unwrap();
        assert!(empty.users.is_empty() && empty.forum.is_empty());

        backend.save(&sample()).unwrap();
        let raw = std::fs::read_to_string(dir.path().join("users.json")).unwrap();
        assert!(raw.contains("\"users\""));
        assert!(raw.contains("\"role\": \"admin\""));

        let loaded = backend.load().unwrap();
        assert_eq!(loaded.users[0].user.email, "admin@school.edu");
        assert_eq!(loaded.sessions, vec!["2020-21"]);
    }

    #[test]
    fn test_json_backend_rejects_wrong_wrapper() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("events.json"), r#"{"items": []}"#).unwrap();
        let backend = JsonFileBackend::new(dir.path());
        assert!(matches!(backend.load(), Err(CampusError::Storage(_))));
    }
}
