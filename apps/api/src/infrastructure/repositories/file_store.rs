use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::repositories::KeyValueStore;
use crate::errors::{PrompterError, PrompterResult};

/// JSON-file implementation of KeyValueStore
///
/// The whole namespace lives in one JSON object on disk, one entry per key.
/// Writes go to a sibling temp file that is then renamed over the original.
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Creates a FileStore backed by `path`
    ///
    /// The file is created lazily on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> PrompterResult<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(PrompterError::PersistenceUnavailable(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(PrompterError::PersistenceUnavailable(format!(
                "{} does not hold a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(PrompterError::PersistenceUnavailable(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn write_all(&self, map: &Map<String, Value>) -> PrompterResult<()> {
        let contents = serde_json::to_string(map)?;
        let tmp_path = self.path.with_extension("json.tmp");

        fs::write(&tmp_path, contents)
            .and_then(|_| fs::rename(&tmp_path, &self.path))
            .map_err(|e| {
                PrompterError::PersistenceUnavailable(format!(
                    "Failed to write {}: {}",
                    self.path.display(),
                    e
                ))
            })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> PrompterResult<Option<Value>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: Value) -> PrompterResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| PrompterError::PersistenceUnavailable(e.to_string()))?;

        let mut map = self.read_all()?;
        map.insert(key.to_string(), value);
        self.write_all(&map)
    }
}
