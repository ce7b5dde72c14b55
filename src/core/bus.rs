// File-backed coordination bus
//
// The single place where the publish / read-latest / append-event contract is
// enforced. Producers never hand-roll the temp-rename-chmod sequence and
// consumers get staleness as a first-class property instead of assuming
// freshness.

use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, SystemTime};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::atomic;
use crate::core::layout::StateDir;
use crate::error::{HubError, HubResult};

/// A record read back from the bus together with its age, derived from the
/// file's modification time. Consumers decide what "too old" means.
#[derive(Debug, Clone)]
pub struct Stamped<T> {
    pub record: T,
    pub age: Duration,
}

#[derive(Debug, Clone)]
pub struct HubBus {
    dir: StateDir,
}

impl HubBus {
    pub fn new(dir: StateDir) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &StateDir {
        &self.dir
    }

    /// Atomically publish a JSON record: previous content or complete new
    /// content, never a truncated intermediate, owner-only afterwards.
    pub fn publish<T: Serialize>(&self, path: &Path, record: &T) -> HubResult<()> {
        let mut buf = serde_json::to_vec(record)
            .map_err(|e| HubError::MalformedRecord(format!("{}: {}", path.display(), e)))?;
        buf.push(b'\n');
        atomic::write_atomic(path, &buf)
    }

    /// Atomically publish a plain-text value (signal integers, price ladders,
    /// timestamps). Same visibility guarantee as `publish`.
    pub fn publish_text(&self, path: &Path, text: &str) -> HubResult<()> {
        atomic::write_atomic(path, text.as_bytes())
    }

    /// Read the latest generation of a JSON record. Absence is `Ok(None)`;
    /// unparsable content is an error, never a half-populated record.
    pub fn read_latest<T: DeserializeOwned>(&self, path: &Path) -> HubResult<Option<Stamped<T>>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(HubError::FileRead(format!("{}: {}", path.display(), e)));
            }
        };

        let record = serde_json::from_str(&content)
            .map_err(|e| HubError::MalformedRecord(format!("{}: {}", path.display(), e)))?;

        Ok(Some(Stamped {
            record,
            age: file_age(path),
        }))
    }

    /// Read a plain-text value. Absence is `Ok(None)`.
    pub fn read_text(&self, path: &Path) -> HubResult<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HubError::FileRead(format!("{}: {}", path.display(), e))),
        }
    }

    /// Append one record to an append-only event log. Prior entries are never
    /// rewritten or truncated.
    pub fn append_event<T: Serialize>(&self, path: &Path, record: &T) -> HubResult<()> {
        let line = serde_json::to_string(record)
            .map_err(|e| HubError::MalformedRecord(format!("{}: {}", path.display(), e)))?;
        atomic::append_line(path, &line)
    }
}

/// Age of a file since its last modification. A clock skew or a missing
/// mtime degrades to zero rather than failing the read.
fn file_age(path: &Path) -> Duration {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|mtime| SystemTime::now().duration_since(mtime).ok())
        .unwrap_or_default()
}
