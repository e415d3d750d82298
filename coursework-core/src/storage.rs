//! Durable key-value storage boundary.
//!
//! The task store is the only client. `get` on an unknown key is `Ok(None)`,
//! never an error; `set` fully overwrites whatever the key held before.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }
}

/// In-memory storage. Nothing survives the process; used for tests and
/// ephemeral sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// File-backed storage: one `<key>.json` file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default location under the user's home directory.
    pub fn in_home() -> Result<Self> {
        let home = std::env::var("HOME").context("HOME is not set")?;
        Ok(Self::new(PathBuf::from(home).join(".coursework")))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let p = self.key_path(key);
        if !p.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&p).with_context(|| format!("read {}", p.display()))?;
        Ok(Some(bytes))
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir).with_context(|| format!("create {}", self.dir.display()))?;
        let p = self.key_path(key);
        fs::write(&p, value).with_context(|| format!("write {}", p.display()))?;
        Ok(())
    }
}
