#[cfg(test)]
use std::{cell::RefCell, collections::HashMap};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{calculator::state::Calculator, prelude::*};

/// Key-value blob storage.
pub trait Storage {
    fn read(&self, key: &str) -> Result<Option<String>>;

    fn write(&self, key: &str, blob: &str) -> Result;

    fn remove(&self, key: &str) -> Result;
}

/// Stores every key in its own file under the root directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    #[instrument(skip_all, fields(key = key))]
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key);
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => {
                Err(error).with_context(|| format!("failed to read `{}`", path.display()))
            }
        }
    }

    #[instrument(skip_all, fields(key = key))]
    fn write(&self, key: &str, blob: &str) -> Result {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create `{}`", self.root.display()))?;
        let path = self.path(key);
        fs::write(&path, blob).with_context(|| format!("failed to write `{}`", path.display()))
    }

    #[instrument(skip_all, fields(key = key))]
    fn remove(&self, key: &str) -> Result {
        let path = self.path(key);
        match fs::remove_file(&path) {
            Err(error) if error.kind() != ErrorKind::NotFound => {
                Err(error).with_context(|| format!("failed to remove `{}`", path.display()))
            }
            _ => Ok(()),
        }
    }
}

impl AsRef<Path> for FileStorage {
    fn as_ref(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage(RefCell<HashMap<String, String>>);

#[cfg(test)]
impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.0.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, blob: &str) -> Result {
        self.0.borrow_mut().insert(key.to_owned(), blob.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result {
        self.0.borrow_mut().remove(key);
        Ok(())
    }
}

/// Persists the calculator's devices through a [`Storage`].
pub struct DeviceStore<S> {
    storage: S,
}

impl<S: Storage> DeviceStore<S> {
    pub const KEY: &'static str = "electricity-devices";

    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the devices, seeding the defaults when nothing is stored yet.
    #[instrument(skip_all)]
    pub fn load(&self) -> Result<Calculator> {
        let stored = match self.storage.read(Self::KEY)? {
            Some(blob) => serde_json::from_str::<Calculator>(&blob)
                .context("failed to deserialize the stored devices")?,
            None => Calculator::default(),
        };
        if stored.is_empty() {
            info!("no stored devices, seeding the defaults");
            let defaults = Calculator::defaults();
            self.save(&defaults)?;
            Ok(defaults)
        } else {
            debug!(n_devices = stored.devices().len(), "loaded");
            Ok(stored)
        }
    }

    #[instrument(skip_all, fields(n_devices = calculator.devices().len()))]
    pub fn save(&self, calculator: &Calculator) -> Result {
        self.storage.write(Self::KEY, &serde_json::to_string(calculator)?)
    }

    /// Drop whatever is stored and start over with the defaults.
    #[instrument(skip_all)]
    pub fn reset(&self) -> Result<Calculator> {
        self.storage.remove(Self::KEY)?;
        self.load()
    }
}
