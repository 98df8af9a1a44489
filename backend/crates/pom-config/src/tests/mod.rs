
use crate::{CONFIG_DIR_ENV, CONFIG_FILENAME, Config};

use std::env;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Every variable `Config::load` reads
const POM_ENV_VARS: [&str; 9] = [
    CONFIG_DIR_ENV,
    "POM_SERVER_HOST",
    "POM_SERVER_PORT",
    "POM_DATABASE_PATH",
    "POM_DATABASE_MAX_CONNECTIONS",
    "POM_DATABASE_BUSY_TIMEOUT_SECS",
    "POM_LOG_LEVEL",
    "POM_LOG_COLORED",
    "POM_LOG_FILE",
];

/// A throwaway config directory with a clean `POM_*` environment.
///
/// Every `POM_*` variable is snapshotted on creation and restored on drop,
/// so tests see neither the developer's shell nor each other. Tests using
/// it must be `#[serial]`.
pub(crate) struct ConfigHome {
    _temp: TempDir,
    dir: PathBuf,
    saved: Vec<(&'static str, Option<String>)>,
}

impl ConfigHome {
    pub(crate) fn new() -> Self {
        Self::nested("")
    }

    /// Config dir at `relative` under the temp root; it need not exist yet.
    pub(crate) fn nested(relative: &str) -> Self {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(relative);
        let saved = POM_ENV_VARS
            .iter()
            .map(|key| (*key, env::var(key).ok()))
            .collect();

        unsafe {
            for key in POM_ENV_VARS {
                env::remove_var(key);
            }
            env::set_var(CONFIG_DIR_ENV, &dir);
        }

        Self {
            _temp: temp,
            dir,
            saved,
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.dir
    }

    pub(crate) fn set_env(&self, key: &'static str, value: &str) {
        assert!(POM_ENV_VARS.contains(&key), "{key} is not restored on drop");
        unsafe { env::set_var(key, value) }
    }

    pub(crate) fn write_toml(&self, contents: &str) {
        std::fs::create_dir_all(&self.dir).unwrap();
        std::fs::write(self.dir.join(CONFIG_FILENAME), contents).unwrap();
    }

    pub(crate) fn load(&self) -> Config {
        Config::load().unwrap()
    }

    /// Load, validate, and report which setting (if any) was rejected.
    pub(crate) fn rejected_key(&self) -> Option<&'static str> {
        self.load().validate().err().and_then(|e| e.key())
    }
}

impl Drop for ConfigHome {
    fn drop(&mut self) {
        unsafe {
            for (key, value) in &self.saved {
                match value {
                    Some(val) => env::set_var(key, val),
                    None => env::remove_var(key),
                }
            }
        }
    }
}
