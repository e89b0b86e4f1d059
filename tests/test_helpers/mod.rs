//! Scoped environment overrides for client configuration tests.

use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use taskdesk::config::{BASE_URL_ENV, TIMEOUT_ENV};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Restores the client configuration variables when dropped.
pub struct ClientEnvGuard {
    previous: Vec<(&'static str, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl ClientEnvGuard {
    /// Applies `base_url` and `timeout`, unsetting either when `None`.
    pub fn apply(base_url: Option<&str>, timeout: Option<&str>) -> Self {
        let lock = ENV_MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let changes = [(BASE_URL_ENV, base_url), (TIMEOUT_ENV, timeout)];
        let previous = changes
            .iter()
            .map(|(key, value)| {
                let saved = env::var_os(key);
                write_var(key, value.map(OsString::from));
                (*key, saved)
            })
            .collect();

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for ClientEnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            write_var(key, value);
        }
    }
}

fn write_var(key: &str, value: Option<OsString>) {
    unsafe {
        // SAFETY: the global mutex serializes environment mutations in tests.
        match value {
            Some(new_value) => env::set_var(key, new_value),
            None => env::remove_var(key),
        }
    }
}
