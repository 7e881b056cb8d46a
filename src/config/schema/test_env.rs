use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Process environment owned by a single test.
///
/// Holds `ENV_LOCK` while alive, so env-reading tests run one at a time.
/// Every tracked variable is restored to its original value on drop.
pub(super) struct ScopedEnv {
    saved: Vec<(&'static str, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    /// Take the lock and unset `keys`.
    pub(super) fn cleared(keys: impl IntoIterator<Item = &'static str>) -> Self {
        let mut env = Self {
            saved: Vec::new(),
            _lock: ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner),
        };
        for key in keys {
            env.track(key);
            // SAFETY: ENV_LOCK is held, no other test touches the environment.
            unsafe { std::env::remove_var(key) };
        }
        env
    }

    pub(super) fn set(&mut self, key: &'static str, value: &str) -> &mut Self {
        self.track(key);
        // SAFETY: as in `cleared`.
        unsafe { std::env::set_var(key, value) };
        self
    }

    fn track(&mut self, key: &'static str) {
        if !self.saved.iter().any(|(saved, _)| *saved == key) {
            self.saved.push((key, std::env::var_os(key)));
        }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, original) in self.saved.drain(..) {
            // SAFETY: the lock guard is a field and is released after this runs.
            unsafe {
                match original {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
