//! Liveness flag for asynchronous completions. A page creates one guard when
//! it mounts, hands clones to every spawned request, and calls `teardown` when
//! it unmounts; completions that arrive afterwards must be dropped.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

#[derive(Clone, Debug)]
pub struct MountGuard {
    live: Arc<AtomicBool>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub fn teardown(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Runs `apply` only while the owner is still mounted.
    pub fn run<T>(&self, apply: impl FnOnce() -> T) -> Option<T> {
        self.is_live().then(apply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{flows::login::complete_login, types::AuthResponse, SessionStore, User};

    #[test]
    fn completions_after_teardown_are_dropped() {
        let guard = MountGuard::new();
        let handle = guard.clone();

        assert_eq!(handle.run(|| 1), Some(1));

        guard.teardown();
        assert!(!handle.is_live());
        let mut applied = false;
        assert_eq!(handle.run(|| applied = true), None);
        assert!(!applied);
    }

    #[test]
    fn late_login_result_does_not_sign_in() {
        let guard = MountGuard::new();
        let mut store = SessionStore::new();
        let response = AuthResponse {
            token: "jwt-1".to_string(),
            user: User {
                id: "u1".to_string(),
                email: "ada@example.com".to_string(),
                ..User::default()
            },
        };

        guard.teardown();
        let route = guard.run(|| complete_login(&mut store, response));

        assert_eq!(route, None);
        assert!(!store.is_authenticated());
    }
}
