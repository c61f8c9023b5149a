use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use dioxus_logger::tracing;

use crate::{
    error::StorageError,
    model::user::{Session, SessionUser},
    session::{
        KeyValueStore, NGO_PROFILE_KEY, REFRESH_TOKEN_KEY, TOKEN_KEY, USER_DONATIONS_KEY, USER_KEY,
    },
};

/// Kind of change published to session subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionChange {
    /// A new session was written by login.
    Established,
    /// Token and user were replaced after a token refresh.
    Refreshed,
    /// The session was removed (logout or irrecoverable 401).
    Cleared,
    /// Storage was changed outside this client, e.g. by another browser tab.
    External,
}

type Listener = Rc<dyn Fn(SessionChange)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Handle returned by [`SessionStore::subscribe`]; the listener is removed when it is dropped.
pub struct Subscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// Single point of access to the persisted session.
///
/// Clones share both the storage backend and the subscriber list, so the store can be handed to
/// the API client and to UI components alike.
#[derive(Clone)]
pub struct SessionStore<S> {
    storage: S,
    listeners: Rc<RefCell<Listeners>>,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            listeners: Rc::new(RefCell::new(Listeners::default())),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads the current session.
    ///
    /// Returns `None` when the token or the user record is missing, when the user record cannot
    /// be parsed, or when storage cannot be read. Never writes.
    pub fn current(&self) -> Option<Session> {
        let token = self.token()?;
        let user = self.user()?;

        Some(Session {
            token,
            refresh_token: self.refresh_token(),
            user,
        })
    }

    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read(REFRESH_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    /// Parsed user record, without checking for a token.
    pub fn user(&self) -> Option<SessionUser> {
        let raw = self.read(USER_KEY)?;

        match serde_json::from_str::<SessionUser>(&raw) {
            Ok(user) => Some(user.sanitized()),
            Err(e) => {
                tracing::debug!("Ignoring malformed user record in session storage: {}", e);
                None
            }
        }
    }

    /// Persists a freshly authenticated session.
    ///
    /// The user record is written first and the token second; if any write fails every key
    /// written by this call is removed again, so a token never outlives a failed user write.
    pub fn establish(&self, session: &Session) -> Result<(), StorageError> {
        let user_json = serde_json::to_string(&session.user.clone().sanitized())?;

        let result = self
            .storage
            .set(USER_KEY, &user_json)
            .and_then(|_| self.storage.set(TOKEN_KEY, &session.token))
            .and_then(|_| match &session.refresh_token {
                Some(refresh_token) => self.storage.set(REFRESH_TOKEN_KEY, refresh_token),
                None => self.storage.remove(REFRESH_TOKEN_KEY),
            });

        if let Err(e) = result {
            tracing::error!("Failed to persist session, rolling back: {}", e);
            for key in [USER_KEY, TOKEN_KEY, REFRESH_TOKEN_KEY] {
                let _ = self.storage.remove(key);
            }
            return Err(e);
        }

        tracing::debug!(role = %session.user.role, "Session established");
        self.notify(SessionChange::Established);

        Ok(())
    }

    /// Replaces token and user in place after a successful token refresh.
    pub fn refresh(&self, token: &str, user: &SessionUser) -> Result<(), StorageError> {
        let user_json = serde_json::to_string(&user.clone().sanitized())?;

        self.storage.set(USER_KEY, &user_json)?;
        self.storage.set(TOKEN_KEY, token)?;

        tracing::debug!("Session token refreshed");
        self.notify(SessionChange::Refreshed);

        Ok(())
    }

    /// Removes the session and the caches tied to it.
    ///
    /// Every key is attempted even if an earlier removal fails; the first failure is returned.
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut first_error = None;

        for key in [
            TOKEN_KEY,
            REFRESH_TOKEN_KEY,
            USER_KEY,
            NGO_PROFILE_KEY,
            USER_DONATIONS_KEY,
        ] {
            if let Err(e) = self.storage.remove(key) {
                tracing::error!("Failed to remove {:?} from session storage: {}", key, e);
                first_error.get_or_insert(e);
            }
        }

        self.notify(SessionChange::Cleared);

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn cache_ngo_profile(&self, profile: &serde_json::Value) -> Result<(), StorageError> {
        self.storage
            .set(NGO_PROFILE_KEY, &serde_json::to_string(profile)?)
    }

    pub fn ngo_profile(&self) -> Option<serde_json::Value> {
        self.read(NGO_PROFILE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    /// Donations recorded from this browser, newest last.
    pub fn user_donations(&self) -> Vec<serde_json::Value> {
        self.read(USER_DONATIONS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Appends a donation to the local donation cache.
    pub fn remember_donation(&self, donation: &serde_json::Value) -> Result<(), StorageError> {
        let mut donations = self.user_donations();
        donations.push(donation.clone());
        self.storage
            .set(USER_DONATIONS_KEY, &serde_json::to_string(&donations)?)
    }

    /// Registers a listener called after every session change.
    pub fn subscribe(&self, listener: impl Fn(SessionChange) + 'static) -> Subscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Rc::new(listener)));

        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Publishes a change made to the underlying storage by someone else.
    pub fn notify_external(&self) {
        self.notify(SessionChange::External);
    }

    fn notify(&self, change: SessionChange) {
        // Listeners may subscribe or unsubscribe while being notified
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            listener(change);
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!("Failed to read {:?} from session storage: {}", key, e);
                None
            }
        }
    }
}
