//! In-crate test helpers that need the crate's own types.

use std::{cell::RefCell, rc::Rc};

use ngo_connect_test_utils::prelude::*;

use crate::{
    config::ClientConfig,
    error::StorageError,
    http::{ApiClient, ReqwestTransport},
    model::user::{Role, Session, SessionUser},
    nav::Redirect,
    session::{KeyValueStore, MemoryStore, SessionStore},
};

/// Session as written by a successful login for `role`.
pub fn session_for(role: Role) -> Session {
    let (organization_name, ngo_id) = match role {
        Role::Ngo => (Some(TEST_ORGANIZATION.to_string()), Some(TEST_NGO_ID)),
        _ => (None, None),
    };

    Session {
        token: TEST_TOKEN.to_string(),
        refresh_token: Some(TEST_REFRESH_TOKEN.to_string()),
        user: SessionUser {
            id: Some(TEST_USER_ID),
            email: TEST_EMAIL.to_string(),
            name: TEST_NAME.to_string(),
            role,
            organization_name,
            ngo_id,
        },
    }
}

/// Memory store whose writes to one key always fail.
#[derive(Clone)]
pub struct FailingStore {
    inner: MemoryStore,
    failing_key: &'static str,
}

impl FailingStore {
    pub fn failing_on(key: &'static str) -> Self {
        Self {
            inner: MemoryStore::new(),
            failing_key: key,
        }
    }

    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.failing_key {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

/// Redirect sink recording every navigation instead of performing it.
#[derive(Clone, Default)]
pub struct RecordingRedirect {
    current: Rc<RefCell<String>>,
    visited: Rc<RefCell<Vec<String>>>,
}

impl RecordingRedirect {
    pub fn at(path: &str) -> Self {
        Self {
            current: Rc::new(RefCell::new(path.to_string())),
            visited: Rc::default(),
        }
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Redirect for RecordingRedirect {
    fn current_path(&self) -> String {
        self.current.borrow().clone()
    }

    fn redirect(&self, path: &str) {
        *self.current.borrow_mut() = path.to_string();
        self.visited.borrow_mut().push(path.to_string());
    }
}

pub type TestClient = ApiClient<ReqwestTransport, MemoryStore, RecordingRedirect>;

/// API client pointed at the mock backend of `setup`, with the session held in `store`.
pub fn test_client(
    setup: &TestSetup,
    store: MemoryStore,
    redirect: RecordingRedirect,
) -> TestClient {
    client_for_url(&setup.url(), store, redirect)
}

/// API client for an arbitrary base URL, e.g. one nothing listens on.
pub fn client_for_url(url: &str, store: MemoryStore, redirect: RecordingRedirect) -> TestClient {
    client_with_config(&ClientConfig::new(url), store, redirect)
}

/// API client using `config` as is, e.g. with a shortened timeout.
pub fn client_with_config(
    config: &ClientConfig,
    store: MemoryStore,
    redirect: RecordingRedirect,
) -> TestClient {
    let transport = ReqwestTransport::new(config).unwrap();
    ApiClient::new(config, transport, SessionStore::new(store), redirect)
}

/// Memory store already holding the login session for `role`.
pub fn store_with_session(role: Role) -> MemoryStore {
    let store = MemoryStore::new();
    SessionStore::new(store.clone())
        .establish(&session_for(role))
        .unwrap();
    store
}
