//! Session store for the signed-in administrator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session record is the only piece of client state shared across
//! components: the login flow writes it, the auth gate reads it on every
//! protected route check, the header shows it, and logout or any `401`
//! clears it. It is a render-time marker only; the real credential is the
//! server's session cookie.
//!
//! DESIGN
//! ======
//! The record is persisted as one serialized JSON blob under [`SESSION_KEY`],
//! so a reader never observes a half-written record. Storage access goes
//! through a small blob backend so the browser (`sessionStorage`) and the
//! in-memory store used by SSR and tests share parsing and notification code.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::net::types::LoginResponse;

/// Storage key holding the serialized [`SessionRecord`].
pub const SESSION_KEY: &str = "admin";

/// Identity of the signed-in administrator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Elevated-privilege marker. Records written before the field existed
    /// came from the supervisor login, so a missing value means `true`.
    #[serde(default = "default_admin")]
    pub admin: bool,
}

fn default_admin() -> bool {
    true
}

impl SessionRecord {
    /// Build the record persisted after a successful supervisor login.
    pub fn from_login(response: &LoginResponse) -> Self {
        Self {
            id: response.admin_id.clone(),
            name: response.name.clone(),
            email: response.email.clone(),
            admin: true,
        }
    }

    /// Parse and validate a stored blob.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Corrupt`] for unparsable content and
    /// [`SessionError::Incomplete`] when the admin id is blank.
    pub fn parse(raw: &str) -> Result<Self, SessionError> {
        let record: Self = serde_json::from_str(raw).map_err(|e| SessionError::Corrupt(e.to_string()))?;
        if record.id.trim().is_empty() {
            return Err(SessionError::Incomplete);
        }
        Ok(record)
    }

    /// Serialize the record into its stored form.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Corrupt`] if serialization fails.
    pub fn to_blob(&self) -> Result<String, SessionError> {
        serde_json::to_string(self).map_err(|e| SessionError::Corrupt(e.to_string()))
    }
}

/// Failures while reading or writing the session record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session record is not valid: {0}")]
    Corrupt(String),
    #[error("session record has no admin id")]
    Incomplete,
    #[error("session storage unavailable: {0}")]
    Storage(String),
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback invoked with the new record, or `None` after a clear.
pub type SessionListener = Box<dyn Fn(Option<&SessionRecord>) + Send + Sync>;

/// Injectable access to the persisted session record.
pub trait SessionStore: Send + Sync {
    /// Read the current record. `Ok(None)` means nobody is signed in.
    ///
    /// # Errors
    ///
    /// Returns an error when a stored blob exists but cannot be used.
    fn load(&self) -> Result<Option<SessionRecord>, SessionError>;

    /// Persist `record` as a single write and notify subscribers.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage rejects the write.
    fn save(&self, record: &SessionRecord) -> Result<(), SessionError>;

    /// Remove any stored record and notify subscribers. Safe to repeat.
    fn clear(&self);

    /// Register a change listener.
    fn subscribe(&self, listener: SessionListener) -> SubscriptionId;

    /// Drop a listener registered with [`SessionStore::subscribe`].
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Shared session store handle provided through Leptos context.
pub type SessionHandle = Arc<dyn SessionStore>;

/// Store appropriate for the current build.
///
/// In the browser every caller shares one `sessionStorage` store, so the REST
/// client's `401` handling notifies the same subscribers as the gate. Server
/// renders get a fresh, empty memory store each time.
pub fn default_store() -> SessionHandle {
    #[cfg(feature = "hydrate")]
    {
        static SHARED: std::sync::OnceLock<SessionHandle> = std::sync::OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(BrowserSessionStore::default())))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemorySessionStore::default())
    }
}

// =============================================================================
// BLOB BACKENDS
// =============================================================================

/// Raw string storage for one key.
pub trait BlobBackend: Send + Sync {
    fn read(&self) -> Result<Option<String>, SessionError>;
    fn write(&self, raw: &str) -> Result<(), SessionError>;
    fn remove(&self);
}

/// In-memory blob used by SSR renders and tests.
#[derive(Default)]
pub struct MemoryBlob {
    raw: Mutex<Option<String>>,
}

impl BlobBackend for MemoryBlob {
    fn read(&self) -> Result<Option<String>, SessionError> {
        Ok(lock(&self.raw).clone())
    }

    fn write(&self, raw: &str) -> Result<(), SessionError> {
        *lock(&self.raw) = Some(raw.to_owned());
        Ok(())
    }

    fn remove(&self) {
        *lock(&self.raw) = None;
    }
}

/// Browser `sessionStorage` blob under [`SESSION_KEY`].
#[derive(Default)]
pub struct BrowserBlob;

impl BlobBackend for BrowserBlob {
    fn read(&self) -> Result<Option<String>, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = browser_storage()?;
            storage
                .get_item(SESSION_KEY)
                .map_err(|e| SessionError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    fn write(&self, raw: &str) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = browser_storage()?;
            storage
                .set_item(SESSION_KEY, raw)
                .map_err(|e| SessionError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = raw;
            Err(SessionError::Storage("not available on server".to_owned()))
        }
    }

    fn remove(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Ok(storage) = browser_storage() {
                let _ = storage.remove_item(SESSION_KEY);
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn browser_storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .ok_or_else(|| SessionError::Storage("sessionStorage unavailable".to_owned()))
}

// =============================================================================
// STORE
// =============================================================================

type SharedListener = Arc<dyn Fn(Option<&SessionRecord>) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, SharedListener)>,
}

/// [`SessionStore`] over any [`BlobBackend`].
#[derive(Default)]
pub struct BlobSessionStore<B> {
    backend: B,
    listeners: Mutex<Listeners>,
}

/// Session store used during SSR and in tests.
pub type MemorySessionStore = BlobSessionStore<MemoryBlob>;

/// Session store backed by the browser's `sessionStorage`.
pub type BrowserSessionStore = BlobSessionStore<BrowserBlob>;

impl MemorySessionStore {
    /// Memory store pre-loaded with an arbitrary (possibly invalid) blob.
    pub fn seeded(raw: impl Into<String>) -> Self {
        Self {
            backend: MemoryBlob { raw: Mutex::new(Some(raw.into())) },
            listeners: Mutex::default(),
        }
    }

    /// Raw stored blob, if any.
    pub fn raw(&self) -> Option<String> {
        lock(&self.backend.raw).clone()
    }
}

impl<B: BlobBackend> BlobSessionStore<B> {
    fn notify(&self, record: Option<&SessionRecord>) {
        // Snapshot so listeners may call back into the store.
        let listeners: Vec<SharedListener> = lock(&self.listeners)
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(record);
        }
    }
}

impl<B: BlobBackend> SessionStore for BlobSessionStore<B> {
    fn load(&self) -> Result<Option<SessionRecord>, SessionError> {
        match self.backend.read()? {
            Some(raw) => SessionRecord::parse(&raw).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, record: &SessionRecord) -> Result<(), SessionError> {
        let raw = record.to_blob()?;
        self.backend.write(&raw)?;
        self.notify(Some(record));
        Ok(())
    }

    fn clear(&self) {
        self.backend.remove();
        self.notify(None);
    }

    fn subscribe(&self, listener: SessionListener) -> SubscriptionId {
        let mut listeners = lock(&self.listeners);
        listeners.next_id += 1;
        let id = SubscriptionId(listeners.next_id);
        listeners.entries.push((id, Arc::from(listener)));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        lock(&self.listeners).entries.retain(|(entry_id, _)| *entry_id != id);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
