// crates/shared-kernel/src/domain/repositories/cache_repository_stub.rs

use crate::domain::repositories::CacheRepository;
use crate::errors::{AppError, AppResult, ErrorCode};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub struct CacheRepositoryStub {
    pub storage: Mutex<HashMap<String, String>>,
    /// Dernier TTL reçu par clé
    pub ttls: Mutex<HashMap<String, Option<Duration>>>,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub set_calls: AtomicUsize,
}

impl Default for CacheRepositoryStub {
    fn default() -> Self {
        Self {
            storage: Mutex::new(HashMap::new()),
            ttls: Mutex::new(HashMap::new()),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            set_calls: AtomicUsize::new(0),
        }
    }
}

impl CacheRepositoryStub {
    /// Cache totalement indisponible (lectures et écritures)
    pub fn failing() -> Self {
        let stub = Self::default();
        stub.fail_reads.store(true, Ordering::SeqCst);
        stub.fail_writes.store(true, Ordering::SeqCst);
        stub
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.storage
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.storage.lock().unwrap().get(key).cloned()
    }

    pub fn ttl_of(&self, key: &str) -> Option<Duration> {
        self.ttls.lock().unwrap().get(key).cloned().flatten()
    }

    fn cache_down() -> AppError {
        AppError::new(ErrorCode::InfrastructureFailure, "Cache Down")
    }
}

#[async_trait]
impl CacheRepository for CacheRepositoryStub {
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> AppResult<()> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::cache_down());
        }
        self.insert(key, value);
        self.ttls.lock().unwrap().insert(key.to_string(), ttl);
        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::cache_down());
        }
        Ok(self.raw(key))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::cache_down());
        }
        self.storage.lock().unwrap().remove(key);
        self.ttls.lock().unwrap().remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::cache_down());
        }
        Ok(self.storage.lock().unwrap().contains_key(key))
    }
}
