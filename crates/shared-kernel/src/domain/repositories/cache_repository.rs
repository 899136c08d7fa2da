// crates/shared-kernel/src/domain/repositories/cache_repository.rs

use crate::errors::AppResult;
use async_trait::async_trait;
use std::time::Duration;

/// Stockage clé/valeur brut (JSON sérialisé par l'appelant).
/// Une clé expirée est indiscernable d'une clé absente.
#[async_trait]
pub trait CacheRepository: Send + Sync {
    /// Écrase toujours la valeur existante ; le TTL repart de zéro à chaque appel
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> AppResult<()>;
    async fn get(&self, key: &str) -> AppResult<Option<String>>;
    /// Idempotent : supprimer une clé absente n'est pas une erreur
    async fn delete(&self, key: &str) -> AppResult<()>;
    async fn exists(&self, key: &str) -> AppResult<bool>;
}
