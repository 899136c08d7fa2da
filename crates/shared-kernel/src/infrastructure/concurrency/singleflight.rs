// crates/shared-kernel/src/infrastructure/concurrency/singleflight.rs

//! # Singleflight - Déduplication de requêtes concurrentes
//!
//! Garantit qu'une seule instance d'une opération asynchrone est en cours pour une clé donnée.
//!
//! ### Cas d'usage : le "Thundering Herd"
//! Quand une entrée de cache manque et que N requêtes demandent la même clé en même temps,
//! `Singleflight` :
//! 1. Exécute l'appel pour la première requête (le leader).
//! 2. Fait attendre les N-1 autres (les suiveurs) sur le même résultat.
//! 3. Distribue le résultat, succès ou erreur, à tout le monde.
//!
//! Si le leader est abandonné (annulation), son entrée est retirée et un suiveur prend le relais.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures::future::{FutureExt, Shared};
use std::future::Future;
use std::hash::Hash;
use tokio::sync::oneshot;

use crate::errors::Result;

type InFlight<T> = Shared<oneshot::Receiver<Result<T>>>;

pub struct Singleflight<K, T>
where
    K: Hash + Eq,
{
    requests: DashMap<K, InFlight<T>>,
}

impl<K, T> Default for Singleflight<K, T>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> Singleflight<K, T>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            requests: DashMap::new(),
        }
    }

    /// Nombre de clés en cours d'exécution
    pub fn in_flight(&self) -> usize {
        self.requests.len()
    }

    pub async fn execute<F, Fut>(&self, key: K, factory: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut factory = Some(factory);

        loop {
            // Check-and-Insert ATOMIQUE via Entry
            let (tx, follower) = match self.requests.entry(key.clone()) {
                Entry::Occupied(entry) => (None, entry.get().clone()),
                Entry::Vacant(entry) => {
                    let (tx, rx) = oneshot::channel();
                    let shared_rx = rx.shared();
                    entry.insert(shared_rx.clone());
                    (Some(tx), shared_rx)
                }
            };

            // Le verrou DashMap est relâché ici, avant tout .await
            match (tx, factory.take()) {
                (Some(tx), Some(factory)) => {
                    let _guard = LeaderGuard {
                        requests: &self.requests,
                        key: &key,
                        rx: follower,
                    };

                    let result = factory().await;
                    let _ = tx.send(result.clone());

                    return result;
                }
                (tx, factory_back) => {
                    // Suiveur : on rend la factory pour un éventuel relais
                    drop(tx);
                    factory = factory_back;

                    match follower.await {
                        Ok(result) => return result,
                        // Leader abandonné avant d'avoir répondu : on retente
                        Err(_) => {
                            tracing::debug!("Singleflight leader dropped, retrying");
                            continue;
                        }
                    }
                }
            }
        }
    }
}

/// Retire l'entrée du leader à la fin du travail, y compris en cas de drop du futur
struct LeaderGuard<'a, K, T>
where
    K: Hash + Eq,
{
    requests: &'a DashMap<K, InFlight<T>>,
    key: &'a K,
    rx: InFlight<T>,
}

impl<K, T> Drop for LeaderGuard<'_, K, T>
where
    K: Hash + Eq,
{
    fn drop(&mut self) {
        // On ne supprime que NOTRE entrée (un nouveau leader a pu s'installer entre-temps)
        self.requests
            .remove_if(self.key, |_, current| Shared::ptr_eq(current, &self.rx));
    }
}
