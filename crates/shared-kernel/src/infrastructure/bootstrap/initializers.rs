// crates/shared-kernel/src/infrastructure/bootstrap/initializers.rs

use futures::future::BoxFuture;
use std::future::Future;
use std::time::Instant;

use crate::errors::AppResult;

/// Étape nommée du démarrage d'un service (connexion Redis, canal gRPC, clés JWT...)
pub struct Initializer<'a> {
    name: &'static str,
    step: BoxFuture<'a, AppResult<()>>,
}

impl<'a> Initializer<'a> {
    pub fn new<F>(name: &'static str, step: F) -> Self
    where
        F: Future<Output = AppResult<()>> + Send + 'a,
    {
        Self {
            name,
            step: Box::pin(step),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Exécute les étapes dans l'ordre donné. La première erreur interrompt le démarrage.
pub async fn run_initializers(steps: Vec<Initializer<'_>>) -> AppResult<()> {
    let total = steps.len();

    for (index, initializer) in steps.into_iter().enumerate() {
        let started = Instant::now();
        tracing::info!("⏳ [{}/{}] {}", index + 1, total, initializer.name);

        if let Err(e) = initializer.step.await {
            tracing::error!(step = initializer.name, error = %e, "❌ Initialization failed");
            return Err(e);
        }

        tracing::info!(
            step = initializer.name,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "✅ Ready"
        );
    }

    Ok(())
}
