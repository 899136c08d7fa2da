// crates/shared-kernel/src/infrastructure/concurrency/cancellation.rs

use std::future::Future;
use tokio_util::sync::CancellationToken;

use crate::errors::{DomainError, Result};

/// Exécute `fut` tant que le token n'est pas annulé.
/// Si le token est annulé avant la fin, le futur est abandonné (drop) et l'appel échoue en `Cancelled`.
pub async fn with_cancellation<T, Fut>(token: &CancellationToken, fut: Fut) -> Result<T>
where
    Fut: Future<Output = Result<T>>,
{
    if token.is_cancelled() {
        return Err(DomainError::Cancelled);
    }

    tokio::select! {
        biased;
        _ = token.cancelled() => Err(DomainError::Cancelled),
        result = fut => result,
    }
}
