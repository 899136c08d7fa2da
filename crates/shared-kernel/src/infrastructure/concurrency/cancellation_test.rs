// crates/shared-kernel/src/infrastructure/concurrency/cancellation_test.rs

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    use crate::errors::DomainError;
    use crate::infrastructure::concurrency::with_cancellation;

    #[tokio::test]
    async fn test_returns_future_output_when_not_cancelled() {
        let token = CancellationToken::new();

        let result = with_cancellation(&token, async { Ok::<_, DomainError>(42) }).await;

        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_already_cancelled_token_never_polls_the_future() {
        // Arrange
        let token = CancellationToken::new();
        token.cancel();
        let polled = Arc::new(AtomicBool::new(false));
        let flag = polled.clone();

        // Act
        let result = with_cancellation(&token, async move {
            flag.store(true, Ordering::SeqCst);
            Ok::<_, DomainError>(())
        })
        .await;

        // Assert
        assert_eq!(result, Err(DomainError::Cancelled));
        assert!(!polled.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_cancellation_during_execution_aborts_the_future() {
        // Arrange
        let token = CancellationToken::new();
        let child = token.child_token();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            token.cancel();
        });

        // Act
        let result = with_cancellation(&child, async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok::<_, DomainError>("too late")
        })
        .await;

        // Assert
        assert_eq!(result, Err(DomainError::Cancelled));
    }

    #[tokio::test]
    async fn test_errors_of_the_future_are_propagated() {
        let token = CancellationToken::new();

        let result: Result<(), _> = with_cancellation(&token, async {
            Err(DomainError::Storage("down".into()))
        })
        .await;

        assert_eq!(result, Err(DomainError::Storage("down".into())));
    }
}
