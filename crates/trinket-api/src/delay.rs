// ── Latency primitives ──
//
// Futures that hold back an already-known outcome until a delay has
// elapsed, so callers observe it only after suspending.

use std::time::Duration;

/// Settle with `outcome` once `latency` has elapsed.
pub async fn settle<T, E>(outcome: Result<T, E>, latency: Duration) -> Result<T, E> {
    tokio::time::sleep(latency).await;
    outcome
}

/// Resolve with `value` after `latency`.
pub async fn opaque<T, E>(value: T, latency: Duration) -> Result<T, E> {
    settle(Ok(value), latency).await
}

/// Reject with `error` after `latency`.
pub async fn rejected<T, E>(error: E, latency: Duration) -> Result<T, E> {
    settle(Err(error), latency).await
}
