//! Command execution helpers
//!
//! Times each command and logs its outcome.

use std::future::Future;
use std::time::Instant;

use baitulmal_domain::Result as DomainResult;
use tracing::debug;

use crate::utils::logging::{error_label, log_command_execution};

/// Execute a command with timing and structured logging
///
/// # Example
///
/// ```rust,ignore
/// execute_command("sectors::list", || async {
///     ctx.sectors.list(&params).await
/// })
/// .await
/// ```
pub async fn execute_command<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    let elapsed = start.elapsed();
    if let Err(err) = &result {
        let error_type = error_label(err);
        debug!(command = command_name, error_type, error = %err, "command failed");
    }
    log_command_execution(command_name, elapsed, result.is_ok());

    result
}

#[cfg(test)]
mod tests {
    use baitulmal_domain::BaitulMalError;

    use super::*;

    #[tokio::test]
    async fn passes_the_result_through() {
        let ok = execute_command("test::ok", || async { Ok(7) }).await;
        assert_eq!(ok, Ok(7));

        let err: DomainResult<()> = execute_command("test::err", || async {
            Err(BaitulMalError::NotFound("sector".into()))
        })
        .await;
        assert!(matches!(err, Err(BaitulMalError::NotFound(_))));
    }
}
