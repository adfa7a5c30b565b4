use anyhow::Result;
use tokio::signal;

enum ShutdownSignal {
    CtrlC,
    #[cfg(unix)]
    Sigterm,
}

impl ShutdownSignal {
    const fn name(&self) -> &'static str {
        match self {
            Self::CtrlC => "ctrl_c",
            #[cfg(unix)]
            Self::Sigterm => "sigterm",
        }
    }
}

/// Resolves once Ctrl+C or SIGTERM arrives.
///
/// # Errors
/// Returns an error if a signal handler cannot be installed.
pub async fn wait_for_shutdown() -> Result<()> {
    let received = tokio::select! {
        result = wait_ctrl_c() => result?,
        result = wait_sigterm() => result?,
    };

    tracing::info!(signal = received.name(), "Shutdown signal received, draining connections");
    Ok(())
}

async fn wait_ctrl_c() -> Result<ShutdownSignal> {
    signal::ctrl_c().await.inspect_err(|e| {
        tracing::error!(%e, "Error handling Ctrl+C signal");
    })?;
    Ok(ShutdownSignal::CtrlC)
}

#[cfg(unix)]
async fn wait_sigterm() -> Result<ShutdownSignal> {
    let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())
        .inspect_err(|e| {
            tracing::error!(%e, "Failed to install SIGTERM handler");
        })?;
    terminate.recv().await;
    Ok(ShutdownSignal::Sigterm)
}

#[cfg(not(unix))]
async fn wait_sigterm() -> Result<ShutdownSignal> {
    std::future::pending::<Result<ShutdownSignal>>().await
}
