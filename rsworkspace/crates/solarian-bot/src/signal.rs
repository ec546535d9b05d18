//! Graceful shutdown: stop every gateway shard once the process is asked
//! to exit.

use std::fmt;
use std::future::Future;

use serenity::async_trait;
use serenity::gateway::ShardManager;
use tracing::{info, warn};

/// Which signal asked the bot to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for StopSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopSignal::Interrupt => f.write_str("SIGINT"),
            StopSignal::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Something holding gateway shards that can be closed.
#[async_trait]
pub trait ShardShutdown: Send + Sync {
    async fn shutdown_all(&self);
}

#[async_trait]
impl ShardShutdown for ShardManager {
    async fn shutdown_all(&self) {
        ShardManager::shutdown_all(self).await;
    }
}

async fn interrupt() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(error = %error, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(error) => {
            warn!(error = %error, "Failed to install SIGTERM handler");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}

/// Resolves with the first of SIGINT or SIGTERM. A handler that cannot be
/// installed never fires.
pub async fn wait_for_stop() -> StopSignal {
    tokio::select! {
        _ = interrupt() => StopSignal::Interrupt,
        _ = terminate() => StopSignal::Terminate,
    }
}

/// Close all shards once `signal` resolves, which lets `Client::start`
/// return.
pub async fn stop_shards_on<F, S>(signal: F, shards: &S)
where
    F: Future<Output = StopSignal>,
    S: ShardShutdown + ?Sized,
{
    let received = signal.await;
    info!(signal = %received, "Shutdown signal received, stopping Discord client...");
    shards.shutdown_all().await;
}
