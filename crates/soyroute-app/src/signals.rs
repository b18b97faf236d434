//! OS signals that end the dashboard
//!
//! In raw mode Ctrl+C reaches the app as a key, so signals only arrive from
//! outside the terminal: `kill`, a closed terminal window, a service manager.
//! Each one becomes a [`Message::Shutdown`], which quits and aborts the
//! narrations still in flight.

use std::future::Future;

use tokio::sync::mpsc;

use crate::message::Message;
use soyroute_core::prelude::*;

/// Signal that requested the shutdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
    Hangup,
}

impl ShutdownSignal {
    pub fn name(&self) -> &'static str {
        match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
            ShutdownSignal::Hangup => "SIGHUP",
        }
    }
}

/// Spawn a task that turns the first OS signal into a shutdown message
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(forward_shutdown(wait_for_signal(), tx));
}

/// Wait for `signal` and forward it. Sends nothing if listening failed.
pub async fn forward_shutdown<F>(signal: F, tx: mpsc::Sender<Message>)
where
    F: Future<Output = Result<ShutdownSignal>>,
{
    let signal = match signal.await {
        Ok(signal) => signal,
        Err(e) => {
            error!("Signal handler error: {}", e);
            return;
        }
    };

    info!("Received {}, shutting down", signal.name());
    if tx.send(Message::Shutdown { signal }).await.is_err() {
        debug!("Event loop already gone, {} ignored", signal.name());
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("Failed to listen for {}: {}", name, e)))
    };
    let mut sigint = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut sigterm = listen(SignalKind::terminate(), "SIGTERM")?;
    let mut sighup = listen(SignalKind::hangup(), "SIGHUP")?;

    let signal = tokio::select! {
        _ = sigint.recv() => ShutdownSignal::Interrupt,
        _ = sigterm.recv() => ShutdownSignal::Terminate,
        _ = sighup.recv() => ShutdownSignal::Hangup,
    };
    Ok(signal)
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signal_is_forwarded_as_shutdown() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        forward_shutdown(async { Ok(ShutdownSignal::Terminate) }, tx).await;

        assert_eq!(
            rx.recv().await,
            Some(Message::Shutdown {
                signal: ShutdownSignal::Terminate
            })
        );
    }

    #[tokio::test]
    async fn test_listen_failure_sends_nothing() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        forward_shutdown(async { Err(Error::terminal("no signal support")) }, tx).await;

        // Sender dropped without a message
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_closed_loop_does_not_panic() {
        let (tx, rx) = mpsc::channel::<Message>(1);
        drop(rx);

        forward_shutdown(async { Ok(ShutdownSignal::Hangup) }, tx).await;
    }

    #[test]
    fn test_signal_names() {
        assert_eq!(ShutdownSignal::Interrupt.name(), "SIGINT");
        assert_eq!(ShutdownSignal::Terminate.name(), "SIGTERM");
        assert_eq!(ShutdownSignal::Hangup.name(), "SIGHUP");
    }
}
