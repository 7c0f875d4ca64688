use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

#[cfg(not(unix))]
use futures::future::BoxFuture;
#[cfg(unix)]
use smallvec::SmallVec;
#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

#[cfg(unix)]
const SHUTDOWN_SIGNALS: [(&str, fn() -> SignalKind); 3] = [
    ("SIGINT", SignalKind::interrupt),
    ("SIGTERM", SignalKind::terminate),
    ("SIGQUIT", SignalKind::quit),
];

/// Resolves with the name of the first shutdown signal the process receives.
///
/// Listeners that fail to register are logged and skipped, so the server
/// still runs when none of them can be installed.
pub struct SignalHandler {
    #[cfg(unix)]
    listeners: SmallVec<[(&'static str, Signal); 3]>,
    #[cfg(not(unix))]
    ctrl_c: BoxFuture<'static, std::io::Result<()>>,
}

impl SignalHandler {
    pub fn new() -> Self {
        trace!("registering shutdown listeners");

        #[cfg(unix)]
        {
            let listeners = SHUTDOWN_SIGNALS
                .into_iter()
                .filter_map(|(name, kind)| match signal(kind()) {
                    Ok(listener) => Some((name, listener)),
                    Err(error) => {
                        error!("failed to listen for {}: {}", name, error);
                        None
                    }
                })
                .collect::<SmallVec<_>>();

            debug!("listening for {} shutdown signals", listeners.len());

            SignalHandler { listeners }
        }

        #[cfg(not(unix))]
        {
            SignalHandler {
                ctrl_c: Box::pin(tokio::signal::ctrl_c()),
            }
        }
    }

    /// Waits for a signal and logs it.
    pub async fn shutdown(self) {
        let name = self.await;
        info!("received {}, shutting down", name);
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Future for SignalHandler {
    type Output = &'static str;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        #[cfg(unix)]
        {
            for (name, listener) in &mut self.listeners {
                if listener.poll_recv(cx).is_ready() {
                    return Poll::Ready(*name);
                }
            }
        }

        #[cfg(not(unix))]
        {
            if self.ctrl_c.as_mut().poll(cx).is_ready() {
                return Poll::Ready("Ctrl-C");
            }
        }

        Poll::Pending
    }
}
