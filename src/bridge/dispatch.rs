//! Single-task dispatch loop.
//!
//! Every control event goes through one task that handles it to completion
//! before receiving the next, so chart updates are produced in the order the
//! events arrived and never overlap.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

use super::{Bridge, ChartUpdate, ControlEvent};

const QUEUE_CAPACITY: usize = 64;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("dispatch loop is not running")]
    Closed,
}

struct Envelope {
    event: ControlEvent,
    reply: oneshot::Sender<ChartUpdate>,
}

/// Cloneable sender side of the dispatch loop.
#[derive(Clone)]
pub struct DispatchHandle {
    tx: mpsc::Sender<Envelope>,
}

impl DispatchHandle {
    /// Queue `event` and wait for its chart update.
    pub async fn dispatch(&self, event: ControlEvent) -> Result<ChartUpdate, DispatchError> {
        let pending = self.submit(event).await?;
        pending.await.map_err(|_| DispatchError::Closed)
    }

    /// Queue `event` without waiting for it to be handled. Events are handled
    /// in the order their `submit` calls complete.
    pub async fn submit(
        &self,
        event: ControlEvent,
    ) -> Result<oneshot::Receiver<ChartUpdate>, DispatchError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Envelope { event, reply })
            .await
            .map_err(|_| DispatchError::Closed)?;
        Ok(rx)
    }
}

/// Start the dispatch loop on the current tokio runtime.
///
/// The loop ends once every [`DispatchHandle`] has been dropped.
pub fn spawn(bridge: Arc<Bridge>) -> DispatchHandle {
    let (tx, mut rx) = mpsc::channel::<Envelope>(QUEUE_CAPACITY);

    tokio::spawn(async move {
        let mut handled: u64 = 0;
        while let Some(Envelope { event, reply }) = rx.recv().await {
            handled += 1;
            let mut update = bridge.handle(&event);
            update.dispatched = Some(handled);
            if reply.send(update).is_err() {
                tracing::debug!("Caller went away before chart update {} was delivered", handled);
            }
        }
        tracing::debug!(handled, "Dispatch loop stopped");
    });

    DispatchHandle { tx }
}
