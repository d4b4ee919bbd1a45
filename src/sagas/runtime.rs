//! Saga runtime - runs coordinators for dispatched actions in the Tokio runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::Action;
use crate::sagas::context::SagaContext;
use crate::sagas::outcome::SagaOutcome;
use crate::sagas::registry::Registry;

/// Every action committed by the store is offered to the runtime. Actions with a
/// registered coordinator start a new concurrent task; nothing is cancelled when
/// the same trigger arrives again.
pub struct SagaRuntime {
    registry: Registry,
    ctx: SagaContext,
    running: JoinSet<(&'static str, SagaOutcome)>,
}

impl SagaRuntime {
    pub fn new(registry: Registry, ctx: SagaContext) -> Self {
        SagaRuntime {
            registry,
            ctx,
            running: JoinSet::new(),
        }
    }

    /// Run until the action channel closes, then wait for in-flight coordinators
    pub async fn run(mut self, mut action_rx: mpsc::UnboundedReceiver<Action>) {
        loop {
            tokio::select! {
                action = action_rx.recv() => {
                    match action {
                        Some(action) => self.start(action),
                        None => break,
                    }
                }

                Some(result) = self.running.join_next() => {
                    Self::finished(result);
                }
            }
        }

        while let Some(result) = self.running.join_next().await {
            Self::finished(result);
        }
        tracing::info!("Saga runtime stopped");
    }

    fn start(&mut self, action: Action) {
        let kind = action.kind();
        if let Some(saga) = self.registry.start(self.ctx.clone(), action) {
            tracing::info!(kind, "Starting coordinator");
            self.running.spawn(async move { (kind, saga.await) });
        }
    }

    fn finished(result: Result<(&'static str, SagaOutcome), tokio::task::JoinError>) {
        match result {
            Ok((kind, outcome)) => tracing::info!(kind, ?outcome, "Coordinator finished"),
            Err(e) => tracing::error!(error = %e, "Coordinator panicked"),
        }
    }
}
