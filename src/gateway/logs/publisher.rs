use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher emits domain events as structured log lines; there is no
// external broker in the in-memory deployment.
#[derive(Debug)]
pub struct LogPublisher {
}

impl LogPublisher {
    pub(crate) fn new() -> Self {
        Self {
        }
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        info!("published {} event: {}", event.name, json);
        Ok(())
    }
}
