//! Append-only damage report log

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Ticket,
};

/// Process-wide ledger of submitted tickets, held in memory for the
/// lifetime of the server. Tickets are never edited or removed.
#[derive(Clone, Default)]
pub struct TicketLog {
    entries: Arc<RwLock<Vec<Ticket>>>,
}

impl TicketLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, ticket: Ticket) {
        self.entries.write().await.push(ticket);
    }

    /// All tickets, most recent first
    pub async fn list_recent(&self) -> Vec<Ticket> {
        self.entries.read().await.iter().rev().cloned().collect()
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Ticket> {
        self.entries
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Ticket {} not found", id)))
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
