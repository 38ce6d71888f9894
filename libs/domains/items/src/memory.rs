//! In-process repository for handler and end-to-end tests
//!
//! Enabled by the `testing` feature. Mirrors the PostgreSQL semantics that
//! callers can observe: unique names, insertion order, zero-row deletes.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::error::{StorageError, StorageResult};
use crate::models::{Item, NewItem};
use crate::repository::ItemRepository;

#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<Vec<Item>>>,
    unavailable: bool,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with `StorageError::Unavailable`
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self) -> StorageResult<()> {
        if self.unavailable {
            return Err(StorageError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::Unavailable("item store lock poisoned".to_string())
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn save_item(&self, item: &NewItem) -> StorageResult<Uuid> {
        self.check()?;
        let mut items = self.items.write().map_err(poisoned)?;

        if items.iter().any(|existing| existing.name == item.name) {
            return Err(StorageError::ItemExists(format!(
                "Key (name)=({}) already exists.",
                item.name
            )));
        }

        let id = Uuid::new_v4();
        items.push(item.clone().into_item(id));
        Ok(id)
    }

    async fn get_item(&self, id: Uuid) -> StorageResult<Item> {
        self.check()?;
        let items = self.items.read().map_err(poisoned)?;

        items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(StorageError::ItemNotFound(id))
    }

    async fn get_all_items(&self) -> StorageResult<Vec<Item>> {
        self.check()?;
        Ok(self.items.read().map_err(poisoned)?.clone())
    }

    async fn delete_item(&self, id: Uuid) -> StorageResult<()> {
        self.check()?;
        let mut items = self.items.write().map_err(poisoned)?;

        let before = items.len();
        items.retain(|item| item.id != id);

        if items.len() == before {
            return Err(StorageError::ItemNotFound(id));
        }
        Ok(())
    }
}
