//! Item Service - orchestration over the repository

use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::error::{ErrorKind, ItemError, ItemResult, StorageError};
use crate::models::{Item, NewItem};
use crate::repository::ItemRepository;

/// Item service
///
/// Holds no state besides the repository handle. Input is expected to be
/// validated already; the service adds no business rules of its own.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Store a new item and return its generated id
    #[instrument(skip(self, item), fields(op = "item.create_item", item_name = %item.name))]
    pub async fn create_item(&self, item: NewItem) -> ItemResult<Uuid> {
        const OP: &str = "item.create_item";
        info!("attempting to create item");

        let id = self
            .repository
            .save_item(&item)
            .await
            .map_err(|e| wrap(OP, e))?;

        info!(item_id = %id, "item created");
        Ok(id)
    }

    /// Get an item by ID
    #[instrument(skip(self), fields(op = "item.get_item"))]
    pub async fn get_item(&self, id: Uuid) -> ItemResult<Item> {
        const OP: &str = "item.get_item";
        info!("attempting to get item");

        let item = self
            .repository
            .get_item(id)
            .await
            .map_err(|e| wrap(OP, e))?;

        info!("item fetched");
        Ok(item)
    }

    /// List every item
    #[instrument(skip(self), fields(op = "item.get_all_items"))]
    pub async fn get_all_items(&self) -> ItemResult<Vec<Item>> {
        const OP: &str = "item.get_all_items";
        info!("attempting to get all items");

        let items = self
            .repository
            .get_all_items()
            .await
            .map_err(|e| wrap(OP, e))?;

        info!(count = items.len(), "items fetched");
        Ok(items)
    }

    /// Delete an item
    #[instrument(skip(self), fields(op = "item.delete_item"))]
    pub async fn delete_item(&self, id: Uuid) -> ItemResult<()> {
        const OP: &str = "item.delete_item";
        info!("attempting to delete item");

        self.repository
            .delete_item(id)
            .await
            .map_err(|e| wrap(OP, e))?;

        info!("item deleted");
        Ok(())
    }
}

/// Not-found and duplicate become `Invalid`, the rest passes through.
fn wrap(op: &'static str, source: StorageError) -> ItemError {
    match source.kind() {
        ErrorKind::NotFound | ErrorKind::AlreadyExists => {
            warn!(error = %source, "invalid item");
            ItemError::Invalid { op, source }
        }
        kind => {
            error!(error = %source, %kind, "storage failure");
            ItemError::Storage { op, source }
        }
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
