use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StorageResult;
use crate::models::{Item, NewItem};

/// Repository trait for Item persistence
///
/// Every method is a single statement; there are no transactions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a row and return the id generated by the database.
    ///
    /// Names are unique (`items_name_key`), so saving a second item with an
    /// existing name fails with `StorageError::ItemExists`.
    async fn save_item(&self, item: &NewItem) -> StorageResult<Uuid>;

    /// Fetch one item, `StorageError::ItemNotFound` if no row matches
    async fn get_item(&self, id: Uuid) -> StorageResult<Item>;

    /// Fetch every item in natural storage order; empty table is `Ok(vec![])`
    async fn get_all_items(&self) -> StorageResult<Vec<Item>>;

    /// Delete one item, `StorageError::ItemNotFound` if no row was removed
    async fn delete_item(&self, id: Uuid) -> StorageResult<()>;
}
