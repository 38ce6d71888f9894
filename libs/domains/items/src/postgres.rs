use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, FromQueryResult, Statement};
use tracing::debug;
use uuid::Uuid;

use crate::error::{StorageError, StorageErrorCode, StorageResult};
use crate::models::{Item, NewItem};
use crate::repository::ItemRepository;

const INSERT_ITEM: &str = r#"
    INSERT INTO items (id, name, rarity, description)
    VALUES (gen_random_uuid(), $1, $2, $3)
    RETURNING id
"#;

const SELECT_ITEM: &str = r#"
    SELECT id, name, rarity, description
    FROM items
    WHERE id = $1
"#;

const SELECT_ALL_ITEMS: &str = r#"
    SELECT id, name, rarity, description
    FROM items
"#;

const DELETE_ITEM: &str = "DELETE FROM items WHERE id = $1";

/// PostgreSQL implementation of ItemRepository using raw SeaORM statements
#[derive(Clone)]
pub struct PgItemRepository {
    db: DatabaseConnection,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct ItemRow {
    id: Uuid,
    name: String,
    rarity: String,
    description: String,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            name: row.name,
            rarity: row.rarity,
            description: row.description,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct InsertedId {
    id: Uuid,
}

/// Collapse a multi-line statement onto one line for logging
fn format_query(sql: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn statement(sql: &str, values: impl IntoIterator<Item = sea_orm::Value>) -> Statement {
    debug!(query = %format_query(sql), "executing SQL");
    Statement::from_sql_and_values(DbBackend::Postgres, sql, values)
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn save_item(&self, item: &NewItem) -> StorageResult<Uuid> {
        let stmt = statement(
            INSERT_ITEM,
            [
                item.name.clone().into(),
                item.rarity.clone().into(),
                item.description.clone().into(),
            ],
        );

        let row = InsertedId::find_by_statement(stmt)
            .one(&self.db)
            .await?
            .ok_or_else(|| StorageError::Database {
                code: StorageErrorCode::Other,
                message: "insert returned no id".to_string(),
            })?;

        Ok(row.id)
    }

    async fn get_item(&self, id: Uuid) -> StorageResult<Item> {
        let stmt = statement(SELECT_ITEM, [id.into()]);

        ItemRow::find_by_statement(stmt)
            .one(&self.db)
            .await?
            .map(Item::from)
            .ok_or(StorageError::ItemNotFound(id))
    }

    async fn get_all_items(&self) -> StorageResult<Vec<Item>> {
        let stmt = statement(SELECT_ALL_ITEMS, []);

        let rows = ItemRow::find_by_statement(stmt).all(&self.db).await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn delete_item(&self, id: Uuid) -> StorageResult<()> {
        let stmt = statement(DELETE_ITEM, [id.into()]);

        let result = self.db.execute_raw(stmt).await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::ItemNotFound(id));
        }

        Ok(())
    }
}
