use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// Item entity - a row of the `items` table
///
/// Items are immutable once stored; the id is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub rarity: String,
    pub description: String,
}

/// Create request as received from a client, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct CreateItem {
    #[validate(length(min = 3, max = 100, message = "must be between 3 and 100 characters"))]
    pub name: String,
    #[validate(length(min = 3, max = 20, message = "must be between 3 and 20 characters"))]
    pub rarity: String,
    #[validate(
        required(message = "is required"),
        length(min = 3, max = 1000, message = "must be between 3 and 1000 characters")
    )]
    pub description: Option<String>,
}

impl CreateItem {
    /// Run field validation and produce the insertable form.
    pub fn validated(self) -> Result<NewItem, ValidationErrors> {
        self.validate()?;

        Ok(NewItem {
            name: self.name,
            rarity: self.rarity,
            // `required` above guarantees a value here
            description: self.description.unwrap_or_default(),
        })
    }
}

/// A validated item that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub rarity: String,
    pub description: String,
}

impl NewItem {
    /// Attach the storage-assigned id
    pub fn into_item(self, id: Uuid) -> Item {
        Item {
            id,
            name: self.name,
            rarity: self.rarity,
            description: self.description,
        }
    }
}
