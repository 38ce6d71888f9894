//! Conversions between the `item.v1` wire messages and domain types

use rpc::item::v1 as proto;
use uuid::Uuid;

use crate::models::{CreateItem, Item};

impl From<Item> for proto::Item {
    fn from(item: Item) -> Self {
        proto::Item {
            item_id: item.id.to_string(),
            name: item.name,
            rarity: item.rarity,
            description: item.description,
        }
    }
}

impl From<proto::CreateItemRequest> for CreateItem {
    fn from(req: proto::CreateItemRequest) -> Self {
        CreateItem {
            name: req.name,
            rarity: req.rarity,
            description: req.description,
        }
    }
}

/// Parse the string form of an item id
pub fn parse_item_id(raw: &str) -> Result<Uuid, String> {
    if raw.is_empty() {
        return Err("item_id is required".to_string());
    }
    Uuid::parse_str(raw).map_err(|_| "item_id must be a valid UUID".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_to_proto() {
        let id = Uuid::new_v4();
        let proto: proto::Item = Item {
            id,
            name: "Sword".to_string(),
            rarity: "Rare".to_string(),
            description: "Sharp blade".to_string(),
        }
        .into();

        assert_eq!(proto.item_id, id.to_string());
        assert_eq!(proto.name, "Sword");
        assert_eq!(proto.description, "Sharp blade");
    }

    #[test]
    fn test_create_request_keeps_missing_description() {
        let input: CreateItem = proto::CreateItemRequest {
            name: "Sword".to_string(),
            rarity: "Rare".to_string(),
            description: None,
        }
        .into();

        assert!(input.description.is_none());
    }

    #[test]
    fn test_parse_item_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_item_id(&id.to_string()).unwrap(), id);
        assert_eq!(parse_item_id("").unwrap_err(), "item_id is required");
        assert_eq!(
            parse_item_id("not-a-uuid").unwrap_err(),
            "item_id must be a valid UUID"
        );
    }
}
