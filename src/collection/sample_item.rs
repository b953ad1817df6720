use super::contracts::Item;
use crate::core::ItemId;
use serde::{Deserialize, Serialize};

/// Plain named item keyed by an [`ItemId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleItem {
    id: ItemId,
    name: String,
}

impl SampleItem {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Item for SampleItem {
    type Id = ItemId;

    fn id(&self) -> &ItemId {
        &self.id
    }
}
