//! Common imports for application code.
//!
//! `use item_collection::prelude::*;` brings the collection, its item contracts
//! and the configuration types into scope.

pub use crate::collection::{
    CollectionConfig, CollectionSnapshot, Item, ItemCollection, ItemKey, ItemSource, LookupMode,
    SampleItem,
};
pub use crate::core::{CollectionError, ItemId, Result};
