// ============================================================================
// item_collection Library
// ============================================================================

//! Ordered in-memory item collection with lookup by identifier.
//!
//! # Examples
//!
//! ```
//! use item_collection::{ItemCollection, ItemId, SampleItem};
//!
//! let mut items = ItemCollection::new();
//! items.add_item(SampleItem::new(1, "first"));
//! items.add_item(SampleItem::new(2, "second"));
//!
//! assert_eq!(items.count(), 2);
//! assert_eq!(items.get_item_by_id(&ItemId::from(1)).map(|i| i.name()), Some("first"));
//! assert!(items.get_item_by_id(&ItemId::from(3)).is_none());
//! ```

pub mod collection;
pub mod core;
pub mod prelude;

// Re-export main types for convenience
pub use crate::collection::{
    CollectionConfig, CollectionSnapshot, Item, ItemCollection, ItemKey, ItemSource, LookupMode,
    SampleItem,
};
pub use crate::core::{CollectionError, ItemId, Result};
