pub mod config;
pub mod contracts;
pub mod item_collection;
pub mod sample_item;

pub use config::{CollectionConfig, LookupMode};
pub use contracts::{Item, ItemKey, ItemSource};
pub use item_collection::{CollectionSnapshot, ItemCollection};
pub use sample_item::SampleItem;
