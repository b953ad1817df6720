pub mod error;
pub mod item_id;

pub use error::{CollectionError, Result};
pub use item_id::ItemId;
