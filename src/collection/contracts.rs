use crate::core::ItemId;
use std::fmt::Debug;

/// Identifier type usable for item lookup.
///
/// `PartialEq` is the exact comparison. `loose_eq` is the coercive one and
/// defaults to exact equality for keys that have no looser notion of sameness.
pub trait ItemKey: PartialEq + Debug {
    fn loose_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl ItemKey for ItemId {
    fn loose_eq(&self, other: &Self) -> bool {
        ItemId::loose_eq(self, other)
    }
}

macro_rules! exact_item_key {
    ($($ty:ty),* $(,)?) => {
        $(impl ItemKey for $ty {})*
    };
}

exact_item_key!(i32, i64, u32, u64, usize, String, &'static str);

/// Capability an entity needs to live in an `ItemCollection`.
pub trait Item {
    type Id: ItemKey;

    /// Returns the identifier used by `get_item_by_id`.
    fn id(&self) -> &Self::Id;
}

impl<T: Item> Item for Box<T> {
    type Id = T::Id;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }
}

impl<T: Item> Item for std::sync::Arc<T> {
    type Id = T::Id;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }
}

/// Anything that can hand out a fresh, ordered traversal of its items.
///
/// Every call starts a new traversal over the contents at call time.
pub trait ItemSource {
    type Item: Item;
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    fn iter_items(&self) -> Self::Iter<'_>;

    /// Collects the identifiers of all items in traversal order.
    fn ids(&self) -> Vec<&<Self::Item as Item>::Id> {
        self.iter_items().map(|item| item.id()).collect()
    }
}
