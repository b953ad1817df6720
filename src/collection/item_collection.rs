use super::config::{CollectionConfig, LookupMode};
use super::contracts::{Item, ItemKey, ItemSource};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Ordered, append-only collection of items.
///
/// Items keep their insertion order. Identifiers are not required to be unique;
/// lookups return the first item whose identifier matches.
#[derive(Debug, Clone)]
pub struct ItemCollection<T: Item> {
    config: CollectionConfig,
    items: Vec<T>,
}

/// Serializable copy of a collection's name and contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSnapshot<T> {
    pub name: String,
    pub items: Vec<T>,
}

impl<T: Item> ItemCollection<T> {
    /// Creates an empty collection with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CollectionConfig::default())
    }

    /// Creates an empty collection using `config` as given.
    ///
    /// Construction never validates the configuration; call
    /// [`CollectionConfig::validate`] first when the config comes from user input.
    pub fn with_config(config: CollectionConfig) -> Self {
        Self::from_items_with_config(Vec::new(), config)
    }

    /// Creates a collection holding `items` in the order given.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_items_with_config(items, CollectionConfig::default())
    }

    pub fn from_items_with_config<I>(items: I, config: CollectionConfig) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut buffer = Vec::with_capacity(config.initial_capacity);
        buffer.extend(items);
        debug!(
            collection = %config.name,
            count = buffer.len(),
            lookup_mode = %config.lookup_mode,
            "item collection created"
        );
        Self {
            config,
            items: buffer,
        }
    }

    /// Rebuilds a collection from a snapshot, keeping its name and order.
    ///
    /// The name is taken verbatim, without validation. The lookup mode is the default.
    pub fn from_snapshot(snapshot: CollectionSnapshot<T>) -> Self {
        let config = CollectionConfig::default().name(&snapshot.name);
        Self::from_items_with_config(snapshot.items, config)
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    /// Returns the number of items in the collection.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a slice of the items in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the current contents in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Appends an item to the end of the collection.
    ///
    /// Duplicate identifiers are accepted.
    pub fn add_item(&mut self, item: T) {
        trace!(collection = %self.config.name, id = ?item.id(), "item added");
        self.items.push(item);
    }

    /// Appends every item of `items`, in order.
    pub fn add_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.add_item(item);
        }
    }

    /// Returns the first item whose identifier matches `id`.
    ///
    /// Matching follows the configured [`LookupMode`]. A linear scan; absence is `None`.
    pub fn get_item_by_id(&self, id: &T::Id) -> Option<&T> {
        let found = match self.config.lookup_mode {
            LookupMode::Exact => self.items.iter().find(|item| item.id() == id),
            LookupMode::Coercive => self.items.iter().find(|item| item.id().loose_eq(id)),
        };
        if found.is_none() {
            trace!(collection = %self.config.name, id = ?id, "item lookup missed");
        }
        found
    }

    pub fn contains_id(&self, id: &T::Id) -> bool {
        self.get_item_by_id(id).is_some()
    }
}

impl<T: Item + Clone> ItemCollection<T> {
    pub fn snapshot(&self) -> CollectionSnapshot<T> {
        CollectionSnapshot {
            name: self.config.name.clone(),
            items: self.items.clone(),
        }
    }
}

impl<T: Item> Default for ItemCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Item> ItemSource for ItemCollection<T> {
    type Item = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    fn iter_items(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<'a, T: Item> IntoIterator for &'a ItemCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Item> IntoIterator for ItemCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Item> FromIterator<T> for ItemCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T: Item> Extend<T> for ItemCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_items(iter);
    }
}
