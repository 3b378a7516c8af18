//! Ordered, name-addressable parameter collections
//!
//! Items are addressed by 1-based position or by exact, case-sensitive name.
//! Duplicate names are not rejected; name lookup returns the first match.

use std::fmt;
use std::slice;

use tracing::debug;

use crate::parameters::events::{
    CollectionEvent, CollectionEventKind, ListChange, Listener, Notifier, SubscriptionId,
};
use crate::parameters::parameter::{CapeParameter, ParameterError};
use crate::parameters::status::{messages, Validation};

/// Address of an item in a [`ParameterCollection`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKey {
    /// 1-based position
    Position(i64),

    /// Exact parameter name
    Name(String),
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(position) => write!(f, "{}", position),
            Self::Name(name) => write!(f, "'{}'", name),
        }
    }
}

impl From<i64> for ItemKey {
    fn from(position: i64) -> Self {
        Self::Position(position)
    }
}

impl From<i32> for ItemKey {
    fn from(position: i32) -> Self {
        Self::Position(i64::from(position))
    }
}

impl From<usize> for ItemKey {
    fn from(position: usize) -> Self {
        Self::Position(i64::try_from(position).unwrap_or(i64::MAX))
    }
}

impl From<&str> for ItemKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ItemKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// An ordered collection owning its parameters
///
/// The collection has its own name and description, with the same change
/// notifications as a parameter. Cloning clones every item with the item's own
/// clone semantics, in order; listeners are not cloned.
///
/// # Examples
///
/// ```
/// use capeparam_rs::parameters::{CapeParameter, Parameter, ParameterCollection};
///
/// let mut collection = ParameterCollection::named("Column", "Distillation column settings");
/// collection.add(Parameter::integer("Stages", 5, 1, 100));
/// collection.add(Parameter::option("Method", "TP", ["TP", "PH", "TV"], true));
///
/// assert_eq!(collection.count(), 2);
/// assert_eq!(collection.item(2).unwrap().name(), "Method");
/// assert_eq!(collection.item("Stages").unwrap().name(), "Stages");
/// assert!(collection.item(0).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParameterCollection {
    name: String,
    description: String,
    items: Vec<Box<dyn CapeParameter>>,
    notifier: Notifier<CollectionEvent>,
}

impl ParameterCollection {
    /// Create an empty, unnamed collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection with a name and description
    pub fn named(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        let old = std::mem::replace(&mut self.name, name.to_string());
        self.notifier.emit(&CollectionEvent::NameChanged {
            old,
            new: self.name.clone(),
        });
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: &str) {
        let old = std::mem::replace(&mut self.description, description.to_string());
        self.notifier.emit(&CollectionEvent::DescriptionChanged {
            old,
            new: self.description.clone(),
        });
    }

    /// Number of parameters
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a parameter
    ///
    /// Fires `AddingNew` before and `ListChanged` after the insertion.
    pub fn add<P: CapeParameter + 'static>(&mut self, parameter: P) {
        self.add_boxed(Box::new(parameter));
    }

    /// Append an already boxed parameter
    pub fn add_boxed(&mut self, parameter: Box<dyn CapeParameter>) {
        self.notifier.emit(&CollectionEvent::AddingNew {
            name: parameter.name().to_string(),
        });

        self.items.push(parameter);
        let position = self.items.len();
        debug!(collection = %self.name, position, "parameter added");

        self.notifier
            .emit(&CollectionEvent::ListChanged(ListChange::ItemAdded { position }));
    }

    /// 0-based index of the item addressed by `key`
    fn index_of(&self, key: &ItemKey) -> Result<usize, ParameterError> {
        let index = match key {
            ItemKey::Position(position) => usize::try_from(*position)
                .ok()
                .filter(|position| (1..=self.items.len()).contains(position))
                .map(|position| position - 1),
            ItemKey::Name(name) => self.items.iter().position(|item| item.name() == name),
        };

        index.ok_or_else(|| ParameterError::NotFound {
            key: key.to_string(),
        })
    }

    /// Look up a parameter by 1-based position or by name
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NotFound`] for a position outside `1..=count()`
    /// or a name no parameter has.
    pub fn item(&self, key: impl Into<ItemKey>) -> Result<&dyn CapeParameter, ParameterError> {
        let index = self.index_of(&key.into())?;
        Ok(self.items[index].as_ref())
    }

    /// Look up a parameter for mutation by 1-based position or by name
    pub fn item_mut(
        &mut self,
        key: impl Into<ItemKey>,
    ) -> Result<&mut (dyn CapeParameter + 'static), ParameterError> {
        let index = self.index_of(&key.into())?;
        Ok(self.items[index].as_mut())
    }

    /// Remove and return a parameter
    ///
    /// Fires `ListChanged` with the position the parameter had.
    pub fn remove(
        &mut self,
        key: impl Into<ItemKey>,
    ) -> Result<Box<dyn CapeParameter>, ParameterError> {
        let index = self.index_of(&key.into())?;
        let removed = self.items.remove(index);
        debug!(collection = %self.name, parameter = removed.name(), "parameter removed");

        self.notifier
            .emit(&CollectionEvent::ListChanged(ListChange::ItemRemoved {
                position: index + 1,
                name: removed.name().to_string(),
            }));
        Ok(removed)
    }

    /// Drop every parameter
    pub fn clear(&mut self) {
        self.items.clear();
        debug!(collection = %self.name, "collection cleared");
        self.notifier
            .emit(&CollectionEvent::ListChanged(ListChange::Reset));
    }

    pub fn iter(&self) -> slice::Iter<'_, Box<dyn CapeParameter>> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Box<dyn CapeParameter>> {
        self.items.iter_mut()
    }

    /// Parameter names, in order
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name()).collect()
    }

    /// 1-based position of the first parameter called `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.name() == name)
            .map(|index| index + 1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Validate every parameter in order, stopping at the first failure
    ///
    /// # Returns
    ///
    /// The failing parameter's outcome message, or `"Object is valid."` when
    /// every parameter validated.
    pub fn validate_all(&mut self) -> Validation {
        for item in &mut self.items {
            let outcome = item.validate();
            if !outcome.is_valid() {
                debug!(collection = %self.name, parameter = item.name(), "validation stopped");
                return Validation::invalid(outcome.message());
            }
        }
        Validation::with_message(true, messages::OBJECT_VALID)
    }

    /// Reset every parameter to its default
    pub fn reset_all(&mut self) {
        for item in &mut self.items {
            item.reset();
        }
    }

    /// Register a listener for one kind of collection event
    pub fn subscribe(
        &mut self,
        kind: CollectionEventKind,
        listener: Listener<CollectionEvent>,
    ) -> SubscriptionId {
        self.notifier.subscribe(kind, listener)
    }

    /// Register a listener for every collection event
    pub fn subscribe_all(&mut self, listener: Listener<CollectionEvent>) -> SubscriptionId {
        self.notifier.subscribe_all(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}

impl<'a> IntoIterator for &'a ParameterCollection {
    type Item = &'a Box<dyn CapeParameter>;
    type IntoIter = slice::Iter<'a, Box<dyn CapeParameter>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
