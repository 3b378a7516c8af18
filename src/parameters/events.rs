//! Change notifications for parameters and collections
//!
//! Listeners are registered on a [`Notifier`] either for one event kind or for
//! all events. Events are delivered synchronously, in registration order, before
//! the mutating call returns, and always describe the already-updated state.

use std::fmt;

use tracing::trace;

use crate::parameters::status::ValidationStatus;
use crate::parameters::value::{ParamMode, ParamValue};

/// An event that can be dispatched by a [`Notifier`]
pub trait Event {
    /// Discriminant used to subscribe to a single kind of event
    type Kind: Copy + PartialEq + fmt::Debug;

    /// The discriminant of this event
    fn kind(&self) -> Self::Kind;
}

/// A change to a single parameter
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterEvent {
    NameChanged {
        old: String,
        new: String,
    },
    DescriptionChanged {
        name: String,
        old: String,
        new: String,
    },
    ModeChanged {
        name: String,
        old: ParamMode,
        new: ParamMode,
    },
    ValueChanged {
        name: String,
        old: ParamValue,
        new: ParamValue,
    },
    DefaultValueChanged {
        name: String,
        old: ParamValue,
        new: ParamValue,
    },
    LowerBoundChanged {
        name: String,
        old: ParamValue,
        new: ParamValue,
    },
    UpperBoundChanged {
        name: String,
        old: ParamValue,
        new: ParamValue,
    },
    OptionListChanged {
        name: String,
        old: Vec<String>,
        new: Vec<String>,
    },
    RestrictedToListChanged {
        name: String,
        old: bool,
        new: bool,
    },
    /// The value was restored to the default
    Reset { name: String },
    /// `validate()` ran; fired even when the status did not change
    Validated {
        name: String,
        old_status: ValidationStatus,
        new_status: ValidationStatus,
        message: String,
    },
}

/// Discriminant of [`ParameterEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterEventKind {
    NameChanged,
    DescriptionChanged,
    ModeChanged,
    ValueChanged,
    DefaultValueChanged,
    LowerBoundChanged,
    UpperBoundChanged,
    OptionListChanged,
    RestrictedToListChanged,
    Reset,
    Validated,
}

impl Event for ParameterEvent {
    type Kind = ParameterEventKind;

    fn kind(&self) -> ParameterEventKind {
        match self {
            Self::NameChanged { .. } => ParameterEventKind::NameChanged,
            Self::DescriptionChanged { .. } => ParameterEventKind::DescriptionChanged,
            Self::ModeChanged { .. } => ParameterEventKind::ModeChanged,
            Self::ValueChanged { .. } => ParameterEventKind::ValueChanged,
            Self::DefaultValueChanged { .. } => ParameterEventKind::DefaultValueChanged,
            Self::LowerBoundChanged { .. } => ParameterEventKind::LowerBoundChanged,
            Self::UpperBoundChanged { .. } => ParameterEventKind::UpperBoundChanged,
            Self::OptionListChanged { .. } => ParameterEventKind::OptionListChanged,
            Self::RestrictedToListChanged { .. } => ParameterEventKind::RestrictedToListChanged,
            Self::Reset { .. } => ParameterEventKind::Reset,
            Self::Validated { .. } => ParameterEventKind::Validated,
        }
    }
}

/// How the list of a collection changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListChange {
    /// A parameter was appended at the given 1-based position
    ItemAdded { position: usize },

    /// The parameter at the given 1-based position was removed
    ItemRemoved { position: usize, name: String },

    /// The whole list was replaced or cleared
    Reset,
}

/// A change to a parameter collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionEvent {
    NameChanged { old: String, new: String },
    DescriptionChanged { old: String, new: String },
    /// A parameter is about to be added
    AddingNew { name: String },
    /// The list changed
    ListChanged(ListChange),
}

/// Discriminant of [`CollectionEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionEventKind {
    NameChanged,
    DescriptionChanged,
    AddingNew,
    ListChanged,
}

impl Event for CollectionEvent {
    type Kind = CollectionEventKind;

    fn kind(&self) -> CollectionEventKind {
        match self {
            Self::NameChanged { .. } => CollectionEventKind::NameChanged,
            Self::DescriptionChanged { .. } => CollectionEventKind::DescriptionChanged,
            Self::AddingNew { .. } => CollectionEventKind::AddingNew,
            Self::ListChanged(_) => CollectionEventKind::ListChanged,
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// A registered callback
pub type Listener<E> = Box<dyn FnMut(&E)>;

struct Subscription<E: Event> {
    id: SubscriptionId,
    kind: Option<E::Kind>,
    listener: Listener<E>,
}

/// Synchronous event dispatcher
///
/// Cloning a notifier yields an empty one: copies of a parameter or collection
/// never inherit the listeners of the original.
pub struct Notifier<E: Event> {
    next_id: u64,
    subscriptions: Vec<Subscription<E>>,
}

impl<E: Event> Notifier<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            subscriptions: Vec::new(),
        }
    }

    /// Register a listener for one kind of event
    pub fn subscribe(&mut self, kind: E::Kind, listener: Listener<E>) -> SubscriptionId {
        self.register(Some(kind), listener)
    }

    /// Register a listener for every event
    pub fn subscribe_all(&mut self, listener: Listener<E>) -> SubscriptionId {
        self.register(None, listener)
    }

    fn register(&mut self, kind: Option<E::Kind>, listener: Listener<E>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, kind, listener });
        id
    }

    /// Remove a listener
    ///
    /// Returns `false` if the id was not registered here.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|subscription| subscription.id != id);
        self.subscriptions.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Deliver an event to every matching listener, in registration order
    pub fn emit(&mut self, event: &E) {
        let kind = event.kind();
        let mut delivered = 0usize;

        for subscription in &mut self.subscriptions {
            if subscription.kind.map_or(true, |wanted| wanted == kind) {
                (subscription.listener)(event);
                delivered += 1;
            }
        }

        trace!(event = ?kind, listeners = delivered, "event dispatched");
    }
}

impl<E: Event> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> Clone for Notifier<E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<E: Event> fmt::Debug for Notifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.subscriptions.len())
            .finish()
    }
}
