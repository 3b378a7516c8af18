//! Delegating parameter adapter
//!
//! An [`Adapter`] presents the [`CapeParameter`] contract for a parameter owned
//! somewhere else. It stores no value or specification of its own: every read and
//! write is forwarded to a shared delegate, and the adapter fires the same events
//! an owned [`Parameter`] would, built from the delegate's state after each
//! operation.
//!
//! Delegates only have to provide the core capability set (value, specification,
//! validation and reset). Mutators for mode, default, bounds and options are
//! optional; when a delegate lacks one, the adapter either ignores the call or
//! reports [`ParameterError::CapabilityUnavailable`], depending on
//! [`ParameterConfig::strict_capabilities`].

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::config::ParameterConfig;
use crate::parameters::events::{
    Listener, Notifier, ParameterEvent, ParameterEventKind, SubscriptionId,
};
use crate::parameters::parameter::{
    conform_for, rejection_message, CapeParameter, Capability, Parameter, ParameterError,
};
use crate::parameters::spec::KindSpec;
use crate::parameters::status::{Validation, ValidationStatus};
use crate::parameters::value::{ParamMode, ParamValue};

/// The capabilities an externally owned parameter offers to an [`Adapter`]
///
/// Only the core operations are required. The optional mutators default to
/// returning [`ParameterError::CapabilityUnavailable`].
pub trait ParameterDelegate {
    fn name(&self) -> String;

    fn description(&self) -> String;

    fn mode(&self) -> ParamMode;

    fn validation_status(&self) -> ValidationStatus;

    fn specification(&self) -> KindSpec;

    fn value(&self) -> ParamValue;

    fn set_value(&mut self, value: ParamValue) -> Result<(), ParameterError>;

    fn validate(&mut self) -> Validation;

    fn reset(&mut self);

    fn set_mode(&mut self, _mode: ParamMode) -> Result<(), ParameterError> {
        Err(unavailable(self, Capability::Mode))
    }

    fn set_default_value(&mut self, _value: ParamValue) -> Result<(), ParameterError> {
        Err(unavailable(self, Capability::DefaultValue))
    }

    fn set_lower_bound(&mut self, _bound: ParamValue) -> Result<(), ParameterError> {
        Err(unavailable(self, Capability::LowerBound))
    }

    fn set_upper_bound(&mut self, _bound: ParamValue) -> Result<(), ParameterError> {
        Err(unavailable(self, Capability::UpperBound))
    }

    fn set_option_list(&mut self, _options: Vec<String>) -> Result<(), ParameterError> {
        Err(unavailable(self, Capability::OptionList))
    }

    fn set_restricted_to_list(&mut self, _restricted: bool) -> Result<(), ParameterError> {
        Err(unavailable(self, Capability::RestrictedToList))
    }
}

fn unavailable<D: ParameterDelegate + ?Sized>(
    delegate: &D,
    capability: Capability,
) -> ParameterError {
    ParameterError::CapabilityUnavailable {
        name: delegate.name(),
        capability,
    }
}

impl ParameterDelegate for Parameter {
    fn name(&self) -> String {
        Parameter::name(self).to_string()
    }

    fn description(&self) -> String {
        Parameter::description(self).to_string()
    }

    fn mode(&self) -> ParamMode {
        Parameter::mode(self)
    }

    fn validation_status(&self) -> ValidationStatus {
        Parameter::validation_status(self)
    }

    fn specification(&self) -> KindSpec {
        Parameter::specification(self).clone()
    }

    fn value(&self) -> ParamValue {
        Parameter::value(self).clone()
    }

    fn set_value(&mut self, value: ParamValue) -> Result<(), ParameterError> {
        Parameter::set_value(self, value)
    }

    fn validate(&mut self) -> Validation {
        Parameter::validate(self)
    }

    fn reset(&mut self) {
        Parameter::reset(self)
    }

    fn set_mode(&mut self, mode: ParamMode) -> Result<(), ParameterError> {
        Parameter::set_mode(self, mode)
    }

    fn set_default_value(&mut self, value: ParamValue) -> Result<(), ParameterError> {
        Parameter::set_default_value(self, value)
    }

    fn set_lower_bound(&mut self, bound: ParamValue) -> Result<(), ParameterError> {
        Parameter::set_lower_bound(self, bound)
    }

    fn set_upper_bound(&mut self, bound: ParamValue) -> Result<(), ParameterError> {
        Parameter::set_upper_bound(self, bound)
    }

    fn set_option_list(&mut self, options: Vec<String>) -> Result<(), ParameterError> {
        Parameter::set_option_list(self, options)
    }

    fn set_restricted_to_list(&mut self, restricted: bool) -> Result<(), ParameterError> {
        Parameter::set_restricted_to_list(self, restricted)
    }
}

/// A parameter forwarding every operation to a shared delegate
///
/// Name and description are the adapter's own identity, seeded from the delegate
/// at construction. Everything else is read from the delegate on demand.
///
/// Cloning is shallow: the clone forwards to the same delegate and shares the
/// stale-status marker, so both observe the same state. Listeners are not cloned.
///
/// # Panics
///
/// Operations panic if the delegate is mutably borrowed elsewhere while they run.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use capeparam_rs::parameters::{Adapter, CapeParameter, Parameter, ParamValue};
///
/// let owned = Rc::new(RefCell::new(Parameter::integer("Stages", 5, 1, 100)));
/// let mut adapter = Adapter::new(Rc::clone(&owned));
///
/// adapter.set_value(ParamValue::Int(8)).unwrap();
/// assert_eq!(owned.borrow().value(), &ParamValue::Int(8));
/// ```
pub struct Adapter<D: ?Sized> {
    delegate: Rc<RefCell<D>>,
    name: String,
    description: String,
    config: ParameterConfig,
    /// Set by mutations under `invalidate_on_change`, shared between clones
    stale: Rc<Cell<bool>>,
    notifier: Notifier<ParameterEvent>,
}

impl<D: ParameterDelegate + ?Sized> Adapter<D> {
    /// Wrap a shared delegate
    pub fn new(delegate: Rc<RefCell<D>>) -> Self {
        let (name, description) = {
            let inner = delegate.borrow();
            (inner.name(), inner.description())
        };

        Self {
            delegate,
            name,
            description,
            config: ParameterConfig::default(),
            stale: Rc::new(Cell::new(false)),
            notifier: Notifier::new(),
        }
    }

    /// Replace the policy configuration
    pub fn with_config(mut self, config: ParameterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ParameterConfig {
        &self.config
    }

    /// The shared delegate
    pub fn delegate(&self) -> &Rc<RefCell<D>> {
        &self.delegate
    }

    /// Whether both adapters forward to the same delegate
    pub fn shares_delegate_with(&self, other: &Adapter<D>) -> bool {
        Rc::ptr_eq(&self.delegate, &other.delegate)
    }

    fn mark_changed(&self) {
        if self.config.invalidate_on_change {
            self.stale.set(true);
        }
    }

    /// Run an optional mutator on the delegate
    ///
    /// Returns the state read before and after the call, or `None` when the
    /// delegate lacks the mutator and the call was ignored.
    fn forward<T>(
        &mut self,
        capability: Capability,
        read: impl Fn(&D) -> T,
        write: impl FnOnce(&mut D) -> Result<(), ParameterError>,
    ) -> Result<Option<(T, T)>, ParameterError> {
        let old = read(&*self.delegate.borrow());
        let result = write(&mut *self.delegate.borrow_mut());

        match result {
            Ok(()) => {
                let new = read(&*self.delegate.borrow());
                Ok(Some((old, new)))
            }
            Err(ParameterError::CapabilityUnavailable { .. })
                if !self.config.strict_capabilities =>
            {
                warn!(
                    parameter = %self.name,
                    %capability,
                    "delegate cannot change this field; call ignored"
                );
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

impl<D: ?Sized> Clone for Adapter<D> {
    fn clone(&self) -> Self {
        Self {
            delegate: Rc::clone(&self.delegate),
            name: self.name.clone(),
            description: self.description.clone(),
            config: self.config,
            stale: Rc::clone(&self.stale),
            notifier: Notifier::new(),
        }
    }
}

impl<D: ?Sized> fmt::Debug for Adapter<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("config", &self.config)
            .field("delegate_refs", &Rc::strong_count(&self.delegate))
            .field("stale", &self.stale.get())
            .field("notifier", &self.notifier)
            .finish()
    }
}

impl<D: ParameterDelegate + ?Sized + 'static> CapeParameter for Adapter<D> {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        let old = std::mem::replace(&mut self.name, name.to_string());
        self.notifier.emit(&ParameterEvent::NameChanged {
            old,
            new: self.name.clone(),
        });
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn set_description(&mut self, description: &str) {
        let old = std::mem::replace(&mut self.description, description.to_string());
        self.notifier.emit(&ParameterEvent::DescriptionChanged {
            name: self.name.clone(),
            old,
            new: self.description.clone(),
        });
    }

    fn mode(&self) -> ParamMode {
        self.delegate.borrow().mode()
    }

    fn set_mode(&mut self, mode: ParamMode) -> Result<(), ParameterError> {
        let changed = self.forward(Capability::Mode, |d| d.mode(), |d| d.set_mode(mode))?;
        if let Some((old, new)) = changed {
            self.notifier.emit(&ParameterEvent::ModeChanged {
                name: self.name.clone(),
                old,
                new,
            });
        }
        Ok(())
    }

    fn specification(&self) -> KindSpec {
        self.delegate.borrow().specification()
    }

    fn value(&self) -> ParamValue {
        self.delegate.borrow().value()
    }

    fn set_value(&mut self, value: ParamValue) -> Result<(), ParameterError> {
        let spec = self.specification();
        let value = conform_for(&self.name, &spec, value)?;
        if let Some(message) = rejection_message(&spec, &self.config, &value) {
            return Err(ParameterError::InvalidValue {
                name: self.name.clone(),
                message,
            });
        }

        let old = self.value();
        self.delegate.borrow_mut().set_value(value)?;
        let new = self.value();
        self.mark_changed();
        debug!(parameter = %self.name, old = %old, new = %new, "delegate value changed");

        self.notifier.emit(&ParameterEvent::ValueChanged {
            name: self.name.clone(),
            old,
            new,
        });
        Ok(())
    }

    fn validation_status(&self) -> ValidationStatus {
        if self.stale.get() {
            ValidationStatus::NotValidated
        } else {
            self.delegate.borrow().validation_status()
        }
    }

    fn validate(&mut self) -> Validation {
        let old_status = self.validation_status();
        let outcome = self.delegate.borrow_mut().validate();
        self.stale.set(false);
        let new_status = self.validation_status();
        debug!(
            parameter = %self.name,
            status = ?new_status,
            message = outcome.message(),
            "delegate validated"
        );

        self.notifier.emit(&ParameterEvent::Validated {
            name: self.name.clone(),
            old_status,
            new_status,
            message: outcome.message().to_string(),
        });
        outcome
    }

    fn reset(&mut self) {
        self.delegate.borrow_mut().reset();
        self.mark_changed();
        debug!(parameter = %self.name, "delegate reset to default");

        self.notifier.emit(&ParameterEvent::Reset {
            name: self.name.clone(),
        });
    }

    fn set_default_value(&mut self, value: ParamValue) -> Result<(), ParameterError> {
        let spec = self.specification();
        let value = conform_for(&self.name, &spec, value)?;
        if let Some(message) = rejection_message(&spec, &self.config, &value) {
            return Err(ParameterError::InvalidValue {
                name: self.name.clone(),
                message,
            });
        }

        let changed = self.forward(
            Capability::DefaultValue,
            |d| d.specification().default_value(),
            |d| d.set_default_value(value),
        )?;

        if let Some((old, new)) = changed {
            self.notifier.emit(&ParameterEvent::DefaultValueChanged {
                name: self.name.clone(),
                old,
                new,
            });
        }
        Ok(())
    }

    fn set_lower_bound(&mut self, bound: ParamValue) -> Result<(), ParameterError> {
        let changed = self.forward(
            Capability::LowerBound,
            |d| d.specification().lower_bound(),
            |d| d.set_lower_bound(bound),
        )?;

        if let Some((Some(old), Some(new))) = changed {
            self.mark_changed();
            self.notifier.emit(&ParameterEvent::LowerBoundChanged {
                name: self.name.clone(),
                old,
                new,
            });
        }
        Ok(())
    }

    fn set_upper_bound(&mut self, bound: ParamValue) -> Result<(), ParameterError> {
        let changed = self.forward(
            Capability::UpperBound,
            |d| d.specification().upper_bound(),
            |d| d.set_upper_bound(bound),
        )?;

        if let Some((Some(old), Some(new))) = changed {
            self.mark_changed();
            self.notifier.emit(&ParameterEvent::UpperBoundChanged {
                name: self.name.clone(),
                old,
                new,
            });
        }
        Ok(())
    }

    fn set_option_list(&mut self, options: Vec<String>) -> Result<(), ParameterError> {
        let changed = self.forward(
            Capability::OptionList,
            |d| d.specification().option_list().map(<[String]>::to_vec),
            |d| d.set_option_list(options),
        )?;

        if let Some((Some(old), Some(new))) = changed {
            self.mark_changed();
            self.notifier.emit(&ParameterEvent::OptionListChanged {
                name: self.name.clone(),
                old,
                new,
            });
        }
        Ok(())
    }

    fn set_restricted_to_list(&mut self, restricted: bool) -> Result<(), ParameterError> {
        let changed = self.forward(
            Capability::RestrictedToList,
            |d| d.specification().restricted_to_list(),
            |d| d.set_restricted_to_list(restricted),
        )?;

        if let Some((Some(old), Some(new))) = changed {
            self.mark_changed();
            self.notifier.emit(&ParameterEvent::RestrictedToListChanged {
                name: self.name.clone(),
                old,
                new,
            });
        }
        Ok(())
    }

    fn subscribe(
        &mut self,
        kind: ParameterEventKind,
        listener: Listener<ParameterEvent>,
    ) -> SubscriptionId {
        self.notifier.subscribe(kind, listener)
    }

    fn subscribe_all(&mut self, listener: Listener<ParameterEvent>) -> SubscriptionId {
        self.notifier.subscribe_all(listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn clone_boxed(&self) -> Box<dyn CapeParameter> {
        Box::new(self.clone())
    }
}
