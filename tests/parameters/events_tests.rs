use capeparam_rs::parameters::{
    messages, Adapter, CapeParameter, ParamValue, Parameter, ParameterEvent, ParameterEventKind,
    ValidationStatus,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::test_helpers::record;

#[test]
fn test_validated_fires_even_when_unchanged() {
    let mut stages = Parameter::integer("Stages", 5, 1, 100);
    let events = record(&mut stages);

    stages.validate();
    stages.validate();

    let expected = ParameterEvent::Validated {
        name: "Stages".to_string(),
        old_status: ValidationStatus::Valid,
        new_status: ValidationStatus::Valid,
        message: messages::VALID.to_string(),
    };
    assert_eq!(*events.borrow(), vec![expected.clone(), expected]);
}

#[test]
fn test_validated_carries_transition() {
    let mut stages = Parameter::integer("Stages", 5, 1, 100);
    stages.set_value(ParamValue::Int(0)).unwrap();
    let events = record(&mut stages);

    stages.validate();

    assert_eq!(
        events.borrow()[0],
        ParameterEvent::Validated {
            name: "Stages".to_string(),
            old_status: ValidationStatus::Valid,
            new_status: ValidationStatus::Invalid,
            message: messages::BELOW_LOWER_BOUND.to_string(),
        }
    );
}

#[test]
fn test_reset_does_not_revalidate() {
    let mut stages = Parameter::integer("Stages", 5, 1, 100);
    stages.set_value(ParamValue::Int(500)).unwrap();
    stages.validate();
    let events = record(&mut stages);

    stages.reset();

    assert_eq!(
        *events.borrow(),
        vec![ParameterEvent::Reset {
            name: "Stages".to_string(),
        }]
    );
    assert_eq!(stages.validation_status(), ValidationStatus::Invalid);
}

#[test]
fn test_filtered_subscription() {
    let mut ratio = Parameter::real("Ratio", 0.5, 0.0, 1.0);
    let values = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&values);
    ratio.subscribe(
        ParameterEventKind::ValueChanged,
        Box::new(move |event| {
            if let ParameterEvent::ValueChanged { new, .. } = event {
                sink.borrow_mut().push(new.clone());
            }
        }),
    );

    ratio.set_value(ParamValue::Real(0.1)).unwrap();
    ratio.validate();
    ratio.set_value(ParamValue::Real(0.2)).unwrap();
    ratio.reset();

    assert_eq!(*values.borrow(), vec![ParamValue::Real(0.1), ParamValue::Real(0.2)]);
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let mut flag = Parameter::boolean("Flag", false);
    let count = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&count);
    let id = flag.subscribe_all(Box::new(move |_| *counter.borrow_mut() += 1));

    flag.set_value(ParamValue::Bool(true)).unwrap();
    assert!(flag.unsubscribe(id));
    flag.set_value(ParamValue::Bool(false)).unwrap();

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_listeners_run_in_registration_order() {
    let mut flag = Parameter::boolean("Flag", false);
    let order = Rc::new(RefCell::new(Vec::new()));
    for label in ["first", "second", "third"] {
        let sink = Rc::clone(&order);
        flag.subscribe(ParameterEventKind::Reset, Box::new(move |_| sink.borrow_mut().push(label)));
    }

    flag.reset();
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn test_adapter_listeners_observe_updated_delegate() {
    let owned = Rc::new(RefCell::new(Parameter::integer("Stages", 5, 1, 100)));
    let mut adapter = Adapter::new(Rc::clone(&owned));

    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    let delegate = Rc::clone(&owned);
    adapter.subscribe(
        ParameterEventKind::ValueChanged,
        Box::new(move |_| {
            *sink.borrow_mut() = Some(delegate.borrow().value().clone());
        }),
    );

    adapter.set_value(ParamValue::Int(12)).unwrap();
    assert_eq!(*seen.borrow(), Some(ParamValue::Int(12)));
}

#[test]
fn test_delegate_and_adapter_listeners_are_separate() {
    let owned = Rc::new(RefCell::new(Parameter::integer("Stages", 5, 1, 100)));
    let delegate_events = record(&mut *owned.borrow_mut());

    let mut adapter = Adapter::new(Rc::clone(&owned));
    let adapter_events = record(&mut adapter);

    adapter.set_value(ParamValue::Int(6)).unwrap();

    assert_eq!(delegate_events.borrow().len(), 1);
    assert_eq!(*delegate_events.borrow(), *adapter_events.borrow());
}
