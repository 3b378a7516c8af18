use capeparam_rs::parameters::{
    messages, Adapter, CapeParameter, CollectionEvent, CollectionEventKind, ItemKey, ListChange,
    ParamValue, Parameter, ParameterCollection, ParameterError, ValidationStatus,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::test_helpers::record_collection;

fn abc() -> ParameterCollection {
    let mut collection = ParameterCollection::named("Unit", "Unit operation parameters");
    collection.add(Parameter::integer("A", 1, 0, 10));
    collection.add(Parameter::real("B", 2.0, 0.0, 10.0));
    collection.add(Parameter::option("C", "x", ["x", "y"], true));
    collection
}

#[test]
fn test_abc_scenario() {
    let collection = abc();
    assert_eq!(collection.count(), 3);
    assert_eq!(collection.item(2).unwrap().name(), "B");
    assert_eq!(collection.item("C").unwrap().value(), ParamValue::from("x"));
    assert_eq!(collection.position("C"), Some(3));
}

#[test]
fn test_items_are_in_insertion_order() {
    let collection = abc();
    for (index, name) in ["A", "B", "C"].iter().enumerate() {
        assert_eq!(collection.item(index + 1).unwrap().name(), *name);
    }
    assert_eq!(collection.names(), vec!["A", "B", "C"]);

    let kinds: Vec<_> = collection.iter().map(|item| item.kind().to_string()).collect();
    assert_eq!(kinds, vec!["integer", "real", "option"]);
}

#[test]
fn test_lookup_failures() {
    let collection = abc();
    for key in [ItemKey::Position(0), ItemKey::Position(4), ItemKey::from("unknown")] {
        let err = collection.item(key.clone()).unwrap_err();
        assert_eq!(err, ParameterError::NotFound { key: key.to_string() });
    }
    assert_eq!(
        collection.item(4).unwrap_err().to_string(),
        "Item 4 not found."
    );
}

#[test]
fn test_add_fires_adding_new_then_list_changed() {
    let mut collection = abc();
    let events = record_collection(&mut collection);

    collection.add(Parameter::boolean("D", false));

    assert_eq!(
        *events.borrow(),
        vec![
            CollectionEvent::AddingNew {
                name: "D".to_string(),
            },
            CollectionEvent::ListChanged(ListChange::ItemAdded { position: 4 }),
        ]
    );
}

#[test]
fn test_remove_and_clear_fire_list_changed() {
    let mut collection = abc();
    let positions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&positions);
    collection.subscribe(
        CollectionEventKind::ListChanged,
        Box::new(move |event| {
            if let CollectionEvent::ListChanged(change) = event {
                sink.borrow_mut().push(change.clone());
            }
        }),
    );

    collection.remove(2).unwrap();
    assert!(collection.remove("B").is_err());
    collection.clear();

    assert_eq!(
        *positions.borrow(),
        vec![
            ListChange::ItemRemoved {
                position: 2,
                name: "B".to_string(),
            },
            ListChange::Reset,
        ]
    );
    assert_eq!(collection.count(), 0);
}

#[test]
fn test_collection_identity_events() {
    let mut collection = abc();
    let events = record_collection(&mut collection);

    collection.set_name("Flash");
    collection.set_description("Flash drum");

    assert_eq!(collection.name(), "Flash");
    assert_eq!(
        *events.borrow(),
        vec![
            CollectionEvent::NameChanged {
                old: "Unit".to_string(),
                new: "Flash".to_string(),
            },
            CollectionEvent::DescriptionChanged {
                old: "Unit operation parameters".to_string(),
                new: "Flash drum".to_string(),
            },
        ]
    );
}

#[test]
fn test_clone_is_deep_for_owned_parameters() {
    let original = abc();
    let mut copy = original.clone();

    copy.item_mut("A").unwrap().set_value(ParamValue::Int(9)).unwrap();
    copy.set_name("Copy");

    assert_eq!(original.item("A").unwrap().value(), ParamValue::Int(1));
    assert_eq!(original.name(), "Unit");
    assert_eq!(copy.names(), original.names());
}

#[test]
fn test_clone_does_not_inherit_listeners() {
    let mut original = abc();
    let events = record_collection(&mut original);

    let mut copy = original.clone();
    copy.add(Parameter::boolean("D", true));
    assert!(events.borrow().is_empty());
}

#[test]
fn test_mixed_owned_and_adapted() {
    let external = Rc::new(RefCell::new(Parameter::integer("Stages", 5, 1, 100)));
    let mut collection = abc();
    collection.add(Adapter::new(Rc::clone(&external)));

    external.borrow_mut().set_value(ParamValue::Int(200)).unwrap();
    let outcome = collection.validate_all();
    assert!(!outcome.is_valid());
    assert_eq!(outcome.message(), messages::ABOVE_UPPER_BOUND);
    assert_eq!(external.borrow().validation_status(), ValidationStatus::Invalid);

    collection.reset_all();
    assert_eq!(collection.item("Stages").unwrap().value(), ParamValue::Int(5));
    assert_eq!(collection.validate_all().message(), messages::OBJECT_VALID);
}

#[test]
fn test_validate_all_stops_at_first_failure() {
    let mut collection = abc();
    collection.item_mut(1).unwrap().set_value(ParamValue::Int(-1)).unwrap();
    collection.item_mut(2).unwrap().set_value(ParamValue::Real(11.0)).unwrap();

    let outcome = collection.validate_all();
    assert_eq!(outcome.message(), messages::BELOW_LOWER_BOUND);
    assert_eq!(collection.item(1).unwrap().validation_status(), ValidationStatus::Invalid);
    // Seeded by the constructor and not re-validated
    assert_eq!(collection.item(2).unwrap().validation_status(), ValidationStatus::Valid);
}

#[test]
fn test_iter_mut() {
    let mut collection = abc();
    for item in collection.iter_mut() {
        item.set_description("edited");
    }
    assert!((&collection).into_iter().all(|item| item.description() == "edited"));
}
