use capeparam_rs::config::ParameterConfig;
use capeparam_rs::parameters::{
    messages, ArraySpec, BooleanSpec, CapeParameter, IntegerSpec, KindSpec, OptionSpec, ParamMode,
    ParamValue, Parameter, ParameterError, ParameterEvent, ParameterKind, RealSpec,
    ValidationStatus,
};
use approx::assert_relative_eq;

use crate::test_helpers::record;

#[test]
fn test_stages_scenario() {
    let mut stages = Parameter::with_spec(
        "Stages",
        "Number of equilibrium stages",
        ParamValue::Int(5),
        IntegerSpec::new(5, 1, 100),
        ParamMode::InputOutput,
    );
    assert_eq!(stages.kind(), ParameterKind::Integer);
    assert_eq!(stages.default_value(), ParamValue::Int(5));

    assert_eq!(stages.validate().into_parts(), (true, "Value is valid.".to_string()));

    stages.set_value(ParamValue::Int(0)).unwrap();
    assert_eq!(
        stages.validate().into_parts(),
        (false, "Value below the Lower Bound.".to_string())
    );

    stages.reset();
    assert_eq!(stages.value(), &ParamValue::Int(5));
}

#[test]
fn test_method_scenario() {
    let mut method = Parameter::option("Method", "TP", ["TP", "PH", "TV"], true);

    let result = method.set_value(ParamValue::from("XX"));
    assert!(matches!(result, Err(ParameterError::InvalidValue { .. })));
    assert_eq!(method.value(), &ParamValue::from("TP"));

    method.set_value(ParamValue::from("PH")).unwrap();
    assert_eq!(method.value(), &ParamValue::from("PH"));
}

#[test]
fn test_unrestricted_option_accepts_anything() {
    let mut method = Parameter::option("Method", "TP", ["TP", "PH", "TV"], false);
    method.set_value(ParamValue::from("XX")).unwrap();
    assert!(method.validate().is_valid());

    // Restricting afterwards makes the stored value invalid
    method.set_restricted_to_list(true).unwrap();
    assert_eq!(method.validate().message(), messages::NOT_IN_OPTION_LIST);
}

#[test]
fn test_reset_restores_default_for_every_kind() {
    let mut parameters = vec![
        Parameter::boolean("Flag", true),
        Parameter::integer("Count", 3, 0, 10),
        Parameter::real("Ratio", 0.25, 0.0, 1.0),
        Parameter::option("Phase", "Vapour", ["Vapour", "Liquid"], true),
        Parameter::array("Fractions", ArraySpec::uniform(RealSpec::new(0.5, 0.0, 1.0), 2)),
    ];
    let replacements = vec![
        ParamValue::Bool(false),
        ParamValue::Int(7),
        ParamValue::Real(0.75),
        ParamValue::from("Liquid"),
        ParamValue::Array(vec![ParamValue::Real(0.1), ParamValue::Real(0.9)]),
    ];

    for (parameter, replacement) in parameters.iter_mut().zip(replacements) {
        parameter.set_value(replacement.clone()).unwrap();
        assert_eq!(parameter.value(), &replacement);

        parameter.reset();
        assert_eq!(parameter.value(), &parameter.default_value());
    }
}

#[test]
fn test_clone_is_independent() {
    let mut original = Parameter::with_spec(
        "Pressure",
        "Operating pressure",
        ParamValue::Real(2.0e5),
        RealSpec::new(101325.0, 0.0, 1.0e7).with_unit("Pa"),
        ParamMode::Input,
    );
    let mut copy = original.clone();

    assert_eq!(copy.name(), original.name());
    assert_eq!(copy.description(), original.description());
    assert_eq!(copy.mode(), original.mode());
    assert_eq!(copy.value(), original.value());
    assert_eq!(copy.specification(), original.specification());
    assert_eq!(copy.validation_status(), original.validation_status());
    assert_eq!(copy.unit(), Some("Pa"));

    copy.set_value(ParamValue::Real(1.0)).unwrap();
    copy.set_upper_bound(ParamValue::Real(5.0)).unwrap();
    assert_relative_eq!(original.value().as_real().unwrap(), 2.0e5);
    assert_eq!(original.upper_bound(), Some(ParamValue::Real(1.0e7)));

    original.set_name("Inlet pressure");
    assert_eq!(copy.name(), "Pressure");
}

#[test]
fn test_clone_does_not_inherit_listeners() {
    let mut original = Parameter::boolean("Flag", false);
    let events = record(&mut original);

    let mut copy = original.clone();
    copy.set_value(ParamValue::Bool(true)).unwrap();
    assert!(events.borrow().is_empty());

    original.set_value(ParamValue::Bool(true)).unwrap();
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn test_identity_and_mode_events() {
    let mut stages = Parameter::integer("Stages", 5, 1, 100);
    let events = record(&mut stages);

    stages.set_name("Trays");
    stages.set_description("Number of trays");
    stages.set_mode(ParamMode::Output).unwrap();

    assert_eq!(
        *events.borrow(),
        vec![
            ParameterEvent::NameChanged {
                old: "Stages".to_string(),
                new: "Trays".to_string(),
            },
            ParameterEvent::DescriptionChanged {
                name: "Trays".to_string(),
                old: String::new(),
                new: "Number of trays".to_string(),
            },
            ParameterEvent::ModeChanged {
                name: "Trays".to_string(),
                old: ParamMode::InputOutput,
                new: ParamMode::Output,
            },
        ]
    );
}

#[test]
fn test_specification_mutators_fire_events() {
    let mut method = Parameter::option("Method", "TP", ["TP", "PH"], true);
    let events = record(&mut method);

    method.set_option_list(["TP", "PH", "TV"]).unwrap();
    method.set_restricted_to_list(false).unwrap();
    method.set_default_value(ParamValue::from("TV")).unwrap();

    let events = events.borrow();
    assert_eq!(events.len(), 3);
    assert_eq!(
        events[0],
        ParameterEvent::OptionListChanged {
            name: "Method".to_string(),
            old: vec!["TP".to_string(), "PH".to_string()],
            new: vec!["TP".to_string(), "PH".to_string(), "TV".to_string()],
        }
    );
    assert_eq!(
        events[1],
        ParameterEvent::RestrictedToListChanged {
            name: "Method".to_string(),
            old: true,
            new: false,
        }
    );
    assert!(matches!(events[2], ParameterEvent::DefaultValueChanged { .. }));
}

#[test]
fn test_numeric_default_may_lie_outside_bounds() {
    let mut count = Parameter::integer("Count", 3, 0, 10);
    count.set_default_value(ParamValue::Int(20)).unwrap();
    count.reset();
    assert_eq!(count.validate().message(), messages::ABOVE_UPPER_BOUND);

    let strict = ParameterConfig::default().with_reject_out_of_bounds(true);
    let mut count = Parameter::integer("Count", 3, 0, 10).with_config(strict);
    assert!(count.set_default_value(ParamValue::Int(20)).is_err());
}

#[test]
fn test_validate_value_does_not_touch_state() {
    let mut ratio = Parameter::real("Ratio", 0.5, 0.0, 1.0);
    let events = record(&mut ratio);

    let outcome = ratio.validate_value(&ParamValue::Real(2.0));
    assert_eq!(outcome.message(), messages::ABOVE_UPPER_BOUND);
    assert_eq!(ratio.validation_status(), ValidationStatus::Valid);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_array_validation_messages() {
    let spec = ArraySpec::new(vec![
        KindSpec::from(IntegerSpec::new(1, 0, 5)),
        KindSpec::from(OptionSpec::new("A", ["A", "B"], false)),
        KindSpec::from(BooleanSpec::new(true)),
    ]);
    let mut mixed = Parameter::array("Mixed", spec);
    assert_eq!(
        mixed.value(),
        &ParamValue::Array(vec![ParamValue::Int(1), ParamValue::from("A"), ParamValue::Bool(true)])
    );

    mixed
        .set_value(ParamValue::Array(vec![
            ParamValue::Real(9.0),
            ParamValue::from("Z"),
            ParamValue::Int(0),
        ]))
        .unwrap();
    assert_eq!(
        mixed.value(),
        &ParamValue::Array(vec![ParamValue::Int(9), ParamValue::from("Z"), ParamValue::Bool(false)])
    );

    let outcome = mixed.validate();
    assert!(!outcome.is_valid());
    assert_eq!(outcome.messages().len(), 3);
    assert_eq!(outcome.messages()[0], messages::ABOVE_UPPER_BOUND);

    let err = mixed.set_value(ParamValue::Array(vec![ParamValue::Int(1)])).unwrap_err();
    assert_eq!(
        err,
        ParameterError::InvalidValue {
            name: "Mixed".to_string(),
            message: messages::ARRAY_SIZE_MISMATCH.to_string(),
        }
    );
}

#[test]
fn test_text_entry() {
    let mut flag = Parameter::boolean("Flag", false);
    flag.set_value_text("TRUE").unwrap();
    assert_eq!(flag.value(), &ParamValue::Bool(true));

    let mut grid = Parameter::array(
        "Grid",
        ArraySpec::uniform(ArraySpec::uniform(IntegerSpec::unbounded(0), 2), 2),
    );
    grid.set_value_text("[[1, 2], [3, 4]]").unwrap();
    assert_eq!(grid.value().to_string(), "[[1, 2], [3, 4]]");

    let err = grid.set_value_text("[[1, 2]]").unwrap_err();
    assert!(matches!(err, ParameterError::Parse(_)));
    assert_eq!(grid.value().to_string(), "[[1, 2], [3, 4]]");
}

#[test]
fn test_not_a_number() {
    let mut ratio = Parameter::real("Ratio", 0.5, f64::NEG_INFINITY, f64::INFINITY);
    ratio.set_value(ParamValue::Real(f64::NAN)).unwrap();
    assert_eq!(ratio.validate().message(), messages::NOT_A_NUMBER);
}

#[test]
fn test_failed_initialisation() {
    let result = Parameter::try_with_spec(
        "Method",
        "",
        ParamValue::from("XX"),
        OptionSpec::new("TP", ["TP", "PH"], true),
        ParamMode::Input,
    );
    assert!(matches!(result, Err(ParameterError::FailedInitialisation { .. })));

    let method = Parameter::with_spec(
        "Method",
        "",
        ParamValue::from("XX"),
        OptionSpec::new("TP", ["TP", "PH"], true),
        ParamMode::Input,
    );
    assert_eq!(method.validation_status(), ValidationStatus::Invalid);
    assert_eq!(method.value(), &ParamValue::from("XX"));
}

#[test]
fn test_trait_object_view_matches_inherent_view() {
    let stages = Parameter::integer("Stages", 5, 1, 100);
    let view: &dyn CapeParameter = &stages;

    assert_eq!(view.value(), stages.value().clone());
    assert_eq!(view.lower_bound(), Some(ParamValue::Int(1)));
    assert_eq!(view.option_list(), None);
    assert_eq!(view.restricted_to_list(), None);
    assert!(format!("{:?}", view).contains("Stages"));
}
