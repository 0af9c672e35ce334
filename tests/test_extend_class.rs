extern crate veneer;

use veneer::ds::error::ExtendError;
use veneer::ds::object::Object;
use veneer::ds::value::Value;
use veneer::extend::class::{extend_class, ClassDef};
use veneer::extend::resolver::{Priority, Resolver};
use veneer::extend::source::Source;
use veneer::extend::view::extend_object;

/// Helper class: the constructor doubles its first argument into
/// `value_test` and seeds `some_property` with 7.
fn sample_class() -> ClassDef {
    ClassDef::new("Sample", |args| {
        let val = args.first().and_then(Value::as_int).unwrap_or(0);
        Ok(Object::new()
            .with_field("value_test", val * 2)
            .with_field("some_property", 7)
            .into_ref())
    })
}

/// Helper source: `method1` computes `some_property * 3` off its receiver.
fn triple_source() -> Source {
    Source::labelled("triple").with_method("method1", |this, _args| {
        let some = this.get("some_property")?.as_int().unwrap_or(0);
        Ok(Value::from(some * 3))
    })
}

// ── Construction tests ───────────────────────────────────────────────────

#[test]
fn test_class_constructor_runs_unmodified() {
    let class = sample_class();
    let instance = class.construct(vec![Value::from(5)]).unwrap();

    assert_eq!(
        (*instance).borrow().get_own("value_test"),
        Some(Value::from(10))
    );
    assert_eq!(
        (*instance).borrow().get_own("some_property"),
        Some(Value::from(7))
    );
}

#[test]
fn test_extended_class_keeps_construction_signature() {
    let extended = extend_class(sample_class(), Resolver::new(triple_source()));
    assert_eq!(extended.class().name(), "Sample");

    let instance = extended.construct(vec![Value::from(3)]).unwrap();

    assert_eq!(instance.get("value_test").unwrap(), Value::from(6));
}

#[test]
fn test_extended_instance_resolves_extension_methods() {
    let extended = extend_class(sample_class(), Resolver::new(triple_source()));
    let instance = extended.construct(vec![Value::from(3)]).unwrap();

    assert_eq!(
        instance.invoke("method1", Vec::new()).unwrap(),
        Value::from(21)
    );
}

#[test]
fn test_each_construction_yields_a_fresh_instance() {
    let extended = extend_class(sample_class(), Resolver::new(triple_source()));
    let first = extended.construct(vec![Value::from(1)]).unwrap();
    let second = extended.construct(vec![Value::from(2)]).unwrap();

    first.set("value_test", 100);

    assert_eq!(first.get("value_test").unwrap(), Value::from(100));
    assert_eq!(second.get("value_test").unwrap(), Value::from(4));
}

#[test]
fn test_extended_instance_behaves_like_extend() {
    // The same resolver applied through extend_class and through a plain
    // wrap of a manually constructed instance must be indistinguishable.
    let resolver = Resolver::new(triple_source());
    let extended = extend_class(sample_class(), resolver.clone());

    let via_class = extended.construct(vec![Value::from(3)]).unwrap();
    let raw = sample_class().construct(vec![Value::from(3)]).unwrap();
    let via_extend = extend_object(raw, resolver);

    assert_eq!(
        via_class.get("value_test").unwrap(),
        via_extend.get("value_test").unwrap()
    );
    assert_eq!(
        via_class.invoke("method1", Vec::new()).unwrap(),
        via_extend.invoke("method1", Vec::new()).unwrap()
    );
}

// ── Error propagation tests ──────────────────────────────────────────────

#[test]
fn test_constructor_error_propagates_unwrapped() {
    let failing = ClassDef::new("Failing", |args| {
        if args.is_empty() {
            Err(ExtendError::InvalidArgument("missing argument".to_string()))
        } else {
            Ok(Object::new().into_ref())
        }
    });
    let extended = extend_class(failing, Resolver::new(Source::labelled("ext")));

    let err = extended.construct(Vec::new()).unwrap_err();
    assert_eq!(
        err,
        ExtendError::InvalidArgument("missing argument".to_string())
    );

    assert!(extended.construct(vec![Value::from(1)]).is_ok());
}

// ── Priority through class extension ─────────────────────────────────────

#[test]
fn test_extender_priority_shadows_instance_fields() {
    let resolver = Resolver::builder()
        .source(Source::labelled("override").with_value("some_property", 99))
        .priority(Priority::Extender)
        .build();
    let extended = extend_class(sample_class(), resolver);
    let instance = extended.construct(vec![Value::from(3)]).unwrap();

    assert_eq!(instance.get("some_property").unwrap(), Value::from(99));
    // Construction still ran the original logic underneath.
    assert_eq!(instance.get("value_test").unwrap(), Value::from(6));
}
