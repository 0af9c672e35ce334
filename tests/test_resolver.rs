extern crate veneer;

use veneer::ds::object::{Object, ObjectRef};
use veneer::ds::value::Value;
use veneer::extend::resolver::{Priority, Resolver};
use veneer::extend::source::Source;
use veneer::extend::view::extend_object;

/// Helper: a target with one field, behind a shared handle.
fn target_with_field() -> ObjectRef {
    Object::new().with_field("own", "target value").into_ref()
}

// ── Construction and configuration tests ─────────────────────────────────

#[test]
fn test_default_priority_is_object() {
    let resolver = Resolver::new(Source::labelled("ext"));
    assert_eq!(resolver.priority(), Priority::Object);
}

#[test]
fn test_builder_overrides_priority() {
    let resolver = Resolver::builder()
        .source(Source::labelled("ext"))
        .priority(Priority::Extender)
        .build();
    assert_eq!(resolver.priority(), Priority::Extender);
}

#[test]
fn test_single_source_normalized_to_sequence() {
    let resolver = Resolver::new(Source::labelled("only"));
    assert_eq!(resolver.sources().len(), 1);
    assert_eq!(resolver.sources()[0].label(), "only");
}

#[test]
fn test_sources_keep_registration_order() {
    let resolver = Resolver::builder()
        .source(Source::labelled("first"))
        .sources(vec![Source::labelled("second"), Source::labelled("third")])
        .build();
    let labels: Vec<&str> = resolver.sources().iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["first", "second", "third"]);
}

// ── Resolution tests ─────────────────────────────────────────────────────

#[test]
fn test_resolve_prefers_target_by_default() {
    let target = target_with_field();
    let resolver = Resolver::new(Source::labelled("ext").with_value("own", "source value"));
    let view = extend_object(target, resolver);

    assert_eq!(view.get("own").unwrap(), Value::from("target value"));
}

#[test]
fn test_resolve_scans_sources_in_order() {
    let target = Object::new().into_ref();
    let resolver = Resolver::with_sources(vec![
        Source::labelled("a").with_value("x", "ax"),
        Source::labelled("b").with_value("x", "bx").with_value("y", "by"),
        Source::labelled("c").with_value("y", "cy").with_value("z", "cz"),
    ]);
    let view = extend_object(target, resolver);

    assert_eq!(view.get("x").unwrap(), Value::from("ax"));
    assert_eq!(view.get("y").unwrap(), Value::from("by"));
    assert_eq!(view.get("z").unwrap(), Value::from("cz"));
}

#[test]
fn test_knows_ignores_priority() {
    let target = target_with_field();
    for priority in vec![Priority::Object, Priority::Extender] {
        let resolver = Resolver::builder()
            .source(Source::labelled("ext").with_value("extra", 1))
            .priority(priority)
            .build();
        assert!(resolver.knows("own", &target));
        assert!(resolver.knows("extra", &target));
        assert!(!resolver.knows("missing", &target));
    }
}

#[test]
fn test_empty_resolver_always_misses() {
    let target = Object::new().into_ref();
    let resolver = Resolver::with_sources(Vec::new());
    let view = extend_object(target.clone(), resolver.clone());

    assert_eq!(view.get("anything").unwrap(), Value::Undefined);
    assert!(!resolver.knows("anything", &target));
}

// ── Source adoption tests ────────────────────────────────────────────────

#[test]
fn test_resolver_over_adopted_object_source() {
    let bag = Object::new()
        .with_field("greeting", "hi")
        .with_method("speak", |this, _args| this.get("greeting"))
        .into_ref();
    let source = Source::from_value("bag", &Value::Object(bag)).unwrap();
    let resolver = Resolver::new(source);

    let target = Object::new().with_field("greeting", "hello").into_ref();
    let view = extend_object(target, resolver);

    // Object priority: the target's greeting wins inside the method too.
    assert_eq!(view.invoke("speak", Vec::new()).unwrap(), Value::from("hello"));
}
