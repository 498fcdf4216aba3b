//! End-to-end dispatch tests driving the registry with JSON document payloads.

use convroute::{ConversionRegistry, ConvertError, FnConverter, FormatTag, TwoHopMode};
use serde_json::{json, Value};

/// A converter transform that wraps its payload under `key`, so tests can
/// read off which converters ran and in what order.
fn wrap(key: &'static str) -> impl Fn(Value) -> convroute::Result<Value> {
    move |v| Ok(json!({ key: v }))
}

fn document() -> Value {
    json!({ "title": "The Great Gatsby", "year": 1925 })
}

#[test]
fn test_direct_conversion() {
    let mut registry = ConversionRegistry::new();
    registry.register(FnConverter::new("json", "xml", wrap("xml")));

    let out = registry
        .convert(document(), "json", "xml")
        .expect("direct conversion failed");
    assert_eq!(out, json!({ "xml": document() }));
}

#[test]
fn test_chained_conversion_matches_composition() {
    let mut registry = ConversionRegistry::new();
    registry.register(FnConverter::new("json", "xml", wrap("xml")));
    registry.register(FnConverter::new("xml", "csv", wrap("csv")));

    let chained = registry
        .convert(document(), "json", "csv")
        .expect("chained conversion failed");

    // Same result as applying the two transforms by hand, first to last.
    let first = wrap("xml");
    let second = wrap("csv");
    let by_hand = second(first(document()).unwrap()).unwrap();
    assert_eq!(chained, by_hand);
}

#[test]
fn test_execution_order_is_first_to_last() {
    let mut registry = ConversionRegistry::new();
    registry.register(FnConverter::new("a", "b", wrap("ran_first")));
    registry.register(FnConverter::new("b", "c", wrap("ran_second")));

    let out = registry
        .convert(json!(1), "a", "c")
        .expect("conversion failed");
    // The outermost wrapper is the converter that ran last.
    assert_eq!(out, json!({ "ran_second": { "ran_first": 1 } }));
}

#[test]
fn test_direct_converter_preferred_over_chain() {
    let mut registry = ConversionRegistry::new();
    registry.register(FnConverter::new("json", "xml", wrap("xml")));
    registry.register(FnConverter::new("xml", "csv", wrap("csv")));
    // Registered last, but it matches the pair exactly, so it wins.
    registry.register(FnConverter::new("json", "csv", wrap("direct")));

    let out = registry
        .convert(json!(0), "json", "csv")
        .expect("conversion failed");
    assert_eq!(out, json!({ "direct": 0 }));
}

#[test]
fn test_empty_registry_rejects_all_requests() {
    let mut registry: ConversionRegistry<Value> = ConversionRegistry::new();
    let result = registry.convert(json!(0), "json", "xml");
    assert!(matches!(result, Err(ConvertError::NoConvertersRegistered)));

    // Same-format requests fail too: identity only answers once the
    // registry is non-empty.
    let result = registry.convert(json!(0), "json", "json");
    assert!(matches!(result, Err(ConvertError::NoConvertersRegistered)));
}

#[test]
fn test_unsupported_pair_reports_formats() {
    let mut registry = ConversionRegistry::new();
    registry.register(FnConverter::new("json", "xml", wrap("xml")));

    let result = registry.convert(json!(0), "json", "pdf");
    match result {
        Err(ConvertError::UnsupportedConversion { from, to }) => {
            assert_eq!(from, FormatTag::new("json"));
            assert_eq!(to, FormatTag::new("pdf"));
        }
        other => panic!("expected UnsupportedConversion, got {other:?}"),
    }
}

#[test]
fn test_unsupported_error_message_names_both_formats() {
    let mut registry = ConversionRegistry::new();
    registry.register(FnConverter::new("json", "xml", wrap("xml")));

    let err = registry
        .convert(json!(0), "json", "pdf")
        .expect_err("conversion should fail");
    assert_eq!(err.to_string(), "converting json to pdf is not supported");
}

#[test]
fn test_cycle_terminates_with_unsupported() {
    let mut registry = ConversionRegistry::new();
    registry.register(FnConverter::new("a", "b", wrap("ab")));
    registry.register(FnConverter::new("b", "a", wrap("ba")));
    // Keeps the target format known to the registry so the request reaches
    // the chain search instead of the reachability pre-check.
    registry.register(FnConverter::new("z", "c", wrap("zc")));

    let result = registry.convert(json!(0), "a", "c");
    assert!(matches!(
        result,
        Err(ConvertError::UnsupportedConversion { .. })
    ));
}

#[test]
fn test_deep_chain_resolves() {
    let mut registry = ConversionRegistry::new();
    let tags = ["f0", "f1", "f2", "f3", "f4", "f5", "f6", "f7", "f8", "f9", "f10"];
    for pair in tags.windows(2) {
        registry.register(FnConverter::new(pair[0], pair[1], |v: Value| {
            let hops = v.as_u64().expect("numeric payload");
            Ok(json!(hops + 1))
        }));
    }

    let out = registry
        .convert(json!(0), "f0", "f10")
        .expect("deep chain failed");
    assert_eq!(out, json!(10));
}

#[test]
fn test_route_cache_reused_and_invalidated() {
    let mut registry = ConversionRegistry::new();
    registry.register(FnConverter::new("a", "b", wrap("1")));
    registry.register(FnConverter::new("b", "c", wrap("2")));
    registry.register(FnConverter::new("c", "d", wrap("3")));

    registry.convert(json!(0), "a", "d").expect("first resolution");
    assert_eq!(registry.cached_routes().len(), 1);

    // The cached route is reused; the answer stays the same.
    let again = registry.convert(json!(0), "a", "d").expect("cached resolution");
    assert_eq!(again, json!({ "3": { "2": { "1": 0 } } }));
    assert_eq!(registry.cached_routes().len(), 1);

    // Growth invalidates: a later registration may open shorter routes.
    registry.register(FnConverter::new("a", "d", wrap("shortcut")));
    assert!(registry.cached_routes().is_empty());
    let direct = registry.convert(json!(0), "a", "d").expect("direct resolution");
    assert_eq!(direct, json!({ "shortcut": 0 }));
}

#[test]
fn test_resolving_one_pair_leaves_others_intact() {
    let mut registry = ConversionRegistry::new();
    registry.register(FnConverter::new("a", "b", wrap("1")));
    registry.register(FnConverter::new("b", "c", wrap("2")));
    registry.register(FnConverter::new("c", "d", wrap("3")));
    registry.register(FnConverter::new("x", "y", wrap("solo")));

    registry.convert(json!(0), "a", "d").expect("multi-hop resolution");

    // Pairs uninvolved in the search still resolve afterwards.
    let solo = registry.convert(json!(0), "x", "y").expect("unrelated pair");
    assert_eq!(solo, json!({ "solo": 0 }));
    let direct = registry.convert(json!(0), "a", "b").expect("direct pair");
    assert_eq!(direct, json!({ "1": 0 }));
}

#[test]
fn test_legacy_first_match_applies_first_converter_twice() {
    let mut registry = ConversionRegistry::new().with_two_hop_mode(TwoHopMode::FirstMatch);
    registry.register(FnConverter::new("json", "xml", wrap("xml")));
    registry.register(FnConverter::new("xml", "csv", wrap("csv")));

    let out = registry
        .convert(json!(0), "json", "csv")
        .expect("legacy fast path failed");
    // Not xml-then-csv: the first json-consuming converter runs both times.
    assert_eq!(out, json!({ "xml": { "xml": 0 } }));
}

#[test]
fn test_legacy_and_adjacent_modes_agree_on_direct_matches() {
    for mode in [TwoHopMode::Adjacent, TwoHopMode::FirstMatch] {
        let mut registry = ConversionRegistry::new().with_two_hop_mode(mode);
        registry.register(FnConverter::new("json", "xml", wrap("xml")));
        let out = registry
            .convert(json!(7), "json", "xml")
            .expect("direct conversion failed");
        assert_eq!(out, json!({ "xml": 7 }));
    }
}

#[test]
fn test_failure_mid_chain_propagates() {
    let mut registry = ConversionRegistry::new();
    registry.register(FnConverter::new("a", "b", wrap("1")));
    registry.register(FnConverter::new("b", "c", |_: Value| {
        Err(ConvertError::ConverterFailed(
            "schema validation failed".to_string(),
        ))
    }));
    registry.register(FnConverter::new("c", "d", wrap("3")));

    let err = registry
        .convert(json!(0), "a", "d")
        .expect_err("chain should abort");
    assert_eq!(
        err.to_string(),
        "converter failed: schema validation failed"
    );
}

#[test]
fn test_find_chain_then_execute_matches_convert() {
    let mut registry = ConversionRegistry::new();
    registry.register(FnConverter::new("json", "xml", wrap("xml")));
    registry.register(FnConverter::new("xml", "csv", wrap("csv")));
    registry.register(FnConverter::new("csv", "txt", wrap("txt")));

    let chain = registry
        .find_chain("json", "txt")
        .expect("search failed")
        .expect("route should exist");
    assert_eq!(chain.to_string(), "json -> xml -> csv -> txt");
    assert!(chain.is_linked());

    let executed = registry
        .execute(document(), &chain)
        .expect("execution failed");
    let converted = registry
        .convert(document(), "json", "txt")
        .expect("conversion failed");
    assert_eq!(executed, converted);
}

#[test]
fn test_identity_when_no_converter_involved() {
    let mut registry = ConversionRegistry::new();
    registry.register(FnConverter::new("json", "xml", wrap("xml")));

    let out = registry
        .convert(document(), "json", "json")
        .expect("identity conversion failed");
    assert_eq!(out, document());
}

#[test]
fn test_depth_limit_surfaces_when_bound_cuts_search() {
    let mut registry = ConversionRegistry::new().with_max_search_depth(2);
    registry.register(FnConverter::new("a", "b", wrap("1")));
    registry.register(FnConverter::new("b", "c", wrap("2")));
    registry.register(FnConverter::new("c", "d", wrap("3")));
    registry.register(FnConverter::new("d", "e", wrap("4")));

    let result = registry.convert(json!(0), "a", "e");
    match result {
        Err(ConvertError::DepthLimitExceeded { limit }) => assert_eq!(limit, 2),
        other => panic!("expected DepthLimitExceeded, got {other:?}"),
    }
}
