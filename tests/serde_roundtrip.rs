//! Descriptor serialization coverage; only built with the `serde` feature.
#![cfg(feature = "serde")]

use declarai_rs::prelude::*;

#[test]
fn descriptor_roundtrips_through_json() {
    let func = ParsedFunction::new("convert_currency")
        .with_param("amount", "f64")
        .with_param("from", "str")
        .with_param("to", "str")
        .with_param_doc("amount", "amount in the source currency")
        .with_return_name("converted")
        .with_return_type("f64");

    let json = serde_json::to_string(&func).unwrap();
    let back: ParsedFunction = serde_json::from_str(&json).unwrap();

    assert_eq!(back, func);
    // A deserialized descriptor must emit the same bytes as the original.
    assert_eq!(input_placeholder(&back), input_placeholder(&func));
    assert_eq!(output_instructions(&back), output_instructions(&func));
}
