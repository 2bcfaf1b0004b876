//! Property tests for the pipeline's composition laws.

use proptest::prelude::*;

use laminate::{
    FnLayer, InMemoryStore, JsonSerializer, LayeredStore, Serializer, TransformChain,
};

/// Identity serializer over strings
struct PassThrough;

impl Serializer<String, String> for PassThrough {
    fn serialize(&self, entity: String) -> Result<String, laminate::SerializationError> {
        Ok(entity)
    }

    fn deserialize(&self, stored: String) -> Result<String, laminate::SerializationError> {
        Ok(stored)
    }
}

/// Reverses the string; its own inverse
fn mirror_layer() -> impl laminate::Layer<String> {
    FnLayer::new(
        |s: String| Ok(s.chars().rev().collect()),
        |s: String| Ok(s.chars().rev().collect()),
    )
}

/// Appends a fixed suffix, strips it on the way back
fn suffix_layer(tag: &'static str) -> impl laminate::Layer<String> {
    FnLayer::new(
        move |s: String| Ok(format!("{s}{tag}")),
        move |s: String| {
            s.strip_suffix(tag)
                .map(str::to_string)
                .ok_or_else(|| laminate::TransformError::InvalidShape(format!("missing {tag}")))
        },
    )
}

fn layered_chain() -> TransformChain<String, String> {
    let mut chain = TransformChain::new(PassThrough);
    chain.push_pre(suffix_layer("#1"));
    chain.push_pre(mirror_layer());
    chain.push_post(suffix_layer("#2"));
    chain.push_post(mirror_layer());
    chain
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: decode(encode(v)) == v for any value when every layer is
    /// a true inverse.
    #[test]
    fn property_chain_round_trips(value in "\\PC{0,64}") {
        let chain = layered_chain();

        let stored = chain.encode(value.clone()).unwrap();
        prop_assert_eq!(chain.decode(stored).unwrap(), value);
    }

    /// PROPERTY: an empty chain is exactly the serializer.
    #[test]
    fn property_empty_chain_is_identity(value in "\\PC{0,64}") {
        let chain = TransformChain::new(PassThrough);

        prop_assert_eq!(chain.encode(value.clone()).unwrap(), value.clone());
        prop_assert_eq!(chain.decode(value.clone()).unwrap(), value);
    }

    /// PROPERTY: decode never panics on arbitrary stored input; a value
    /// that was not produced by encode comes back as a clean error.
    #[test]
    fn property_decode_never_panics(stored in "(?s).{0,128}") {
        let chain = layered_chain();
        let _ = chain.decode(stored);
    }

    /// PROPERTY: create-then-read through a full composer returns the
    /// original entity for arbitrary JSON-safe payloads.
    #[test]
    fn property_composer_round_trips(payload in "\\PC{0,48}") {
        let store: LayeredStore<String, String> =
            LayeredStore::new(InMemoryStore::new(), JsonSerializer::new())
                .with_pre_layer(mirror_layer());

        store.create(payload.clone()).unwrap();
        prop_assert_eq!(store.read().unwrap(), payload);
    }
}
