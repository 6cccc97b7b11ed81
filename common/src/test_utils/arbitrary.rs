//! `Arbitrary`-like proptest strategies for wire-level values.
//!
//! The default `String` strategy generates long strings over the entire
//! unicode range, which makes failing cases painful to read. Prefer these.

use proptest::{
    arbitrary::any,
    collection::vec,
    option,
    strategy::{BoxedStrategy, Strategy},
};
use serde_json::{Map, Value};

/// An `Arbitrary`-like [`Strategy`] for short strings containing any unicode
/// scalar value, including control characters that JSON must escape.
pub fn any_string() -> BoxedStrategy<String> {
    proptest::string::string_regex(".{0,32}")
        .expect("Valid regex")
        .boxed()
}

/// An `Arbitrary`-like [`Strategy`] for simple alphanumeric strings, i.e.
/// the sort of values we expect in ids, hashes, and encoded invoices.
pub fn any_simple_string() -> BoxedStrategy<String> {
    proptest::string::string_regex("[A-Za-z0-9:_-]{0,32}")
        .expect("Valid regex")
        .boxed()
}

/// An `Arbitrary`-like [`Strategy`] for `Option<String>`s.
pub fn any_option_string() -> BoxedStrategy<Option<String>> {
    option::of(any_string()).boxed()
}

/// An `Arbitrary`-like [`Strategy`] for short `Vec<String>`s.
pub fn any_vec_string() -> BoxedStrategy<Vec<String>> {
    vec(any_string(), 0..8).boxed()
}

/// An `Arbitrary`-like [`Strategy`] for the amount fields of withdrawals:
/// either the `-1` "all funds" sentinel or a non-negative sats amount.
pub fn any_withdrawal_amount_sats() -> BoxedStrategy<i64> {
    proptest::prop_oneof![
        proptest::strategy::Just(-1_i64),
        0_i64..=i64::MAX,
    ]
    .boxed()
}

/// An `Arbitrary`-like [`Strategy`] for non-negative amounts.
pub fn any_amount() -> BoxedStrategy<i64> {
    (0_i64..=i64::MAX).boxed()
}

/// An `Arbitrary`-like [`Strategy`] for optional non-negative amounts.
pub fn any_option_amount() -> BoxedStrategy<Option<i64>> {
    option::of(any_amount()).boxed()
}

/// An `Arbitrary`-like [`Strategy`] for approximate float amounts.
///
/// Only finite multiples of 1/8 are generated, since these print and parse
/// back exactly; `any::<f64>()` also yields NaN and infinities, which JSON
/// can't represent.
pub fn any_approx_value() -> BoxedStrategy<f64> {
    (-(1_i64 << 40)..(1_i64 << 40))
        .prop_map(|eighths| eighths as f64 / 8.0)
        .boxed()
}

/// An `Arbitrary`-like [`Strategy`] for a flat JSON object with string keys
/// and scalar values, like the `data` payload of a webhook.
pub fn any_json_object() -> BoxedStrategy<Map<String, Value>> {
    let scalar = proptest::prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any_string().prop_map(Value::from),
        proptest::strategy::Just(Value::Null),
    ];
    vec((any_simple_string(), scalar), 0..4)
        .prop_map(|kvs| kvs.into_iter().collect())
        .boxed()
}

#[cfg(test)]
mod test {
    use proptest::{prop_assert, proptest};

    use super::*;

    #[test]
    fn withdrawal_amounts_are_sentinel_or_non_negative() {
        proptest!(|(amount in any_withdrawal_amount_sats())| {
            prop_assert!(amount == -1 || amount >= 0);
        });
    }

    #[test]
    fn approx_values_are_finite() {
        proptest!(|(value in any_approx_value())| {
            prop_assert!(value.is_finite());
            let json = serde_json::to_string(&value).unwrap();
            let parsed = serde_json::from_str::<f64>(&json).unwrap();
            prop_assert!(parsed == value);
        });
    }

    #[test]
    fn simple_strings_are_simple() {
        proptest!(|(s in any_simple_string())| {
            prop_assert!(s.len() <= 32);
            prop_assert!(s.chars().all(|c| c.is_ascii_alphanumeric()
                || c == ':' || c == '_' || c == '-'));
        });
    }
}
