use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use proptest::{
    arbitrary::{Arbitrary, any},
    prop_assert_eq, proptest,
    strategy::Strategy,
    test_runner::Config,
};
use serde::{Serialize, de::DeserializeOwned};

/// A wire token that no server will ever send. Unknown tokens must decode to
/// the enum's `Undefined` variant rather than fail.
pub const BOGUS_WIRE_TOKEN: &str = "NOT_A_REAL_TOKEN_XYZ";

/// Quickly create a [`serde_json::Value`] canonical roundtrip proptest. This
/// test is useful for record types that serialize to/from a JSON object.
///
/// This proptest verifies that `T` semi-canonically roundtrips to/from json,
/// though it uses [`serde_json::Value`] as the serialized representation,
/// rather than the standard json string. We use `Value` since the serialized
/// json string doesn't guarantee that order is preserved when ser/de'ing,
/// whereas the `Value` representation will still compare successfully.
///
/// ```ignore
/// json_value_roundtrip_proptest::<PayInvoiceInput>();
/// ```
pub fn json_value_roundtrip_proptest<T>()
where
    T: Arbitrary + PartialEq + Serialize + DeserializeOwned,
{
    json_value_custom(any::<T>(), Config::default());
}

/// [`json_value_roundtrip_proptest`] over a given strategy and [`Config`].
pub(crate) fn json_value_custom<S, T>(strategy: S, config: Config)
where
    S: Strategy<Value = T>,
    T: PartialEq + Serialize + DeserializeOwned + Debug,
{
    proptest!(config, |(value1 in strategy)| {
        let json_value1 = serde_json::to_value(&value1).unwrap();
        let value2 = serde_json::from_value(json_value1.clone()).unwrap();
        let json_value2 = serde_json::to_value(&value2).unwrap();

        prop_assert_eq!(&value1, &value2);
        prop_assert_eq!(&json_value1, &json_value2);
    });
}

/// Quickly create a JSON string roundtrip proptest. This test is useful for
/// simple data types that map to/from a single base JSON type (string, int, ..)
///
/// ```ignore
/// json_string_roundtrip_proptest::<WithdrawalMode>();
/// ```
pub fn json_string_roundtrip_proptest<T>()
where
    T: Arbitrary + PartialEq + Serialize + DeserializeOwned,
{
    json_string_custom(any::<T>(), Config::default());
}

/// [`json_string_roundtrip_proptest`] over a given strategy and [`Config`].
pub(crate) fn json_string_custom<S, T>(strategy: S, config: Config)
where
    S: Strategy<Value = T>,
    T: PartialEq + Serialize + DeserializeOwned + Debug,
{
    proptest!(config, |(value1 in strategy)| {
        let json_value1 = serde_json::to_string(&value1).unwrap();
        let value2 = serde_json::from_str::<T>(&json_value1).unwrap();
        prop_assert_eq!(&value1, &value2);
    });
}

/// Quickly create a roundtrip proptest for a [`FromStr`] / [`Display`] impl.
///
/// ```ignore
/// fromstr_display_roundtrip_proptest::<RegionCode>();
/// ```
pub fn fromstr_display_roundtrip_proptest<T>()
where
    T: Arbitrary + PartialEq + FromStr + Display,
    <T as FromStr>::Err: Debug,
{
    fromstr_display_custom(any::<T>(), Config::default());
}

/// [`fromstr_display_roundtrip_proptest`] over a given strategy and [`Config`].
pub(crate) fn fromstr_display_custom<S, T>(strategy: S, config: Config)
where
    S: Strategy<Value = T>,
    T: PartialEq + FromStr + Display + Debug,
    <T as FromStr>::Err: Debug,
{
    proptest!(config, |(value1 in strategy)| {
        let value2 = T::from_str(&value1.to_string()).unwrap();
        prop_assert_eq!(value1, value2)
    });
}

/// Quickly create a roundtrip proptest for both [`FromStr`] and json
/// [`Serialize`] impl, and assert that they're both equivalent, i.e., the
/// serialized json representation is just the display wrapped in double-quotes.
pub fn fromstr_json_string_equiv<T>()
where
    T: Arbitrary + PartialEq + Debug,
    T: FromStr + Display,
    T: Serialize + DeserializeOwned,
    <T as FromStr>::Err: Debug,
{
    fromstr_json_string_equiv_custom(any::<T>(), Config::default())
}

/// [`fromstr_json_string_equiv`] over a given strategy and [`Config`].
pub(crate) fn fromstr_json_string_equiv_custom<S, T>(
    strategy: S,
    config: Config,
)
where
    S: Strategy<Value = T>,
    T: PartialEq + Debug,
    T: FromStr + Display,
    T: Serialize + DeserializeOwned,
    <T as FromStr>::Err: Debug,
{
    proptest!(config, |(value in strategy)| {
        let ser_display = value.to_string();
        let ser_json = serde_json::to_string(&value).unwrap();

        prop_assert_eq!(&format!("\"{ser_display}\""), &ser_json);

        let value_fromstr = T::from_str(&ser_display).unwrap();
        let value_json = serde_json::from_str::<T>(&ser_json).unwrap();

        prop_assert_eq!(&value_fromstr, &value);
        prop_assert_eq!(&value_json, &value);
    });
}

/// Assert that `expected_value` encodes to exactly `expected_json` and that
/// `expected_json` decodes back to exactly `expected_value`. Use this for
/// golden wire envelopes.
#[track_caller]
pub fn json_value_canonical_ok<T>(
    expected_json: serde_json::Value,
    expected_value: &T,
) where
    T: Debug + PartialEq + Serialize + DeserializeOwned,
{
    let actual_json = serde_json::to_value(expected_value).unwrap();
    assert_eq!(actual_json, expected_json);

    let actual_value = serde_json::from_value::<T>(expected_json).unwrap();
    assert_eq!(&actual_value, expected_value);
}

/// Exhaustively check that all known variants of a wire enum serialize to
/// their wire tokens, and that the forward-compat sentinel behaves:
///
/// 1. `known` serializes to exactly `expected_ser`, and back.
/// 2. `undefined` serializes to `"undefined"`.
/// 3. An unrecognized token deserializes to `undefined`.
/// 4. Tokens are case-sensitive: a lowercased known token is unrecognized.
pub fn json_wire_enum_backwards_compat<T>(
    known: &[T],
    undefined: T,
    expected_ser: &str,
) where
    T: Copy + PartialEq + Debug,
    T: Serialize + DeserializeOwned,
{
    // Make bootstrapping the test easier by defaulting to an empty list.
    let expected_ser = if expected_ser.is_empty() {
        "[]"
    } else {
        expected_ser
    };

    let expected_de = known.to_vec();
    let actual_ser = serde_json::to_string(&expected_de).unwrap();
    let actual_de = serde_json::from_str::<Vec<T>>(expected_ser).unwrap();

    if actual_ser != expected_ser {
        panic!(
            "\n\
             This enum's wire tokens have changed or a new variant has \n\
             been added/deleted: \n\
             \n\
                actual_ser: '{actual_ser}' \n\
              expected_ser: '{expected_ser}' \n\
             \n\
             It is not safe to remove or rename a token, as the remote \n\
             service will no longer understand us! \n\
             \n\
             However, if you've just added a new variant, then this is OK. Just \n\
             update `expected_ser` as below: \n\
             \n\
             ```\n\
             let expected_ser = r#\"{actual_ser}\"#;\n\
             ```\n\
             "
        );
    }
    assert_eq!(actual_de, expected_de);

    // The sentinel must never be mistaken for a known variant.
    assert!(!known.contains(&undefined));
    assert_eq!(serde_json::to_string(&undefined).unwrap(), r#""undefined""#);

    let bogus = format!("\"{BOGUS_WIRE_TOKEN}\"");
    assert_eq!(serde_json::from_str::<T>(&bogus).unwrap(), undefined);
    assert_eq!(serde_json::from_str::<T>(r#""undefined""#).unwrap(), undefined);

    for variant in known {
        let token = serde_json::to_string(variant).unwrap();
        let lowered = token.to_lowercase();
        if lowered != token {
            assert_eq!(serde_json::from_str::<T>(&lowered).unwrap(), undefined);
        }
        let padded = format!("\" {}", &token[1..]);
        assert_eq!(serde_json::from_str::<T>(&padded).unwrap(), undefined);
    }
}
