//! Input and output records, grouped by domain.
//!
//! Inputs implement [`InputRecord`] and are sent as GraphQL mutation
//! arguments. Outputs implement [`OutputRecord`] and are decoded from the
//! response, which the server shapes using the output's projection fragment.
//!
//! [`InputRecord`]: crate::wire::InputRecord
//! [`OutputRecord`]: crate::wire::OutputRecord

pub mod compliance;
pub mod currency;
pub mod invitation;
pub mod invoice;
pub mod payment;
pub mod remote_signing;
pub mod test_mode;
pub mod withdrawal;

pub use compliance::*;
pub use currency::*;
pub use invitation::*;
pub use invoice::*;
pub use payment::*;
pub use remote_signing::*;
pub use test_mode::*;
pub use withdrawal::*;

#[cfg(test)]
mod test {
    use std::{collections::BTreeSet, fmt::Debug};

    use common::to_snake_case;
    use proptest::{
        arbitrary::{Arbitrary, any},
        prop_assert, prop_assert_eq, proptest,
        test_runner::Config,
    };
    use serde_json::{Value, json};

    use super::*;
    use crate::wire::{WireRecord, decode_value, encode};

    /// Invoke `$check::<R>()` for every record in the crate.
    macro_rules! for_each_record {
        ($check:ident) => {
            for_each_record!($check;
                // Inputs
                CancelInvoiceInput,
                ClaimUmaInvitationInput,
                ClaimUmaInvitationWithIncentivesInput,
                CreateInvitationWithIncentivesInput,
                CreateInvoiceInput,
                CreateLnurlInvoiceInput,
                CreateOfferInput,
                CreateTestModeInvoiceInput,
                CreateTestModePaymentInput,
                CreateUmaInvitationInput,
                CreateUmaInvoiceInput,
                DeclineToSignMessagesInput,
                FailHtlcsInput,
                FundNodeInput,
                InvoiceForPaymentHashInput,
                LightningFeeEstimateForInvoiceInput,
                LightningFeeEstimateForNodeInput,
                PayInvoiceInput,
                PayOfferInput,
                PayUmaInvoiceInput,
                RegisterPaymentInput,
                ReleaseChannelPerCommitmentSecretInput,
                ReleasePaymentPreimageInput,
                RequestWithdrawalInput,
                ScreenBitcoinAddressesInput,
                ScreenNodeInput,
                SendPaymentInput,
                SetInvoicePaymentHashInput,
                SignInvoiceInput,
                SignMessagesInput,
                UpdateChannelPerCommitmentPointInput,
                UpdateNodeSharedSecretInput,
                WithdrawalFeeEstimateInput,
                // Values
                CurrencyAmount,
                IdAndSignature,
                // Outputs
                CancelInvoiceOutput,
                ClaimUmaInvitationOutput,
                ClaimUmaInvitationWithIncentivesOutput,
                CreateInvitationWithIncentivesOutput,
                CreateInvoiceOutput,
                CreateOfferOutput,
                CreateTestModeInvoiceOutput,
                CreateTestModePaymentoutput,
                CreateUmaInvitationOutput,
                DeclineToSignMessagesOutput,
                FailHtlcsOutput,
                FundNodeOutput,
                InvoiceForPaymentHashOutput,
                LightningFeeEstimateOutput,
                OutgoingPaymentForIdempotencyKeyOutput,
                PayInvoiceOutput,
                PayOfferOutput,
                RegisterPaymentOutput,
                ReleaseChannelPerCommitmentSecretOutput,
                ReleasePaymentPreimageOutput,
                RequestWithdrawalOutput,
                ScreenBitcoinAddressesOutput,
                ScreenNodeOutput,
                SendPaymentOutput,
                SetInvoicePaymentHashOutput,
                SignInvoiceOutput,
                SignMessagesOutput,
                UpdateChannelPerCommitmentPointOutput,
                UpdateNodeSharedSecretOutput,
                WithdrawalFeeEstimateOutput,
            );
        };
        ($check:ident; $($record:ty),* $(,)?) => {
            $( $check::<$record>(); )*
        };
    }

    fn config() -> Config {
        Config::with_cases(32)
    }

    /// Every wire key is `<snake_case(TYPENAME)>_<field name>`, and an encoded
    /// record has exactly those keys.
    fn check_wire_names<R>()
    where
        R: WireRecord + Arbitrary + PartialEq,
    {
        let typename = R::TYPENAME;
        assert_eq!(R::WIRE_PREFIX, to_snake_case(typename), "{typename}");

        let mut names = BTreeSet::new();
        for field in R::FIELDS {
            let expected = format!("{}_{}", R::WIRE_PREFIX, field.name);
            assert_eq!(field.wire, expected, "{typename}");
            assert!(names.insert(field.name), "duplicate {}", field.name);
        }
        let expected_keys =
            R::FIELDS.iter().map(|f| f.wire).collect::<BTreeSet<_>>();

        proptest!(config(), |(record in any::<R>())| {
            let value = encode(&record);
            let object = value.as_object().unwrap();
            let keys =
                object.keys().map(String::as_str).collect::<BTreeSet<_>>();
            prop_assert_eq!(&keys, &expected_keys);
        });
    }

    /// Unknown keys in the envelope are ignored.
    fn check_unknown_keys_ignored<R>()
    where
        R: WireRecord + Arbitrary + PartialEq + Debug,
    {
        proptest!(config(), |(record in any::<R>())| {
            let mut value = encode(&record);
            let object = value.as_object_mut().unwrap();
            object.insert("__typename".to_owned(), json!(R::TYPENAME));
            object.insert(
                format!("{}_added_next_year", R::WIRE_PREFIX),
                json!({ "nested": [1, "two", null] }),
            );

            let decoded = decode_value::<R>(value).unwrap();
            prop_assert_eq!(&decoded, &record);
        });
    }

    /// Optional fields encode as `null`, and decode the same whether `null`
    /// or absent.
    fn check_optional_fields<R>()
    where
        R: WireRecord + Arbitrary + PartialEq + Debug,
    {
        let optional = R::FIELDS
            .iter()
            .filter(|field| field.optional)
            .collect::<Vec<_>>();
        if optional.is_empty() {
            return;
        }

        proptest!(config(), |(record in any::<R>())| {
            let mut with_nulls = encode(&record);
            let mut without = with_nulls.clone();
            for field in &optional {
                with_nulls[field.wire] = Value::Null;
                without.as_object_mut().unwrap().remove(field.wire);
            }

            let from_nulls = decode_value::<R>(with_nulls.clone()).unwrap();
            let from_absent = decode_value::<R>(without).unwrap();
            prop_assert_eq!(&from_nulls, &from_absent);

            // Unset optionals are sent, as explicit nulls.
            let reencoded = encode(&from_absent);
            prop_assert_eq!(&reencoded, &with_nulls);
            for field in &optional {
                prop_assert!(reencoded[field.wire].is_null());
            }
        });
    }

    /// Every required field is required on decode.
    fn check_required_fields<R>()
    where
        R: WireRecord + Arbitrary + PartialEq + Debug,
    {
        let required = R::FIELDS
            .iter()
            .filter(|field| !field.optional)
            .collect::<Vec<_>>();

        proptest!(config(), |(record in any::<R>())| {
            for field in &required {
                let mut value = encode(&record);
                value.as_object_mut().unwrap().remove(field.wire);
                let err = decode_value::<R>(value).unwrap_err();
                let expected_path = format!("{}.{}", R::TYPENAME, field.wire);
                prop_assert_eq!(&err.path, &expected_path);
            }
        });
    }

    #[test]
    fn wire_names() {
        for_each_record!(check_wire_names);
    }

    #[test]
    fn unknown_keys_ignored() {
        for_each_record!(check_unknown_keys_ignored);
    }

    #[test]
    fn optional_fields() {
        for_each_record!(check_optional_fields);
    }

    #[test]
    fn required_fields() {
        for_each_record!(check_required_fields);
    }

    #[test]
    fn request_withdrawal_scenario() {
        let input = RequestWithdrawalInput {
            node_id: "n1".to_owned(),
            bitcoin_address: "bc1qtest".to_owned(),
            amount_sats: -1,
            withdrawal_mode: crate::enums::WithdrawalMode::WalletOnly,
            idempotency_key: None,
            fee_target: None,
            sats_per_vbyte: None,
        };
        let value = crate::wire::InputRecord::to_wire(&input).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["request_withdrawal_input_node_id"], "n1");
        assert_eq!(
            object["request_withdrawal_input_bitcoin_address"],
            "bc1qtest"
        );
        assert_eq!(object["request_withdrawal_input_amount_sats"], -1);
        assert_eq!(
            object["request_withdrawal_input_withdrawal_mode"],
            "WALLET_ONLY"
        );
    }
}
