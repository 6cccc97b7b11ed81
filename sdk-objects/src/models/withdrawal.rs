//! On-chain withdrawals.

#[cfg(any(test, feature = "test-utils"))]
use common::test_utils::arbitrary;
#[cfg(any(test, feature = "test-utils"))]
use proptest_derive::Arbitrary;

use super::CurrencyAmount;
use crate::{
    entity::{self, EntityRef},
    enums::{OnChainFeeTarget, WithdrawalMode},
    error::ValidationError,
    wire::{
        InputRecord, WireType, ensure_non_negative_opt,
        ensure_withdrawal_amount,
    },
};

// --- Inputs --- //

wire_record! {
    /// Withdraw funds from a node to a bitcoin address.
    ///
    /// Set at most one of `fee_target` and `sats_per_vbyte`. If neither is
    /// set the server uses [`OnChainFeeTarget::Medium`].
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct RequestWithdrawalInput("request_withdrawal_input") {
        pub node_id: String = "request_withdrawal_input_node_id",
        pub bitcoin_address: String = "request_withdrawal_input_bitcoin_address",
        /// The amount to withdraw in sats, or [`WITHDRAW_ALL_FUNDS`].
        ///
        /// [`WITHDRAW_ALL_FUNDS`]: crate::wire::WITHDRAW_ALL_FUNDS
        #[cfg_attr(
            any(test, feature = "test-utils"),
            proptest(strategy = "arbitrary::any_withdrawal_amount_sats()")
        )]
        pub amount_sats: i64 = "request_withdrawal_input_amount_sats",
        pub withdrawal_mode: WithdrawalMode =
            "request_withdrawal_input_withdrawal_mode",
        /// Retrying with the same key returns the original request.
        pub idempotency_key: Option<String> =
            "request_withdrawal_input_idempotency_key",
        pub fee_target: Option<OnChainFeeTarget> =
            "request_withdrawal_input_fee_target",
        /// A manual fee rate in sat/vbyte.
        #[cfg_attr(
            any(test, feature = "test-utils"),
            proptest(strategy = "arbitrary::any_option_amount()")
        )]
        pub sats_per_vbyte: Option<i64> =
            "request_withdrawal_input_sats_per_vbyte",
    }
}

impl InputRecord for RequestWithdrawalInput {
    fn validate(&self) -> Result<(), ValidationError> {
        let record = Self::TYPENAME;
        ensure_withdrawal_amount(record, "amount_sats", self.amount_sats)?;
        ensure_non_negative_opt(record, "sats_per_vbyte", self.sats_per_vbyte)
    }
}

wire_record! {
    /// Estimate the on-chain fee for a withdrawal.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct WithdrawalFeeEstimateInput("withdrawal_fee_estimate_input") {
        pub node_id: String = "withdrawal_fee_estimate_input_node_id",
        /// The amount to withdraw in sats, or [`WITHDRAW_ALL_FUNDS`].
        ///
        /// [`WITHDRAW_ALL_FUNDS`]: crate::wire::WITHDRAW_ALL_FUNDS
        #[cfg_attr(
            any(test, feature = "test-utils"),
            proptest(strategy = "arbitrary::any_withdrawal_amount_sats()")
        )]
        pub amount_sats: i64 = "withdrawal_fee_estimate_input_amount_sats",
        pub withdrawal_mode: WithdrawalMode =
            "withdrawal_fee_estimate_input_withdrawal_mode",
    }
}

impl InputRecord for WithdrawalFeeEstimateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        let amount_sats = self.amount_sats;
        ensure_withdrawal_amount(Self::TYPENAME, "amount_sats", amount_sats)
    }
}

// --- Outputs --- //

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct RequestWithdrawalOutput("request_withdrawal_output") {
        /// The withdrawal request that was created.
        pub request: EntityRef<entity::WithdrawalRequest> =
            "request_withdrawal_output_request",
    }
}

pub const REQUEST_WITHDRAWAL_OUTPUT_FRAGMENT: &str = r#"
fragment RequestWithdrawalOutputFragment on RequestWithdrawalOutput {
    __typename
    request_withdrawal_output_request: request {
        id
    }
}
"#;

output_fragment!(RequestWithdrawalOutput, REQUEST_WITHDRAWAL_OUTPUT_FRAGMENT);

wire_record! {
    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct WithdrawalFeeEstimateOutput("withdrawal_fee_estimate_output") {
        /// The estimated on-chain fee for the withdrawal.
        pub fee_estimate: CurrencyAmount =
            "withdrawal_fee_estimate_output_fee_estimate",
    }
}

pub const WITHDRAWAL_FEE_ESTIMATE_OUTPUT_FRAGMENT: &str = r#"
fragment WithdrawalFeeEstimateOutputFragment on WithdrawalFeeEstimateOutput {
    __typename
    withdrawal_fee_estimate_output_fee_estimate: fee_estimate {
        __typename
        currency_amount_original_value: original_value
        currency_amount_original_unit: original_unit
        currency_amount_preferred_currency_unit: preferred_currency_unit
        currency_amount_preferred_currency_value_rounded: preferred_currency_value_rounded
        currency_amount_preferred_currency_value_approx: preferred_currency_value_approx
    }
}
"#;

output_fragment!(
    WithdrawalFeeEstimateOutput,
    WITHDRAWAL_FEE_ESTIMATE_OUTPUT_FRAGMENT,
);

#[cfg(test)]
mod test {
    use common::test_utils::{DUMMY_BITCOIN_ADDRESS, DUMMY_NODE_ID, roundtrip};
    use proptest::{prop_assert, proptest};
    use serde_json::json;

    use super::*;
    use crate::{error::ValidationErrorKind, wire::WITHDRAW_ALL_FUNDS};

    fn withdraw_all() -> RequestWithdrawalInput {
        RequestWithdrawalInput {
            node_id: "n1".to_owned(),
            bitcoin_address: DUMMY_BITCOIN_ADDRESS.to_owned(),
            amount_sats: WITHDRAW_ALL_FUNDS,
            withdrawal_mode: WithdrawalMode::WalletOnly,
            idempotency_key: None,
            fee_target: None,
            sats_per_vbyte: None,
        }
    }

    #[test]
    fn withdrawal_records_roundtrip() {
        roundtrip::json_value_roundtrip_proptest::<RequestWithdrawalInput>();
        roundtrip::json_value_roundtrip_proptest::<WithdrawalFeeEstimateInput>(
        );
        roundtrip::json_value_roundtrip_proptest::<RequestWithdrawalOutput>();
        roundtrip::json_value_roundtrip_proptest::<WithdrawalFeeEstimateOutput>(
        );
    }

    #[test]
    fn request_withdrawal_all_funds_encode() {
        let value = withdraw_all().to_wire().unwrap();
        assert_eq!(
            value,
            json!({
                "request_withdrawal_input_node_id": "n1",
                "request_withdrawal_input_bitcoin_address":
                    DUMMY_BITCOIN_ADDRESS,
                "request_withdrawal_input_amount_sats": -1,
                "request_withdrawal_input_withdrawal_mode": "WALLET_ONLY",
                "request_withdrawal_input_idempotency_key": null,
                "request_withdrawal_input_fee_target": null,
                "request_withdrawal_input_sats_per_vbyte": null,
            })
        );
    }

    #[test]
    fn only_minus_one_is_allowed() {
        for amount_sats in [-2, -100, i64::MIN] {
            let input = RequestWithdrawalInput {
                amount_sats,
                ..withdraw_all()
            };
            let err = input.validate().unwrap_err();
            assert_eq!(
                err.kind,
                ValidationErrorKind::NegativeWithdrawal(amount_sats)
            );

            let input = WithdrawalFeeEstimateInput {
                node_id: DUMMY_NODE_ID.to_owned(),
                amount_sats,
                withdrawal_mode: WithdrawalMode::WalletThenChannels,
            };
            input.validate().unwrap_err();
        }

        let input = RequestWithdrawalInput {
            fee_target: Some(OnChainFeeTarget::High),
            sats_per_vbyte: Some(-3),
            ..withdraw_all()
        };
        assert_eq!(input.validate().unwrap_err().field, "sats_per_vbyte");
    }

    #[test]
    fn arbitrary_withdrawals_validate() {
        proptest!(|(input: RequestWithdrawalInput)| {
            prop_assert!(input.validate().is_ok());
        });
        proptest!(|(input: WithdrawalFeeEstimateInput)| {
            prop_assert!(input.validate().is_ok());
        });
    }
}
