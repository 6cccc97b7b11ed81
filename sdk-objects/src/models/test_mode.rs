//! Operations which only work against REGTEST nodes.

#[cfg(any(test, feature = "test-utils"))]
use common::test_utils::arbitrary;
#[cfg(any(test, feature = "test-utils"))]
use proptest_derive::Arbitrary;

use super::CurrencyAmount;
use crate::{
    entity::{self, EntityRef},
    enums::InvoiceType,
    error::ValidationError,
    wire::{InputRecord, WireType, ensure_non_negative, ensure_non_negative_opt},
};

// --- Inputs --- //

wire_record! {
    /// Have a simulated remote node create an invoice our node can pay.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CreateTestModeInvoiceInput("create_test_mode_invoice_input") {
        pub local_node_id: String =
            "create_test_mode_invoice_input_local_node_id",
        pub amount_msats: i64 = "create_test_mode_invoice_input_amount_msats",
        pub memo: Option<String> = "create_test_mode_invoice_input_memo",
        pub invoice_type: Option<InvoiceType> =
            "create_test_mode_invoice_input_invoice_type",
    }
}

impl InputRecord for CreateTestModeInvoiceInput {
    fn validate(&self) -> Result<(), ValidationError> {
        ensure_non_negative(Self::TYPENAME, "amount_msats", self.amount_msats)
    }
}

wire_record! {
    /// Have a simulated remote node pay one of our invoices.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CreateTestModePaymentInput("create_test_mode_payment_input") {
        /// The node which will receive the payment.
        pub local_node_id: String =
            "create_test_mode_payment_input_local_node_id",
        pub encoded_invoice: String =
            "create_test_mode_payment_input_encoded_invoice",
        /// Only set this if the invoice has no amount.
        pub amount_msats: Option<i64> =
            "create_test_mode_payment_input_amount_msats",
    }
}

impl InputRecord for CreateTestModePaymentInput {
    fn validate(&self) -> Result<(), ValidationError> {
        let amount_msats = self.amount_msats;
        ensure_non_negative_opt(Self::TYPENAME, "amount_msats", amount_msats)
    }
}

wire_record! {
    /// Fund a REGTEST node's on-chain wallet.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct FundNodeInput("fund_node_input") {
        pub node_id: String = "fund_node_input_node_id",
        #[cfg_attr(
            any(test, feature = "test-utils"),
            proptest(strategy = "arbitrary::any_option_amount()")
        )]
        pub amount_sats: Option<i64> = "fund_node_input_amount_sats",
    }
}

impl InputRecord for FundNodeInput {
    fn validate(&self) -> Result<(), ValidationError> {
        ensure_non_negative_opt(Self::TYPENAME, "amount_sats", self.amount_sats)
    }
}

// --- Outputs --- //

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CreateTestModeInvoiceOutput("create_test_mode_invoice_output") {
        /// The BOLT 11 invoice the simulated node created.
        pub encoded_payment_request: String =
            "create_test_mode_invoice_output_encoded_payment_request",
    }
}

pub const CREATE_TEST_MODE_INVOICE_OUTPUT_FRAGMENT: &str = r#"
fragment CreateTestModeInvoiceOutputFragment on CreateTestModeInvoiceOutput {
    __typename
    create_test_mode_invoice_output_encoded_payment_request: encoded_payment_request
}
"#;

output_fragment!(
    CreateTestModeInvoiceOutput,
    CREATE_TEST_MODE_INVOICE_OUTPUT_FRAGMENT,
);

wire_record! {
    /// The server's schema spells this typename with a lower-case `o`, and
    /// the wire prefix follows it.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CreateTestModePaymentoutput("create_test_mode_paymentoutput") {
        /// The payment the simulated node sent. Prefer `incoming_payment`.
        pub payment: EntityRef<entity::OutgoingPayment> =
            "create_test_mode_paymentoutput_payment",
        /// The payment our node received.
        pub incoming_payment: EntityRef<entity::IncomingPayment> =
            "create_test_mode_paymentoutput_incoming_payment",
    }
}

pub const CREATE_TEST_MODE_PAYMENTOUTPUT_FRAGMENT: &str = r#"
fragment CreateTestModePaymentoutputFragment on CreateTestModePaymentoutput {
    __typename
    create_test_mode_paymentoutput_payment: payment {
        id
    }
    create_test_mode_paymentoutput_incoming_payment: incoming_payment {
        id
    }
}
"#;

output_fragment!(
    CreateTestModePaymentoutput,
    CREATE_TEST_MODE_PAYMENTOUTPUT_FRAGMENT,
);

wire_record! {
    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct FundNodeOutput("fund_node_output") {
        /// The amount the node's wallet was funded with.
        pub amount: CurrencyAmount = "fund_node_output_amount",
    }
}

pub const FUND_NODE_OUTPUT_FRAGMENT: &str = r#"
fragment FundNodeOutputFragment on FundNodeOutput {
    __typename
    fund_node_output_amount: amount {
        __typename
        currency_amount_original_value: original_value
        currency_amount_original_unit: original_unit
        currency_amount_preferred_currency_unit: preferred_currency_unit
        currency_amount_preferred_currency_value_rounded: preferred_currency_value_rounded
        currency_amount_preferred_currency_value_approx: preferred_currency_value_approx
    }
}
"#;

output_fragment!(FundNodeOutput, FUND_NODE_OUTPUT_FRAGMENT);

#[cfg(test)]
mod test {
    use common::test_utils::{DUMMY_NODE_ID, roundtrip};
    use serde_json::json;

    use super::*;
    use crate::wire::{decode_value, encode};

    #[test]
    fn test_mode_records_roundtrip() {
        roundtrip::json_value_roundtrip_proptest::<CreateTestModeInvoiceInput>(
        );
        roundtrip::json_value_roundtrip_proptest::<CreateTestModePaymentInput>(
        );
        roundtrip::json_value_roundtrip_proptest::<FundNodeInput>();
        roundtrip::json_value_roundtrip_proptest::<CreateTestModeInvoiceOutput>(
        );
        roundtrip::json_value_roundtrip_proptest::<CreateTestModePaymentoutput>(
        );
        roundtrip::json_value_roundtrip_proptest::<FundNodeOutput>();
    }

    #[test]
    fn test_mode_payment_all_optional_unset() {
        let input = CreateTestModePaymentInput {
            local_node_id: DUMMY_NODE_ID.to_owned(),
            encoded_invoice: "lnbcrt1".to_owned(),
            amount_msats: None,
        };
        let value = input.to_wire().unwrap();
        assert_eq!(
            value,
            json!({
                "create_test_mode_payment_input_local_node_id": DUMMY_NODE_ID,
                "create_test_mode_payment_input_encoded_invoice": "lnbcrt1",
                "create_test_mode_payment_input_amount_msats": null,
            })
        );
    }

    #[test]
    fn test_mode_paymentoutput_has_both_sides() {
        let output = decode_value::<CreateTestModePaymentoutput>(json!({
            "create_test_mode_paymentoutput_payment": { "id": "p1" },
            "create_test_mode_paymentoutput_incoming_payment": { "id": "p2" },
        }))
        .unwrap();
        assert_eq!(output.payment.id(), "p1");
        assert_eq!(output.incoming_payment.id(), "p2");
        assert_eq!(output.incoming_payment.typename(), "IncomingPayment");
        assert_eq!(
            encode(&output),
            json!({
                "create_test_mode_paymentoutput_payment": { "id": "p1" },
                "create_test_mode_paymentoutput_incoming_payment": {
                    "id": "p2",
                },
            }),
        );

        // Both sides are required.
        let err = decode_value::<CreateTestModePaymentoutput>(json!({
            "create_test_mode_paymentoutput_payment": { "id": "p1" },
        }))
        .unwrap_err();
        assert_eq!(
            err.path,
            "CreateTestModePaymentoutput.\
             create_test_mode_paymentoutput_incoming_payment"
        );
    }

    #[test]
    fn fund_node_output_decode() {
        let output = decode_value::<FundNodeOutput>(json!({
            "fund_node_output_amount": {
                "__typename": "CurrencyAmount",
                "currency_amount_original_value": 100_000,
                "currency_amount_original_unit": "SATOSHI",
                "currency_amount_preferred_currency_unit": "SATOSHI",
                "currency_amount_preferred_currency_value_rounded": 100_000,
                "currency_amount_preferred_currency_value_approx": 100_000.0,
            },
        }))
        .unwrap();
        assert_eq!(output.amount.to_msats(), Some(100_000_000));

        // A nested missing field is reported under its parent.
        let err = decode_value::<FundNodeOutput>(json!({
            "fund_node_output_amount": {
                "currency_amount_original_value": 1,
            },
        }))
        .unwrap_err();
        assert!(
            err.path.starts_with(
                "FundNodeOutput.fund_node_output_amount.currency_amount_"
            ),
            "{}",
            err.path,
        );
    }
}
