//! Sending Lightning payments and estimating their fees.

#[cfg(any(test, feature = "test-utils"))]
use proptest_derive::Arbitrary;

use super::CurrencyAmount;
use crate::{
    entity::{self, EntityRef},
    error::ValidationError,
    wire::{InputRecord, WireType, ensure_non_negative, ensure_non_negative_opt},
};

// --- Inputs --- //

wire_record! {
    /// Pay a BOLT 11 invoice.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct PayInvoiceInput("pay_invoice_input") {
        /// The node sending the payment.
        pub node_id: String = "pay_invoice_input_node_id",
        /// The BOLT 11 encoded invoice to pay.
        pub encoded_invoice: String = "pay_invoice_input_encoded_invoice",
        /// How long to keep trying to make the payment.
        pub timeout_secs: i64 = "pay_invoice_input_timeout_secs",
        /// The maximum fees we're willing to pay for this payment.
        pub maximum_fees_msats: i64 = "pay_invoice_input_maximum_fees_msats",
        /// The amount to pay. Only set this if the invoice has no amount.
        pub amount_msats: Option<i64> = "pay_invoice_input_amount_msats",
    }
}

impl InputRecord for PayInvoiceInput {
    fn validate(&self) -> Result<(), ValidationError> {
        let record = Self::TYPENAME;
        ensure_non_negative(record, "timeout_secs", self.timeout_secs)?;
        ensure_non_negative(
            record,
            "maximum_fees_msats",
            self.maximum_fees_msats,
        )?;
        ensure_non_negative_opt(record, "amount_msats", self.amount_msats)
    }
}

wire_record! {
    /// Pay a BOLT 12 offer.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct PayOfferInput("pay_offer_input") {
        /// The node sending the payment.
        pub node_id: String = "pay_offer_input_node_id",
        /// The bech32 encoded offer to pay.
        pub encoded_offer: String = "pay_offer_input_encoded_offer",
        pub timeout_secs: i64 = "pay_offer_input_timeout_secs",
        pub maximum_fees_msats: i64 = "pay_offer_input_maximum_fees_msats",
        /// The amount to pay. Only set this if the offer has no amount.
        pub amount_msats: Option<i64> = "pay_offer_input_amount_msats",
        /// Retrying with the same key returns the original payment. The
        /// server generates one if unset.
        pub idempotency_key: Option<String> = "pay_offer_input_idempotency_key",
    }
}

impl InputRecord for PayOfferInput {
    fn validate(&self) -> Result<(), ValidationError> {
        let record = Self::TYPENAME;
        ensure_non_negative(record, "timeout_secs", self.timeout_secs)?;
        ensure_non_negative(
            record,
            "maximum_fees_msats",
            self.maximum_fees_msats,
        )?;
        ensure_non_negative_opt(record, "amount_msats", self.amount_msats)
    }
}

wire_record! {
    /// Pay an invoice created through UMA.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct PayUmaInvoiceInput("pay_uma_invoice_input") {
        pub node_id: String = "pay_uma_invoice_input_node_id",
        pub encoded_invoice: String = "pay_uma_invoice_input_encoded_invoice",
        pub timeout_secs: i64 = "pay_uma_invoice_input_timeout_secs",
        pub maximum_fees_msats: i64 =
            "pay_uma_invoice_input_maximum_fees_msats",
        pub amount_msats: Option<i64> = "pay_uma_invoice_input_amount_msats",
        pub idempotency_key: Option<String> =
            "pay_uma_invoice_input_idempotency_key",
    }
}

impl InputRecord for PayUmaInvoiceInput {
    fn validate(&self) -> Result<(), ValidationError> {
        let record = Self::TYPENAME;
        ensure_non_negative(record, "timeout_secs", self.timeout_secs)?;
        ensure_non_negative(
            record,
            "maximum_fees_msats",
            self.maximum_fees_msats,
        )?;
        ensure_non_negative_opt(record, "amount_msats", self.amount_msats)
    }
}

wire_record! {
    /// Send a spontaneous (keysend) payment to a node.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct SendPaymentInput("send_payment_input") {
        pub node_id: String = "send_payment_input_node_id",
        /// The public key of the destination node.
        pub destination_public_key: String =
            "send_payment_input_destination_public_key",
        pub timeout_secs: i64 = "send_payment_input_timeout_secs",
        pub amount_msats: i64 = "send_payment_input_amount_msats",
        pub maximum_fees_msats: i64 = "send_payment_input_maximum_fees_msats",
        pub idempotency_key: Option<String> =
            "send_payment_input_idempotency_key",
    }
}

impl InputRecord for SendPaymentInput {
    fn validate(&self) -> Result<(), ValidationError> {
        let record = Self::TYPENAME;
        ensure_non_negative(record, "timeout_secs", self.timeout_secs)?;
        ensure_non_negative(record, "amount_msats", self.amount_msats)?;
        ensure_non_negative(
            record,
            "maximum_fees_msats",
            self.maximum_fees_msats,
        )
    }
}

wire_record! {
    /// Estimate the Lightning fees for paying an invoice.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct LightningFeeEstimateForInvoiceInput(
        "lightning_fee_estimate_for_invoice_input"
    ) {
        pub node_id: String = "lightning_fee_estimate_for_invoice_input_node_id",
        /// The BOLT 11 invoice we'd pay.
        pub encoded_payment_request: String =
            "lightning_fee_estimate_for_invoice_input_encoded_payment_request",
        /// The amount we'd pay, if the invoice has no amount.
        pub amount_msats: Option<i64> =
            "lightning_fee_estimate_for_invoice_input_amount_msats",
    }
}

impl InputRecord for LightningFeeEstimateForInvoiceInput {
    fn validate(&self) -> Result<(), ValidationError> {
        let amount_msats = self.amount_msats;
        ensure_non_negative_opt(Self::TYPENAME, "amount_msats", amount_msats)
    }
}

wire_record! {
    /// Estimate the Lightning fees for paying a node directly.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct LightningFeeEstimateForNodeInput(
        "lightning_fee_estimate_for_node_input"
    ) {
        pub node_id: String = "lightning_fee_estimate_for_node_input_node_id",
        pub destination_node_public_key: String =
            "lightning_fee_estimate_for_node_input_destination_node_public_key",
        pub amount_msats: i64 =
            "lightning_fee_estimate_for_node_input_amount_msats",
    }
}

impl InputRecord for LightningFeeEstimateForNodeInput {
    fn validate(&self) -> Result<(), ValidationError> {
        ensure_non_negative(Self::TYPENAME, "amount_msats", self.amount_msats)
    }
}

// --- Outputs --- //

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct PayInvoiceOutput("pay_invoice_output") {
        /// The payment that has been sent.
        pub payment: EntityRef<entity::OutgoingPayment> =
            "pay_invoice_output_payment",
    }
}

pub const PAY_INVOICE_OUTPUT_FRAGMENT: &str = r#"
fragment PayInvoiceOutputFragment on PayInvoiceOutput {
    __typename
    pay_invoice_output_payment: payment {
        id
    }
}
"#;

output_fragment!(PayInvoiceOutput, PAY_INVOICE_OUTPUT_FRAGMENT);

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct PayOfferOutput("pay_offer_output") {
        /// The payment that has been sent.
        pub payment: EntityRef<entity::OutgoingPayment> =
            "pay_offer_output_payment",
    }
}

pub const PAY_OFFER_OUTPUT_FRAGMENT: &str = r#"
fragment PayOfferOutputFragment on PayOfferOutput {
    __typename
    pay_offer_output_payment: payment {
        id
    }
}
"#;

output_fragment!(PayOfferOutput, PAY_OFFER_OUTPUT_FRAGMENT);

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct SendPaymentOutput("send_payment_output") {
        /// The payment that has been sent.
        pub payment: EntityRef<entity::OutgoingPayment> =
            "send_payment_output_payment",
    }
}

pub const SEND_PAYMENT_OUTPUT_FRAGMENT: &str = r#"
fragment SendPaymentOutputFragment on SendPaymentOutput {
    __typename
    send_payment_output_payment: payment {
        id
    }
}
"#;

output_fragment!(SendPaymentOutput, SEND_PAYMENT_OUTPUT_FRAGMENT);

wire_record! {
    /// The result of looking up an outgoing payment by its idempotency key.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct OutgoingPaymentForIdempotencyKeyOutput(
        "outgoing_payment_for_idempotency_key_output"
    ) {
        /// `None` if no payment was made with this key.
        pub payment: Option<EntityRef<entity::OutgoingPayment>> =
            "outgoing_payment_for_idempotency_key_output_payment",
    }
}

pub const OUTGOING_PAYMENT_FOR_IDEMPOTENCY_KEY_OUTPUT_FRAGMENT: &str = r#"
fragment OutgoingPaymentForIdempotencyKeyOutputFragment on OutgoingPaymentForIdempotencyKeyOutput {
    __typename
    outgoing_payment_for_idempotency_key_output_payment: payment {
        id
    }
}
"#;

output_fragment!(
    OutgoingPaymentForIdempotencyKeyOutput,
    OUTGOING_PAYMENT_FOR_IDEMPOTENCY_KEY_OUTPUT_FRAGMENT,
);

wire_record! {
    /// Returned by both of the Lightning fee estimate queries.
    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct LightningFeeEstimateOutput("lightning_fee_estimate_output") {
        /// The estimated fees for the payment.
        pub fee_estimate: CurrencyAmount =
            "lightning_fee_estimate_output_fee_estimate",
    }
}

pub const LIGHTNING_FEE_ESTIMATE_OUTPUT_FRAGMENT: &str = r#"
fragment LightningFeeEstimateOutputFragment on LightningFeeEstimateOutput {
    __typename
    lightning_fee_estimate_output_fee_estimate: fee_estimate {
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
    LightningFeeEstimateOutput,
    LIGHTNING_FEE_ESTIMATE_OUTPUT_FRAGMENT,
);

#[cfg(test)]
mod test {
    use common::test_utils::{DUMMY_NODE_ID, roundtrip};
    use serde_json::json;

    use super::*;
    use crate::{
        error::ValidationErrorKind,
        wire::{decode_value, encode},
    };

    #[test]
    fn payment_records_roundtrip() {
        roundtrip::json_value_roundtrip_proptest::<PayInvoiceInput>();
        roundtrip::json_value_roundtrip_proptest::<PayOfferInput>();
        roundtrip::json_value_roundtrip_proptest::<PayUmaInvoiceInput>();
        roundtrip::json_value_roundtrip_proptest::<SendPaymentInput>();
        roundtrip::json_value_roundtrip_proptest::<
            LightningFeeEstimateForInvoiceInput,
        >();
        roundtrip::json_value_roundtrip_proptest::<
            LightningFeeEstimateForNodeInput,
        >();
        roundtrip::json_value_roundtrip_proptest::<PayInvoiceOutput>();
        roundtrip::json_value_roundtrip_proptest::<LightningFeeEstimateOutput>(
        );
        roundtrip::json_value_roundtrip_proptest::<PayOfferOutput>();
        roundtrip::json_value_roundtrip_proptest::<SendPaymentOutput>();
        roundtrip::json_value_roundtrip_proptest::<
            OutgoingPaymentForIdempotencyKeyOutput,
        >();
    }

    #[test]
    fn pay_invoice_input_canonical() {
        let input = PayInvoiceInput {
            node_id: DUMMY_NODE_ID.to_owned(),
            encoded_invoice: "lnbc1".to_owned(),
            timeout_secs: 60,
            maximum_fees_msats: 1_000,
            amount_msats: None,
        };
        roundtrip::json_value_canonical_ok(
            json!({
                "pay_invoice_input_node_id": DUMMY_NODE_ID,
                "pay_invoice_input_encoded_invoice": "lnbc1",
                "pay_invoice_input_timeout_secs": 60,
                "pay_invoice_input_maximum_fees_msats": 1000,
                "pay_invoice_input_amount_msats": null,
            }),
            &input,
        );
        input.validate().unwrap();
    }

    #[test]
    fn negative_amounts_rejected() {
        let input = PayOfferInput {
            node_id: DUMMY_NODE_ID.to_owned(),
            encoded_offer: "lno1".to_owned(),
            timeout_secs: 60,
            maximum_fees_msats: 1_000,
            amount_msats: Some(-1),
            idempotency_key: None,
        };
        let err = input.validate().unwrap_err();
        assert_eq!(err.record, "PayOfferInput");
        assert_eq!(err.field, "amount_msats");
        assert_eq!(err.kind, ValidationErrorKind::Negative(-1));

        let input = SendPaymentInput {
            node_id: DUMMY_NODE_ID.to_owned(),
            destination_public_key: "02ab".to_owned(),
            timeout_secs: -5,
            amount_msats: 1,
            maximum_fees_msats: 1,
            idempotency_key: Some("key".to_owned()),
        };
        assert_eq!(input.validate().unwrap_err().field, "timeout_secs");

        let input = LightningFeeEstimateForNodeInput {
            node_id: DUMMY_NODE_ID.to_owned(),
            destination_node_public_key: "02ab".to_owned(),
            amount_msats: -100,
        };
        input.to_wire().unwrap_err();
    }

    #[test]
    fn pay_invoice_output_decode() {
        let output = decode_value::<PayInvoiceOutput>(json!({
            "pay_invoice_output_payment": {
                "__typename": "OutgoingPayment",
                "id": "OutgoingPayment:123",
            },
            "some_future_field": true,
        }))
        .unwrap();
        assert_eq!(output.payment.id(), "OutgoingPayment:123");

        let value = encode(&output);
        assert_eq!(
            value,
            json!({ "pay_invoice_output_payment": { "id": "OutgoingPayment:123" } })
        );
    }

    #[test]
    fn payment_for_idempotency_key_may_be_absent() {
        let output = decode_value::<OutgoingPaymentForIdempotencyKeyOutput>(
            json!({ "outgoing_payment_for_idempotency_key_output_payment": null }),
        )
        .unwrap();
        assert_eq!(output.payment, None);

        // An absent key means the same thing.
        let output =
            decode_value::<OutgoingPaymentForIdempotencyKeyOutput>(json!({}))
                .unwrap();
        assert_eq!(output.payment, None);

        let output = decode_value::<OutgoingPaymentForIdempotencyKeyOutput>(
            json!({
                "outgoing_payment_for_idempotency_key_output_payment": {
                    "id": "X",
                },
            }),
        )
        .unwrap();
        assert_eq!(output.payment.unwrap().id(), "X");
    }
}
