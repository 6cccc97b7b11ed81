//! Creating, cancelling, and looking up invoices and offers.

#[cfg(any(test, feature = "test-utils"))]
use proptest_derive::Arbitrary;

use crate::{
    entity::{self, EntityRef},
    enums::InvoiceType,
    error::ValidationError,
    wire::{InputRecord, WireType, ensure_non_negative, ensure_non_negative_opt},
};

// --- Inputs --- //

wire_record! {
    /// Create a BOLT 11 invoice.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CreateInvoiceInput("create_invoice_input") {
        /// The node which will receive the payment.
        pub node_id: String = "create_invoice_input_node_id",
        pub amount_msats: i64 = "create_invoice_input_amount_msats",
        pub memo: Option<String> = "create_invoice_input_memo",
        pub invoice_type: Option<InvoiceType> =
            "create_invoice_input_invoice_type",
        /// Defaults to [`DEFAULT_INVOICE_EXPIRY_SECS`] server-side.
        ///
        /// [`DEFAULT_INVOICE_EXPIRY_SECS`]: crate::wire::DEFAULT_INVOICE_EXPIRY_SECS
        pub expiry_secs: Option<i64> = "create_invoice_input_expiry_secs",
    }
}

impl InputRecord for CreateInvoiceInput {
    fn validate(&self) -> Result<(), ValidationError> {
        ensure_non_negative(Self::TYPENAME, "amount_msats", self.amount_msats)
    }
}

wire_record! {
    /// Create an invoice for an LNURL-pay request. The invoice's description
    /// hash commits to the LNURL metadata.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CreateLnurlInvoiceInput("create_lnurl_invoice_input") {
        pub node_id: String = "create_lnurl_invoice_input_node_id",
        pub amount_msats: i64 = "create_lnurl_invoice_input_amount_msats",
        /// The SHA-256 of the LNURL metadata payload. Ends up in the invoice's
        /// `h` tag.
        pub metadata_hash: String = "create_lnurl_invoice_input_metadata_hash",
        /// Defaults to [`DEFAULT_INVOICE_EXPIRY_SECS`] server-side.
        ///
        /// [`DEFAULT_INVOICE_EXPIRY_SECS`]: crate::wire::DEFAULT_INVOICE_EXPIRY_SECS
        pub expiry_secs: Option<i64> = "create_lnurl_invoice_input_expiry_secs",
        /// Set this if the payment hash comes from a remote signer.
        pub payment_hash: Option<String> =
            "create_lnurl_invoice_input_payment_hash",
        pub preimage_nonce: Option<String> =
            "create_lnurl_invoice_input_preimage_nonce",
    }
}

impl InputRecord for CreateLnurlInvoiceInput {
    fn validate(&self) -> Result<(), ValidationError> {
        ensure_non_negative(Self::TYPENAME, "amount_msats", self.amount_msats)
    }
}

wire_record! {
    /// Create an invoice for an UMA payment request.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CreateUmaInvoiceInput("create_uma_invoice_input") {
        pub node_id: String = "create_uma_invoice_input_node_id",
        pub amount_msats: i64 = "create_uma_invoice_input_amount_msats",
        pub metadata_hash: String = "create_uma_invoice_input_metadata_hash",
        /// Defaults to [`DEFAULT_INVOICE_EXPIRY_SECS`] server-side.
        ///
        /// [`DEFAULT_INVOICE_EXPIRY_SECS`]: crate::wire::DEFAULT_INVOICE_EXPIRY_SECS
        pub expiry_secs: Option<i64> = "create_uma_invoice_input_expiry_secs",
        /// A hash of the receiver's identifier, for analytics.
        pub receiver_hash: Option<String> =
            "create_uma_invoice_input_receiver_hash",
    }
}

impl InputRecord for CreateUmaInvoiceInput {
    fn validate(&self) -> Result<(), ValidationError> {
        ensure_non_negative(Self::TYPENAME, "amount_msats", self.amount_msats)
    }
}

wire_record! {
    /// Create a BOLT 12 offer.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CreateOfferInput("create_offer_input") {
        pub node_id: String = "create_offer_input_node_id",
        /// Zero or unset lets the payer choose the amount.
        pub amount_msats: Option<i64> = "create_offer_input_amount_msats",
        pub description: Option<String> = "create_offer_input_description",
    }
}

impl InputRecord for CreateOfferInput {
    fn validate(&self) -> Result<(), ValidationError> {
        let amount_msats = self.amount_msats;
        ensure_non_negative_opt(Self::TYPENAME, "amount_msats", amount_msats)
    }
}

wire_record! {
    /// Cancel an invoice which is open, unsettled, and unexpired.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CancelInvoiceInput("cancel_invoice_input") {
        pub invoice_id: String = "cancel_invoice_input_invoice_id",
    }
}

impl InputRecord for CancelInvoiceInput {}

wire_record! {
    /// Fail the pending HTLCs paying an invoice.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct FailHtlcsInput("fail_htlcs_input") {
        pub invoice_id: String = "fail_htlcs_input_invoice_id",
        /// Also cancel the invoice so it can't be paid anymore.
        pub cancel_invoice: bool = "fail_htlcs_input_cancel_invoice",
    }
}

impl InputRecord for FailHtlcsInput {}

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct InvoiceForPaymentHashInput("invoice_for_payment_hash_input") {
        /// The hex-encoded 32-byte payment hash.
        pub payment_hash: String = "invoice_for_payment_hash_input_payment_hash",
    }
}

impl InputRecord for InvoiceForPaymentHashInput {}

// --- Outputs --- //

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CreateInvoiceOutput("create_invoice_output") {
        pub invoice: EntityRef<entity::Invoice> = "create_invoice_output_invoice",
    }
}

pub const CREATE_INVOICE_OUTPUT_FRAGMENT: &str = r#"
fragment CreateInvoiceOutputFragment on CreateInvoiceOutput {
    __typename
    create_invoice_output_invoice: invoice {
        id
    }
}
"#;

output_fragment!(CreateInvoiceOutput, CREATE_INVOICE_OUTPUT_FRAGMENT);

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CreateOfferOutput("create_offer_output") {
        pub offer: EntityRef<entity::Offer> = "create_offer_output_offer",
    }
}

pub const CREATE_OFFER_OUTPUT_FRAGMENT: &str = r#"
fragment CreateOfferOutputFragment on CreateOfferOutput {
    __typename
    create_offer_output_offer: offer {
        id
    }
}
"#;

output_fragment!(CreateOfferOutput, CREATE_OFFER_OUTPUT_FRAGMENT);

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CancelInvoiceOutput("cancel_invoice_output") {
        pub invoice: EntityRef<entity::Invoice> = "cancel_invoice_output_invoice",
    }
}

pub const CANCEL_INVOICE_OUTPUT_FRAGMENT: &str = r#"
fragment CancelInvoiceOutputFragment on CancelInvoiceOutput {
    __typename
    cancel_invoice_output_invoice: invoice {
        id
    }
}
"#;

output_fragment!(CancelInvoiceOutput, CANCEL_INVOICE_OUTPUT_FRAGMENT);

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct FailHtlcsOutput("fail_htlcs_output") {
        pub invoice: EntityRef<entity::Invoice> = "fail_htlcs_output_invoice",
    }
}

pub const FAIL_HTLCS_OUTPUT_FRAGMENT: &str = r#"
fragment FailHtlcsOutputFragment on FailHtlcsOutput {
    __typename
    fail_htlcs_output_invoice: invoice {
        id
    }
}
"#;

output_fragment!(FailHtlcsOutput, FAIL_HTLCS_OUTPUT_FRAGMENT);

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct InvoiceForPaymentHashOutput("invoice_for_payment_hash_output") {
        /// `None` if none of our nodes created an invoice with this hash.
        pub invoice: Option<EntityRef<entity::Invoice>> =
            "invoice_for_payment_hash_output_invoice",
    }
}

pub const INVOICE_FOR_PAYMENT_HASH_OUTPUT_FRAGMENT: &str = r#"
fragment InvoiceForPaymentHashOutputFragment on InvoiceForPaymentHashOutput {
    __typename
    invoice_for_payment_hash_output_invoice: invoice {
        id
    }
}
"#;

output_fragment!(
    InvoiceForPaymentHashOutput,
    INVOICE_FOR_PAYMENT_HASH_OUTPUT_FRAGMENT,
);

#[cfg(test)]
mod test {
    use common::test_utils::{DUMMY_NODE_ID, roundtrip};
    use serde_json::json;

    use super::*;
    use crate::wire::{DEFAULT_INVOICE_EXPIRY_SECS, decode_value};

    #[test]
    fn invoice_records_roundtrip() {
        roundtrip::json_value_roundtrip_proptest::<CreateInvoiceInput>();
        roundtrip::json_value_roundtrip_proptest::<CreateLnurlInvoiceInput>();
        roundtrip::json_value_roundtrip_proptest::<CreateUmaInvoiceInput>();
        roundtrip::json_value_roundtrip_proptest::<CreateOfferInput>();
        roundtrip::json_value_roundtrip_proptest::<CancelInvoiceInput>();
        roundtrip::json_value_roundtrip_proptest::<FailHtlcsInput>();
        roundtrip::json_value_roundtrip_proptest::<InvoiceForPaymentHashInput>(
        );
        roundtrip::json_value_roundtrip_proptest::<CreateInvoiceOutput>();
        roundtrip::json_value_roundtrip_proptest::<CreateOfferOutput>();
        roundtrip::json_value_roundtrip_proptest::<CancelInvoiceOutput>();
        roundtrip::json_value_roundtrip_proptest::<FailHtlcsOutput>();
        roundtrip::json_value_roundtrip_proptest::<InvoiceForPaymentHashOutput>(
        );
    }

    #[test]
    fn expiry_default_is_not_materialized() {
        let input = CreateUmaInvoiceInput {
            node_id: DUMMY_NODE_ID.to_owned(),
            amount_msats: 5_000,
            metadata_hash: "ab".repeat(32),
            expiry_secs: None,
            receiver_hash: None,
        };
        let value = input.to_wire().unwrap();
        assert_eq!(value["create_uma_invoice_input_expiry_secs"], json!(null));
        assert_eq!(value["create_uma_invoice_input_receiver_hash"], json!(null));

        let input = CreateUmaInvoiceInput {
            expiry_secs: Some(DEFAULT_INVOICE_EXPIRY_SECS),
            ..input
        };
        let value = input.to_wire().unwrap();
        assert_eq!(value["create_uma_invoice_input_expiry_secs"], json!(86400));
    }

    #[test]
    fn create_invoice_input_canonical() {
        let input = CreateInvoiceInput {
            node_id: DUMMY_NODE_ID.to_owned(),
            amount_msats: 42_000,
            memo: Some("coffee".to_owned()),
            invoice_type: Some(InvoiceType::Amp),
            expiry_secs: None,
        };
        roundtrip::json_value_canonical_ok(
            json!({
                "create_invoice_input_node_id": DUMMY_NODE_ID,
                "create_invoice_input_amount_msats": 42000,
                "create_invoice_input_memo": "coffee",
                "create_invoice_input_invoice_type": "AMP",
                "create_invoice_input_expiry_secs": null,
            }),
            &input,
        );
    }

    #[test]
    fn fail_htlcs_input_bool() {
        let input = decode_value::<FailHtlcsInput>(json!({
            "fail_htlcs_input_invoice_id": "Invoice:1",
            "fail_htlcs_input_cancel_invoice": true,
        }))
        .unwrap();
        assert!(input.cancel_invoice);

        decode_value::<FailHtlcsInput>(json!({
            "fail_htlcs_input_invoice_id": "Invoice:1",
            "fail_htlcs_input_cancel_invoice": "true",
        }))
        .unwrap_err();
    }

    #[test]
    fn invoice_for_payment_hash_output_optional() {
        let output = decode_value::<InvoiceForPaymentHashOutput>(json!({
            "invoice_for_payment_hash_output_invoice": null,
        }))
        .unwrap();
        assert!(output.invoice.is_none());

        let output = decode_value::<InvoiceForPaymentHashOutput>(json!({
            "invoice_for_payment_hash_output_invoice": { "id": "Invoice:9" },
        }))
        .unwrap();
        assert_eq!(output.invoice.unwrap().id(), "Invoice:9");
    }
}
