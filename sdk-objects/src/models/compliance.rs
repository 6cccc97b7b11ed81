//! Sanctions screening and compliance reporting.

#[cfg(any(test, feature = "test-utils"))]
use common::test_utils::arbitrary;
#[cfg(any(test, feature = "test-utils"))]
use proptest_derive::Arbitrary;

use crate::{
    entity::{self, EntityRef},
    enums::{
        ComplianceProvider, CryptoSanctionsScreeningProvider, PaymentDirection,
        RiskRating,
    },
    wire::InputRecord,
};

// --- Inputs --- //

wire_record! {
    /// Screen a batch of bitcoin addresses with a sanctions screening
    /// provider.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct ScreenBitcoinAddressesInput("screen_bitcoin_addresses_input") {
        pub provider: CryptoSanctionsScreeningProvider =
            "screen_bitcoin_addresses_input_provider",
        #[cfg_attr(
            any(test, feature = "test-utils"),
            proptest(strategy = "arbitrary::any_vec_string()")
        )]
        pub addresses: Vec<String> = "screen_bitcoin_addresses_input_addresses",
    }
}

impl InputRecord for ScreenBitcoinAddressesInput {}

wire_record! {
    /// Screen a Lightning node with a compliance provider.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct ScreenNodeInput("screen_node_input") {
        pub provider: ComplianceProvider = "screen_node_input_provider",
        /// The hex-encoded public key of the node to screen.
        pub node_pubkey: String = "screen_node_input_node_pubkey",
    }
}

impl InputRecord for ScreenNodeInput {}

wire_record! {
    /// Report a payment to a compliance provider.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct RegisterPaymentInput("register_payment_input") {
        pub provider: ComplianceProvider = "register_payment_input_provider",
        pub payment_id: String = "register_payment_input_payment_id",
        /// The public key of the counterparty node.
        pub node_pubkey: String = "register_payment_input_node_pubkey",
        pub direction: PaymentDirection = "register_payment_input_direction",
    }
}

impl InputRecord for RegisterPaymentInput {}

// --- Outputs --- //

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct ScreenBitcoinAddressesOutput("screen_bitcoin_addresses_output") {
        /// One rating per screened address, in request order.
        pub ratings: Vec<RiskRating> = "screen_bitcoin_addresses_output_ratings",
    }
}

pub const SCREEN_BITCOIN_ADDRESSES_OUTPUT_FRAGMENT: &str = r#"
fragment ScreenBitcoinAddressesOutputFragment on ScreenBitcoinAddressesOutput {
    __typename
    screen_bitcoin_addresses_output_ratings: ratings
}
"#;

output_fragment!(
    ScreenBitcoinAddressesOutput,
    SCREEN_BITCOIN_ADDRESSES_OUTPUT_FRAGMENT,
);

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct ScreenNodeOutput("screen_node_output") {
        pub rating: RiskRating = "screen_node_output_rating",
    }
}

pub const SCREEN_NODE_OUTPUT_FRAGMENT: &str = r#"
fragment ScreenNodeOutputFragment on ScreenNodeOutput {
    __typename
    screen_node_output_rating: rating
}
"#;

output_fragment!(ScreenNodeOutput, SCREEN_NODE_OUTPUT_FRAGMENT);

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct RegisterPaymentOutput("register_payment_output") {
        pub payment: EntityRef<entity::OutgoingPayment> =
            "register_payment_output_payment",
    }
}

pub const REGISTER_PAYMENT_OUTPUT_FRAGMENT: &str = r#"
fragment RegisterPaymentOutputFragment on RegisterPaymentOutput {
    __typename
    register_payment_output_payment: payment {
        id
    }
}
"#;

output_fragment!(RegisterPaymentOutput, REGISTER_PAYMENT_OUTPUT_FRAGMENT);
