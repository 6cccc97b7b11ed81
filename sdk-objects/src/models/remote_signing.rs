//! Remote signing: the operator's signer answers signing requests from the
//! node and reports secrets and signatures back through these records.

#[cfg(any(test, feature = "test-utils"))]
use common::test_utils::arbitrary;
#[cfg(any(test, feature = "test-utils"))]
use proptest_derive::Arbitrary;

use crate::{
    entity::{self, EntityRef},
    wire::InputRecord,
};

// --- Values --- //

wire_record! {
    /// A signable payload id paired with its signature.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct IdAndSignature("id_and_signature") {
        /// The id of the signable payload.
        pub id: String = "id_and_signature_id",
        pub signature: String = "id_and_signature_signature",
    }
}

// --- Inputs --- //

wire_record! {
    /// Return signatures for a batch of signable payloads.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct SignMessagesInput("sign_messages_input") {
        pub signatures: Vec<IdAndSignature> = "sign_messages_input_signatures",
    }
}

impl InputRecord for SignMessagesInput {}

wire_record! {
    /// Decline to sign payloads which failed validation.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct DeclineToSignMessagesInput("decline_to_sign_messages_input") {
        #[cfg_attr(
            any(test, feature = "test-utils"),
            proptest(strategy = "arbitrary::any_vec_string()")
        )]
        pub payload_ids: Vec<String> =
            "decline_to_sign_messages_input_payload_ids",
    }
}

impl InputRecord for DeclineToSignMessagesInput {}

wire_record! {
    /// Return the signature over an invoice the node asked us to sign.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct SignInvoiceInput("sign_invoice_input") {
        pub invoice_id: String = "sign_invoice_input_invoice_id",
        pub signature: String = "sign_invoice_input_signature",
        /// The recovery id of the recoverable ECDSA signature.
        pub recovery_id: i64 = "sign_invoice_input_recovery_id",
    }
}

impl InputRecord for SignInvoiceInput {}

wire_record! {
    /// Release the preimage of an invoice so the node can settle it.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct ReleasePaymentPreimageInput("release_payment_preimage_input") {
        pub invoice_id: String = "release_payment_preimage_input_invoice_id",
        pub payment_preimage: String =
            "release_payment_preimage_input_payment_preimage",
    }
}

impl InputRecord for ReleasePaymentPreimageInput {}

wire_record! {
    /// Set the payment hash of an invoice whose preimage the signer holds.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct SetInvoicePaymentHashInput("set_invoice_payment_hash_input") {
        pub invoice_id: String = "set_invoice_payment_hash_input_invoice_id",
        pub payment_hash: String = "set_invoice_payment_hash_input_payment_hash",
        /// The 32-byte nonce the preimage was derived from, if any. It comes
        /// back in the release preimage webhook to help recover the preimage.
        pub preimage_nonce: Option<String> =
            "set_invoice_payment_hash_input_preimage_nonce",
    }
}

impl InputRecord for SetInvoicePaymentHashInput {}

wire_record! {
    /// Release a revoked channel state's per-commitment secret.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct ReleaseChannelPerCommitmentSecretInput(
        "release_channel_per_commitment_secret_input"
    ) {
        pub channel_id: String =
            "release_channel_per_commitment_secret_input_channel_id",
        pub per_commitment_secret: String =
            "release_channel_per_commitment_secret_input_per_commitment_secret",
        pub per_commitment_index: i64 =
            "release_channel_per_commitment_secret_input_per_commitment_index",
    }
}

impl InputRecord for ReleaseChannelPerCommitmentSecretInput {}

wire_record! {
    /// Report the next per-commitment point of a channel.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct UpdateChannelPerCommitmentPointInput(
        "update_channel_per_commitment_point_input"
    ) {
        pub channel_id: String =
            "update_channel_per_commitment_point_input_channel_id",
        pub per_commitment_point: String =
            "update_channel_per_commitment_point_input_per_commitment_point",
        pub per_commitment_point_index: i64 =
            "update_channel_per_commitment_point_input_per_commitment_point_index",
    }
}

impl InputRecord for UpdateChannelPerCommitmentPointInput {}

wire_record! {
    /// Report the node's ECDH shared secret.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct UpdateNodeSharedSecretInput("update_node_shared_secret_input") {
        pub node_id: String = "update_node_shared_secret_input_node_id",
        pub shared_secret: String =
            "update_node_shared_secret_input_shared_secret",
    }
}

impl InputRecord for UpdateNodeSharedSecretInput {}

// --- Outputs --- //

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct SignInvoiceOutput("sign_invoice_output") {
        /// The signed invoice.
        pub invoice: EntityRef<entity::Invoice> = "sign_invoice_output_invoice",
    }
}

pub const SIGN_INVOICE_OUTPUT_FRAGMENT: &str = r#"
fragment SignInvoiceOutputFragment on SignInvoiceOutput {
    __typename
    sign_invoice_output_invoice: invoice {
        id
    }
}
"#;

output_fragment!(SignInvoiceOutput, SIGN_INVOICE_OUTPUT_FRAGMENT);

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct ReleasePaymentPreimageOutput("release_payment_preimage_output") {
        pub invoice: EntityRef<entity::Invoice> =
            "release_payment_preimage_output_invoice",
    }
}

pub const RELEASE_PAYMENT_PREIMAGE_OUTPUT_FRAGMENT: &str = r#"
fragment ReleasePaymentPreimageOutputFragment on ReleasePaymentPreimageOutput {
    __typename
    release_payment_preimage_output_invoice: invoice {
        id
    }
}
"#;

output_fragment!(
    ReleasePaymentPreimageOutput,
    RELEASE_PAYMENT_PREIMAGE_OUTPUT_FRAGMENT,
);

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct SetInvoicePaymentHashOutput("set_invoice_payment_hash_output") {
        pub invoice: EntityRef<entity::Invoice> =
            "set_invoice_payment_hash_output_invoice",
    }
}

pub const SET_INVOICE_PAYMENT_HASH_OUTPUT_FRAGMENT: &str = r#"
fragment SetInvoicePaymentHashOutputFragment on SetInvoicePaymentHashOutput {
    __typename
    set_invoice_payment_hash_output_invoice: invoice {
        id
    }
}
"#;

output_fragment!(
    SetInvoicePaymentHashOutput,
    SET_INVOICE_PAYMENT_HASH_OUTPUT_FRAGMENT,
);

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct ReleaseChannelPerCommitmentSecretOutput(
        "release_channel_per_commitment_secret_output"
    ) {
        pub channel: EntityRef<entity::Channel> =
            "release_channel_per_commitment_secret_output_channel",
    }
}

pub const RELEASE_CHANNEL_PER_COMMITMENT_SECRET_OUTPUT_FRAGMENT: &str = r#"
fragment ReleaseChannelPerCommitmentSecretOutputFragment on ReleaseChannelPerCommitmentSecretOutput {
    __typename
    release_channel_per_commitment_secret_output_channel: channel {
        id
    }
}
"#;

output_fragment!(
    ReleaseChannelPerCommitmentSecretOutput,
    RELEASE_CHANNEL_PER_COMMITMENT_SECRET_OUTPUT_FRAGMENT,
);

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct UpdateChannelPerCommitmentPointOutput(
        "update_channel_per_commitment_point_output"
    ) {
        pub channel: EntityRef<entity::Channel> =
            "update_channel_per_commitment_point_output_channel",
    }
}

pub const UPDATE_CHANNEL_PER_COMMITMENT_POINT_OUTPUT_FRAGMENT: &str = r#"
fragment UpdateChannelPerCommitmentPointOutputFragment on UpdateChannelPerCommitmentPointOutput {
    __typename
    update_channel_per_commitment_point_output_channel: channel {
        id
    }
}
"#;

output_fragment!(
    UpdateChannelPerCommitmentPointOutput,
    UPDATE_CHANNEL_PER_COMMITMENT_POINT_OUTPUT_FRAGMENT,
);

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct UpdateNodeSharedSecretOutput("update_node_shared_secret_output") {
        pub node: EntityRef<entity::LightsparkNode> =
            "update_node_shared_secret_output_node",
    }
}

pub const UPDATE_NODE_SHARED_SECRET_OUTPUT_FRAGMENT: &str = r#"
fragment UpdateNodeSharedSecretOutputFragment on UpdateNodeSharedSecretOutput {
    __typename
    update_node_shared_secret_output_node: node {
        id
    }
}
"#;

output_fragment!(
    UpdateNodeSharedSecretOutput,
    UPDATE_NODE_SHARED_SECRET_OUTPUT_FRAGMENT,
);

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct SignMessagesOutput("sign_messages_output") {
        /// The payloads whose signatures the node accepted.
        pub signed_payloads: Vec<EntityRef<entity::SignablePayload>> =
            "sign_messages_output_signed_payloads",
    }
}

pub const SIGN_MESSAGES_OUTPUT_FRAGMENT: &str = r#"
fragment SignMessagesOutputFragment on SignMessagesOutput {
    __typename
    sign_messages_output_signed_payloads: signed_payloads {
        id
    }
}
"#;

output_fragment!(SignMessagesOutput, SIGN_MESSAGES_OUTPUT_FRAGMENT);

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct DeclineToSignMessagesOutput("decline_to_sign_messages_output") {
        pub declined_payloads: Vec<EntityRef<entity::SignablePayload>> =
            "decline_to_sign_messages_output_declined_payloads",
    }
}

pub const DECLINE_TO_SIGN_MESSAGES_OUTPUT_FRAGMENT: &str = r#"
fragment DeclineToSignMessagesOutputFragment on DeclineToSignMessagesOutput {
    __typename
    decline_to_sign_messages_output_declined_payloads: declined_payloads {
        id
    }
}
"#;

output_fragment!(
    DeclineToSignMessagesOutput,
    DECLINE_TO_SIGN_MESSAGES_OUTPUT_FRAGMENT,
);
