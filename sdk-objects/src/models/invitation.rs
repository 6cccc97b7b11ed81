//! UMA invitations.

#[cfg(any(test, feature = "test-utils"))]
use proptest_derive::Arbitrary;

use crate::{
    entity::{self, EntityRef},
    enums::RegionCode,
    wire::InputRecord,
};

// --- Inputs --- //

wire_record! {
    /// Create an UMA invitation.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CreateUmaInvitationInput("create_uma_invitation_input") {
        /// The UMA of the inviter, which identifies them to the invitee.
        pub inviter_uma: String = "create_uma_invitation_input_inviter_uma",
    }
}

impl InputRecord for CreateUmaInvitationInput {}

wire_record! {
    /// Create an UMA invitation which is eligible for incentives.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CreateInvitationWithIncentivesInput(
        "create_invitation_with_incentives_input"
    ) {
        pub inviter_uma: String =
            "create_invitation_with_incentives_input_inviter_uma",
        /// A hash of the inviter's phone number.
        pub inviter_phone_hash: String =
            "create_invitation_with_incentives_input_inviter_phone_hash",
        pub inviter_region: RegionCode =
            "create_invitation_with_incentives_input_inviter_region",
    }
}

impl InputRecord for CreateInvitationWithIncentivesInput {}

wire_record! {
    /// Claim an UMA invitation.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct ClaimUmaInvitationInput("claim_uma_invitation_input") {
        /// The code the inviter shared.
        pub invitation_code: String =
            "claim_uma_invitation_input_invitation_code",
        /// The invitee's UMA. This is sent to the inviter.
        pub invitee_uma: String = "claim_uma_invitation_input_invitee_uma",
    }
}

impl InputRecord for ClaimUmaInvitationInput {}

wire_record! {
    /// Claim an UMA invitation which is eligible for incentives.
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct ClaimUmaInvitationWithIncentivesInput(
        "claim_uma_invitation_with_incentives_input"
    ) {
        pub invitation_code: String =
            "claim_uma_invitation_with_incentives_input_invitation_code",
        pub invitee_uma: String =
            "claim_uma_invitation_with_incentives_input_invitee_uma",
        pub invitee_phone_hash: String =
            "claim_uma_invitation_with_incentives_input_invitee_phone_hash",
        pub invitee_region: RegionCode =
            "claim_uma_invitation_with_incentives_input_invitee_region",
    }
}

impl InputRecord for ClaimUmaInvitationWithIncentivesInput {}

// --- Outputs --- //

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CreateUmaInvitationOutput("create_uma_invitation_output") {
        pub invitation: EntityRef<entity::UmaInvitation> =
            "create_uma_invitation_output_invitation",
    }
}

pub const CREATE_UMA_INVITATION_OUTPUT_FRAGMENT: &str = r#"
fragment CreateUmaInvitationOutputFragment on CreateUmaInvitationOutput {
    __typename
    create_uma_invitation_output_invitation: invitation {
        id
    }
}
"#;

output_fragment!(
    CreateUmaInvitationOutput,
    CREATE_UMA_INVITATION_OUTPUT_FRAGMENT,
);

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CreateInvitationWithIncentivesOutput(
        "create_invitation_with_incentives_output"
    ) {
        pub invitation: EntityRef<entity::UmaInvitation> =
            "create_invitation_with_incentives_output_invitation",
    }
}

pub const CREATE_INVITATION_WITH_INCENTIVES_OUTPUT_FRAGMENT: &str = r#"
fragment CreateInvitationWithIncentivesOutputFragment on CreateInvitationWithIncentivesOutput {
    __typename
    create_invitation_with_incentives_output_invitation: invitation {
        id
    }
}
"#;

output_fragment!(
    CreateInvitationWithIncentivesOutput,
    CREATE_INVITATION_WITH_INCENTIVES_OUTPUT_FRAGMENT,
);

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct ClaimUmaInvitationOutput("claim_uma_invitation_output") {
        pub invitation: EntityRef<entity::UmaInvitation> =
            "claim_uma_invitation_output_invitation",
    }
}

pub const CLAIM_UMA_INVITATION_OUTPUT_FRAGMENT: &str = r#"
fragment ClaimUmaInvitationOutputFragment on ClaimUmaInvitationOutput {
    __typename
    claim_uma_invitation_output_invitation: invitation {
        id
    }
}
"#;

output_fragment!(
    ClaimUmaInvitationOutput,
    CLAIM_UMA_INVITATION_OUTPUT_FRAGMENT,
);

wire_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct ClaimUmaInvitationWithIncentivesOutput(
        "claim_uma_invitation_with_incentives_output"
    ) {
        pub invitation: EntityRef<entity::UmaInvitation> =
            "claim_uma_invitation_with_incentives_output_invitation",
    }
}

pub const CLAIM_UMA_INVITATION_WITH_INCENTIVES_OUTPUT_FRAGMENT: &str = r#"
fragment ClaimUmaInvitationWithIncentivesOutputFragment on ClaimUmaInvitationWithIncentivesOutput {
    __typename
    claim_uma_invitation_with_incentives_output_invitation: invitation {
        id
    }
}
"#;

output_fragment!(
    ClaimUmaInvitationWithIncentivesOutput,
    CLAIM_UMA_INVITATION_WITH_INCENTIVES_OUTPUT_FRAGMENT,
);
