//! The projection fragment registry.
//!
//! Every output record is paired with a GraphQL fragment selecting exactly its
//! fields, aliased to their wire names. Callers embed the fragment in their
//! query so the response decodes straight into the record.
//!
//! The fragments are verbatim strings shared with every other Lightspark SDK,
//! so they are written out literally rather than generated.

use crate::{
    models::*,
    wire::{OutputRecord, WireField},
};

/// A registered output record and its fragment.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FragmentEntry {
    /// The output's GraphQL typename, e.g. `"PayInvoiceOutput"`.
    pub typename: &'static str,
    /// e.g. `"PayInvoiceOutputFragment"`.
    pub fragment_name: &'static str,
    /// The verbatim fragment text.
    pub fragment: &'static str,
    /// The output's fields, which the fragment selects.
    pub fields: &'static [WireField],
}

impl FragmentEntry {
    const fn of<T: OutputRecord>() -> Self {
        Self {
            typename: T::TYPENAME,
            fragment_name: T::FRAGMENT_NAME,
            fragment: T::FRAGMENT,
            fields: T::FIELDS,
        }
    }
}

/// Every output record, sorted by typename.
pub static REGISTRY: &[FragmentEntry] = &[
    FragmentEntry::of::<CancelInvoiceOutput>(),
    FragmentEntry::of::<ClaimUmaInvitationOutput>(),
    FragmentEntry::of::<ClaimUmaInvitationWithIncentivesOutput>(),
    FragmentEntry::of::<CreateInvitationWithIncentivesOutput>(),
    FragmentEntry::of::<CreateInvoiceOutput>(),
    FragmentEntry::of::<CreateOfferOutput>(),
    FragmentEntry::of::<CreateTestModeInvoiceOutput>(),
    FragmentEntry::of::<CreateTestModePaymentoutput>(),
    FragmentEntry::of::<CreateUmaInvitationOutput>(),
    FragmentEntry::of::<DeclineToSignMessagesOutput>(),
    FragmentEntry::of::<FailHtlcsOutput>(),
    FragmentEntry::of::<FundNodeOutput>(),
    FragmentEntry::of::<InvoiceForPaymentHashOutput>(),
    FragmentEntry::of::<LightningFeeEstimateOutput>(),
    FragmentEntry::of::<OutgoingPaymentForIdempotencyKeyOutput>(),
    FragmentEntry::of::<PayInvoiceOutput>(),
    FragmentEntry::of::<PayOfferOutput>(),
    FragmentEntry::of::<RegisterPaymentOutput>(),
    FragmentEntry::of::<ReleaseChannelPerCommitmentSecretOutput>(),
    FragmentEntry::of::<ReleasePaymentPreimageOutput>(),
    FragmentEntry::of::<RequestWithdrawalOutput>(),
    FragmentEntry::of::<ScreenBitcoinAddressesOutput>(),
    FragmentEntry::of::<ScreenNodeOutput>(),
    FragmentEntry::of::<SendPaymentOutput>(),
    FragmentEntry::of::<SetInvoicePaymentHashOutput>(),
    FragmentEntry::of::<SignInvoiceOutput>(),
    FragmentEntry::of::<SignMessagesOutput>(),
    FragmentEntry::of::<UpdateChannelPerCommitmentPointOutput>(),
    FragmentEntry::of::<UpdateNodeSharedSecretOutput>(),
    FragmentEntry::of::<WithdrawalFeeEstimateOutput>(),
];

/// Look up a registered output by its GraphQL typename.
pub fn lookup(typename: &str) -> Option<&'static FragmentEntry> {
    REGISTRY
        .binary_search_by(|entry| entry.typename.cmp(typename))
        .ok()
        .map(|idx| &REGISTRY[idx])
}

/// The fragment for output `T`.
#[inline]
pub fn fragment_of<T: OutputRecord>() -> &'static str {
    T::FRAGMENT
}
