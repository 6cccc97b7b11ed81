/// `Arbitrary`-like proptest strategies for wire-level values.
pub mod arbitrary;
/// Quickly create roundtrip proptest for various serialization schemes.
pub mod roundtrip;

// Dummy values for some commonly appearing fields
pub const DUMMY_NODE_ID: &str =
    "TGlnaHRzcGFya05vZGVXaXRoT1NLOjAxODkzZjI0LTQ1YTktNDk2OC04ZDQ4";
pub const DUMMY_BITCOIN_ADDRESS: &str =
    "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh";
pub const DUMMY_PAYMENT_ID: &str =
    "OutgoingPayment:0189b7f2-0f23-4a42-0000-6f6a6e7c0b1e";
