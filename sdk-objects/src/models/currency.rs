//! Currency amounts as returned by fee estimates and test-mode funding.

#[cfg(any(test, feature = "test-utils"))]
use common::test_utils::arbitrary;
#[cfg(any(test, feature = "test-utils"))]
use proptest_derive::Arbitrary;

use crate::enums::CurrencyUnit;

// --- Values --- //

wire_record! {
    /// An amount of currency, in the unit it was denominated in and converted
    /// to the account's preferred currency.
    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CurrencyAmount("currency_amount") {
        pub original_value: i64 = "currency_amount_original_value",
        pub original_unit: CurrencyUnit = "currency_amount_original_unit",
        pub preferred_currency_unit: CurrencyUnit =
            "currency_amount_preferred_currency_unit",
        /// In the smallest unit of the preferred currency, e.g. cents for USD.
        pub preferred_currency_value_rounded: i64 =
            "currency_amount_preferred_currency_value_rounded",
        /// Unrounded; for display only.
        #[cfg_attr(
            any(test, feature = "test-utils"),
            proptest(strategy = "arbitrary::any_approx_value()")
        )]
        pub preferred_currency_value_approx: f64 =
            "currency_amount_preferred_currency_value_approx",
    }
}

impl CurrencyAmount {
    /// The original value in millisatoshis, if it was denominated in bitcoin
    /// and the conversion doesn't overflow.
    pub fn to_msats(&self) -> Option<i64> {
        let msats_per_unit: i64 = match self.original_unit {
            CurrencyUnit::Bitcoin => 100_000_000_000,
            CurrencyUnit::Millibitcoin => 100_000_000,
            CurrencyUnit::Microbitcoin => 100_000,
            CurrencyUnit::Satoshi => 1_000,
            CurrencyUnit::Nanobitcoin => 100,
            CurrencyUnit::Millisatoshi => 1,
            CurrencyUnit::Usd
            | CurrencyUnit::Mxn
            | CurrencyUnit::Php
            | CurrencyUnit::Undefined => return None,
        };
        self.original_value.checked_mul(msats_per_unit)
    }
}
