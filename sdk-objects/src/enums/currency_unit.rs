wire_enum! {
    /// The unit of a [`CurrencyAmount`].
    ///
    /// [`CurrencyAmount`]: crate::models::CurrencyAmount
    pub enum CurrencyUnit {
        /// A unit this version of the SDK doesn't know about.
        Undefined,

        /// Bitcoin, the native medium of value transfer on Lightning.
        Bitcoin = "BITCOIN",
        /// 10^-8 BTC. The unit most commonly used in Lightning transactions.
        Satoshi = "SATOSHI",
        /// 10^-3 sats. Prefer sats where possible.
        Millisatoshi = "MILLISATOSHI",
        /// United States Dollar.
        Usd = "USD",
        /// Mexican Peso.
        Mxn = "MXN",
        /// Philippine Peso.
        Php = "PHP",
        /// 10^-9 BTC.
        Nanobitcoin = "NANOBITCOIN",
        /// 10^-6 BTC.
        Microbitcoin = "MICROBITCOIN",
        /// 10^-3 BTC.
        Millibitcoin = "MILLIBITCOIN",
    }
}

impl CurrencyUnit {
    /// Whether this is a denomination of bitcoin rather than a fiat currency.
    pub fn is_bitcoin(self) -> bool {
        matches!(
            self,
            Self::Bitcoin
                | Self::Satoshi
                | Self::Millisatoshi
                | Self::Nanobitcoin
                | Self::Microbitcoin
                | Self::Millibitcoin
        )
    }
}
