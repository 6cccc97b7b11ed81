wire_enum! {
    /// Where the funds for an on-chain withdrawal come from.
    pub enum WithdrawalMode {
        /// A mode this version of the SDK doesn't know about.
        Undefined,

        /// Only spend the node's on-chain wallet balance.
        WalletOnly = "WALLET_ONLY",
        /// Spend the on-chain wallet first, then close channels to cover the
        /// rest.
        WalletThenChannels = "WALLET_THEN_CHANNELS",
    }
}
