wire_enum! {
    /// The kind of event a webhook notifies us about.
    pub enum WebhookEventType {
        /// An event type this version of the SDK doesn't know about.
        Undefined,

        PaymentFinished = "PAYMENT_FINISHED",
        ForceClosure = "FORCE_CLOSURE",
        WithdrawalFinished = "WITHDRAWAL_FINISHED",
        FundsReceived = "FUNDS_RECEIVED",
        NodeStatus = "NODE_STATUS",
        UmaInvitationClaimed = "UMA_INVITATION_CLAIMED",
        WalletStatus = "WALLET_STATUS",
        WalletOutgoingPaymentFinished = "WALLET_OUTGOING_PAYMENT_FINISHED",
        WalletIncomingPaymentFinished = "WALLET_INCOMING_PAYMENT_FINISHED",
        WalletWithdrawalFinished = "WALLET_WITHDRAWAL_FINISHED",
        WalletFundsReceived = "WALLET_FUNDS_RECEIVED",
        RemoteSigning = "REMOTE_SIGNING",
        LowBalance = "LOW_BALANCE",
        HighBalance = "HIGH_BALANCE",
        ChannelOpeningFees = "CHANNEL_OPENING_FEES",
    }
}

impl WebhookEventType {
    /// Whether this event concerns a wallet rather than a node.
    pub fn is_wallet_event(self) -> bool {
        matches!(
            self,
            Self::WalletStatus
                | Self::WalletOutgoingPaymentFinished
                | Self::WalletIncomingPaymentFinished
                | Self::WalletWithdrawalFinished
                | Self::WalletFundsReceived
        )
    }
}
