wire_enum! {
    /// The lifecycle status of a Lightspark wallet.
    pub enum WalletStatus {
        /// A status this version of the SDK doesn't know about.
        Undefined,

        /// The wallet has not been set up yet and is ready to be deployed.
        /// This is the default status after the first login.
        NotSetup = "NOT_SETUP",
        /// The wallet is being deployed in the Lightspark infrastructure.
        Deploying = "DEPLOYING",
        /// The wallet has been deployed in the Lightspark infrastructure and
        /// is ready to be initialized.
        Deployed = "DEPLOYED",
        /// The wallet is being initialized.
        Initializing = "INITIALIZING",
        /// The wallet is available and ready to be used.
        Ready = "READY",
        /// The wallet is temporarily unavailable, due to a transient issue or
        /// scheduled maintenance.
        Unavailable = "UNAVAILABLE",
        /// The wallet had an unrecoverable failure. This is not expected to
        /// happen and will be investigated by Lightspark.
        Failed = "FAILED",
        /// The wallet is being terminated.
        Terminating = "TERMINATING",
        /// The wallet has been terminated and is no longer connected to the
        /// Lightning Network. Its funds can only be accessed using the funds
        /// recovery flow.
        Terminated = "TERMINATED",
    }
}

impl WalletStatus {
    /// Whether the wallet can currently send and receive payments.
    #[inline]
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Whether the wallet has reached a state it will never leave.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Failed | Self::Terminated)
    }
}
