wire_enum! {
    /// The risk rating a crypto sanctions screening provider assigned to a
    /// Lightning Network transaction, node, or address.
    pub enum RiskRating {
        /// A rating this version of the SDK doesn't know about.
        Undefined,

        HighRisk = "HIGH_RISK",
        LowRisk = "LOW_RISK",
        /// The provider has no rating.
        Unknown = "UNKNOWN",
    }
}
