wire_enum! {
    /// A crypto sanctions screening provider.
    pub enum CryptoSanctionsScreeningProvider {
        /// A provider this version of the SDK doesn't know about.
        Undefined,

        Chainalysis = "CHAINALYSIS",
    }
}
