wire_enum! {
    /// A compliance provider used to screen nodes and register payments.
    pub enum ComplianceProvider {
        /// A provider this version of the SDK doesn't know about.
        Undefined,

        Chainalysis = "CHAINALYSIS",
    }
}
