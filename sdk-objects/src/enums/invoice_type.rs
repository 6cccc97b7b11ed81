wire_enum! {
    pub enum InvoiceType {
        /// An invoice type this version of the SDK doesn't know about.
        Undefined,

        /// A standard BOLT 11 invoice.
        Standard = "STANDARD",
        /// An AMP (Atomic Multi-path Payment) invoice.
        Amp = "AMP",
    }
}
