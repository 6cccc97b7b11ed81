wire_enum! {
    /// Whether a payment was sent or received by our node.
    pub enum PaymentDirection {
        /// A direction this version of the SDK doesn't know about.
        Undefined,

        Sent = "SENT",
        Received = "RECEIVED",
    }
}
