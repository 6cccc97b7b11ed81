wire_enum! {
    /// Who initiated a withdrawal request.
    pub enum RequestInitiator {
        /// An initiator this version of the SDK doesn't know about.
        Undefined,

        Customer = "CUSTOMER",
        Lightspark = "LIGHTSPARK",
    }
}
