wire_enum! {
    /// How quickly an on-chain transaction should confirm, which determines
    /// the fee rate paid.
    pub enum OnChainFeeTarget {
        /// A target this version of the SDK doesn't know about.
        Undefined,

        /// Expected to confirm within 2 blocks.
        High = "HIGH",
        /// Expected to confirm within 6 blocks.
        Medium = "MEDIUM",
        /// Expected to confirm within 18 blocks.
        Low = "LOW",
        /// Expected to confirm within 50 blocks.
        Background = "BACKGROUND",
    }
}

impl OnChainFeeTarget {
    /// The number of blocks the transaction is expected to confirm within, if
    /// the target is known.
    pub fn target_blocks(self) -> Option<u32> {
        match self {
            Self::High => Some(2),
            Self::Medium => Some(6),
            Self::Low => Some(18),
            Self::Background => Some(50),
            Self::Undefined => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::wire::WireEnum;

    #[test]
    fn target_blocks_increase_as_urgency_drops() {
        let blocks = OnChainFeeTarget::KNOWN_VARIANTS
            .iter()
            .map(|target| target.target_blocks().unwrap())
            .collect::<Vec<_>>();
        assert!(blocks.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(OnChainFeeTarget::Undefined.target_blocks(), None);
    }
}
