/// What the decoder does with a block whose `type` it does not know.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownBlockPolicy {
    /// Keep it as `BlockContent::Unknown` with its raw payload.
    #[default]
    Preserve,
    /// Drop it and count it in `DecodedBlocks::skipped`.
    Skip,
    /// Fail with `DecodeError::UnknownBlockType`.
    Reject,
}

/// Configuration for [`BlockDecoder`](crate::BlockDecoder).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    pub unknown_blocks: UnknownBlockPolicy,
}

impl DecoderConfig {
    #[must_use]
    pub fn with_unknown_blocks(mut self, policy: UnknownBlockPolicy) -> Self {
        self.unknown_blocks = policy;
        self
    }
}
