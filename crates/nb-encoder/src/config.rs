/// Children per array accepted by one append request.
pub const DEFAULT_MAX_CHILDREN: usize = 100;

/// Levels of nesting accepted below the top-level blocks of one request.
pub const DEFAULT_MAX_NESTING: usize = 2;

/// Limits the encoder enforces before producing a request body.
///
/// ```text
/// ┌──────────────┬─────────┬──────────────────────────────────────────┐
/// │ Field        │ Default │ Checked against                          │
/// ├──────────────┼─────────┼──────────────────────────────────────────┤
/// │ max_children │ 100     │ the top-level list and every `children`  │
/// │ max_nesting  │ 2       │ depth of `children` below the top level  │
/// └──────────────┴─────────┴──────────────────────────────────────────┘
/// ```
///
/// Top-level blocks sit at depth 0, their children at depth 1, and so on.
/// A block deeper than `max_nesting` fails with
/// [`EncodeError::NestingTooDeep`](crate::EncodeError::NestingTooDeep).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
    pub max_children: usize,
    pub max_nesting: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            max_children: DEFAULT_MAX_CHILDREN,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}
