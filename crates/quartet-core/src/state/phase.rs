//! Two-phase control discipline marker.

/// Control phase of the fetch/execute state machine.
///
/// The phase alternates strictly Fetch → Execute → Fetch, except while the
/// halt latch is set, when the toggle itself is frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Phase {
    /// Next step issues an instruction address to the external memory port.
    #[default]
    Fetch,
    /// Next step decodes the latched word and commits its results.
    Execute,
}

impl Phase {
    /// Returns the opposite phase.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Fetch => Self::Execute,
            Self::Execute => Self::Fetch,
        }
    }
}
