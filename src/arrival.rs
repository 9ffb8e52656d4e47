use crate::{Delay, SourceId};

/// A scheduled spike delivery.
///
/// Carries the originating source and the delay the event was scheduled
/// with. The delay is retained even though the slot holding the record
/// already encodes the remaining wait: consumers downstream of the queue
/// may need the producer's original value.
///
/// Immutable once constructed; owned by the slot that holds it and
/// discarded when that slot is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrival {
    source: SourceId,
    delay: Delay,
}

impl Arrival {
    #[inline]
    pub fn new(source: SourceId, delay: Delay) -> Self {
        Self { source, delay }
    }

    /// Identifier of the entity that emitted the event.
    #[inline]
    pub fn source(&self) -> SourceId {
        self.source
    }

    /// Delay the event was originally scheduled with, in steps.
    #[inline]
    pub fn delay(&self) -> Delay {
        self.delay
    }
}
