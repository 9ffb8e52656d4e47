mod arrival;
mod queue;

pub use arrival::Arrival;
pub use queue::{DelayOutOfRange, SpikeQueue};

/// Index of an event-emitting entity within a fixed population.
pub type SourceId = u32;

/// Number of whole simulation steps, used for delays and elapsed time.
pub type Delay = u32;
