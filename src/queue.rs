use thiserror::Error;

use crate::arrival::Arrival;
use crate::{Delay, SourceId};

/// Error returned when an arrival cannot be placed on the ring.
///
/// Either the elapsed time exceeds the scheduled delay, or the remaining
/// wait is larger than the queue's horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("arrival out of range: delay {delay} with {elapsed} elapsed does not fit horizon {max_delay}")]
pub struct DelayOutOfRange {
    pub delay: Delay,
    pub elapsed: Delay,
    pub max_delay: Delay,
}

/// Fixed-horizon delay queue for spike arrivals.
///
/// Keeps one slot per whole-step offset from the present, `max_delay + 1`
/// slots in total, and rotates a cursor over them instead of moving data.
/// Enqueue and advance are O(1) in the number of pending arrivals; an
/// arrival scheduled `d` steps out lands in the slot the cursor reaches
/// after exactly `d` advances.
///
/// Not synchronized. Wrap in a lock or keep one queue per worker if
/// multiple threads produce arrivals.
pub struct SpikeQueue {
    slots: Box<[Vec<Arrival>]>,
    current: usize,
}

impl SpikeQueue {
    /// Creates a queue that can hold arrivals up to `max_delay` steps out.
    ///
    /// Allocates `max_delay + 1` slots so that a remaining wait of zero
    /// (due on the current step) and a remaining wait of exactly
    /// `max_delay` both have a distinct slot.
    pub fn new(max_delay: Delay) -> Self {
        let num_slots = max_delay as usize + 1;

        Self {
            slots: (0..num_slots)
                .map(|_| Vec::new())
                .collect::<Vec<_>>()
                .into_boxed_slice(),
            current: 0,
        }
    }

    /// Physical index of the slot `offset` steps ahead of the cursor.
    #[inline(always)]
    fn slot_index(&self, offset: usize) -> usize {
        debug_assert!(
            offset < self.slots.len(),
            "offset {offset} out of bounds (num_slots: {})",
            self.slots.len()
        );

        let entry = self.current + offset;
        if entry >= self.slots.len() {
            entry - self.slots.len()
        } else {
            entry
        }
    }

    /// Schedules an arrival from `source`.
    ///
    /// `delay` is the full scheduled delay and `elapsed` is how many steps
    /// of it have already passed in transit, so the arrival surfaces in
    /// [`current`](Self::current) after exactly `delay - elapsed` more
    /// advances. A remaining wait of zero lands in the slot being read
    /// right now. Duplicate arrivals accumulate; nothing is deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`DelayOutOfRange`] if `elapsed` exceeds `delay` or the
    /// remaining wait exceeds [`max_delay`](Self::max_delay). The queue is
    /// left untouched.
    #[inline]
    pub fn enqueue(
        &mut self,
        source: SourceId,
        delay: Delay,
        elapsed: Delay,
    ) -> Result<(), DelayOutOfRange> {
        let max_delay = self.max_delay();
        let remaining = match delay.checked_sub(elapsed) {
            Some(remaining) if remaining <= max_delay => remaining,
            _ => {
                return Err(DelayOutOfRange {
                    delay,
                    elapsed,
                    max_delay,
                })
            }
        };

        let idx = self.slot_index(remaining as usize);
        self.slots[idx].push(Arrival::new(source, delay));
        Ok(())
    }

    /// Moves the queue one step forward.
    ///
    /// Clears the current slot, read or not, and rotates the cursor to the
    /// next one. Arrivals not consumed before this call are gone; the
    /// slot's storage is retained for reuse.
    #[inline]
    pub fn advance(&mut self) {
        self.slots[self.current].clear();
        self.current += 1;
        if self.current == self.slots.len() {
            self.current = 0;
        }
    }

    /// Arrivals due on the current step, in enqueue order.
    ///
    /// A live view into the current slot: valid until the next
    /// [`advance`](Self::advance) or [`enqueue`](Self::enqueue).
    #[inline]
    pub fn current(&self) -> &[Arrival] {
        &self.slots[self.current]
    }

    /// Total number of pending arrivals across all slots.
    pub fn len(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// Returns `true` if no arrivals are pending anywhere on the ring.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    #[inline]
    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    /// Largest remaining wait this queue accepts, in steps.
    #[inline]
    pub fn max_delay(&self) -> Delay {
        (self.slots.len() - 1) as Delay
    }

    /// Clears every slot and returns the cursor to its initial position.
    ///
    /// Slot storage is retained, so a reset queue re-fills without
    /// reallocating.
    pub fn reset(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.clear();
        }
        self.current = 0;
    }
}
