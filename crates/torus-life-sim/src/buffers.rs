//! Double-buffered kinematic state.
//!
//! Two arenas addressed by particle index. One is active (the committed
//! state of the last completed tick, read-only during a tick); the other
//! is writable and is filled slot by slot while a tick is resolved.
//! Committing a tick flips the selector, never copies the committed range.
//!
//! Newly inserted particles land in the writable arena only, past the end
//! of the active one, and become active at the next swap.

use serde::{Deserialize, Serialize};

use torus_life_core::vector::Vector2;

/// Position and velocity of one particle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    pub position: Vector2,
    pub velocity: Vector2,
}

impl Kinematics {
    pub fn at_rest(position: Vector2) -> Self {
        Self {
            position,
            velocity: Vector2::ZERO,
        }
    }
}

/// The active/writable buffer pair and the selector between them.
#[derive(Debug, Clone, Default)]
pub struct StateBuffers {
    buffers: [Vec<Kinematics>; 2],
    /// Index into `buffers` of the active arena (0 or 1).
    active: usize,
}

impl StateBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed slots.
    pub fn len(&self) -> usize {
        self.buffers[self.active].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slots inserted since the last swap, not yet visible in the active arena.
    pub fn pending(&self) -> usize {
        self.buffers[self.active ^ 1].len() - self.len()
    }

    /// Append a new slot to the writable arena. The active arena is untouched.
    pub fn push(&mut self, state: Kinematics) {
        self.buffers[self.active ^ 1].push(state);
    }

    /// The committed state.
    pub fn active(&self) -> &[Kinematics] {
        &self.buffers[self.active]
    }

    /// Borrow the active arena for reading and the writable one for writing.
    ///
    /// The writable slice may be longer than the active one by the pending
    /// slots; a tick only writes the first `len()` of them.
    pub fn split(&mut self) -> (&[Kinematics], &mut [Kinematics]) {
        let [first, second] = &mut self.buffers;
        if self.active == 0 {
            (first.as_slice(), second.as_mut_slice())
        } else {
            (second.as_slice(), first.as_mut_slice())
        }
    }

    /// Make the writable arena active. Call only once every committed slot
    /// was written.
    ///
    /// Pending slots are copied into the new writable arena so both arenas
    /// are equal in length again.
    pub fn swap(&mut self) {
        self.active ^= 1;
        let [first, second] = &mut self.buffers;
        let (active, writable) = if self.active == 0 {
            (first, second)
        } else {
            (second, first)
        };
        let carried = writable.len();
        writable.extend_from_slice(&active[carried..]);
    }

    pub fn active_index(&self) -> usize {
        self.active
    }
}
