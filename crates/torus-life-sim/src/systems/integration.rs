//! Tick integration: forces to velocity to wrapped position.
//!
//! Reads only the active arena and writes only the writable one. Each
//! slot of the writable arena depends on nothing but the frozen active
//! arena, which is what lets the `parallel` feature split the pass.

use torus_life_core::constants::MAX_SPEED;

use crate::buffers::Kinematics;
use crate::systems::{forces, TickContext};

/// Next state of particle `index`.
pub fn step(index: usize, current: &[Kinematics], ctx: &TickContext<'_>) -> Kinematics {
    let state = current[index];
    let force = forces::net_force(index, current, ctx);
    let velocity = (state.velocity + force).limit(MAX_SPEED);
    let position = (state.position + velocity).wrap(ctx.width, ctx.height);
    Kinematics { position, velocity }
}

/// Fill the first `current.len()` slots of `next` from `current`, last index
/// first. Slots past that (particles inserted since the last tick) are left
/// as they are.
pub fn run_sequential(current: &[Kinematics], next: &mut [Kinematics], ctx: &TickContext<'_>) {
    debug_assert!(next.len() >= current.len());
    for index in (0..current.len()).rev() {
        next[index] = step(index, current, ctx);
    }
}

/// Same as `run_sequential`, fanned out over the rayon pool.
///
/// Workers own disjoint slots of `next`; `current` is shared read-only.
/// Every slot keeps its neighbour order, so the output is bit-identical.
/// The call returns only after every slot is written.
#[cfg(feature = "parallel")]
pub fn run_parallel(current: &[Kinematics], next: &mut [Kinematics], ctx: &TickContext<'_>) {
    use rayon::prelude::*;

    debug_assert!(next.len() >= current.len());
    next[..current.len()]
        .par_iter_mut()
        .enumerate()
        .for_each(|(index, slot)| *slot = step(index, current, ctx));
}

#[cfg(not(feature = "parallel"))]
pub fn run(current: &[Kinematics], next: &mut [Kinematics], ctx: &TickContext<'_>) {
    run_sequential(current, next, ctx);
}

#[cfg(feature = "parallel")]
pub fn run(current: &[Kinematics], next: &mut [Kinematics], ctx: &TickContext<'_>) {
    run_parallel(current, next, ctx);
}
