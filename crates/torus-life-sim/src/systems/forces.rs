//! Pairwise force model: range pre-filter, force curve, and summation.

use torus_life_core::constants::{
    FORCE_RAMP, FORCE_SHELL_PEAK, FORCE_SHELL_WIDTH, INTERACTION_RADIUS,
};
use torus_life_core::vector::Vector2;

use crate::buffers::Kinematics;
use crate::systems::TickContext;

/// Signed force magnitude at `distance` between two particles of radius `particle_size`.
///
/// - Overlapping (`distance < 2 * particle_size`): `distance - 2 * particle_size`,
///   a negative hard-core term.
/// - Otherwise, with `d = distance - 2 * particle_size`: ramps up as `d * 0.04`
///   until `d = 25`, back down as `2 - d * 0.04` until `d = 50`, then zero.
pub fn force_magnitude(distance: f64, particle_size: f64) -> f64 {
    let contact = 2.0 * particle_size;
    if distance < contact {
        return distance - contact;
    }
    let d = distance - contact;
    if d <= FORCE_SHELL_PEAK {
        d * FORCE_RAMP
    } else if d <= FORCE_SHELL_WIDTH {
        2.0 - d * FORCE_RAMP
    } else {
        0.0
    }
}

/// Cheap rejection test run before the torus delta and force curve.
///
/// True when the pair is separated by more than `INTERACTION_RADIUS` on
/// either axis, measuring each axis the short way around the torus. Any
/// pair whose true distance is within the radius passes.
pub fn is_too_far(p: Vector2, q: Vector2, width: f64, height: f64) -> bool {
    let dx = (p.x - q.x).abs();
    let dy = (p.y - q.y).abs();
    dx.min(width - dx) > INTERACTION_RADIUS || dy.min(height - dy) > INTERACTION_RADIUS
}

pub fn in_range(p: Vector2, q: Vector2, width: f64, height: f64) -> bool {
    !is_too_far(p, q, width, height)
}

/// Force exerted on `p` by `q`, given their types' coefficient.
///
/// The shell force is scaled by `attraction`; the hard-core term is not,
/// so overlapping particles separate whatever their affinity.
pub fn pair_force(p: Vector2, q: Vector2, attraction: f64, ctx: &TickContext<'_>) -> Vector2 {
    let delta = Vector2::shortest_torus_delta(p, q, ctx.width, ctx.height);
    let mut magnitude = force_magnitude(delta.length(), ctx.particle_size);
    if magnitude > 0.0 {
        magnitude *= attraction;
    }
    delta * magnitude
}

/// Sum of the forces on particle `index` from every other particle in `current`.
///
/// Neighbours are visited from the last index to the first, so the
/// floating-point accumulation order is fixed for a given arena.
pub fn net_force(index: usize, current: &[Kinematics], ctx: &TickContext<'_>) -> Vector2 {
    let position = current[index].position;
    let kind = ctx.particles[index].kind();
    let mut sum = Vector2::ZERO;

    for other in (0..current.len()).rev() {
        if other == index {
            continue;
        }
        let other_position = current[other].position;
        if is_too_far(position, other_position, ctx.width, ctx.height) {
            continue;
        }
        let attraction = ctx.matrix.get(kind, ctx.particles[other].kind());
        sum += pair_force(position, other_position, attraction, ctx);
    }
    sum
}
