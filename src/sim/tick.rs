//! Fixed-step simulation tick
//!
//! One tick per rendered frame. Vehicles do not sense each other, so update
//! order does not matter; they are still visited in stored order.

use super::state::SimState;

/// Advance every vehicle by one frame
pub fn tick(state: &mut SimState) {
    let config = &state.config;
    for vehicle in &mut state.vehicles {
        vehicle.update(config);
    }
    state.frame += 1;

    if log::log_enabled!(log::Level::Trace) {
        for v in &state.vehicles {
            log::trace!(
                "frame {} {}: pos=({:.2}, {:.2}) heading={:.3} wheels=({:.3}, {:.3})",
                state.frame,
                v.label,
                v.pos.x,
                v.pos.y,
                v.heading,
                v.speeds.left,
                v.speeds.right
            );
        }
    }
}
