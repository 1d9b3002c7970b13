//! Catch bar physics.
//!
//! One integration step per tick: held thrust accelerates the bar upward
//! (ramping with hold duration), gravity pulls it down otherwise, then the
//! floor and ceiling resolve collisions. Holding against the ceiling pins
//! the bar; falling into the floor rebounds if the impact is hard enough.

use crate::constants::{
    BASE_THRUST, BOUNCE_DAMPENING, FLOOR_BOUNCE_THRESHOLD, GRAVITY, HOLD_ACCELERATION, MAX_BAR_POS,
    MAX_THRUST,
};

use super::types::ReelState;

/// Advance the bar by one tick.
pub fn update_bar(state: &mut ReelState) {
    if state.thrust_engaged {
        state.hold_ticks += 1;
        let thrust = (BASE_THRUST + state.hold_ticks as f64 * HOLD_ACCELERATION).min(MAX_THRUST);
        state.bar_vel += thrust;
    } else {
        state.hold_ticks = 0;
        state.bar_vel += GRAVITY;
    }

    state.bar_pos += state.bar_vel;

    // Floor
    if state.bar_pos <= 0.0 {
        state.bar_pos = 0.0;
        if state.bar_vel < FLOOR_BOUNCE_THRESHOLD {
            state.bar_vel *= BOUNCE_DAMPENING;
        } else {
            state.bar_vel = 0.0;
        }
    }

    // Ceiling
    if state.bar_pos >= MAX_BAR_POS {
        state.bar_pos = MAX_BAR_POS;
        if state.bar_vel > 0.0 {
            if state.thrust_engaged {
                state.bar_vel = 0.0;
            } else {
                state.bar_vel *= BOUNCE_DAMPENING;
            }
        }
    }
}
