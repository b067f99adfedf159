// src/store/reducer.rs
//
// The state transition function. Every action produces a new record;
// nothing is mutated in place.

use rand::Rng;

use crate::store::{BoxState, StoreAction};

pub const RANDOM_SIZE_RANGE: std::ops::RangeInclusive<u32> = 1..=201;
pub const RANDOM_OFFSET_RANGE: std::ops::RangeInclusive<u32> = 1..=401;

pub fn reduce<R: Rng>(state: &BoxState, action: &StoreAction, rng: &mut R) -> BoxState {
    match *action {
        StoreAction::ChangeValue { key, value } => state.with_value(key, value),
        StoreAction::UpdateBox => state.computed(),
        // snapshots stay put until the next UpdateBox
        StoreAction::RandomizeBox => BoxState {
            width: rng.gen_range(RANDOM_SIZE_RANGE) as f32,
            height: rng.gen_range(RANDOM_SIZE_RANGE) as f32,
            x_offset: rng.gen_range(RANDOM_OFFSET_RANGE) as f32,
            y_offset: rng.gen_range(RANDOM_OFFSET_RANGE) as f32,
            ..state.clone()
        },
    }
}
