// SPDX-License-Identifier: MPL-2.0
//! Swipe control domain types.
//!
//! - [`SwipeDistanceRatio`]: Share of the width the hint must cover to confirm
//! - [`ResetDelay`]: Pause between a shown result and the morph back
//! - [`ResetPolicy`]: Whether a shown result morphs back to the rest shape

mod newtypes;

pub use newtypes::{ratio_bounds, ResetDelay, ResetPolicy, SwipeDistanceRatio};
