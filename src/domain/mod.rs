// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with no GUI dependency.
//!
//! # Modules
//!
//! - [`swipe`]: Swipe control values ([`SwipeDistanceRatio`](swipe::SwipeDistanceRatio),
//!   [`ResetDelay`](swipe::ResetDelay), [`ResetPolicy`](swipe::ResetPolicy))

pub mod swipe;
