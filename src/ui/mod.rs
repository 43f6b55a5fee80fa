// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`swipe_button`] - The swipe-to-confirm control and its iced component
//! - [`widgets`] - Drawing helpers shared by canvas programs (spinner)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod swipe_button;
pub mod theming;
pub mod widgets;
