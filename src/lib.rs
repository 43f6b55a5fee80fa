// SPDX-License-Identifier: MPL-2.0
//! `iced_swipe` is a swipe-to-confirm control built with the Iced GUI framework.
//!
//! The user drags a hint across the control to confirm an action; the control
//! then morphs into a spinner until the host reports success or failure.
//! The crate also ships a small demo application, user preference management
//! and a diagnostics log of gestures and state transitions.

#![doc(html_root_url = "https://docs.rs/iced_swipe/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;

#[cfg(test)]
mod test_utils;
