// SPDX-License-Identifier: MPL-2.0
//! Swipe-to-confirm control.
//!
//! The user drags a hint across the control; past a configurable fraction of
//! the width the swipe is confirmed, the control morphs into a spinner and
//! waits for the host to report a result.
//!
//! - [`gesture`] - drag tracking and release classification
//! - [`animation`] - clock-injected tweens
//! - [`state`] - the [`SwipeControl`] state machine
//! - [`canvas`] - drawing and pointer translation
//! - [`component`] - iced component used by the demo

pub mod animation;
pub mod appearance;
pub mod canvas;
pub mod component;
pub mod gesture;
pub mod state;

pub use appearance::Appearance;
pub use canvas::{CanvasMessage, PointerEvent, SwipeCanvas};
pub use component::{Event, Message, SwipeButton};
pub use gesture::{classify_release, GestureSession, SwipeOutcome, TrackGeometry};
pub use state::{ControlEvent, RenderState, ResultKind, SwipeControl, VisualState};
