//! A headless anchored-positioning and transition engine for floating UI
//! elements (menus, tooltips, notifications, dialogs).
//!
//! This crate covers the part between "an anchor resolved to raw
//! coordinates" and "styles on the element": building the position CSS,
//! detecting meaningful changes against the live style, running the
//! animated-transition lifecycle (priming, lazy listener binding, cleanup,
//! and a timeout-guarded fallback), and keeping per-placee placement memory.
//!
//! It is UI-agnostic. A host layer (DOM, retained-mode GUI, test harness) is
//! expected to provide, via the [`Element`] trait:
//! - computed and inline style access for `position`/`top`/`bottom`/
//!   `left`/`right`
//! - class mutation and a synchronous reflow
//! - transition lifecycle signals (start/end/cancel) and the current time
//!
//! Anchor resolution and bounds clamping are collaborators: they enter only
//! as an opaque resolver callback on [`Positioning::position`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod behaviour;
mod detect;
mod element;
mod key;
mod position;
mod state;
mod transition;
mod types;


pub use behaviour::{PlacementSpec, Positioning, PositioningConfig, ResolvedPlacement};
pub use detect::has_changes;
pub use element::Element;
pub use position::{apply_position_css, PositionCss};
pub use state::{PlaceeState, PositioningState};
pub use transition::{Transition, TransitionDetail, Transitions, FALLBACK_MARGIN_MS};
pub use types::{Bounds, Edge, PlaceeId, PositionMode, SignalKind, StyleProp, TransitionSignal};

#[doc(hidden)]
pub use key::StateKey;
