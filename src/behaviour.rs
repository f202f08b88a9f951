use alloc::sync::Arc;

use crate::element::Element;
use crate::key::StateKey;
use crate::position::{apply_position_css, PositionCss};
use crate::state::{PlaceeState, PositioningState};
use crate::transition::{Transition, Transitions};
use crate::{Bounds, Edge, PlaceeId, PositionMode, StyleProp, TransitionSignal};

/// Validated behaviour configuration for a positioning-capable component.
///
/// Designed to be cheap to clone: callback fields are `Arc`s, so a component
/// can tweak one field and keep the rest shared.
#[derive(Clone)]
pub struct PositioningConfig {
    /// Whether placees use `position: fixed` (vs `absolute`). Defaults to
    /// "never".
    pub use_fixed: Arc<dyn Fn() -> bool + Send + Sync>,
    /// Optional bounds provider handed to the anchor resolver; when absent
    /// the resolver picks its own bounds.
    pub get_bounds: Option<Arc<dyn Fn() -> Bounds + Send + Sync>>,
}

impl Default for PositioningConfig {
    fn default() -> Self {
        Self {
            use_fixed: Arc::new(|| false),
            get_bounds: None,
        }
    }
}

impl PositioningConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_use_fixed(mut self, use_fixed: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.use_fixed = Arc::new(use_fixed);
        self
    }

    pub fn with_get_bounds(
        mut self,
        get_bounds: Option<impl Fn() -> Bounds + Send + Sync + 'static>,
    ) -> Self {
        self.get_bounds = get_bounds.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for PositioningConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PositioningConfig")
            .field("get_bounds", &self.get_bounds.is_some())
            .finish_non_exhaustive()
    }
}

/// A validated placement request: an anchor specification (opaque to this
/// engine) plus an optional animated transition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementSpec<A> {
    pub anchor: A,
    pub transition: Option<Transition>,
}

impl<A> PlacementSpec<A> {
    pub fn new(anchor: A) -> Self {
        Self {
            anchor,
            transition: None,
        }
    }

    pub fn with_transition(mut self, transition: Option<Transition>) -> Self {
        self.transition = transition;
        self
    }
}

/// The anchor resolver's output: bounds-clamped raw offsets for the edges
/// the placement constrains. All bounds math happens in the resolver; this
/// engine treats the numbers as final.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedPlacement {
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
}

impl ResolvedPlacement {
    /// A placement constrained by its top-left corner, the common case.
    pub fn at(left: f64, top: f64) -> Self {
        Self {
            left: Some(left),
            top: Some(top),
            right: None,
            bottom: None,
        }
    }
}

/// The positioning behaviour surface: per-component placement memory plus
/// the transition state machine, driven by an externally supplied anchor
/// resolver.
///
/// One instance per positioning-capable component; placees within it are
/// distinguished by `K`.
pub struct Positioning<E: Element, A, K = PlaceeId> {
    config: PositioningConfig,
    state: PositioningState<A, K>,
    transitions: Transitions<E, K>,
}

impl<E: Element, A, K> core::fmt::Debug for Positioning<E, A, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Positioning")
            .field("config", &self.config)
            .field("transitions", &self.transitions)
            .finish_non_exhaustive()
    }
}

impl<E: Element, A, K> Default for Positioning<E, A, K> {
    fn default() -> Self {
        Self {
            config: PositioningConfig::default(),
            state: PositioningState::default(),
            transitions: Transitions::default(),
        }
    }
}

impl<E: Element, A: Clone, K: StateKey + Clone> Positioning<E, A, K> {
    pub fn new(config: PositioningConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The CSS position keyword placements currently use.
    pub fn get_mode(&self) -> PositionMode {
        if (self.config.use_fixed)() {
            PositionMode::Fixed
        } else {
            PositionMode::Absolute
        }
    }

    pub fn config(&self) -> &PositioningConfig {
        &self.config
    }

    /// Last-known placement data for `id`.
    pub fn get_state(&self, id: &K) -> Option<&PlaceeState<A>> {
        self.state.get(id)
    }

    /// Positions a placee.
    ///
    /// `resolve` is the anchor-resolver collaborator: given the anchor, the
    /// positioning mode, and the configured bounds, it returns the clamped
    /// raw offsets. The behaviour turns those into a [`PositionCss`], runs
    /// the transition protocol when the spec requests one, applies the final
    /// styles, and records placement memory.
    pub fn position(
        &mut self,
        id: K,
        element: &mut E,
        spec: &PlacementSpec<A>,
        now_ms: u64,
        resolve: impl FnOnce(&A, PositionMode, Option<&Bounds>) -> ResolvedPlacement,
    ) {
        let mode = self.get_mode();
        let bounds = self.config.get_bounds.as_ref().map(|f| f());
        let resolved = resolve(&spec.anchor, mode, bounds.as_ref());
        let position = PositionCss::new(
            mode,
            resolved.left,
            resolved.top,
            resolved.right,
            resolved.bottom,
        );
        pdebug!(mode = mode.as_css(), "position");

        match spec.transition.as_ref().and_then(Transition::detail) {
            Some(detail) => {
                self.transitions
                    .prime(id.clone(), element, &position, &detail, now_ms);
            }
            // A plain placement does not supersede an in-flight run, so the
            // run's classes must come off here; its own cancel signal would
            // leave them behind.
            None => self.transitions.stop(&id, element),
        }

        // Final values; when primed, the host animates from the
        // intermediate snapshot to these.
        apply_position_css(element, &position);
        element.mark_placed();
        self.state.set(
            id,
            PlaceeState {
                mode,
                anchor: spec.anchor.clone(),
                bounds,
            },
        );
    }

    /// Forwards a host transition lifecycle signal for `id`.
    pub fn on_signal(&mut self, id: &K, element: &mut E, signal: TransitionSignal) {
        self.transitions.on_signal(id, element, signal);
    }

    /// Advances the fallback deadline for `id`; call this from the host's
    /// timer/frame tick while a transition may be in flight.
    pub fn tick(&mut self, id: &K, element: &mut E, now_ms: u64) {
        self.transitions.tick(id, element, now_ms);
    }

    pub fn is_transitioning(&self, id: &K) -> bool {
        self.transitions.is_active(id)
    }

    /// Resets a placee: tears down any in-flight transition, removes the
    /// styles this engine owns, and forgets the placement memory.
    ///
    /// The placement marker is deliberately left on the element, so a later
    /// placement still animates; the "no transition on first-ever
    /// placement" exemption applies once per element, not once per reset.
    pub fn reset(&mut self, id: &K, element: &mut E) {
        self.transitions.stop(id, element);
        element.remove_style(StyleProp::Position);
        for edge in Edge::ALL {
            element.remove_style(edge.into());
        }
        self.state.clear(id);
    }

    /// Forgets all placement memory; per-placee styles and transitions must
    /// be reset individually via [`reset`](Self::reset).
    pub fn clear_state(&mut self) {
        self.state.clear_all();
    }
}
