use alloc::string::String;

use crate::{Edge, PositionMode, SignalKind, StyleProp};

/// The placee as seen by this engine.
///
/// The engine is headless: it never owns a real UI node. An adapter
/// implements this trait over whatever its host calls an element (a DOM
/// node, a retained-mode widget, a test double) and forwards the host's
/// transition lifecycle signals back in as [`crate::TransitionSignal`]
/// values.
///
/// Contract notes:
/// - `computed_style` returns the *live* computed value, which must reflect
///   inline styles already set through this trait.
/// - Class mutation is applied as a unit; the engine never adds or removes a
///   partial set.
/// - The placement marker is a fact of the node itself, so it must survive
///   any in-memory state reset on the engine side.
/// - `bind` returns an owned listener handle; the engine releases every
///   handle it acquires exactly once via `unbind`.
pub trait Element {
    /// Opaque handle for a bound transition-signal listener.
    type Listener;

    /// Live computed value of `prop`, e.g. `"20px"`, or `None` when the
    /// host has no value for it.
    fn computed_style(&self, prop: StyleProp) -> Option<String>;

    fn set_style(&mut self, prop: StyleProp, value: &str);

    fn remove_style(&mut self, prop: StyleProp);

    fn add_classes(&mut self, classes: &[String]);

    fn remove_classes(&mut self, classes: &[String]);

    /// Whether this element has ever been positioned.
    fn get_placement(&self) -> bool;

    /// Marks this element as having been positioned at least once.
    fn mark_placed(&mut self);

    /// Forces a synchronous layout flush so styles applied so far are
    /// committed before the next style change.
    fn reflow(&mut self);

    /// Computed `transition-duration` declaration, e.g. `"0.3s, 200ms"`.
    fn transition_duration(&self) -> Option<String>;

    /// Computed `transition-delay` declaration.
    fn transition_delay(&self) -> Option<String>;

    fn bind(&mut self, signal: SignalKind) -> Self::Listener;

    fn unbind(&mut self, listener: Self::Listener);

    /// Convenience: sets the `position` keyword for `mode`.
    fn set_position_mode(&mut self, mode: PositionMode) {
        self.set_style(StyleProp::Position, mode.as_css());
    }

    /// Convenience: live computed value for an edge property.
    fn computed_edge(&self, edge: Edge) -> Option<String> {
        self.computed_style(StyleProp::Edge(edge))
    }
}
