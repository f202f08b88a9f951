use alloc::format;
use alloc::string::String;

use crate::element::Element;
use crate::{Edge, PositionMode};

/// A normalized position descriptor: a positioning mode plus up to four
/// optional edge offsets in px.
///
/// An absent edge means "this edge is unconstrained" and is removed from the
/// element's inline style on apply. The builder never fabricates an offset:
/// both edges of an axis are present only when the caller supplied both.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionCss {
    pub mode: PositionMode,
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
}

impl PositionCss {
    /// Builds a descriptor from raw numeric offsets.
    ///
    /// Pure; cannot fail for well-formed numeric input.
    pub fn new(
        mode: PositionMode,
        left: Option<f64>,
        top: Option<f64>,
        right: Option<f64>,
        bottom: Option<f64>,
    ) -> Self {
        Self {
            mode,
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn edge(&self, edge: Edge) -> Option<f64> {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }

    /// The pixel-formatted value for `edge`, e.g. `Some("20px")`, or `None`
    /// when the edge is unconstrained. Never an empty string.
    pub fn edge_px(&self, edge: Edge) -> Option<String> {
        self.edge(edge).map(to_px)
    }
}

/// Formats a numeric offset exactly as `"<n>px"`.
pub(crate) fn to_px(value: f64) -> String {
    format!("{value}px")
}

/// Applies a descriptor to the element's inline style.
///
/// Sets `position` and every present edge; absent edges are removed so stale
/// offsets from a previous placement cannot constrain the new one.
pub fn apply_position_css<E: Element>(element: &mut E, position: &PositionCss) {
    ptrace!(mode = position.mode.as_css(), "apply_position_css");
    element.set_position_mode(position.mode);
    for edge in Edge::ALL {
        match position.edge_px(edge) {
            Some(value) => element.set_style(edge.into(), &value),
            None => element.remove_style(edge.into()),
        }
    }
}
