/// CSS positioning scheme applied to a placee.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionMode {
    Fixed,
    Absolute,
}

impl PositionMode {
    /// The CSS `position` keyword for this mode.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Absolute => "absolute",
        }
    }
}

/// An edge offset property of a placee.
///
/// These are the only properties that participate in change detection and
/// transition animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    pub fn as_css(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// An inline style property this engine reads or writes on a placee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleProp {
    Position,
    Edge(Edge),
}

impl From<Edge> for StyleProp {
    fn from(edge: Edge) -> Self {
        Self::Edge(edge)
    }
}

impl StyleProp {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Edge(edge) => edge.as_css(),
        }
    }
}

/// A rectangle in the anchor resolver's coordinate space.
///
/// Bounds clamping happens in the resolver; this engine only records which
/// bounds a placement used.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Which native transition lifecycle signal a listener is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignalKind {
    Start,
    End,
    Cancel,
}

/// A transition lifecycle signal delivered by the host.
///
/// `pseudo_element` is true when the signal originated from a pseudo-element
/// (e.g. `::before`) rather than the placee itself; end/cancel handling
/// ignores those.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionSignal {
    pub kind: SignalKind,
    pub pseudo_element: bool,
}

impl TransitionSignal {
    pub fn new(kind: SignalKind) -> Self {
        Self {
            kind,
            pseudo_element: false,
        }
    }

    pub fn pseudo(kind: SignalKind) -> Self {
        Self {
            kind,
            pseudo_element: true,
        }
    }
}

/// Default placee identifier for keyed placement state.
pub type PlaceeId = u64;
