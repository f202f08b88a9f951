use crate::element::Element;
use crate::position::PositionCss;
use crate::Edge;

/// Parses the numeric prefix of a CSS pixel string (`"20px"`, `"10.5px"`,
/// `"-4px"`). Returns `None` when no numeric prefix exists.
pub(crate) fn parse_px(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let mut end = 0;
    for (i, ch) in trimmed.char_indices() {
        match ch {
            '0'..='9' | '.' => end = i + 1,
            '-' | '+' if i == 0 => end = i + 1,
            _ => break,
        }
    }
    if end == 0 {
        return None;
    }
    trimmed[..end].parse::<f64>().ok()
}

/// Rounds a pixel value to integer thousandths (half away from zero).
///
/// Comparing thousandths instead of floats keeps the tolerance exact and
/// avoids `f64::round`, which is unavailable without `std`.
pub(crate) fn thousandths(value: f64) -> i64 {
    let scaled = value * 1000.0;
    if scaled >= 0.0 {
        (scaled + 0.5) as i64
    } else {
        (scaled - 0.5) as i64
    }
}

fn rounded(value: Option<&str>) -> Option<i64> {
    value.and_then(parse_px).map(thousandths)
}

/// Returns whether `position` meaningfully differs from the element's live
/// computed style for the watched edge properties.
///
/// Both sides are rounded to three decimal digits before comparison, so
/// sub-pixel drift from browser rounding does not register as a change.
/// A mismatch in presence (one side constrained, the other not) is always a
/// change. Edges outside `watched` are ignored even when they differ.
pub fn has_changes<E: Element>(element: &E, position: &PositionCss, watched: &[Edge]) -> bool {
    watched.iter().any(|&edge| {
        let candidate = position.edge(edge).map(thousandths);
        let live = rounded(element.computed_edge(edge).as_deref());
        if candidate != live {
            ptrace!(
                edge = edge.as_css(),
                ?candidate,
                ?live,
                "has_changes: edge differs"
            );
            true
        } else {
            false
        }
    })
}
