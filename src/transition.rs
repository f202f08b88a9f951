use alloc::string::String;
use alloc::vec::Vec;

use crate::detect::has_changes;
use crate::element::Element;
use crate::key::{KeyMap, StateKey};
use crate::position::PositionCss;
use crate::{Edge, PlaceeId, SignalKind, TransitionSignal};

/// Safety margin added to the derived transition duration when arming the
/// fallback deadline (one 60 Hz frame).
pub const FALLBACK_MARGIN_MS: u64 = 17;

/// Caller-facing animated-transition request: the class names that carry the
/// transition CSS, plus the edge properties to animate.
///
/// `properties` defaults to all four edges when unspecified.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub classes: Vec<String>,
    pub properties: Option<Vec<Edge>>,
}

impl Transition {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
            properties: None,
        }
    }

    pub fn with_properties(mut self, properties: impl IntoIterator<Item = Edge>) -> Self {
        self.properties = Some(properties.into_iter().collect());
        self
    }

    /// Resolves defaults. Returns `None` when the request degrades to "no
    /// transition": no classes to manage, or an explicitly empty property
    /// set.
    pub fn detail(&self) -> Option<TransitionDetail> {
        let properties = match &self.properties {
            Some(props) => props.clone(),
            None => Edge::ALL.to_vec(),
        };
        if self.classes.is_empty() || properties.is_empty() {
            if !self.classes.is_empty() {
                pwarn!("transition requested with an empty property set; degrading to none");
            }
            return None;
        }
        Some(TransitionDetail {
            classes: self.classes.clone(),
            properties,
        })
    }
}

/// A validated transition request with defaults applied.
///
/// Invariant: `classes` and `properties` are both non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionDetail {
    pub classes: Vec<String>,
    pub properties: Vec<Edge>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Classes and intermediate styles are live; waiting for the host's
    /// transition-start signal.
    Priming,
    /// Start was confirmed; end/cancel listeners are bound.
    Running,
}

/// In-flight state for one placee's transition. There is never more than
/// one per placee: a new placement request replaces it wholesale.
struct Run<L> {
    classes: Vec<String>,
    start: Option<L>,
    end: Option<L>,
    cancel: Option<L>,
    deadline_ms: u64,
    phase: Phase,
}

impl<L> Run<L> {
    /// Unbinds every listener this run still owns. Exactly one release
    /// happens per run because the listeners are `take`n.
    fn release<E: Element<Listener = L>>(&mut self, element: &mut E) {
        for listener in [self.start.take(), self.end.take(), self.cancel.take()]
            .into_iter()
            .flatten()
        {
            element.unbind(listener);
        }
    }
}

/// The animated-transition state machine, keyed by placee.
///
/// Per placee the lifecycle is `Idle -> Priming -> Running -> Idle`, where
/// leaving `Running` happens on a genuine end signal (classes removed), a
/// cancel signal (classes left for the superseding transition), or the
/// fallback deadline (treated exactly like an end signal). The adapter
/// drives the machine with [`on_signal`](Self::on_signal) and
/// [`tick`](Self::tick).
pub struct Transitions<E: Element, K = PlaceeId> {
    runs: KeyMap<K, Run<E::Listener>>,
}

impl<E: Element, K> Default for Transitions<E, K> {
    fn default() -> Self {
        Self {
            runs: KeyMap::new(),
        }
    }
}

impl<E: Element, K> core::fmt::Debug for Transitions<E, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Transitions")
            .field("active", &self.runs.len())
            .finish()
    }
}

impl<E: Element, K: StateKey> Transitions<E, K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a transition run is in flight for `id`.
    pub fn is_active(&self, id: &K) -> bool {
        self.runs.contains_key(id)
    }

    /// Starts the animated-transition protocol for a placement.
    ///
    /// No transition runs when the element was never positioned before (it
    /// would animate in from an undefined prior position) or when no watched
    /// property meaningfully changes; in that case any in-flight run is torn
    /// down, classes included, and `false` is returned.
    ///
    /// Otherwise the element is primed: the new `position` mode is set
    /// first (so computed reads reflect the new positioning context), the
    /// current computed values of the constrained edges are captured and
    /// re-applied as an intermediate snapshot holding the element visually
    /// in place, classes are reconciled to exactly `transition.classes`, and
    /// a reflow commits the starting point. The caller then applies the
    /// final descriptor; the browser animates from the snapshot.
    ///
    /// Returns `true` when a run was primed.
    pub fn prime(
        &mut self,
        id: K,
        element: &mut E,
        position: &PositionCss,
        transition: &TransitionDetail,
        now_ms: u64,
    ) -> bool {
        let was_placed = element.get_placement();
        let changed = has_changes(element, position, &transition.properties);
        if !was_placed || !changed {
            ptrace!(was_placed, changed, "prime: applying without animation");
            // Nothing supersedes an in-flight run here, so its classes
            // would be stranded if left behind.
            if let Some(mut run) = self.runs.remove(&id) {
                run.release(element);
                element.remove_classes(&run.classes);
            }
            return false;
        }

        // Supersede any in-flight run: its listeners and deadline die with
        // it, while classes shared with the new spec stay continuously
        // applied.
        let mut stale = Vec::new();
        if let Some(mut run) = self.runs.remove(&id) {
            pdebug!("prime: superseding in-flight transition");
            run.release(element);
            stale.extend(
                run.classes
                    .into_iter()
                    .filter(|class| !transition.classes.contains(class)),
            );
        }

        // The new mode first, so the computed snapshot below is taken in the
        // new positioning context.
        element.set_position_mode(position.mode);

        // Current computed values for the edges the descriptor constrains;
        // unconstrained edges are dropped from the intermediate state too.
        let snapshot: Vec<(Edge, Option<String>)> = Edge::ALL
            .into_iter()
            .map(|edge| {
                let value = position.edge(edge).and_then(|_| element.computed_edge(edge));
                (edge, value)
            })
            .collect();

        if !stale.is_empty() {
            element.remove_classes(&stale);
        }
        for (edge, value) in &snapshot {
            match value {
                Some(value) => element.set_style((*edge).into(), value),
                None => element.remove_style((*edge).into()),
            }
        }
        element.add_classes(&transition.classes);
        element.reflow();

        let deadline_ms = now_ms
            .saturating_add(fallback_duration_ms(element))
            .saturating_add(FALLBACK_MARGIN_MS);

        // End/cancel listeners are bound lazily once a start signal confirms
        // the transition actually began; binding them now could react to an
        // unrelated, stale transition.
        let start = element.bind(SignalKind::Start);
        self.runs.insert(
            id,
            Run {
                classes: transition.classes.clone(),
                start: Some(start),
                end: None,
                cancel: None,
                deadline_ms,
                phase: Phase::Priming,
            },
        );
        true
    }

    /// Delivers a host transition signal for `id`.
    ///
    /// Signals with no matching bound listener are ignored, as are end and
    /// cancel signals originating from pseudo-elements.
    pub fn on_signal(&mut self, id: &K, element: &mut E, signal: TransitionSignal) {
        match signal.kind {
            SignalKind::Start => {
                let Some(run) = self.runs.get_mut(id) else {
                    return;
                };
                if run.phase != Phase::Priming {
                    return;
                }
                if let Some(listener) = run.start.take() {
                    element.unbind(listener);
                }
                run.end = Some(element.bind(SignalKind::End));
                run.cancel = Some(element.bind(SignalKind::Cancel));
                run.phase = Phase::Running;
                ptrace!("transition running");
            }
            SignalKind::End | SignalKind::Cancel => {
                if signal.pseudo_element {
                    return;
                }
                if !matches!(self.runs.get(id).map(|run| run.phase), Some(Phase::Running)) {
                    return;
                }
                if let Some(mut run) = self.runs.remove(id) {
                    run.release(element);
                    if signal.kind == SignalKind::End {
                        element.remove_classes(&run.classes);
                        ptrace!("transition completed");
                    } else {
                        // Cancellation means a new transition superseded
                        // this one and is already managing the classes.
                        ptrace!("transition cancelled");
                    }
                }
            }
        }
    }

    /// Advances the fallback deadline for `id`.
    ///
    /// When neither end nor cancel arrived in time, performs the same
    /// cleanup as a genuine end signal. Guards against hosts and styles that
    /// never deliver a completion signal (zero durations, `display: none`
    /// interruptions).
    pub fn tick(&mut self, id: &K, element: &mut E, now_ms: u64) {
        let expired = self
            .runs
            .get(id)
            .is_some_and(|run| now_ms >= run.deadline_ms);
        if !expired {
            return;
        }
        pdebug!(now_ms, "transition fallback deadline reached");
        if let Some(mut run) = self.runs.remove(id) {
            run.release(element);
            element.remove_classes(&run.classes);
        }
    }

    /// Tears down any in-flight run for `id`, removing its classes and
    /// releasing its listeners. Used on behaviour reset.
    pub fn stop(&mut self, id: &K, element: &mut E) {
        if let Some(mut run) = self.runs.remove(id) {
            run.release(element);
            element.remove_classes(&run.classes);
        }
    }
}

/// Parses one CSS time token (`"0.3s"`, `"200ms"`) to milliseconds.
/// Unparsable tokens degrade to zero.
fn parse_time_ms(token: &str) -> f64 {
    let token = token.trim();
    if let Some(number) = token.strip_suffix("ms") {
        number.trim().parse().unwrap_or(0.0)
    } else if let Some(number) = token.strip_suffix('s') {
        number.trim().parse::<f64>().map_or(0.0, |v| v * 1000.0)
    } else {
        token.parse().unwrap_or(0.0)
    }
}

fn parse_time_list(declaration: Option<String>) -> Vec<f64> {
    declaration
        .as_deref()
        .map(|decl| decl.split(',').map(parse_time_ms).collect())
        .unwrap_or_default()
}

/// Derives the fallback duration from the element's configured transition
/// times: per comma-separated declaration, duration plus its positional
/// delay (missing delay counts as zero), maxed across declarations.
///
/// Fractional milliseconds round up; truncation would shave the deadline
/// short of the real transition.
pub(crate) fn fallback_duration_ms<E: Element>(element: &E) -> u64 {
    let durations = parse_time_list(element.transition_duration());
    let delays = parse_time_list(element.transition_delay());

    let mut longest = 0.0_f64;
    for (i, duration) in durations.iter().enumerate() {
        let delay = delays.get(i).copied().unwrap_or(0.0);
        let total = duration + delay;
        if total > longest {
            longest = total;
        }
    }
    let whole = longest as u64;
    if (whole as f64) < longest {
        whole + 1
    } else {
        whole
    }
}
