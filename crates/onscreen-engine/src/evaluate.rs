//! Range evaluation
//!
//! For a working set of element states, decide per range whether the element
//! is inside the range-extended viewport, detect status changes, and emit
//! one transition per change. The viewport is sampled at most once per tick;
//! its horizontal axis only when some element in the set tracks it.

use onscreen_geometry::{GeometrySnapshot, GeometrySource, Side, ViewportBounds};

use crate::element::ElementState;
use crate::event::{EdgeFlags, ResolvedBounds, Transition, TransitionKind};

/// Scroll position at the previous evaluation, shared across the working set
#[derive(Debug, Clone, Copy, Default)]
pub struct LastScroll {
    pub top: Option<f64>,
    pub left: Option<f64>,
}

/// Evaluate a working set of states against current geometry.
///
/// `recalc` forces re-measurement and re-resolution for every state in the
/// set (viewport resize, explicit recalculation); live states and states
/// with no cached geometry refresh regardless. Transitions come out in
/// element order x range insertion order.
pub fn evaluate<'a, I, S>(
    states: I,
    source: &S,
    recalc: bool,
    last: &mut LastScroll,
) -> Vec<Transition>
where
    I: IntoIterator<Item = &'a mut ElementState>,
    S: GeometrySource + ?Sized,
{
    let states: Vec<&mut ElementState> = states.into_iter().collect();
    let want_horizontal = states.iter().any(|s| s.horizontal);
    let viewport = source.viewport(want_horizontal);

    let mut transitions = Vec::new();
    for state in states {
        let refresh = recalc || state.live || state.geometry.is_none();
        if refresh {
            state.geometry = Some(source.element_bounds(state.id, state.horizontal));
        }
        let Some(element) = state.geometry else {
            continue;
        };

        let snapshot = GeometrySnapshot {
            viewport: if state.horizontal {
                viewport
            } else {
                ViewportBounds {
                    horizontal: None,
                    ..viewport
                }
            },
            element,
            last_scroll_top: last.top,
            last_scroll_left: last.left,
        };

        let id = state.id;
        let horizontal = state.horizontal;
        for range in &mut state.ranges {
            let top = range.resolve(Side::Top, &snapshot, refresh);
            let bottom = range.resolve(Side::Bottom, &snapshot, refresh);

            let mut below = element.top - top >= snapshot.viewport.bottom();
            let mut above = snapshot.viewport.top >= element.bottom() + bottom;
            if below && above {
                // Degenerate range: counts as on-screen
                below = false;
                above = false;
            }
            let mut onscreen = !below && !above;

            let mut bounds = ResolvedBounds {
                top,
                bottom,
                left: None,
                right: None,
            };
            let mut edges = EdgeFlags {
                below,
                above,
                ..Default::default()
            };

            if horizontal {
                let left = range.resolve(Side::Left, &snapshot, refresh);
                let right = range.resolve(Side::Right, &snapshot, refresh);
                bounds.left = Some(left);
                bounds.right = Some(right);

                if let (Some(span), Some(window)) = (element.horizontal, snapshot.viewport.horizontal)
                {
                    let mut beyond_right = span.start - left >= window.end();
                    let mut beyond_left = window.start >= span.end() + right;
                    if beyond_right && beyond_left {
                        beyond_right = false;
                        beyond_left = false;
                    }
                    edges.right = beyond_right;
                    edges.left = beyond_left;
                    onscreen = onscreen && !beyond_right && !beyond_left;
                }
            }

            if range.onscreen() != Some(onscreen) {
                range.set_onscreen(onscreen);
                transitions.push(Transition {
                    kind: if onscreen {
                        TransitionKind::Entered
                    } else {
                        TransitionKind::Exited
                    },
                    element: id,
                    range: range.name().to_string(),
                    bounds,
                    snapshot,
                    edges,
                    horizontal,
                    recalculated: refresh,
                });
            }
        }
    }

    last.top = Some(viewport.top);
    last.left = viewport.horizontal.map(|s| s.start);

    tracing::debug!(transitions = transitions.len(), "evaluated working set");
    transitions
}
