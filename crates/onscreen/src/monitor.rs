//! Monitor
//!
//! The registry of monitored elements and the public operation surface:
//! register, stop, recalculate, inspect, tick. Evaluation itself lives in
//! `onscreen-engine`; transitions are dispatched to listeners from the
//! completed evaluation's buffer, never mid-iteration.

use onscreen_engine::{ElementState, LastScroll, MonitorOptions, Transition, evaluate};
use onscreen_geometry::{ElementId, GeometrySource};

use crate::config::Config;
use crate::scheduler::TickCause;

type Listener = Box<dyn FnMut(&Transition)>;

/// Viewport proximity monitor
///
/// Owns the geometry source it measures through and the per-element states.
/// All operations are synchronous; each returns the transitions it caused,
/// and registered listeners see the same transitions in the same order.
pub struct Monitor<S: GeometrySource> {
    config: Config,
    source: S,
    states: Vec<ElementState>,
    last_scroll: LastScroll,
    listeners: Vec<Listener>,
}

impl<S: GeometrySource> Monitor<S> {
    /// Create with default configuration
    pub fn new(source: S) -> Self {
        Self::with_config(source, Config::default())
    }

    /// Create with an explicit configuration
    pub fn with_config(source: S, config: Config) -> Self {
        Self {
            config,
            source,
            states: Vec::new(),
            last_scroll: LastScroll::default(),
            listeners: Vec::new(),
        }
    }

    /// Process-wide defaults in effect
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The measurement backend
    pub fn geometry(&self) -> &S {
        &self.source
    }

    /// Mutable access to the measurement backend
    pub fn geometry_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Subscribe to transitions. Listeners run after each evaluation pass,
    /// in subscription order, for every transition in emission order.
    pub fn on_transition(&mut self, listener: impl FnMut(&Transition) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Whether the embedding should keep scroll/resize ticks flowing.
    /// False exactly when nothing is registered.
    pub fn wants_ticks(&self) -> bool {
        !self.states.is_empty()
    }

    /// Number of monitored elements
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True when nothing is monitored
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Register an element, or update it in place if already monitored.
    ///
    /// Options fall back field-wise to the config; ranges are rebuilt, so
    /// every range starts with unknown status and the immediate evaluation
    /// of this element always reports where it stands.
    pub fn run(&mut self, id: ElementId, options: MonitorOptions) -> Vec<Transition> {
        let live = options.live.unwrap_or(self.config.live);
        let horizontal = options.horizontal.unwrap_or(self.config.horizontal);
        let ranges = options
            .ranges
            .as_ref()
            .unwrap_or(&self.config.ranges)
            .normalize();

        let index = match self.position(id) {
            Some(index) => {
                let state = &mut self.states[index];
                state.set_live(live);
                state.set_horizontal(horizontal);
                state.replace_ranges(ranges);
                index
            }
            None => {
                self.states.push(ElementState::new(id, live, horizontal, ranges));
                self.states.len() - 1
            }
        };
        tracing::info!(?id, live, horizontal, "monitoring element");

        let transitions = evaluate(
            std::iter::once(&mut self.states[index]),
            &self.source,
            true,
            &mut self.last_scroll,
        );
        self.dispatch(&transitions);
        transitions
    }

    /// Stop monitoring an element. Returns false for unknown targets.
    ///
    /// When the registry empties, `wants_ticks` flips and the embedding
    /// should drop its scroll/resize subscription.
    pub fn stop(&mut self, id: ElementId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.states.remove(index);
        tracing::info!(?id, remaining = self.states.len(), "stopped monitoring");
        true
    }

    /// Force re-measurement and re-resolution for one element, or for all
    /// when no target is given. Options and last-known statuses are kept, so
    /// only genuine status changes are reported.
    pub fn recalc(&mut self, target: Option<ElementId>) -> Vec<Transition> {
        let transitions = match target {
            Some(id) => {
                let Some(index) = self.position(id) else {
                    return Vec::new();
                };
                self.states[index].invalidate();
                evaluate(
                    std::iter::once(&mut self.states[index]),
                    &self.source,
                    true,
                    &mut self.last_scroll,
                )
            }
            None => {
                for state in &mut self.states {
                    state.invalidate();
                }
                evaluate(
                    self.states.iter_mut(),
                    &self.source,
                    true,
                    &mut self.last_scroll,
                )
            }
        };
        self.dispatch(&transitions);
        transitions
    }

    /// Evaluate every monitored element for a scheduler tick
    pub fn tick(&mut self, cause: TickCause) -> Vec<Transition> {
        if self.states.is_empty() {
            return Vec::new();
        }
        let recalc = match cause {
            TickCause::Scroll => false,
            TickCause::Resize => self.config.recalc_on_resize,
            TickCause::Manual => true,
        };
        let transitions = evaluate(
            self.states.iter_mut(),
            &self.source,
            recalc,
            &mut self.last_scroll,
        );
        tracing::debug!(?cause, transitions = transitions.len(), "tick");
        self.dispatch(&transitions);
        transitions
    }

    /// Inspect a monitored element's state
    pub fn state(&self, id: ElementId) -> Option<&ElementState> {
        self.states.iter().find(|s| s.id() == id)
    }

    /// Mutate a monitored element's state in place (e.g. adjust a range's
    /// bounds before the next tick)
    pub fn state_mut(&mut self, id: ElementId) -> Option<&mut ElementState> {
        self.states.iter_mut().find(|s| s.id() == id)
    }

    fn position(&self, id: ElementId) -> Option<usize> {
        self.states.iter().position(|s| s.id() == id)
    }

    fn dispatch(&mut self, transitions: &[Transition]) {
        for transition in transitions {
            for listener in &mut self.listeners {
                listener(transition);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onscreen_engine::{RangeSpec, TransitionKind};
    use onscreen_geometry::{MemoryGeometry, Rect};

    fn monitor_with_element() -> (Monitor<MemoryGeometry>, ElementId) {
        let mut geometry = MemoryGeometry::new(1000.0, 600.0);
        let id = geometry.insert(Rect::from_xywh(0.0, 100.0, 100.0, 50.0));
        (Monitor::new(geometry), id)
    }

    #[test]
    fn test_register_evaluates_immediately() {
        let (mut monitor, id) = monitor_with_element();

        let transitions = monitor.run(id, MonitorOptions::default());

        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].kind, TransitionKind::Entered);
        assert!(monitor.wants_ticks());
    }

    #[test]
    fn test_reregistration_updates_in_place() {
        let (mut monitor, id) = monitor_with_element();
        monitor.run(id, MonitorOptions::default());

        // Same element again: still one entry, statuses reset, so the
        // immediate evaluation fires anew
        let transitions = monitor.run(
            id,
            MonitorOptions::default().ranges(RangeSpec::Radius(100.0)),
        );

        assert_eq!(monitor.len(), 1);
        assert_eq!(transitions.len(), 1);
    }

    #[test]
    fn test_stop_unknown_is_noop() {
        let (mut monitor, _) = monitor_with_element();

        assert!(!monitor.stop(ElementId(99)));
        assert!(monitor.recalc(Some(ElementId(99))).is_empty());
        assert!(monitor.state(ElementId(99)).is_none());
    }

    #[test]
    fn test_listener_sees_transitions() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let (mut monitor, id) = monitor_with_element();
        let seen: Rc<RefCell<Vec<String>>> = Rc::default();
        let sink = Rc::clone(&seen);
        monitor.on_transition(move |t| sink.borrow_mut().push(t.range.clone()));

        monitor.run(id, MonitorOptions::default());

        assert_eq!(*seen.borrow(), vec!["visible".to_string()]);
    }

    #[test]
    fn test_config_defaults_apply_fieldwise() {
        let mut geometry = MemoryGeometry::new(1000.0, 600.0);
        let id = geometry.insert(Rect::from_xywh(0.0, 100.0, 100.0, 50.0));
        let config = Config {
            live: true,
            ..Config::default()
        };
        let mut monitor = Monitor::with_config(geometry, config);

        monitor.run(id, MonitorOptions::default());
        assert!(monitor.state(id).unwrap().live());

        monitor.run(id, MonitorOptions::default().live(false));
        assert!(!monitor.state(id).unwrap().live());
    }
}
