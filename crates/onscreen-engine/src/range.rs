//! Ranges
//!
//! A range is a named threshold extending the viewport's effective boundary
//! by a value per side. Values are fixed pixels, percentages of the viewport
//! or of the element, or user callbacks; resolved values are memoized per
//! side until invalidated.

use std::fmt;
use std::sync::Arc;

use onscreen_geometry::{GeometrySnapshot, Side};

/// Dynamic range callback: current geometry plus the side being resolved
pub type RangeFn = Arc<dyn Fn(&GeometrySnapshot, Side) -> f64 + Send + Sync>;

/// Reference dimension of a percentage value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentBasis {
    /// `%s` - the viewport's height (vertical sides) or width (horizontal)
    Viewport,
    /// `%e` - the element's own height or width
    Element,
}

/// A per-side range value in normalized form
#[derive(Clone)]
pub enum RangeValue {
    /// Fixed pixel offset (can be negative)
    Px(f64),
    /// Fraction of the side's reference dimension
    Percent { factor: f64, basis: PercentBasis },
    /// User callback; its result is cached like any other value
    Callback(RangeFn),
}

/// Malformed percentage token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("malformed range token {0:?}")]
    Malformed(String),
}

impl RangeValue {
    /// Parse a percentage token: optional sign, digits, optional decimal,
    /// `%`, then `s` (screen) or `e` (element). E.g. `"-25%e"`, `"12.5%s"`.
    pub fn parse_token(token: &str) -> Result<Self, TokenError> {
        let malformed = || TokenError::Malformed(token.to_string());
        let trimmed = token.trim();

        let (number, basis) = if let Some(rest) = trimmed.strip_suffix('s') {
            (rest, PercentBasis::Viewport)
        } else if let Some(rest) = trimmed.strip_suffix('e') {
            (rest, PercentBasis::Element)
        } else {
            return Err(malformed());
        };
        let number = number.strip_suffix('%').ok_or_else(malformed)?;

        let digits = number.strip_prefix(['+', '-']).unwrap_or(number);
        let mut parts = digits.split('.');
        let well_formed = match (parts.next(), parts.next(), parts.next()) {
            (Some(int), frac, None) => {
                !int.is_empty()
                    && int.bytes().all(|b| b.is_ascii_digit())
                    && frac.is_none_or(|f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
            }
            _ => false,
        };
        if !well_formed {
            return Err(malformed());
        }

        let percent: f64 = number.parse().map_err(|_| malformed())?;
        Ok(RangeValue::Percent {
            factor: percent / 100.0,
            basis,
        })
    }
}

impl fmt::Debug for RangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeValue::Px(px) => f.debug_tuple("Px").field(px).finish(),
            RangeValue::Percent { factor, basis } => f
                .debug_struct("Percent")
                .field("factor", factor)
                .field("basis", basis)
                .finish(),
            RangeValue::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// A named threshold with per-side values and cached resolution state
#[derive(Debug, Clone)]
pub struct Range {
    name: String,
    values: [RangeValue; 4],
    cached: [Option<f64>; 4],
    onscreen: Option<bool>,
}

impl Range {
    /// Create from normalized per-side values
    pub fn new(
        name: impl Into<String>,
        top: RangeValue,
        bottom: RangeValue,
        left: RangeValue,
        right: RangeValue,
    ) -> Self {
        Self {
            name: name.into(),
            values: [top, bottom, left, right],
            cached: [None; 4],
            onscreen: None,
        }
    }

    /// Range name as carried in notifications
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unresolved value for a side
    pub fn value(&self, side: Side) -> &RangeValue {
        &self.values[side.index()]
    }

    /// Replace one side's value; its memo is dropped
    pub fn set_value(&mut self, side: Side, value: RangeValue) {
        self.values[side.index()] = value;
        self.cached[side.index()] = None;
    }

    /// Last known status; `None` until the first evaluation
    pub fn onscreen(&self) -> Option<bool> {
        self.onscreen
    }

    pub(crate) fn set_onscreen(&mut self, onscreen: bool) {
        self.onscreen = Some(onscreen);
    }

    /// Drop all memoized side values; the next resolve recomputes them
    pub fn invalidate(&mut self) {
        self.cached = [None; 4];
    }

    /// Resolve a side to pixels, reusing the memo unless `force`
    pub fn resolve(&mut self, side: Side, snapshot: &GeometrySnapshot, force: bool) -> f64 {
        let slot = side.index();
        if !force {
            if let Some(cached) = self.cached[slot] {
                return cached;
            }
        }
        let value = match &self.values[slot] {
            RangeValue::Px(px) => *px,
            RangeValue::Percent { factor, basis } => {
                let dimension = match basis {
                    PercentBasis::Viewport => snapshot.viewport_dimension(side),
                    PercentBasis::Element => snapshot.element_dimension(side),
                };
                factor * dimension
            }
            RangeValue::Callback(callback) => callback(snapshot, side),
        };
        self.cached[slot] = Some(value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onscreen_geometry::{ElementBounds, Span, ViewportBounds};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn snapshot() -> GeometrySnapshot {
        GeometrySnapshot {
            viewport: ViewportBounds {
                top: 0.0,
                height: 600.0,
                horizontal: Some(Span::new(0.0, 1000.0)),
            },
            element: ElementBounds {
                top: 700.0,
                height: 200.0,
                horizontal: Some(Span::new(100.0, 400.0)),
            },
            ..Default::default()
        }
    }

    fn percent_parts(token: &str) -> (f64, PercentBasis) {
        match RangeValue::parse_token(token).unwrap() {
            RangeValue::Percent { factor, basis } => (factor, basis),
            other => panic!("expected percent, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(percent_parts("-25%e"), (-0.25, PercentBasis::Element));
        assert_eq!(percent_parts("12.5%s"), (0.125, PercentBasis::Viewport));
        assert_eq!(percent_parts("+100%s"), (1.0, PercentBasis::Viewport));
    }

    #[test]
    fn test_parse_token_rejects_malformed() {
        for bad in ["25%", "25s", "%e", "2.5.0%e", ".5%s", "25 %s", "abc%e", ""] {
            assert!(RangeValue::parse_token(bad).is_err(), "{bad:?} parsed");
        }
    }

    #[test]
    fn test_percent_of_element() {
        let mut range = Range::new(
            "r",
            RangeValue::Px(0.0),
            RangeValue::parse_token("-25%e").unwrap(),
            RangeValue::Px(0.0),
            RangeValue::Px(0.0),
        );

        // -0.25 * element height 200
        assert_eq!(range.resolve(Side::Bottom, &snapshot(), false), -50.0);
    }

    #[test]
    fn test_percent_of_viewport_width() {
        let mut range = Range::new(
            "r",
            RangeValue::Px(0.0),
            RangeValue::Px(0.0),
            RangeValue::parse_token("25%s").unwrap(),
            RangeValue::Px(0.0),
        );

        // 0.25 * viewport width 1000
        assert_eq!(range.resolve(Side::Left, &snapshot(), false), 250.0);
    }

    #[test]
    fn test_resolve_caches_until_forced() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let callback: RangeFn = Arc::new(|snapshot, _side| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            snapshot.viewport.height / 2.0
        });
        let mut range = Range::new(
            "r",
            RangeValue::Callback(callback),
            RangeValue::Px(0.0),
            RangeValue::Px(0.0),
            RangeValue::Px(0.0),
        );

        assert_eq!(range.resolve(Side::Top, &snapshot(), false), 300.0);
        assert_eq!(range.resolve(Side::Top, &snapshot(), false), 300.0);
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);

        range.resolve(Side::Top, &snapshot(), true);
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);

        range.invalidate();
        range.resolve(Side::Top, &snapshot(), false);
        assert_eq!(CALLS.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_set_value_drops_memo() {
        let mut range = Range::new(
            "r",
            RangeValue::Px(10.0),
            RangeValue::Px(0.0),
            RangeValue::Px(0.0),
            RangeValue::Px(0.0),
        );
        assert_eq!(range.resolve(Side::Top, &snapshot(), false), 10.0);

        range.set_value(Side::Top, RangeValue::Px(99.0));
        assert_eq!(range.resolve(Side::Top, &snapshot(), false), 99.0);
    }
}
