//! Option shapes
//!
//! The shorthand forms a registration accepts for its ranges, and their
//! normalization into `Range`s. A radius back-fills any side a definition
//! leaves unset; string tokens are parsed here, once, so the rest of the
//! engine only ever sees normalized values.

use std::fmt;

use crate::range::{Range, RangeFn, RangeValue};

/// One side's unresolved specification
#[derive(Clone)]
pub enum SideValue {
    /// Fixed pixel offset
    Px(f64),
    /// Percentage token, e.g. `"-25%e"`
    Token(String),
    /// User callback
    Callback(RangeFn),
}

impl SideValue {
    /// Normalize into an engine value.
    ///
    /// Malformed tokens fall back to their leading integer (`"100px"` means
    /// 100) and finally to zero; never an error.
    fn normalize(self) -> RangeValue {
        match self {
            SideValue::Px(px) => RangeValue::Px(px),
            SideValue::Callback(callback) => RangeValue::Callback(callback),
            SideValue::Token(token) => match RangeValue::parse_token(&token) {
                Ok(value) => value,
                Err(_) => match leading_int(&token) {
                    Some(px) => RangeValue::Px(px),
                    None => {
                        tracing::warn!(token, "unparseable range token, defaulting to 0");
                        RangeValue::Px(0.0)
                    }
                },
            },
        }
    }
}

/// Leading base-10 integer of a string, sign included
fn leading_int(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end]
        .parse::<f64>()
        .ok()
        .map(|v| if negative { -v } else { v })
}

impl fmt::Debug for SideValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SideValue::Px(px) => f.debug_tuple("Px").field(px).finish(),
            SideValue::Token(token) => f.debug_tuple("Token").field(token).finish(),
            SideValue::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl From<f64> for SideValue {
    fn from(px: f64) -> Self {
        SideValue::Px(px)
    }
}

impl From<&str> for SideValue {
    fn from(token: &str) -> Self {
        SideValue::Token(token.to_string())
    }
}

impl From<String> for SideValue {
    fn from(token: String) -> Self {
        SideValue::Token(token)
    }
}

impl From<RangeFn> for SideValue {
    fn from(callback: RangeFn) -> Self {
        SideValue::Callback(callback)
    }
}

/// One named range definition before normalization
#[derive(Debug, Clone, Default)]
pub struct RangeDef {
    pub top: Option<SideValue>,
    pub bottom: Option<SideValue>,
    pub left: Option<SideValue>,
    pub right: Option<SideValue>,
    /// Back-fills any unset side
    pub radius: Option<SideValue>,
}

impl RangeDef {
    /// Definition with only a radius
    pub fn radius(value: impl Into<SideValue>) -> Self {
        Self {
            radius: Some(value.into()),
            ..Default::default()
        }
    }

    fn into_range(self, name: String) -> Range {
        let radius = self.radius.unwrap_or(SideValue::Px(0.0));
        let side = |value: Option<SideValue>| value.unwrap_or_else(|| radius.clone()).normalize();
        let (top, bottom) = (side(self.top), side(self.bottom));
        let (left, right) = (side(self.left), side(self.right));
        Range::new(name, top, bottom, left, right)
    }
}

/// Shorthand shapes accepted for the `ranges` option
#[derive(Clone)]
pub enum RangeSpec {
    /// Single `visible` range with a uniform radius
    Radius(f64),
    /// Single `visible` range from a percentage token
    Token(String),
    /// Single `visible` range from a callback
    Callback(RangeFn),
    /// Named definitions, insertion order preserved
    Named(Vec<(String, RangeDef)>),
    /// Unnamed definitions, auto-named `r0`, `r1`, ...
    List(Vec<RangeDef>),
}

impl fmt::Debug for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeSpec::Radius(radius) => f.debug_tuple("Radius").field(radius).finish(),
            RangeSpec::Token(token) => f.debug_tuple("Token").field(token).finish(),
            RangeSpec::Callback(_) => f.write_str("Callback(..)"),
            RangeSpec::Named(defs) => f.debug_tuple("Named").field(defs).finish(),
            RangeSpec::List(defs) => f.debug_tuple("List").field(defs).finish(),
        }
    }
}

impl RangeSpec {
    /// Expand the shorthand into normalized, insertion-ordered ranges
    pub fn normalize(&self) -> Vec<Range> {
        let defs: Vec<(String, RangeDef)> = match self {
            RangeSpec::Radius(radius) => {
                vec![("visible".to_string(), RangeDef::radius(*radius))]
            }
            RangeSpec::Token(token) => {
                vec![("visible".to_string(), RangeDef::radius(token.clone()))]
            }
            RangeSpec::Callback(callback) => vec![(
                "visible".to_string(),
                RangeDef::radius(SideValue::Callback(callback.clone())),
            )],
            RangeSpec::Named(defs) => defs.clone(),
            RangeSpec::List(defs) => defs
                .iter()
                .enumerate()
                .map(|(i, def)| (format!("r{i}"), def.clone()))
                .collect(),
        };
        defs.into_iter()
            .map(|(name, def)| def.into_range(name))
            .collect()
    }
}

/// Per-registration options; unset fields fall back to process defaults
#[derive(Debug, Clone, Default)]
pub struct MonitorOptions {
    pub live: Option<bool>,
    pub horizontal: Option<bool>,
    pub ranges: Option<RangeSpec>,
}

impl MonitorOptions {
    /// Re-measure geometry and re-resolve dynamic values every tick
    pub fn live(mut self, live: bool) -> Self {
        self.live = Some(live);
        self
    }

    /// Evaluate left/right boundaries in addition to top/bottom
    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = Some(horizontal);
        self
    }

    /// Ranges to monitor
    pub fn ranges(mut self, ranges: RangeSpec) -> Self {
        self.ranges = Some(ranges);
        self
    }
}
