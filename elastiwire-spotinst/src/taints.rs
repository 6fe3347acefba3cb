//! Taint parsing
//!
//! Taints are written as `key=value:effect`. The key ends at the first `=`
//! and the effect starts after the last `:`, so values may themselves contain
//! `=` or `:` while keys and effects cannot.

use std::fmt;

use crate::wire::ocean::Taint;

/// Component of a taint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaintField {
    Key,
    Value,
    Effect,
}

impl fmt::Display for TaintField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaintField::Key => f.write_str("key"),
            TaintField::Value => f.write_str("value"),
            TaintField::Effect => f.write_str("effect"),
        }
    }
}

/// Outcome of parsing a single taint string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaintParse {
    Parsed(Taint),
    /// Recognizable as a taint, but some components are empty or absent
    Partial { missing: Vec<TaintField> },
    /// Nothing taint-like in the input
    Malformed,
}

impl fmt::Display for TaintParse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaintParse::Parsed(taint) => {
                write!(f, "{}={}:{}", taint.key, taint.value, taint.effect)
            }
            TaintParse::Partial { missing } => {
                let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
                write!(f, "missing {}", names.join(", "))
            }
            TaintParse::Malformed => f.write_str("expected key=value:effect"),
        }
    }
}

/// Parse one `key=value:effect` string
pub fn parse_taint(input: &str) -> TaintParse {
    let Some((key, rest)) = input.split_once('=') else {
        return TaintParse::Malformed;
    };
    let (value, effect) = rest.rsplit_once(':').unwrap_or((rest, ""));

    let missing: Vec<TaintField> = [
        (TaintField::Key, key),
        (TaintField::Value, value),
        (TaintField::Effect, effect),
    ]
    .into_iter()
    .filter(|(_, segment)| segment.is_empty())
    .map(|(field, _)| field)
    .collect();

    match missing.len() {
        0 => TaintParse::Parsed(Taint {
            key: key.to_string(),
            value: value.to_string(),
            effect: effect.to_string(),
        }),
        3 => TaintParse::Malformed,
        _ => TaintParse::Partial { missing },
    }
}

/// A taint string that did not parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedTaint {
    pub input: String,
    /// Never [`TaintParse::Parsed`]
    pub outcome: TaintParse,
}

/// Result of parsing a list of taint strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaintReport {
    pub accepted: Vec<Taint>,
    pub rejected: Vec<RejectedTaint>,
}

impl TaintReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parse every taint string, keeping track of the ones that were rejected
pub fn parse_taints<S: AsRef<str>>(taints: &[S]) -> TaintReport {
    let mut report = TaintReport::default();

    for input in taints {
        let input = input.as_ref();
        match parse_taint(input) {
            TaintParse::Parsed(taint) => report.accepted.push(taint),
            outcome => {
                log::debug!("Dropping taint {:?}: {}", input, outcome);
                report.rejected.push(RejectedTaint {
                    input: input.to_string(),
                    outcome,
                });
            }
        }
    }

    report
}

/// Ocean taints, silently leaving out strings that do not parse
pub fn build_ocean_taints<S: AsRef<str>>(taints: &[S]) -> Vec<Taint> {
    parse_taints(taints).accepted
}
