// src/scan.rs
// Data-driven label/value line scanner.
//
// A page kind is described by a table of FieldRules. Each rule names a field,
// gives a literal label that identifies it, and a value pattern that captures
// the raw string. The scanner walks the line sequence exactly once; misses
// are silent and simply leave the field out of the result.

use std::collections::HashMap;

/// Character class accepted inside a captured value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// Digits only. Count-like fields: games, raw season totals.
    Integer,
    /// Digits and `.`. Percentage and per-game rate fields.
    Decimal,
}

impl ValueKind {
    fn accepts(self, c: char) -> bool {
        match self {
            ValueKind::Integer => c.is_ascii_digit(),
            ValueKind::Decimal => c.is_ascii_digit() || c == '.',
        }
    }
}

/// Where a rule's value lives relative to the line its label matched on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueAt {
    /// Value delimiters sit on the label line itself (table-row cells).
    SameLine,
    /// Value is expected on the next evaluated line (header/value pages).
    NextLine,
}

/// Delimited value capture: `open` + run of `kind` chars + `close`.
#[derive(Clone, Copy, Debug)]
pub struct ValuePattern {
    pub open: &'static str,
    pub kind: ValueKind,
    pub close: &'static str,
}

impl ValuePattern {
    /// Find the first `open` whose following character run is immediately
    /// terminated by `close`. The run may be empty; the caller decides
    /// whether an empty capture is usable.
    pub fn capture(&self, line: &str) -> Option<String> {
        let mut rest = line;
        while let Some(i) = rest.find(self.open) {
            let after = &rest[i + self.open.len()..];
            let run_len = after
                .char_indices()
                .find(|&(_, c)| !self.kind.accepts(c))
                .map(|(j, _)| j)
                .unwrap_or(after.len());
            if after[run_len..].starts_with(self.close) {
                return Some(after[..run_len].to_string());
            }
            rest = &rest[i + self.open.len()..];
        }
        None
    }
}

/// One field of a page description.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub name: &'static str,
    /// Literal that marks the field somewhere in a line.
    pub label: &'static str,
    pub at: ValueAt,
    pub value: ValuePattern,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RuleState {
    Idle,
    Armed,
}

/// Run a rule table over a one-shot line sequence.
///
/// Per line, two independent phases:
/// 1. every Armed rule is resolved against the line and disarmed, whether or
///    not its value pattern matched — one evaluation per arming;
/// 2. every rule's label is tested; a NextLine match arms the rule for the
///    following line, a SameLine match captures immediately.
///
/// Several rules can be armed at once, since label lines for different
/// fields may appear adjacently in either order. Pure function of the
/// input: no state survives the call.
pub fn scan<I>(rules: &[FieldRule], lines: I) -> HashMap<&'static str, String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut states: HashMap<&'static str, RuleState> =
        rules.iter().map(|r| (r.name, RuleState::Idle)).collect();
    let mut out = HashMap::new();

    for line in lines {
        let line = line.as_ref();

        for rule in rules {
            if states.get(rule.name) == Some(&RuleState::Armed) {
                states.insert(rule.name, RuleState::Idle);
                if let Some(v) = rule.value.capture(line) {
                    out.insert(rule.name, v);
                }
            }
        }

        for rule in rules {
            if line.contains(rule.label) {
                match rule.at {
                    ValueAt::NextLine => {
                        states.insert(rule.name, RuleState::Armed);
                    }
                    ValueAt::SameLine => {
                        if let Some(v) = rule.value.capture(line) {
                            out.insert(rule.name, v);
                        }
                    }
                }
            }
        }
    }

    out
}
