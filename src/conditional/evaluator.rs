//! Conditional decision rules
//!
//! | # | rule                 | when                                  | decision             |
//! |---|----------------------|---------------------------------------|----------------------|
//! | 1 | `if-match-failed`    | If-Match present, not current tag     | `PreconditionFailed` |
//! | 2 | `if-match-satisfied` | If-Match present                      | `ServeFull`          |
//! | 3 | `if-none-match-hit`  | If-None-Match equals current tag      | `NotModified`        |
//! | 4 | `if-none-match-miss` | If-None-Match present                 | `ServeFull`          |
//! | 5 | `unconditional`      | always                                | `ServeFull`          |

use super::headers::ConditionalHeaders;
use crate::revision::Revision;

/// Outcome of conditional evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// 200 with the full representation
    ServeFull,
    /// 304 without a body
    NotModified,
    /// 412
    PreconditionFailed,
}

/// A decision plus the name of the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub decision: Decision,
    pub rule: &'static str,
}

/// One row of the decision table.
pub struct Rule {
    pub name: &'static str,
    applies: fn(Revision, &ConditionalHeaders) -> bool,
    pub decision: Decision,
}

fn if_match_failed(current: Revision, headers: &ConditionalHeaders) -> bool {
    headers
        .if_match
        .as_deref()
        .is_some_and(|tag| !current.matches_tag(tag))
}

fn if_match_present(_: Revision, headers: &ConditionalHeaders) -> bool {
    headers.if_match.is_some()
}

fn if_none_match_hit(current: Revision, headers: &ConditionalHeaders) -> bool {
    headers
        .if_none_match
        .as_deref()
        .is_some_and(|tag| current.matches_tag(tag))
}

fn if_none_match_present(_: Revision, headers: &ConditionalHeaders) -> bool {
    headers.if_none_match.is_some()
}

fn always(_: Revision, _: &ConditionalHeaders) -> bool {
    true
}

/// The decision table, in precedence order.
pub const RULES: [Rule; 5] = [
    Rule {
        name: "if-match-failed",
        applies: if_match_failed,
        decision: Decision::PreconditionFailed,
    },
    Rule {
        name: "if-match-satisfied",
        applies: if_match_present,
        decision: Decision::ServeFull,
    },
    Rule {
        name: "if-none-match-hit",
        applies: if_none_match_hit,
        decision: Decision::NotModified,
    },
    Rule {
        name: "if-none-match-miss",
        applies: if_none_match_present,
        decision: Decision::ServeFull,
    },
    Rule {
        name: "unconditional",
        applies: always,
        decision: Decision::ServeFull,
    },
];

/// Evaluates the rules against the current revision.
pub fn evaluate(current: Revision, headers: &ConditionalHeaders) -> Evaluation {
    RULES
        .iter()
        .find(|rule| (rule.applies)(current, headers))
        .map(|rule| Evaluation {
            decision: rule.decision,
            rule: rule.name,
        })
        // The last rule always applies.
        .unwrap_or(Evaluation {
            decision: Decision::ServeFull,
            rule: "unconditional",
        })
}
