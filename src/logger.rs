use std::fmt::{Display, Formatter};

use crate::source::Position;

/// A leveled debug-trace facility for the parsing core.
///
/// Mirrors the verbosity tiers a packrat engine needs when diagnosing memo
/// misbehavior: nothing, a default marker, success only, success+result, or
/// every rule entry/exit. All tracing is gated behind `cfg(debug_assertions)`
/// so release builds pay nothing for it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Log<T> {
    None,
    Default(T),
    Success(T),
    Result(T),
    Verbose(T),
}

impl<T: Display> Display for Log<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Log::None => Ok(()),
            Log::Default(s) | Log::Success(s) | Log::Result(s) | Log::Verbose(s) => {
                write!(f, "{}", s)
            }
        }
    }
}

impl<T> Log<T> {
    pub fn order(&self) -> u8 {
        match self {
            Log::None => 0,
            Log::Default(_) => 1,
            Log::Success(_) => 2,
            Log::Result(_) => 3,
            Log::Verbose(_) => 4,
        }
    }
}

impl<TL: Display> Log<TL> {
    /// Trace a rule's memo-check outcome at `position`.
    pub fn log_memo_hit(&self, rule_name: &str, position: Position, hit: bool) {
        #[cfg(debug_assertions)]
        {
            if hit {
                if self.order() >= Log::Success(()).order() {
                    println!("[{}; MemoHit]: rule {} at {}", self, rule_name, position)
                }
            } else if self.order() >= Log::Verbose(()).order() {
                println!("[{}; MemoMiss]: rule {} at {}", self, rule_name, position)
            }
        }
        #[cfg(not(debug_assertions))]
        let _ = (rule_name, position, hit);
    }

    /// Trace a rule's final result.
    pub fn log_rule_result(&self, rule_name: &str, position: Position, succeeded: bool) {
        #[cfg(debug_assertions)]
        {
            if succeeded {
                if self.order() >= Log::Result(()).order() {
                    println!(
                        "[{}; RuleSuccess]: rule {} at {}",
                        self, rule_name, position
                    )
                }
            } else if self.order() >= Log::Result(()).order() {
                println!(
                    "[{}; RuleFailure]: rule {} at {}",
                    self, rule_name, position
                )
            }
        }
        #[cfg(not(debug_assertions))]
        let _ = (rule_name, position, succeeded);
    }
}
