//! Step-by-step evaluation of a [Dfa] against an input, one character at a time. [Dfa::is_match]
//! is built on top of this but a caller wanting to inspect intermediate states (for a debugger or
//! a REPL) can drive a [DfaEvaluator] directly.

use crate::dfa::Dfa;

#[derive(Debug, Clone)]
pub struct DfaEvaluator<'a> {
    dfa: &'a Dfa,
    /// `None` once a character outside the alphabet, or with no transition from the current
    /// state, has been seen — the automaton has no recovery from this, so further `step` calls
    /// are no-ops.
    current: Option<usize>,
}

impl<'a> DfaEvaluator<'a> {
    pub(crate) fn new(dfa: &'a Dfa) -> Self {
        Self {
            dfa,
            current: Some(dfa.start),
        }
    }

    /// Whether the evaluator is currently in an accept state. Always `false` once it has fallen
    /// off the transition table.
    pub fn is_accepting(&self) -> bool {
        self.current.is_some_and(|s| self.dfa.is_accepting(s))
    }

    /// The current state index, or `None` if a prior `step` rejected.
    pub fn current_state(&self) -> Option<usize> {
        self.current
    }

    /// Advances by one symbol. Returns `false` (and leaves the evaluator permanently rejecting)
    /// if `symbol` is outside the alphabet or there is no transition from the current state.
    pub fn step(&mut self, symbol: char) -> bool {
        let Some(state) = self.current else {
            return false;
        };
        match self.dfa.transitions.get(&(state, symbol)) {
            Some(&next) => {
                self.current = Some(next);
                true
            }
            None => {
                self.current = None;
                false
            }
        }
    }

    /// Steps through every character of `text` and reports whether the resulting state accepts.
    /// Short-circuits as soon as a step rejects, since there is no recovering from that.
    pub fn accepts(mut self, text: &str) -> bool {
        for c in text.chars() {
            if !self.step(c) {
                return false;
            }
        }
        self.is_accepting()
    }
}
