//! # NFA Builder and Determinizer
//! Thompson's construction builds an ε-NFA from an [Ast](crate::parser::Ast). [Nfa::remove_epsilon_moves]
//! performs ε-elimination, and [Nfa::to_dfa] performs subset construction on the result,
//! together making up what the rest of this crate calls the determinizer.
//!
//! The [Nfa] type represents both shapes (with and without ε-transitions) — check
//! [Nfa::has_epsilon_moves] to tell which one you have, exactly as [crate::dfa::Dfa] is a
//! distinct type for the fully-determinized shape.

use crate::dfa::Dfa;
use crate::parser::Ast;
use std::collections::{HashMap, HashSet, VecDeque};

/// A state of an [Nfa]. Transitions are keyed by the symbol that triggers them; a symbol with no
/// entry in the map means "no transition on this symbol from this state", which is distinct from
/// an entry mapping to an empty vector (which this builder never produces).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NfaState {
    pub(crate) accepting: bool,
    pub(crate) epsilon: Vec<usize>,
    pub(crate) transitions: HashMap<char, Vec<usize>>,
}

/// A nondeterministic finite automaton, with or without ε-moves. Built once by [build] from a
/// parsed [Ast] and then driven through [Nfa::remove_epsilon_moves] and [Nfa::to_dfa].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    pub(crate) alphabet: Vec<char>,
    pub(crate) states: Vec<NfaState>,
    pub(crate) start: usize,
}

/// Per-compilation counter for fresh state identifiers. A fresh [IdGen] must be created for every
/// call to [build] — reusing one across compilations would let sub-automata from unrelated
/// patterns collide on the same ids.
#[derive(Debug, Default)]
struct IdGen {
    states: Vec<NfaState>,
}

impl IdGen {
    fn fresh(&mut self) -> usize {
        let id = self.states.len();
        self.states.push(NfaState::default());
        id
    }

    fn add_epsilon(&mut self, from: usize, to: usize) {
        self.states[from].epsilon.push(to);
    }

    fn add_transition(&mut self, from: usize, symbol: char, to: usize) {
        self.states[from].transitions.entry(symbol).or_default().push(to);
    }
}

/// Builds an ε-NFA from `ast` by Thompson's construction. Every call allocates a fresh, private
/// [IdGen], so state identifiers from two different `build` calls are never comparable — by
/// design, since they describe unrelated automata.
pub fn build(ast: &Ast) -> Nfa {
    let mut gen = IdGen::default();
    let (start, accept) = build_node(ast, &mut gen);
    gen.states[accept].accepting = true;

    let mut alphabet: Vec<char> = gen
        .states
        .iter()
        .flat_map(|s| s.transitions.keys().copied())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    alphabet.sort_unstable();

    Nfa {
        alphabet,
        states: gen.states,
        start,
    }
}

/// Returns the (start, accept) pair of the fragment built for `ast`, per Thompson's four rules.
fn build_node(ast: &Ast, gen: &mut IdGen) -> (usize, usize) {
    match ast {
        Ast::Literal(c) => {
            let start = gen.fresh();
            let accept = gen.fresh();
            gen.add_transition(start, *c, accept);
            (start, accept)
        }
        Ast::Concat(left, right) => {
            let (l_start, l_accept) = build_node(left, gen);
            let (r_start, r_accept) = build_node(right, gen);
            gen.add_epsilon(l_accept, r_start);
            (l_start, r_accept)
        }
        Ast::Alternation(left, right) => {
            let (l_start, l_accept) = build_node(left, gen);
            let (r_start, r_accept) = build_node(right, gen);
            let start = gen.fresh();
            let accept = gen.fresh();
            gen.add_epsilon(start, l_start);
            gen.add_epsilon(start, r_start);
            gen.add_epsilon(l_accept, accept);
            gen.add_epsilon(r_accept, accept);
            (start, accept)
        }
        Ast::Star(inner) => {
            let (i_start, i_accept) = build_node(inner, gen);
            let start = gen.fresh();
            let accept = gen.fresh();
            gen.add_epsilon(start, i_start);
            gen.add_epsilon(start, accept);
            gen.add_epsilon(i_accept, start);
            gen.add_epsilon(i_accept, accept);
            (start, accept)
        }
    }
}

impl Nfa {
    /// Checks whether any state has an ε-transition.
    pub fn has_epsilon_moves(&self) -> bool {
        self.states.iter().any(|s| !s.epsilon.is_empty())
    }

    /// The ε-closure of a single state: the least set containing `state` and closed under
    /// following ε-transitions. Tolerant of ε-cycles since already-seen states are never
    /// revisited.
    pub fn closure(&self, state: usize) -> HashSet<usize> {
        let mut seen = HashSet::from([state]);
        let mut frontier = vec![state];
        while let Some(q) = frontier.pop() {
            for &next in &self.states[q].epsilon {
                if seen.insert(next) {
                    frontier.push(next);
                }
            }
        }
        seen
    }

    /// Eliminates ε-transitions, returning a new [Nfa] over the same state set with no
    /// ε-transitions. For every state `q`, its outgoing set on symbol `c` becomes the union of
    /// `δ(q', c)` over every `q'` in `E(q)`, and `q` is accepting iff `E(q)` contains an
    /// originally-accepting state. This is a pure transformation — `self` is left untouched.
    pub fn remove_epsilon_moves(&self) -> Nfa {
        if !self.has_epsilon_moves() {
            return self.clone();
        }

        let closures: Vec<HashSet<usize>> =
            (0..self.states.len()).map(|q| self.closure(q)).collect();

        let states = closures
            .iter()
            .map(|reachable| {
                let accepting = reachable.iter().any(|&q| self.states[q].accepting);

                let mut transitions: HashMap<char, Vec<usize>> = HashMap::new();
                for &q in reachable {
                    for (&symbol, targets) in &self.states[q].transitions {
                        transitions.entry(symbol).or_default().extend(targets);
                    }
                }
                for targets in transitions.values_mut() {
                    targets.sort_unstable();
                    targets.dedup();
                }

                NfaState {
                    accepting,
                    epsilon: vec![],
                    transitions,
                }
            })
            .collect();

        Nfa {
            alphabet: self.alphabet.clone(),
            states,
            start: self.start,
        }
    }

    /// Subset construction: converts this (ε-free) [Nfa] into an equivalent [Dfa]. Macro-states
    /// are identified by their sorted set of underlying state ids and renumbered to small,
    /// consecutive integers in discovery order; the initial macro-state is always renumbered to
    /// `0`. A transition is only recorded when the union of targets is non-empty — an empty union
    /// leaves the key absent, matching the sparse, partial transition function the matcher relies
    /// on to short-circuit-reject.
    ///
    /// Assumes `self` has no ε-transitions; call [Nfa::remove_epsilon_moves] first if it might.
    pub fn to_dfa(&self) -> Dfa {
        let mut next_id = 0usize..;
        let mut id_of: HashMap<Vec<usize>, usize> = HashMap::new();
        let mut accepting = HashSet::new();
        let mut transitions: HashMap<(usize, char), usize> = HashMap::new();

        let start_set = sorted_set([self.start]);
        let start_id = *id_of.entry(start_set.clone()).or_insert_with(|| next_id.next().unwrap());
        if start_set.iter().any(|&q| self.states[q].accepting) {
            accepting.insert(start_id);
        }

        let mut queue = VecDeque::from([start_set]);
        while let Some(set) = queue.pop_front() {
            let from_id = id_of[&set];

            for &symbol in &self.alphabet {
                let target = sorted_set(set.iter().flat_map(|&q| {
                    self.states[q]
                        .transitions
                        .get(&symbol)
                        .into_iter()
                        .flatten()
                        .copied()
                }));

                if target.is_empty() {
                    continue;
                }

                let is_new = !id_of.contains_key(&target);
                let to_id = *id_of
                    .entry(target.clone())
                    .or_insert_with(|| next_id.next().unwrap());
                if is_new {
                    if target.iter().any(|&q| self.states[q].accepting) {
                        accepting.insert(to_id);
                    }
                    queue.push_back(target);
                }

                transitions.insert((from_id, symbol), to_id);
            }
        }

        Dfa {
            alphabet: self.alphabet.clone(),
            num_states: id_of.len(),
            start: start_id,
            accept: accepting,
            transitions,
        }
    }

    /// The alphabet of this automaton: every symbol that labels some transition.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// The states of this automaton.
    pub fn states(&self) -> &[NfaState] {
        &self.states
    }

    /// The (sole, since this is always built by Thompson's construction) start state.
    pub fn start_state(&self) -> usize {
        self.start
    }
}

fn sorted_set(iter: impl IntoIterator<Item = usize>) -> Vec<usize> {
    let mut v: Vec<usize> = iter.into_iter().collect::<HashSet<_>>().into_iter().collect();
    v.sort_unstable();
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use crate::parser::parse;

    fn build_pattern(pattern: &str) -> Nfa {
        build(&parse(&lex(pattern).unwrap()).unwrap())
    }

    #[test]
    fn literal_builds_two_states_one_transition() {
        let nfa = build_pattern("a");
        assert_eq!(nfa.states.len(), 2);
        assert_eq!(nfa.alphabet, vec!['a']);
        assert!(!nfa.states[nfa.start].accepting);
        assert!(nfa.states.iter().any(|s| s.accepting));
    }

    #[test]
    fn thompson_invariant_single_start_and_accept() {
        for pattern in ["a", "ab", "a|b", "a*", "(a|b)*c"] {
            let nfa = build_pattern(pattern);
            let accepting_count = nfa.states.iter().filter(|s| s.accepting).count();
            assert_eq!(accepting_count, 1, "pattern {pattern} should have one accept state");
        }
    }

    #[test]
    fn closure_contains_self_and_is_cycle_safe() {
        let nfa = build_pattern("a*");
        for id in 0..nfa.states.len() {
            assert!(nfa.closure(id).contains(&id));
        }
    }

    #[test]
    fn epsilon_elimination_removes_all_epsilon_transitions() {
        let nfa = build_pattern("a*b|c");
        assert!(nfa.has_epsilon_moves());
        let eliminated = nfa.remove_epsilon_moves();
        assert!(!eliminated.has_epsilon_moves());
        assert_eq!(eliminated.states.len(), nfa.states.len());
    }

    #[test]
    fn subset_construction_is_deterministic() {
        let nfa = build_pattern("(a|b)*abb").remove_epsilon_moves();
        let dfa = nfa.to_dfa();
        assert_eq!(dfa.start, 0);
        assert!(dfa.state_count() > 0);
        // every state id that appears anywhere is within range, and every (state, symbol) pair
        // maps to at most one target since `transitions` is a plain HashMap keyed on the pair.
        for (&(from, symbol), &to) in &dfa.transitions {
            assert!(from < dfa.state_count());
            assert!(to < dfa.state_count());
            assert!(dfa.alphabet.contains(&symbol));
        }
    }
}
