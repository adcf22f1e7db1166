//! State-set simulation of a compiled graph.

use crate::state::{Graph, StateId};
use std::collections::HashSet;

/// A matcher that simulates a compiled [`Graph`] against input.
///
/// The simulation keeps the set of states that are possible after each
/// prefix of the input and never backtracks. The graph is only read, so any
/// number of matchers may run over the same graph at once.
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'a> {
    graph: &'a Graph,
    vacuous_repetition: bool,
}

impl<'a> Matcher<'a> {
    /// Create a new matcher for the given graph.
    ///
    /// By default repetition states are zero-width: they are only ever
    /// passed through by closure and never stay in the active set.
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph, vacuous_repetition: false }
    }

    /// When enabled, repetition states take part in a step like any other
    /// state and, since they accept vacuously, may absorb input characters.
    pub fn vacuous_repetition(mut self, yes: bool) -> Self {
        self.vacuous_repetition = yes;
        self
    }

    /// Returns true if some prefix of `input` drives the graph from its
    /// start state to its termination state.
    pub fn is_match(&self, input: &str) -> bool {
        let mut active = HashSet::new();
        active.insert(self.graph.start());

        for ch in input.chars() {
            let next = self.step(&active, ch);
            trace!("step {:?}: {} -> {} states", ch, active.len(), next.len());
            if next.is_empty() {
                return false;
            }
            active = next;
        }
        self.is_done(&active)
    }

    /// Returns the end offset, in bytes, of the shortest prefix of `input`
    /// that drives the graph to its termination state.
    ///
    /// This returns `Some` exactly when [`Matcher::is_match`] returns true.
    pub fn shortest_match(&self, input: &str) -> Option<usize> {
        let mut active = HashSet::new();
        active.insert(self.graph.start());

        for (offset, ch) in input.char_indices() {
            if self.is_done(&active) {
                return Some(offset);
            }
            let next = self.step(&active, ch);
            if next.is_empty() {
                return None;
            }
            active = next;
        }
        if self.is_done(&active) {
            Some(input.len())
        } else {
            None
        }
    }

    /// Consume one character: every member of the closure of every
    /// successor of an active state that accepts `ch`.
    fn step(&self, active: &HashSet<StateId>, ch: char) -> HashSet<StateId> {
        let mut next = HashSet::new();
        for &sid in active {
            for &succ in self.graph.state(sid).successors() {
                for &member in self.graph.expand(succ) {
                    if self.consumes(member, ch) {
                        next.insert(member);
                    }
                }
            }
        }
        next
    }

    fn consumes(&self, sid: StateId, ch: char) -> bool {
        let state = self.graph.state(sid);
        if state.is_repetition() && !self.vacuous_repetition {
            return false;
        }
        state.accepts(ch)
    }

    /// Returns true if the termination state is active, or is reachable from
    /// an active state in one step without consuming anything.
    fn is_done(&self, active: &HashSet<StateId>) -> bool {
        let termination = self.graph.termination();
        if active.contains(&termination) {
            return true;
        }
        active.iter().any(|&sid| {
            self.graph
                .state(sid)
                .successors()
                .iter()
                .any(|&succ| self.graph.expand(succ).contains(&termination))
        })
    }
}
