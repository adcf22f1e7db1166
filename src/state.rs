/*!
The state graph that compiled patterns are made of.

A graph is an arena of [`State`]s addressed by [`StateId`]. Edges are plain
indices into the arena, so the cycles introduced by repetition never turn
into ownership cycles. Every graph has exactly one start state and exactly
one termination state, and both are created along with the graph itself.

There are no epsilon transitions. Instead, repetition states are flattened
through [`Graph::expand`], which returns the set of states reachable from a
given state without consuming any input.
*/

use std::fmt;

/// A state ID in a [`Graph`].
pub type StateId = usize;

/// The kind of a state, which determines what input it accepts and how it
/// expands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateKind {
    /// The single entry point of a graph. Accepts vacuously.
    Start,
    /// The single accepting sentinel of a graph. Accepts vacuously and its
    /// only successor is itself.
    Termination,
    /// Matches exactly one specific character.
    Literal(char),
    /// Matches any single character (`.`).
    AnyChar,
    /// Matches any character in a bracket expression (`[a-z0]`).
    CharClass(CharClass),
    /// Zero or more repetitions of `inner` (`*`).
    ZeroOrMore {
        /// The repeated state, fixed at construction.
        inner: StateId,
    },
    /// One or more repetitions of `inner` (`+`).
    OneOrMore {
        /// The repeated state, fixed at construction.
        inner: StateId,
    },
}

/// A single node in a [`Graph`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    kind: StateKind,
    successors: Vec<StateId>,
}

impl State {
    /// Returns the kind of this state.
    pub fn kind(&self) -> &StateKind {
        &self.kind
    }

    /// Returns the states reachable from this one by consuming a character,
    /// in the order they were linked.
    ///
    /// For repetition states the first successor is always the repeated
    /// state.
    pub fn successors(&self) -> &[StateId] {
        &self.successors
    }

    /// Returns true if this state accepts the given character.
    ///
    /// Start, termination and repetition states accept vacuously.
    pub fn accepts(&self, ch: char) -> bool {
        match self.kind {
            StateKind::Start
            | StateKind::Termination
            | StateKind::AnyChar
            | StateKind::ZeroOrMore { .. }
            | StateKind::OneOrMore { .. } => true,
            StateKind::Literal(expected) => ch == expected,
            StateKind::CharClass(ref class) => class.contains(ch),
        }
    }

    /// Returns true for `*` and `+` states.
    pub fn is_repetition(&self) -> bool {
        matches!(
            self.kind,
            StateKind::ZeroOrMore { .. } | StateKind::OneOrMore { .. }
        )
    }
}

/// A set of characters, stored as sorted, non-overlapping and non-adjacent
/// inclusive ranges.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CharClass {
    ranges: Vec<(char, char)>,
}

impl CharClass {
    /// Build a class from inclusive ranges in any order. Ranges where the
    /// start is greater than the end are ignored.
    pub fn new<I>(ranges: I) -> CharClass
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut ranges: Vec<(char, char)> =
            ranges.into_iter().filter(|&(lo, hi)| lo <= hi).collect();
        ranges.sort_unstable();

        let mut merged: Vec<(char, char)> = Vec::with_capacity(ranges.len());
        for (lo, hi) in ranges {
            if let Some(last) = merged.last_mut() {
                if (lo as u32) <= (last.1 as u32).saturating_add(1) {
                    if hi > last.1 {
                        last.1 = hi;
                    }
                    continue;
                }
            }
            merged.push((lo, hi));
        }
        CharClass { ranges: merged }
    }

    /// Returns true if `ch` is a member of this class.
    pub fn contains(&self, ch: char) -> bool {
        self.ranges
            .binary_search_by(|&(lo, hi)| {
                if hi < ch {
                    std::cmp::Ordering::Less
                } else if lo > ch {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Returns true if this class matches nothing.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns the canonical ranges of this class.
    pub fn ranges(&self) -> &[(char, char)] {
        &self.ranges
    }
}

impl fmt::Debug for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for &(lo, hi) in self.ranges.iter() {
            if lo == hi {
                write!(f, "{}", lo.escape_debug())?;
            } else {
                write!(f, "{}-{}", lo.escape_debug(), hi.escape_debug())?;
            }
        }
        write!(f, "]")
    }
}

/// A compiled pattern graph.
///
/// Only the compiler adds states and edges. Once [`Graph::finish`] has run
/// the graph is never modified again, which is what makes it safe to match
/// against many inputs, from many threads, without any reset.
#[derive(Clone)]
pub struct Graph {
    /// All states in the graph.
    states: Vec<State>,
    /// The entry point.
    start: StateId,
    /// The unique accepting sentinel.
    termination: StateId,
    /// The closure of each state, indexed by state ID. Empty until the graph
    /// is finished.
    closures: Vec<Vec<StateId>>,
}

impl Graph {
    /// Create a graph containing only its start and termination states.
    pub(crate) fn new() -> Graph {
        let mut graph = Graph {
            states: Vec::new(),
            start: 0,
            termination: 0,
            closures: Vec::new(),
        };
        graph.start = graph.add_state(StateKind::Start);
        graph.termination = graph.add_state(StateKind::Termination);
        graph.link(graph.termination, graph.termination);
        graph
    }

    /// Add a new state with no successors and return its ID.
    pub(crate) fn add_state(&mut self, kind: StateKind) -> StateId {
        let id = self.states.len();
        self.states.push(State { kind, successors: Vec::new() });
        id
    }

    /// Add a repetition state wrapping `inner`. The inner state becomes the
    /// first successor of the new state.
    pub(crate) fn add_repetition(
        &mut self,
        inner: StateId,
        one_or_more: bool,
    ) -> StateId {
        let kind = if one_or_more {
            StateKind::OneOrMore { inner }
        } else {
            StateKind::ZeroOrMore { inner }
        };
        let id = self.add_state(kind);
        self.link(id, inner);
        id
    }

    /// Append an edge `from -> to`.
    pub(crate) fn link(&mut self, from: StateId, to: StateId) {
        self.states[from].successors.push(to);
    }

    /// Redirect the edge `from -> old` so that it points to `new` instead.
    ///
    /// The edge keeps its position in the successor list. If `from` has more
    /// than one edge to `old`, the most recently added one is redirected.
    /// Returns false (and changes nothing) if there is no such edge.
    pub(crate) fn redirect(
        &mut self,
        from: StateId,
        old: StateId,
        new: StateId,
    ) -> bool {
        let successors = &mut self.states[from].successors;
        match successors.iter().rposition(|&id| id == old) {
            Some(i) => {
                successors[i] = new;
                true
            }
            None => false,
        }
    }

    /// Precompute the closure of every state. Called once by the compiler
    /// after the last edge is added.
    pub(crate) fn finish(&mut self) {
        let closures: Vec<Vec<StateId>> =
            (0..self.states.len()).map(|id| self.compute_closure(id)).collect();
        self.closures = closures;
    }

    fn compute_closure(&self, id: StateId) -> Vec<StateId> {
        let mut closure = Vec::new();
        let mut seen = vec![false; self.states.len()];
        let mut stack = vec![id];
        while let Some(sid) = stack.pop() {
            if std::mem::replace(&mut seen[sid], true) {
                continue;
            }
            closure.push(sid);
            let state = &self.states[sid];
            if state.is_repetition() {
                // Reversed so that successors are visited in link order.
                stack.extend(state.successors.iter().rev().copied());
            }
        }
        closure
    }

    /// Returns the start state's ID.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Returns the termination state's ID.
    pub fn termination(&self) -> StateId {
        self.termination
    }

    /// Returns the state with the given ID.
    ///
    /// # Panics
    ///
    /// When `id` is not a state in this graph.
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    /// Returns all states, indexable by their ID.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Returns the number of states, including start and termination.
    ///
    /// A graph is never empty, so this is at least 2.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns the closure of a state: every state reachable from it without
    /// consuming a character, including the state itself.
    ///
    /// For anything but a repetition state this is just the state itself. For
    /// a repetition state it is the state plus the closures of its
    /// successors, the first of which is the repeated state.
    pub fn expand(&self, id: StateId) -> &[StateId] {
        &self.closures[id]
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph(")?;
        for (sid, state) in self.states.iter().enumerate() {
            let status = if sid == self.start { '>' } else { ' ' };
            write!(f, "{}{:06?}: ", status, sid)?;
            match state.kind {
                StateKind::Start => write!(f, "start")?,
                StateKind::Termination => write!(f, "termination")?,
                StateKind::Literal(ch) => write!(f, "{:?}", ch)?,
                StateKind::AnyChar => write!(f, "any")?,
                StateKind::CharClass(ref class) => write!(f, "{:?}", class)?,
                StateKind::ZeroOrMore { inner } => write!(f, "star({})", inner)?,
                StateKind::OneOrMore { inner } => write!(f, "plus({})", inner)?,
            }
            let next = state
                .successors
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<String>>()
                .join(", ");
            writeln!(f, " => {}", next)?;
        }
        writeln!(f, ")")
    }
}
