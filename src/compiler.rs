/*!
Compiles a pattern string into a state graph.
*/

use crate::{
    state::{CharClass, Graph, StateId, StateKind},
    CompileError, CompileResult,
};

/// Compiler that turns a pattern string into a linked state [`Graph`].
///
/// The pattern is read in a single left-to-right pass. `prev` is the most
/// recently linked state and `stack` holds the construction history, with
/// `prev` always on top and the start state always at the bottom. The state
/// just below the top is the one that links into `prev`, which is what the
/// `*` splice needs to find.
pub struct Compiler {
    graph: Graph,
    stack: Vec<StateId>,
    prev: StateId,
}

impl Compiler {
    /// Create a new compiler
    pub fn new() -> Self {
        let graph = Graph::new();
        let start = graph.start();
        Self { graph, stack: vec![start], prev: start }
    }

    /// Compile a pattern into a finished graph.
    pub fn compile(mut self, pattern: &str) -> CompileResult<Graph> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut pos = 0;
        while pos < chars.len() {
            match chars[pos] {
                '[' => {
                    let (class, close) = parse_class(&chars, pos)?;
                    self.push_atom(StateKind::CharClass(class));
                    pos = close;
                }
                '.' => self.push_atom(StateKind::AnyChar),
                '*' => self.compile_star(pos)?,
                '+' => self.compile_plus(pos)?,
                ch if ch.is_alphanumeric() => {
                    self.push_atom(StateKind::Literal(ch))
                }
                ch => {
                    return Err(CompileError::UnsupportedConstruct {
                        character: ch,
                        position: pos,
                    })
                }
            }
            pos += 1;
        }

        let termination = self.graph.termination();
        self.graph.link(self.prev, termination);
        self.graph.finish();
        debug!(
            "compiled pattern {:?} into a graph with {} states",
            pattern,
            self.graph.len()
        );
        Ok(self.graph)
    }

    /// Add a character-consuming state and link it after `prev`.
    fn push_atom(&mut self, kind: StateKind) {
        let id = self.graph.add_state(kind);
        self.graph.link(self.prev, id);
        self.stack.push(id);
        self.prev = id;
    }

    /// Compile `*` applied to the most recently compiled construct.
    ///
    /// The new repetition state is spliced in between the construct and
    /// whatever linked into it, so that the construct can be skipped
    /// entirely as well as re-entered from the repetition state.
    fn compile_star(&mut self, pos: usize) -> CompileResult<()> {
        let target = self.repeatable('*', pos)?;
        let star = self.graph.add_repetition(target, false);

        self.stack.pop();
        let upstream = self.stack.last().copied().unwrap_or(self.graph.start());
        let spliced = self.graph.redirect(upstream, target, star);
        debug_assert!(
            spliced,
            "state {} has no edge to {} to splice",
            upstream, target
        );
        trace!(
            "spliced star {} between {} and {} at position {}",
            star,
            upstream,
            target,
            pos
        );

        self.graph.link(target, star);
        self.stack.push(star);
        self.prev = star;
        Ok(())
    }

    /// Compile `+` applied to the most recently compiled construct.
    ///
    /// Unlike `*` nothing upstream is rewired: the repetition state is only
    /// reachable after the construct has matched once.
    fn compile_plus(&mut self, pos: usize) -> CompileResult<()> {
        let target = self.repeatable('+', pos)?;
        let plus = self.graph.add_repetition(target, true);
        self.graph.link(target, plus);
        self.stack.push(plus);
        self.prev = plus;
        Ok(())
    }

    /// Returns the construct the quantifier `op` at `pos` applies to. A
    /// quantifier with nothing before it is an error.
    fn repeatable(&self, op: char, pos: usize) -> CompileResult<StateId> {
        if self.prev == self.graph.start() {
            return Err(CompileError::UnsupportedConstruct {
                character: op,
                position: pos,
            });
        }
        Ok(self.prev)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the bracket expression opening at `open`.
///
/// Returns the class and the position of the closing `]`. Inside brackets
/// every character stands for itself, except that a `-` between two
/// characters denotes the inclusive range from the one before it to the one
/// after it. Ranges may share an endpoint, so `a-c-e` is `a` through `e`. A
/// `-` first or last in the brackets is a literal `-`, and a reversed range
/// is an error.
fn parse_class(chars: &[char], open: usize) -> CompileResult<(CharClass, usize)> {
    let close = match chars[open + 1..].iter().position(|&c| c == ']') {
        Some(offset) => open + 1 + offset,
        None => {
            return Err(CompileError::UnsupportedConstruct {
                character: '[',
                position: open,
            })
        }
    };

    let body = &chars[open + 1..close];
    let mut ranges = Vec::with_capacity(body.len());
    let mut i = 0;
    while i < body.len() {
        if body[i] == '-' && i > 0 && i + 1 < body.len() {
            let (lo, hi) = (body[i - 1], body[i + 1]);
            if lo > hi {
                return Err(CompileError::UnsupportedConstruct {
                    character: '-',
                    position: open + 1 + i,
                });
            }
            ranges.push((lo, hi));
            i += 2;
        } else {
            ranges.push((body[i], body[i]));
            i += 1;
        }
    }
    Ok((CharClass::new(ranges), close))
}
