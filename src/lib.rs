/*!
This crate provides a small regular expression engine that compiles patterns
into an explicit graph of states and matches them by simulating sets of
states, without backtracking.

The supported syntax is deliberately tiny:

* `a`, `7`, `é`: any alphanumeric character matches itself.
* `.`: matches any single character.
* `[a-z0_]`: matches any character in the brackets. `x-y` is an inclusive
  range, and ranges may be chained (`a-c-e`). A `-` first or last in the
  brackets is a literal `-`. A reversed range such as `[z-a]` is rejected.
* `*`: zero or more of the preceding construct.
* `+`: one or more of the preceding construct.

Anything else (alternation, groups, anchors, escapes, bounded repetition)
is rejected with a [`CompileError`].

Matching is anchored at the start of the input but not at its end: a pattern
matches if some prefix of the input matches it.

# Example

```
let pattern = regex_fsm::compile("a*b.c+").unwrap();
assert!(pattern.matches("aaabxc"));
assert!(pattern.matches("bxcc and anything after"));
assert!(!pattern.matches("aaac"));
```

# How it works

A pattern compiles to a [`Graph`](state::Graph) whose states are stored in
an arena and refer to each other by index. Literals, `.` and bracket
expressions become states that consume one character. `*` and `+` become
repetition states that wrap the construct before them. The matcher keeps the
set of states that are possible after each input character, flattening
repetition states through their closure
([`Graph::expand`](state::Graph::expand)).

# Crate features

* **std** (enabled by default) - Implements `std::error::Error` for
  [`CompileError`].
* **logging** - Emits diagnostics from the compiler and matcher through the
  `log` crate.
*/

#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[macro_use]
mod macros;

pub mod compiler;
pub mod matcher;
pub mod pattern;
pub mod state;

pub use compiler::Compiler;
pub use matcher::Matcher;
pub use pattern::{Builder, CompiledPattern, Config};
pub use state::{CharClass, Graph, State, StateId, StateKind};

// Checks the README examples.
#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// The result of compiling a pattern.
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that can occur during compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A character that does not map to any supported construct, or a
    /// malformed bracket expression.
    ///
    /// For an unterminated bracket expression the character is the opening
    /// `[`, and for a reversed range it is the `-` of that range.
    UnsupportedConstruct {
        /// The offending character.
        character: char,
        /// The offending character's position in the pattern, counted in
        /// characters.
        position: usize,
    },
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::UnsupportedConstruct { character, position } => write!(
                f,
                "unsupported construct {:?} at position {}",
                character, position
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CompileError {}

/// Compile a pattern with the default configuration.
///
/// This is a shortcut for [`CompiledPattern::new`].
///
/// ```
/// let err = regex_fsm::compile("a|b").unwrap_err();
/// assert_eq!(err.to_string(), "unsupported construct '|' at position 1");
/// ```
pub fn compile(pattern: &str) -> Result<CompiledPattern, CompileError> {
    CompiledPattern::new(pattern)
}
