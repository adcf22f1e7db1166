//! The public compiled pattern type and its configuration.

use std::{fmt, str::FromStr, sync::Arc};

use crate::{compiler::Compiler, matcher::Matcher, state::Graph, CompileError};

/// Options that control how a compiled pattern matches.
///
/// There is only one knob today. It decides how repetition states (`*` and
/// `+`) behave during matching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    vacuous_repetition: bool,
}

impl Config {
    /// Return a new default configuration.
    pub fn new() -> Config {
        Config::default()
    }

    /// Whether repetition states accept input characters vacuously.
    ///
    /// This is disabled by default, in which case `*` and `+` states are
    /// zero-width: they only connect the states around them, `a*` matches
    /// any number of `a`s and `a+` requires at least one.
    ///
    /// When enabled, a repetition state can itself stay active across an
    /// input character, standing in for a character that the repeated
    /// construct would have rejected. `a*b` then matches `cb`, and `a+`
    /// stops meaning "one or more `a`s": `a+b` matches `axb`. This exists
    /// to reproduce the permissive behavior of simpler engines built the
    /// same way.
    pub fn vacuous_repetition(mut self, yes: bool) -> Config {
        self.vacuous_repetition = yes;
        self
    }

    /// Returns whether repetition states accept vacuously.
    pub fn get_vacuous_repetition(&self) -> bool {
        self.vacuous_repetition
    }
}

/// A builder for configuring a [`CompiledPattern`].
///
/// # Example
///
/// ```
/// use regex_fsm::Builder;
///
/// let pattern = Builder::new().vacuous_repetition(true).build("a+b").unwrap();
/// assert!(pattern.matches("axb"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new builder with a default configuration.
    pub fn new() -> Builder {
        Builder::default()
    }

    /// Replace the whole configuration.
    pub fn configure(&mut self, config: Config) -> &mut Builder {
        self.config = config;
        self
    }

    /// See [`Config::vacuous_repetition`].
    pub fn vacuous_repetition(&mut self, yes: bool) -> &mut Builder {
        self.config = self.config.vacuous_repetition(yes);
        self
    }

    /// Compile `pattern` with this builder's configuration.
    pub fn build(&self, pattern: &str) -> Result<CompiledPattern, CompileError> {
        let graph = Compiler::new().compile(pattern)?;
        Ok(CompiledPattern {
            pattern: Arc::from(pattern),
            graph: Arc::new(graph),
            config: self.config,
        })
    }
}

/// A compiled pattern.
///
/// The graph inside is never modified after compilation, so a pattern can
/// be matched against any number of inputs, and cloned or shared across
/// threads cheaply.
#[derive(Clone)]
pub struct CompiledPattern {
    pattern: Arc<str>,
    graph: Arc<Graph>,
    config: Config,
}

impl CompiledPattern {
    /// Compile a pattern with the default configuration.
    pub fn new(pattern: &str) -> Result<CompiledPattern, CompileError> {
        Builder::new().build(pattern)
    }

    /// Returns a builder for configuring a pattern.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Returns true if some prefix of `input` matches this pattern.
    ///
    /// Matching is anchored at the start of `input` but not at its end.
    ///
    /// ```
    /// let pattern = regex_fsm::compile("a*b").unwrap();
    /// assert!(pattern.matches("aaab"));
    /// assert!(pattern.matches("bcd"));
    /// assert!(!pattern.matches("cb"));
    /// ```
    pub fn matches(&self, input: &str) -> bool {
        self.matcher().is_match(input)
    }

    /// Returns the end offset of the shortest prefix of `input` that matches
    /// this pattern.
    ///
    /// ```
    /// let pattern = regex_fsm::compile("a+").unwrap();
    /// assert_eq!(pattern.shortest_match("aaab"), Some(1));
    /// assert_eq!(pattern.shortest_match("baaa"), None);
    /// ```
    pub fn shortest_match(&self, input: &str) -> Option<usize> {
        self.matcher().shortest_match(input)
    }

    /// Returns the pattern text this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns the compiled state graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the configuration this pattern matches with.
    pub fn config(&self) -> Config {
        self.config
    }

    fn matcher(&self) -> Matcher<'_> {
        Matcher::new(&self.graph)
            .vacuous_repetition(self.config.get_vacuous_repetition())
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Debug for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompiledPattern").field(&self.as_str()).finish()
    }
}

impl FromStr for CompiledPattern {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<CompiledPattern, CompileError> {
        CompiledPattern::new(s)
    }
}
