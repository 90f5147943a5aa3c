//! Public facade: a `Regex` type wrapping the builder/parser/simulator
//! core behind an API shaped like a conventional regex library's, the
//! same role this crate's earlier multi-engine `Regex` played over its
//! Pike-VM/JIT backends — except there is only ever one engine here, so
//! there is no enum to dispatch through.

use std::sync::Arc;

use crate::builder::Builder;
use crate::bytecode::Program;
use crate::error::CompileError;
use crate::parser::{self, Options};
use crate::util::{Captures, Input, Match, Span};
use crate::vm::{self, Machine};

/// A compiled regular expression.
///
/// Cheap to clone the underlying program (it is reference counted) but
/// `Regex` itself is not `Clone`; share it behind a reference instead,
/// and give each concurrent search its own [`Machine`] via
/// [`Regex::new_state`].
pub struct Regex {
    program: Arc<Program>,
    capture_count: usize,
}

impl Regex {
    /// Compiles `pattern` with default options: case-sensitive, captures
    /// enabled.
    pub fn new(pattern: &str) -> Result<Self, CompileError> {
        Self::with_options(pattern, Options::default())
    }

    /// Compiles `pattern`, matching ASCII letters regardless of case.
    pub fn new_case_insensitive(pattern: &str) -> Result<Self, CompileError> {
        Self::with_options(
            pattern,
            Options {
                case_insensitive: true,
                ..Options::default()
            },
        )
    }

    /// Compiles `pattern` under caller-chosen [`Options`]. Passing
    /// `disable_captures` yields a program with no `SAVE_*` instructions
    /// at all: such a `Regex` only supports [`Regex::is_match`], since
    /// there is no group-0 span for `find`/`find_captures` to report.
    pub fn with_options(pattern: &str, options: Options) -> Result<Self, CompileError> {
        let mut builder = Builder::new();
        let capture_count = parser::compile(&mut builder, pattern.as_bytes(), options)?;
        let program = builder.output()?;
        Ok(Self {
            program: Arc::new(program),
            capture_count,
        })
    }

    /// Wraps an already-assembled program, for callers who built their
    /// expression tree directly with a [`Builder`] rather than through
    /// the text parser.
    pub fn from_program(program: Program, capture_count: usize) -> Self {
        Self {
            program: Arc::new(program),
            capture_count,
        }
    }

    /// Number of capture slots in the compiled program, including the
    /// reserved group 0 (the overall match), or 0 if captures were
    /// disabled at compile time.
    pub fn capture_count(&self) -> usize {
        self.capture_count
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Renders the compiled program as human-readable disassembly.
    pub fn disassemble(&self) -> String {
        crate::disasm::disassemble(&self.program)
    }

    /// A fresh, reusable execution state. Reuse the same [`Machine`]
    /// across repeated searches against this `Regex` to avoid
    /// reallocating its capture-set pool every time.
    pub fn new_state(&self) -> Machine {
        Machine::new(Arc::clone(&self.program), self.capture_count)
    }

    /// Whether `input` matches, without computing match bounds.
    pub fn is_match<'s>(&self, input: impl Into<Input<'s>>) -> bool {
        let mut state = self.new_state();
        self.is_match_with(input, &mut state)
    }

    pub fn is_match_with<'s>(&self, input: impl Into<Input<'s>>, state: &mut Machine) -> bool {
        self.search(input.into().first_match(true), state)
    }

    /// The leftmost (earliest-starting, then highest-priority) match, if
    /// any.
    pub fn find<'s>(&self, input: impl Into<Input<'s>>) -> Option<Match<'s>> {
        let mut state = self.new_state();
        self.find_with(input, &mut state)
    }

    pub fn find_with<'s>(&self, input: impl Into<Input<'s>>, state: &mut Machine) -> Option<Match<'s>> {
        let input = input.into();
        let subject = input.subject;
        if !self.search(input, state) {
            return None;
        }
        let span = *state.captures()?.first()?;
        Some(Match { subject, span })
    }

    /// The leftmost match together with the bounds of every capture
    /// group (group 0 is the overall match).
    pub fn find_captures<'s>(&self, input: impl Into<Input<'s>>) -> Option<Captures<'s>> {
        let mut state = self.new_state();
        self.find_captures_with(input, &mut state)
    }

    pub fn find_captures_with<'s>(
        &self,
        input: impl Into<Input<'s>>,
        state: &mut Machine,
    ) -> Option<Captures<'s>> {
        let input = input.into();
        let subject = input.subject;
        if !self.search(input, state) {
            return None;
        }
        let spans: Box<[Span]> = state.captures()?.into();
        Some(Captures::new(subject, spans))
    }

    /// Iterates every non-overlapping match in `input`, left to right.
    pub fn find_all<'r, 's>(&'r self, input: impl Into<Input<'s>>) -> FindAll<'r, 's> {
        FindAll {
            regex: self,
            state: self.new_state(),
            input: input.into(),
        }
    }

    /// Iterates every non-overlapping match in `input`, with capture
    /// group bounds.
    pub fn find_all_captures<'r, 's>(&'r self, input: impl Into<Input<'s>>) -> FindAllCaptures<'r, 's> {
        FindAllCaptures {
            regex: self,
            state: self.new_state(),
            input: input.into(),
        }
    }

    /// Runs the search loop. Unless `input.anchored`, a new
    /// lowest-priority start thread is folded into the live state set at
    /// every position not yet covered by a higher-priority match, so an
    /// earlier start always wins ties (leftmost).
    fn search(&self, input: Input<'_>, machine: &mut Machine) -> bool {
        if !input.valid() {
            return false;
        }
        let Span { from, to } = input.span;
        let len = input.subject.len();
        machine.start(from, context_at(len, from));

        let mut pos = from;
        loop {
            if machine.is_accepted() && (input.first_match || machine.live_count() == 1) {
                return true;
            }
            if pos >= to {
                break;
            }
            if !input.anchored && !machine.is_accepted() {
                machine.add_start_thread(pos, context_at(len, pos));
            }
            if machine.is_rejected() {
                if input.anchored {
                    break;
                }
                // Nothing alive at this position (e.g. `^abc` injected
                // past the start of the subject); later positions may
                // still succeed.
                pos += 1;
                continue;
            }
            let byte = input.subject[pos];
            machine.step(byte, pos, context_at(len, pos + 1));
            pos += 1;
        }
        machine.is_accepted()
    }
}

/// Context flags valid exactly at absolute subject position `pos`: bit 0
/// (`AT_START`) iff `pos == 0`, bit 1 (`AT_END`) iff `pos == subject_len`.
/// `Input::span` only narrows which bytes are scanned — `^`/`$` always
/// refer to the whole subject, never to the span.
fn context_at(subject_len: usize, pos: usize) -> u32 {
    let mut ctx = 0;
    if pos == 0 {
        ctx |= vm::CONTEXT_AT_START;
    }
    if pos == subject_len {
        ctx |= vm::CONTEXT_AT_END;
    }
    ctx
}

/// Iterator over all non-overlapping matches, returned by
/// [`Regex::find_all`].
pub struct FindAll<'r, 's> {
    regex: &'r Regex,
    state: Machine,
    input: Input<'s>,
}

impl<'r, 's> Iterator for FindAll<'r, 's> {
    type Item = Match<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.input.span.valid() {
            return None;
        }
        let m = self.regex.find_with(self.input.clone(), &mut self.state)?;
        self.input.span.from = m.next_match_start();
        Some(m)
    }
}

/// Iterator over all non-overlapping matches with capture groups,
/// returned by [`Regex::find_all_captures`].
pub struct FindAllCaptures<'r, 's> {
    regex: &'r Regex,
    state: Machine,
    input: Input<'s>,
}

impl<'r, 's> Iterator for FindAllCaptures<'r, 's> {
    type Item = Captures<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.input.span.valid() {
            return None;
        }
        let caps = self.regex.find_captures_with(self.input.clone(), &mut self.state)?;
        self.input.span.from = caps.group0().next_match_start();
        Some(caps)
    }
}
