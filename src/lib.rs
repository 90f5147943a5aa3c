//! # bytenfa
//!
//! **bytenfa** is an embeddable, byte-oriented regular-expression engine:
//! a Thompson-NFA bytecode compiler and a Pike-VM-style simulator, with
//! no backtracking and linear-time matching.
//!
//! ## Features
//!
//! - **Pool allocator:** programs are assembled into a flat, growable
//!   16-bit word arena rather than individually heap-allocated nodes.
//! - **Fragment model:** the builder composes programs out of
//!   relocatable fragments joined in O(1), Thompson-construction style.
//! - **No Unicode:** matching is defined over raw bytes; there is no
//!   case folding beyond ASCII, no lookaround, no backreferences, no
//!   POSIX classes, and no JIT — see each module's docs for the
//!   reasoning.
//!
//! ## Usage
//!
//! ```rust
//! use bytenfa::Regex;
//!
//! let re = Regex::new(r"a(b|c)+d").unwrap();
//! assert!(re.is_match("abcbd"));
//! let caps = re.find_captures("abcbd").unwrap();
//! assert_eq!(caps.get(1).unwrap().slice(), b"b");
//! ```
//!
//! ## Crate Organization
//!
//! - `pool`: bump allocator over a flat word arena (C1)
//! - `fragment`: relocatable program fragments joined in O(1) (C2)
//! - `bytecode`: the 16-bit instruction set and `Program` (C3)
//! - `builder`: expression-stack compiler assembling fragments into a
//!   program (C4)
//! - `parser`: recursive-descent regex-text parser driving the builder
//!   directly (C5)
//! - `vm`: the Pike-VM simulator: dense/sparse state sets and
//!   reference-counted capture sets (C6)
//! - `error`: the error taxonomy shared by every fallible stage (C7)
//! - `disasm`: human-readable program disassembly
//! - `regex`: the public `Regex` facade tying the above together
//! - `util`: shared input/match/span/capture types
//!
//! ## License
//!
//! Licensed under MIT or Apache-2.0.

pub mod builder;
pub mod bytecode;
pub mod disasm;
pub mod error;
pub mod fragment;
pub mod parser;
pub mod pool;
pub mod regex;
pub mod util;
pub mod vm;

pub use builder::Builder;
pub use bytecode::Program;
pub use regex::Regex;
pub use vm::Machine;
