//! Builder (C4): assembles a program from the bottom up via a stack of
//! fragments, one instruction-emitting call at a time.
//!
//! The builder never panics on misuse: once an operation fails, the
//! error is recorded and every subsequent call returns it immediately
//! (and does not touch the arena), mirroring the sticky `error` field on
//! `NfaBuilder`. Callers are expected to check [`Builder::error`] (or the
//! `Result` from [`Builder::output`]) rather than unwind mid-build.

use crate::bytecode::{self, op, range_word, Program, MAX_JUMP};
use crate::error::BuildError;
use crate::fragment::{FragArena, FragId};
use crate::pool::WordArena;

/// Case-fold the byte before matching it. Shared bit value with
/// [`NON_GREEDY`]: the two flags are never passed to the same operation.
pub const CASE_INSENSITIVE: u32 = 1;
/// Prefer the shorter match for the repetition operator this flag is
/// passed to.
pub const NON_GREEDY: u32 = 1;

/// Upper bound on live entries in the builder's expression stack. A
/// regex that nests deeper than this (explicit groups or implicit
/// concatenation terms) is rejected with [`BuildError::StackOverflow`]
/// rather than growing unboundedly.
const MAX_STACK: usize = 48;

/// Upper bound on words emitted into the arena, leaving room for the
/// trailing `ACCEPT` word so the finished program never exceeds the
/// `nops <= 2^16-1` bound of §3/§8's testable property 1.
const MAX_PROGRAM_WORDS: usize = u16::MAX as usize - 1;

pub struct Builder {
    words: WordArena,
    frags: FragArena,
    stack: Vec<(FragId, u32)>,
    error: Option<BuildError>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            words: WordArena::new(),
            frags: FragArena::new(),
            stack: Vec::new(),
            error: None,
        }
    }

    pub fn with_capacity(words: usize) -> Self {
        Self {
            words: WordArena::with_capacity(words),
            frags: FragArena::new(),
            stack: Vec::new(),
            error: None,
        }
    }

    pub fn with_page_alloc(grow: impl FnMut(usize) -> Option<usize> + 'static) -> Self {
        Self {
            words: WordArena::with_page_alloc(grow),
            frags: FragArena::new(),
            stack: Vec::new(),
            error: None,
        }
    }

    /// The sticky error, if any operation has already failed.
    pub fn error(&self) -> Option<BuildError> {
        self.error
    }

    /// Current depth of the expression stack. Parsers use this to
    /// remember where to roll back to after an error mid-pattern.
    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    /// Discards stack entries above `len`, without touching any sticky
    /// error. Used to recover the builder's logical stack after a parse
    /// failure; the underlying arena is never reclaimed (it is a bump
    /// allocator), only the expression stack bookkeeping.
    pub fn truncate_stack(&mut self, len: usize) {
        self.stack.truncate(len);
    }

    fn check(&self) -> Result<(), BuildError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn fail(&mut self, e: BuildError) -> BuildError {
        self.error = Some(e);
        e
    }

    fn pop(&mut self) -> Result<(FragId, u32), BuildError> {
        match self.stack.pop() {
            Some(entry) => Ok(entry),
            None => Err(self.fail(BuildError::StackUnderflow)),
        }
    }

    fn push_frag(&mut self, frag: FragId, len: u32) -> Result<(), BuildError> {
        if self.stack.len() >= MAX_STACK {
            return Err(self.fail(BuildError::StackOverflow));
        }
        self.stack.push((frag, len));
        Ok(())
    }

    fn check_program_bound(&mut self, len: usize) -> Result<(), BuildError> {
        if len > MAX_PROGRAM_WORDS {
            return Err(self.fail(BuildError::NfaTooLarge));
        }
        Ok(())
    }

    fn alloc_words(&mut self, ops: &[u16]) -> Result<u32, BuildError> {
        let start = self.words.push(ops).map_err(|e| self.fail(e))?;
        self.check_program_bound(start as usize + ops.len())?;
        Ok(start)
    }

    fn alloc_word(&mut self, word: u16) -> Result<u32, BuildError> {
        let start = self.words.push_one(word).map_err(|e| self.fail(e))?;
        self.check_program_bound(start as usize + 1)?;
        Ok(start)
    }

    fn push_ops(&mut self, ops: &[u16]) -> Result<(), BuildError> {
        let start = self.alloc_words(ops)?;
        let frag = self.frags.new_fragment(start, ops.len() as u32);
        self.push_frag(frag, ops.len() as u32)
    }

    fn push_class(&mut self, ranges: &[(u8, u8)]) -> Result<(), BuildError> {
        if ranges.len() > u8::MAX as usize {
            return Err(self.fail(BuildError::NfaTooLarge));
        }
        let mut ops = Vec::with_capacity(1 + ranges.len());
        ops.push(bytecode::opword(op::MATCH_CLASS, ranges.len() as u8));
        for &(first, last) in ranges {
            ops.push(range_word(first, last));
        }
        self.push_ops(&ops)
    }

    // ----- atoms -----

    pub fn match_empty(&mut self) -> Result<(), BuildError> {
        self.check()?;
        self.push_frag(FragId::EMPTY, 0)
    }

    pub fn match_any(&mut self) -> Result<(), BuildError> {
        self.check()?;
        self.push_ops(&[bytecode::opword(op::MATCH_ANY, 0)])
    }

    pub fn match_byte(&mut self, byte: u8, flags: u32) -> Result<(), BuildError> {
        self.check()?;
        if flags & CASE_INSENSITIVE != 0 && byte.is_ascii_alphabetic() {
            self.push_ops(&[bytecode::opword(op::MATCH_BYTE_CI, byte.to_ascii_lowercase())])
        } else {
            self.push_ops(&[bytecode::opword(op::MATCH_BYTE, byte)])
        }
    }

    pub fn match_byte_range(&mut self, first: u8, last: u8, flags: u32) -> Result<(), BuildError> {
        self.check()?;
        debug_assert!(first <= last, "match_byte_range requires first <= last");
        if first == last {
            return self.match_byte(first, flags);
        }
        let mut ranges = vec![(first, last)];
        if flags & CASE_INSENSITIVE != 0 {
            if let Some((lo, hi)) = intersect(first, last, b'A', b'Z') {
                ranges.push((lo.to_ascii_lowercase(), hi.to_ascii_lowercase()));
            }
            if let Some((lo, hi)) = intersect(first, last, b'a', b'z') {
                ranges.push((lo.to_ascii_uppercase(), hi.to_ascii_uppercase()));
            }
        }
        let merged = merge_ranges(ranges);
        self.push_class(&merged)
    }

    pub fn match_string(&mut self, bytes: &[u8], flags: u32) -> Result<(), BuildError> {
        self.check()?;
        self.match_empty()?;
        for &byte in bytes {
            self.match_byte(byte, flags)?;
            self.join()?;
        }
        Ok(())
    }

    // ----- composition -----

    pub fn join(&mut self) -> Result<(), BuildError> {
        self.check()?;
        let (b, blen) = self.pop()?;
        let (a, alen) = self.pop()?;
        let merged = self.frags.link(a, b);
        self.push_frag(merged, alen + blen)
    }

    pub fn alt(&mut self) -> Result<(), BuildError> {
        self.check()?;
        let (b, blen) = self.pop()?;
        let (a, alen) = self.pop()?;
        if a.is_empty() && b.is_empty() {
            return self.push_frag(FragId::EMPTY, 0);
        }
        if let (Some(ra), Some(rb)) = (
            self.class_ranges_if_single(a, alen),
            self.class_ranges_if_single(b, blen),
        ) {
            let mut all = ra;
            all.extend(rb);
            let merged = merge_ranges(all);
            return self.push_class(&merged);
        }
        self.emit_alt(a, alen, b, blen)
    }

    /// Emits the general fork/jump encoding of `a|b`: a two-way fork
    /// into `a` first (highest priority) and `b` second, with a trailing
    /// unconditional jump skipping over `b` once `a` has matched (absent
    /// when `b` is empty, since there is then nothing to skip).
    fn emit_alt(
        &mut self,
        a: FragId,
        alen: u32,
        b: FragId,
        blen: u32,
    ) -> Result<(), BuildError> {
        let trailing = blen > 0;
        let jump_len: u32 = if trailing { 2 } else { 0 };
        let off_to_b = alen as i64 + jump_len as i64;
        if off_to_b > MAX_JUMP as i64 {
            return Err(self.fail(BuildError::NfaTooLarge));
        }
        let fork_start = self.alloc_words(&[bytecode::opword(op::JUMP, 2), 0, off_to_b as u16])?;
        let fork_frag = self.frags.new_fragment(fork_start, 3);

        let mut tail = b;
        let mut tail_len = blen;
        if trailing {
            if blen as i64 > MAX_JUMP as i64 {
                return Err(self.fail(BuildError::NfaTooLarge));
            }
            let jmp_start =
                self.alloc_words(&[bytecode::opword(op::JUMP, 1), blen as u16])?;
            let jmp_frag = self.frags.new_fragment(jmp_start, 2);
            tail = self.frags.link(jmp_frag, b);
            tail_len = 2 + blen;
        }

        let rest = self.frags.link(a, tail);
        let merged = self.frags.link(fork_frag, rest);
        self.push_frag(merged, 3 + alen + tail_len)
    }

    pub fn zero_or_one(&mut self, flags: u32) -> Result<(), BuildError> {
        self.check()?;
        let (e, elen) = self.pop()?;
        if elen == 0 {
            return self.push_frag(FragId::EMPTY, 0);
        }
        if flags & NON_GREEDY != 0 {
            self.emit_alt(FragId::EMPTY, 0, e, elen)
        } else {
            self.emit_alt(e, elen, FragId::EMPTY, 0)
        }
    }

    pub fn zero_or_more(&mut self, flags: u32) -> Result<(), BuildError> {
        self.check()?;
        let (e, elen) = self.pop()?;
        if elen == 0 {
            return self.push_frag(FragId::EMPTY, 0);
        }
        let nongreedy = flags & NON_GREEDY != 0;
        let elen_i = elen as i64;
        let off_end = elen_i + 2;
        let off_back = -(elen_i + 5);
        if off_end > MAX_JUMP as i64 || off_back < -(MAX_JUMP as i64) {
            return Err(self.fail(BuildError::NfaTooLarge));
        }
        let (off_enter_w, off_exit_w) = (0i16 as u16, off_end as i16 as u16);
        let fork_ops = if nongreedy {
            [
                bytecode::opword(op::JUMP, 2),
                off_exit_w,
                off_enter_w,
            ]
        } else {
            [
                bytecode::opword(op::JUMP, 2),
                off_enter_w,
                off_exit_w,
            ]
        };
        let fork_start = self.alloc_words(&fork_ops)?;
        let fork_frag = self.frags.new_fragment(fork_start, 3);
        let back_start =
            self.alloc_words(&[bytecode::opword(op::JUMP, 1), off_back as i16 as u16])?;
        let back_frag = self.frags.new_fragment(back_start, 2);
        let body = self.frags.link(e, back_frag);
        let merged = self.frags.link(fork_frag, body);
        self.push_frag(merged, 3 + elen + 2)
    }

    pub fn one_or_more(&mut self, flags: u32) -> Result<(), BuildError> {
        self.check()?;
        let (e, elen) = self.pop()?;
        if elen == 0 {
            return self.push_frag(FragId::EMPTY, 0);
        }
        let nongreedy = flags & NON_GREEDY != 0;
        let elen_i = elen as i64;
        let off_back = -(elen_i + 3);
        let off_end = 0i64;
        if off_back < -(MAX_JUMP as i64) {
            return Err(self.fail(BuildError::NfaTooLarge));
        }
        let (off_back_w, off_end_w) = (off_back as i16 as u16, off_end as i16 as u16);
        let fork_ops = if nongreedy {
            [
                bytecode::opword(op::JUMP, 2),
                off_end_w,
                off_back_w,
            ]
        } else {
            [
                bytecode::opword(op::JUMP, 2),
                off_back_w,
                off_end_w,
            ]
        };
        let fork_start = self.alloc_words(&fork_ops)?;
        let fork_frag = self.frags.new_fragment(fork_start, 3);
        let merged = self.frags.link(e, fork_frag);
        self.push_frag(merged, elen + 3)
    }

    pub fn complement_char(&mut self) -> Result<(), BuildError> {
        self.check()?;
        let (frag, len) = self.pop()?;
        let ranges = match self.class_ranges_if_single(frag, len) {
            Some(ranges) => ranges,
            None => return Err(self.fail(BuildError::ComplementOfNonChar)),
        };
        let merged = merge_ranges(ranges);
        let gaps = complement_ranges(&merged);
        self.push_class(&gaps)
    }

    pub fn capture(&mut self, id: u8) -> Result<(), BuildError> {
        self.check()?;
        let (frag, len) = self.pop()?;
        let start_idx = self.alloc_word(bytecode::opword(op::SAVE_START, id))?;
        let start_frag = self.frags.new_fragment(start_idx, 1);
        let end_idx = self.alloc_word(bytecode::opword(op::SAVE_END, id))?;
        let end_frag = self.frags.new_fragment(end_idx, 1);
        let body = self.frags.link(frag, end_frag);
        let merged = self.frags.link(start_frag, body);
        self.push_frag(merged, len + 2)
    }

    pub fn assert_context(&mut self, bit: u8) -> Result<(), BuildError> {
        self.check()?;
        self.push_ops(&[bytecode::opword(op::ASSERT_CONTEXT, bit)])
    }

    pub fn assert_at_start(&mut self) -> Result<(), BuildError> {
        self.assert_context(0)
    }

    pub fn assert_at_end(&mut self) -> Result<(), BuildError> {
        self.assert_context(1)
    }

    // ----- output -----

    pub fn output_size(&self) -> Result<usize, BuildError> {
        self.check()?;
        match self.stack.len() {
            0 => Err(BuildError::StackUnderflow),
            1 => Ok(self.stack[0].1 as usize + 1),
            _ => Err(BuildError::Unclosed),
        }
    }

    /// Consumes the builder and assembles the finished program. Fails with
    /// [`BuildError::StackUnderflow`] if the expression stack is empty, or
    /// [`BuildError::Unclosed`] if it holds more than one fragment.
    pub fn output(mut self) -> Result<Program, BuildError> {
        let needed = match self.output_size() {
            Ok(n) => n,
            Err(e) => {
                self.error = Some(e);
                return Err(e);
            }
        };
        let (frag, _len) = self.stack[0];
        let mut ops = Vec::with_capacity(needed);
        self.frags.copy_into(frag, &self.words, &mut ops);
        ops.push(bytecode::opword(op::ACCEPT, 0));
        Ok(Program::from_words(ops))
    }

    /// Writes the finished program into a caller-supplied buffer without
    /// consuming the builder, returning the number of words written.
    pub fn output_to_buffer(&self, buffer: &mut [u16]) -> Result<usize, BuildError> {
        self.check()?;
        let needed = self.output_size()?;
        if buffer.len() < needed {
            return Err(BuildError::BufferTooSmall);
        }
        let (frag, _len) = self.stack[0];
        let mut tmp = Vec::with_capacity(needed);
        self.frags.copy_into(frag, &self.words, &mut tmp);
        tmp.push(bytecode::opword(op::ACCEPT, 0));
        buffer[..needed].copy_from_slice(&tmp);
        Ok(needed)
    }

    /// Recognises a fragment as exactly one character-matching
    /// instruction (`MATCH_ANY`/`MATCH_BYTE`/`MATCH_BYTE_CI`/
    /// `MATCH_CLASS`), and returns its byte ranges. Used by `alt` to fold
    /// two classes into one instead of emitting a fork, and by
    /// `complement_char`, which only makes sense applied to such a
    /// fragment.
    fn class_ranges_if_single(&self, frag: FragId, len: u32) -> Option<Vec<(u8, u8)>> {
        let mut spans = self.frags.spans(frag);
        let (start, span_len) = spans.next()?;
        if spans.next().is_some() || span_len != len {
            return None;
        }
        let word = self.words.word_at(start);
        let opcode = bytecode::hi_byte(word);
        let arg = bytecode::lo_byte(word);
        match opcode {
            op::MATCH_ANY if span_len == 1 => Some(vec![(0, 255)]),
            op::MATCH_BYTE if span_len == 1 => Some(vec![(arg, arg)]),
            op::MATCH_BYTE_CI if span_len == 1 => {
                let upper = arg.to_ascii_uppercase();
                if upper != arg {
                    Some(merge_ranges(vec![(arg, arg), (upper, upper)]))
                } else {
                    Some(vec![(arg, arg)])
                }
            }
            op::MATCH_CLASS if span_len as usize == 1 + arg as usize => {
                let n = arg as usize;
                let mut ranges = Vec::with_capacity(n);
                for i in 0..n {
                    let w = self.words.word_at(start + 1 + i as u32);
                    ranges.push((bytecode::hi_byte(w), bytecode::lo_byte(w)));
                }
                Some(ranges)
            }
            _ => None,
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

fn intersect(a0: u8, a1: u8, b0: u8, b1: u8) -> Option<(u8, u8)> {
    let lo = a0.max(b0);
    let hi = a1.min(b1);
    if lo <= hi {
        Some((lo, hi))
    } else {
        None
    }
}

/// Sorts and coalesces touching or overlapping ranges, the same merge
/// pass `nfai_merge_ranges` runs (first to size the output, here in one
/// allocating pass since Rust vectors grow on their own).
fn merge_ranges(mut ranges: Vec<(u8, u8)>) -> Vec<(u8, u8)> {
    ranges.sort_by_key(|r| r.0);
    let mut out: Vec<(u8, u8)> = Vec::with_capacity(ranges.len());
    for (first, last) in ranges {
        if let Some(top) = out.last_mut() {
            if first as u16 <= top.1 as u16 + 1 {
                if last > top.1 {
                    top.1 = last;
                }
                continue;
            }
        }
        out.push((first, last));
    }
    out
}

/// The gaps in `[0, 255]` left uncovered by a sorted, disjoint set of
/// ranges.
fn complement_ranges(ranges: &[(u8, u8)]) -> Vec<(u8, u8)> {
    let mut gaps = Vec::new();
    let mut next: u16 = 0;
    for &(first, last) in ranges {
        if first as u16 > next {
            gaps.push((next as u8, (first as u16 - 1) as u8));
        }
        next = last as u16 + 1;
    }
    if next <= 255 {
        gaps.push((next as u8, 255));
    }
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_ranges(program: &Program) -> Vec<(u8, u8)> {
        match program.decode(0) {
            crate::bytecode::Op::MatchClass(ranges) => ranges
                .iter()
                .map(|&w| (bytecode::hi_byte(w), bytecode::lo_byte(w)))
                .collect(),
            other => panic!("expected a single MATCH_CLASS, got {other:?}"),
        }
    }

    /// Ported from `test_ci_classes` in `tests/whitebox.c`: case
    /// insensitive ranges fold into the right set, including the
    /// three-way fold for a range straddling both cases (`[X-c]`).
    #[test]
    fn case_insensitive_three_way_fold() {
        // [X-c] already covers X-Z, a few punctuation bytes, and a-c; the
        // case-insensitive fold adds A-C (from the lowercase half) and
        // x-z (from the uppercase half), giving three disjoint ranges.
        let mut b = Builder::new();
        b.match_byte_range(b'X', b'c', CASE_INSENSITIVE).unwrap();
        let program = b.output().unwrap();
        let ranges = class_ranges(&program);
        assert_eq!(ranges, vec![(b'A', b'C'), (b'X', b'c'), (b'x', b'z')]);
    }

    #[test]
    fn case_insensitive_simple_ranges() {
        // [N-m] plus its fold (A-M from the lowercase half, n-z from the
        // uppercase half) happens to be contiguous end to end: A-M, N-m,
        // n-z all touch, collapsing to one A-z range.
        let mut b = Builder::new();
        b.match_byte_range(b'N', b'm', CASE_INSENSITIVE).unwrap();
        let program = b.output().unwrap();
        let ranges = class_ranges(&program);
        assert_eq!(ranges, vec![(b'A', b'z')]);
    }

    /// Ported from `test_merge_classes`: alternating single bytes with
    /// mixed case sensitivity collapses into one class.
    #[test]
    fn alternation_merges_classes() {
        let mut b = Builder::new();
        for byte in [b'a', b'c', b'd', b'b', b'f', b'e'] {
            b.match_byte(byte, 0).unwrap();
        }
        // fold five alternations: ((((a|c)|d)|b)|f)|e
        for _ in 0..5 {
            b.alt().unwrap();
        }
        let program = b.output().unwrap();
        let ranges = class_ranges(&program);
        assert_eq!(ranges, vec![(b'a', b'f')]);
    }

    /// Ported from `test_negate_classes`.
    #[test]
    fn complement_of_merged_class() {
        let mut b = Builder::new();
        b.match_byte_range(b'a', b'f', 0).unwrap();
        b.complement_char().unwrap();
        let program = b.output().unwrap();
        let ranges = class_ranges(&program);
        assert_eq!(ranges, vec![(0, b'a' - 1), (b'f' + 1, 255)]);
    }

    #[test]
    fn complement_of_non_class_is_an_error() {
        let mut b = Builder::new();
        b.match_empty().unwrap();
        b.match_empty().unwrap();
        b.join().unwrap();
        let err = b.complement_char().unwrap_err();
        assert_eq!(err, BuildError::ComplementOfNonChar);
    }

    #[test]
    fn unclosed_stack_on_output() {
        let mut b = Builder::new();
        b.match_any().unwrap();
        b.match_any().unwrap();
        assert_eq!(b.output().unwrap_err(), BuildError::Unclosed);
    }

    #[test]
    fn empty_stack_on_output_is_underflow_not_unclosed() {
        let b = Builder::new();
        assert_eq!(b.output().unwrap_err(), BuildError::StackUnderflow);
    }

    #[test]
    fn stack_underflow_on_join() {
        let mut b = Builder::new();
        assert_eq!(b.join().unwrap_err(), BuildError::StackUnderflow);
        // sticky: further calls keep failing the same way
        assert_eq!(b.match_any().unwrap_err(), BuildError::StackUnderflow);
    }

    #[test]
    fn repetition_of_empty_is_a_no_op() {
        let mut b = Builder::new();
        b.match_empty().unwrap();
        b.zero_or_more(0).unwrap();
        let program = b.output().unwrap();
        assert_eq!(program.nops(), 1); // just ACCEPT
    }

    #[test]
    fn match_string_emits_one_byte_match_per_byte() {
        let mut b = Builder::new();
        b.match_string(b"abc", 0).unwrap();
        let program = b.output().unwrap();
        assert_eq!(program.nops(), 4); // 3 byte matches + ACCEPT
        for (pc, want) in [(0, b'a'), (1, b'b'), (2, b'c')] {
            match program.decode(pc) {
                crate::bytecode::Op::MatchByte(got) => assert_eq!(got, want),
                other => panic!("expected MatchByte({want}), got {other:?}"),
            }
        }
        assert!(matches!(program.decode(3), crate::bytecode::Op::Accept));
    }

    #[test]
    fn match_string_case_insensitive_folds_letters() {
        let mut b = Builder::new();
        b.match_string(b"Hi!", CASE_INSENSITIVE).unwrap();
        let program = b.output().unwrap();
        assert_eq!(program.nops(), 4); // 3 byte matches + ACCEPT
        match program.decode(0) {
            crate::bytecode::Op::MatchByteCi(lower) => assert_eq!(lower, b'h'),
            other => panic!("expected MatchByteCi('h'), got {other:?}"),
        }
        match program.decode(1) {
            crate::bytecode::Op::MatchByteCi(lower) => assert_eq!(lower, b'i'),
            other => panic!("expected MatchByteCi('i'), got {other:?}"),
        }
        // '!' is not an ASCII letter: case-insensitivity leaves it alone.
        match program.decode(2) {
            crate::bytecode::Op::MatchByte(b) => assert_eq!(b, b'!'),
            other => panic!("expected MatchByte('!'), got {other:?}"),
        }
    }

    #[test]
    fn match_string_of_empty_slice_is_the_empty_match() {
        let mut b = Builder::new();
        b.match_string(b"", 0).unwrap();
        let program = b.output().unwrap();
        assert_eq!(program.nops(), 1); // just ACCEPT
    }

    #[test]
    fn program_length_is_bounded_to_u16_max() {
        let mut b = Builder::new();
        b.match_empty().unwrap();
        for _ in 0..(MAX_PROGRAM_WORDS + 1) {
            if b.match_any().is_err() || b.join().is_err() {
                break;
            }
        }
        assert_eq!(b.error(), Some(BuildError::NfaTooLarge));
    }
}
