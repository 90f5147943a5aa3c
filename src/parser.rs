//! Regex-text parser (C5).
//!
//! A single left-to-right recursive-descent pass over the pattern bytes,
//! driving a [`Builder`] directly rather than building an intermediate
//! syntax tree — every parsed construct turns into its builder call(s)
//! as soon as it is recognised. Capture ids are assigned left to right
//! starting at 1; id 0 is reserved and wraps the whole pattern, giving
//! callers a conventional "group 0 is the overall match" capture the
//! same way most regex engines do (see [`crate::regex::Regex`]).
//!
//! Grammar (bytes, not Unicode scalars):
//!
//! ```text
//! pattern ::= alt
//! alt     ::= concat ('|' concat)*
//! concat  ::= rep*
//! rep     ::= term (('?' | '*' | '+') '?'?)?
//! term    ::= '(' alt ')' | '[' class ']' | '.' | '^' | '$' | escape | byte
//! class   ::= '^'? atom ('-' atom)?  (one or more, implicitly alternated)
//! atom    ::= escape | byte
//! escape  ::= '\' byte
//! ```

use crate::builder::{Builder, CASE_INSENSITIVE, NON_GREEDY};
use crate::error::{CompileError, ParseError};

/// Threads case-insensitivity and capture suppression from the public
/// API down into every builder call that accepts flags.
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    pub case_insensitive: bool,
    pub disable_captures: bool,
}

impl Options {
    fn match_flags(&self) -> u32 {
        if self.case_insensitive {
            CASE_INSENSITIVE
        } else {
            0
        }
    }
}

/// Maximum group nesting depth, matching the builder's own stack
/// capacity: nesting deeper than this would overflow it anyway.
const MAX_NESTING: usize = 48;

type PResult<T> = Result<T, CompileError>;

struct Parser<'p> {
    pattern: &'p [u8],
    pos: usize,
    options: Options,
    next_capture_id: u8,
    depth: usize,
}

impl<'p> Parser<'p> {
    fn peek(&self) -> Option<u8> {
        self.pattern.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.pattern.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn read_escape(&mut self) -> PResult<u8> {
        match self.advance() {
            None => Err(CompileError::Parse(ParseError::TrailingSlash)),
            Some(c) => Ok(match c {
                b'r' => b'\r',
                b'n' => b'\n',
                b't' => b'\t',
                b'0' => 0,
                b'b' => 0x08,
                b'v' => 0x0b,
                other => other,
            }),
        }
    }

    fn parse_alt(&mut self, b: &mut Builder) -> PResult<()> {
        self.parse_concat(b)?;
        while self.peek() == Some(b'|') {
            self.advance();
            self.parse_concat(b)?;
            b.alt()?;
        }
        Ok(())
    }

    fn parse_concat(&mut self, b: &mut Builder) -> PResult<()> {
        b.match_empty()?;
        while let Some(c) = self.peek() {
            if c == b'|' || c == b')' {
                break;
            }
            self.parse_rep(b)?;
            b.join()?;
        }
        Ok(())
    }

    fn parse_rep(&mut self, b: &mut Builder) -> PResult<()> {
        self.parse_term(b)?;
        match self.peek() {
            Some(b'?') => {
                self.advance();
                let flags = self.quant_flags();
                b.zero_or_one(flags)?;
                Ok(())
            }
            Some(b'*') => {
                self.advance();
                let flags = self.quant_flags();
                b.zero_or_more(flags)?;
                Ok(())
            }
            Some(b'+') => {
                self.advance();
                let flags = self.quant_flags();
                b.one_or_more(flags)?;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Consumes a second, immediately-following `?` and translates it to
    /// the non-greedy builder flag.
    fn quant_flags(&mut self) -> u32 {
        if self.peek() == Some(b'?') {
            self.advance();
            NON_GREEDY
        } else {
            0
        }
    }

    fn parse_term(&mut self, b: &mut Builder) -> PResult<()> {
        match self.peek() {
            None => Err(CompileError::Parse(ParseError::RepeatedEmpty)),
            Some(b'*') | Some(b'+') | Some(b'?') => {
                Err(CompileError::Parse(ParseError::RepeatedEmpty))
            }
            Some(b'(') => {
                self.advance();
                self.depth += 1;
                if self.depth > MAX_NESTING {
                    return Err(CompileError::Parse(ParseError::NestingOverflow));
                }
                let id = if self.options.disable_captures {
                    None
                } else {
                    let id = self.next_capture_id;
                    self.next_capture_id = self
                        .next_capture_id
                        .checked_add(1)
                        .ok_or(CompileError::Parse(ParseError::NestingOverflow))?;
                    Some(id)
                };
                self.parse_alt(b)?;
                self.depth -= 1;
                if self.peek() != Some(b')') {
                    return Err(CompileError::Parse(ParseError::UnclosedGroup));
                }
                self.advance();
                if let Some(id) = id {
                    b.capture(id)?;
                }
                Ok(())
            }
            Some(b')') => Err(CompileError::Parse(ParseError::UnexpectedRParen)),
            Some(b'[') => {
                self.advance();
                self.parse_class(b)
            }
            Some(b'.') => {
                self.advance();
                b.match_any()?;
                Ok(())
            }
            Some(b'^') => {
                self.advance();
                b.assert_at_start()?;
                Ok(())
            }
            Some(b'$') => {
                self.advance();
                b.assert_at_end()?;
                Ok(())
            }
            Some(b'\\') => {
                self.advance();
                let byte = self.read_escape()?;
                let flags = self.options.match_flags();
                b.match_byte(byte, flags)?;
                Ok(())
            }
            Some(c) => {
                self.advance();
                let flags = self.options.match_flags();
                b.match_byte(c, flags)?;
                Ok(())
            }
        }
    }

    fn parse_class_atom(&mut self) -> PResult<u8> {
        match self.advance() {
            None => Err(CompileError::Parse(ParseError::UnclosedClass)),
            Some(b'\\') => self.read_escape(),
            Some(c) => Ok(c),
        }
    }

    fn parse_class(&mut self, b: &mut Builder) -> PResult<()> {
        let negate = if self.peek() == Some(b'^') {
            self.advance();
            true
        } else {
            false
        };
        let flags = self.options.match_flags();
        let mut count = 0usize;
        loop {
            match self.peek() {
                None => return Err(CompileError::Parse(ParseError::UnclosedClass)),
                Some(b']') => break,
                Some(_) => {
                    let first = self.parse_class_atom()?;
                    let is_range = self.peek() == Some(b'-')
                        && self.peek_at(1).is_some()
                        && self.peek_at(1) != Some(b']');
                    if is_range {
                        self.advance();
                        let last = self.parse_class_atom()?;
                        if first > last {
                            return Err(CompileError::Parse(ParseError::RangeBackwards));
                        }
                        b.match_byte_range(first, last, flags)?;
                    } else {
                        b.match_byte(first, flags)?;
                    }
                    if count > 0 {
                        b.alt()?;
                    }
                    count += 1;
                }
            }
        }
        self.advance(); // consume ']'
        if count == 0 {
            return Err(CompileError::Parse(ParseError::EmptyCharClass));
        }
        if negate {
            b.complement_char()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile_str(pattern: &str) -> Result<usize, CompileError> {
        let mut builder = Builder::new();
        compile(&mut builder, pattern.as_bytes(), Options::default())
    }

    #[test]
    fn unclosed_group_is_reported() {
        assert_eq!(compile_str("(abc"), Err(CompileError::Parse(ParseError::UnclosedGroup)));
    }

    #[test]
    fn unexpected_rparen_is_reported() {
        assert_eq!(compile_str("abc)"), Err(CompileError::Parse(ParseError::UnexpectedRParen)));
    }

    #[test]
    fn repeated_empty_is_reported() {
        assert_eq!(compile_str("*"), Err(CompileError::Parse(ParseError::RepeatedEmpty)));
        assert_eq!(compile_str("(|*)"), Err(CompileError::Parse(ParseError::RepeatedEmpty)));
    }

    #[test]
    fn nesting_overflow_is_reported() {
        let deep = "(".repeat(MAX_NESTING + 1) + &")".repeat(MAX_NESTING + 1);
        assert_eq!(compile_str(&deep), Err(CompileError::Parse(ParseError::NestingOverflow)));
    }

    #[test]
    fn empty_char_class_is_reported() {
        assert_eq!(compile_str("[]"), Err(CompileError::Parse(ParseError::EmptyCharClass)));
    }

    #[test]
    fn unclosed_class_is_reported() {
        assert_eq!(compile_str("[abc"), Err(CompileError::Parse(ParseError::UnclosedClass)));
    }

    #[test]
    fn range_backwards_is_reported() {
        assert_eq!(compile_str("[z-a]"), Err(CompileError::Parse(ParseError::RangeBackwards)));
    }

    #[test]
    fn trailing_slash_is_reported() {
        assert_eq!(compile_str("abc\\"), Err(CompileError::Parse(ParseError::TrailingSlash)));
    }

    #[test]
    fn failed_parse_resets_builder_stack_to_entry_depth() {
        let mut builder = Builder::new();
        builder.match_empty().unwrap();
        let depth_before = builder.stack_len();
        let err = compile(&mut builder, b"(abc", Options::default());
        assert!(err.is_err());
        assert_eq!(builder.stack_len(), depth_before);
    }

    #[test]
    fn disabled_captures_assigns_no_group_ids() {
        let mut builder = Builder::new();
        let options = Options {
            disable_captures: true,
            ..Options::default()
        };
        let n = compile(&mut builder, b"(a)(b)", options).unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn group_zero_wraps_whole_pattern() {
        let n = compile_str("(a)(b)").unwrap();
        // group 0 (the whole pattern) plus two explicit groups.
        assert_eq!(n, 3);
    }
}

/// Parses `pattern` and drives `builder` to assemble its program,
/// returning the number of capture slots used (including the reserved
/// group 0). On success the builder's expression stack holds exactly one
/// fragment, ready for [`Builder::output`].
pub fn compile(builder: &mut Builder, pattern: &[u8], options: Options) -> PResult<usize> {
    let entry_depth = builder.stack_len();
    let mut parser = Parser {
        pattern,
        pos: 0,
        options,
        next_capture_id: if options.disable_captures { 0 } else { 1 },
        depth: 0,
    };

    let result = (|| -> PResult<()> {
        parser.parse_alt(builder)?;
        if parser.pos != pattern.len() {
            return Err(CompileError::Parse(ParseError::UnexpectedRParen));
        }
        if !options.disable_captures {
            builder.capture(0)?;
        }
        Ok(())
    })();

    match result {
        Ok(()) => Ok(if options.disable_captures {
            0
        } else {
            parser.next_capture_id as usize
        }),
        Err(e) => {
            builder.truncate_stack(entry_depth);
            Err(e)
        }
    }
}
