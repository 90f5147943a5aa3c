//! Program disassembly (part of C7): a human-readable printer for a
//! compiled [`Program`], one line per instruction.
//!
//! The exact text forms (`match any`, `match byte 'x'`, `jump +N (-> T)`,
//! the indented `fork`/`match ranges:` continuation lines, and the
//! C-escape quoting table) are carried over verbatim from this engine's
//! C heritage (`nfai_print_opcode`, `nfai_quoted_char`).

use std::fmt::{self, Write};

use crate::bytecode::{hi_byte, jump_offset, lo_byte, Op, Program};

/// Renders `c` the way `nfai_quoted_char` does: printable ASCII as
/// `'c'`, named C escapes for the common control characters, and
/// `'\xHH'` for everything else.
fn quoted_char(c: u8) -> String {
    if (32..127).contains(&c) {
        return format!("'{}'", c as char);
    }
    match c {
        0x00 => "'\\0'".to_string(),
        0x07 => "'\\a'".to_string(),
        0x08 => "'\\b'".to_string(),
        0x09 => "'\\t'".to_string(),
        0x0A => "'\\n'".to_string(),
        0x0B => "'\\v'".to_string(),
        0x0C => "'\\f'".to_string(),
        0x0D => "'\\r'".to_string(),
        0x1B => "'\\e'".to_string(),
        other => format!("'\\x{other:02X}'"),
    }
}

/// Writes one disassembled instruction line (or block, for `fork` and
/// multi-range classes) for the instruction at `pc`, returning the pc of
/// the next instruction.
fn write_instr(out: &mut String, program: &Program, pc: usize) -> fmt::Result {
    write!(out, "  {pc:4}: ")?;
    match program.decode(pc) {
        Op::Nop => writeln!(out, "nop")?,
        Op::MatchAny => writeln!(out, "match any")?,
        Op::MatchByte(b) => writeln!(out, "match byte {}", quoted_char(b))?,
        Op::MatchByteCi(b) => writeln!(out, "match byte {} (case insensitive)", quoted_char(b))?,
        Op::MatchClass(ranges) => {
            if ranges.len() == 1 {
                let (first, last) = (hi_byte(ranges[0]), lo_byte(ranges[0]));
                writeln!(
                    out,
                    "match range {}--{} ({}--{})",
                    quoted_char(first),
                    quoted_char(last),
                    first,
                    last
                )?;
            } else {
                writeln!(out, "match ranges:")?;
                for &r in ranges {
                    let (first, last) = (hi_byte(r), lo_byte(r));
                    writeln!(
                        out,
                        "            {}--{} ({}--{})",
                        quoted_char(first),
                        quoted_char(last),
                        first,
                        last
                    )?;
                }
            }
        }
        Op::AssertContext(bit) => writeln!(out, "assert context (flag {})", 1u32 << bit)?,
        Op::SaveStart(id) => writeln!(out, "save start @{id}")?,
        Op::SaveEnd(id) => writeln!(out, "save end @{id}")?,
        Op::Jump(offsets) => {
            let base = pc + 1 + offsets.len();
            if offsets.len() == 1 {
                let off = jump_offset(offsets[0]);
                writeln!(out, "jump {:+} (-> {})", off, base as i64 + off as i64)?;
            } else {
                writeln!(out, "fork")?;
                for &word in offsets {
                    let off = jump_offset(word);
                    writeln!(out, "           {:+} (-> {})", off, base as i64 + off as i64)?;
                }
            }
        }
        Op::Accept => writeln!(out, "accept")?,
    }
    Ok(())
}

/// Disassembles `program` into a multi-line string, one instruction per
/// line (plus indented continuation lines for `fork` and multi-range
/// classes).
pub fn disassemble(program: &Program) -> String {
    let mut out = String::new();
    let mut pc = 0;
    while pc < program.nops() {
        write_instr(&mut out, program, pc).expect("writing to a String cannot fail");
        pc += program.instr_len(pc);
    }
    out
}
