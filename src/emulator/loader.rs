//! Program loader for `.ls8` source files.
//!
//! The load format is line-based: each line may contain an 8-character
//! binary literal (e.g. `10000010`), optionally followed by a `#` comment.
//! Each literal occupies the next sequential memory address starting at 0.
//! Lines that fail to parse as binary (blank lines, comment-only lines,
//! malformed literals, values wider than a byte) are skipped without
//! advancing the address counter.

use crate::emulator::errors::CpuError;
use crate::emulator::memory::RAM_SIZE;
use std::fs;
use std::path::Path;

const COMMENT_CHAR: char = '#';

/// Parses `.ls8` source text into program bytes.
///
/// Returns [`CpuError::ProgramTooLarge`] if the program does not fit in
/// memory.
pub fn parse_source(source: &str) -> Result<Vec<u8>, CpuError> {
    let mut program = Vec::new();

    for line in source.lines() {
        let code = match line.split_once(COMMENT_CHAR) {
            Some((before, _)) => before,
            None => line,
        };
        // Anything that is not a byte-sized binary literal is skipped.
        let Ok(value) = u8::from_str_radix(code.trim(), 2) else {
            continue;
        };
        program.push(value);
    }

    if program.len() > RAM_SIZE {
        return Err(CpuError::ProgramTooLarge {
            size: program.len(),
            limit: RAM_SIZE,
        });
    }

    Ok(program)
}

/// Reads and parses a `.ls8` program file.
pub fn load_file(path: &Path) -> Result<Vec<u8>, CpuError> {
    let source = fs::read_to_string(path).map_err(|e| CpuError::Io(e.to_string()))?;
    parse_source(&source)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRINT8: &str = "\
# print8.ls8: print the number 8

10000010 # LDI R0,8
00000000
00001000
01000111 # PRN R0
00000000
00000001 # HLT
";

    #[test]
    fn parses_binary_literals_in_order() {
        let program = parse_source(PRINT8).unwrap();
        assert_eq!(program, vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
    }

    #[test]
    fn skips_blank_and_comment_only_lines() {
        let program = parse_source("\n# comment\n\n00000001\n").unwrap();
        assert_eq!(program, vec![0x01]);
    }

    #[test]
    fn skips_unparsable_lines_without_advancing() {
        let program = parse_source("garbage\n00000001\nLDI R0\n00000010\n").unwrap();
        assert_eq!(program, vec![0x01, 0x02]);
    }

    #[test]
    fn skips_literals_wider_than_a_byte() {
        let program = parse_source("111111111\n00000001\n").unwrap();
        assert_eq!(program, vec![0x01]);
    }

    #[test]
    fn trailing_comment_is_ignored() {
        let program = parse_source("10100010 # MUL R0,R1\n").unwrap();
        assert_eq!(program, vec![0xA2]);
    }

    #[test]
    fn empty_source_is_an_empty_program() {
        assert!(parse_source("").unwrap().is_empty());
    }

    #[test]
    fn oversized_program_fails() {
        let source = "00000000\n".repeat(RAM_SIZE + 1);
        assert!(matches!(
            parse_source(&source),
            Err(CpuError::ProgramTooLarge { size: 257, limit: 256 })
        ));
    }
}
