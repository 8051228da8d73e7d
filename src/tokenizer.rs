/// Comment marker: a token starting with `;` ends the line.
pub const COMMENT_MARKER: char = ';';

/// Split a source line into whitespace-delimited tokens, dropping the
/// first comment token and everything after it.
///
/// The caller classifies the result: zero tokens is a blank line, one
/// token a label declaration, two or more an instruction (mnemonic plus
/// operands).
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace()
        .take_while(|tok| !tok.starts_with(COMMENT_MARKER))
        .collect()
}
