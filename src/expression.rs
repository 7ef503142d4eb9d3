//! Delimiter-aware splitting of directive argument expressions
//!
//! Directive headers may carry names containing the very characters the
//! parser splits on, as long as they are quoted, bracketed or escaped.
//! [`split_expression`] decomposes such text without a grammar: quoted
//! runs and bracket groups stay inside the current atom, parentheses
//! directly after a word are kept verbatim as call syntax, and
//! standalone parentheses become a nested token sequence.

/// Default escape character honored by [`split_expression`]
pub const DEFAULT_ESCAPE: char = '\\';

/// One token produced by [`split_expression`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprToken {
    /// A run of characters between delimiters
    Atom(String),
    /// A standalone parenthesized sub-expression, split recursively
    Group(Vec<ExprToken>),
}

impl ExprToken {
    /// The atom text, or `None` for groups
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            ExprToken::Atom(s) => Some(s.as_str()),
            ExprToken::Group(_) => None,
        }
    }
}

/// Split `text` on the given delimiter characters.
///
/// Quoted runs (`'` or `"`) and bracket groups (`[...]`, `{...}`) are
/// copied verbatim into the current atom; the escape character takes the
/// next character literally. A `(` directly following a word is call
/// syntax and extends that word's atom; a `(` at the start of a token
/// opens a nested [`ExprToken::Group`]. Empty atoms are dropped. An
/// unterminated quote or bracket runs to the end of the input.
pub fn split_expression(text: &str, delimiters: &[char], escape: Option<char>) -> Vec<ExprToken> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut atom = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if Some(c) == escape {
            if let Some(&next) = chars.get(i + 1) {
                atom.push(next);
                i += 2;
            } else {
                atom.push(c);
                i += 1;
            }
        } else if c == '\'' || c == '"' {
            i = copy_quoted(&chars, i, escape, &mut atom);
        } else if c == '[' || c == '{' {
            let close = if c == '[' { ']' } else { '}' };
            i = copy_balanced(&chars, i, c, close, escape, &mut atom);
        } else if c == '(' {
            if atom.is_empty() {
                let (inner, next) = take_group(&chars, i, escape);
                tokens.push(ExprToken::Group(split_expression(&inner, delimiters, escape)));
                i = next;
            } else {
                i = copy_balanced(&chars, i, '(', ')', escape, &mut atom);
            }
        } else if delimiters.contains(&c) {
            flush(&mut atom, &mut tokens);
            i += 1;
        } else {
            atom.push(c);
            i += 1;
        }
    }
    flush(&mut atom, &mut tokens);
    tokens
}

fn flush(atom: &mut String, tokens: &mut Vec<ExprToken>) {
    if !atom.is_empty() {
        tokens.push(ExprToken::Atom(std::mem::take(atom)));
    }
}

/// Copy a quoted run, quotes included, up to the matching close quote
fn copy_quoted(chars: &[char], start: usize, escape: Option<char>, out: &mut String) -> usize {
    let quote = chars[start];
    out.push(quote);
    let mut i = start + 1;
    while i < chars.len() {
        let c = chars[i];
        if Some(c) == escape {
            if let Some(&next) = chars.get(i + 1) {
                out.push(c);
                out.push(next);
                i += 2;
                continue;
            }
        }
        out.push(c);
        i += 1;
        if c == quote {
            break;
        }
    }
    i
}

/// Copy a bracketed group verbatim, handling nesting, quotes and escapes
fn copy_balanced(
    chars: &[char],
    start: usize,
    open: char,
    close: char,
    escape: Option<char>,
    out: &mut String,
) -> usize {
    let mut depth = 0usize;
    let mut i = start;
    while i < chars.len() {
        let c = chars[i];
        if Some(c) == escape {
            out.push(c);
            if let Some(&next) = chars.get(i + 1) {
                out.push(next);
                i += 2;
            } else {
                i += 1;
            }
            continue;
        }
        if c == '\'' || c == '"' {
            i = copy_quoted(chars, i, escape, out);
            continue;
        }
        out.push(c);
        i += 1;
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                break;
            }
        }
    }
    i
}

/// Collect the inside of a standalone parenthesized group
fn take_group(chars: &[char], start: usize, escape: Option<char>) -> (String, usize) {
    let mut buf = String::new();
    let end = copy_balanced(chars, start, '(', ')', escape, &mut buf);
    let inner = buf.strip_prefix('(').unwrap_or(&buf);
    let inner = inner.strip_suffix(')').unwrap_or(inner);
    (inner.to_string(), end)
}
