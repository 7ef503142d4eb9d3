//! Classification of comment markers into block directives
//!
//! A comment either carries one of the six directive forms or it is
//! foreign and flows back into the literal text. The inner text is
//! decomposed by the expression splitter first, so quoted names may
//! contain the header's own delimiters.

use crate::expression::{split_expression, ExprToken, DEFAULT_ESCAPE};
use crate::tree::BlockType;

/// Characters that separate directive header tokens
const HEADER_DELIMITERS: &[char] = &[' ', '\t', ':'];

/// A recognized directive, names already unquoted
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Directive {
    /// `START|TEMPLATE|WRAPPER BLOCK: <name>`
    Open { kind: BlockType, name: String },
    /// `END BLOCK: <name>`; the name is diagnostic only
    Close { name: String },
    /// `USE <source> BLOCK: <alias>`
    Use { source: String, alias: String },
    /// `RECURSION BLOCK: <name>`
    Recursion { name: String },
}

/// Classify a comment's inner text. `None` means the comment is not a
/// directive; malformed near-directives (wrong arity, a group where a
/// name belongs) fall back to `None` as well.
pub(crate) fn classify(inner: &str) -> Option<Directive> {
    let tokens = split_expression(inner, HEADER_DELIMITERS, Some(DEFAULT_ESCAPE));
    let atom = |index: usize| tokens.get(index).and_then(ExprToken::as_atom);

    match atom(0)? {
        keyword @ ("START" | "TEMPLATE" | "WRAPPER") => {
            if tokens.len() != 3 || atom(1)? != "BLOCK" {
                return None;
            }
            let kind = match keyword {
                "START" => BlockType::Start,
                "TEMPLATE" => BlockType::Template,
                _ => BlockType::Wrapper,
            };
            Some(Directive::Open {
                kind,
                name: unquote(atom(2)?),
            })
        }
        "END" => {
            if tokens.len() != 3 || atom(1)? != "BLOCK" {
                return None;
            }
            Some(Directive::Close {
                name: unquote(atom(2)?),
            })
        }
        "USE" => {
            if tokens.len() != 4 || atom(2)? != "BLOCK" {
                return None;
            }
            Some(Directive::Use {
                source: unquote(atom(1)?),
                alias: unquote(atom(3)?),
            })
        }
        "RECURSION" => {
            if tokens.len() != 3 || atom(1)? != "BLOCK" {
                return None;
            }
            Some(Directive::Recursion {
                name: unquote(atom(2)?),
            })
        }
        _ => None,
    }
}

/// Strip one layer of matching quotes from an extracted name
fn unquote(name: &str) -> String {
    let stripped = name
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| name.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')));
    stripped.unwrap_or(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_directives() {
        assert_eq!(
            classify("START BLOCK: header"),
            Some(Directive::Open {
                kind: BlockType::Start,
                name: "header".to_string()
            })
        );
        assert_eq!(
            classify("TEMPLATE BLOCK: row"),
            Some(Directive::Open {
                kind: BlockType::Template,
                name: "row".to_string()
            })
        );
        assert_eq!(
            classify("WRAPPER BLOCK: page"),
            Some(Directive::Open {
                kind: BlockType::Wrapper,
                name: "page".to_string()
            })
        );
    }

    #[test]
    fn test_close_directive() {
        assert_eq!(
            classify("END BLOCK: header"),
            Some(Directive::Close {
                name: "header".to_string()
            })
        );
    }

    #[test]
    fn test_use_directive() {
        assert_eq!(
            classify("USE row BLOCK: striped"),
            Some(Directive::Use {
                source: "row".to_string(),
                alias: "striped".to_string()
            })
        );
    }

    #[test]
    fn test_recursion_directive() {
        assert_eq!(
            classify("RECURSION BLOCK: node"),
            Some(Directive::Recursion {
                name: "node".to_string()
            })
        );
    }

    #[test]
    fn test_quoted_names_are_unquoted() {
        assert_eq!(
            classify(r#"START BLOCK: "a:b""#),
            Some(Directive::Open {
                kind: BlockType::Start,
                name: "a:b".to_string()
            })
        );
    }

    #[test]
    fn test_foreign_comments_are_not_directives() {
        assert_eq!(classify("just a note"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("start block: lowercase"), None);
    }

    #[test]
    fn test_malformed_directives_fall_back() {
        assert_eq!(classify("START BLOCK:"), None);
        assert_eq!(classify("START SECTION: x"), None);
        assert_eq!(classify("USE BLOCK: x"), None);
        assert_eq!(classify("START BLOCK: a b"), None);
    }
}
