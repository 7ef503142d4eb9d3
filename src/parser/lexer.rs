//! Lexer for block template source text using logos
//!
//! Template source is opaque text interrupted by HTML comment markers.
//! The lexer only separates the two; deciding whether a comment carries
//! a directive happens later, so foreign comments can flow back into
//! the literal text untouched.

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// A comment marker; the payload is the trimmed inner text
    #[regex(r"<!--([^-]|-[^-]|--[^>])*-->", |lex| {
        let s = lex.slice();
        s[4..s.len() - 3].trim().to_string()
    })]
    Comment(String),

    /// A literal run, or a lone '<' that does not begin a marker
    #[regex(r"[^<]+", |lex| lex.slice().to_string())]
    #[token("<", |lex| lex.slice().to_string())]
    Text(String),
}

/// Lex input string into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_inner_text_is_trimmed() {
        let tokens: Vec<_> = lex("<!-- START BLOCK: header -->").map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![Token::Comment("START BLOCK: header".to_string())]);
    }

    #[test]
    fn test_text_runs_between_comments() {
        let tokens: Vec<_> = lex("before<!-- x -->after").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Text("before".to_string()),
                Token::Comment("x".to_string()),
                Token::Text("after".to_string()),
            ]
        );
    }

    #[test]
    fn test_lone_angle_bracket_is_text() {
        let tokens: Vec<_> = lex("a < b").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Text("a ".to_string()),
                Token::Text("<".to_string()),
                Token::Text(" b".to_string()),
            ]
        );
    }

    #[test]
    fn test_unterminated_marker_falls_back_to_text() {
        let tokens: Vec<_> = lex("x <!-- oops").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Text("x ".to_string()),
                Token::Text("<".to_string()),
                Token::Text("!-- oops".to_string()),
            ]
        );
    }

    #[test]
    fn test_dashes_inside_comment() {
        let tokens: Vec<_> = lex("<!-- START BLOCK: my-name -->").map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![Token::Comment("START BLOCK: my-name".to_string())]);
    }

    #[test]
    fn test_whitespace_is_preserved_in_text() {
        let tokens: Vec<_> = lex("  \n\t").map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![Token::Text("  \n\t".to_string())]);
    }

    #[test]
    fn test_spans_cover_the_input() {
        let input = "ab<!-- c -->d";
        let spans: Vec<_> = lex(input).map(|(_, s)| s).collect();
        assert_eq!(spans, vec![0..2, 2..12, 12..13]);
    }
}
