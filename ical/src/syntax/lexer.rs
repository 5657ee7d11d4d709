// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Lexer for a single unfolded content line as defined in RFC 5545.

use std::fmt::{self, Display};
use std::ops::Range;

use logos::Logos;

/// Tokenize one unfolded content line, keeping the byte range of each token.
///
/// Every character of a line belongs to some token, so the lexer never
/// produces errors for text input; a failure is mapped to `None`.
pub fn tokenize(line: &str) -> impl Iterator<Item = (Option<Token<'_>>, Range<usize>)> {
    Token::lexer(line)
        .spanned()
        .map(|(tok, span)| (tok.ok(), span))
}

/// Token emitted by the content-line lexer
#[derive(PartialEq, Eq, Clone, Copy, Logos)]
pub enum Token<'a> {
    /// Double Quote ("), decimal codepoint 22
    #[token("\"")]
    DQuote,

    /// Comma (,), decimal codepoint 44
    #[token(",")]
    Comma,

    /// Colon (:), decimal codepoint 58
    #[token(":")]
    Colon,

    /// Semicolon (;), decimal codepoint 59
    #[token(";")]
    Semicolon,

    /// Equal sign (=), decimal codepoint 61
    #[token("=")]
    Equal,

    /// The two characters `\n` or `\N`
    #[regex(r"\\[nN]")]
    NewlineEscape,

    /// A backslash not followed by `n` or `N`
    #[token("\\")]
    Backslash,

    /// Any run of characters that are not delimiters
    #[regex(r#"[^",:;=\\]+"#)]
    Text(&'a str),
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DQuote => write!(f, "DQuote"),
            Self::Comma => write!(f, "Comma"),
            Self::Colon => write!(f, "Colon"),
            Self::Semicolon => write!(f, "Semicolon"),
            Self::Equal => write!(f, "Equal"),
            Self::NewlineEscape => write!(f, "NewlineEscape"),
            Self::Backslash => write!(f, "Backslash"),
            Self::Text(s) => write!(f, "Text({s})"),
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Token::*;
    use super::*;

    fn assert_tokenize(src: &str, expected: &[Token]) {
        let tokens: Vec<_> = Token::lexer(src).map(|t| t.unwrap()).collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn tokenizes_delimiters() {
        assert_tokenize(
            r#";:=,"\"#,
            &[Semicolon, Colon, Equal, Comma, DQuote, Backslash],
        );
    }

    #[test]
    fn tokenizes_newline_escapes() {
        assert_tokenize(
            r"a\nb\Nc\,d",
            &[
                Text("a"),
                NewlineEscape,
                Text("b"),
                NewlineEscape,
                Text("c"),
                Backslash,
                Comma,
                Text("d"),
            ],
        );
    }

    #[test]
    fn tokenizes_content_line() {
        assert_tokenize(
            "DTSTART;TZID=America/New_York:20250101T090000",
            &[
                Text("DTSTART"),
                Semicolon,
                Text("TZID"),
                Equal,
                Text("America/New_York"),
                Colon,
                Text("20250101T090000"),
            ],
        );
    }

    #[test]
    fn keeps_whitespace_and_unicode_in_text() {
        assert_tokenize(
            "SUMMARY:Meeting 会议 🎉",
            &[Text("SUMMARY"), Colon, Text("Meeting 会议 🎉")],
        );
    }

    #[test]
    fn reports_token_spans() {
        let tokens: Vec<_> = tokenize("A;B=C").collect();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0], (Some(Text("A")), 0..1));
        assert_eq!(tokens[1], (Some(Semicolon), 1..2));
        assert_eq!(tokens[4], (Some(Text("C")), 4..5));
    }
}
