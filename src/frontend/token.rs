//! Token definitions and the ordered matcher table for Gengar

use crate::utils::Position;

/// A token produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The matched source text, verbatim
    pub value: String,
    /// 1-based line of the first character
    pub line: u32,
    /// 0-based column of the first character
    pub col: u32,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: u32, col: u32) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            col,
        }
    }

    /// The end-of-input sentinel; its value is always empty.
    pub fn eof(line: u32, col: u32) -> Self {
        Self::new(TokenKind::Eof, "", line, col)
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    /// Check for a keyword token with the given spelling.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keywords && self.value == word
    }

    /// Check for a mark token with the given spelling.
    pub fn is_mark(&self, mark: &str) -> bool {
        self.kind == TokenKind::Marks && self.value == mark
    }
}

/// Token kinds (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// if, else, while, return, debugger, const, mut
    Keywords,
    /// `?` and the bare `:` (the dedicated single-character kinds below
    /// are matched first, so `.` `,` `;` never reach this kind)
    Marks,
    /// Identifier: one or more word characters
    Id,
    /// `"…"` with no embedded quote
    StringLiteral,
    /// One or more decimal digits
    NumberLiteral,
    /// true | false
    BoolLiteral,
    /// (
    LeftParenthesis,
    /// )
    RightParenthesis,
    /// The block opener `{`
    LeftBracket,
    /// The block closer `}`
    RightBracket,
    /// ;
    Semicolon,
    /// ,
    Comma,
    /// .
    Dot,
    /// Spaces and tabs (emitted, never silently dropped)
    WhiteSpace,
    /// One or more newlines, each optionally preceded by a carriage return
    Crlf,
    /// `:` plus optional spaces plus `string` | `number` | `boolean`
    TypeAssert,
    /// `=` `+=` `-=` `*=` `/=`
    AssignOperator,
    /// One or more `!`, or a single `~`
    UnaryOperator,
    /// `+` `-` `*` `/`
    BinaryOperator,
    /// End of input
    Eof,
}

// ==================== Matcher Table ====================

const KEYWORDS: &[&str] = &["if", "else", "while", "return", "debugger", "const", "mut"];
const TYPE_NAMES: &[&str] = &["string", "number", "boolean"];

/// One entry of the matcher table: either a literal single character or a
/// hand-rolled matcher returning the matched byte length.
pub(crate) enum Pattern {
    Char(char),
    Fn(fn(&str) -> Option<usize>),
}

impl Pattern {
    fn match_len(&self, input: &str) -> Option<usize> {
        match self {
            Pattern::Char(c) => input.starts_with(*c).then(|| c.len_utf8()),
            Pattern::Fn(f) => f(input),
        }
    }
}

/// Ordered matcher table. The lexer takes the first entry whose pattern
/// anchors at the start of the remaining input, so order is significant:
/// keywords and literals precede identifiers, compound assignment precedes
/// the bare binary operators, the type assertion precedes the bare colon,
/// and the dedicated single-character kinds precede the generic marks.
pub(crate) const MATCHERS: &[(TokenKind, Pattern)] = &[
    (TokenKind::Crlf, Pattern::Fn(match_crlf)),
    (TokenKind::WhiteSpace, Pattern::Fn(match_whitespace)),
    (TokenKind::Keywords, Pattern::Fn(match_keywords)),
    (TokenKind::BoolLiteral, Pattern::Fn(match_bool)),
    (TokenKind::NumberLiteral, Pattern::Fn(match_number)),
    (TokenKind::Id, Pattern::Fn(match_id)),
    (TokenKind::StringLiteral, Pattern::Fn(match_string)),
    (TokenKind::TypeAssert, Pattern::Fn(match_type_assert)),
    (TokenKind::AssignOperator, Pattern::Fn(match_assign)),
    (TokenKind::UnaryOperator, Pattern::Fn(match_unary)),
    (TokenKind::BinaryOperator, Pattern::Fn(match_binary)),
    (TokenKind::LeftParenthesis, Pattern::Char('(')),
    (TokenKind::RightParenthesis, Pattern::Char(')')),
    (TokenKind::LeftBracket, Pattern::Char('{')),
    (TokenKind::RightBracket, Pattern::Char('}')),
    (TokenKind::Semicolon, Pattern::Char(';')),
    (TokenKind::Comma, Pattern::Char(',')),
    (TokenKind::Dot, Pattern::Char('.')),
    (TokenKind::Marks, Pattern::Fn(match_marks)),
];

/// Find the first table entry matching the start of `input`, returning the
/// kind and the matched byte length.
pub(crate) fn first_match(input: &str) -> Option<(TokenKind, usize)> {
    MATCHERS
        .iter()
        .find_map(|(kind, pattern)| pattern.match_len(input).map(|len| (*kind, len)))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `word` anchored at the start of `input` and not followed by a word
/// character (so `iffy` stays an identifier).
fn word_bounded(input: &str, word: &str) -> bool {
    input.starts_with(word) && !input[word.len()..].starts_with(is_word_char)
}

fn match_keywords(input: &str) -> Option<usize> {
    KEYWORDS
        .iter()
        .find(|word| word_bounded(input, word))
        .map(|word| word.len())
}

fn match_bool(input: &str) -> Option<usize> {
    ["true", "false"]
        .iter()
        .find(|word| word_bounded(input, word))
        .map(|word| word.len())
}

fn match_number(input: &str) -> Option<usize> {
    let len = input.chars().take_while(char::is_ascii_digit).count();
    (len > 0).then_some(len)
}

fn match_id(input: &str) -> Option<usize> {
    let len = input.chars().take_while(|&c| is_word_char(c)).count();
    (len > 0).then_some(len)
}

fn match_string(input: &str) -> Option<usize> {
    let rest = input.strip_prefix('"')?;
    let end = rest.find('"')?;
    Some(end + 2)
}

fn match_whitespace(input: &str) -> Option<usize> {
    let len = input.chars().take_while(|&c| c == ' ' || c == '\t').count();
    (len > 0).then_some(len)
}

fn match_crlf(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut len = 0;
    loop {
        let start = len;
        if bytes.get(len) == Some(&b'\r') {
            len += 1;
        }
        if bytes.get(len) == Some(&b'\n') {
            len += 1;
        } else {
            len = start;
            break;
        }
    }
    (len > 0).then_some(len)
}

fn match_type_assert(input: &str) -> Option<usize> {
    let rest = input.strip_prefix(':')?;
    let spaces = rest.chars().take_while(|&c| c == ' ' || c == '\t').count();
    let name = TYPE_NAMES
        .iter()
        .find(|name| word_bounded(&rest[spaces..], name))?;
    Some(1 + spaces + name.len())
}

fn match_assign(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    match bytes.first()? {
        b'=' => Some(1),
        b'+' | b'-' | b'*' | b'/' if bytes.get(1) == Some(&b'=') => Some(2),
        _ => None,
    }
}

fn match_unary(input: &str) -> Option<usize> {
    if input.starts_with('~') {
        return Some(1);
    }
    let len = input.chars().take_while(|&c| c == '!').count();
    (len > 0).then_some(len)
}

fn match_binary(input: &str) -> Option<usize> {
    matches!(input.as_bytes().first(), Some(b'+' | b'-' | b'*' | b'/')).then_some(1)
}

fn match_marks(input: &str) -> Option<usize> {
    matches!(input.as_bytes().first(), Some(b'?' | b':' | b'.' | b',' | b';')).then_some(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_before_identifiers() {
        assert_eq!(first_match("if (x)"), Some((TokenKind::Keywords, 2)));
        assert_eq!(first_match("iffy"), Some((TokenKind::Id, 4)));
        assert_eq!(first_match("mut i"), Some((TokenKind::Keywords, 3)));
        assert_eq!(first_match("mutate"), Some((TokenKind::Id, 6)));
    }

    #[test]
    fn test_bool_before_identifiers() {
        assert_eq!(first_match("true)"), Some((TokenKind::BoolLiteral, 4)));
        assert_eq!(first_match("falsey"), Some((TokenKind::Id, 6)));
    }

    #[test]
    fn test_numbers_split_from_trailing_words() {
        assert_eq!(first_match("123abc"), Some((TokenKind::NumberLiteral, 3)));
        assert_eq!(first_match("abc123"), Some((TokenKind::Id, 6)));
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(first_match("\"hi\" x"), Some((TokenKind::StringLiteral, 4)));
        assert_eq!(first_match("\"\""), Some((TokenKind::StringLiteral, 2)));
        assert_eq!(first_match("\"unterminated"), None);
    }

    #[test]
    fn test_type_assert_before_marks() {
        assert_eq!(first_match(": string ="), Some((TokenKind::TypeAssert, 8)));
        assert_eq!(first_match(":number"), Some((TokenKind::TypeAssert, 7)));
        assert_eq!(first_match(": stringify"), Some((TokenKind::Marks, 1)));
        assert_eq!(first_match(":booleans"), Some((TokenKind::Marks, 1)));
    }

    #[test]
    fn test_assign_before_binary() {
        assert_eq!(first_match("+= 1"), Some((TokenKind::AssignOperator, 2)));
        assert_eq!(first_match("/= 2"), Some((TokenKind::AssignOperator, 2)));
        assert_eq!(first_match("= 1"), Some((TokenKind::AssignOperator, 1)));
        assert_eq!(first_match("+ 1"), Some((TokenKind::BinaryOperator, 1)));
    }

    #[test]
    fn test_unary_operators() {
        assert_eq!(first_match("!!x"), Some((TokenKind::UnaryOperator, 2)));
        assert_eq!(first_match("~x"), Some((TokenKind::UnaryOperator, 1)));
    }

    #[test]
    fn test_single_characters_before_marks() {
        assert_eq!(first_match(".x"), Some((TokenKind::Dot, 1)));
        assert_eq!(first_match(";"), Some((TokenKind::Semicolon, 1)));
        assert_eq!(first_match(","), Some((TokenKind::Comma, 1)));
        assert_eq!(first_match("?"), Some((TokenKind::Marks, 1)));
        assert_eq!(first_match("{"), Some((TokenKind::LeftBracket, 1)));
        assert_eq!(first_match("}"), Some((TokenKind::RightBracket, 1)));
    }

    #[test]
    fn test_newlines_and_whitespace() {
        assert_eq!(first_match("\r\n\r\nx"), Some((TokenKind::Crlf, 4)));
        assert_eq!(first_match("\n"), Some((TokenKind::Crlf, 1)));
        assert_eq!(first_match("  \tx"), Some((TokenKind::WhiteSpace, 3)));
        assert_eq!(first_match("\r"), None);
    }

    #[test]
    fn test_unmatched_input() {
        assert_eq!(first_match("@"), None);
        assert_eq!(first_match("#x"), None);
    }
}
