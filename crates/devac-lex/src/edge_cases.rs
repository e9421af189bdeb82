//! Edge case tests for devac-lex.

#[cfg(test)]
mod tests {
    use crate::{Keyword, NumberLiteral, Punct, Scanner, TokenKind};

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut scanner = Scanner::new(source);
        let mut out = Vec::new();
        loop {
            let tok = scanner.next_token();
            let eof = tok.is_eof();
            out.push(tok.kind);
            if eof {
                break;
            }
        }
        out
    }

    #[test]
    fn whitespace_only_source_is_empty() {
        assert_eq!(kinds("   \t\r\n  \n"), vec![TokenKind::Eof]);
    }

    #[test]
    fn comment_only_source_is_empty() {
        assert_eq!(kinds("// nothing here"), vec![TokenKind::Eof]);
    }

    #[test]
    fn mixed_ascii_and_devanagari_identifier() {
        let mut scanner = Scanner::new("x1_वर");
        let tok = scanner.next_token();
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.lexeme, "x1_वर");
    }

    #[test]
    fn identifier_cannot_start_with_digit() {
        // A leading digit is scanned as a number, so `1x` is NUMBER(1)
        // followed by an identifier `x`, not one identifier.
        assert_eq!(
            kinds("1x"),
            vec![
                TokenKind::Number(NumberLiteral::Int(1)),
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn empty_string_literal() {
        let mut scanner = Scanner::new("\"\"");
        let tok = scanner.next_token();
        assert_eq!(tok.kind, TokenKind::Str);
        assert_eq!(tok.lexeme, "");
    }

    #[test]
    fn string_spanning_multiple_lines_advances_line_counter() {
        let mut scanner = Scanner::new("\"a\nb\" x");
        let tok = scanner.next_token();
        assert_eq!(tok.kind, TokenKind::Str);
        assert_eq!(tok.lexeme, "a\nb");
        let next = scanner.next_token();
        assert_eq!(next.line, 2);
    }

    #[test]
    fn single_equals_vs_double() {
        assert_eq!(
            kinds("= =="),
            vec![
                TokenKind::Punct(Punct::Eq),
                TokenKind::Punct(Punct::EqEq),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn bang_alone_is_logical_not() {
        assert_eq!(
            kinds("!"),
            vec![TokenKind::Punct(Punct::Not), TokenKind::Eof]
        );
    }

    #[test]
    fn keyword_is_type_classification() {
        assert!(Keyword::Int.is_type());
        assert!(Keyword::Void.is_type());
        assert!(!Keyword::If.is_type());
        assert!(!Keyword::Return.is_type());
    }

    #[test]
    fn do_break_continue_lex_as_keywords_even_though_unreachable_by_grammar() {
        assert_eq!(
            kinds("करो रुको जारी"),
            vec![
                TokenKind::Keyword(Keyword::Do),
                TokenKind::Keyword(Keyword::Break),
                TokenKind::Keyword(Keyword::Continue),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn column_counts_bytes_not_characters() {
        // "अ" alone is 3 bytes; the identifier after it starts at column 4.
        let mut scanner = Scanner::new("अ x");
        let first = scanner.next_token();
        assert_eq!(first.column, 1);
        let second = scanner.next_token();
        assert_eq!(second.column, 5); // 3 bytes of 'अ' + 1 space + 1
    }
}
