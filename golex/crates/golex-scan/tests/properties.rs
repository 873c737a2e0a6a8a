//! Property-based tests for golex-scan

use golex_scan::{is_keyword, scan, Scanner, Token, TokenKind, TokenValue};
use proptest::prelude::*;

/// Source characters covered by `token`.
fn lexeme(source: &str, token: &Token) -> String {
    source
        .chars()
        .skip(token.pos.offset)
        .take(token.len())
        .collect()
}

fn simple_token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,12}",
        "[1-9][0-9]{0,8}",
        "0x[0-9a-fA-F]{1,8}",
        "[0-9]{1,4}\\.[0-9]{1,4}",
        "\"[a-z0-9 ]{0,10}[a-z]\"",
        Just("<<=".to_string()),
        Just("&^".to_string()),
        Just("++".to_string()),
        Just("(".to_string()),
        Just(";".to_string()),
        Just("/* c */".to_string()),
    ]
}

proptest! {
    #[test]
    fn whitespace_only_yields_nothing(input in "[ \t\r\n]{0,64}") {
        prop_assert!(scan(&input).unwrap().is_empty());
    }

    #[test]
    fn arbitrary_input_never_panics(input in any::<String>()) {
        let batch = scan(&input);
        let streamed: Vec<_> = Scanner::new(&input).collect();
        match batch {
            Ok(tokens) => {
                prop_assert_eq!(tokens.len(), streamed.len());
                prop_assert!(streamed.iter().all(|r| r.is_ok()));
            },
            Err(err) => {
                prop_assert_eq!(streamed.last(), Some(&Err(err)));
            },
        }
    }

    #[test]
    fn identifiers_scan_as_one_token(input in "[a-zA-Z_][a-zA-Z0-9_]{0,40}") {
        let tokens = scan(&input).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        let expected = if is_keyword(&input) { TokenKind::Keyword } else { TokenKind::Ident };
        prop_assert_eq!(tokens[0].kind(), expected);
        prop_assert_eq!(tokens[0].to_string(), input);
    }

    #[test]
    fn decimal_integers_parse(n in 0u64..=u64::MAX) {
        let tokens = scan(&n.to_string()).unwrap();
        prop_assert_eq!(&tokens[0].value, &TokenValue::Int(n));
    }

    #[test]
    fn hex_integers_parse(n in any::<u64>()) {
        let tokens = scan(&format!("{:#x}", n)).unwrap();
        prop_assert_eq!(&tokens[0].value, &TokenValue::Int(n));
    }

    #[test]
    fn string_literals_keep_delimiters(inner in "[a-zA-Z0-9_.,;:!?()]{0,30}") {
        let source = format!("\"{}\"", inner);
        let tokens = scan(&source).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].value, &TokenValue::String(source.clone()));
    }

    #[test]
    fn token_offsets_strictly_increase(parts in prop::collection::vec(simple_token(), 1..20)) {
        let source = parts.join(" ");
        let tokens = scan(&source).unwrap();
        prop_assert_eq!(tokens.len(), parts.len());
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].end.offset <= pair[1].pos.offset);
            prop_assert!(pair[0].pos.offset < pair[1].pos.offset);
        }
        for (token, part) in tokens.iter().zip(&parts) {
            prop_assert_eq!(&lexeme(&source, token), part);
        }
    }

    #[test]
    fn lines_count_newlines(parts in prop::collection::vec(simple_token(), 1..10)) {
        let source = parts.join("\n\t");
        for token in scan(&source).unwrap() {
            let before = source.chars().take(token.pos.offset).filter(|&c| c == '\n').count();
            prop_assert_eq!(token.pos.line as usize, before + 1);
        }
    }
}
