use super::*;

#[test]
fn test_codes_are_unique_and_well_formed() {
    let mut seen = std::collections::HashSet::new();
    for code in ErrorCode::ALL {
        let text = code.as_str();
        assert!(seen.insert(text), "duplicate code {text}");
        assert_eq!(text.len(), 5);
        assert!(text.starts_with('E'));
        assert!(!code.summary().is_empty());
    }
}

#[test]
fn test_phase_classification() {
    assert!(ErrorCode::E0005.is_lexer_error());
    assert!(!ErrorCode::E0005.is_parser_error());
    assert!(ErrorCode::E1004.is_parser_error());
    assert!(ErrorCode::E2001.is_runtime_error());
}

#[test]
fn test_display_matches_as_str() {
    assert_eq!(ErrorCode::E1002.to_string(), "E1002");
}

#[test]
fn test_from_str() {
    assert_eq!("E1006".parse::<ErrorCode>(), Ok(ErrorCode::E1006));
    assert_eq!(" e0001 ".parse::<ErrorCode>(), Ok(ErrorCode::E0001));
    assert_eq!(
        "E9999".parse::<ErrorCode>(),
        Err(UnknownErrorCode("E9999".to_string()))
    );
}

#[test]
fn test_unknown_code_message() {
    let err = "bogus".parse::<ErrorCode>().unwrap_err();
    assert_eq!(err.to_string(), "unknown error code `bogus`");
    let source: &dyn std::error::Error = &err;
    assert!(source.source().is_none());
}
