//! Tests for error reporting.

use decaf_core::{Category, Diagnostic, Error, ErrorList};

#[test]
fn test_analysis_error_counts_diagnostics() {
    let mut errors = ErrorList::new();
    errors.report(Diagnostic::new(
        Category::Lookup,
        Some(3),
        "Symbol 'x' undefined on line 3",
    ));
    errors.report(Diagnostic::new(
        Category::Fatal,
        None,
        "Program does not contain a main function",
    ));

    let error = Error::analysis(errors.into_diagnostics());
    assert_eq!(error.to_string(), "Semantic analysis failed with 2 error(s)");

    match error {
        Error::Analysis { count, diagnostics } => {
            assert_eq!(count, 2);
            assert_eq!(diagnostics[0].line(), Some(3));
            assert_eq!(diagnostics[1].line(), None);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_analysis_error_related() {
    use miette::Diagnostic as _;

    let error = Error::analysis(vec![Diagnostic::new(
        Category::Structural,
        Some(1),
        "Duplicate symbol 'a' on line 1",
    )]);

    let related: Vec<String> = error
        .related()
        .map(|iter| iter.map(|d| d.to_string()).collect())
        .unwrap_or_default();
    assert_eq!(related, vec!["Duplicate symbol 'a' on line 1"]);
}

#[test]
fn test_config_error_display() {
    let error = Error::Config("bad entry point".to_string());
    assert_eq!(error.to_string(), "Configuration error: bad entry point");
}

#[test]
fn test_error_list_renders_in_detection_order() {
    let mut errors = ErrorList::new();
    errors.report(Diagnostic::new(
        Category::Structural,
        Some(1),
        "Void variable 'v' on line 1",
    ));
    errors.report(Diagnostic::new(
        Category::Lookup,
        Some(3),
        "Symbol 'x' undefined on line 3",
    ));
    errors.report(Diagnostic::new(
        Category::Lookup,
        Some(3),
        "Symbol 'x' undefined on line 3",
    ));
    errors.report(Diagnostic::new(
        Category::Fatal,
        None,
        "Program does not contain a main function",
    ));

    insta::assert_snapshot!(errors.to_string().trim_end(), @r"
    Void variable 'v' on line 1
    Symbol 'x' undefined on line 3
    Symbol 'x' undefined on line 3
    Program does not contain a main function
    ");
}
