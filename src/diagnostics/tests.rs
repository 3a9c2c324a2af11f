use super::*;

fn span_at(start: usize, end: usize, line: usize, col: usize, end_col: usize) -> Span {
    Span {
        file: PathBuf::from("Shapes.kt"),
        start,
        end,
        start_line: line,
        start_col: col,
        end_line: line,
        end_col,
    }
}

fn smell(rule: &str) -> DiagnosticBuilder {
    Diagnostic::new(rule, Severity::CodeSmell)
}

#[test]
fn test_diagnostic_json() {
    let diag = smell(design::OPEN_CLOSED_PRINCIPLE)
        .message("Switching on enum values")
        .span(span_at(10, 20, 1, 10, 20))
        .build();

    let json = diag.to_json();
    assert!(json.contains("OpenClosedPrinciple"));
    assert!(json.contains("\"severity\":\"code-smell\""));
    assert!(json.contains("Switching on enum values"));
}

#[test]
fn test_diagnostic_json_round_trips() {
    let diag = Diagnostic::new(complexity::TOO_MANY_FUNCTIONS, Severity::Maintainability)
        .message("The file A.kt has 2 function declarations.")
        .span(span_at(0, 5, 1, 1, 6))
        .debt(Debt::FIVE_MINS)
        .build();

    let parsed: Diagnostic = serde_json::from_str(&diag.to_json()).unwrap();
    pretty_assertions::assert_eq!(parsed, diag);
}

#[test]
fn test_default_debt_is_twenty_minutes() {
    let diag = smell("Rule").message("m").build();
    assert_eq!(diag.debt, Debt::TWENTY_MINS);
    assert_eq!(diag.debt.to_string(), "20min");
}

#[test]
fn test_debt_display() {
    assert_eq!(Debt::new(1, 2, 20).to_string(), "1d 2h 20min");
    assert_eq!(Debt::new(0, 3, 0).to_string(), "3h");
    assert_eq!(Debt::new(0, 0, 0).to_string(), "0min");
    assert_eq!(Debt::new(1, 1, 1).total_mins(), 8 * 60 + 60 + 1);
}

#[test]
fn test_severity_labels() {
    assert_eq!(Severity::CodeSmell.to_string(), "code smell");
    assert_eq!(Severity::Defect.label(), "defect");
}

#[test]
fn test_diagnostic_human_readable() {
    let diag = smell(design::OPEN_CLOSED_PRINCIPLE)
        .message("Type checking is a sign of violating the Open-Closed Principle.")
        .span(span_at(4, 8, 2, 5, 9))
        .build();

    let source = "fun f() {\n    when { }\n}";
    let output = diag.to_human_readable(source);
    assert!(output.contains("code smell[OpenClosedPrinciple]"));
    assert!(output.contains("--> Shapes.kt:2:5"));
    assert!(output.contains("  2 |     when { }"));
    assert!(output.contains("    ^^^^"));
    assert!(output.contains("= debt: 20min"));
}

#[test]
fn test_human_readable_without_source_line() {
    let diag = smell("Rule")
        .message("somewhere else")
        .span(span_at(0, 0, 40, 1, 1))
        .build();
    let output = diag.to_human_readable("one line");
    assert!(!output.contains(" | "));
    assert!(output.contains("somewhere else"));
}

#[test]
fn test_diagnostic_bag_operations() {
    let mut bag = DiagnosticBag::new();
    assert!(bag.is_empty());
    assert_eq!(bag.len(), 0);

    bag.push(
        smell(design::OPEN_CLOSED_PRINCIPLE)
            .message("a")
            .build(),
    );
    bag.push(
        smell(complexity::TOO_MANY_FUNCTIONS)
            .message("b")
            .debt(Debt::TEN_MINS)
            .build(),
    );

    assert!(!bag.is_empty());
    assert_eq!(bag.len(), 2);
    assert_eq!(bag.count_for_rule(design::OPEN_CLOSED_PRINCIPLE), 1);
    assert_eq!(bag.count_for_rule(complexity::TOO_MANY_FUNCTIONS), 1);
    assert_eq!(bag.total_debt_mins(), 30);
}

#[test]
fn test_diagnostic_bag_merge_keeps_order() {
    let mut bag1 = DiagnosticBag::new();
    bag1.push(smell("First").message("1").build());

    let mut bag2 = DiagnosticBag::new();
    bag2.push(smell("Second").message("2").build());

    bag1.merge(bag2);
    let rules: Vec<_> = bag1.diagnostics().iter().map(|d| d.rule.as_str()).collect();
    assert_eq!(rules, vec!["First", "Second"]);
}

#[test]
fn test_diagnostic_bag_json() {
    let mut bag = DiagnosticBag::new();
    bag.push(smell("Rule").message("test smell").build());

    let json = bag.to_json();
    assert!(json.starts_with('['));
    assert!(json.contains("test smell"));
}

#[test]
fn test_span_file_constructor() {
    let span = Span::file(PathBuf::from("Shapes.kt"));
    assert_eq!(span.file, PathBuf::from("Shapes.kt"));
    assert_eq!(span.start, 0);
    assert_eq!(span.start_line, 1);
}
