use docfields::{
    parse, Dialect, DocParameter, DocRaise, DocReturn, FunctionSignature, ParameterKind,
    ParseOptions, Parsed, Section, SignatureParameter, SignatureView,
};
use pretty_assertions::assert_eq;

const SOME_NAME: &str = "foo";
const SOME_TEXT: &str = "descriptive test text";

fn run(docstring: &str) -> Parsed {
    parse(docstring, Dialect::Rst, None, &ParseOptions::default())
}

fn run_with(docstring: &str, signature: FunctionSignature) -> Parsed {
    let view = SignatureView::from(signature);
    Dialect::Rst.parse(docstring, Some(&view), &ParseOptions::default())
}

#[test]
fn all_param_aliases_are_equivalent() {
    for alias in ["param", "parameter", "arg", "argument", "key", "keyword"] {
        let parsed = run(&format!(
            "
            Docstring with one line param.

            :{alias} {SOME_NAME}: {SOME_TEXT}
            "
        ));
        assert_eq!(
            parsed.parameters(),
            &[DocParameter::new(SOME_NAME, SOME_TEXT)],
            "alias {alias}"
        );
    }
}

#[test]
fn plural_arguments_alias_is_not_rst() {
    let parsed = run(":arguments foo: text");
    assert_eq!(parsed.sections, vec![Section::Text(String::new())]);
    assert!(parsed.warnings.is_empty());
}

#[test]
fn parameter_carries_signature_kind() {
    let signature = FunctionSignature::new()
        .with_parameter(SignatureParameter::new("a").with_kind(ParameterKind::PositionalOnly))
        .with_parameter(
            SignatureParameter::new("b")
                .with_kind(ParameterKind::KeywordOnly)
                .with_default("1"),
        )
        .with_parameter(SignatureParameter::new("kwargs").with_kind(ParameterKind::VarKeyword));

    let parsed = run_with(
        ":param a: first\n:param b: second\n:param kwargs: rest",
        signature,
    );

    let kinds: Vec<_> = parsed.parameters().iter().map(|p| p.signature_kind).collect();
    assert_eq!(
        kinds,
        vec![
            Some(ParameterKind::PositionalOnly),
            Some(ParameterKind::KeywordOnly),
            Some(ParameterKind::VarKeyword),
        ]
    );
    assert_eq!(parsed.parameters()[1].default_value.as_deref(), Some("1"));
    assert!(parsed.warnings.is_empty());
}

#[test]
fn sphinx_ignores_signature_kind() {
    let view: SignatureView = FunctionSignature::new()
        .with_parameter(SignatureParameter::new("a").with_kind(ParameterKind::KeywordOnly))
        .into();
    let parsed = Dialect::Sphinx.parse(":param a: text", Some(&view), &ParseOptions::default());

    assert_eq!(parsed.parameters()[0].signature_kind, None);
}

#[test]
fn unmatched_parameter_has_no_kind() {
    let parsed = run_with(
        ":param other: text",
        FunctionSignature::new()
            .with_parameter(SignatureParameter::new("foo").with_kind(ParameterKind::KeywordOnly)),
    );

    assert_eq!(parsed.parameters()[0].signature_kind, None);
    assert_eq!(
        parsed.warning_messages(),
        vec!["No matching parameter for 'other'".to_string()]
    );
}

#[test]
fn complete_function_docstring() {
    let docstring = "
        Fetch rows from the table.

        Rows are returned lazily.

        :param str table: Table name.
        :param limit: Maximum number
            of rows.
        :type limit: int or None
        :returns: The rows.
        :rtype: list[dict]
        :raises KeyError: If the table is unknown.
    ";
    let signature = FunctionSignature::new()
        .with_parameter(SignatureParameter::new("table").with_kind(ParameterKind::PositionalOrKeyword))
        .with_parameter(
            SignatureParameter::new("limit")
                .with_annotation("Optional[int]")
                .with_default("None")
                .with_kind(ParameterKind::KeywordOnly),
        )
        .with_returns("Iterator[dict]");

    let parsed = run_with(docstring, signature);

    let mut table = DocParameter::new("table", "Table name.").with_annotation("str");
    table.signature_kind = Some(ParameterKind::PositionalOrKeyword);
    let mut limit = DocParameter::new("limit", "Maximum number of rows.")
        .with_annotation("int | None")
        .with_default("None");
    limit.signature_kind = Some(ParameterKind::KeywordOnly);

    assert_eq!(
        parsed.sections,
        vec![
            Section::Text("Fetch rows from the table.\n\nRows are returned lazily.".to_string()),
            Section::Parameters(vec![table, limit]),
            Section::Returns(DocReturn {
                annotation: Some("list[dict]".to_string()),
                description: "The rows.".to_string(),
            }),
            Section::Raises(vec![DocRaise::new("KeyError", "If the table is unknown.")]),
        ]
    );
    assert!(parsed.warnings.is_empty());
}

#[test]
fn malformed_directives_are_shared_with_sphinx() {
    for docstring in [":param: x", ":type: str", ":raise: x", ":return foo"] {
        let rst = run(docstring);
        let sphinx = parse(docstring, Dialect::Sphinx, None, &ParseOptions::default());

        assert_eq!(rst.warning_messages(), sphinx.warning_messages(), "{docstring}");
        assert_eq!(rst.warnings.len(), 1, "{docstring}");
    }
}
