use expressive::{
    AnchorConflict, Error, Program, Quantifier, Result,
    ast::ClassKind,
    codegen::{Call, Line},
    parse, to_builder_source,
};

fn program(literal: &str) -> Program {
    parse(literal)
        .and_then(|ast| Program::from_ast(&ast))
        .unwrap_or_else(|err| panic!("no program for {literal:?}: {err}"))
}

fn round_trip(literal: &str) -> Result<String> {
    Program::from_ast(&parse(literal)?)?
        .replay()?
        .to_regex_string()
}

#[test]
fn test_source_text() -> Result<()> {
    assert_eq!(
        to_builder_source(r"/^\d+$/i")?,
        "RegexBuilder::new()
    .case_insensitive()
    .start_of_input()?
    .one_or_more()?.digit()
    .end_of_input()?"
    );
    assert_eq!(
        to_builder_source("/(a[x-z_])/")?,
        r#"RegexBuilder::new()
    .capture()
        .char("a")?
        .any_of()
            .range("x", "z")?
            .char("_")?
            .end()?
        .end()?"#
    );
    assert_eq!(
        to_builder_source(r#"/(?:"hi"\\)+?[^ab]{2,4}?/"#)?,
        r#"RegexBuilder::new()
    .one_or_more_lazy()?.group()
        .string("\"hi\"\\")?
        .end()?
    .between_lazy(2, 4)?.anything_but_chars("ab")?"#
    );
    assert_eq!(
        to_builder_source(r"/[\r\n]/")?,
        r#"RegexBuilder::new()
    .any_of_chars("\r\n")?"#
    );
    assert_eq!(to_builder_source("//")?, "RegexBuilder::new()");
    Ok(())
}

#[test]
fn test_program_lines() {
    assert_eq!(
        program(r"/\w+?/g").lines(),
        &[
            Line {
                depth: 0,
                quantifier: None,
                call: Call::Flag(expressive::Flag::Global),
            },
            Line {
                depth: 0,
                quantifier: Some(Quantifier::OneOrMoreLazy),
                call: Call::Class(ClassKind::Word),
            },
        ]
    );
    assert_eq!(
        program("/[^a-f]ab/").lines(),
        &[
            Line {
                depth: 0,
                quantifier: None,
                call: Call::AnythingButRange('a', 'f'),
            },
            Line {
                depth: 0,
                quantifier: None,
                call: Call::String("ab".into()),
            },
        ]
    );
}

#[test]
fn test_exact_round_trips() -> Result<()> {
    let literals = [
        r"/\d/",
        r"/\d+/",
        r"/^\d+$/",
        "/[a-z]/",
        r"/\./",
        "/(?:abc)/",
        r"/\d{3,5}?/",
        "/(abc)+/",
        "/[a-zA-Z0-9]/",
        "/[^0-9]/",
        "/[aeiou]/",
        "/[^aeiou]/",
        "/hello.world/s",
        r"/(?=\d)\w+/",
        "/(?<!x)y/gm",
        "/a+?b*c{2,}/",
        r"/\s\S\W\B\n\r\t/",
        "/[a-z_]+/",
        "/(a(b(c)))/",
        r"/(?![a-f])[0-9]{4}/gy",
        r"/[\n\t]/",
        r"/[^\r\n]+/",
    ];
    for literal in literals {
        assert_eq!(round_trip(literal)?, literal, "round trip of {literal}");
    }
    Ok(())
}

#[test]
fn test_equivalent_round_trips() -> Result<()> {
    let cases = [
        // Set members are escaped like any other literal.
        ("/[.]/", r"/[\.]/"),
        ("/[a-]/", r"/[a\-]/"),
        // Bounds with a dedicated call use it.
        (r"/\d{0,1}/", r"/\d?/"),
        (r"/\d{1,}/", r"/\d+/"),
        // `{n}?` matches exactly n times either way.
        (r"/\d{2}?/", r"/\d{2}/"),
        // Flags come out in canonical order.
        ("/x/ig", "/x/gi"),
        ("#a/b#", r"/a\/b/"),
    ];
    for (literal, expected) in cases {
        assert_eq!(round_trip(literal)?, expected, "round trip of {literal}");
    }
    Ok(())
}

#[test]
fn test_replay_reports_builder_errors() {
    assert_eq!(
        round_trip("/^^/").unwrap_err(),
        Error::DuplicateAnchor(AnchorConflict::Start)
    );
    assert!(matches!(
        to_builder_source("/(?<name>x)/"),
        Err(Error::Syntax { .. })
    ));
}
