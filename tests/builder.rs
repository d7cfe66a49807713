use expressive::{
    AnchorConflict, ArgumentError, Error, FrameKind, Quantifier, RegexBuilder, Result,
    ast::ClassKind, charset,
};

fn regex(builder: Result<RegexBuilder>) -> String {
    builder
        .and_then(|builder| builder.to_regex_string())
        .unwrap_or_else(|err| panic!("builder failed: {err}"))
}

#[test]
fn test_flags() -> Result<()> {
    assert_eq!(
        RegexBuilder::new()
            .allow_multiple_matches()
            .string("hello")?
            .to_regex_string()?,
        "/hello/g"
    );
    assert_eq!(
        RegexBuilder::new()
            .line_by_line()
            .string("^hello$")?
            .to_regex_string()?,
        r"/\^hello\$/m"
    );
    assert_eq!(
        RegexBuilder::new()
            .case_insensitive()
            .string("HELLO")?
            .to_regex_string()?,
        "/HELLO/i"
    );
    assert_eq!(
        RegexBuilder::new()
            .single_line()
            .string("hello")?
            .any_char()
            .string("world")?
            .to_regex_string()?,
        "/hello.world/s"
    );
    // Flags render in a fixed order, whatever order they were set in.
    assert_eq!(
        RegexBuilder::new()
            .single_line()
            .unicode()
            .case_insensitive()
            .line_by_line()
            .sticky()
            .allow_multiple_matches()
            .sticky()
            .to_regex_string()?,
        "//gymius"
    );
    Ok(())
}

#[test]
fn test_classes() -> Result<()> {
    assert_eq!(RegexBuilder::new().null_byte().to_regex_string()?, r"/\0/");
    assert_eq!(
        RegexBuilder::new().digit().word_boundary().to_regex_string()?,
        r"/\d\b/"
    );
    assert_eq!(
        RegexBuilder::new()
            .digit()
            .non_word_boundary()
            .to_regex_string()?,
        r"/\d\B/"
    );
    assert_eq!(RegexBuilder::new().newline().to_regex_string()?, r"/\n/");
    assert_eq!(
        RegexBuilder::new()
            .whitespace_char()
            .non_whitespace_char()
            .non_digit()
            .word()
            .non_word()
            .carriage_return()
            .tab()
            .to_regex_string()?,
        r"/\s\S\D\w\W\r\t/"
    );
    assert_eq!(
        RegexBuilder::new()
            .class(ClassKind::Digit)
            .to_regex_string()?,
        r"/\d/"
    );
    Ok(())
}

#[test]
fn test_literals_and_sets() {
    assert_eq!(regex(RegexBuilder::new().char("!")), r"/\!/");
    assert_eq!(regex(RegexBuilder::new().char("é")), "/é/");
    assert_eq!(regex(RegexBuilder::new().string("a.b/c")), r"/a\.b\/c/");
    assert_eq!(regex(RegexBuilder::new().string("\0")), r"/\000/");
    assert_eq!(regex(RegexBuilder::new().range("a", "z")), "/[a-z]/");
    assert_eq!(
        regex(RegexBuilder::new().anything_but_range("0", "9")),
        "/[^0-9]/"
    );
    assert_eq!(
        regex(RegexBuilder::new().any_of_chars("aeiou")),
        "/[aeiou]/"
    );
    assert_eq!(
        regex(RegexBuilder::new().anything_but_chars("aeiou")),
        "/[^aeiou]/"
    );
    assert_eq!(
        regex(RegexBuilder::new().anything_but_string("aeiou")),
        "/(?:[^a][^e][^i][^o][^u])/"
    );
}

#[test]
fn test_quantifiers() {
    let cases = [
        (Quantifier::Optional, r"/\d?/"),
        (Quantifier::ZeroOrMore, r"/\d*/"),
        (Quantifier::ZeroOrMoreLazy, r"/\d*?/"),
        (Quantifier::OneOrMore, r"/\d+/"),
        (Quantifier::OneOrMoreLazy, r"/\d+?/"),
        (Quantifier::Exactly(5), r"/\d{5}/"),
        (Quantifier::AtLeast(3), r"/\d{3,}/"),
        (Quantifier::Between(4, 7), r"/\d{4,7}/"),
        (Quantifier::BetweenLazy(4, 7), r"/\d{4,7}?/"),
    ];
    for (quantifier, expected) in cases {
        assert_eq!(
            regex(RegexBuilder::new().quantifier(quantifier).map(RegexBuilder::digit)),
            expected
        );
    }

    assert_eq!(
        regex(
            RegexBuilder::new()
                .one_or_more_lazy()
                .map(RegexBuilder::word)
        ),
        r"/\w+?/"
    );
}

#[test]
fn test_quantified_strings_and_groups() -> Result<()> {
    assert_eq!(
        RegexBuilder::new()
            .optional()?
            .string("0x")?
            .to_regex_string()?,
        "/(?:0x)?/"
    );
    // A one-character string needs no group.
    assert_eq!(
        RegexBuilder::new()
            .one_or_more()?
            .string("a")?
            .to_regex_string()?,
        "/a+/"
    );
    assert_eq!(
        RegexBuilder::new()
            .zero_or_more()?
            .capture()
            .string("ab")?
            .end()?
            .to_regex_string()?,
        "/(ab)*/"
    );
    Ok(())
}

#[test]
fn test_anchors() -> Result<()> {
    assert_eq!(RegexBuilder::new().start_of_input()?.to_regex_string()?, "/^/");
    assert_eq!(RegexBuilder::new().end_of_input()?.to_regex_string()?, "/$/");
    assert_eq!(
        RegexBuilder::new().start_of_input()?.start_of_input().unwrap_err(),
        Error::DuplicateAnchor(AnchorConflict::Start)
    );
    assert_eq!(
        RegexBuilder::new().end_of_input()?.end_of_input().unwrap_err(),
        Error::DuplicateAnchor(AnchorConflict::End)
    );
    assert_eq!(
        RegexBuilder::new().end_of_input()?.start_of_input().unwrap_err(),
        Error::DuplicateAnchor(AnchorConflict::StartAfterEnd)
    );
    Ok(())
}

#[test]
fn test_quantifier_carries_past_anchors() -> Result<()> {
    assert_eq!(
        RegexBuilder::new()
            .optional()?
            .start_of_input()?
            .digit()
            .to_regex_string()?,
        r"/^\d?/"
    );
    assert_eq!(
        RegexBuilder::new()
            .one_or_more()?
            .end_of_input()?
            .word()
            .to_regex_string()?,
        r"/$\w+/"
    );
    assert_eq!(
        RegexBuilder::new()
            .optional()?
            .start_of_input()?
            .one_or_more()
            .unwrap_err(),
        Error::QuantifierConflict {
            pending: Quantifier::Optional,
            requested: Quantifier::OneOrMore,
        }
    );
    Ok(())
}

#[test]
fn test_groups() -> Result<()> {
    assert_eq!(
        RegexBuilder::new()
            .group()
            .string("hello ")?
            .word()
            .char("!")?
            .end()?
            .to_regex_string()?,
        r"/(?:hello \w\!)/"
    );
    assert_eq!(
        RegexBuilder::new()
            .capture()
            .string("hello ")?
            .word()
            .char("!")?
            .end()?
            .to_regex_string()?,
        r"/(hello \w\!)/"
    );
    assert_eq!(
        RegexBuilder::new()
            .named_capture("this_is_the_name")?
            .string("hello ")?
            .word()
            .char("!")?
            .end()?
            .to_regex_string()?,
        r"/(?<this_is_the_name>hello \w\!)/"
    );
    Ok(())
}

#[test]
fn test_assertions() -> Result<()> {
    assert_eq!(
        RegexBuilder::new()
            .assert_not_ahead()
            .range("a", "f")?
            .end()?
            .range("0", "9")?
            .to_regex_string()?,
        "/(?![a-f])[0-9]/"
    );
    assert_eq!(
        RegexBuilder::new()
            .assert_ahead()
            .range("a", "f")?
            .end()?
            .range("0", "9")?
            .to_regex_string()?,
        "/(?=[a-f])[0-9]/"
    );
    assert_eq!(
        RegexBuilder::new()
            .assert_behind()
            .string("$")?
            .end()?
            .assert_not_behind()
            .char("-")?
            .end()?
            .digit()
            .to_regex_string()?,
        r"/(?<=\$)(?<!\-)\d/"
    );
    // A quantifier in front of an assertion is dropped.
    assert_eq!(
        RegexBuilder::new()
            .optional()?
            .assert_ahead()
            .digit()
            .end()?
            .digit()
            .to_regex_string()?,
        r"/(?=\d)\d/"
    );
    Ok(())
}

#[test]
fn test_any_of_fusion() -> Result<()> {
    assert_eq!(
        RegexBuilder::new()
            .any_of()
            .range("a", "f")?
            .range("0", "9")?
            .string("XXX")?
            .end()?
            .to_regex_string()?,
        "/(?:XXX|[a-f0-9])/"
    );
    assert_eq!(
        RegexBuilder::new()
            .any_of()
            .char(".")?
            .any_of_chars("xy")?
            .range("0", "9")?
            .end()?
            .to_regex_string()?,
        r"/[\.xy0-9]/"
    );
    assert_eq!(
        RegexBuilder::new()
            .any_of()
            .string("cat")?
            .digit()
            .end()?
            .to_regex_string()?,
        r"/(?:cat|\d)/"
    );
    assert_eq!(
        RegexBuilder::new()
            .start_of_input()?
            .optional()?
            .string("0x")?
            .capture()
            .exactly(4)?
            .any_of()
            .range("A", "F")?
            .range("a", "f")?
            .range("0", "9")?
            .end()?
            .end()?
            .end_of_input()?
            .allow_multiple_matches()
            .line_by_line()
            .to_regex_string()?,
        "/^(?:0x)?([A-Fa-f0-9]{4})$/gm"
    );
    Ok(())
}

#[test]
fn test_capture_numbering() -> Result<()> {
    let builder = RegexBuilder::new()
        .capture()
        .capture()
        .end()?
        .end()?
        .backreference(2)?
        .backreference(1)?;
    assert_eq!(builder.capture_count(), 2);
    assert_eq!(builder.to_regex_string()?, r"/(())\2\1/");

    let builder = RegexBuilder::new()
        .named_capture("year")?
        .exactly(4)?
        .digit()
        .end()?
        .named_backreference("year")?;
    assert_eq!(builder.capture_count(), 1);
    assert_eq!(builder.to_regex_string()?, r"/(?<year>\d{4})\k<year>/");
    Ok(())
}

#[test]
fn test_frames() -> Result<()> {
    let builder = RegexBuilder::new().capture().any_of();
    assert_eq!(builder.frames().depth(), 3);
    assert_eq!(builder.frames().current().kind(), &FrameKind::AnyOf);
    assert_eq!(
        builder.to_regex_string().unwrap_err(),
        Error::IncompleteExpression(FrameKind::AnyOf)
    );

    let builder = builder.end()?;
    assert_eq!(
        builder.pattern_and_flags().unwrap_err().to_string(),
        "cannot compute the value of a not yet fully specified regex object (try adding an end() call to match the \"capture()\")"
    );

    let builder = RegexBuilder::new().one_or_more()?;
    assert_eq!(
        builder.frames().current().pending_quantifier(),
        Some(Quantifier::OneOrMore)
    );
    Ok(())
}

#[test]
fn test_evaluation_is_repeatable() -> Result<()> {
    let builder = RegexBuilder::new()
        .case_insensitive()
        .any_of()
        .string("foo")?
        .range("a", "c")?
        .end()?;
    let first = builder.to_regex_string()?;
    assert_eq!(builder.to_regex_string()?, first);
    assert_eq!(builder.pattern_and_flags()?.0, "(?:foo|[a-c])");
    Ok(())
}

#[test]
fn test_throw_builder_errors() {
    assert_eq!(
        RegexBuilder::new().char("hello").unwrap_err(),
        Error::InvalidArgument(ArgumentError::NotAChar("hello".into()))
    );
    assert_eq!(
        RegexBuilder::new()
            .char("hello")
            .unwrap_err()
            .to_string(),
        "char() can only be called with a single character (got \"hello\")"
    );
    assert_eq!(
        RegexBuilder::new().char("").unwrap_err(),
        Error::InvalidArgument(ArgumentError::NotAChar(String::new()))
    );

    let err = RegexBuilder::new().range("z", "a").unwrap_err();
    assert_eq!(
        err,
        Error::InvalidArgument(ArgumentError::Range(charset::Error::Range(122, 97)))
    );
    assert_eq!(
        err.to_string(),
        "a must have a smaller character value than b (a = 122, b = 97)"
    );
    assert_eq!(
        RegexBuilder::new().range("a", "a").unwrap_err(),
        Error::InvalidArgument(ArgumentError::Range(charset::Error::Range(97, 97)))
    );
    assert_eq!(
        RegexBuilder::new().anything_but_range("ab", "z").unwrap_err(),
        Error::InvalidArgument(ArgumentError::RangeBound("ab".into()))
    );

    assert_eq!(
        RegexBuilder::new().string("").unwrap_err(),
        Error::InvalidArgument(ArgumentError::Empty("string"))
    );
    assert_eq!(
        RegexBuilder::new().any_of_chars("").unwrap_err(),
        Error::InvalidArgument(ArgumentError::Empty("chars"))
    );
    assert!(RegexBuilder::new().anything_but_chars("").is_err());
    assert!(RegexBuilder::new().anything_but_string("").is_err());

    assert_eq!(
        RegexBuilder::new().exactly(0).unwrap_err(),
        Error::InvalidArgument(ArgumentError::NotPositive { name: "n", value: 0 })
    );
    assert_eq!(
        RegexBuilder::new().at_least(0).unwrap_err(),
        Error::InvalidArgument(ArgumentError::NotPositive { name: "n", value: 0 })
    );
    assert_eq!(
        RegexBuilder::new().between(5, 5).unwrap_err(),
        Error::InvalidArgument(ArgumentError::BetweenOrder { x: 5, y: 5 })
    );
    assert_eq!(
        RegexBuilder::new().between_lazy(3, 0).unwrap_err(),
        Error::InvalidArgument(ArgumentError::NotPositive { name: "y", value: 0 })
    );
}

#[test]
fn test_quantifier_conflict() {
    let err = RegexBuilder::new()
        .optional()
        .and_then(RegexBuilder::zero_or_more)
        .unwrap_err();
    assert_eq!(
        err,
        Error::QuantifierConflict {
            pending: Quantifier::Optional,
            requested: Quantifier::ZeroOrMore,
        }
    );
    assert_eq!(
        err.to_string(),
        "cannot quantify regular expression with \"zero_or_more()\" because it's already being quantified with \"optional()\""
    );
}

#[test]
fn test_end_and_reference_errors() {
    assert_eq!(RegexBuilder::new().end().unwrap_err(), Error::UnbalancedEnd);

    assert_eq!(
        RegexBuilder::new().backreference(1).unwrap_err(),
        Error::InvalidArgument(ArgumentError::Backreference { index: 1, groups: 0 })
    );
    assert_eq!(
        RegexBuilder::new().capture().backreference(0).unwrap_err(),
        Error::InvalidArgument(ArgumentError::Backreference { index: 0, groups: 1 })
    );
    assert_eq!(
        RegexBuilder::new().named_backreference("missing").unwrap_err(),
        Error::UnknownGroup("missing".into())
    );
}

#[test]
fn test_group_names() {
    assert_eq!(
        RegexBuilder::new().named_capture("").unwrap_err(),
        Error::InvalidName(String::new())
    );
    assert_eq!(
        RegexBuilder::new().named_capture("9lives").unwrap_err(),
        Error::InvalidName("9lives".into())
    );
    assert_eq!(
        RegexBuilder::new()
            .named_capture("dup")
            .and_then(RegexBuilder::end)
            .and_then(|builder| builder.named_capture("dup"))
            .unwrap_err(),
        Error::DuplicateName("dup".into())
    );
}
