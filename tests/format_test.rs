use localizer_gen::format::{FormatError, MessageFormat, MessageRenderer};

fn render(template: &str, args: &[&str]) -> Result<String, FormatError> {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    MessageFormat::new().render(template, &args)
}

#[test]
fn test_simple_substitution() {
    assert_eq!(render("Hello, {0}!", &["World"]).unwrap(), "Hello, World!");
    assert_eq!(render("{1} before {0}", &["a", "b"]).unwrap(), "b before a");
    assert_eq!(render("{0}{0}", &["x"]).unwrap(), "xx");
}

#[test]
fn test_missing_arguments_stay_unexpanded() {
    assert_eq!(render("{0} and {1}", &["a"]).unwrap(), "a and {1}");
    assert_eq!(render("{0,number,integer}", &[]).unwrap(), "{0}");
    assert_eq!(render("{0,number,integer}", &["5"]).unwrap(), "5");
}

#[test]
fn test_quoting() {
    assert_eq!(render("it''s {0}", &["here"]).unwrap(), "it's here");
    assert_eq!(render("'{0}' is literal", &["x"]).unwrap(), "{0} is literal");
    assert_eq!(render("'unterminated {0}", &["x"]).unwrap(), "unterminated {0}");
    assert_eq!(render("a } b", &[]).unwrap(), "a } b");
}

#[test]
fn test_choice() {
    let pattern = "{0,choice,0#no files|1#one file|1<{0} files}";
    assert_eq!(render(pattern, &["0"]).unwrap(), "no files");
    assert_eq!(render(pattern, &["1"]).unwrap(), "one file");
    assert_eq!(render(pattern, &["3"]).unwrap(), "3 files");
    assert_eq!(render(pattern, &[]).unwrap(), "{0}");
}

#[test]
fn test_malformed_templates() {
    assert_eq!(render("{0", &[]), Err(FormatError::UnmatchedBraces));
    assert_eq!(
        render("{x}", &[]),
        Err(FormatError::InvalidArgumentIndex("x".to_string()))
    );
    assert_eq!(
        render("{}", &[]),
        Err(FormatError::InvalidArgumentIndex(String::new()))
    );
    assert_eq!(
        render("{0,weird}", &[]),
        Err(FormatError::UnknownFormatType("weird".to_string()))
    );
    assert!(matches!(
        render("{0,choice,a#b}", &[]),
        Err(FormatError::InvalidChoice(_))
    ));
    assert_eq!(
        render("{0,choice,0#none|1#some}", &["many"]),
        Err(FormatError::NotANumber("many".to_string()))
    );
}
