//! Message template substitution.
//! Renders `{index[,type[,style]]}` placeholders with single-quote literal
//! sections, following the pattern rules of `java.text.MessageFormat` bundles.

use thiserror::Error;

/// Errors raised by a substitution engine for a malformed template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unmatched braces in the pattern")]
    UnmatchedBraces,

    #[error("can't parse argument number: {0:?}")]
    InvalidArgumentIndex(String),

    #[error("unknown format type: {0:?}")]
    UnknownFormatType(String),

    #[error("invalid choice pattern: {0:?}")]
    InvalidChoice(String),

    #[error("cannot format {0:?} as a number")]
    NotANumber(String),
}

/// Trait for message substitution engines.
pub trait MessageRenderer {
    /// Renders a message template against positional arguments.
    ///
    /// # Arguments
    /// * `template` - Message template to render
    /// * `args` - Positional arguments, `args[i]` fills placeholder `{i}`
    ///
    /// # Returns
    /// * `Result<String, FormatError>` - Rendered message
    fn render(&self, template: &str, args: &[String]) -> Result<String, FormatError>;
}

/// `MessageFormat`-compatible substitution engine.
///
/// Placeholders referring to an argument that was not supplied are left in
/// the output as `{index}`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageFormat;

impl MessageFormat {
    pub fn new() -> Self {
        Self
    }
}

impl MessageRenderer for MessageFormat {
    fn render(&self, template: &str, args: &[String]) -> Result<String, FormatError> {
        let segments = parse_pattern(template)?;
        let mut out = String::with_capacity(template.len());

        for segment in segments {
            match segment {
                Segment::Literal(text) => out.push_str(&text),
                Segment::Argument(element) => {
                    let Some(arg) = args.get(element.index) else {
                        out.push('{');
                        out.push_str(&element.index.to_string());
                        out.push('}');
                        continue;
                    };
                    match element.kind {
                        ElementKind::Plain
                        | ElementKind::Number
                        | ElementKind::Date
                        | ElementKind::Time => out.push_str(arg),
                        ElementKind::Choice(branches) => {
                            let number: f64 = arg
                                .trim()
                                .parse()
                                .map_err(|_| FormatError::NotANumber(arg.clone()))?;
                            let text = select_branch(&branches, number);
                            if text.contains('{') {
                                out.push_str(&self.render(text, args)?);
                            } else {
                                out.push_str(text);
                            }
                        }
                    }
                }
            }
        }

        Ok(out)
    }
}

#[derive(Debug, PartialEq)]
enum Segment {
    Literal(String),
    Argument(Element),
}

#[derive(Debug, PartialEq)]
struct Element {
    index: usize,
    kind: ElementKind,
}

#[derive(Debug, PartialEq)]
enum ElementKind {
    Plain,
    Number,
    Date,
    Time,
    Choice(Vec<ChoiceBranch>),
}

#[derive(Debug, PartialEq)]
struct ChoiceBranch {
    limit: f64,
    /// `<` limits match only values strictly above the limit.
    strict: bool,
    text: String,
}

fn parse_pattern(pattern: &str) -> Result<Vec<Segment>, FormatError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();
    let mut in_quote = false;

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    literal.push('\'');
                } else {
                    in_quote = !in_quote;
                }
            }
            '{' if !in_quote => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Argument(read_element(&mut chars)?));
            }
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

/// Reads one argument element after its opening brace, up to the matching
/// closing brace. Quotes inside the element are kept for the style part.
fn read_element<I>(chars: &mut I) -> Result<Element, FormatError>
where
    I: Iterator<Item = char>,
{
    // index, type, style
    let mut parts = [String::new(), String::new(), String::new()];
    let mut part = 0;
    let mut depth = 0usize;
    let mut in_quote = false;

    for c in chars.by_ref() {
        if in_quote {
            parts[part].push(c);
            if c == '\'' {
                in_quote = false;
            }
            continue;
        }
        match c {
            ',' if part < 2 => part += 1,
            '{' => {
                depth += 1;
                parts[part].push(c);
            }
            '}' if depth == 0 => {
                let [index, kind, style] = parts;
                return make_element(&index, &kind, &style);
            }
            '}' => {
                depth -= 1;
                parts[part].push(c);
            }
            ' ' if part == 1 && parts[1].is_empty() => {}
            '\'' => {
                in_quote = true;
                parts[part].push(c);
            }
            _ => parts[part].push(c),
        }
    }

    Err(FormatError::UnmatchedBraces)
}

fn make_element(index: &str, kind: &str, style: &str) -> Result<Element, FormatError> {
    let index = index
        .parse::<usize>()
        .map_err(|_| FormatError::InvalidArgumentIndex(index.to_string()))?;

    let kind = match kind.trim().to_lowercase().as_str() {
        "" => ElementKind::Plain,
        "number" => ElementKind::Number,
        "date" => ElementKind::Date,
        "time" => ElementKind::Time,
        "choice" => ElementKind::Choice(parse_choice(style)?),
        _ => return Err(FormatError::UnknownFormatType(kind.to_string())),
    };

    Ok(Element { index, kind })
}

fn parse_choice(pattern: &str) -> Result<Vec<ChoiceBranch>, FormatError> {
    let invalid = || FormatError::InvalidChoice(pattern.to_string());

    let mut branches: Vec<ChoiceBranch> = Vec::new();
    let mut limit_text = String::new();
    let mut text = String::new();
    let mut limit: Option<(f64, bool)> = None;
    let mut chars = pattern.chars().peekable();
    let mut in_quote = false;

    while let Some(c) = chars.next() {
        let target = if limit.is_some() { &mut text } else { &mut limit_text };
        match c {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    target.push('\'');
                } else {
                    in_quote = !in_quote;
                }
            }
            _ if in_quote => target.push(c),
            '#' | '<' | '\u{2264}' if limit.is_none() => {
                let value = parse_limit(&limit_text).ok_or_else(invalid)?;
                let strict = c == '<';
                if let Some(previous) = branches.last() {
                    let ordered = value > previous.limit
                        || (value == previous.limit && strict && !previous.strict);
                    if !ordered {
                        return Err(invalid());
                    }
                }
                limit = Some((value, strict));
            }
            '|' => {
                let (value, strict) = limit.take().ok_or_else(invalid)?;
                branches.push(ChoiceBranch {
                    limit: value,
                    strict,
                    text: std::mem::take(&mut text),
                });
                limit_text.clear();
            }
            _ => target.push(c),
        }
    }

    match limit {
        Some((value, strict)) => branches.push(ChoiceBranch {
            limit: value,
            strict,
            text,
        }),
        None if !limit_text.trim().is_empty() => return Err(invalid()),
        None => {}
    }

    if branches.is_empty() {
        return Err(invalid());
    }
    Ok(branches)
}

fn parse_limit(text: &str) -> Option<f64> {
    match text.trim() {
        "\u{221E}" => Some(f64::INFINITY),
        "-\u{221E}" => Some(f64::NEG_INFINITY),
        other => other.parse().ok(),
    }
}

/// Picks the last branch of the leading run of branches whose limit `number`
/// satisfies, or the first branch when none does.
fn select_branch(branches: &[ChoiceBranch], number: f64) -> &str {
    let matched = branches
        .iter()
        .take_while(|branch| {
            if branch.strict {
                number > branch.limit
            } else {
                number >= branch.limit
            }
        })
        .count();
    &branches[matched.saturating_sub(1)].text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice_branches() {
        let branches = parse_choice("0#none|1#one|1<many").unwrap();
        assert_eq!(branches.len(), 3);
        assert_eq!(branches[0].text, "none");
        assert!(branches[2].strict);
        assert_eq!(branches[2].limit, 1.0);
    }

    #[test]
    fn test_parse_choice_rejects_unordered_limits() {
        assert!(parse_choice("2#two|1#one").is_err());
        assert!(parse_choice("").is_err());
        assert!(parse_choice("one").is_err());
    }

    #[test]
    fn test_select_branch() {
        let branches = parse_choice("-\u{221E}#negative|0#zero|0<positive").unwrap();
        assert_eq!(select_branch(&branches, -3.0), "negative");
        assert_eq!(select_branch(&branches, 0.0), "zero");
        assert_eq!(select_branch(&branches, 0.5), "positive");
    }

    #[test]
    fn test_element_keeps_quotes_in_style() {
        let mut chars = "0,choice,0#'|'|1#x}".chars();
        let element = read_element(&mut chars).unwrap();
        match element.kind {
            ElementKind::Choice(branches) => {
                assert_eq!(branches[0].text, "|");
                assert_eq!(branches[1].text, "x");
            }
            other => panic!("Expected choice element, got {:?}", other),
        }
    }
}
