//! Argument-count inference for message templates.
//!
//! The number of positional arguments a template needs is found by probing
//! the substitution engine instead of parsing its grammar: arguments are
//! supplied one at a time until supplying another one no longer changes the
//! rendered text.

use crate::format::{FormatError, MessageRenderer};

/// Value supplied for every probe argument.
const PROBE_ARGUMENT: &str = "1";

/// Counts the positional arguments referenced by `template`.
///
/// Rendering starts from the zero-argument rendering, so a template without
/// placeholders returns `0` after a single probe round. Errors reported by
/// the renderer are returned as-is.
///
/// # Examples
/// ```
/// use localizer_gen::{arity::count_args, format::MessageFormat};
///
/// assert_eq!(count_args(&MessageFormat::new(), "{0} and {1}").unwrap(), 2);
/// assert_eq!(count_args(&MessageFormat::new(), "no placeholders").unwrap(), 0);
/// ```
pub fn count_args(renderer: &dyn MessageRenderer, template: &str) -> Result<usize, FormatError> {
    let mut args: Vec<String> = Vec::new();
    let mut last = renderer.render(template, &args)?;

    loop {
        args.push(PROBE_ARGUMENT.to_string());
        let rendered = renderer.render(template, &args)?;
        if rendered == last {
            return Ok(args.len() - 1);
        }
        last = rendered;
    }
}
