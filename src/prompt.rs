// Interactive entry of a custom glossary term
use std::io::{BufRead, Write};

use crate::types::{GlossaryEntry, GlossaryError, Result};

/// Values already supplied on the command line; only the `None` ones are asked for.
#[derive(Debug, Clone, Copy, Default)]
pub struct GivenFields<'a> {
    pub term: Option<&'a str>,
    pub definition: Option<&'a str>,
    pub source: Option<&'a str>,
}

/// Ask for whatever `given` lacks on `output`, reading answers from `input`.
///
/// A blank source falls back to `default_source`.
pub fn prompt_entry<R, W>(
    input: &mut R,
    output: &mut W,
    given: GivenFields<'_>,
    default_source: &str,
    placeholder: &str,
) -> Result<GlossaryEntry>
where
    R: BufRead,
    W: Write,
{
    let term = match given.term {
        Some(term) => term.trim().to_string(),
        None => ask(input, output, "Term: ", "term")?,
    };
    if term.is_empty() {
        return Err(GlossaryError::EmptyField("term"));
    }
    let definition = match given.definition {
        Some(definition) => definition.trim().to_string(),
        None => ask(input, output, "Definition: ", "definition")?,
    };
    if definition.is_empty() {
        return Err(GlossaryError::EmptyField("definition"));
    }
    let source = match given.source {
        Some(source) => source.trim().to_string(),
        None => ask(
            input,
            output,
            &format!("Source (default: {}): ", default_source),
            "source",
        )?,
    };
    let source = if source.is_empty() {
        default_source.to_string()
    } else {
        source
    };

    Ok(GlossaryEntry::new(term, definition, source, placeholder))
}

/// Build an entry from values given on the command line.
pub fn entry_from_args(
    term: &str,
    definition: &str,
    source: Option<&str>,
    default_source: &str,
    placeholder: &str,
) -> Result<GlossaryEntry> {
    let term = term.trim();
    let definition = definition.trim();
    if term.is_empty() {
        return Err(GlossaryError::EmptyField("term"));
    }
    if definition.is_empty() {
        return Err(GlossaryError::EmptyField("definition"));
    }
    let source = source
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(default_source);
    Ok(GlossaryEntry::new(term, definition, source, placeholder))
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    field: &'static str,
) -> Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(GlossaryError::InputClosed(field));
    }
    Ok(line.trim().to_string())
}
