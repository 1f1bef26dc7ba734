use addrbook::error::{AddrbookError, Result};
use addrbook::model::{ContactField, ContactFields};
use console::{style, Term};
use std::io::{self, BufRead, IsTerminal};

/// Typed on its own, clears a field that has a current value.
const CLEAR_MARKER: &str = "-";

/// Reads the seven fields one line at a time, starting from `current`.
///
/// An empty answer keeps the current value. Returns `None` when input ends
/// before the last field, which callers treat as "cancelled".
pub(super) fn collect_fields(current: &ContactFields) -> Result<Option<ContactFields>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let interactive = io::stdin().is_terminal();

    let mut fields = current.clone();
    for field in ContactField::ALL {
        if interactive {
            show_field_prompt(field, current.get(field))?;
        }
        match read_answer(&mut input)? {
            Some(answer) => fields.set(field, resolve_answer(&answer, current.get(field))),
            None => return Ok(None),
        }
    }
    Ok(Some(fields))
}

/// Asks a yes/no question on stderr. Anything but `y`/`yes` is a no, and so is end of input.
pub(super) fn confirm(question: &str) -> Result<bool> {
    let term = Term::stderr();
    term.write_str(&format!("{} [y/N]: ", style(question).bold()))
        .map_err(AddrbookError::Io)?;

    let stdin = io::stdin();
    let answer = read_answer(&mut stdin.lock())?;
    Ok(matches!(
        answer.map(|a| a.to_lowercase()).as_deref(),
        Some("y") | Some("yes")
    ))
}

fn show_field_prompt(field: ContactField, current: &str) -> Result<()> {
    let term = Term::stderr();
    let prompt = if current.is_empty() {
        format!("{}: ", style(field.label()).bold())
    } else {
        format!(
            "{} {}: ",
            style(field.label()).bold(),
            style(format!("[{}]", current)).dim()
        )
    };
    term.write_str(&prompt).map_err(AddrbookError::Io)
}

/// One trimmed line, or `None` at end of input.
fn read_answer<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(AddrbookError::Io)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn resolve_answer(answer: &str, current: &str) -> String {
    if answer.is_empty() {
        current.to_string()
    } else if answer == CLEAR_MARKER {
        String::new()
    } else {
        answer.to_string()
    }
}
