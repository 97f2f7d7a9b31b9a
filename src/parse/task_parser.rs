use crate::model::list::TaskList;
use crate::model::task::{Task, TaskState, Timestamp};

/// Why a single record line could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed record: {0}")]
    Malformed(String),
    #[error("invalid state ordinal {0}")]
    InvalidState(i64),
}

/// A decode failure at a 1-based line of a list file
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {source}")]
pub struct LineError {
    pub line: usize,
    #[source]
    pub source: DecodeError,
}

/// Decode one record line: `added started completed state text`.
/// Timestamps are hex, the state is decimal, the text is the rest of the line.
pub fn decode(line: &str) -> Result<Task, DecodeError> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let (added, rest) = next_field(line, "added")?;
    let (started, rest) = next_field(rest, "started")?;
    let (completed, rest) = next_field(rest, "completed")?;
    let (state, rest) = next_field(rest, "state")?;

    let added_at = parse_hex(added, "added")?;
    let started_at = parse_hex(started, "started")?;
    let completed_at = parse_hex(completed, "completed")?;
    let ordinal: i64 = state
        .parse()
        .map_err(|_| DecodeError::Malformed(format!("state {:?} is not a decimal number", state)))?;
    let state = TaskState::from_ordinal(ordinal).ok_or(DecodeError::InvalidState(ordinal))?;

    Ok(Task {
        added_at,
        started_at,
        completed_at,
        state,
        text: rest.trim_start_matches([' ', '\t']).to_string(),
    })
}

/// Parse a whole list file in file order. Empty lines are skipped; the
/// first bad line fails the whole parse.
pub fn parse_list(source: &str) -> Result<TaskList, LineError> {
    let mut tasks = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let task = decode(line).map_err(|source| LineError {
            line: idx + 1,
            source,
        })?;
        tasks.push(task);
    }
    Ok(TaskList::from_tasks(tasks))
}

/// Split off the next whitespace-delimited field
fn next_field<'a>(s: &'a str, name: &str) -> Result<(&'a str, &'a str), DecodeError> {
    let s = s.trim_start_matches([' ', '\t']);
    let end = s.find([' ', '\t']).unwrap_or(s.len());
    if end == 0 {
        return Err(DecodeError::Malformed(format!("missing {} field", name)));
    }
    Ok((&s[..end], &s[end..]))
}

fn parse_hex(field: &str, name: &str) -> Result<Timestamp, DecodeError> {
    Timestamp::from_str_radix(field, 16).map_err(|_| {
        DecodeError::Malformed(format!("{} {:?} is not a hex timestamp", name, field))
    })
}
