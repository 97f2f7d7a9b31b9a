use crate::model::list::TaskList;
use crate::model::task::{Task, Timestamp};

/// Encode one record as a newline-terminated line
pub fn encode(task: &Task) -> String {
    format!(
        "{} {} {} {} {}\n",
        hex(task.added_at),
        hex(task.started_at),
        hex(task.completed_at),
        task.state.ordinal(),
        task.text
    )
}

/// Serialize every record in list order
pub fn serialize_list(list: &TaskList) -> String {
    list.iter().map(encode).collect()
}

fn hex(ts: Timestamp) -> String {
    if ts < 0 {
        format!("-{:X}", ts.unsigned_abs())
    } else {
        format!("{:X}", ts)
    }
}
