pub mod task_parser;
pub mod task_serializer;

pub use task_parser::{DecodeError, LineError, decode, parse_list};
pub use task_serializer::{encode, serialize_list};
