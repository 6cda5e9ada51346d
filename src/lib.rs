#[macro_use]
extern crate log;
extern crate env_logger;

pub mod config;
pub mod error;
pub mod kind;
pub mod list;
pub mod logger;
pub mod node;
pub mod string;

pub use config::Config;
pub use error::{ListError, Result};
pub use kind::{Element, ElementKind, Payload, Value};
pub use list::List;
pub use node::{Node, NodeHandle};
pub use string::{
    custom_payload_array, duplicate_string, list_to_string, string_to_list, string_to_list_with,
    UNTIL_TERMINATOR,
};
