//! Configuration-string parsers.

mod cursor;
pub mod list;
pub mod listen;

pub use list::{parse_csv, parse_csv_name_port};
pub use listen::{parse_listen_interfaces, print_listen_interfaces};
