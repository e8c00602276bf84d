//! Low-level text helpers shared by the parsers and the printer.

pub mod ascii;
pub mod numeric;
pub mod split;

pub use numeric::to_decimal_text;
pub use split::split_string;
