//! halo-sql-interpolate：把带占位符的 SQL 与参数拼成一条可直接执行的 SQL 文本。
//!
//! 支持 `?` 与 `$N` 两种占位符，按出现顺序消费参数。

pub mod encode;
pub mod interpolate;
pub mod macros;
#[cfg(test)]
mod macros_tests;
pub mod modifiers;
pub mod value;
pub mod valuer;

pub use crate::encode::{escape_string, format_array, format_bytes, format_value};
pub use crate::interpolate::{InterpolateError, interpolate, interpolate_with};
pub use crate::modifiers::{Arg, SqlDisplay, array, list, opaque, valuer};
pub use crate::value::SqlValue;
pub use crate::valuer::{SqlValuer, ValuerError};
