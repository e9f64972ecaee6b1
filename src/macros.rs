//! 宏集合：用 Go 式的可变参数写法收集插值参数。

/// 把任意个可转成 `Arg` 的表达式收集成 `Vec<Arg>`。
///
/// ```
/// use halo_space::{interpolate, sql_args};
///
/// let args = sql_args![42_i64, "O'Connor", None::<i64>];
/// let sql = interpolate("VALUES (?, ?, ?)", &args).unwrap();
/// assert_eq!(sql, "VALUES (42, 'O''Connor', NULL)");
/// ```
#[macro_export]
macro_rules! sql_args {
    () => {
        Vec::<$crate::Arg>::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut values = Vec::<$crate::Arg>::new();
        $(
            values.push($crate::Arg::from($value));
        )*
        values
    }};
}
