//! SQL 插值：将 `query` 中的占位符依次替换为 `args` 的字面量。
//!
//! 安全警告：插值永远不如预编译参数安全；本实现仅用于日志输出或不支持参数化的驱动。
//!
//! 占位符只做词法匹配：`?` 或 `$` 后跟数字。`$N` 里的数字不参与取参，
//! 参数只按出现顺序消费。查询自身的字符串字面量与注释不会被跳过，
//! 其中形如 `?`/`$1` 的文本同样会被替换。

use crate::encode::encode_arg;
use crate::modifiers::Arg;
use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\d+|\?").expect("valid regex"));

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum InterpolateError {
    /// 参数多于可填充的占位符。`expected` 为实际填充的占位符数。
    #[error("too many arguments provided: expected {expected}, got {actual}")]
    TooManyArgs { expected: usize, actual: usize },
}

/// 将 `query` 中的占位符按顺序替换为 `args` 的 SQL 字面量。
///
/// - `args` 为空时原样返回 `query`；
/// - 参数不足时，多出来的占位符原样保留，不报错；
/// - 参数多于占位符时返回 [`InterpolateError::TooManyArgs`]。
///
/// ```
/// use halo_space::{Arg, interpolate, list};
///
/// let sql = interpolate("SELECT * FROM t WHERE id = $1 AND role = ANY($2)", &[
///     Arg::from(123_i64),
///     list(["admin", "user"]),
/// ])
/// .unwrap();
/// assert_eq!(sql, "SELECT * FROM t WHERE id = 123 AND role = ANY(('admin','user'))");
/// ```
pub fn interpolate(query: &str, args: &[Arg]) -> Result<String, InterpolateError> {
    if args.is_empty() {
        return Ok(query.to_string());
    }

    let mut out = String::with_capacity(query.len() + args.len() * 20);
    let mut last = 0usize;
    let mut arg_idx = 0usize;
    let mut unfilled = 0usize;

    for m in PLACEHOLDER_REGEX.find_iter(query) {
        out.push_str(&query[last..m.start()]);
        last = m.end();

        match args.get(arg_idx) {
            Some(arg) => {
                encode_arg(&mut out, arg);
                arg_idx += 1;
            }
            None => {
                out.push_str(m.as_str());
                unfilled += 1;
            }
        }
    }
    out.push_str(&query[last..]);

    if arg_idx < args.len() {
        tracing::debug!(
            expected = arg_idx,
            actual = args.len(),
            "too many arguments for query"
        );
        return Err(InterpolateError::TooManyArgs {
            expected: arg_idx,
            actual: args.len(),
        });
    }

    if unfilled > 0 {
        tracing::trace!(unfilled, "placeholders left without arguments");
    }

    Ok(out)
}

/// 同 [`interpolate`]，参数可为任意可转成 `Arg` 的值。
pub fn interpolate_with<I>(query: &str, args: I) -> Result<String, InterpolateError>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    let args: Vec<Arg> = args.into_iter().map(Into::into).collect();
    interpolate(query, &args)
}
