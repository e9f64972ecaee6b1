//! 值格式化：把单个 `Arg` 转成 SQL 字面量文本。
//!
//! 格式化是全函数，不会失败：valuer 解析失败按 `NULL` 处理，无法识别的值按字符串处理。

use crate::modifiers::Arg;
use crate::value::SqlValue;
use std::fmt::Write as _;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]");

/// 将参数格式化为 SQL 字面量。
///
/// - `NULL`/布尔/整数不加引号；
/// - 浮点数固定 6 位小数（`1.230000`）；
/// - 字符串用单引号包裹，内部 `'` 写成 `''`；
/// - 字节序列写成 `'\x0a0b'`；
/// - 时间写成 `'YYYY-MM-DD HH:MM:SS.ffffff'`；
/// - `Arg::Array` 写成 `ARRAY[...]`，`Arg::List` 写成 `(...)`。
pub fn format_value(arg: &Arg) -> String {
    let mut out = String::new();
    encode_arg(&mut out, arg);
    out
}

/// 字符串字面量：只把 `'` 转义为 `''`，其余字符原样保留。
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    quote_string(&mut out, s);
    out
}

/// 字节字面量：`'\x` + 小写十六进制 + `'`，空序列为 `'\x'`。
pub fn format_bytes(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 2 + 4);
    encode_bytes(&mut out, data);
    out
}

/// 数组字面量：`ARRAY[e1,e2]`，空数组为 `ARRAY[]`。
pub fn format_array(items: &[Arg]) -> String {
    let mut out = String::new();
    encode_array(&mut out, items);
    out
}

pub(crate) fn encode_arg(out: &mut String, arg: &Arg) {
    match arg {
        Arg::Value(v) => encode_sql_value(out, v),
        // 只解析一层：解析结果若仍是 valuer，不再调用，按其 Debug 文本当作字符串
        Arg::Valuer(v) => match v.value() {
            Ok(Arg::Valuer(nested)) => quote_string(out, &format!("{nested:?}")),
            Ok(resolved) => encode_arg(out, &resolved),
            Err(error) => {
                tracing::debug!(%error, "valuer failed, interpolating NULL");
                out.push_str("NULL");
            }
        },
        Arg::Array(items) => encode_array(out, items),
        Arg::List(items) => {
            out.push('(');
            for (i, v) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                encode_sql_value(out, v);
            }
            out.push(')');
        }
        Arg::Opaque(v) => quote_string(out, &v.to_string()),
    }
}

fn encode_array(out: &mut String, items: &[Arg]) {
    out.push_str("ARRAY[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        encode_arg(out, item);
    }
    out.push(']');
}

fn encode_sql_value(out: &mut String, v: &SqlValue) {
    match v {
        SqlValue::Null => out.push_str("NULL"),
        SqlValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        SqlValue::I64(n) => {
            let _ = write!(out, "{n}");
        }
        SqlValue::U64(n) => {
            let _ = write!(out, "{n}");
        }
        SqlValue::I128(n) => {
            let _ = write!(out, "{n}");
        }
        SqlValue::U128(n) => {
            let _ = write!(out, "{n}");
        }
        SqlValue::F64(n) => encode_float(out, *n),
        SqlValue::String(s) => quote_string(out, s),
        SqlValue::Bytes(b) => encode_bytes(out, b),
        SqlValue::DateTime(dt) => encode_datetime(out, dt),
    }
}

fn encode_float(out: &mut String, n: f64) {
    if n.is_nan() {
        out.push_str("NaN");
    } else if n.is_infinite() {
        out.push_str(if n > 0.0 { "+Inf" } else { "-Inf" });
    } else {
        let _ = write!(out, "{n:.6}");
    }
}

fn quote_string(out: &mut String, s: &str) {
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push_str("''");
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
}

fn encode_bytes(out: &mut String, data: &[u8]) {
    out.push_str("'\\x");
    push_hex(out, data);
    out.push('\'');
}

fn push_hex(out: &mut String, data: &[u8]) {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    for &b in data {
        out.push(HEX[((b >> 4) & 0xF) as usize] as char);
        out.push(HEX[(b & 0xF) as usize] as char);
    }
}

// 微秒截断（不四舍五入），始终输出 6 位小数，按自身 offset 输出。
fn encode_datetime(out: &mut String, dt: &time::OffsetDateTime) {
    let mut buf = Vec::with_capacity(26);
    match dt.format_into(&mut buf, TIMESTAMP_FORMAT) {
        Ok(_) => {
            out.push('\'');
            out.push_str(&String::from_utf8_lossy(&buf));
            out.push('\'');
        }
        Err(error) => {
            tracing::debug!(%error, "timestamp format failed, interpolating NULL");
            out.push_str("NULL");
        }
    }
}
