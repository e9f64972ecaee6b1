//! 插值参数与修饰器：`array`/`list`/`valuer`/`opaque`。

use crate::value::SqlValue;
use crate::valuer::SqlValuer;
use dyn_clone::DynClone;
use std::fmt;

/// 无法归入 `SqlValue` 的值：按 `Display` 的文本当作字符串转义后拼入。
pub trait SqlDisplay: DynClone + fmt::Debug + fmt::Display {}

impl<T> SqlDisplay for T where T: Clone + fmt::Debug + fmt::Display + 'static {}

dyn_clone::clone_trait_object!(SqlDisplay);

/// 插值使用的动态参数类型。
///
/// 两种集合形式必须保持区分：
/// - `Array`：显式的异构序列，渲染为 `ARRAY[a,b]`；
/// - `List`：同构标量集合（常用于 `IN`/`ANY`），渲染为 `(a,b)`。
#[derive(Debug, Clone)]
pub enum Arg {
    Value(SqlValue),
    Valuer(Box<dyn SqlValuer>),
    Array(Vec<Arg>),
    List(Vec<SqlValue>),
    Opaque(Box<dyn SqlDisplay>),
}

impl PartialEq for Arg {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Opaque(a), Self::Opaque(b)) => a.to_string() == b.to_string(),
            // valuer 每次解析结果可能不同，不参与比较
            (Self::Valuer(_), _) | (_, Self::Valuer(_)) => false,
            _ => false,
        }
    }
}

/// Array：显式异构序列，渲染为 `ARRAY[...]`，元素递归格式化。
pub fn array<I>(items: I) -> Arg
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    Arg::Array(items.into_iter().map(Into::into).collect())
}

/// List：同构标量集合，渲染为 `(...)`。
pub fn list<I>(items: I) -> Arg
where
    I: IntoIterator,
    I::Item: Into<SqlValue>,
{
    Arg::List(items.into_iter().map(Into::into).collect())
}

/// Valuer：插值时先调用 `SqlValuer::value` 再格式化。
pub fn valuer(v: impl SqlValuer + 'static) -> Arg {
    Arg::Valuer(Box::new(v))
}

/// Opaque：按 `Display` 输出后当作字符串处理。
pub fn opaque(v: impl SqlDisplay + 'static) -> Arg {
    Arg::Opaque(Box::new(v))
}

impl From<SqlValue> for Arg {
    fn from(v: SqlValue) -> Self {
        Self::Value(v)
    }
}

impl From<Box<dyn SqlValuer>> for Arg {
    fn from(v: Box<dyn SqlValuer>) -> Self {
        Self::Valuer(v)
    }
}

impl From<Vec<Arg>> for Arg {
    fn from(v: Vec<Arg>) -> Self {
        Self::Array(v)
    }
}

macro_rules! impl_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                fn from(v: $t) -> Self {
                    Self::Value(SqlValue::from(v))
                }
            }
        )*
    };
}

impl_from_scalar!(
    (),
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    i128,
    u128,
    f32,
    f64,
    String,
    &'static str,
    Vec<u8>,
    &[u8],
    time::OffsetDateTime,
    time::PrimitiveDateTime
);

impl<T> From<Option<T>> for Arg
where
    T: Into<SqlValue>,
{
    fn from(v: Option<T>) -> Self {
        Self::Value(SqlValue::from_option(v))
    }
}
