//! SqlValuer：参数在插值前把自己解析为底层参数（对齐 go `database/sql/driver.Valuer`）。
//!
//! Rust 没有统一的标准 trait；这里提供一个 crate 内 trait，供用户/测试实现。

use crate::modifiers::Arg;

/// Valuer 错误（对齐 go 的 `Value() (driver.Value, error)`）。
///
/// 插值时该错误不会向上传播：解析失败的参数一律渲染为 `NULL`。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sql valuer error: {0}")]
pub struct ValuerError(pub String);

impl ValuerError {
    pub fn new(err: impl std::fmt::Display) -> Self {
        Self(err.to_string())
    }
}

/// 可在插值阶段动态计算实际值的 trait。
///
/// 返回的 `Arg` 按普通参数继续格式化（可以是标量、`ARRAY[...]` 或 `(...)`），
/// 但只解析一层：若返回的仍是 valuer，不会再次调用。
pub trait SqlValuer: dyn_clone::DynClone + std::fmt::Debug {
    fn value(&self) -> Result<Arg, ValuerError>;
}

dyn_clone::clone_trait_object!(SqlValuer);

#[cfg(test)]
mod tests {
    use super::ValuerError;
    use pretty_assertions::assert_eq;

    #[test]
    fn valuer_error_from_display() {
        let err = ValuerError::new("connection reset");
        assert_eq!(err.to_string(), "sql valuer error: connection reset");
    }

    #[test]
    fn valuer_error_from_std_error() {
        let parse = "x".parse::<i64>().unwrap_err();
        let err = ValuerError::new(&parse);
        assert_eq!(err.0, parse.to_string());
    }
}
