#[cfg(test)]
mod tests {
    use crate::interpolate::interpolate;
    use crate::modifiers::{Arg, list};
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn sql_args_macro_collects_mixed_values() {
        let args = crate::sql_args![1_i64, "two", Some(3.5_f64), None::<bool>, list([4_u8, 5])];
        assert_eq!(args.len(), 5);
        assert_eq!(args[3], Arg::Value(SqlValue::Null));

        let sql = interpolate("? ? ? ? ?", &args).unwrap();
        assert_eq!(sql, "1 'two' 3.500000 NULL (4,5)");
    }

    #[test]
    fn sql_args_macro_accepts_byte_slices() {
        let payload = vec![0x00_u8, 0x7f, 0xff];
        let args = crate::sql_args![&payload[..], 1_u128];
        let sql = interpolate("SET data = $1, n = $2", &args).unwrap();
        assert_eq!(sql, "SET data = '\\x007fff', n = 1");
    }

    #[test]
    fn sql_args_macro_empty() {
        let args = crate::sql_args![];
        assert!(args.is_empty());
    }
}
