pub trait ValueEq {
    /// Check if two values hold the same value. Unlike `PartialEq` on floats,
    /// this treats NaN as equal to NaN.
    fn value_eq(&self, other: &Self) -> bool;
}

#[macro_export]
macro_rules! assert_value_eq {
    ($left_val:expr, $right_val:expr $(,)?) => {
        if !$left_val.value_eq(&$right_val) {
            core::panic!(
                "value equality assertion failed: `(left == right)`\n  left: `{:?}`,\n right: `{:?}`",
                $left_val, $right_val
            );
        }
    };
}
