pub trait Identity {
    /// Check if two values are strictly identical: the same heap object, or
    /// primitives of the same type with the same value.
    fn identical(&self, other: &Self) -> bool;
}

#[macro_export]
macro_rules! assert_identical {
    ($left_val:expr, $right_val:expr $(,)?) => {
        if !$left_val.identical(&$right_val) {
            core::panic!(
                "identity assertion failed: `(left === right)`\n  left: `{:?}`,\n right: `{:?}`",
                $left_val, $right_val
            );
        }
    };
}
