use crate::traits::identity::Identity;
use crate::traits::value_eq::ValueEq;
use core::fmt::Display;

/// A double precision number as seen by a dynamic runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct Number(pub f64);

impl Number {
    pub const NAN: Number = Number(f64::NAN);

    pub fn as_f64(&self) -> f64 {
        self.0
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    /// Renders the number the way a runtime converts numbers to strings:
    /// shortest round-trip digits, `0` for both zeros, and exponent notation
    /// outside of `[1e-6, 1e21)`.
    pub fn to_text(&self) -> String {
        let value = self.0;
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value == 0.0 {
            return "0".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "Infinity" } else { "-Infinity" }
                .to_string();
        }

        let sign = if value < 0.0 { "-" } else { "" };
        // LowerExp yields the shortest digits that round-trip, e.g. "1.2345e3"
        let scientific = format!("{:e}", value.abs());
        let (mantissa, exponent) =
            scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
        let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
        let exponent: i32 = exponent.parse().unwrap_or(0);

        let k = digits.len() as i32;
        let n = exponent + 1;

        let body = if k <= n && n <= 21 {
            format!("{digits}{}", "0".repeat((n - k) as usize))
        } else if 0 < n && n <= 21 {
            let (integral, fraction) = digits.split_at(n as usize);
            format!("{integral}.{fraction}")
        } else if -6 < n && n <= 0 {
            format!("0.{}{digits}", "0".repeat((-n) as usize))
        } else {
            let e = n - 1;
            let e_sign = if e < 0 { '-' } else { '+' };
            let (first, rest) = digits.split_at(1);
            if rest.is_empty() {
                format!("{first}e{e_sign}{}", e.abs())
            } else {
                format!("{first}.{rest}e{e_sign}{}", e.abs())
            }
        };
        format!("{sign}{body}")
    }
}

/// Strict equality: NaN is never identical to anything, +0 and -0 are
/// identical.
impl Identity for Number {
    fn identical(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Value equality also holds for two NaN values.
impl ValueEq for Number {
    fn value_eq(&self, other: &Self) -> bool {
        self.0 == other.0 || (self.is_nan() && other.is_nan())
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::write!(f, "{}", self.to_text())
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number(value as f64)
                }
            }
        )*
    };
}

impl_from_primitive!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize);
