use crate::traits::structural_eq::StructuralEq;
use core::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Boolean(pub bool);

impl Boolean {
    pub fn as_bool(&self) -> bool {
        self.0
    }
    pub fn as_str(&self) -> &'static str {
        if self.0 { "true" } else { "false" }
    }
}

impl Display for Boolean {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::write!(f, "{}", self.as_str())
    }
}

impl StructuralEq for Boolean {
    fn structural_eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl From<bool> for Boolean {
    fn from(v: bool) -> Self {
        Boolean(v)
    }
}
