use core::fmt::Display;
use std::rc::Rc;

use crate::traits::identity::Identity;

#[derive(Debug)]
struct SymbolData {
    description: Option<String>,
}

/// A unique primitive. Every call to [`Symbol::new`] creates a symbol that is
/// only identical to itself and its clones.
#[derive(Debug, Clone)]
pub struct Symbol(Rc<SymbolData>);

impl Symbol {
    pub fn new(description: Option<&str>) -> Self {
        Symbol(Rc::new(SymbolData {
            description: description.map(str::to_string),
        }))
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }
}

impl Identity for Symbol {
    fn identical(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::write!(f, "Symbol({})", self.description().unwrap_or_default())
    }
}
