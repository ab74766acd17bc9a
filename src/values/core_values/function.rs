use crate::values::core_values::text::Text;
use crate::values::type_tag::TypeTag;
use core::fmt::Display;
use strum::Display as StrumDisplay;

/// The syntax form a function was declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
pub enum FunctionKind {
    // function f() {}
    Function,
    // () => {}
    Arrow,
    // function* f() {}
    Generator,
    // async function f() {}
    Async,
    // async () => {}
    AsyncArrow,
    // async function* f() {}
    AsyncGenerator,
    // class C {}
    Class,
    // { m() {} }
    Method,
}

impl FunctionKind {
    pub fn is_generator(&self) -> bool {
        matches!(self, FunctionKind::Generator | FunctionKind::AsyncGenerator)
    }

    pub fn is_arrow(&self) -> bool {
        matches!(self, FunctionKind::Arrow | FunctionKind::AsyncArrow)
    }

    /// Whether functions of this kind get an own `prototype` object.
    pub fn is_constructor(&self) -> bool {
        matches!(self, FunctionKind::Function | FunctionKind::Class)
    }

    pub fn type_tag(&self) -> TypeTag {
        match self {
            FunctionKind::Function
            | FunctionKind::Arrow
            | FunctionKind::Class
            | FunctionKind::Method => TypeTag::Function,
            FunctionKind::Generator => TypeTag::GeneratorFunction,
            FunctionKind::Async | FunctionKind::AsyncArrow => {
                TypeTag::AsyncFunction
            }
            FunctionKind::AsyncGenerator => TypeTag::AsyncGeneratorFunction,
        }
    }
}

/// A function object's callable part: its name, declared parameter count
/// and source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Function {
    pub kind: FunctionKind,
    pub name: Text,
    pub length: u32,
    pub source: String,
}

impl Function {
    pub fn new(
        kind: FunctionKind,
        name: &str,
        length: u32,
        source: &str,
    ) -> Self {
        Function {
            kind,
            name: Text::from(name),
            length,
            source: source.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::write!(f, "{}", self.source)
    }
}
