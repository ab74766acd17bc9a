use crate::values::core_values::array::Array;
use crate::values::core_values::boolean::Boolean;
use crate::values::core_values::date::Date;
use crate::values::core_values::exotic::ExoticKind;
use crate::values::core_values::function::Function;
use crate::values::core_values::number::Number;
use crate::values::core_values::regexp::RegExp;
use crate::values::core_values::text::Text;
use crate::values::type_tag::TypeTag;

/// The internal representation of a heap object, beyond its properties.
#[derive(Clone, Debug)]
pub enum ObjectKind {
    /// A plain object without internal state.
    Ordinary,
    Boolean(Boolean),
    Number(Number),
    String(Text),
    Date(Date),
    RegExp(RegExp),
    Array(Array),
    Function(Function),
    Exotic(ExoticKind),
}

impl ObjectKind {
    pub fn type_tag(&self) -> TypeTag {
        match self {
            ObjectKind::Ordinary => TypeTag::Object,
            ObjectKind::Boolean(_) => TypeTag::Boolean,
            ObjectKind::Number(_) => TypeTag::Number,
            ObjectKind::String(_) => TypeTag::String,
            ObjectKind::Date(_) => TypeTag::Date,
            ObjectKind::RegExp(_) => TypeTag::RegExp,
            ObjectKind::Array(_) => TypeTag::Array,
            ObjectKind::Function(function) => function.kind.type_tag(),
            ObjectKind::Exotic(kind) => TypeTag::Exotic(*kind),
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            ObjectKind::Boolean(boolean) => boolean.as_str().to_string(),
            ObjectKind::Number(number) => number.to_text(),
            ObjectKind::String(text) => text.as_string(),
            ObjectKind::Date(date) => date.to_text(),
            ObjectKind::RegExp(regexp) => regexp.to_text(),
            ObjectKind::Array(array) => array.to_text(),
            ObjectKind::Function(function) => function.source().to_string(),
            ObjectKind::Ordinary | ObjectKind::Exotic(_) => {
                self.type_tag().to_string()
            }
        }
    }
}
