pub mod core_value;
pub mod core_values;
pub mod object_kind;
pub mod realm;
pub mod reference;
pub mod type_tag;
pub mod value_container;
