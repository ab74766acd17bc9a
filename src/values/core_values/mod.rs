pub mod array;
pub mod boolean;
pub mod date;
pub mod exotic;
pub mod function;
pub mod number;
pub mod object;
pub mod regexp;
pub mod symbol;
pub mod text;
