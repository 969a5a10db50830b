pub(crate) mod function;
pub(crate) mod value;
