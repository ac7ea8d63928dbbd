pub mod entry;
pub mod result;
pub mod selection;
