pub mod colors;
pub mod formatting;
pub mod input;
pub mod path;
pub mod table;
