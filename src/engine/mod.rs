pub mod opening_book;
pub mod selector;

pub use opening_book::*;
pub use selector::*;
