pub mod field;
pub mod inserter;
pub mod symbols;

pub use field::{LineInput, TextField};
pub use inserter::{InputError, KeyDisposition, dispatch_shortcut, insert_symbol, on_button_click};
pub use symbols::{SHORTCUTS, SymbolSet};
