use thiserror::Error;

use crate::input::field::TextField;
use crate::input::symbols::{SHORTCUTS, SymbolSet};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("palette button declares unknown symbol {0:?}")]
    UnknownSymbol(String),
    #[error("palette symbol is empty")]
    EmptySymbol,
}

/// Whether a key event was consumed (default handling suppressed) or left
/// for normal text entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyDisposition {
    Handled,
    PassThrough,
}

/// Insert `symbol` at the caret, replacing any selection, and leave the caret
/// right after the inserted text. A missing field is a silent no-op.
pub fn insert_symbol<F: TextField + ?Sized>(field: Option<&mut F>, symbol: &str) {
    let Some(field) = field else {
        return;
    };

    let value = field.value();
    let len = value.chars().count();
    let (start, end) = field.selection();
    let end = end.min(len);
    let start = start.min(end);

    let mut next = String::with_capacity(value.len() + symbol.len());
    next.extend(value.chars().take(start));
    next.push_str(symbol);
    next.extend(value.chars().skip(end));

    let caret = start + symbol.chars().count();
    field.set_value(next);
    field.set_selection(caret, caret);
    field.focus();

    tracing::debug!(symbol, caret, "inserted symbol");
}

/// Alt+letter shortcut handling for the answer field.
pub fn dispatch_shortcut<F: TextField + ?Sized>(
    key: char,
    alt_pressed: bool,
    field: Option<&mut F>,
) -> KeyDisposition {
    if !alt_pressed {
        return KeyDisposition::PassThrough;
    }
    match SHORTCUTS.lookup(key) {
        Some(symbol) => {
            insert_symbol(field, symbol);
            KeyDisposition::Handled
        }
        None => KeyDisposition::PassThrough,
    }
}

/// Palette button activation. The field is left untouched when the button's
/// symbol is not part of `symbols`.
pub fn on_button_click<F: TextField + ?Sized>(
    symbols: &SymbolSet,
    button_id: &str,
    field: Option<&mut F>,
) -> Result<(), InputError> {
    let Some(symbol) = symbols.resolve(button_id) else {
        tracing::warn!(button_id, "palette button has no matching symbol");
        return Err(InputError::UnknownSymbol(button_id.to_string()));
    };
    insert_symbol(field, symbol);
    Ok(())
}
