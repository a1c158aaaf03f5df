use crate::input::inserter::InputError;

// --- Shortcut Table ---

pub struct ShortcutBinding {
    pub key: char,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// Fixed Alt+letter bindings. Keys are stored lowercase.
pub struct ShortcutTable {
    bindings: &'static [ShortcutBinding],
}

pub static SHORTCUTS: ShortcutTable = ShortcutTable {
    bindings: &[
        ShortcutBinding {
            key: 'a',
            symbol: "∀",
            name: "for all",
        },
        ShortcutBinding {
            key: 'e',
            symbol: "∃",
            name: "there exists",
        },
        ShortcutBinding {
            key: 'i',
            symbol: "→",
            name: "implies",
        },
        ShortcutBinding {
            key: 'n',
            symbol: "¬",
            name: "not",
        },
        ShortcutBinding {
            key: 'd',
            symbol: "∧",
            name: "and",
        },
        ShortcutBinding {
            key: 'o',
            symbol: "∨",
            name: "or",
        },
    ],
};

impl ShortcutTable {
    /// Case-insensitive lookup: `'A'` and `'a'` resolve to the same symbol.
    pub fn lookup(&self, key: char) -> Option<&'static str> {
        let mut lower = key.to_lowercase();
        let key = match (lower.next(), lower.next()) {
            (Some(ch), None) => ch,
            _ => return None,
        };
        self.bindings
            .iter()
            .find(|b| b.key == key)
            .map(|b| b.symbol)
    }

    pub fn key_for(&self, symbol: &str) -> Option<char> {
        self.bindings
            .iter()
            .find(|b| b.symbol == symbol)
            .map(|b| b.key)
    }

    pub fn bindings(&self) -> &'static [ShortcutBinding] {
        self.bindings
    }
}

// --- Symbol Set ---

/// Palette symbols with no keyboard shortcut.
const UNBOUND_SYMBOLS: &[(&str, &str)] = &[("↔", "if and only if")];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolButton {
    /// Declared symbol attribute; doubles as the button identifier.
    pub id: String,
    pub symbol: String,
    pub label: String,
    pub shortcut: Option<char>,
}

#[derive(Clone, Debug, Default)]
pub struct SymbolSet {
    buttons: Vec<SymbolButton>,
}

impl SymbolSet {
    /// Every shortcut symbol in table order, followed by the unbound extras.
    pub fn standard() -> Self {
        let mut set = Self::default();
        for binding in SHORTCUTS.bindings() {
            set.buttons.push(SymbolButton {
                id: binding.symbol.to_string(),
                symbol: binding.symbol.to_string(),
                label: binding.name.to_string(),
                shortcut: Some(binding.key),
            });
        }
        for &(symbol, name) in UNBOUND_SYMBOLS {
            set.buttons.push(SymbolButton {
                id: symbol.to_string(),
                symbol: symbol.to_string(),
                label: name.to_string(),
                shortcut: None,
            });
        }
        set
    }

    /// Append user-declared symbols, skipping empty and duplicate entries.
    pub fn with_extras(mut self, extras: &[String]) -> Self {
        for symbol in extras {
            if let Err(err) = self.declare(symbol) {
                tracing::warn!(%err, "ignoring extra palette symbol");
            }
        }
        self
    }

    pub fn declare(&mut self, symbol: &str) -> Result<(), InputError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(InputError::EmptySymbol);
        }
        if self.resolve(symbol).is_some() {
            return Ok(());
        }
        self.buttons.push(SymbolButton {
            id: symbol.to_string(),
            symbol: symbol.to_string(),
            label: String::new(),
            shortcut: SHORTCUTS.key_for(symbol),
        });
        Ok(())
    }

    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.buttons
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.symbol.as_str())
    }

    pub fn buttons(&self) -> &[SymbolButton] {
        &self.buttons
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}
