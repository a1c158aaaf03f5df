use std::collections::HashSet;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no categories")]
    Empty,
    #[error("category {0:?} is declared more than once")]
    DuplicateCategory(&'static str),
    #[error("category {0:?} has no subcategories")]
    EmptyCategory(&'static str),
    #[error("implemented entry refers to unknown category {0:?}")]
    UnknownImplementedCategory(&'static str),
    #[error("implemented entry {category:?}[{index}] is out of range")]
    ImplementedIndexOutOfRange {
        category: &'static str,
        index: usize,
    },
}

// --- Static Definitions ---

pub struct CategoryDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub subcategories: &'static [&'static str],
}

/// A (category key, subcategory index) pair with real quiz content behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImplementedEntry {
    pub category: &'static str,
    pub index: usize,
}

const REFERENCE_CATEGORIES: &[CategoryDefinition] = &[
    CategoryDefinition {
        key: "truth-tables",
        name: "Truth Tables",
        subcategories: &["TT1", "TT2", "TT3", "TT4"],
    },
    CategoryDefinition {
        key: "sentential-logic",
        name: "Sentential Logic",
        subcategories: &["SL1", "SL2", "SL3", "SL4", "SL5"],
    },
    CategoryDefinition {
        key: "predicate-logic",
        name: "Predicate Logic",
        subcategories: &[
            "Basic Translation",
            "Many Place Translation",
            "UI and EE proofs",
            "EE and EI proofs",
        ],
    },
];

const REFERENCE_IMPLEMENTED: &[ImplementedEntry] = &[ImplementedEntry {
    category: "predicate-logic",
    index: 0,
}];

pub const PREFERRED_DEFAULT_CATEGORY: &str = "predicate-logic";

// --- Catalog ---

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubcategoryKind {
    Functional,
    Placeholder,
}

/// Ordered categories with their ordered subcategory names, plus the table
/// of implemented entries. Immutable once built.
pub struct CategoryCatalog {
    categories: &'static [CategoryDefinition],
    implemented: HashSet<ImplementedEntry>,
}

impl CategoryCatalog {
    pub fn new(
        categories: &'static [CategoryDefinition],
        implemented: &[ImplementedEntry],
    ) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for def in categories {
            if !seen.insert(def.key) {
                return Err(CatalogError::DuplicateCategory(def.key));
            }
            if def.subcategories.is_empty() {
                return Err(CatalogError::EmptyCategory(def.key));
            }
        }

        for entry in implemented {
            let def = categories
                .iter()
                .find(|d| d.key == entry.category)
                .ok_or(CatalogError::UnknownImplementedCategory(entry.category))?;
            if entry.index >= def.subcategories.len() {
                return Err(CatalogError::ImplementedIndexOutOfRange {
                    category: entry.category,
                    index: entry.index,
                });
            }
        }

        Ok(Self {
            categories,
            implemented: implemented.iter().copied().collect(),
        })
    }

    /// Truth tables, sentential logic and predicate logic; only
    /// predicate logic's "Basic Translation" is implemented.
    pub fn reference() -> Self {
        Self {
            categories: REFERENCE_CATEGORIES,
            implemented: REFERENCE_IMPLEMENTED.iter().copied().collect(),
        }
    }

    pub fn categories(&self) -> &'static [CategoryDefinition] {
        self.categories
    }

    pub fn get(&self, key: &str) -> Option<&'static CategoryDefinition> {
        self.categories.iter().find(|d| d.key == key)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.categories.iter().position(|d| d.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn subcategories(&self, key: &str) -> Option<&'static [&'static str]> {
        self.get(key).map(|d| d.subcategories)
    }

    pub fn kind(&self, category: &str, index: usize) -> SubcategoryKind {
        let functional = self
            .implemented
            .iter()
            .any(|e| e.category == category && e.index == index);
        if functional {
            SubcategoryKind::Functional
        } else {
            SubcategoryKind::Placeholder
        }
    }

    /// First implemented subcategory of `category`, if any.
    pub fn functional_index(&self, category: &str) -> Option<usize> {
        self.implemented
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.index)
            .min()
    }

    /// `preferred` when present, otherwise the first category.
    pub fn default_category(&self, preferred: &str) -> &'static str {
        match self.get(preferred) {
            Some(def) => def.key,
            None => self.categories[0].key,
        }
    }
}
