use thiserror::Error;

use crate::nav::catalog::{CategoryCatalog, SubcategoryKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("unknown category {0:?}")]
    UnknownCategory(String),
    #[error("subcategory {index} out of range for {category:?} ({len} entries)")]
    SubcategoryOutOfRange {
        category: &'static str,
        index: usize,
        len: usize,
    },
    #[error("cannot select a subcategory of {requested:?} while {active:?} is active")]
    CrossCategorySelection {
        requested: String,
        active: &'static str,
    },
}

/// Raised when a placeholder subcategory is selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComingSoon {
    pub category: &'static str,
    pub subcategory: &'static str,
}

/// Which category and subcategory are selected, and whether quiz content is shown.
///
/// `active_subcategory`, when set, always indexes into the active category's
/// subcategory list, and `content_visible` is only true while that entry is
/// functional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub active_category: &'static str,
    pub active_subcategory: Option<usize>,
    pub content_visible: bool,
}

/// Result of a successful transition: the next state and an optional notice
/// to show the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: NavigationState,
    pub notice: Option<ComingSoon>,
}

impl NavigationState {
    pub fn initial(catalog: &CategoryCatalog, preferred: &str) -> Self {
        Self {
            active_category: catalog.default_category(preferred),
            active_subcategory: None,
            content_visible: false,
        }
    }

    pub fn select_category(
        &self,
        catalog: &CategoryCatalog,
        key: &str,
    ) -> Result<Transition, NavError> {
        let def = catalog
            .get(key)
            .ok_or_else(|| NavError::UnknownCategory(key.to_string()))?;
        Ok(Transition {
            state: Self {
                active_category: def.key,
                active_subcategory: None,
                content_visible: false,
            },
            notice: None,
        })
    }

    pub fn select_subcategory(
        &self,
        catalog: &CategoryCatalog,
        key: &str,
        index: usize,
    ) -> Result<Transition, NavError> {
        if key != self.active_category {
            return Err(NavError::CrossCategorySelection {
                requested: key.to_string(),
                active: self.active_category,
            });
        }
        let subcategories = catalog
            .subcategories(self.active_category)
            .ok_or_else(|| NavError::UnknownCategory(key.to_string()))?;
        let Some(&name) = subcategories.get(index) else {
            return Err(NavError::SubcategoryOutOfRange {
                category: self.active_category,
                index,
                len: subcategories.len(),
            });
        };

        let functional = catalog.kind(self.active_category, index) == SubcategoryKind::Functional;
        let notice = (!functional).then_some(ComingSoon {
            category: self.active_category,
            subcategory: name,
        });

        Ok(Transition {
            state: Self {
                active_category: self.active_category,
                active_subcategory: Some(index),
                content_visible: functional,
            },
            notice,
        })
    }
}
