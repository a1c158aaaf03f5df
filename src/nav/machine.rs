use serde::{Deserialize, Serialize};

use crate::nav::catalog::{CategoryCatalog, SubcategoryKind};
use crate::nav::state::{ComingSoon, NavError, NavigationState};

/// Whether the default category's functional subcategory is auto-selected
/// only at startup or on every visit to that category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevisitPolicy {
    #[default]
    InitialOnly,
    EveryVisit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryMarker {
    pub key: &'static str,
    pub name: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubcategoryEntry {
    pub name: &'static str,
    pub kind: SubcategoryKind,
    pub active: bool,
}

/// Owns the catalog and the current `NavigationState`, applying the pure
/// transitions and exposing the markers the UI renders from.
pub struct NavigationStateMachine {
    catalog: CategoryCatalog,
    state: NavigationState,
    default_category: &'static str,
    policy: RevisitPolicy,
}

impl NavigationStateMachine {
    pub fn new(catalog: CategoryCatalog, preferred: &str, policy: RevisitPolicy) -> Self {
        if !catalog.contains(preferred) {
            tracing::warn!(preferred, "default category not in catalog, using first entry");
        }
        let state = NavigationState::initial(&catalog, preferred);
        let default_category = state.active_category;
        let mut machine = Self {
            catalog,
            state,
            default_category,
            policy,
        };
        machine.auto_select_functional();
        machine
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn content_visible(&self) -> bool {
        self.state.content_visible
    }

    pub fn active_category(&self) -> &'static str {
        self.state.active_category
    }

    /// Rejected keys are logged and leave the current state untouched.
    pub fn select_category(&mut self, key: &str) -> Result<(), NavError> {
        let transition = self
            .state
            .select_category(&self.catalog, key)
            .inspect_err(|err| tracing::error!(%err, "category selection rejected"))?;
        self.state = transition.state;
        tracing::debug!(category = self.state.active_category, "category selected");

        if self.policy == RevisitPolicy::EveryVisit && key == self.default_category {
            self.auto_select_functional();
        }
        Ok(())
    }

    /// Select `index` within the active category. Placeholders hide the quiz
    /// content and yield exactly one `ComingSoon` notice.
    pub fn select_subcategory(
        &mut self,
        key: &str,
        index: usize,
    ) -> Result<Option<ComingSoon>, NavError> {
        let transition = self
            .state
            .select_subcategory(&self.catalog, key, index)
            .inspect_err(|err| tracing::error!(%err, "subcategory selection rejected"))?;
        self.state = transition.state;
        tracing::debug!(
            category = self.state.active_category,
            index,
            content_visible = self.state.content_visible,
            "subcategory selected"
        );
        Ok(transition.notice)
    }

    pub fn category_markers(&self) -> Vec<CategoryMarker> {
        self.catalog
            .categories()
            .iter()
            .map(|def| CategoryMarker {
                key: def.key,
                name: def.name,
                active: def.key == self.state.active_category,
            })
            .collect()
    }

    pub fn subcategory_entries(&self) -> Vec<SubcategoryEntry> {
        let category = self.state.active_category;
        self.catalog
            .subcategories(category)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(index, &name)| SubcategoryEntry {
                name,
                kind: self.catalog.kind(category, index),
                active: self.state.active_subcategory == Some(index),
            })
            .collect()
    }

    fn auto_select_functional(&mut self) {
        let category = self.state.active_category;
        if let Some(index) = self.catalog.functional_index(category) {
            // Functional entries never raise a notice.
            if let Ok(transition) = self.state.select_subcategory(&self.catalog, category, index) {
                self.state = transition.state;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::catalog::{CategoryDefinition, ImplementedEntry};

    const NO_PREDICATE: &[CategoryDefinition] = &[
        CategoryDefinition {
            key: "truth-tables",
            name: "Truth Tables",
            subcategories: &["TT1", "TT2"],
        },
        CategoryDefinition {
            key: "sentential-logic",
            name: "Sentential Logic",
            subcategories: &["SL1"],
        },
    ];

    fn machine(policy: RevisitPolicy) -> NavigationStateMachine {
        NavigationStateMachine::new(CategoryCatalog::reference(), "predicate-logic", policy)
    }

    fn active_count(markers: &[CategoryMarker]) -> usize {
        markers.iter().filter(|m| m.active).count()
    }

    #[test]
    fn test_startup_auto_selects_basic_translation() {
        let m = machine(RevisitPolicy::InitialOnly);
        assert_eq!(m.active_category(), "predicate-logic");
        assert_eq!(m.state().active_subcategory, Some(0));
        assert!(m.content_visible());
        let entries = m.subcategory_entries();
        assert!(entries[0].active);
        assert_eq!(entries[0].kind, SubcategoryKind::Functional);
    }

    #[test]
    fn test_startup_without_preferred_category_uses_first() {
        let catalog = CategoryCatalog::new(NO_PREDICATE, &[]).unwrap();
        let m = NavigationStateMachine::new(catalog, "predicate-logic", RevisitPolicy::InitialOnly);
        assert_eq!(m.active_category(), "truth-tables");
        assert_eq!(m.state().active_subcategory, None);
        assert!(!m.content_visible());
    }

    #[test]
    fn test_startup_auto_select_on_other_default() {
        let implemented = [ImplementedEntry {
            category: "truth-tables",
            index: 1,
        }];
        let catalog = CategoryCatalog::new(NO_PREDICATE, &implemented).unwrap();
        let m = NavigationStateMachine::new(catalog, "truth-tables", RevisitPolicy::InitialOnly);
        assert_eq!(m.state().active_subcategory, Some(1));
        assert!(m.content_visible());
    }

    #[test]
    fn test_exactly_one_category_marker() {
        let mut m = machine(RevisitPolicy::InitialOnly);
        assert_eq!(active_count(&m.category_markers()), 1);
        for key in ["truth-tables", "sentential-logic", "predicate-logic"] {
            m.select_category(key).unwrap();
            let markers = m.category_markers();
            assert_eq!(active_count(&markers), 1);
            assert!(markers.iter().any(|mk| mk.active && mk.key == key));
            assert_eq!(
                m.subcategory_entries().len(),
                m.catalog().subcategories(key).unwrap().len()
            );
        }
    }

    #[test]
    fn test_category_change_renders_unselected_entries() {
        let mut m = machine(RevisitPolicy::InitialOnly);
        m.select_category("sentential-logic").unwrap();
        let entries = m.subcategory_entries();
        let names: Vec<&str> = entries.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["SL1", "SL2", "SL3", "SL4", "SL5"]);
        assert!(entries.iter().all(|e| !e.active));
        assert!(!m.content_visible());
    }

    #[test]
    fn test_unknown_category_keeps_state() {
        let mut m = machine(RevisitPolicy::InitialOnly);
        let before = m.state().clone();
        assert!(m.select_category("modal-logic").is_err());
        assert_eq!(m.state(), &before);
    }

    #[test]
    fn test_exactly_one_subcategory_marker() {
        let mut m = machine(RevisitPolicy::InitialOnly);
        m.select_category("truth-tables").unwrap();
        for index in 0..4 {
            m.select_subcategory("truth-tables", index).unwrap();
            let entries = m.subcategory_entries();
            let active: Vec<usize> = entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.active)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(active, vec![index]);
        }
    }

    #[test]
    fn test_placeholder_returns_one_notice() {
        let mut m = machine(RevisitPolicy::InitialOnly);
        let notice = m.select_subcategory("predicate-logic", 2).unwrap();
        assert_eq!(
            notice,
            Some(ComingSoon {
                category: "predicate-logic",
                subcategory: "UI and EE proofs",
            })
        );
        assert!(!m.content_visible());

        let notice = m.select_subcategory("predicate-logic", 0).unwrap();
        assert!(notice.is_none());
        assert!(m.content_visible());
    }

    #[test]
    fn test_initial_only_policy_does_not_reselect() {
        let mut m = machine(RevisitPolicy::InitialOnly);
        m.select_category("truth-tables").unwrap();
        m.select_category("predicate-logic").unwrap();
        assert_eq!(m.state().active_subcategory, None);
        assert!(!m.content_visible());
    }

    #[test]
    fn test_every_visit_policy_reselects() {
        let mut m = machine(RevisitPolicy::EveryVisit);
        m.select_category("truth-tables").unwrap();
        assert!(!m.content_visible());
        m.select_category("predicate-logic").unwrap();
        assert_eq!(m.state().active_subcategory, Some(0));
        assert!(m.content_visible());

        // Still idempotent under this policy
        let before = m.state().clone();
        m.select_category("predicate-logic").unwrap();
        assert_eq!(m.state(), &before);
    }

    #[test]
    fn test_policy_deserializes_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: RevisitPolicy,
        }
        let w: Wrapper = toml::from_str("policy = \"every-visit\"").unwrap();
        assert_eq!(w.policy, RevisitPolicy::EveryVisit);
    }
}
