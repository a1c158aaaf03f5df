pub mod catalog;
pub mod machine;
pub mod state;

pub use catalog::{CategoryCatalog, SubcategoryKind};
pub use machine::{NavigationStateMachine, RevisitPolicy};
pub use state::{ComingSoon, NavError, NavigationState};
