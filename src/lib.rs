// Library target exists for integration tests under tests/.
// The binary entry point is main.rs; this file re-declares the module tree so
// that tests can import types via `logiq::input::*` / `logiq::nav::*`.
// The UI layer is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

pub mod input;
pub mod nav;
pub mod quiz;

mod app;
mod config;
mod event;
mod logging;
mod ui;
