//! Terminal front end for the crossword engine.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::{
    app::CrosswordApp,
    input::InputError,
    state::{AssistSettings, Settings},
    version::build_version,
};

mod action;
mod action_handler;
mod app;
mod input;
mod loader;
mod state;
mod ui;
mod version;
mod view_model_builder;
