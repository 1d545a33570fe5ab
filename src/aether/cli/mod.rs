//! The session shell: reads one command per line from stdin or a script file
//! and drives [`aether::api::AetherApi`] with it.
//!
//! - `setup`: clap definitions and line tokenizing
//! - `commands`: session loop and handlers
//! - `print`: terminal output for `CmdResult`s
//! - `render`: Mermaid rendering of the link graph
//! - `local`: collaborators that run without a remote service

mod commands;
mod local;
mod print;
mod render;
mod setup;

pub use commands::run;
