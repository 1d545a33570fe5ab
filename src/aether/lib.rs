//! # AetherNotes Architecture
//!
//! AetherNotes is a **UI-agnostic note store** for linked text, audio and
//! sketch notes. The bundled session shell is one client of the library; an
//! editor front end or a web service would be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session shell (cli/, wired by main.rs)                     │
//! │  - Parses session lines, formats output, terminal I/O       │
//! │  - Supplies local collaborators and the graph renderer      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes selectors (index, ".", uuid, title → ids)     │
//! │  - Queues in-flight transcription and summary requests      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Editing-surface ingestion, listing, graph, config        │
//! │  - Returns CmdResult values, never prints                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: create, update, delete, set_active,     │
//! │    list_for_graph, resolve_title                            │
//! │  - InMemoryStore: notes live for the session only           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Links
//!
//! Text notes reference each other with `[[Title]]`. References are resolved
//! to note ids whenever a text note is updated, and only then. Deleting a
//! note leaves references to it in place; the graph projection skips targets
//! that no longer exist. See [`links`] and [`graph`].
//!
//! ## Collaborators
//!
//! Transcription, summarization and graph rendering are capabilities passed
//! in at construction ([`collab`]). Each reports whether it is ready; nothing
//! is discovered at runtime.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments, returns
//! `Result<CmdResult>`, and never writes to stdout/stderr or exits the
//! process. Diagnostics go through the `log` facade.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: `Note`, `NoteKind`, timestamps and HTML helpers
//! - [`links`]: `[[Title]]` parsing and resolution
//! - [`graph`]: Node/edge projection of the link graph
//! - [`index`]: Sidebar indexes and note selectors
//! - [`collab`]: Collaborator traits and readiness
//! - [`seed`]: Welcome notes for a fresh session
//! - [`config`]: Session configuration
//! - [`error`]: Error types

pub mod api;
pub mod collab;
pub mod commands;
pub mod config;
pub mod error;
pub mod graph;
pub mod index;
pub mod links;
pub mod model;
pub mod seed;
pub mod store;
