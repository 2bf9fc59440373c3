//! # homend-editor — Host editor for homend
//!
//! This crate is the editor side that the home/end navigator drives:
//!
//! - **[`position`]** — `Position` (line, col), 0-indexed
//! - **[`buffer`]** — `Buffer` wrapping a rope, with file loading and line metrics
//! - **[`cursor`]** — Cursor with movement and sticky column
//! - **[`window`]** — the visible line range and its scrolling rules
//! - **[`mark`]** — the mark ring (navigation history)
//! - **[`options`]** — `:set`-style host options
//! - **[`command`]** — command identities and the key-script parser
//! - **[`document`]** — a buffer with its cursor, window, marks, and last command

pub mod buffer;
pub mod command;
pub mod cursor;
pub mod document;
pub mod mark;
pub mod options;
pub mod position;
pub mod window;
