//! quill - Local-first quote collection manager
//!
//! A command-line application that keeps a persisted sequence of
//! {text, category} quotes with JSON import/export, a sticky category
//! filter, and a one-shot server-wins sync against a mock REST endpoint.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::QuillError;
