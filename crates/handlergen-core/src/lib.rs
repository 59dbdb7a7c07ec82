//! handlergen Core Library
//!
//! This library turns an API discovery document into Rust scaffolding: one
//! empty handler type per API method, registered against its HTTP path and
//! verb, with a compile-time check that every handler implements the
//! configured capability trait.

pub mod config;
pub mod discovery;
pub mod emitter;
pub mod error;
pub mod format;
pub mod generate;
pub mod handlers;
pub mod utils;

pub use crate::{
    config::Config,
    discovery::DiscoveryDocument,
    emitter::Emitter,
    error::{Error, Result},
    generate::{generate, generate_from, Generated, OutputMode},
    handlers::{enumerate, HandlerDescriptor},
};
