//! nvim-scaffold CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod error;
pub mod name;
pub mod observability;
pub mod paths;
pub mod templates;
pub mod writer;

pub use commands::NewCommand;
pub use error::{Result, ScaffoldError};
pub use name::ProjectName;
pub use templates::{GeneratedFile, PluginTemplate};
