//! Generates the JUnit wrappers that run each art fixture under every
//! supported (toolchain, compiler) pair.

pub mod config;
pub mod error;
pub mod generator;
pub mod template;

pub use config::Layout;
pub use error::{GenError, GenErrorKind};
pub use generator::{generate, Summary};
