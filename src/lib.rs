//! Language icon generator.
//!
//! Builds one SVG icon per configured language by substituting the uppercase
//! language code, its centering offset, and up to three fill colors into one
//! of three templates chosen by how many colors the language has.
//!
//! ```rust,ignore
//! use language_icons::{config::Config, generator};
//!
//! let config = Config::from_env()?;
//! let report = generator::run(&config).await?;
//! ```

pub mod colors;
pub mod config;
pub mod error;
pub mod generator;
pub mod glyphs;
pub mod lookup;
pub mod metrics;
pub mod render;
pub mod template;
pub mod validator;
