//! # Pintle Models
//!
//! Sizing models for pintle injectors, built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`settings`]: Reading injector designs from TOML settings files.
//! - [`report`]: Plain-text reports of sizing results.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```no_run
//! use pintle_models::{
//!     models::propulsion::pintle::PintleInjector, report::Report, settings::Settings,
//! };
//! use twine_core::Model;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let design = Settings::load("setting.toml")?.design();
//! let metrics = PintleInjector.call(&design)?;
//! print!("{}", Report::new(&design.name, &metrics));
//! # Ok(())
//! # }
//! ```
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Model-specific utility code stays private.

pub mod models;
pub mod report;
pub mod settings;
pub mod support;
