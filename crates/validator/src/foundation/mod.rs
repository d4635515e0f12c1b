//! Core types shared by rules and builders
//!
//! - **Values**: [`Value`], [`AsValue`], [`DisplayValue`]: the tagged view checks
//!   match on, and how values appear in messages
//! - **Properties**: [`Property`]: selector path plus accessor
//! - **Results**: [`ValidResult`]: ordered messages of one run
//! - **Errors**: [`ValidatorError`]: configuration and execution errors
//! - **Configuration**: [`ValidatorConfig`] and its modes

pub mod config;
pub mod error;
pub mod property;
pub mod result;
pub mod value;

pub use config::{CascadeMode, LengthMode, NameStyle, ValidatorConfig};
pub use error::ValidatorError;
pub use property::Property;
pub use result::ValidResult;
pub use value::{AsValue, DisplayValue, Value};
