//! # Not A House But A Home - Common Library
//!
//! Shared code for the design library:
//! - Catalog models (materials, designs)
//! - Filter engine and selection tracker
//! - Typed translations (English/Hungarian)
//! - Configuration loading
//! - Common error type

pub mod config;
pub mod error;
pub mod filter;
pub mod i18n;
pub mod models;
pub mod selection;

pub use error::{Error, Result};
pub use filter::{visible_designs, FilterState};
pub use i18n::{Locale, Message};
pub use models::{ContributorRef, Design, DesignStatus, Material, MaterialRef};
pub use selection::{selected_designs, SelectionState};
