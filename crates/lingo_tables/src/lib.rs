//! Lingo data tables
//!
//! Static, read-only data behind language detection:
//! - [`codes`]: normalized BCP-47 tag -> language key (minimal + full tables)
//! - [`names`]: language key -> [`LanguageName`] display metadata
//!
//! Both lookup maps are built lazily on first access and never mutated
//! afterwards, so they can be shared freely across threads.

pub mod codes;
mod descriptor;
pub mod names;

pub use codes::{code_table, lookup_code};
pub use descriptor::{LanguageName, TextDirection};
pub use names::{language_names, lookup_language};
