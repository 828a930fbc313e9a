//! Line-oriented block passes.
//!
//! In pipeline order:
//! - [`code`]: fenced code blocks lifted into placeholders
//! - [`table`]: pipe tables lifted into placeholders, rendered on restore
//! - [`heading`]: ATX headings
//! - [`list`]: flat ordered and unordered lists
//! - [`paragraph`]: paragraph wrapping, after placeholders are restored

pub mod code;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod table;

pub use list::ListKind;
