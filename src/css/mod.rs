//! Stylesheet generation from reusable stylings.
//!
//! This module provides:
//!
//! - [`Stylesheet`]: raw CSS text plus a registry of named stylings
//! - [`Styling`]: a reusable trait made of [`RuleTemplate`]s
//! - [`Nesting`]: a handle for declaring descendant rules under a selector
//! - [`declaration`], [`block`], [`rule`], [`comment`]: CSS text builders
//! - [`StylesheetError`]: registry and instantiation errors
//!
//! Stylings are declared once, with selector templates that use the reserved
//! [`SELF_KEY`] injection, and applied to as many concrete class names as
//! needed. Each application records rendered selectors; compiling the
//! stylesheet emits each rule template once with all of its selectors.
//!
//! Values injected into selectors through the escaped [`inj`](crate::inj)
//! path have `<`, `>` and quotes entity-escaped. Use
//! [`unsafe_inj`](crate::unsafe_inj) for selector pieces such as combinators.

mod builders;
mod error;
mod styling;
mod stylesheet;

pub use builders::{block, comment, declaration, rule};
pub use error::StylesheetError;
pub use styling::{Nesting, RuleTemplate, Styling};
pub use stylesheet::{Stylesheet, SELF_KEY};
