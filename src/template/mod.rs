//! Fragment-and-injection templates.
//!
//! This module provides the text template primitives shared by HTML/text
//! output and CSS selector templates:
//!
//! - [`Segment`]: a normalized literal or injection
//! - [`Fragment`]: construction input, including the ignored [`Fragment::Nothing`]
//! - [`Template`]: an immutable, normalized run of segments
//! - [`join`]: concatenation of templates
//! - [`escape`]: the HTML-safe text escaper
//! - [`InjectionSource`]: where render-time values come from
//! - [`RenderError`]: rendering failures
//!
//! Templates are described once, then rendered many times against different
//! data. Literal text is copied verbatim; injections are looked up by key and
//! escaped unless marked unsafe.

mod data;
mod error;
mod escape;
mod segment;
#[allow(clippy::module_inception)]
mod template;

pub use data::InjectionSource;
pub use error::RenderError;
pub use escape::escape;
pub use segment::{inj, nothing, unsafe_inj, Fragment, Segment};
pub use template::{join, Template};
