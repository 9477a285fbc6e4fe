//! # Dumb Templates - Composable Text and CSS Templates
//!
//! Dumb Templates builds output out of two small mechanisms:
//!
//! - **Templates**: ordered runs of literal text and named injections, rendered
//!   against a data source with HTML-safe escaping by default
//! - **Stylings**: reusable CSS rule templates whose selectors are themselves
//!   templates, applied to concrete class names and compiled into one stylesheet
//!
//! There is no template syntax to parse. Templates are described in Rust once,
//! at build time, and rendered or applied many times afterwards.
//!
//! ## Quick Start
//!
//! ```rust
//! use dumb_templates::{inj, template, unsafe_inj};
//! use std::collections::HashMap;
//!
//! let page = template![
//!     "<h1>", inj("title"), "</h1>",
//!     "<div>", unsafe_inj("body"), "</div>",
//! ];
//!
//! let data = HashMap::from([
//!     ("title", "<Report>"),
//!     ("body", "<em>ready</em>"),
//! ]);
//!
//! assert_eq!(
//!     page.render(&data).unwrap(),
//!     "<h1>&lt;Report&gt;</h1><div><em>ready</em></div>"
//! );
//! ```
//!
//! ## Stylings
//!
//! A styling is declared once and applied to many classes. Nested rules extend
//! the parent selector template:
//!
//! ```rust
//! use dumb_templates::css::{block, declaration, Stylesheet};
//! use dumb_templates::{inj, template};
//!
//! let mut sheet = Stylesheet::new("main", "");
//! sheet
//!     .define_styling("cardHeader")
//!     .unwrap()
//!     .rule(block([declaration("padding", ["1rem"])]), template![inj("self")])
//!     .rule(block([declaration("font-weight", ["600"])]), template![" > h2"]);
//!
//! let class = sheet.apply("Publication-Header", "cardHeader").unwrap();
//! let html = template!["<header class=\"", class, "\">"];
//!
//! assert_eq!(html.render(&()).unwrap(), "<header class=\"Publication-Header\">");
//! assert_eq!(
//!     sheet.compile(),
//!     "/* styling: cardHeader */\n\
//!      .Publication-Header {\n\tpadding: 1rem;\n}\n\n\
//!      .Publication-Header > h2 {\n\tfont-weight: 600;\n}\n\n"
//! );
//! ```
//!
//! ## Errors
//!
//! Every failure is a value: [`RenderError`] for templates and
//! [`css::StylesheetError`] for the styling registry. Nothing panics on bad
//! input.
//!
//! ## Logging
//!
//! Styling definition, application and compilation emit [`tracing`] events.
//! The crate never installs a subscriber.

pub mod css;
pub mod template;

pub use css::Stylesheet;
pub use template::{
    escape, inj, join, nothing, unsafe_inj, Fragment, InjectionSource, RenderError, Segment,
    Template,
};

/// Builds a [`Template`] from a list of fragments.
///
/// Each argument is converted with `Into<Fragment>`: string literals and
/// `String`s become text, [`inj`] and [`unsafe_inj`] become injections, and
/// `None`, `()` or [`Fragment::Nothing`] are skipped.
///
/// ```rust
/// use dumb_templates::{inj, template};
///
/// let subtitle: Option<&str> = None;
/// let t = template!["<h1>", inj("title"), "</h1>", subtitle];
/// assert_eq!(t.render(&[("title", "Hi")]).unwrap(), "<h1>Hi</h1>");
/// ```
#[macro_export]
macro_rules! template {
    () => {
        $crate::Template::default()
    };
    ($($fragment:expr),+ $(,)?) => {
        $crate::Template::new([$($crate::Fragment::from($fragment)),+])
    };
}
