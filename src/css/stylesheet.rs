//! The stylesheet: raw CSS text plus a registry of stylings.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::template::Fragment;

use super::builders::comment;
use super::error::StylesheetError;
use super::styling::Styling;

/// The injection key bound to `.<class>` when a styling is applied.
///
/// Callers must not supply it in extra injections.
pub const SELF_KEY: &str = "self";

/// A CSS stylesheet under construction.
///
/// A stylesheet accumulates free-form CSS text and owns a registry of named
/// [`Styling`]s. Stylings are applied to concrete class names, which records
/// rendered selectors, and [`compile`](Self::compile) serializes everything.
///
/// # Single writer
///
/// [`apply`](Self::apply) mutates the accumulated selector lists. A stylesheet
/// shared between threads must be wrapped in external synchronization for it.
///
/// # Example
///
/// ```rust
/// use dumb_templates::css::{block, declaration, rule, Stylesheet};
/// use dumb_templates::{inj, template};
///
/// let mut sheet = Stylesheet::new("main", rule(&block(["margin: 0"]), ["body"]));
/// sheet
///     .define_styling("danger")
///     .unwrap()
///     .rule(block([declaration("color", ["red"])]), template![inj("self")]);
///
/// let class = sheet.apply("Alert", "danger").unwrap();
/// assert_eq!(class, "Alert");
/// assert_eq!(
///     sheet.compile(),
///     "body {\nmargin: 0\n}\n\n/* styling: danger */\n.Alert {\n\tcolor: red;\n}\n\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Stylesheet {
    name: String,
    raw: String,
    stylings: Vec<Styling>,
    index: HashMap<String, usize>,
}

impl Stylesheet {
    /// Creates a stylesheet seeded with raw CSS text.
    pub fn new(name: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw: raw.into(),
            stylings: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the stylesheet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw CSS text accumulated so far.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Appends raw CSS text.
    ///
    /// Returns [`Fragment::Nothing`] so the call can sit inside a
    /// [`template!`](crate::template!) definition, generating CSS alongside
    /// the markup that uses it without adding anything to the template.
    pub fn append(&mut self, text: impl AsRef<str>) -> Fragment {
        self.raw.push_str(text.as_ref());
        Fragment::Nothing
    }

    /// Appends several pieces of raw CSS text in order.
    pub fn append_all<I>(&mut self, texts: I) -> Fragment
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for text in texts {
            self.raw.push_str(text.as_ref());
        }
        Fragment::Nothing
    }

    /// Appends a comment line to the raw CSS text.
    pub fn comment(&mut self, text: &str) -> Fragment {
        self.raw.push_str(&comment(text));
        Fragment::Nothing
    }

    /// Registers a new, empty styling.
    ///
    /// # Errors
    ///
    /// Returns [`StylesheetError::DuplicateStyling`] if `name` is taken. The
    /// existing styling is left as it was.
    pub fn define_styling(&mut self, name: &str) -> Result<&mut Styling, StylesheetError> {
        if self.index.contains_key(name) {
            warn!(stylesheet = %self.name, styling = name, "styling already specified");
            return Err(StylesheetError::DuplicateStyling {
                name: name.to_string(),
            });
        }

        debug!(stylesheet = %self.name, styling = name, "defining styling");
        let position = self.stylings.len();
        self.index.insert(name.to_string(), position);
        self.stylings.push(Styling::new(name));
        Ok(&mut self.stylings[position])
    }

    /// Returns the styling registered under `name`.
    pub fn styling(&self, name: &str) -> Option<&Styling> {
        self.index.get(name).map(|&i| &self.stylings[i])
    }

    /// Returns the stylings in definition order.
    pub fn stylings(&self) -> impl Iterator<Item = &Styling> {
        self.stylings.iter()
    }

    /// Returns the number of registered stylings.
    pub fn len(&self) -> usize {
        self.stylings.len()
    }

    /// Returns true if no stylings are registered.
    pub fn is_empty(&self) -> bool {
        self.stylings.is_empty()
    }

    /// Applies a styling to a class, binding `self` to `.<class_name>`.
    ///
    /// Returns `class_name` unchanged so the call can be used inline where the
    /// class attribute is written.
    ///
    /// # Errors
    ///
    /// See [`apply_with`](Self::apply_with).
    pub fn apply<'c>(
        &mut self,
        class_name: &'c str,
        styling: &str,
    ) -> Result<&'c str, StylesheetError> {
        self.apply_with(class_name, styling, std::iter::empty::<(String, String)>())
    }

    /// Applies a styling to a class with additional injection values.
    ///
    /// Every selector template of the styling is rendered against `extra` plus
    /// `self` = `.<class_name>`, and each result is appended to its rule
    /// template. Either every rule template records a selector or none does.
    ///
    /// # Errors
    ///
    /// - [`StylesheetError::UnknownStyling`] if no styling is named `styling`
    /// - [`StylesheetError::ReservedKeyConflict`] if `extra` contains `self`
    /// - [`StylesheetError::Render`] with a missing injection if a selector
    ///   template needs a key `extra` does not provide
    ///
    /// # Example
    ///
    /// ```rust
    /// use dumb_templates::css::Stylesheet;
    /// use dumb_templates::{inj, template, unsafe_inj};
    ///
    /// let mut sheet = Stylesheet::new("main", "");
    /// sheet
    ///     .define_styling("stack")
    ///     .unwrap()
    ///     .rule("{\n\tmargin: 0;\n}", template![inj("self"), unsafe_inj("child")]);
    ///
    /// sheet.apply_with("List", "stack", [("child", " > li")]).unwrap();
    /// assert_eq!(sheet.styling("stack").unwrap().rules()[0].selectors(), [".List > li"]);
    /// ```
    pub fn apply_with<'c, I, K, V>(
        &mut self,
        class_name: &'c str,
        styling: &str,
        extra: I,
    ) -> Result<&'c str, StylesheetError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let position = *self
            .index
            .get(styling)
            .ok_or_else(|| StylesheetError::UnknownStyling {
                name: styling.to_string(),
            })?;

        let mut data: HashMap<String, String> = HashMap::new();
        for (key, value) in extra {
            let key = key.into();
            if key == SELF_KEY {
                return Err(StylesheetError::ReservedKeyConflict { key });
            }
            data.insert(key, value.into());
        }
        data.insert(SELF_KEY.to_string(), format!(".{}", class_name));

        let target = &mut self.stylings[position];
        target.instantiate(&data)?;
        debug!(
            stylesheet = %self.name,
            styling,
            class = class_name,
            rules = target.len(),
            "applied styling"
        );
        Ok(class_name)
    }

    /// Serializes the raw text followed by every styling in definition order.
    ///
    /// Each styling contributes a `/* styling: <name> */` header and one rule
    /// per rule template, its accumulated selectors joined by `,\n`. Compiling
    /// does not change the stylesheet.
    pub fn compile(&self) -> String {
        let mut out = self.raw.clone();
        for styling in &self.stylings {
            styling.write_compiled(&mut out);
        }
        trace!(stylesheet = %self.name, bytes = out.len(), "compiled stylesheet");
        out
    }
}
