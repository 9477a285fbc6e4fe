//! Reusable styling traits made of rule templates.

use tracing::debug;

use crate::template::{InjectionSource, RenderError, Template};

use super::builders::rule;

/// One CSS declaration block paired with a selector template.
///
/// Every time the owning [`Styling`] is applied, the selector template is
/// rendered and the result appended to [`selectors`](Self::selectors). The list
/// is append-only and keeps duplicates, and its order is the order selectors
/// appear in the compiled rule.
#[derive(Debug, Clone)]
pub struct RuleTemplate {
    selector: Template,
    block: String,
    selectors: Vec<String>,
}

impl RuleTemplate {
    fn new(selector: Template, block: String) -> Self {
        Self {
            selector,
            block,
            selectors: Vec::new(),
        }
    }

    /// Returns the selector template.
    pub fn selector_template(&self) -> &Template {
        &self.selector
    }

    /// Returns the declaration block.
    pub fn block(&self) -> &str {
        &self.block
    }

    /// Returns the selectors accumulated so far, in application order.
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    pub(crate) fn write_compiled(&self, out: &mut String) {
        out.push_str(&rule(&self.block, &self.selectors));
    }
}

/// A named, reusable set of rule templates: a design trait declared once and
/// applied to many concrete classes.
///
/// Stylings are created with [`Stylesheet::define_styling`](super::Stylesheet::define_styling)
/// and applied with [`Stylesheet::apply`](super::Stylesheet::apply).
///
/// # Example
///
/// ```rust
/// use dumb_templates::css::{block, declaration, Stylesheet};
/// use dumb_templates::{inj, template};
///
/// let mut sheet = Stylesheet::new("main", "");
/// let card = sheet.define_styling("card").unwrap();
/// card.rule(block([declaration("padding", ["1rem"])]), template![inj("self")])
///     .rule(block([declaration("font-weight", ["600"])]), template![" > h2"]);
///
/// sheet.apply("Header", "card").unwrap();
/// let rules = sheet.styling("card").unwrap().rules();
/// assert_eq!(rules[0].selectors(), [".Header"]);
/// assert_eq!(rules[1].selectors(), [".Header > h2"]);
/// ```
#[derive(Debug, Clone)]
pub struct Styling {
    name: String,
    rules: Vec<RuleTemplate>,
}

impl Styling {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Returns the styling's registry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rule templates in declaration order.
    pub fn rules(&self) -> &[RuleTemplate] {
        &self.rules
    }

    /// Returns the number of rule templates.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule templates have been declared.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Declares a rule template and returns a nesting handle bound to its selector.
    ///
    /// The selector usually starts with the reserved `self` injection, which is
    /// bound to `.<class>` when the styling is applied.
    pub fn rule(&mut self, block: impl Into<String>, selector: Template) -> Nesting<'_> {
        debug!(
            styling = %self.name,
            segments = selector.segments().len(),
            "declaring rule template"
        );
        self.rules.push(RuleTemplate::new(selector.clone(), block.into()));
        Nesting {
            styling: self,
            selector,
        }
    }

    /// Renders every selector template against `data` and appends the results.
    ///
    /// All selectors are rendered before any list is touched, so a failure
    /// leaves every rule template unchanged.
    pub(crate) fn instantiate<S>(&mut self, data: &S) -> Result<(), RenderError>
    where
        S: InjectionSource + ?Sized,
    {
        let rendered = self
            .rules
            .iter()
            .map(|rt| rt.selector.render(data))
            .collect::<Result<Vec<_>, _>>()?;

        for (rt, selector) in self.rules.iter_mut().zip(rendered) {
            rt.selectors.push(selector);
        }
        Ok(())
    }

    pub(crate) fn write_compiled(&self, out: &mut String) {
        out.push_str(&format!("/* styling: {} */\n", self.name));
        for rt in &self.rules {
            rt.write_compiled(out);
        }
    }
}

/// A cursor on a declared selector, for declaring nested rule templates.
///
/// Nested declaration is selector concatenation: the child selector is the
/// parent selector template joined with a new fragment. Declarations are not
/// inherited and the parent rule template is left untouched.
#[derive(Debug)]
pub struct Nesting<'a> {
    styling: &'a mut Styling,
    selector: Template,
}

impl Nesting<'_> {
    /// Returns the selector template this handle is bound to.
    pub fn selector_template(&self) -> &Template {
        &self.selector
    }

    /// Declares a rule template whose selector is this handle's selector
    /// followed by `fragment`.
    ///
    /// The returned handle may itself be nested further. Calling this several
    /// times on one handle declares siblings under the same parent selector.
    pub fn rule(&mut self, block: impl Into<String>, fragment: Template) -> Nesting<'_> {
        let selector = Template::join([&self.selector, &fragment]);
        self.styling.rule(block, selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::inj;
    use crate::template;

    fn self_data(class: &str) -> Vec<(&'static str, String)> {
        vec![("self", format!(".{}", class))]
    }

    #[test]
    fn test_rule_appends_in_order() {
        let mut styling = Styling::new("s");
        styling.rule("{a}", template![inj("self")]);
        styling.rule("{b}", template![inj("self"), ":hover"]);

        assert_eq!(styling.len(), 2);
        assert_eq!(styling.rules()[0].block(), "{a}");
        assert_eq!(styling.rules()[1].block(), "{b}");
    }

    #[test]
    fn test_nested_rule_joins_selector() {
        let mut styling = Styling::new("s");
        styling
            .rule("{a}", template![inj("self")])
            .rule("{b}", template![" > h2"]);

        assert_eq!(
            styling.rules()[1].selector_template(),
            &template![inj("self"), " > h2"]
        );
    }

    #[test]
    fn test_deep_nesting() {
        let mut styling = Styling::new("s");
        styling
            .rule("{a}", template![inj("self")])
            .rule("{b}", template![" ul"])
            .rule("{c}", template![" > li"])
            .rule("{d}", template![" a"]);

        styling.instantiate(&self_data("Menu")).unwrap();
        let selectors: Vec<&str> = styling
            .rules()
            .iter()
            .map(|rt| rt.selectors()[0].as_str())
            .collect();
        assert_eq!(
            selectors,
            vec![".Menu", ".Menu ul", ".Menu ul > li", ".Menu ul > li a"]
        );
    }

    #[test]
    fn test_sibling_nesting_from_one_handle() {
        let mut styling = Styling::new("s");
        {
            let mut parent = styling.rule("{a}", template![inj("self")]);
            parent.rule("{b}", template![" > h2"]);
            parent.rule("{c}", template![" > p"]);
        }

        styling.instantiate(&self_data("X")).unwrap();
        assert_eq!(styling.rules()[1].selectors(), [".X > h2"]);
        assert_eq!(styling.rules()[2].selectors(), [".X > p"]);
    }

    #[test]
    fn test_nesting_does_not_mutate_parent_selector() {
        let mut styling = Styling::new("s");
        styling
            .rule("{a}", template![inj("self")])
            .rule("{b}", template![" > h2"]);

        assert_eq!(
            styling.rules()[0].selector_template(),
            &template![inj("self")]
        );
    }

    #[test]
    fn test_instantiate_appends_duplicates() {
        let mut styling = Styling::new("s");
        styling.rule("{a}", template![inj("self")]);

        styling.instantiate(&self_data("X")).unwrap();
        styling.instantiate(&self_data("X")).unwrap();
        assert_eq!(styling.rules()[0].selectors(), [".X", ".X"]);
    }

    #[test]
    fn test_instantiate_is_atomic() {
        let mut styling = Styling::new("s");
        styling.rule("{a}", template![inj("self")]);
        styling.rule("{b}", template![inj("self"), inj("modifier")]);

        let err = styling.instantiate(&self_data("X")).unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingInjection {
                key: "modifier".into()
            }
        );
        assert!(styling.rules()[0].selectors().is_empty());
        assert!(styling.rules()[1].selectors().is_empty());
    }

    #[test]
    fn test_write_compiled() {
        let mut styling = Styling::new("link");
        styling.rule("{\n\tcolor: blue;\n}", template![inj("self")]);
        styling.instantiate(&self_data("A")).unwrap();
        styling.instantiate(&self_data("B")).unwrap();

        let mut out = String::new();
        styling.write_compiled(&mut out);
        assert_eq!(
            out,
            "/* styling: link */\n.A,\n.B {\n\tcolor: blue;\n}\n\n"
        );
    }
}
