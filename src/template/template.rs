//! The normalized template type.

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::data::InjectionSource;
use super::error::RenderError;
use super::escape::escape_into;
use super::segment::{push_normalized, Fragment, Segment};

/// An immutable, normalized run of literal and injection segments.
///
/// Templates are built once and rendered many times. Cloning is cheap: the
/// segments live behind an [`Arc`] and clones share them, so one selector
/// fragment can be reused across many stylings.
///
/// Rendering borrows the template immutably, so a fully built template can be
/// rendered from several threads at once.
///
/// # Example
///
/// ```rust
/// use dumb_templates::{inj, template, unsafe_inj};
/// use std::collections::HashMap;
///
/// let page = template![
///     "<html><head><title>",
///     inj("title"),
///     "</title></head><body>",
///     unsafe_inj("body"),
///     "</body></html>",
/// ];
///
/// let data = HashMap::from([
///     ("title", "<test title>"),
///     ("body", "test <strong>body</strong>"),
/// ]);
///
/// assert_eq!(
///     page.render(&data).unwrap(),
///     "<html><head><title>&lt;test title&gt;</title></head><body>test <strong>body</strong></body></html>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Segment>", into = "Vec<Segment>")]
pub struct Template {
    segments: Arc<[Segment]>,
}

impl Template {
    /// Builds a template from fragments.
    ///
    /// Consecutive text fragments are concatenated into one literal segment,
    /// every injection starts a new segment, and [`Fragment::Nothing`] is skipped.
    pub fn new<I>(fragments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        let mut segments = Vec::new();
        for fragment in fragments {
            let fragment: Fragment = fragment.into();
            match fragment {
                Fragment::Text(text) => push_normalized(&mut segments, Segment::Literal { text }),
                Fragment::Injection { key, escape } => {
                    push_normalized(&mut segments, Segment::Injection { key, escape })
                }
                Fragment::Nothing => {}
            }
        }
        Self::from_normalized(segments)
    }

    /// Builds a template holding a single literal.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new([Fragment::Text(text.into())])
    }

    /// Concatenates templates into one.
    ///
    /// A trailing literal of one template merges with the leading literal of
    /// the next, so the result renders exactly like rendering each template in
    /// turn and concatenating the outputs. Joining never fails.
    pub fn join<'a, I>(templates: I) -> Self
    where
        I: IntoIterator<Item = &'a Template>,
    {
        let mut segments = Vec::new();
        for template in templates {
            for segment in template.segments.iter() {
                push_normalized(&mut segments, segment.clone());
            }
        }
        Self::from_normalized(segments)
    }

    fn from_normalized(segments: Vec<Segment>) -> Self {
        Self {
            segments: segments.into(),
        }
    }

    /// Returns the normalized segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns true if the template has no segments and renders to `""`.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the injection keys in template order, repeats included.
    pub fn injection_keys(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::key)
    }

    /// Returns the distinct injection keys `data` has no value for, in order of
    /// first appearance.
    pub fn missing_keys<S>(&self, data: &S) -> Vec<&str>
    where
        S: InjectionSource + ?Sized,
    {
        let mut seen = HashSet::new();
        self.injection_keys()
            .filter(|key| data.lookup(key).is_none() && seen.insert(*key))
            .collect()
    }

    /// Renders the template against `data`.
    ///
    /// Literals are copied verbatim. Each injection looks up its key and is
    /// escaped unless it was created with [`unsafe_inj`](super::unsafe_inj).
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingInjection`] for the first key `data` does
    /// not provide. No partial output is returned.
    pub fn render<S>(&self, data: &S) -> Result<String, RenderError>
    where
        S: InjectionSource + ?Sized,
    {
        let mut out = String::new();
        self.render_into(&mut out, |key| lookup_source(data, key))?;
        Ok(out)
    }

    /// Renders the template once per data source and concatenates the results.
    ///
    /// # Errors
    ///
    /// Fails on the first missing injection in any item; nothing is returned
    /// for the items that rendered before it.
    pub fn render_collection<I>(&self, items: I) -> Result<String, RenderError>
    where
        I: IntoIterator,
        I::Item: InjectionSource,
    {
        let mut out = String::new();
        for item in items {
            self.render_into(&mut out, |key| lookup_source(&item, key))?;
        }
        Ok(out)
    }

    /// Renders the template with values taken from a serializable struct or map.
    ///
    /// `data` must serialize to an object. String fields are injected as-is,
    /// numbers and booleans in their JSON text form.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidData`] if `data` is not an object or if an
    /// injected field is null, an array or an object, and
    /// [`RenderError::MissingInjection`] for absent fields.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dumb_templates::{inj, template};
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Badge { label: String, count: u32 }
    ///
    /// let t = template![inj("label"), ": ", inj("count")];
    /// let out = t.render_data(&Badge { label: "Inbox".into(), count: 3 }).unwrap();
    /// assert_eq!(out, "Inbox: 3");
    /// ```
    pub fn render_data<T: Serialize>(&self, data: &T) -> Result<String, RenderError> {
        let value = serde_json::to_value(data).map_err(|e| RenderError::InvalidData {
            message: e.to_string(),
        })?;
        let serde_json::Value::Object(fields) = value else {
            return Err(RenderError::InvalidData {
                message: "render data must serialize to an object".to_string(),
            });
        };

        let mut out = String::new();
        self.render_into(&mut out, |key| match fields.get(key) {
            None => Err(RenderError::missing(key)),
            Some(serde_json::Value::String(s)) => Ok(Cow::Borrowed(s.as_str())),
            Some(v @ (serde_json::Value::Number(_) | serde_json::Value::Bool(_))) => {
                Ok(Cow::Owned(v.to_string()))
            }
            Some(_) => Err(RenderError::InvalidData {
                message: format!("injection \"{}\" is not a string, number or boolean", key),
            }),
        })?;
        Ok(out)
    }

    fn render_into<'d, F>(&self, out: &mut String, mut lookup: F) -> Result<(), RenderError>
    where
        F: FnMut(&str) -> Result<Cow<'d, str>, RenderError>,
    {
        for segment in self.segments.iter() {
            match segment {
                Segment::Literal { text } => out.push_str(text),
                Segment::Injection { key, escape } => {
                    let value = lookup(key)?;
                    if *escape {
                        escape_into(out, &value);
                    } else {
                        out.push_str(&value);
                    }
                }
            }
        }
        Ok(())
    }
}

fn lookup_source<'d, S>(data: &'d S, key: &str) -> Result<Cow<'d, str>, RenderError>
where
    S: InjectionSource + ?Sized,
{
    data.lookup(key)
        .map(Cow::Borrowed)
        .ok_or_else(|| RenderError::missing(key))
}

impl Default for Template {
    fn default() -> Self {
        Self::from_normalized(Vec::new())
    }
}

impl From<Vec<Segment>> for Template {
    fn from(segments: Vec<Segment>) -> Self {
        let mut normalized = Vec::with_capacity(segments.len());
        for segment in segments {
            push_normalized(&mut normalized, segment);
        }
        Self::from_normalized(normalized)
    }
}

impl From<Template> for Vec<Segment> {
    fn from(template: Template) -> Self {
        template.segments.to_vec()
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Template::literal(text)
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Template::literal(text)
    }
}

/// Concatenates templates into one. See [`Template::join`].
///
/// # Example
///
/// ```rust
/// use dumb_templates::{join, template};
///
/// let joined = join([&template!["a"], &template!["b"]]);
/// assert_eq!(joined, template!["ab"]);
/// ```
pub fn join<'a, I>(templates: I) -> Template
where
    I: IntoIterator<Item = &'a Template>,
{
    Template::join(templates)
}
