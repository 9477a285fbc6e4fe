//! Segments and construction fragments.

use serde::{Deserialize, Serialize};

/// A single normalized piece of a [`Template`](super::Template).
///
/// A template is an ordered run of segments. After normalization two
/// `Literal` segments are never adjacent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Text copied verbatim into the output.
    Literal { text: String },
    /// A named slot filled at render time.
    ///
    /// When `escape` is true the injected value is passed through
    /// [`escape`](super::escape) before insertion.
    Injection {
        key: String,
        #[serde(default = "default_escape")]
        escape: bool,
    },
}

fn default_escape() -> bool {
    true
}

impl Segment {
    /// Creates a literal segment.
    pub fn literal(text: impl Into<String>) -> Self {
        Segment::Literal { text: text.into() }
    }

    /// Creates an injection segment.
    pub fn injection(key: impl Into<String>, escape: bool) -> Self {
        Segment::Injection {
            key: key.into(),
            escape,
        }
    }

    /// Returns the injection key, if this is an injection.
    pub fn key(&self) -> Option<&str> {
        match self {
            Segment::Literal { .. } => None,
            Segment::Injection { key, .. } => Some(key.as_str()),
        }
    }
}

/// An input to template construction.
///
/// Fragments are what authors hand to [`Template::new`](super::Template::new)
/// or the [`template!`](crate::template!) macro. Unlike [`Segment`], a fragment
/// can be [`Fragment::Nothing`], which construction skips. This lets side-effecting
/// calls such as [`Stylesheet::append`](crate::Stylesheet::append) sit inline in a
/// template definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Literal text; merged with neighbouring text.
    Text(String),
    /// A named slot.
    Injection { key: String, escape: bool },
    /// Ignored during construction.
    Nothing,
}

/// Creates an escaped injection fragment.
///
/// # Example
///
/// ```rust
/// use dumb_templates::{inj, template};
/// use std::collections::HashMap;
///
/// let t = template!["<p>", inj("body"), "</p>"];
/// let data = HashMap::from([("body", "<b>")]);
/// assert_eq!(t.render(&data).unwrap(), "<p>&lt;b&gt;</p>");
/// ```
pub fn inj(key: impl Into<String>) -> Fragment {
    Fragment::Injection {
        key: key.into(),
        escape: true,
    }
}

/// Creates an injection fragment whose value is inserted verbatim.
///
/// The caller is responsible for sanitizing values bound to this key.
pub fn unsafe_inj(key: impl Into<String>) -> Fragment {
    Fragment::Injection {
        key: key.into(),
        escape: false,
    }
}

/// Returns the fragment that construction ignores.
pub fn nothing() -> Fragment {
    Fragment::Nothing
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Text(text.to_string())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Text(text)
    }
}

impl From<&String> for Fragment {
    fn from(text: &String) -> Self {
        Fragment::Text(text.clone())
    }
}

impl From<()> for Fragment {
    fn from(_: ()) -> Self {
        Fragment::Nothing
    }
}

impl<T: Into<Fragment>> From<Option<T>> for Fragment {
    fn from(value: Option<T>) -> Self {
        value.map_or(Fragment::Nothing, Into::into)
    }
}

impl From<Segment> for Fragment {
    fn from(segment: Segment) -> Self {
        match segment {
            Segment::Literal { text } => Fragment::Text(text),
            Segment::Injection { key, escape } => Fragment::Injection { key, escape },
        }
    }
}

/// Appends a segment to `out`, merging adjacent literals and dropping empty ones.
pub(crate) fn push_normalized(out: &mut Vec<Segment>, segment: Segment) {
    match segment {
        Segment::Literal { text } => {
            if text.is_empty() {
                return;
            }
            if let Some(Segment::Literal { text: last }) = out.last_mut() {
                last.push_str(&text);
            } else {
                out.push(Segment::Literal { text });
            }
        }
        injection => out.push(injection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inj_is_escaped() {
        assert_eq!(
            inj("x"),
            Fragment::Injection {
                key: "x".into(),
                escape: true
            }
        );
    }

    #[test]
    fn test_unsafe_inj_is_not_escaped() {
        assert_eq!(
            unsafe_inj("x"),
            Fragment::Injection {
                key: "x".into(),
                escape: false
            }
        );
    }

    #[test]
    fn test_option_none_is_nothing() {
        let none: Option<&str> = None;
        assert_eq!(Fragment::from(none), Fragment::Nothing);
        assert_eq!(Fragment::from(Some("a")), Fragment::Text("a".into()));
    }

    #[test]
    fn test_unit_is_nothing() {
        assert_eq!(Fragment::from(()), Fragment::Nothing);
    }

    #[test]
    fn test_push_normalized_merges_literals() {
        let mut out = Vec::new();
        push_normalized(&mut out, Segment::literal("a"));
        push_normalized(&mut out, Segment::literal("b"));
        push_normalized(&mut out, Segment::injection("x", true));
        push_normalized(&mut out, Segment::literal(""));
        push_normalized(&mut out, Segment::literal("c"));

        assert_eq!(
            out,
            vec![
                Segment::literal("ab"),
                Segment::injection("x", true),
                Segment::literal("c"),
            ]
        );
    }

    #[test]
    fn test_segment_key() {
        assert_eq!(Segment::literal("a").key(), None);
        assert_eq!(Segment::injection("k", false).key(), Some("k"));
    }

    #[test]
    fn test_segment_deserialize_defaults_to_escaped() {
        let segment: Segment = serde_json::from_str(r#"{"kind":"injection","key":"title"}"#).unwrap();
        assert_eq!(segment, Segment::injection("title", true));
    }
}
