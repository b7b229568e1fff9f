//! Display targets: what the converter reads markers from and writes text into.

mod marker;
mod selector;

pub use marker::Marker;
pub use selector::Selector;

use std::collections::BTreeMap;

/// A place a converted amount can be shown, e.g. a page element.
///
/// Implementors expose attribute reads and a text write; everything else has defaults.
pub trait RenderTarget {
    /// Value of attribute `name`, `Some("")` for a present attribute without a value.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Replaces the target's text content.
    fn set_text(&mut self, text: &str);

    /// Element/tag name, used only by tag selectors.
    fn tag_name(&self) -> Option<&str> {
        None
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    fn has_marker(&self, marker: Marker) -> bool {
        self.has_attribute(marker.attribute())
    }

    fn marker_value(&self, marker: Marker) -> Option<&str> {
        self.attribute(marker.attribute())
    }
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn attribute(&self, name: &str) -> Option<&str> {
        (**self).attribute(name)
    }

    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }

    fn tag_name(&self) -> Option<&str> {
        (**self).tag_name()
    }
}

impl<T: RenderTarget + ?Sized> RenderTarget for Box<T> {
    fn attribute(&self, name: &str) -> Option<&str> {
        (**self).attribute(name)
    }

    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }

    fn tag_name(&self) -> Option<&str> {
        (**self).tag_name()
    }
}

/// Keeps the candidates that carry any marker or match `selector`, preserving order.
pub fn discover<T, I>(candidates: I, selector: Option<&Selector>) -> Vec<T>
where
    T: RenderTarget,
    I: IntoIterator<Item = T>,
{
    candidates
        .into_iter()
        .filter(|target| {
            Marker::ALL.iter().any(|m| target.has_marker(*m))
                || selector.is_some_and(|s| s.matches(target))
        })
        .collect()
}

/// A detached, in-memory element: a tag, attributes, and text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    text: String,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Adds or replaces an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Adds a marker attribute with `value` (use `""` for a bare marker).
    #[must_use]
    pub fn marker(self, marker: Marker, value: impl Into<String>) -> Self {
        self.attr(marker.attribute(), value)
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl RenderTarget for Element {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    fn tag_name(&self) -> Option<&str> {
        Some(&self.tag)
    }
}
