//! Click targets — what a document-wide click landed on.

/// The class names of the element a click event was dispatched to.
///
/// Only the target itself is recorded, not its ancestors: a click on an
/// `<img>` nested inside the hamburger button carries the image's classes,
/// not the button's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    classes: Vec<String>,
}

impl ClickTarget {
    #[must_use]
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a target from a raw `class` attribute value.
    #[must_use]
    pub fn from_class_attribute(value: &str) -> Self {
        Self::new(value.split_whitespace())
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// What the document-wide click handler did with a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The target was the hamburger button; the menu was left alone.
    Ignored,
    /// The menu was forced closed.
    ClosedMenu,
}
