//! Property value shapes.

/// One positional component of a structured value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Component {
    /// Blank position, rendered as an empty string.
    #[default]
    Empty,
    /// Single text item.
    Text(String),
    /// Comma-joined text list in one position.
    List(Vec<String>),
}

impl Component {
    /// Returns whether this component renders to nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.is_empty(),
            Self::List(items) => items.iter().all(String::is_empty),
        }
    }
}

impl From<&str> for Component {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Component {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Component>> From<Option<T>> for Component {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl From<Vec<String>> for Component {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<&[String]> for Component {
    fn from(value: &[String]) -> Self {
        Self::List(value.to_vec())
    }
}

/// Raw (unescaped) value of a property line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// Single text value.
    Scalar(String),
    /// Text list, items joined by commas.
    List(Vec<String>),
    /// Structured value, components joined by semicolons.
    Structured(Vec<Component>),
}
