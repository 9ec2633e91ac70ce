//! Property line builder.

use super::escape::encode_value;
use super::fold::{FoldWidth, fold_with};
use crate::rfc::vcard::core::{Component, PropertyValue};

/// A parameter value that is only written when it carries something.
///
/// Empty strings, zero, `false` and `None` all mean "leave the parameter out".
pub trait ParamValue {
    /// Returns the rendered parameter value, or `None` to skip the parameter.
    fn into_param(self) -> Option<String>;
}

impl ParamValue for &str {
    fn into_param(self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_string())
    }
}

impl ParamValue for String {
    fn into_param(self) -> Option<String> {
        (!self.is_empty()).then_some(self)
    }
}

impl ParamValue for &String {
    fn into_param(self) -> Option<String> {
        self.as_str().into_param()
    }
}

impl ParamValue for bool {
    fn into_param(self) -> Option<String> {
        self.then(|| "true".to_string())
    }
}

impl<T: ParamValue> ParamValue for Option<T> {
    fn into_param(self) -> Option<String> {
        self.and_then(ParamValue::into_param)
    }
}

macro_rules! int_param_value {
    ($($ty:ty),*) => {
        $(
            impl ParamValue for $ty {
                fn into_param(self) -> Option<String> {
                    (self != 0).then(|| self.to_string())
                }
            }
        )*
    };
}

int_param_value!(u8, u16, u32, u64, usize, i32, i64);

/// One vCard property: name, parameters and escaped value.
///
/// Built fresh per field and consumed by [`PropertyLine::render`]. A line
/// without a value renders to `None` no matter which parameters were set.
///
/// ```rust
/// use mozvcard_rfc::rfc::vcard::build::PropertyLine;
///
/// let line = PropertyLine::new("TEL")
///     .type_param(["home", "voice"])
///     .pref(true)
///     .val("+1 555 0100");
///
/// assert_eq!(
///     line.render().as_deref(),
///     Some("TEL;TYPE=\"home,voice\";PREF=1:+1 555 0100")
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct PropertyLine {
    name: String,
    params: Vec<String>,
    value: Option<String>,
}

impl PropertyLine {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the property name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends `KEY=VALUE` when `value` is non-empty, non-zero or true.
    ///
    /// Parameters keep call order and are never deduplicated.
    pub fn param(mut self, key: &str, value: impl ParamValue) -> Self {
        if let Some(value) = value.into_param() {
            self.params.push(format!("{key}={value}"));
        }
        self
    }

    /// Sets the `TYPE` parameter.
    ///
    /// A single type is written bare, several are quoted and comma-joined
    /// without escaping. No types means no parameter.
    pub fn type_param<I, S>(self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let types: Vec<S> = types.into_iter().collect();
        match types.as_slice() {
            [] => self,
            [single] => self.param("TYPE", AsRef::<str>::as_ref(single)),
            many => {
                let joined = many
                    .iter()
                    .map(AsRef::<str>::as_ref)
                    .collect::<Vec<_>>()
                    .join(",");
                self.param("TYPE", format!("\"{joined}\""))
            }
        }
    }

    /// Appends `PREF=1` when `flag` is set.
    pub fn pref(self, flag: bool) -> Self {
        if flag { self.param("PREF", "1") } else { self }
    }

    /// Sets a single escaped text value.
    pub fn val(self, value: impl Into<String>) -> Self {
        self.value(&PropertyValue::Scalar(value.into()))
    }

    /// Sets a comma-separated text list, escaping each item.
    pub fn text_list<I, S>(self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value(&PropertyValue::List(
            items.into_iter().map(Into::into).collect(),
        ))
    }

    /// Sets a semicolon-separated structured value.
    ///
    /// Empty components keep their position.
    pub fn list_components<I, C>(self, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Component>,
    {
        self.value(&PropertyValue::Structured(
            components.into_iter().map(Into::into).collect(),
        ))
    }

    /// Sets a value verbatim, for URIs and opaque payloads.
    pub fn uri(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the value from any of the supported shapes.
    pub fn value(mut self, value: &PropertyValue) -> Self {
        self.value = Some(encode_value(value));
        self
    }

    #[must_use]
    pub fn property_name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Returns whether the line would be omitted from the document.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.value.as_deref().is_none_or(str::is_empty)
    }

    /// Composes `NAME[;PARAM...]:VALUE` without folding.
    #[must_use]
    pub fn logical_line(&self) -> Option<String> {
        let value = self.value.as_deref().filter(|v| !v.is_empty())?;

        let mut line = String::with_capacity(self.name.len() + value.len() + 16);
        line.push_str(&self.name);
        for param in &self.params {
            line.push(';');
            line.push_str(param);
        }
        line.push(':');
        line.push_str(value);
        Some(line)
    }

    /// Renders the folded line at the default width, or `None` when absent.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        self.render_with(FoldWidth::DEFAULT)
    }

    /// Renders the folded line at `width`, or `None` when absent.
    #[must_use]
    pub fn render_with(&self, width: FoldWidth) -> Option<String> {
        self.logical_line().map(|line| fold_with(&line, width))
    }
}
