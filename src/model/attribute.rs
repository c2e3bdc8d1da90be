//! XSD attribute declarations.

use std::fmt;

use crate::base::constants::DEFAULT_TYPE;

/// The `use` of an attribute declaration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AttributeUse {
    #[default]
    Optional,
    Required,
    Prohibited,
}

impl AttributeUse {
    /// Parse a `use` value. Empty and unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "optional" => Some(Self::Optional),
            "required" => Some(Self::Required),
            "prohibited" => Some(Self::Prohibited),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Optional => "optional",
            Self::Required => "required",
            Self::Prohibited => "prohibited",
        }
    }
}

impl fmt::Display for AttributeUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An `<xs:attribute>` declaration.
///
/// Identity is the name: two attributes with the same name compare equal
/// regardless of their other fields.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attribute {
    name: String,
    type_name: Option<String>,
    usage: AttributeUse,
    default_value: Option<String>,
    fixed_value: Option<String>,
    documentation: Option<String>,
}

impl Attribute {
    /// Create an optional, untyped attribute.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    // ── Builder ─────────────────────────────────────────────────────

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_use(mut self, usage: AttributeUse) -> Self {
        self.usage = usage;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_fixed(mut self, value: impl Into<String>) -> Self {
        self.fixed_value = Some(value.into());
        self
    }

    pub fn with_documentation(mut self, text: impl Into<String>) -> Self {
        self.documentation = Some(text.into());
        self
    }

    // ── Access ──────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type, or `"string"` when none was declared.
    pub fn type_name(&self) -> &str {
        self.type_name.as_deref().unwrap_or(DEFAULT_TYPE)
    }

    /// The type exactly as declared.
    pub fn declared_type(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn usage(&self) -> AttributeUse {
        self.usage
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn fixed_value(&self) -> Option<&str> {
        self.fixed_value.as_deref()
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.usage == AttributeUse::Required
    }

    pub fn is_optional(&self) -> bool {
        self.usage == AttributeUse::Optional
    }

    pub fn is_prohibited(&self) -> bool {
        self.usage == AttributeUse::Prohibited
    }

    /// `fixed=..` or `default=..`; a fixed value wins.
    pub fn value_info(&self) -> Option<String> {
        if let Some(fixed) = &self.fixed_value {
            return Some(format!("fixed={fixed}"));
        }
        self.default_value
            .as_ref()
            .map(|default| format!("default={default}"))
    }
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Attribute {}

impl std::hash::Hash for Attribute {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// `@name (type) * [default=..]`, the one-line form used in details.
impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if let Some(type_name) = &self.type_name {
            write!(f, " ({type_name})")?;
        }
        if self.is_required() {
            f.write_str(" *")?;
        }
        if let Some(info) = self.value_info() {
            write!(f, " [{info}]")?;
        }
        Ok(())
    }
}
