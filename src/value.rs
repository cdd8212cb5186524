//! Value model for printable object graphs.
//!
//! Rust has no runtime reflection, so composite types describe themselves:
//! implementing [`Inspect`] supplies a display name and an ordered list of
//! [`Field`] descriptors, and the printer walks those descriptors instead of
//! reflecting over the type.

use std::{
    any::{Any, TypeId},
    borrow::Cow,
    fmt,
};

use chrono::{DateTime, TimeDelta, Utc};

/// A composite type that can be printed.
///
/// Implementations list their properties in a stable order; the printer
/// renders them in exactly that order on every call.
pub trait Inspect: Any {
    /// Display name of the type, used as the header line of the rendered
    /// block.
    fn type_name(&self) -> &'static str;

    /// The declared properties of the value, in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// Identifies a declared type in the per-type rule tables.
///
/// The terminal kinds are a closed set; composite types are keyed by their
/// [`TypeId`] via [`TypeTag::of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Signed integer scalars.
    Int,
    /// Floating-point scalars.
    Float,
    /// Text values.
    Text,
    /// Points in time.
    Timestamp,
    /// Durations.
    Span,
    /// A composite type implementing [`Inspect`].
    Composite(TypeId),
}

impl TypeTag {
    /// Returns the tag identifying the composite type `T`.
    #[must_use]
    pub fn of<T: Inspect>() -> Self {
        Self::Composite(TypeId::of::<T>())
    }
}

/// The runtime representation of a printable value.
///
/// Every variant except [`Value::Composite`] is terminal: it is rendered via
/// its default textual form and never traversed further.
pub enum Value<'a> {
    /// An absent value, rendered as the literal token `null`.
    Null,
    /// A signed integer scalar.
    Int(i64),
    /// A floating-point scalar.
    Float(f64),
    /// A text value.
    Text(Cow<'a, str>),
    /// A point in time.
    Timestamp(DateTime<Utc>),
    /// A duration.
    Span(TimeDelta),
    /// A nested composite object.
    Composite(&'a dyn Inspect),
}

impl Value<'_> {
    /// Human-readable name of the value's runtime kind, used in error
    /// messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Timestamp(_) => "timestamp",
            Self::Span(_) => "span",
            Self::Composite(_) => "composite",
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Self::Timestamp(v) => f.debug_tuple("Timestamp").field(v).finish(),
            Self::Span(v) => f.debug_tuple("Span").field(v).finish(),
            Self::Composite(obj) => f.debug_tuple("Composite").field(&obj.type_name()).finish(),
        }
    }
}

/// A single property descriptor: unqualified name, declared type, and the
/// current value.
///
/// The name is deliberately unqualified; name-keyed rules treat the same name
/// on unrelated types as the same key.
#[derive(Debug)]
pub struct Field<'a> {
    name: &'static str,
    declared: TypeTag,
    value: Value<'a>,
}

impl<'a> Field<'a> {
    /// Creates a field from raw parts.
    #[must_use]
    pub const fn new(name: &'static str, declared: TypeTag, value: Value<'a>) -> Self {
        Self {
            name,
            declared,
            value,
        }
    }

    /// An integer property.
    #[must_use]
    pub fn int(name: &'static str, value: impl Into<i64>) -> Self {
        Self::new(name, TypeTag::Int, Value::Int(value.into()))
    }

    /// A floating-point property.
    #[must_use]
    pub fn float(name: &'static str, value: impl Into<f64>) -> Self {
        Self::new(name, TypeTag::Float, Value::Float(value.into()))
    }

    /// A text property.
    ///
    /// Accepts either a borrowed `&str` or an owned `String`, so computed
    /// representations do not need to outlive the call.
    #[must_use]
    pub fn text(name: &'static str, value: impl Into<Cow<'a, str>>) -> Self {
        Self::new(name, TypeTag::Text, Value::Text(value.into()))
    }

    /// A nullable text property.
    ///
    /// `None` renders as `null` while keeping the declared type, so rules
    /// bound to text still see the field.
    #[must_use]
    pub const fn text_opt(name: &'static str, value: Option<&'a str>) -> Self {
        let value = match value {
            Some(s) => Value::Text(Cow::Borrowed(s)),
            None => Value::Null,
        };
        Self::new(name, TypeTag::Text, value)
    }

    /// A point-in-time property.
    #[must_use]
    pub const fn timestamp(name: &'static str, value: DateTime<Utc>) -> Self {
        Self::new(name, TypeTag::Timestamp, Value::Timestamp(value))
    }

    /// A duration property.
    #[must_use]
    pub const fn span(name: &'static str, value: TimeDelta) -> Self {
        Self::new(name, TypeTag::Span, Value::Span(value))
    }

    /// A nested composite property.
    #[must_use]
    pub fn nested<T: Inspect>(name: &'static str, value: &'a T) -> Self {
        Self::new(name, TypeTag::of::<T>(), Value::Composite(value))
    }

    /// A nullable nested composite property.
    ///
    /// `None` renders as `null` while keeping the declared type, so
    /// type-level exclusion still removes the field.
    #[must_use]
    pub fn nested_opt<T: Inspect>(name: &'static str, value: Option<&'a T>) -> Self {
        let declared = TypeTag::of::<T>();
        match value {
            Some(obj) => Self::new(name, declared, Value::Composite(obj)),
            None => Self::new(name, declared, Value::Null),
        }
    }

    /// The unqualified property name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The declared type of the property.
    #[must_use]
    pub const fn declared(&self) -> TypeTag {
        self.declared
    }

    /// The current value of the property.
    #[must_use]
    pub const fn value(&self) -> &Value<'a> {
        &self.value
    }
}
