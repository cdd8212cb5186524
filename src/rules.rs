//! Rule tables consulted during traversal, and the typed renderer registry.

use std::{
    any::Any,
    collections::{HashMap, HashSet},
};

use chrono::{DateTime, TimeDelta, Utc};

use crate::{
    locale::Locale,
    value::{Inspect, TypeTag, Value},
};

/// A strongly-typed rendering function bound to one kind of value.
///
/// Renderers are constructed through the per-kind constructors, which fix the
/// expected input type at configuration time. Applying a renderer to a value
/// of a different runtime kind is a render-time error.
pub struct ValueRenderer {
    tag: TypeTag,
    imp: Imp,
}

enum Imp {
    Int(Box<dyn Fn(i64) -> String>),
    Float(Box<dyn Fn(f64) -> String>),
    Text(Box<dyn Fn(&str) -> String>),
    Timestamp(Box<dyn Fn(DateTime<Utc>) -> String>),
    Span(Box<dyn Fn(TimeDelta) -> String>),
    Nested(Box<dyn Fn(&dyn Inspect) -> Option<String>>),
}

impl ValueRenderer {
    /// A renderer for integer values.
    pub fn int(f: impl Fn(i64) -> String + 'static) -> Self {
        Self {
            tag: TypeTag::Int,
            imp: Imp::Int(Box::new(f)),
        }
    }

    /// A renderer for floating-point values.
    pub fn float(f: impl Fn(f64) -> String + 'static) -> Self {
        Self {
            tag: TypeTag::Float,
            imp: Imp::Float(Box::new(f)),
        }
    }

    /// A renderer for text values.
    pub fn text(f: impl Fn(&str) -> String + 'static) -> Self {
        Self {
            tag: TypeTag::Text,
            imp: Imp::Text(Box::new(f)),
        }
    }

    /// A renderer for point-in-time values.
    pub fn timestamp(f: impl Fn(DateTime<Utc>) -> String + 'static) -> Self {
        Self {
            tag: TypeTag::Timestamp,
            imp: Imp::Timestamp(Box::new(f)),
        }
    }

    /// A renderer for duration values.
    pub fn span(f: impl Fn(TimeDelta) -> String + 'static) -> Self {
        Self {
            tag: TypeTag::Span,
            imp: Imp::Span(Box::new(f)),
        }
    }

    /// A renderer for values of the composite type `T`.
    pub fn nested<T: Inspect>(f: impl Fn(&T) -> String + 'static) -> Self {
        let render = move |obj: &dyn Inspect| {
            let any: &dyn Any = obj;
            any.downcast_ref::<T>().map(|value| f(value))
        };
        Self {
            tag: TypeTag::of::<T>(),
            imp: Imp::Nested(Box::new(render)),
        }
    }

    /// The tag this renderer is keyed by when bound to a type.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Human-readable name of the input kind the renderer expects.
    #[must_use]
    pub const fn expects(&self) -> &'static str {
        match self.imp {
            Imp::Int(_) => "integer",
            Imp::Float(_) => "float",
            Imp::Text(_) => "text",
            Imp::Timestamp(_) => "timestamp",
            Imp::Span(_) => "span",
            Imp::Nested(_) => "composite",
        }
    }

    /// Applies the renderer, returning `None` when the runtime kind of
    /// `value` does not match the registered input type.
    pub(crate) fn apply(&self, value: &Value<'_>) -> Option<String> {
        match (&self.imp, value) {
            (Imp::Int(f), Value::Int(v)) => Some(f(*v)),
            (Imp::Float(f), Value::Float(v)) => Some(f(*v)),
            (Imp::Text(f), Value::Text(v)) => Some(f(v)),
            (Imp::Timestamp(f), Value::Timestamp(v)) => Some(f(*v)),
            (Imp::Span(f), Value::Span(v)) => Some(f(*v)),
            (Imp::Nested(f), Value::Composite(obj)) => f(*obj),
            _ => None,
        }
    }
}

/// The full collection of exclusion, renderer, locale, and truncation
/// bindings consulted during traversal.
///
/// Built incrementally by the configuration builder, then owned read-only by
/// exactly one printer. Name-keyed tables use the unqualified property name;
/// the same name on unrelated types shares its bindings.
#[derive(Default)]
pub(crate) struct RuleSet {
    pub(crate) excluded_types: HashSet<TypeTag>,
    pub(crate) excluded_properties: HashSet<String>,
    pub(crate) type_renderers: HashMap<TypeTag, ValueRenderer>,
    pub(crate) property_renderers: HashMap<String, ValueRenderer>,
    pub(crate) type_locales: HashMap<TypeTag, Locale>,
    pub(crate) truncation_lengths: HashMap<String, usize>,
}
