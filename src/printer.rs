//! The recursive printing engine and its fluent configuration surface.

use std::marker::PhantomData;

use crate::{
    locale::Locale,
    rules::{RuleSet, ValueRenderer},
    value::{Field, Inspect, TypeTag, Value},
};

/// Line terminator appended after every rendered value and property line.
pub const LINE_END: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// One indentation unit per nesting level.
const INDENT: &str = "\t";

/// Errors that can occur while printing an object graph.
///
/// The engine performs no local recovery: the first failure aborts the call
/// and no partial string is returned.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A renderer was invoked with a value of a runtime kind it was not
    /// registered for.
    #[error("renderer bound to property '{property}' expects {expected}, got {actual}")]
    RendererMismatch {
        /// Name of the property whose rule failed.
        property: String,
        /// Kind of value the renderer was registered for.
        expected: &'static str,
        /// Runtime kind of the value it received.
        actual: &'static str,
    },

    /// A truncation rule was applied to a non-text value.
    #[error("truncation bound to property '{property}' applies to text, got {actual}")]
    TruncationTarget {
        /// Name of the property whose rule failed.
        property: String,
        /// Runtime kind of the value it received.
        actual: &'static str,
    },

    /// A locale was bound to a type whose values are not numeric.
    #[error("locale bound to property '{property}' cannot format {actual}")]
    LocaleUnsupported {
        /// Name of the property whose rule failed.
        property: String,
        /// Runtime kind of the value it received.
        actual: &'static str,
    },
}

/// An immutable, configured printing engine bound to the root type `T`.
///
/// Obtain one through [`Printer::builder`]; [`Printer::default`] is the
/// unconfigured printer. The rule set is frozen at construction, so a printer
/// can be shared and reused: printing the same unmutated object twice yields
/// identical strings.
pub struct Printer<T: Inspect> {
    rules: RuleSet,
    root: PhantomData<fn(&T)>,
}

impl<T: Inspect> Default for Printer<T> {
    fn default() -> Self {
        Self {
            rules: RuleSet::default(),
            root: PhantomData,
        }
    }
}

impl<T: Inspect> Printer<T> {
    /// Starts configuring a printer for the root type `T`.
    #[must_use]
    pub fn builder() -> PrinterBuilder<T> {
        PrinterBuilder {
            rules: RuleSet::default(),
            root: PhantomData,
        }
    }

    /// Renders `root` and, recursively, every non-excluded property reachable
    /// from it.
    ///
    /// # Errors
    ///
    /// Fails when a configured rule cannot be applied to the value it meets;
    /// see [`Error`]. No partial output is returned.
    pub fn print(&self, root: &T) -> Result<String, Error> {
        tracing::debug!(type_name = root.type_name(), "printing object graph");
        self.render(&Value::Composite(root), 0)
    }

    /// Renders a single [`Value`], terminal or composite, at depth zero.
    ///
    /// # Errors
    ///
    /// Fails when a configured rule cannot be applied; see [`Error`].
    pub fn print_value(&self, value: &Value<'_>) -> Result<String, Error> {
        self.render(value, 0)
    }

    /// Renders `value` at the given nesting depth.
    ///
    /// Terminal values bypass every rule table and render via their default
    /// textual form; only composites consult the rules, per property.
    fn render(&self, value: &Value<'_>, depth: usize) -> Result<String, Error> {
        let rendered = match value {
            Value::Null => format!("null{LINE_END}"),
            Value::Int(v) => format!("{v}{LINE_END}"),
            Value::Float(v) => format!("{v}{LINE_END}"),
            Value::Text(v) => format!("{v}{LINE_END}"),
            Value::Timestamp(v) => format!("{v}{LINE_END}"),
            Value::Span(v) => format!("{v}{LINE_END}"),
            Value::Composite(obj) => {
                let indent = INDENT.repeat(depth + 1);
                let mut out = String::from(obj.type_name());
                out.push_str(LINE_END);
                for field in obj.fields() {
                    if self.rules.excluded_types.contains(&field.declared()) {
                        tracing::trace!(property = field.name(), "skipped, declared type excluded");
                        continue;
                    }
                    if self.rules.excluded_properties.contains(field.name()) {
                        tracing::trace!(property = field.name(), "skipped, property excluded");
                        continue;
                    }
                    let value = self.resolve(&field, depth)?;
                    out.push_str(&indent);
                    out.push_str(field.name());
                    out.push_str(" = ");
                    out.push_str(&value);
                }
                out
            }
        };
        Ok(rendered)
    }

    /// Resolves one property's rendered value.
    ///
    /// Precedence, first match wins: type renderer, property renderer, type
    /// locale, truncation, then ordinary recursion. Only the final step
    /// recurses into composite structure.
    fn resolve(&self, field: &Field<'_>, depth: usize) -> Result<String, Error> {
        if let Some(renderer) = self.rules.type_renderers.get(&field.declared()) {
            tracing::trace!(property = field.name(), "type renderer applied");
            return apply_renderer(renderer, field);
        }
        if let Some(renderer) = self.rules.property_renderers.get(field.name()) {
            tracing::trace!(property = field.name(), "property renderer applied");
            return apply_renderer(renderer, field);
        }
        if let Some(locale) = self.rules.type_locales.get(&field.declared()) {
            tracing::trace!(property = field.name(), "locale formatting applied");
            let formatted =
                locale
                    .format(field.value())
                    .ok_or_else(|| Error::LocaleUnsupported {
                        property: field.name().to_string(),
                        actual: field.value().kind(),
                    })?;
            return Ok(format!("{formatted}{LINE_END}"));
        }
        if let Some(&length) = self.rules.truncation_lengths.get(field.name()) {
            tracing::trace!(property = field.name(), length, "truncation applied");
            let Value::Text(text) = field.value() else {
                return Err(Error::TruncationTarget {
                    property: field.name().to_string(),
                    actual: field.value().kind(),
                });
            };
            let prefix: String = text.chars().take(length).collect();
            return Ok(format!("{prefix}{LINE_END}"));
        }
        self.render(field.value(), depth + 1)
    }
}

fn apply_renderer(renderer: &ValueRenderer, field: &Field<'_>) -> Result<String, Error> {
    let rendered = renderer
        .apply(field.value())
        .ok_or_else(|| Error::RendererMismatch {
            property: field.name().to_string(),
            expected: renderer.expects(),
            actual: field.value().kind(),
        })?;
    Ok(format!("{rendered}{LINE_END}"))
}

/// Fluent accumulation of rules before the first print call.
///
/// The builder owns the rule set exclusively during configuration; each
/// operation consumes and returns it, and [`build`](Self::build) finalizes
/// the rules into an immutable [`Printer`] snapshot. Every binding overwrites
/// an earlier binding for the same key — last write wins, silently.
pub struct PrinterBuilder<T: Inspect> {
    rules: RuleSet,
    root: PhantomData<fn(&T)>,
}

impl<T: Inspect> PrinterBuilder<T> {
    /// Omits every property whose declared type matches `tag`, regardless of
    /// the property's name.
    #[must_use]
    pub fn exclude_type(mut self, tag: TypeTag) -> Self {
        self.rules.excluded_types.insert(tag);
        self
    }

    /// Omits every property with this unqualified name.
    ///
    /// Names are not qualified by the owning type: the same name on an
    /// unrelated nested type is excluded as well.
    #[must_use]
    pub fn exclude_property(mut self, name: impl Into<String>) -> Self {
        self.rules.excluded_properties.insert(name.into());
        self
    }

    /// Binds `renderer` to the type it was constructed for.
    ///
    /// Takes precedence over every other rule for properties of that type.
    #[must_use]
    pub fn render_type(mut self, renderer: ValueRenderer) -> Self {
        self.rules.type_renderers.insert(renderer.tag(), renderer);
        self
    }

    /// Binds `renderer` to every property with this unqualified name.
    #[must_use]
    pub fn render_property(mut self, name: impl Into<String>, renderer: ValueRenderer) -> Self {
        self.rules.property_renderers.insert(name.into(), renderer);
        self
    }

    /// Formats values of the type identified by `tag` with `locale` when no
    /// renderer takes precedence.
    #[must_use]
    pub fn locale_for(mut self, tag: TypeTag, locale: Locale) -> Self {
        self.rules.type_locales.insert(tag, locale);
        self
    }

    /// Truncates the text value of every property with this unqualified name
    /// to at most `length` characters.
    ///
    /// Values shorter than `length` are left untouched; no padding, no error.
    #[must_use]
    pub fn truncate_property(mut self, name: impl Into<String>, length: usize) -> Self {
        self.rules.truncation_lengths.insert(name.into(), length);
        self
    }

    /// Finalizes the configuration into an immutable printer.
    #[must_use]
    pub fn build(self) -> Printer<T> {
        Printer {
            rules: self.rules,
            root: PhantomData,
        }
    }

    /// Builds the printer and prints `root` in one step.
    ///
    /// # Errors
    ///
    /// See [`Printer::print`].
    pub fn print(self, root: &T) -> Result<String, Error> {
        self.build().print(root)
    }
}

/// Prints any [`Inspect`] value with a default or one-shot configuration.
///
/// Blanket-implemented for every sized [`Inspect`] type; glue over
/// [`Printer`] for callers that do not keep a configured printer around.
pub trait PrintToString: Inspect + Sized {
    /// Prints with an unconfigured printer.
    ///
    /// # Errors
    ///
    /// Never fails without configured rules; the `Result` keeps the signature
    /// uniform with configured printing.
    fn print_to_string(&self) -> Result<String, Error> {
        Printer::default().print(self)
    }

    /// Applies a one-shot configuration and prints.
    ///
    /// # Errors
    ///
    /// See [`Printer::print`].
    fn print_with<F>(&self, configure: F) -> Result<String, Error>
    where
        F: FnOnce(PrinterBuilder<Self>) -> PrinterBuilder<Self>,
    {
        configure(Printer::builder()).print(self)
    }
}

impl<T: Inspect> PrintToString for T {}
