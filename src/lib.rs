//! Configurable object-to-text printing.
//!
//! Walks an object graph and produces a deterministic, indented,
//! human-readable dump, with per-type and per-property overrides for
//! exclusion, custom rendering, locale-aware numeric formatting, and string
//! truncation. Intended for diagnostic and log representations of domain
//! objects without hand-written `Display` logic for every type.
//!
//! Types opt in by implementing [`Inspect`], which lists their properties in
//! a stable order; the printer walks those descriptors recursively.
//!
//! ```
//! use oprint::{Field, Inspect, Printer};
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl Inspect for Person {
//!     fn type_name(&self) -> &'static str {
//!         "Person"
//!     }
//!
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::text("Name", self.name.as_str()),
//!             Field::int("Age", self.age),
//!         ]
//!     }
//! }
//!
//! let printer = Printer::builder().truncate_property("Name", 3).build();
//! let person = Person {
//!     name: "Alexandra".to_string(),
//!     age: 19,
//! };
//! let output = printer.print(&person)?;
//! assert_eq!(output, "Person\n\tName = Ale\n\tAge = 19\n");
//! # Ok::<(), oprint::Error>(())
//! ```

/// Locale descriptors for numeric formatting.
pub mod locale;
pub use locale::Locale;

/// The printing engine, configuration builder, and error type.
pub mod printer;
pub use printer::{Error, LINE_END, PrintToString, Printer, PrinterBuilder};

/// Rule tables and the typed renderer registry.
pub mod rules;
pub use rules::ValueRenderer;

/// The value model: [`Inspect`], fields, and type tags.
pub mod value;
pub use value::{Field, Inspect, TypeTag, Value};
