//! Declarative object selection.
//!
//! A selection is built from a [`Field`] token obtained from an object type
//! and turned into an [`Expr`] with one of the comparison, nullity or
//! membership builders. Expressions combine with [`Expr::and`] / [`Expr::or`]
//! (or `&` / `|`) and are evaluated against a single object:
//!
//! ```
//! use celestial_chart::models::Dso;
//! use celestial_chart::select::Selectable;
//!
//! let bright_or_unknown = Dso::attr("magnitude").is_null() | Dso::attr("magnitude").le(8.0);
//! let messier = Dso::attr("name").is_in(["NGC1976", "NGC0224"]);
//! let filters = vec![bright_or_unknown & messier];
//! # let _ = filters;
//! ```
//!
//! Evaluation distinguishes two situations that look alike at first:
//!
//! - the attribute exists on the type but is null on the instance: value
//!   predicates are `false`, `is_null` is `true`;
//! - the attribute does not exist on the type at all: evaluation fails with
//!   [`Error::UnknownAttribute`](crate::Error::UnknownAttribute).

mod expr;
mod value;

pub use expr::{evaluate_all, find, CompareOp, Expr};
pub use value::Value;

use std::fmt;
use std::marker::PhantomData;

use crate::error::Result;

/// An object type whose attributes can be referenced by selection
/// expressions.
pub trait Selectable {
    /// Type name used in error messages.
    const KIND: &'static str;

    /// Looks up `attribute` on this object.
    ///
    /// Returns `Ok(None)` when the attribute exists but is null, and
    /// [`Error::UnknownAttribute`](crate::Error::UnknownAttribute) when the
    /// type has no such attribute.
    fn value(&self, attribute: &str) -> Result<Option<Value>>;

    /// Field accessor token for `name`. The name is not checked until the
    /// expression is evaluated.
    fn attr(name: &str) -> Field<Self>
    where
        Self: Sized,
    {
        Field::new(name)
    }
}

/// A named attribute of object type `T`.
pub struct Field<T> {
    name: String,
    _object: PhantomData<fn() -> T>,
}

impl<T> Field<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            _object: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn compare(self, op: CompareOp, value: impl Into<Value>) -> Expr<T> {
        Expr::Compare {
            field: self,
            op,
            value: value.into(),
        }
    }

    pub fn lt(self, value: impl Into<Value>) -> Expr<T> {
        self.compare(CompareOp::Lt, value)
    }

    pub fn le(self, value: impl Into<Value>) -> Expr<T> {
        self.compare(CompareOp::Le, value)
    }

    pub fn gt(self, value: impl Into<Value>) -> Expr<T> {
        self.compare(CompareOp::Gt, value)
    }

    pub fn ge(self, value: impl Into<Value>) -> Expr<T> {
        self.compare(CompareOp::Ge, value)
    }

    pub fn equals(self, value: impl Into<Value>) -> Expr<T> {
        self.compare(CompareOp::Eq, value)
    }

    pub fn not_equals(self, value: impl Into<Value>) -> Expr<T> {
        self.compare(CompareOp::Ne, value)
    }

    pub fn is_null(self) -> Expr<T> {
        Expr::Null {
            field: self,
            negated: false,
        }
    }

    pub fn is_not_null(self) -> Expr<T> {
        Expr::Null {
            field: self,
            negated: true,
        }
    }

    pub fn is_in<I, V>(self, values: I) -> Expr<T>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Expr::Membership {
            field: self,
            values: values.into_iter().map(Into::into).collect(),
            negated: false,
        }
    }

    pub fn is_not_in<I, V>(self, values: I) -> Expr<T>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Expr::Membership {
            field: self,
            values: values.into_iter().map(Into::into).collect(),
            negated: true,
        }
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self::new(self.name.clone())
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.name).finish()
    }
}

impl<T> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
