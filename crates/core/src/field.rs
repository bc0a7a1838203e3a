//! Typed field access
//!
//! The registry never inspects a struct at runtime. Instead each registered
//! field carries a [`FieldAccessor`]: a getter/setter pair focused on one
//! struct field (a lens), erased to work on [`FieldValue`].
//!
//! The concrete Rust type of the field decides how it maps onto a
//! [`FieldValue`] through [`FieldType`]. `Option<X>` fields model "absent":
//! `None` is never written to the URL.
//!
//! # Examples
//!
//! ```
//! use urlquery_core::{field_accessor, FieldValue, IntValue};
//!
//! #[derive(Default)]
//! struct Query { page: IntValue }
//!
//! let accessor = field_accessor!(Query, page);
//! let mut query = Query::default();
//! assert!(accessor.write(&mut query, FieldValue::Int(IntValue::Num(3))));
//! assert_eq!(query.page, IntValue::Num(3));
//! ```

use crate::value::{FieldValue, IntValue};
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// Rust types that can back a registered field
pub trait FieldType: Sized {
    /// Current value, or `None` if the field holds no value
    fn to_field_value(&self) -> Option<FieldValue>;

    /// Convert a decoded value, or `None` if it does not fit this type
    fn from_field_value(value: FieldValue) -> Option<Self>;
}

impl FieldType for String {
    fn to_field_value(&self) -> Option<FieldValue> {
        Some(FieldValue::String(self.clone()))
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl FieldType for IntValue {
    fn to_field_value(&self) -> Option<FieldValue> {
        Some(FieldValue::Int(*self))
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Int(n) => Some(n),
            _ => None,
        }
    }
}

/// Plain integers cannot hold the NaN sentinel; a NaN decode does not fit.
impl FieldType for i64 {
    fn to_field_value(&self) -> Option<FieldValue> {
        Some(FieldValue::Int(IntValue::Num(*self)))
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Int(IntValue::Num(n)) => Some(n),
            _ => None,
        }
    }
}

impl FieldType for bool {
    fn to_field_value(&self) -> Option<FieldValue> {
        Some(FieldValue::Bool(*self))
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl FieldType for DateTime<Utc> {
    fn to_field_value(&self) -> Option<FieldValue> {
        Some(FieldValue::Date(*self))
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Date(d) => Some(d),
            _ => None,
        }
    }
}

impl FieldType for Vec<IntValue> {
    fn to_field_value(&self) -> Option<FieldValue> {
        Some(FieldValue::IntArray(self.clone()))
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::IntArray(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldType for Vec<String> {
    fn to_field_value(&self) -> Option<FieldValue> {
        Some(FieldValue::StringArray(self.clone()))
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::StringArray(v) => Some(v),
            _ => None,
        }
    }
}

impl<X: FieldType> FieldType for Option<X> {
    fn to_field_value(&self) -> Option<FieldValue> {
        self.as_ref().and_then(X::to_field_value)
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        X::from_field_value(value).map(Some)
    }
}

type Getter<T> = dyn Fn(&T) -> Option<FieldValue> + Send + Sync;
type Setter<T> = dyn Fn(&mut T, FieldValue) -> bool + Send + Sync;

/// Type-erased getter/setter for one field of `T`
pub struct FieldAccessor<T> {
    value_type: &'static str,
    get: Arc<Getter<T>>,
    set: Arc<Setter<T>>,
}

impl<T: 'static> FieldAccessor<T> {
    /// Build an accessor from a pair of projections onto a typed field
    ///
    /// Prefer the [`field_accessor!`](crate::field_accessor) macro for plain
    /// struct fields.
    pub fn new<F, G, M>(getter: G, getter_mut: M) -> Self
    where
        F: FieldType + 'static,
        G: Fn(&T) -> &F + Send + Sync + 'static,
        M: Fn(&mut T) -> &mut F + Send + Sync + 'static,
    {
        Self {
            value_type: std::any::type_name::<F>(),
            get: Arc::new(move |instance: &T| getter(instance).to_field_value()),
            set: Arc::new(move |instance: &mut T, value: FieldValue| {
                match F::from_field_value(value) {
                    Some(v) => {
                        *getter_mut(instance) = v;
                        true
                    }
                    None => false,
                }
            }),
        }
    }

    /// Build an accessor from raw read/write functions
    ///
    /// `write` returns `false` when it did not store the value.
    pub fn from_fns<R, W>(value_type: &'static str, read: R, write: W) -> Self
    where
        R: Fn(&T) -> Option<FieldValue> + Send + Sync + 'static,
        W: Fn(&mut T, FieldValue) -> bool + Send + Sync + 'static,
    {
        Self {
            value_type,
            get: Arc::new(read),
            set: Arc::new(write),
        }
    }
}

impl<T> FieldAccessor<T> {
    /// Read the field's current value
    pub fn read(&self, instance: &T) -> Option<FieldValue> {
        (self.get)(instance)
    }

    /// Store a decoded value; returns `false` if the value does not fit
    pub fn write(&self, instance: &mut T, value: FieldValue) -> bool {
        (self.set)(instance, value)
    }

    /// Rust type name of the backing field
    pub fn value_type(&self) -> &'static str {
        self.value_type
    }
}

impl<T> Clone for FieldAccessor<T> {
    fn clone(&self) -> Self {
        Self {
            value_type: self.value_type,
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
        }
    }
}

impl<T> fmt::Debug for FieldAccessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("value_type", &self.value_type)
            .finish()
    }
}

/// Create a [`FieldAccessor`] for a named struct field
///
/// ```
/// use urlquery_core::field_accessor;
///
/// #[derive(Default)]
/// struct Query { title: Option<String> }
///
/// let accessor = field_accessor!(Query, title);
/// assert!(accessor.read(&Query::default()).is_none());
/// ```
#[macro_export]
macro_rules! field_accessor {
    ($struct_type:ident, $field:ident) => {
        $crate::field::FieldAccessor::new(
            |source: &$struct_type| &source.$field,
            |source: &mut $struct_type| &mut source.$field,
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::field::FieldAccessor::new(
            |source: &$struct_type| &source.$field,
            |source: &mut $struct_type| &mut source.$field,
        )
    };
}
