//! Field registration
//!
//! Three ways to populate the registry, all ending in the same validation:
//!
//! 1. [`register_field`]: one explicit call per field
//! 2. [`TypeRegistration`]: a builder committing several fields at once
//! 3. [`QueryParams`] + [`register`]: a type describes its own fields and
//!    the description is applied exactly once per process
//!
//! ```ignore
//! use urlquery_registry::{register, QueryParams, TypeRegistration};
//! use urlquery_core::{field_accessor, Converter};
//!
//! impl QueryParams for SearchQuery {
//!     fn describe(fields: &mut TypeRegistration<Self>) {
//!         fields
//!             .field("start_time", field_accessor!(SearchQuery, start_time))
//!             .converter(Converter::IsoDate)
//!             .key("stTm");
//!         fields
//!             .field("page_number", field_accessor!(SearchQuery, page_number))
//!             .converter(Converter::Int);
//!     }
//! }
//!
//! register::<SearchQuery>()?;
//! ```

use crate::registry::{append, is_described};
use urlquery_core::{
    Converter, Error, FieldAccessor, FieldMetadata, ParamConfiguration, Result,
};

/// Types that describe their own query fields
pub trait QueryParams: Sized + 'static {
    /// Declare every field of `Self` on `fields`
    fn describe(fields: &mut TypeRegistration<Self>);
}

/// Apply `T::describe` to the registry, once per process
///
/// Later calls return `Ok(())` without touching the registry.
///
/// # Errors
///
/// Returns the first configuration error found in the description. In that
/// case no field of the description is registered.
pub fn register<T: QueryParams>() -> Result<()> {
    if is_described::<T>() {
        return Ok(());
    }
    let mut registration = TypeRegistration::new();
    T::describe(&mut registration);
    let batch = registration.resolve()?;
    append(batch, true)
}

/// Register a single field of `T`
///
/// `config` defaults: external key = `field_name`, read-only = `false`.
///
/// # Errors
///
/// - [`Error::MissingConverter`] if `converter` is `None`
/// - [`Error::EmptyExternalKey`] if the resolved key is empty
/// - [`Error::DuplicateField`] / [`Error::DuplicateExternalKey`] on collision
pub fn register_field<T: 'static>(
    field_name: &str,
    converter: Option<Converter>,
    config: Option<ParamConfiguration>,
    accessor: FieldAccessor<T>,
) -> Result<()> {
    let pending = PendingField {
        field_name: field_name.to_string(),
        converter,
        config: config.unwrap_or_default(),
        accessor,
    };
    append(vec![pending.resolve()?], false)
}

/// A field declared but not yet validated
struct PendingField<T> {
    field_name: String,
    converter: Option<Converter>,
    config: ParamConfiguration,
    accessor: FieldAccessor<T>,
}

impl<T> PendingField<T> {
    fn resolve(self) -> Result<FieldMetadata<T>> {
        let external_key = self.config.resolved_key(&self.field_name).to_string();
        let read_only = self.config.resolved_read_only();

        let Some(converter) = self.converter else {
            return Err(Error::MissingConverter { key: external_key });
        };
        if external_key.is_empty() {
            return Err(Error::EmptyExternalKey {
                field: self.field_name,
            });
        }

        Ok(FieldMetadata::new(
            self.field_name,
            external_key,
            read_only,
            converter,
            self.accessor,
        ))
    }
}

/// Builder collecting the fields of one type
pub struct TypeRegistration<T> {
    pending: Vec<PendingField<T>>,
}

impl<T: 'static> TypeRegistration<T> {
    /// Create an empty registration
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Declare a field; configure it through the returned builder
    pub fn field(&mut self, field_name: &str, accessor: FieldAccessor<T>) -> FieldBuilder<'_, T> {
        self.pending.push(PendingField {
            field_name: field_name.to_string(),
            converter: None,
            config: ParamConfiguration::default(),
            accessor,
        });
        let index = self.pending.len() - 1;
        FieldBuilder {
            pending: &mut self.pending[index],
        }
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if no field has been declared
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Validate and append every declared field to the registry
    ///
    /// # Errors
    ///
    /// Same as [`register_field`]. Nothing is registered on error.
    pub fn register(self) -> Result<()> {
        let batch = self.resolve()?;
        append(batch, false)
    }

    fn resolve(self) -> Result<Vec<FieldMetadata<T>>> {
        self.pending.into_iter().map(PendingField::resolve).collect()
    }
}

impl<T: 'static> Default for TypeRegistration<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Options of one declared field
pub struct FieldBuilder<'a, T> {
    pending: &'a mut PendingField<T>,
}

impl<'a, T> FieldBuilder<'a, T> {
    /// Select the converter (required)
    pub fn converter(self, converter: Converter) -> Self {
        self.pending.converter = Some(converter);
        self
    }

    /// Set the external key
    pub fn key(self, key: impl Into<String>) -> Self {
        self.pending.config.external_key = Some(key.into());
        self
    }

    /// Mark the field read-only
    pub fn read_only(self) -> Self {
        self.pending.config.read_only = Some(true);
        self
    }

    /// Replace both options with a configuration value
    pub fn config(self, config: ParamConfiguration) -> Self {
        self.pending.config = config;
        self
    }
}
