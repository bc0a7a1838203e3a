//! Process-wide type registry
//!
//! Maps a Rust type to the ordered list of its registered [`FieldMetadata`].
//! An entry is created lazily by the first registration for a type, grows by
//! appending, and is never removed. It describes the type, not any instance.
//!
//! ## Concurrency
//!
//! Registration is expected to finish during startup, before any codec call
//! for the type. The lock only guards against concurrent first use; readers
//! get a shared snapshot (`Arc`) and never hold the lock while converting.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::any::{type_name, Any, TypeId};
use std::sync::Arc;
use tracing::{debug, info};
use urlquery_core::{Error, FieldMetadata, Result};

/// Ordered field descriptors of one type
pub type FieldList<T> = Arc<Vec<FieldMetadata<T>>>;

/// Registry entry for one type
struct TypeEntry {
    /// Rust type name, for logging and errors
    type_name: &'static str,
    /// Set once `QueryParams::describe` has been applied
    described: bool,
    /// `FieldList<T>` for the entry's `T`
    fields: Box<dyn Any + Send + Sync>,
}

impl TypeEntry {
    fn new<T: 'static>() -> Self {
        let fields: FieldList<T> = Arc::new(Vec::new());
        Self {
            type_name: type_name::<T>(),
            described: false,
            fields: Box::new(fields),
        }
    }

    fn fields<T: 'static>(&self) -> Option<&FieldList<T>> {
        self.fields.downcast_ref::<FieldList<T>>()
    }
}

/// Global registry of field descriptors (type -> fields)
///
/// Uses lazy initialization with a RwLock for thread-safe access.
static TYPE_REGISTRY: Lazy<RwLock<FxHashMap<TypeId, TypeEntry>>> =
    Lazy::new(|| RwLock::new(FxHashMap::default()));

/// Get the registered fields of `T`, in registration order
///
/// Returns an empty list for a type with no registered fields.
pub fn fields<T: 'static>() -> FieldList<T> {
    let registry = TYPE_REGISTRY.read();
    registry
        .get(&TypeId::of::<T>())
        .and_then(TypeEntry::fields::<T>)
        .cloned()
        .unwrap_or_default()
}

/// Check whether `T` has at least one registered field
pub fn is_registered<T: 'static>() -> bool {
    let registry = TYPE_REGISTRY.read();
    registry
        .get(&TypeId::of::<T>())
        .and_then(TypeEntry::fields::<T>)
        .is_some_and(|fields| !fields.is_empty())
}

/// Check whether `QueryParams::describe` has already run for `T`
pub(crate) fn is_described<T: 'static>() -> bool {
    let registry = TYPE_REGISTRY.read();
    registry
        .get(&TypeId::of::<T>())
        .is_some_and(|entry| entry.described)
}

/// Append validated fields to `T`'s entry
///
/// All-or-nothing: if any field collides with an existing one (or with an
/// earlier field in `batch`), nothing is appended. With `describe` set the
/// entry is marked described, and a second described commit is a no-op.
pub(crate) fn append<T: 'static>(batch: Vec<FieldMetadata<T>>, describe: bool) -> Result<()> {
    let mut registry = TYPE_REGISTRY.write();
    let entry = registry.entry(TypeId::of::<T>()).or_insert_with(|| {
        debug!(target: "urlquery::registry", type_name = type_name::<T>(), "Created type entry");
        TypeEntry::new::<T>()
    });

    if describe && entry.described {
        return Ok(());
    }

    let type_name = entry.type_name;
    let mut fields: FieldList<T> = entry.fields::<T>().cloned().unwrap_or_default();

    for (i, candidate) in batch.iter().enumerate() {
        let earlier = fields.iter().chain(batch[..i].iter());
        check_unique(type_name, earlier, candidate)?;
    }

    let added = batch.len();
    let list = Arc::make_mut(&mut fields);
    for meta in batch {
        debug!(
            target: "urlquery::registry",
            type_name,
            field = %meta.field_name,
            key = %meta.external_key,
            converter = %meta.converter,
            read_only = meta.read_only,
            "Registered field"
        );
        list.push(meta);
    }
    let total = list.len();
    entry.fields = Box::new(fields);

    if describe {
        entry.described = true;
    }

    info!(
        target: "urlquery::registry",
        type_name,
        added,
        total,
        "Registered query fields"
    );
    Ok(())
}

fn check_unique<'a, T: 'a>(
    type_name: &'static str,
    existing: impl Iterator<Item = &'a FieldMetadata<T>>,
    candidate: &FieldMetadata<T>,
) -> Result<()> {
    for meta in existing {
        if meta.field_name == candidate.field_name {
            return Err(Error::DuplicateField {
                type_name,
                field: candidate.field_name.clone(),
            });
        }
        if meta.external_key == candidate.external_key {
            return Err(Error::DuplicateExternalKey {
                type_name,
                key: candidate.external_key.clone(),
            });
        }
    }
    Ok(())
}
