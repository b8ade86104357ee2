//! Foreign values: objects, callables and resource handles
//!
//! These are the inputs a caller may hand to a constructor that are not plain
//! data. They carry just enough behavior for coercion: a class name, an
//! optional string-conversion capability, and a descriptive handle name.

use crate::value::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Class name used for plain property bags
pub const STD_CLASS: &str = "stdClass";

/// Class name reported for callables
pub const CLOSURE_CLASS: &str = "Closure";

/// An object supplied by the host program
///
/// Implementors decide whether they can be turned into a string by
/// overriding [`ForeignObject::to_string_value`]. Objects that return `None`
/// are rejected by string coercion even in lenient mode.
pub trait ForeignObject: fmt::Debug + Send + Sync {
    /// Class name used in diagnostics and error messages
    fn class_name(&self) -> &str;

    /// String-conversion capability, `None` when the object has none
    fn to_string_value(&self) -> Option<String> {
        None
    }

    /// Public properties of the object
    fn properties(&self) -> BTreeMap<String, Value> {
        BTreeMap::new()
    }
}

/// Property bag without a string-conversion capability
#[derive(Debug, Clone, Default)]
pub struct PlainObject {
    class: Option<String>,
    properties: BTreeMap<String, Value>,
}

impl PlainObject {
    /// Empty `stdClass` object
    pub fn std_class() -> Self {
        Self::default()
    }

    /// Empty object of a named class
    pub fn with_class(class: impl Into<String>) -> Self {
        Self {
            class: Some(class.into()),
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style property assignment
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

impl ForeignObject for PlainObject {
    fn class_name(&self) -> &str {
        self.class.as_deref().unwrap_or(STD_CLASS)
    }

    fn properties(&self) -> BTreeMap<String, Value> {
        self.properties.clone()
    }
}

/// Object whose string conversion yields a fixed text
#[derive(Debug, Clone)]
pub struct Stringable {
    class: String,
    text: String,
}

impl Stringable {
    /// Create a stringable object of the given class
    pub fn new(class: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            text: text.into(),
        }
    }
}

impl ForeignObject for Stringable {
    fn class_name(&self) -> &str {
        &self.class
    }

    fn to_string_value(&self) -> Option<String> {
        Some(self.text.clone())
    }
}

type CallableFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A function value
///
/// Callables behave like objects of class `Closure` that have no string
/// conversion. Equality is by instance.
#[derive(Clone)]
pub struct Callable {
    func: Arc<CallableFn>,
}

impl Callable {
    /// Wrap a function
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// A callable that ignores its arguments and returns null
    pub fn noop() -> Self {
        Self::new(|_| Value::Null)
    }

    /// Class name reported in diagnostics
    pub fn class_name(&self) -> &'static str {
        CLOSURE_CLASS
    }

    /// Instance identity
    pub fn same_instance(&self, other: &Callable) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("class", &CLOSURE_CLASS)
            .finish_non_exhaustive()
    }
}

static NEXT_RESOURCE_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque handle to an external resource (file, stream, connection)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource {
    id: u64,
    kind: Cow<'static, str>,
}

impl Resource {
    /// Allocate a handle with a fresh process-wide id
    pub fn open(kind: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id: NEXT_RESOURCE_ID.fetch_add(1, Ordering::Relaxed),
            kind: kind.into(),
        }
    }

    /// Handle standing in for an anonymous temporary file
    pub fn temp_file() -> Self {
        Self::open("stream")
    }

    /// Handle with an explicit id
    pub fn with_id(id: u64, kind: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }

    /// Numeric id
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Resource kind, e.g. `stream`
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Descriptive name used when the handle is converted to a string
    pub fn descriptive_name(&self) -> String {
        format!("Resource id #{}", self.id)
    }
}
