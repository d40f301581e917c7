//! Type compatibility between requested and concrete artifact types.
//!
//! A module declaration asks for a logical type (`ejb-client`, `war`, ...)
//! while the artifact set carries concrete packaging types. Whether one
//! satisfies the other is decided by the caller's [`TypeMapping`]; the
//! resolver only consults it.

use std::sync::Arc;

/// Answers whether a requested type is satisfied by a concrete artifact type.
///
/// Implementations must be pure: the resolver may call them any number of
/// times, from several threads, and expects the same answer every time.
pub trait TypeMapping: Send + Sync {
    fn is_mapped_to_type(&self, requested_type: &str, concrete_type: &str) -> bool;
}

/// Accepts a concrete type only when it equals the requested type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExactTypeMapping;

impl TypeMapping for ExactTypeMapping {
    fn is_mapped_to_type(&self, requested_type: &str, concrete_type: &str) -> bool {
        requested_type == concrete_type
    }
}

/// Type mapping backed by a function, see [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnTypeMapping<F>(F);

/// Wrap a `(requested, concrete) -> bool` function as a [`TypeMapping`].
pub fn from_fn<F>(f: F) -> FnTypeMapping<F>
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    FnTypeMapping(f)
}

impl<F> TypeMapping for FnTypeMapping<F>
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn is_mapped_to_type(&self, requested_type: &str, concrete_type: &str) -> bool {
        (self.0)(requested_type, concrete_type)
    }
}

impl<F> std::fmt::Debug for FnTypeMapping<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnTypeMapping")
    }
}

impl<T: TypeMapping + ?Sized> TypeMapping for Arc<T> {
    fn is_mapped_to_type(&self, requested_type: &str, concrete_type: &str) -> bool {
        (**self).is_mapped_to_type(requested_type, concrete_type)
    }
}
