use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use parking_lot::Mutex;
use vc_reflect::Reflect;

use crate::direct::downcast;
use crate::{ResolveError, ResolvePath, traverse};

// -----------------------------------------------------------------------------
// Resolver

/// A registry of named root values that paths are resolved against.
///
/// The first token of a path selects a root by name; the remaining tokens
/// are walked with [`traverse`]. Each call holds an internal lock for its
/// whole duration, so a `Resolver` can be shared between threads and the
/// latest [`add_value`](Resolver::add_value) is always observed.
///
/// # Examples
///
/// ```
/// use vc_resolve::Resolver;
///
/// let resolver = Resolver::new();
/// resolver.add_value("user", vec![String::from("a"), String::from("b")]);
///
/// let value = resolver.resolve_as::<String>("user[1]").unwrap();
/// assert_eq!(value, "b");
///
/// let err = resolver.resolve("admin.name").unwrap_err();
/// assert_eq!(err.to_string(), "could not resolve admin.name: admin was not found");
/// ```
#[derive(Default)]
pub struct Resolver {
    roots: Mutex<HashMap<String, Box<dyn Reflect>>>,
}

impl Resolver {
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `roots`.
    ///
    /// Later entries replace earlier ones with the same name.
    pub fn with_roots<N, I>(roots: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Box<dyn Reflect>)>,
    {
        let map = roots
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect();
        Self {
            roots: Mutex::new(map),
        }
    }

    /// Registers `value` as the root `name`, returning the replaced root.
    #[inline]
    pub fn add_value(
        &self,
        name: impl Into<String>,
        value: impl Reflect,
    ) -> Option<Box<dyn Reflect>> {
        self.add_boxed(name, Box::new(value))
    }

    /// Registers a boxed `value` as the root `name`, returning the replaced root.
    pub fn add_boxed(
        &self,
        name: impl Into<String>,
        value: Box<dyn Reflect>,
    ) -> Option<Box<dyn Reflect>> {
        let mut roots = self.roots.lock();
        match roots.entry(name.into()) {
            Entry::Occupied(mut entry) => {
                log::debug!("replaced root `{}`", entry.key());
                Some(entry.insert(value))
            }
            Entry::Vacant(entry) => {
                entry.insert(value);
                None
            }
        }
    }

    /// Resolves `path` and returns a clone of the value it points to.
    ///
    /// The clone is deep: resolving into a large aggregate copies all of it.
    /// Use [`resolve_with`](Resolver::resolve_with) to read the value in
    /// place, or register the root as an `Arc<T>` so that resolving the root
    /// itself only clones the handle.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use vc_resolve::Resolver;
    ///
    /// let resolver = Resolver::new();
    /// resolver.add_value("rows", Arc::new(vec![1_u64; 4096]));
    ///
    /// let len = resolver
    ///     .resolve_with("rows", |rows| rows.reflect_ref().as_list().map(|l| l.len()))
    ///     .unwrap();
    /// assert_eq!(len, Some(4096));
    ///
    /// let handle = resolver.resolve_as::<Arc<Vec<u64>>>("rows").unwrap();
    /// assert_eq!(handle.len(), 4096);
    /// ```
    ///
    /// # Errors
    ///
    /// See [`ResolveError`].
    #[inline]
    pub fn resolve(&self, path: &str) -> Result<Box<dyn Reflect>, ResolveError> {
        self.resolve_with(path, |value| value.reflect_clone())
    }

    /// Resolves `path` and returns a clone of the value as a `T`.
    ///
    /// # Errors
    ///
    /// [`ResolveError::TypeMismatch`] if the value is not a `T`, otherwise
    /// see [`ResolveError`].
    pub fn resolve_as<T: Reflect + Clone>(&self, path: &str) -> Result<T, ResolveError> {
        self.resolve_with(path, |value| downcast::<T>(value).cloned())?
    }

    /// Resolves `path` and passes the value to `f` without cloning it.
    ///
    /// `f` runs while the registry is locked and must not call back into
    /// this resolver.
    ///
    /// ```
    /// use vc_resolve::Resolver;
    ///
    /// let resolver = Resolver::new();
    /// resolver.add_value("sizes", vec![3_usize, 4, 5]);
    ///
    /// let kind = resolver.resolve_with("sizes", |v| v.reflect_kind()).unwrap();
    /// assert_eq!(kind.to_string(), "list");
    /// ```
    ///
    /// # Errors
    ///
    /// See [`ResolveError`].
    #[inline]
    pub fn resolve_with<R>(
        &self,
        path: &str,
        f: impl FnOnce(&dyn Reflect) -> R,
    ) -> Result<R, ResolveError> {
        self.resolve_path_with(&ResolvePath::parse(path)?, f)
    }

    /// [`resolve`](Self::resolve) with a pre-parsed path.
    ///
    /// # Errors
    ///
    /// See [`ResolveError`].
    #[inline]
    pub fn resolve_path(&self, path: &ResolvePath) -> Result<Box<dyn Reflect>, ResolveError> {
        self.resolve_path_with(path, |value| value.reflect_clone())
    }

    /// [`resolve_with`](Self::resolve_with) with a pre-parsed path.
    ///
    /// # Errors
    ///
    /// See [`ResolveError`].
    pub fn resolve_path_with<R>(
        &self,
        path: &ResolvePath,
        f: impl FnOnce(&dyn Reflect) -> R,
    ) -> Result<R, ResolveError> {
        let roots = self.roots.lock();

        let Some(root) = roots.get(path.root()) else {
            log::trace!("`{path}`: root not registered");
            return Err(ResolveError::RootNotFound {
                path: path.as_str().into(),
                root: path.root().into(),
            });
        };

        match traverse(&**root, path, 1) {
            Ok(value) => Ok(f(value)),
            Err(err) => {
                log::trace!("`{path}`: {err}");
                Err(err)
            }
        }
    }

    /// Returns `true` if a root named `name` is registered.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.roots.lock().contains_key(name)
    }

    /// Returns the number of registered roots.
    #[inline]
    pub fn len(&self) -> usize {
        self.roots.lock().len()
    }

    /// Returns `true` if no root is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roots.lock().is_empty()
    }

    /// Returns the names of the registered roots, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.roots.lock().keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl<N: Into<String>> FromIterator<(N, Box<dyn Reflect>)> for Resolver {
    #[inline]
    fn from_iter<I: IntoIterator<Item = (N, Box<dyn Reflect>)>>(iter: I) -> Self {
        Self::with_roots(iter)
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roots = self.roots.lock();
        f.debug_map()
            .entries(roots.iter().map(|(name, value)| (name, &**value)))
            .finish()
    }
}
