use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The caller's parsed `Cargo.toml`, used to find how a workspace crate
/// is reachable from the code a proc-macro expands into.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. `name` is a key of `[dependencies]`: `::name`.
/// 2. A dependency is renamed from `name` (`alias = { package = "name" }`): `::alias`.
/// 3. `name` starts with `vc_` and the caller depends on the facade crate
///    `vc_path`: `::vc_path::short_name` (e.g. `vc_reflect` -> `::vc_path::reflect`).
/// 4. Steps 1-3 again for `[dev-dependencies]`.
/// 5. Otherwise `::name`.
///
/// A crate that expands its own derives (tests, doctests) should declare
/// `extern crate self as name;` so the fallback path resolves.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "vc_path";
const WORKSPACE_PREFIX: &str = "vc_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|dir| {
                let mut path = PathBuf::from(dir);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be defined by cargo.")
    }

    #[inline(never)]
    fn get_manifest_modified_time(path: &Path) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(text)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_path(path: &str) -> syn::Path {
        syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    fn renamed_from<'t>(deps: &'t Table, name: &str) -> Option<&'t str> {
        deps.iter().find_map(|(alias, item)| {
            let package = item.get("package")?.as_str()?;
            (package == name).then_some(alias)
        })
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }

        if let Some(alias) = Self::renamed_from(deps, name) {
            return Some(Self::parse_path(&format!("::{alias}")));
        }

        let module = name.strip_prefix(WORKSPACE_PREFIX)?;
        let facade = if deps.contains_key(FACADE_NAME) {
            FACADE_NAME
        } else {
            Self::renamed_from(deps, FACADE_NAME)?
        };

        Some(Self::parse_path(&format!("::{facade}::{module}")))
    }

    /// Returns the path under which the crate `name` is reachable from the
    /// caller. See the type documentation for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for section in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(section)
                && let Some(path) = Self::find_in_deps(deps, name)
            {
                return path;
            }
        }

        Self::parse_path(&format!("::{name}"))
    }

    /// Runs `func` with the caller's [`Manifest`].
    ///
    /// Manifests are cached per path and re-read when the file's modification
    /// time changes. Call this once per macro invocation and pass the resulting
    /// [`syn::Path`] around.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }
        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use std::time::SystemTime;
    use toml_edit::Document;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(Box::from(text)).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    fn path_str(path: syn::Path) -> String {
        path.segments
            .iter()
            .map(|seg| seg.ident.to_string())
            .collect::<Vec<_>>()
            .join("::")
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nvc_reflect = { path = \"../vc_reflect\" }\n");
        assert_eq!(path_str(m.get_crate_path("vc_reflect")), "vc_reflect");
    }

    #[test]
    fn renamed_dependency() {
        let m = manifest("[dependencies]\nreflect = { package = \"vc_reflect\", version = \"0.0.1\" }\n");
        assert_eq!(path_str(m.get_crate_path("vc_reflect")), "reflect");
    }

    #[test]
    fn through_facade() {
        let m = manifest("[dependencies]\nvc_path = \"0.0.1\"\n");
        assert_eq!(path_str(m.get_crate_path("vc_reflect")), "vc_path::reflect");
    }

    #[test]
    fn dev_dependencies_and_fallback() {
        let m = manifest("[dev-dependencies]\nvc_path = \"0.0.1\"\n");
        assert_eq!(path_str(m.get_crate_path("vc_reflect")), "vc_path::reflect");

        let m = manifest("[dependencies]\nserde = \"1\"\n");
        assert_eq!(path_str(m.get_crate_path("vc_reflect")), "vc_reflect");
    }
}
