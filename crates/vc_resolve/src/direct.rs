use vc_reflect::Reflect;
use vc_reflect::ops::ReflectKind;

use crate::{ResolveError, ResolvePath, traverse};

// -----------------------------------------------------------------------------
// Stateless resolution

/// Resolves `path` inside `value` without a registry.
///
/// If `value` is a map the whole path is looked up in it, so the first
/// token is a key. Otherwise the first token only names `value` and is
/// skipped; a single-token path returns `value` itself.
///
/// # Errors
///
/// See [`ResolveError`]. [`ResolveError::RootNotFound`] is never returned.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_resolve::direct_resolve;
///
/// let mut user = BTreeMap::new();
/// user.insert("name".to_string(), "Ada");
///
/// let name = direct_resolve(&user, "name").unwrap();
/// assert_eq!(name.downcast_ref::<&str>(), Some(&"Ada"));
///
/// let ages = vec![36_u8];
/// let age = direct_resolve(&ages, "ages[0]").unwrap();
/// assert_eq!(age.downcast_ref::<u8>(), Some(&36));
/// ```
#[inline]
pub fn direct_resolve<'r>(
    value: &'r dyn Reflect,
    path: &str,
) -> Result<&'r dyn Reflect, ResolveError> {
    resolve_parsed(value, &ResolvePath::parse(path)?)
}

#[inline(never)]
pub(crate) fn resolve_parsed<'r>(
    value: &'r dyn Reflect,
    path: &ResolvePath,
) -> Result<&'r dyn Reflect, ResolveError> {
    let from = match value.reflect_kind() {
        ReflectKind::Map => 0,
        _ => 1,
    };
    traverse(value, path, from)
}

/// Downcasts a resolved value, reporting both type names on failure.
pub(crate) fn downcast<T: Reflect>(value: &dyn Reflect) -> Result<&T, ResolveError> {
    value
        .downcast_ref::<T>()
        .ok_or_else(|| ResolveError::TypeMismatch {
            expected: core::any::type_name::<T>(),
            actual: value.reflect_type_path(),
        })
}

// -----------------------------------------------------------------------------
// ReflectResolve

/// Method form of [`direct_resolve`].
///
/// Implemented for every [`Reflect`] type and for `dyn Reflect`. The path
/// is parsed on every call; parse once with [`ResolvePath`] and use
/// [`ResolvePath::resolve_in`] to reuse it.
///
/// # Examples
///
/// ```
/// use vc_resolve::{ReflectResolve, ResolveError};
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Clone)]
/// struct Point {
///     pub x: f32,
///     pub y: f32,
/// }
///
/// let point = Point { x: 1.0, y: 2.0 };
///
/// assert_eq!(point.direct_resolve_as::<f32>("point.y"), Ok(&2.0));
/// assert!(matches!(
///     point.direct_resolve_as::<f64>("point.y"),
///     Err(ResolveError::TypeMismatch { expected: "f64", actual: "f32" })
/// ));
/// ```
pub trait ReflectResolve {
    /// Returns a reference to the value at `path`.
    ///
    /// See [`ReflectResolve`].
    fn direct_resolve(&self, path: &str) -> Result<&dyn Reflect, ResolveError>;

    /// Returns a typed reference to the value at `path`.
    ///
    /// # Errors
    ///
    /// [`ResolveError::TypeMismatch`] if the value is not a `T`.
    fn direct_resolve_as<T: Reflect>(&self, path: &str) -> Result<&T, ResolveError>;
}

impl ReflectResolve for dyn Reflect {
    #[inline]
    fn direct_resolve(&self, path: &str) -> Result<&dyn Reflect, ResolveError> {
        direct_resolve(self, path)
    }

    #[inline]
    fn direct_resolve_as<T: Reflect>(&self, path: &str) -> Result<&T, ResolveError> {
        downcast(direct_resolve(self, path)?)
    }
}

impl<R: Reflect> ReflectResolve for R {
    #[inline]
    fn direct_resolve(&self, path: &str) -> Result<&dyn Reflect, ResolveError> {
        direct_resolve(self, path)
    }

    #[inline]
    fn direct_resolve_as<T: Reflect>(&self, path: &str) -> Result<&T, ResolveError> {
        downcast(direct_resolve(self, path)?)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use alloc::{format, vec};

    use vc_reflect::Reflect;
    use vc_reflect::derive::Reflect;

    use super::direct_resolve;
    use crate::fixtures::{FIRST, Person, SECOND, family};
    use crate::{ReflectResolve, ResolveError, ResolvePath};

    type Args = BTreeMap<String, Box<dyn Reflect>>;

    #[derive(Reflect, Clone)]
    #[reflect(type_path = "Named")]
    struct Named {
        pub name: String,
    }

    #[derive(Reflect, Clone)]
    struct User<T> {
        pub info: T,
    }

    #[derive(Reflect, Clone)]
    struct Info<T> {
        pub age: T,
    }

    #[derive(Reflect, Clone)]
    struct Parents {
        pub parents: Vec<Named>,
    }

    fn root(name: &str, value: impl Reflect) -> Args {
        BTreeMap::from([(String::from(name), value.into_boxed_reflect())])
    }

    fn named(name: &str) -> Named {
        Named { name: name.into() }
    }

    #[test]
    fn simple_values() {
        let cases: Vec<(&str, Args, &str)> = vec![
            ("user", root("user", String::from("value")), r#""value""#),
            ("user[0]", root("user", vec![1_i32, 2]), "1"),
            ("user.name", root("user", named("userName")), r#""userName""#),
            ("user.info.age", root("user", User { info: Info { age: 12_i32 } }), "12"),
            (
                "user.info.age[2]",
                root("user", User { info: Info { age: vec![1_i32, 2, 3] } }),
                "3",
            ),
            (
                "user.info.parents[0].name",
                root("user", User {
                    info: Parents {
                        parents: vec![named("someone1"), named("someone2")],
                    },
                }),
                r#""someone1""#,
            ),
            ("user.name", root("user", root("name", String::from("somename"))), r#""somename""#),
            (
                "user.name.value",
                root("user", root("name", root("value", String::from("somename")))),
                r#""somename""#,
            ),
            (
                "user.name.value[0]",
                root("user", root("name", root("value", vec![1_i32, 2, 3]))),
                "1",
            ),
            (
                "user.name.value[0].name",
                root("user", root("name", root("value", vec![named("string")]))),
                r#""string""#,
            ),
        ];

        for (path, args, expected) in &cases {
            let value = direct_resolve(args, path).unwrap();
            assert_eq!(format!("{value:?}"), *expected, "{path}");

            let value = args.direct_resolve(path).unwrap();
            assert_eq!(format!("{value:?}"), *expected, "{path}");
        }
    }

    #[test]
    fn map_root_keeps_first_token() {
        let args = root("user", named("somename"));

        let err = direct_resolve(&args, "name").unwrap_err();
        assert!(matches!(err, ResolveError::FieldNotFound { field, .. } if field == "name"));

        // A struct root skips it instead.
        let user = named("somename");
        assert!(direct_resolve(&user, "anything.name").is_ok());
        assert!(direct_resolve(&user, "anything").unwrap().is::<Named>());
    }

    #[test]
    fn empty_inner_token_is_a_map_key() {
        let args = root("a", root("", 7_i32));
        assert_eq!(args.direct_resolve_as::<i32>("a."), Ok(&7));
        assert_eq!(args.direct_resolve_as::<i32>("a[]"), Ok(&7));

        let err = direct_resolve(&named("x"), "user..name").unwrap_err();
        assert_eq!(
            err,
            ResolveError::FieldNotFound {
                type_path: "Named",
                field: String::new(),
                remaining: Some("name".into()),
            }
        );
    }

    #[test]
    fn errors() {
        let err = direct_resolve(&named("somename"), "user.firstname").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Named does not have field firstname: nothing left to resolve"
        );

        let err = direct_resolve(&named("somename"), "user.name.somevalue2").unwrap_err();
        assert_eq!(
            err.to_string(),
            "alloc::string::String does not have field somevalue2: nothing left to resolve"
        );

        let args = root("user", root("name", root("value", String::from("somename"))));
        let err = direct_resolve(&args, "user.nonexisting.value").unwrap_err();
        assert!(
            err.to_string()
                .ends_with(" does not have field nonexisting: value left to resolve")
        );

        for path in ["", ".user"] {
            let err = direct_resolve(&args, path).unwrap_err();
            assert_eq!(err, ResolveError::EmptyExpression);
        }
    }

    #[test]
    fn pointers() {
        let user = family();
        let cases = [
            ("user.name", FIRST),
            ("user.parent.name", SECOND),
            ("user.parents[0].name", SECOND),
            ("user.parents[0].parent.name", FIRST),
            ("user.parents[0].parents[0].parent.name", FIRST),
            ("user.parents[0].parents[0].name", SECOND),
        ];

        for (path, expected) in cases {
            let name = user.direct_resolve_as::<Option<String>>(path).unwrap();
            assert_eq!(name.as_deref(), Some(expected), "{path}");
        }
    }

    #[test]
    fn json() {
        let json: serde_json::Value = serde_json::from_str(
            r#"{"meta":{"has_more":false,"count":1},"resources":[{"status":"completed","document_paths":[{"path":"/doc/1","type":"PDF"},{"path":"/doc/1?document_type=XML","type":"XML"}]}]}"#,
        )
        .unwrap();

        let value = json
            .direct_resolve_as::<serde_json::Value>("resources[0].document_paths[1].type")
            .unwrap();
        assert_eq!(value.as_str(), Some("XML"));

        let count = json.direct_resolve_as::<serde_json::Value>("meta.count").unwrap();
        assert_eq!(count.as_u64(), Some(1));

        let err = json.direct_resolve("resources[0].status.code").unwrap_err();
        assert_eq!(
            err,
            ResolveError::FieldNotFound {
                type_path: "serde_json::Value",
                field: "code".into(),
                remaining: None,
            }
        );
    }

    #[test]
    fn dyn_receiver_and_parsed_path() {
        let user = family();
        let user: &dyn Reflect = &user;

        let name = user.direct_resolve_as::<Option<String>>("user.parent.name").unwrap();
        assert_eq!(name.as_deref(), Some(SECOND));

        let path = ResolvePath::parse("user.parents[0].parent").unwrap();
        let parent = path.resolve_in(user).unwrap();
        assert!(parent.is::<Option<Box<Person>>>());

        let err = user.direct_resolve_as::<String>("user.name").unwrap_err();
        assert!(matches!(
            err,
            ResolveError::TypeMismatch { expected: "alloc::string::String", actual }
                if actual.starts_with("core::option::Option<")
        ));
    }
}
