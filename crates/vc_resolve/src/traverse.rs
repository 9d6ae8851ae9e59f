use vc_reflect::Reflect;
use vc_reflect::ops::ReflectRef;

use crate::{ResolveError, ResolvePath};

// -----------------------------------------------------------------------------
// Traversal

/// Walks the tokens of `path` starting at token `from`.
///
/// Before each token one [`Pointer`] layer is unwrapped, then the token is
/// applied according to the shape of the value:
///
/// - `List` / `Array`: the token is parsed as an `i64` index.
/// - `Struct`: the token is a field name.
/// - `Map`: the token is a key.
/// - anything else has no children.
///
/// The value selected by the last token is returned as is, so a final
/// `Option<T>` is returned as the option. With `from >= path.len()` the
/// input value is returned unchanged.
///
/// ```
/// use vc_resolve::{ResolvePath, traverse};
///
/// let value = vec![vec![1_u8, 2], vec![3]];
/// let path = ResolvePath::parse("values[0][1]").unwrap();
///
/// let found = traverse(&value, &path, 1).unwrap();
/// assert_eq!(found.downcast_ref::<u8>(), Some(&2));
/// ```
///
/// [`Pointer`]: vc_reflect::ops::Pointer
pub fn traverse<'r>(
    value: &'r dyn Reflect,
    path: &ResolvePath,
    from: usize,
) -> Result<&'r dyn Reflect, ResolveError> {
    let mut it = value;
    for (index, token) in path.tokens().enumerate().skip(from) {
        it = step(it, path, index, token)?;
    }
    Ok(it)
}

fn step<'r>(
    value: &'r dyn Reflect,
    path: &ResolvePath,
    index: usize,
    token: &str,
) -> Result<&'r dyn Reflect, ResolveError> {
    let value = match value.reflect_ref() {
        ReflectRef::Pointer(pointer) => match pointer.pointee() {
            Some(pointee) => pointee,
            None => {
                return Err(ResolveError::NilDereference {
                    type_path: value.reflect_type_path(),
                    field: token.into(),
                    remaining: path.remaining_after(index).map(Into::into),
                });
            }
        },
        _ => value,
    };

    let found = match value.reflect_ref() {
        ReflectRef::List(list) => list.get(parse_index(token, list.len())?),
        ReflectRef::Array(array) => array.get(parse_index(token, array.len())?),
        ReflectRef::Struct(fields) => fields.field(token),
        ReflectRef::Map(map) => map.get(token),
        // Nested indirections are not collapsed.
        ReflectRef::Pointer(_) | ReflectRef::Opaque(_) => None,
    };

    found.ok_or_else(|| ResolveError::FieldNotFound {
        type_path: value.reflect_type_path(),
        field: token.into(),
        remaining: path.remaining_after(index).map(Into::into),
    })
}

fn parse_index(token: &str, len: usize) -> Result<usize, ResolveError> {
    let index: i64 = token
        .parse()
        .map_err(|_| ResolveError::InvalidIndex {
            token: token.into(),
        })?;

    match usize::try_from(index) {
        Ok(at) if at < len => Ok(at),
        _ => Err(ResolveError::IndexOutOfRange { index, len }),
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use vc_reflect::Reflect;
    use vc_reflect::ops::DynamicStruct;

    use super::{parse_index, traverse};
    use crate::fixtures::{Person, family};
    use crate::{ResolveError, ResolvePath};

    fn walk<'r>(value: &'r dyn Reflect, path: &str) -> Result<&'r dyn Reflect, ResolveError> {
        traverse(value, &ResolvePath::parse(path).unwrap(), 1)
    }

    #[test]
    fn index_parsing() {
        assert_eq!(parse_index("0", 1), Ok(0));
        assert_eq!(parse_index("+2", 3), Ok(2));
        assert_eq!(parse_index("007", 8), Ok(7));
        assert_eq!(
            parse_index("-1", 3),
            Err(ResolveError::IndexOutOfRange { index: -1, len: 3 })
        );
        assert_eq!(
            parse_index("3", 3),
            Err(ResolveError::IndexOutOfRange { index: 3, len: 3 })
        );
        for token in ["", "x", "1.5", "99999999999999999999"] {
            assert_eq!(
                parse_index(token, 3),
                Err(ResolveError::InvalidIndex {
                    token: token.into()
                })
            );
        }
    }

    #[test]
    fn sequences() {
        let list = vec![10_i32, 20, 30];
        let array = [1_u8, 2];

        assert_eq!(walk(&list, "x[2]").unwrap().downcast_ref::<i32>(), Some(&30));
        assert_eq!(walk(&array, "x.1").unwrap().downcast_ref::<u8>(), Some(&2));
        assert_eq!(
            walk(&list, "x[asd]").unwrap_err(),
            ResolveError::InvalidIndex {
                token: "asd".into()
            }
        );
        assert_eq!(
            walk(&array, "x[100]").unwrap_err(),
            ResolveError::IndexOutOfRange { index: 100, len: 2 }
        );
    }

    #[test]
    fn from_past_the_end_returns_input() {
        let value = 5_u8;
        let path = ResolvePath::parse("a.b").unwrap();
        assert_eq!(traverse(&value, &path, 2).unwrap().downcast_ref::<u8>(), Some(&5));
        assert_eq!(traverse(&value, &path, 9).unwrap().downcast_ref::<u8>(), Some(&5));
    }

    #[test]
    fn records_and_maps() {
        let mut inner = DynamicStruct::with_type_path("Inner");
        inner.insert("tags", vec![String::from("a"), String::from("b")]);

        let mut outer = DynamicStruct::with_type_path("Outer");
        outer.insert("inner", inner);

        let found = walk(&outer, "x.inner.tags[1]").unwrap();
        assert_eq!(found.downcast_ref::<String>().map(String::as_str), Some("b"));

        let err = walk(&outer, "x.inner.missing.deeper.still").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Inner does not have field missing: deeper.still left to resolve"
        );
    }

    #[test]
    fn opaque_has_no_fields() {
        let value = String::from("somevalue");
        assert_eq!(
            walk(&value, "user.username.somevalue2").unwrap_err(),
            ResolveError::FieldNotFound {
                type_path: "alloc::string::String",
                field: "username".into(),
                remaining: Some("somevalue2".into()),
            }
        );
    }

    #[test]
    fn empty_inner_token_never_matches() {
        let value = vec![1_u8];
        assert!(matches!(
            walk(&value, "x..0"),
            Err(ResolveError::InvalidIndex { .. })
        ));
    }

    #[test]
    fn one_pointer_layer_per_step() {
        let user = family();

        let name = walk(&user, "user.parents[0].parents[0].parent.name").unwrap();
        assert_eq!(
            name.downcast_ref::<Option<String>>().unwrap().as_deref(),
            Some("first person name")
        );

        // The final value is returned without unwrapping.
        let parent = walk(&user, "user.parent").unwrap();
        assert!(parent.is::<Option<Box<Person>>>());

        let nested = Some(Some(Box::new(Person::default())));
        let err = walk(&nested, "x.name").unwrap_err();
        assert!(matches!(
            err,
            ResolveError::FieldNotFound { type_path, .. } if type_path.starts_with("core::option::Option<")
        ));
    }

    #[test]
    fn null_pointer_is_an_error() {
        let user = family();

        let err = walk(&user, "user.parent.parent.name").unwrap_err();
        assert!(matches!(
            &err,
            ResolveError::NilDereference { field, remaining, .. }
                if field == "name" && remaining.is_none()
        ));
        assert!(err.to_string().ends_with("to resolve field name: nothing left to resolve"));

        let values: Vec<Option<u8>> = vec![None];
        let err = walk(&values, "x.0.y.z").unwrap_err();
        assert!(matches!(
            err,
            ResolveError::NilDereference { field, remaining: Some(rest), .. }
                if field == "y" && rest == "z"
        ));
    }
}
