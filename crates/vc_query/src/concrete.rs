use alloc::format;

use vc_reflect::Reflect;
use vc_reflect::ops::ReflectRef;

use crate::QueryError;

/// The deepest indirection layer [`concretize`] unwraps, counted from zero.
pub const MAX_DEPTH: usize = 10;

/// Strips pointer-like and dynamic layers from `value`.
///
/// Returns `Ok(None)` when a layer is nil. A value nested in more than
/// `MAX_DEPTH + 1` layers fails with [`ErrorCode::NotFound`].
///
/// # Examples
///
/// ```
/// use vc_query::concrete::concretize;
/// use vc_reflect::Reflect;
///
/// let value: Option<Box<i32>> = Some(Box::new(3));
/// let inner = concretize(&value).unwrap().unwrap();
/// assert_eq!(inner.downcast_ref::<i32>(), Some(&3));
///
/// let nil: Option<Box<i32>> = None;
/// assert!(concretize(&nil).unwrap().is_none());
/// ```
///
/// [`ErrorCode::NotFound`]: crate::ErrorCode::NotFound
pub fn concretize(value: &dyn Reflect) -> Result<Option<&dyn Reflect>, QueryError> {
    let mut current = value;
    let mut depth = 0;

    loop {
        let inner = match current.reflect_ref() {
            ReflectRef::Pointer(inner) | ReflectRef::Dynamic(inner) => inner,
            _ => return Ok(Some(current)),
        };

        if depth > MAX_DEPTH {
            log::debug!(
                "concretize gave up on `{}` after {depth} layers",
                value.reflect_type_name()
            );
            return Err(QueryError::not_found(format!(
                "get concrete elem exceed max depth {depth}"
            )));
        }

        match inner {
            Some(inner) => current = inner,
            None => return Ok(None),
        }
        depth += 1;
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::sync::Arc;

    use vc_reflect::Reflect;

    use super::concretize;

    fn nest(layers: usize) -> Box<dyn Reflect> {
        let mut value: Box<dyn Reflect> = Box::new(7_u8);
        for _ in 0..layers {
            value = Box::new(Some(value));
        }
        value
    }

    #[test]
    fn unwraps_mixed_layers() {
        let value = Some(Arc::new(Box::new(String::from("x")) as Box<dyn Reflect>));
        let inner = concretize(&value).unwrap().unwrap();
        assert_eq!(inner.downcast_ref::<String>().unwrap(), "x");

        let plain = 5_i64;
        let same = concretize(&plain).unwrap().unwrap();
        assert_eq!(same.downcast_ref::<i64>(), Some(&5));
    }

    #[test]
    fn nil_layers() {
        let value: Option<Box<dyn Reflect>> = None;
        assert!(concretize(&value).unwrap().is_none());

        let json = serde_json::Value::Null;
        assert!(concretize(&json).unwrap().is_none());
    }

    #[test]
    fn depth_cap() {
        // `nest(n)` puts `2n` indirect layers above the `u8`.
        let shallow = nest(5);
        assert!(concretize(&*shallow).unwrap().is_some());

        let deep = nest(6);
        let error = concretize(&*deep).unwrap_err();
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "QueryError[1]: get concrete elem exceed max depth 11");
    }
}
