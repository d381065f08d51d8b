use crate::impls::impl_scalar_reflect;
use crate::scalar::Scalar;

impl_scalar_reflect! {
    &'static str => |v| Scalar::Str(*v),
}
