use alloc::string::String;

use crate::impls::impl_scalar_reflect;
use crate::scalar::Scalar;

impl_scalar_reflect! {
    String => |v| Scalar::Str(v.as_str()),
}
