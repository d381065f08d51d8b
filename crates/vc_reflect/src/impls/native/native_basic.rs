use crate::impls::impl_scalar_reflect;
use crate::scalar::{Complex32, Complex64, Scalar};

impl_scalar_reflect! {
    bool => |v| Scalar::Bool(*v),
    char => |v| Scalar::Char(*v),
    i8 => |v| Scalar::Int(*v as i64),
    i16 => |v| Scalar::Int(*v as i64),
    i32 => |v| Scalar::Int(*v as i64),
    i64 => |v| Scalar::Int(*v),
    isize => |v| Scalar::Int(*v as i64),
    u8 => |v| Scalar::Uint(*v as u64),
    u16 => |v| Scalar::Uint(*v as u64),
    u32 => |v| Scalar::Uint(*v as u64),
    u64 => |v| Scalar::Uint(*v),
    usize => |v| Scalar::Uint(*v as u64),
    f32 => |v| Scalar::Float(*v as f64),
    f64 => |v| Scalar::Float(*v),
    Complex32 => |v| Scalar::Complex(Complex64::from(*v)),
    Complex64 => |v| Scalar::Complex(*v),
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::ReflectKind;
    use crate::scalar::Scalar;

    #[test]
    fn widened_views() {
        assert_eq!((-3_i8).reflect_ref().as_scalar(), Some(Scalar::Int(-3)));
        assert_eq!(300_u16.reflect_ref().as_scalar(), Some(Scalar::Uint(300)));
        assert_eq!(0.5_f32.reflect_ref().as_scalar(), Some(Scalar::Float(0.5)));
        assert_eq!('x'.reflect_kind(), ReflectKind::Scalar);
    }
}
