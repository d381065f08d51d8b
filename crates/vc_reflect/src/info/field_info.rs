// -----------------------------------------------------------------------------
// FieldInfo

/// Information for a struct field.
///
/// A field is exported when it is declared `pub`.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     pub field_a: f32,
///     field_b: u8,
/// }
///
/// let foo = Foo { field_a: 1.0, field_b: 2 };
/// let infos = foo.field_infos();
///
/// assert_eq!(infos[0].name(), "field_a");
/// assert!(infos[0].is_exported());
/// assert!(!infos[1].is_exported());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldInfo {
    name: &'static str,
    exported: bool,
}

impl FieldInfo {
    /// Creates a new [`FieldInfo`].
    #[inline]
    pub const fn new(name: &'static str, exported: bool) -> Self {
        Self { name, exported }
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if the field is visible outside its defining module.
    #[inline]
    pub const fn is_exported(&self) -> bool {
        self.exported
    }
}
