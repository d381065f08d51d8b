use crate::Reflect;
use crate::info::FieldInfo;

// -----------------------------------------------------------------------------
// Struct

/// A trait used to power [struct-like] operations via [reflection].
///
/// This trait uses the [`Reflect`] trait to allow implementors to have their
/// fields be dynamically addressed by both name and index.
///
/// When using [`#[derive(Reflect)]`](crate::derive::Reflect) on a standard
/// struct, this trait will be automatically implemented. Tuple structs expose
/// their fields under the names `0`, `1`, ...
///
/// # Example
///
/// ```
/// use vc_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     pub bar: u32,
/// }
///
/// let foo = Foo { bar: 123 };
///
/// assert_eq!(foo.field_len(), 1);
/// assert_eq!(foo.field_infos()[0].name(), "bar");
///
/// let field = foo.field_at(0).unwrap();
/// assert_eq!(field.downcast_ref::<u32>(), Some(&123));
/// ```
///
/// [struct-like]: https://doc.rust-lang.org/book/ch05-01-defining-structs.html
/// [reflection]: crate
pub trait Struct: Reflect {
    /// Returns a reference to the value of the field named `name` as a `&dyn Reflect`.
    ///
    /// Returns `None` if the field does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::{derive::Reflect, ops::Struct};
    /// #[derive(Reflect)]
    /// struct Foo{ a: i32, b: bool };
    ///
    /// let ts = Foo{ a: 1, b: true };
    ///
    /// assert!(ts.field("a").is_some());
    /// assert!(ts.field("c").is_none());
    /// ```
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns a reference to the value of the field with index `index` as a
    /// `&dyn Reflect`.
    ///
    /// Returns `None` if `index` is out of bounds.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of fields in the struct.
    fn field_len(&self) -> usize;

    /// Returns the declared fields, in declaration order.
    fn field_infos(&self) -> &'static [FieldInfo];

    /// Returns an iterator over the values of the struct's fields.
    ///
    /// The iterator yields references to each field in order,
    /// from index 0 to `field_len() - 1`.
    fn iter_fields(&self) -> StructFieldIter<'_>;

    /// Returns the [`FieldInfo`] of the field named `name`.
    #[inline]
    fn field_info(&self, name: &str) -> Option<&'static FieldInfo> {
        self.field_infos().iter().find(|info| info.name() == name)
    }

    /// Returns the name of the field with index `index`.
    #[inline]
    fn name_at(&self, index: usize) -> Option<&'static str> {
        self.field_infos().get(index).map(FieldInfo::name)
    }
}

impl dyn Struct {
    /// Returns a typed reference to the field at the given field name.
    ///
    /// Returns `None` if:
    /// - The field does not exist.
    /// - The field cannot be downcast to type `T`
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::{ops::Struct, derive::Reflect};
    /// #[derive(Reflect)]
    /// struct Foo{ a: i32, b: &'static str };
    ///
    /// let foo = Foo{ a: 10_i32, b: "hello" };
    /// let foo_ref: &dyn Struct = &foo;
    ///
    /// assert_eq!(foo_ref.field_as::<i32>("a"), Some(&10));
    /// assert_eq!(foo_ref.field_as::<&str>("b"), Some(&"hello"));
    /// assert_eq!(foo_ref.field_as::<i32>("c"), None);
    /// assert_eq!(foo_ref.field_as::<f64>("a"), None);
    /// ```
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the field values of a struct.
pub struct StructFieldIter<'a> {
    structure: &'a dyn Struct,
    index: usize,
}

impl StructFieldIter<'_> {
    /// Creates a new iterator for the given struct.
    #[inline(always)]
    pub const fn new(structure: &dyn Struct) -> StructFieldIter<'_> {
        StructFieldIter {
            structure,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.structure.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.structure.field_len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
