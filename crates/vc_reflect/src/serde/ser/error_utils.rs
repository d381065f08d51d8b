use core::fmt::Display;
use serde_core::ser::Error;

/// A helper function for generating a custom serialization error message.
#[inline]
pub(super) fn make_custom_error<E: Error>(msg: impl Display) -> E {
    E::custom(msg)
}
