//! Index and filter keys on lists and arrays.
//!
//! A key containing `=` is a filter `attr=literal`: the first element whose
//! `attr` renders as `literal` is selected, an empty `attr` compares the
//! element itself. Any other key is an index: `first`, `last`, or an integer
//! where negative values count from the end.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use vc_reflect::Reflect;
use vc_reflect::ops::{Array, List};

use crate::coerce::to_text;
use crate::concrete::concretize;
use crate::path::KeyList;
use crate::resolve::resolve;
use crate::{QueryError, QueryOptions};

// -----------------------------------------------------------------------------
// Sequence

/// A list or an array.
#[derive(Clone, Copy)]
pub enum Sequence<'a> {
    List(&'a dyn List),
    Array(&'a dyn Array),
}

impl<'a> Sequence<'a> {
    #[inline]
    pub fn len(self) -> usize {
        match self {
            Self::List(list) => list.len(),
            Self::Array(array) => array.len(),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn get(self, index: usize) -> Option<&'a dyn Reflect> {
        match self {
            Self::List(list) => list.get(index),
            Self::Array(array) => array.get(index),
        }
    }

    #[inline]
    pub fn iter(self) -> impl Iterator<Item = &'a dyn Reflect> {
        (0..self.len()).map_while(move |index| self.get(index))
    }
}

// -----------------------------------------------------------------------------
// Navigation

/// Resolves `key`, then `remain`, against `sequence`.
pub fn navigate<'a>(
    sequence: Sequence<'a>,
    key: &str,
    remain: &[String],
    options: QueryOptions,
) -> Result<&'a dyn Reflect, QueryError> {
    match key.split_once('=') {
        Some((attr, literal)) => filter(sequence, key, attr, literal, remain, options),
        None => index(sequence, key, remain, options),
    }
}

fn filter<'a>(
    sequence: Sequence<'a>,
    key: &str,
    attr: &str,
    literal: &str,
    remain: &[String],
    options: QueryOptions,
) -> Result<&'a dyn Reflect, QueryError> {
    let attr_keys = if attr.is_empty() {
        Vec::new()
    } else {
        vec![attr.to_string()]
    };

    for (position, element) in sequence.iter().enumerate() {
        let attr_value = match resolve(element, &attr_keys, options).and_then(concretize) {
            Ok(attr_value) => attr_value,
            Err(error) => {
                log::trace!("[slice filter] skip elem {position}: {error}");
                continue;
            }
        };

        if to_text(attr_value) != literal {
            continue;
        }

        match resolve(element, remain, options) {
            Ok(found) => return Ok(found),
            Err(error) => log::trace!("[slice filter] skip elem {position}: {error}"),
        }
    }

    Err(QueryError::not_found(format!(
        "[slice filter] no elem by key: {key}"
    )))
}

fn index<'a>(
    sequence: Sequence<'a>,
    key: &str,
    remain: &[String],
    options: QueryOptions,
) -> Result<&'a dyn Reflect, QueryError> {
    let len = sequence.len() as i64;

    let key: Cow<'_, str> = if key.eq_ignore_ascii_case("first") {
        Cow::Borrowed("0")
    } else if key.eq_ignore_ascii_case("last") {
        Cow::Owned((len - 1).to_string())
    } else {
        Cow::Borrowed(key)
    };
    let invalid = || QueryError::not_found(format!("[slice] invalid key: {key}"));

    let index = key
        .parse::<i64>()
        .map_err(|error| invalid().with_cause(error))?;
    if index >= len || index < -len {
        return Err(invalid());
    }

    let index = if index < 0 { len + index } else { index };
    let element = sequence.get(index as usize).ok_or_else(invalid)?;

    log::trace!("[slice] descend into elem {index}");
    resolve(element, remain, options)
        .map_err(|error| error.wrap(format!("[slice] query keys: {}", KeyList(remain))))
}

// -----------------------------------------------------------------------------
// Tests
