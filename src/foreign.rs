//! The bridge between the binding and the host's dynamic values.
//!
//! The binding never talks to the browser directly. Everything it needs from the host is expressed
//! through the [ForeignValue] trait: reading a property, calling a method with a list of [Arg]s and
//! coercing a value to one of a handful of primitive types. [wasm_bindgen::JsValue] implements it
//! for real browsers (see the `js` module); the [mock](crate::mock) module provides an in-memory
//! host that records every call.

use std::fmt;

use crate::attributes::ContextAttributes;

/// A dynamically typed value owned by the host environment.
///
/// Coercions never fail: a value that does not have the requested type coerces to `false`, `0` or
/// the empty string, mirroring how the host's own conversions treat such values.
pub trait ForeignValue: Clone + fmt::Debug + Sized {
    /// Whether this value is the host's `null`.
    fn is_null(&self) -> bool;

    /// Whether this value is the host's `undefined`.
    fn is_undefined(&self) -> bool;

    /// Whether this value is either `null` or `undefined`.
    fn is_nullish(&self) -> bool {
        self.is_null() || self.is_undefined()
    }

    /// Reads the property with the given `name`. Returns an undefined value if the property does
    /// not exist or this value cannot have properties.
    fn get(&self, name: &str) -> Self;

    /// Invokes the method with the given `name` on this value, passing `args` in order, and
    /// returns the method's result.
    fn call(&self, method: &str, args: &[Arg<Self>]) -> Self;

    fn as_bool(&self) -> bool;

    fn as_f64(&self) -> f64;

    fn as_string(&self) -> String;

    /// The reported length of a sequence value.
    fn length(&self) -> usize {
        let length = self.get("length").as_f64();

        if length.is_finite() && length > 0.0 {
            length as usize
        } else {
            0
        }
    }

    /// The element at `index` of a sequence value.
    fn index(&self, index: usize) -> Self;

    fn as_i32(&self) -> i32 {
        self.as_f64() as i32
    }

    fn as_u32(&self) -> u32 {
        self.as_f64() as u32
    }

    fn as_i64(&self) -> i64 {
        self.as_f64() as i64
    }
}

/// A single argument to a [ForeignValue::call].
///
/// The variants follow the WebGL IDL types: `UInt` carries `GLenum`, `GLbitfield` and `GLuint`
/// values, `Int` carries `GLint` and `GLsizei`, `Long` carries `GLintptr` and `GLsizeiptr`.
#[derive(Clone, Debug)]
pub enum Arg<'a, V> {
    Null,
    Bool(bool),
    Int(i32),
    UInt(u32),
    Long(i64),
    Float(f64),
    Str(&'a str),
    Value(&'a V),
    Array(ArrayView<'a>),
    Attributes(&'a ContextAttributes),
}

impl<'a, V> Arg<'a, V> {
    /// Wraps an optional foreign value, mapping `None` to [Arg::Null].
    pub fn nullable(value: Option<&'a V>) -> Self {
        match value {
            Some(value) => Arg::Value(value),
            None => Arg::Null,
        }
    }
}

/// A borrowed view on a typed numeric slice, handed to the host as the matching typed array.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ArrayView<'a> {
    I8(&'a [i8]),
    U8(&'a [u8]),
    I16(&'a [i16]),
    U16(&'a [u16]),
    I32(&'a [i32]),
    U32(&'a [u32]),
    F32(&'a [f32]),
}

impl<'a> ArrayView<'a> {
    /// The number of elements in the view.
    pub fn len(&self) -> usize {
        match self {
            ArrayView::I8(data) => data.len(),
            ArrayView::U8(data) => data.len(),
            ArrayView::I16(data) => data.len(),
            ArrayView::U16(data) => data.len(),
            ArrayView::I32(data) => data.len(),
            ArrayView::U32(data) => data.len(),
            ArrayView::F32(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The size of the viewed data in bytes.
    pub fn byte_len(&self) -> usize {
        let element_size = match self {
            ArrayView::I8(_) | ArrayView::U8(_) => 1,
            ArrayView::I16(_) | ArrayView::U16(_) => 2,
            ArrayView::I32(_) | ArrayView::U32(_) | ArrayView::F32(_) => 4,
        };

        self.len() * element_size
    }
}

macro_rules! impl_array_view_from {
    ($($element:ty => $variant:ident),*) => {
        $(
            impl<'a> From<&'a [$element]> for ArrayView<'a> {
                fn from(data: &'a [$element]) -> Self {
                    ArrayView::$variant(data)
                }
            }

            impl<'a> From<&'a Vec<$element>> for ArrayView<'a> {
                fn from(data: &'a Vec<$element>) -> Self {
                    ArrayView::$variant(data.as_slice())
                }
            }
        )*
    }
}

impl_array_view_from!(i8 => I8, u8 => U8, i16 => I16, u16 => U16, i32 => I32, u32 => U32, f32 => F32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_view_lengths() {
        let floats = [1.0f32, 2.0, 3.0];
        let shorts = vec![1u16, 2];

        let view: ArrayView = (&floats[..]).into();

        assert_eq!(view.len(), 3);
        assert_eq!(view.byte_len(), 12);

        let view: ArrayView = (&shorts).into();

        assert_eq!(view.len(), 2);
        assert_eq!(view.byte_len(), 4);
        assert!(!view.is_empty());
    }

    #[test]
    fn test_nullable_arg() {
        let value = 7u8;

        assert!(match Arg::nullable(Some(&value)) {
            Arg::Value(v) => *v == 7,
            _ => false,
        });
        assert!(match Arg::<u8>::nullable(None) {
            Arg::Null => true,
            _ => false,
        });
    }
}
