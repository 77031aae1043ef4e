//! Opaque handles to objects owned by the rendering context.
//!
//! A handle is nothing more than the foreign value the context returned when the object was
//! created. The binding keeps no identity, reference count or ownership record for it: deleting
//! the object is an explicit call, and a handle may outlive the object it refers to (any use is
//! then reported through [Context::get_error](crate::Context::get_error)).

use crate::foreign::ForeignValue;

macro_rules! handles {
    ($($(#[$meta:meta])* $name:ident;)*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, PartialEq, Debug)]
            pub struct $name<V> {
                value: V,
            }

            impl<V> $name<V>
            where
                V: ForeignValue,
            {
                /// Wraps a foreign value, returning `None` if it is `null` or `undefined`.
                pub fn from_foreign(value: V) -> Option<Self> {
                    if value.is_nullish() {
                        None
                    } else {
                        Some($name { value })
                    }
                }

                /// Wraps a foreign value as is, even if it is `null` or `undefined`.
                pub fn wrap(value: V) -> Self {
                    $name { value }
                }

                pub fn as_foreign(&self) -> &V {
                    &self.value
                }

                pub fn into_foreign(self) -> V {
                    self.value
                }
            }
        )*
    }
}

handles! {
    /// A `WebGLBuffer`.
    Buffer;
    /// A `WebGLTexture`.
    Texture;
    /// A `WebGLShader`.
    Shader;
    /// A `WebGLProgram`.
    Program;
    /// A `WebGLFramebuffer`.
    Framebuffer;
    /// A `WebGLRenderbuffer`.
    Renderbuffer;
    /// A `WebGLUniformLocation`, only meaningful for the program it was queried from.
    UniformLocation;
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::mock::MockValue;

    #[test]
    fn test_from_foreign_null() {
        assert!(Buffer::from_foreign(MockValue::null()).is_none());
        assert!(Texture::from_foreign(MockValue::undefined()).is_none());
    }

    #[test]
    fn test_from_foreign_object() {
        let value = MockValue::object();
        let program = Program::from_foreign(value.clone()).unwrap();

        assert!(program.as_foreign().ptr_eq(&value));
        assert!(program.into_foreign().ptr_eq(&value));
    }

    #[test]
    fn test_wrap_keeps_null() {
        let shader = Shader::wrap(MockValue::null());

        assert!(shader.as_foreign().is_null());
    }
}
