use crate::constants::GLenum;
use crate::foreign::{Arg, ArrayView, ForeignValue};
use crate::handle::UniformLocation;

use super::Context;

macro_rules! uniform_scalars {
    ($($(#[$meta:meta])* $name:ident, $method:expr, $arg:ident, $t:ty, [$($component:ident),*];)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&self, location: Option<&UniformLocation<V>>, $($component: $t),*) {
                self.call(
                    $method,
                    &[
                        Arg::nullable(location.map(|l| l.as_foreign())),
                        $(Arg::$arg($component.into())),*
                    ],
                );
            }
        )*
    }
}

macro_rules! uniform_vectors {
    ($($name:ident, $method:expr, $t:ty, $view:ident;)*) => {
        $(
            pub fn $name(&self, location: Option<&UniformLocation<V>>, values: &[$t]) {
                self.call(
                    $method,
                    &[
                        Arg::nullable(location.map(|l| l.as_foreign())),
                        Arg::Array(ArrayView::$view(values)),
                    ],
                );
            }
        )*
    }
}

macro_rules! uniform_matrices {
    ($($name:ident, $method:expr;)*) => {
        $(
            /// Sets a matrix uniform (or matrix array uniform) from column-major `values`.
            /// `transpose` must be `false` in WebGL 1.0.
            pub fn $name(
                &self,
                location: Option<&UniformLocation<V>>,
                transpose: bool,
                values: &[f32],
            ) {
                self.call(
                    $method,
                    &[
                        Arg::nullable(location.map(|l| l.as_foreign())),
                        Arg::Bool(transpose),
                        Arg::Array(ArrayView::F32(values)),
                    ],
                );
            }
        )*
    }
}

macro_rules! vertex_attribs {
    ($($name:ident, $method:expr, [$($component:ident),*];)*) => {
        $(
            pub fn $name(&self, index: u32, $($component: f32),*) {
                self.call(
                    $method,
                    &[Arg::UInt(index), $(Arg::Float($component.into())),*],
                );
            }
        )*
    }
}

macro_rules! vertex_attrib_vectors {
    ($($name:ident, $method:expr;)*) => {
        $(
            pub fn $name(&self, index: u32, values: &[f32]) {
                self.call(
                    $method,
                    &[Arg::UInt(index), Arg::Array(ArrayView::F32(values))],
                );
            }
        )*
    }
}

/// Uniform values of the current program, and vertex attribute configuration.
///
/// A `None` location is accepted and ignored by the host, which matches what
/// [Context::get_uniform_location] returns for uniforms the linker optimized away.
impl<V> Context<V>
where
    V: ForeignValue,
{
    uniform_scalars! {
        /// Assigns a float to a uniform of the current program.
        uniform1f, "uniform1f", Float, f32, [x];
        uniform2f, "uniform2f", Float, f32, [x, y];
        uniform3f, "uniform3f", Float, f32, [x, y, z];
        uniform4f, "uniform4f", Float, f32, [x, y, z, w];
        /// Assigns an integer to a uniform of the current program. Samplers are set with this
        /// method, using the index of a texture unit.
        uniform1i, "uniform1i", Int, i32, [x];
        uniform2i, "uniform2i", Int, i32, [x, y];
        uniform3i, "uniform3i", Int, i32, [x, y, z];
        uniform4i, "uniform4i", Int, i32, [x, y, z, w];
    }

    uniform_vectors! {
        uniform1fv, "uniform1fv", f32, F32;
        uniform2fv, "uniform2fv", f32, F32;
        uniform3fv, "uniform3fv", f32, F32;
        uniform4fv, "uniform4fv", f32, F32;
        uniform1iv, "uniform1iv", i32, I32;
        uniform2iv, "uniform2iv", i32, I32;
        uniform3iv, "uniform3iv", i32, I32;
        uniform4iv, "uniform4iv", i32, I32;
    }

    uniform_matrices! {
        uniform_matrix2fv, "uniformMatrix2fv";
        uniform_matrix3fv, "uniformMatrix3fv";
        uniform_matrix4fv, "uniformMatrix4fv";
    }

    vertex_attribs! {
        vertex_attrib1f, "vertexAttrib1f", [x];
        vertex_attrib2f, "vertexAttrib2f", [x, y];
        vertex_attrib3f, "vertexAttrib3f", [x, y, z];
        vertex_attrib4f, "vertexAttrib4f", [x, y, z, w];
    }

    vertex_attrib_vectors! {
        vertex_attrib1fv, "vertexAttrib1fv";
        vertex_attrib2fv, "vertexAttrib2fv";
        vertex_attrib3fv, "vertexAttrib3fv";
        vertex_attrib4fv, "vertexAttrib4fv";
    }

    /// Describes the layout of the vertex attribute `index` in the buffer currently bound to
    /// `ARRAY_BUFFER`. `stride` and `offset` are in bytes.
    pub fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        type_: GLenum,
        normalized: bool,
        stride: i32,
        offset: i64,
    ) {
        self.call(
            "vertexAttribPointer",
            &[
                Arg::UInt(index),
                Arg::Int(size),
                Arg::UInt(type_.0),
                Arg::Bool(normalized),
                Arg::Int(stride),
                Arg::Long(offset),
            ],
        );
    }

    pub fn enable_vertex_attrib_array(&self, index: u32) {
        self.call("enableVertexAttribArray", &[Arg::UInt(index)]);
    }

    pub fn disable_vertex_attrib_array(&self, index: u32) {
        self.call("disableVertexAttribArray", &[Arg::UInt(index)]);
    }
}
