//! The WebGL constant table.
//!
//! Constant values are not hard-coded: they are read once from the live rendering context when a
//! [Context](crate::Context) is created, by walking [CONSTANT_TABLE]. A property the context does
//! not expose leaves its field at `GLenum(0)`.

use std::fmt;
use std::ops::{Add, BitOr, BitOrAssign};

use log::debug;

use crate::foreign::ForeignValue;

/// A WebGL enum or bitfield value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct GLenum(pub u32);

impl GLenum {
    pub fn id(&self) -> u32 {
        self.0
    }
}

impl From<u32> for GLenum {
    fn from(value: u32) -> Self {
        GLenum(value)
    }
}

impl From<GLenum> for u32 {
    fn from(value: GLenum) -> Self {
        value.0
    }
}

impl fmt::Display for GLenum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

impl BitOr for GLenum {
    type Output = GLenum;

    fn bitor(self, rhs: GLenum) -> GLenum {
        GLenum(self.0 | rhs.0)
    }
}

impl BitOrAssign for GLenum {
    fn bitor_assign(&mut self, rhs: GLenum) {
        self.0 |= rhs.0;
    }
}

/// Offsets an enum, e.g. `gl.TEXTURE0 + unit`. Wraps around on overflow.
impl Add<u32> for GLenum {
    type Output = GLenum;

    fn add(self, rhs: u32) -> GLenum {
        GLenum(self.0.wrapping_add(rhs))
    }
}

/// One row of [CONSTANT_TABLE]: the name shared by the [Constants] field and the context property
/// it is copied from, together with accessors for that field.
#[derive(Clone, Copy)]
pub struct ConstantEntry {
    pub name: &'static str,
    get: fn(&Constants) -> GLenum,
    set: fn(&mut Constants, GLenum),
}

impl ConstantEntry {
    pub fn get(&self, constants: &Constants) -> GLenum {
        (self.get)(constants)
    }
}

impl fmt::Debug for ConstantEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ConstantEntry")
            .field("name", &self.name)
            .finish()
    }
}

macro_rules! constants {
    ($($name:ident,)*) => {
        /// The named WebGL 1.0 constants, as reported by the rendering context they were read from.
        ///
        /// Field names match the standard WebGL constant names, so ported code can keep writing
        /// `gl.ARRAY_BUFFER`.
        #[allow(non_snake_case)]
        #[derive(Clone, PartialEq, Default, Debug)]
        pub struct Constants {
            $(pub $name: GLenum,)*
        }

        /// Maps every [Constants] field to the context property it is read from.
        pub static CONSTANT_TABLE: &[ConstantEntry] = &[
            $(
                ConstantEntry {
                    name: stringify!($name),
                    get: |constants| constants.$name,
                    set: |constants, value| constants.$name = value,
                },
            )*
        ];
    }
}

constants! {
    ACTIVE_ATTRIBUTES,
    ACTIVE_TEXTURE,
    ACTIVE_UNIFORMS,
    ALIASED_LINE_WIDTH_RANGE,
    ALIASED_POINT_SIZE_RANGE,
    ALPHA,
    ALPHA_BITS,
    ALWAYS,
    ARRAY_BUFFER,
    ARRAY_BUFFER_BINDING,
    ATTACHED_SHADERS,
    BACK,
    BLEND,
    BLEND_COLOR,
    BLEND_DST_ALPHA,
    BLEND_DST_RGB,
    BLEND_EQUATION,
    BLEND_EQUATION_ALPHA,
    BLEND_EQUATION_RGB,
    BLEND_SRC_ALPHA,
    BLEND_SRC_RGB,
    BLUE_BITS,
    BOOL,
    BOOL_VEC2,
    BOOL_VEC3,
    BOOL_VEC4,
    BROWSER_DEFAULT_WEBGL,
    BUFFER_SIZE,
    BUFFER_USAGE,
    BYTE,
    CCW,
    CLAMP_TO_EDGE,
    COLOR_ATTACHMENT0,
    COLOR_BUFFER_BIT,
    COLOR_CLEAR_VALUE,
    COLOR_WRITEMASK,
    COMPILE_STATUS,
    COMPRESSED_TEXTURE_FORMATS,
    CONSTANT_ALPHA,
    CONSTANT_COLOR,
    CONTEXT_LOST_WEBGL,
    CULL_FACE,
    CULL_FACE_MODE,
    CURRENT_PROGRAM,
    CURRENT_VERTEX_ATTRIB,
    CW,
    DECR,
    DECR_WRAP,
    DELETE_STATUS,
    DEPTH_ATTACHMENT,
    DEPTH_BITS,
    DEPTH_BUFFER_BIT,
    DEPTH_CLEAR_VALUE,
    DEPTH_COMPONENT,
    DEPTH_COMPONENT16,
    DEPTH_FUNC,
    DEPTH_RANGE,
    DEPTH_STENCIL,
    DEPTH_STENCIL_ATTACHMENT,
    DEPTH_TEST,
    DEPTH_WRITEMASK,
    DITHER,
    DONT_CARE,
    DST_ALPHA,
    DST_COLOR,
    DYNAMIC_DRAW,
    ELEMENT_ARRAY_BUFFER,
    ELEMENT_ARRAY_BUFFER_BINDING,
    EQUAL,
    FASTEST,
    FLOAT,
    FLOAT_MAT2,
    FLOAT_MAT3,
    FLOAT_MAT4,
    FLOAT_VEC2,
    FLOAT_VEC3,
    FLOAT_VEC4,
    FRAGMENT_SHADER,
    FRAMEBUFFER,
    FRAMEBUFFER_ATTACHMENT_OBJECT_NAME,
    FRAMEBUFFER_ATTACHMENT_OBJECT_TYPE,
    FRAMEBUFFER_ATTACHMENT_TEXTURE_CUBE_MAP_FACE,
    FRAMEBUFFER_ATTACHMENT_TEXTURE_LEVEL,
    FRAMEBUFFER_BINDING,
    FRAMEBUFFER_COMPLETE,
    FRAMEBUFFER_INCOMPLETE_ATTACHMENT,
    FRAMEBUFFER_INCOMPLETE_DIMENSIONS,
    FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT,
    FRAMEBUFFER_UNSUPPORTED,
    FRONT,
    FRONT_AND_BACK,
    FRONT_FACE,
    FUNC_ADD,
    FUNC_REVERSE_SUBTRACT,
    FUNC_SUBTRACT,
    GENERATE_MIPMAP_HINT,
    GEQUAL,
    GREATER,
    GREEN_BITS,
    HIGH_FLOAT,
    HIGH_INT,
    IMPLEMENTATION_COLOR_READ_FORMAT,
    IMPLEMENTATION_COLOR_READ_TYPE,
    INCR,
    INCR_WRAP,
    INFO_LOG_LENGTH,
    INT,
    INT_VEC2,
    INT_VEC3,
    INT_VEC4,
    INVALID_ENUM,
    INVALID_FRAMEBUFFER_OPERATION,
    INVALID_OPERATION,
    INVALID_VALUE,
    INVERT,
    KEEP,
    LEQUAL,
    LESS,
    LINEAR,
    LINEAR_MIPMAP_LINEAR,
    LINEAR_MIPMAP_NEAREST,
    LINES,
    LINE_LOOP,
    LINE_STRIP,
    LINE_WIDTH,
    LINK_STATUS,
    LOW_FLOAT,
    LOW_INT,
    LUMINANCE,
    LUMINANCE_ALPHA,
    MAX_COMBINED_TEXTURE_IMAGE_UNITS,
    MAX_CUBE_MAP_TEXTURE_SIZE,
    MAX_FRAGMENT_UNIFORM_VECTORS,
    MAX_RENDERBUFFER_SIZE,
    MAX_TEXTURE_IMAGE_UNITS,
    MAX_TEXTURE_SIZE,
    MAX_VARYING_VECTORS,
    MAX_VERTEX_ATTRIBS,
    MAX_VERTEX_TEXTURE_IMAGE_UNITS,
    MAX_VERTEX_UNIFORM_VECTORS,
    MAX_VIEWPORT_DIMS,
    MEDIUM_FLOAT,
    MEDIUM_INT,
    MIRRORED_REPEAT,
    NEAREST,
    NEAREST_MIPMAP_LINEAR,
    NEAREST_MIPMAP_NEAREST,
    NEVER,
    NICEST,
    NONE,
    NOTEQUAL,
    NO_ERROR,
    NUM_COMPRESSED_TEXTURE_FORMATS,
    ONE,
    ONE_MINUS_CONSTANT_ALPHA,
    ONE_MINUS_CONSTANT_COLOR,
    ONE_MINUS_DST_ALPHA,
    ONE_MINUS_DST_COLOR,
    ONE_MINUS_SRC_ALPHA,
    ONE_MINUS_SRC_COLOR,
    OUT_OF_MEMORY,
    PACK_ALIGNMENT,
    POINTS,
    POLYGON_OFFSET_FACTOR,
    POLYGON_OFFSET_FILL,
    POLYGON_OFFSET_UNITS,
    RED_BITS,
    RENDERBUFFER,
    RENDERBUFFER_ALPHA_SIZE,
    RENDERBUFFER_BINDING,
    RENDERBUFFER_BLUE_SIZE,
    RENDERBUFFER_DEPTH_SIZE,
    RENDERBUFFER_GREEN_SIZE,
    RENDERBUFFER_HEIGHT,
    RENDERBUFFER_INTERNAL_FORMAT,
    RENDERBUFFER_RED_SIZE,
    RENDERBUFFER_STENCIL_SIZE,
    RENDERBUFFER_WIDTH,
    RENDERER,
    REPEAT,
    REPLACE,
    RGB,
    RGB5_A1,
    RGB565,
    RGBA,
    RGBA4,
    SAMPLER_2D,
    SAMPLER_CUBE,
    SAMPLES,
    SAMPLE_ALPHA_TO_COVERAGE,
    SAMPLE_BUFFERS,
    SAMPLE_COVERAGE,
    SAMPLE_COVERAGE_INVERT,
    SAMPLE_COVERAGE_VALUE,
    SCISSOR_BOX,
    SCISSOR_TEST,
    SHADER_COMPILER,
    SHADER_SOURCE_LENGTH,
    SHADER_TYPE,
    SHADING_LANGUAGE_VERSION,
    SHORT,
    SRC_ALPHA,
    SRC_ALPHA_SATURATE,
    SRC_COLOR,
    STATIC_DRAW,
    STENCIL_ATTACHMENT,
    STENCIL_BACK_FAIL,
    STENCIL_BACK_FUNC,
    STENCIL_BACK_PASS_DEPTH_FAIL,
    STENCIL_BACK_PASS_DEPTH_PASS,
    STENCIL_BACK_REF,
    STENCIL_BACK_VALUE_MASK,
    STENCIL_BACK_WRITEMASK,
    STENCIL_BITS,
    STENCIL_BUFFER_BIT,
    STENCIL_CLEAR_VALUE,
    STENCIL_FAIL,
    STENCIL_FUNC,
    STENCIL_INDEX,
    STENCIL_INDEX8,
    STENCIL_PASS_DEPTH_FAIL,
    STENCIL_PASS_DEPTH_PASS,
    STENCIL_REF,
    STENCIL_TEST,
    STENCIL_VALUE_MASK,
    STENCIL_WRITEMASK,
    STREAM_DRAW,
    SUBPIXEL_BITS,
    TEXTURE,
    TEXTURE0,
    TEXTURE1,
    TEXTURE2,
    TEXTURE3,
    TEXTURE4,
    TEXTURE5,
    TEXTURE6,
    TEXTURE7,
    TEXTURE8,
    TEXTURE9,
    TEXTURE10,
    TEXTURE11,
    TEXTURE12,
    TEXTURE13,
    TEXTURE14,
    TEXTURE15,
    TEXTURE16,
    TEXTURE17,
    TEXTURE18,
    TEXTURE19,
    TEXTURE20,
    TEXTURE21,
    TEXTURE22,
    TEXTURE23,
    TEXTURE24,
    TEXTURE25,
    TEXTURE26,
    TEXTURE27,
    TEXTURE28,
    TEXTURE29,
    TEXTURE30,
    TEXTURE31,
    TEXTURE_2D,
    TEXTURE_BINDING_2D,
    TEXTURE_BINDING_CUBE_MAP,
    TEXTURE_CUBE_MAP,
    TEXTURE_CUBE_MAP_NEGATIVE_X,
    TEXTURE_CUBE_MAP_NEGATIVE_Y,
    TEXTURE_CUBE_MAP_NEGATIVE_Z,
    TEXTURE_CUBE_MAP_POSITIVE_X,
    TEXTURE_CUBE_MAP_POSITIVE_Y,
    TEXTURE_CUBE_MAP_POSITIVE_Z,
    TEXTURE_MAG_FILTER,
    TEXTURE_MIN_FILTER,
    TEXTURE_WRAP_S,
    TEXTURE_WRAP_T,
    TRIANGLES,
    TRIANGLE_FAN,
    TRIANGLE_STRIP,
    UNPACK_ALIGNMENT,
    UNPACK_COLORSPACE_CONVERSION_WEBGL,
    UNPACK_FLIP_Y_WEBGL,
    UNPACK_PREMULTIPLY_ALPHA_WEBGL,
    UNSIGNED_BYTE,
    UNSIGNED_INT,
    UNSIGNED_SHORT,
    UNSIGNED_SHORT_4_4_4_4,
    UNSIGNED_SHORT_5_5_5_1,
    UNSIGNED_SHORT_5_6_5,
    VALIDATE_STATUS,
    VENDOR,
    VERSION,
    VERTEX_ATTRIB_ARRAY_BUFFER_BINDING,
    VERTEX_ATTRIB_ARRAY_ENABLED,
    VERTEX_ATTRIB_ARRAY_NORMALIZED,
    VERTEX_ATTRIB_ARRAY_POINTER,
    VERTEX_ATTRIB_ARRAY_SIZE,
    VERTEX_ATTRIB_ARRAY_STRIDE,
    VERTEX_ATTRIB_ARRAY_TYPE,
    VERTEX_SHADER,
    VIEWPORT,
    ZERO,
}

impl Constants {
    /// Reads every constant in [CONSTANT_TABLE] off the foreign context `gl`.
    pub fn from_foreign<V>(gl: &V) -> Self
    where
        V: ForeignValue,
    {
        let mut constants = Constants::default();
        let mut absent = 0;

        for entry in CONSTANT_TABLE {
            let value = gl.get(entry.name);

            if value.is_nullish() {
                debug!("Context does not expose constant `{}`", entry.name);

                absent += 1;
            }

            (entry.set)(&mut constants, GLenum(value.as_u32()));
        }

        debug!(
            "Populated {} WebGL constants ({} absent)",
            CONSTANT_TABLE.len(),
            absent
        );

        constants
    }

    /// Looks up a constant by its standard name.
    pub fn get(&self, name: &str) -> Option<GLenum> {
        CONSTANT_TABLE
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.get(self))
    }

    /// Iterates over all constants as `(name, value)` pairs, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, GLenum)> + '_ {
        CONSTANT_TABLE
            .iter()
            .map(move |entry| (entry.name, entry.get(self)))
    }
}
