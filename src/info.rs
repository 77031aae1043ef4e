use crate::constants::GLenum;
use crate::foreign::ForeignValue;

/// Describes an active attribute or uniform of a linked program (a `WebGLActiveInfo`).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ActiveInfo {
    pub name: String,

    /// The array size of the variable, `1` for non-array variables.
    pub size: i32,

    /// The variable's type, e.g. `FLOAT_VEC3` or `SAMPLER_2D`.
    pub type_: GLenum,
}

impl ActiveInfo {
    /// Coerces a foreign `WebGLActiveInfo`, returning `None` if `value` is `null` or `undefined`.
    pub fn from_foreign<V>(value: &V) -> Option<Self>
    where
        V: ForeignValue,
    {
        if value.is_nullish() {
            return None;
        }

        Some(ActiveInfo {
            name: value.get("name").as_string(),
            size: value.get("size").as_i32(),
            type_: GLenum(value.get("type").as_u32()),
        })
    }
}

/// The range and precision of a shader numeric format (a `WebGLShaderPrecisionFormat`).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ShaderPrecisionFormat {
    pub range_min: i32,
    pub range_max: i32,
    pub precision: i32,
}

impl ShaderPrecisionFormat {
    pub fn from_foreign<V>(value: &V) -> Option<Self>
    where
        V: ForeignValue,
    {
        if value.is_nullish() {
            return None;
        }

        Some(ShaderPrecisionFormat {
            range_min: value.get("rangeMin").as_i32(),
            range_max: value.get("rangeMax").as_i32(),
            precision: value.get("precision").as_i32(),
        })
    }
}
