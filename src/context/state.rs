use crate::constants::GLenum;
use crate::foreign::{Arg, ForeignValue};

use super::Context;

/// Capabilities, fixed-function configuration, clearing and the viewport.
impl<V> Context<V>
where
    V: ForeignValue,
{
    /// Enables a capability such as `BLEND`, `DEPTH_TEST` or `SCISSOR_TEST`.
    pub fn enable(&self, capability: GLenum) {
        self.call("enable", &[Arg::UInt(capability.0)]);
    }

    pub fn disable(&self, capability: GLenum) {
        self.call("disable", &[Arg::UInt(capability.0)]);
    }

    pub fn is_enabled(&self, capability: GLenum) -> bool {
        self.call("isEnabled", &[Arg::UInt(capability.0)]).as_bool()
    }

    /// Sets the constant color used by the `CONSTANT_COLOR` and `CONSTANT_ALPHA` blend factors.
    pub fn blend_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.call(
            "blendColor",
            &[
                Arg::Float(red.into()),
                Arg::Float(green.into()),
                Arg::Float(blue.into()),
                Arg::Float(alpha.into()),
            ],
        );
    }

    /// Sets the equation used to combine source and destination colors, for both the RGB and the
    /// alpha components.
    pub fn blend_equation(&self, mode: GLenum) {
        self.call("blendEquation", &[Arg::UInt(mode.0)]);
    }

    pub fn blend_equation_separate(&self, mode_rgb: GLenum, mode_alpha: GLenum) {
        self.call(
            "blendEquationSeparate",
            &[Arg::UInt(mode_rgb.0), Arg::UInt(mode_alpha.0)],
        );
    }

    pub fn blend_func(&self, source_factor: GLenum, destination_factor: GLenum) {
        self.call(
            "blendFunc",
            &[Arg::UInt(source_factor.0), Arg::UInt(destination_factor.0)],
        );
    }

    pub fn blend_func_separate(
        &self,
        source_rgb: GLenum,
        destination_rgb: GLenum,
        source_alpha: GLenum,
        destination_alpha: GLenum,
    ) {
        self.call(
            "blendFuncSeparate",
            &[
                Arg::UInt(source_rgb.0),
                Arg::UInt(destination_rgb.0),
                Arg::UInt(source_alpha.0),
                Arg::UInt(destination_alpha.0),
            ],
        );
    }

    /// Selects which color components are written to the color buffer.
    pub fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool) {
        self.call(
            "colorMask",
            &[
                Arg::Bool(red),
                Arg::Bool(green),
                Arg::Bool(blue),
                Arg::Bool(alpha),
            ],
        );
    }

    pub fn cull_face(&self, mode: GLenum) {
        self.call("cullFace", &[Arg::UInt(mode.0)]);
    }

    pub fn front_face(&self, mode: GLenum) {
        self.call("frontFace", &[Arg::UInt(mode.0)]);
    }

    pub fn depth_func(&self, func: GLenum) {
        self.call("depthFunc", &[Arg::UInt(func.0)]);
    }

    /// Enables or disables writing to the depth buffer.
    pub fn depth_mask(&self, flag: bool) {
        self.call("depthMask", &[Arg::Bool(flag)]);
    }

    /// Maps normalized device depth coordinates to window depth coordinates.
    pub fn depth_range(&self, z_near: f32, z_far: f32) {
        self.call(
            "depthRange",
            &[Arg::Float(z_near.into()), Arg::Float(z_far.into())],
        );
    }

    pub fn line_width(&self, width: f32) {
        self.call("lineWidth", &[Arg::Float(width.into())]);
    }

    /// Sets the scale factor and units used to compute depth values when `POLYGON_OFFSET_FILL`
    /// is enabled.
    pub fn polygon_offset(&self, factor: f32, units: f32) {
        self.call(
            "polygonOffset",
            &[Arg::Float(factor.into()), Arg::Float(units.into())],
        );
    }

    pub fn sample_coverage(&self, value: f32, invert: bool) {
        self.call(
            "sampleCoverage",
            &[Arg::Float(value.into()), Arg::Bool(invert)],
        );
    }

    /// Hints at the preferred trade-off for `target`, e.g. `GENERATE_MIPMAP_HINT` with `NICEST`.
    pub fn hint(&self, target: GLenum, mode: GLenum) {
        self.call("hint", &[Arg::UInt(target.0), Arg::UInt(mode.0)]);
    }

    pub fn stencil_func(&self, func: GLenum, reference: i32, mask: u32) {
        self.call(
            "stencilFunc",
            &[Arg::UInt(func.0), Arg::Int(reference), Arg::UInt(mask)],
        );
    }

    pub fn stencil_func_separate(&self, face: GLenum, func: GLenum, reference: i32, mask: u32) {
        self.call(
            "stencilFuncSeparate",
            &[
                Arg::UInt(face.0),
                Arg::UInt(func.0),
                Arg::Int(reference),
                Arg::UInt(mask),
            ],
        );
    }

    pub fn stencil_mask(&self, mask: u32) {
        self.call("stencilMask", &[Arg::UInt(mask)]);
    }

    pub fn stencil_mask_separate(&self, face: GLenum, mask: u32) {
        self.call("stencilMaskSeparate", &[Arg::UInt(face.0), Arg::UInt(mask)]);
    }

    pub fn stencil_op(&self, fail: GLenum, depth_fail: GLenum, depth_pass: GLenum) {
        self.call(
            "stencilOp",
            &[
                Arg::UInt(fail.0),
                Arg::UInt(depth_fail.0),
                Arg::UInt(depth_pass.0),
            ],
        );
    }

    pub fn stencil_op_separate(
        &self,
        face: GLenum,
        fail: GLenum,
        depth_fail: GLenum,
        depth_pass: GLenum,
    ) {
        self.call(
            "stencilOpSeparate",
            &[
                Arg::UInt(face.0),
                Arg::UInt(fail.0),
                Arg::UInt(depth_fail.0),
                Arg::UInt(depth_pass.0),
            ],
        );
    }

    /// Clears the buffers selected by `mask`, a combination of `COLOR_BUFFER_BIT`,
    /// `DEPTH_BUFFER_BIT` and `STENCIL_BUFFER_BIT`.
    pub fn clear(&self, mask: GLenum) {
        self.call("clear", &[Arg::UInt(mask.0)]);
    }

    pub fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.call(
            "clearColor",
            &[
                Arg::Float(red.into()),
                Arg::Float(green.into()),
                Arg::Float(blue.into()),
                Arg::Float(alpha.into()),
            ],
        );
    }

    pub fn clear_depth(&self, depth: f32) {
        self.call("clearDepth", &[Arg::Float(depth.into())]);
    }

    pub fn clear_stencil(&self, stencil: i32) {
        self.call("clearStencil", &[Arg::Int(stencil)]);
    }

    pub fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.call(
            "viewport",
            &[
                Arg::Int(x),
                Arg::Int(y),
                Arg::Int(width),
                Arg::Int(height),
            ],
        );
    }

    /// Sets the scissor box, which limits drawing when `SCISSOR_TEST` is enabled.
    pub fn scissor(&self, x: i32, y: i32, width: i32, height: i32) {
        self.call(
            "scissor",
            &[
                Arg::Int(x),
                Arg::Int(y),
                Arg::Int(width),
                Arg::Int(height),
            ],
        );
    }

    /// Sets a pixel storage mode, e.g. `UNPACK_ALIGNMENT` or `UNPACK_FLIP_Y_WEBGL`.
    pub fn pixel_storei(&self, pname: GLenum, param: i32) {
        self.call("pixelStorei", &[Arg::UInt(pname.0), Arg::Int(param)]);
    }
}
