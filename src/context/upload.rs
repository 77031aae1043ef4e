use crate::constants::GLenum;
use crate::foreign::{Arg, ArrayView, ForeignValue};

use super::Context;

/// Uploading buffer and texture data, and reading pixels back.
impl<V> Context<V>
where
    V: ForeignValue,
{
    /// Creates the data store of the buffer bound to `target` and initializes it with `data`.
    ///
    /// ```
    /// # use webgl_bridge::mock::MockEnvironment;
    /// # use webgl_bridge::Context;
    /// # let env = MockEnvironment::new();
    /// # let gl = Context::new(&env.global, &env.canvas, None).unwrap();
    /// let vertices = [0.0f32, 0.5, -0.5, -0.5, 0.5, -0.5];
    ///
    /// gl.buffer_data(gl.ARRAY_BUFFER, &vertices[..], gl.STATIC_DRAW);
    /// ```
    pub fn buffer_data<'a, D>(&self, target: GLenum, data: D, usage: GLenum)
    where
        D: Into<ArrayView<'a>>,
    {
        self.call(
            "bufferData",
            &[
                Arg::UInt(target.0),
                Arg::Array(data.into()),
                Arg::UInt(usage.0),
            ],
        );
    }

    /// Creates an uninitialized data store of `size` bytes for the buffer bound to `target`.
    pub fn buffer_data_size(&self, target: GLenum, size: i64, usage: GLenum) {
        self.call(
            "bufferData",
            &[Arg::UInt(target.0), Arg::Long(size), Arg::UInt(usage.0)],
        );
    }

    /// Replaces part of the data store of the buffer bound to `target`, starting at byte
    /// `offset`.
    pub fn buffer_sub_data<'a, D>(&self, target: GLenum, offset: i64, data: D)
    where
        D: Into<ArrayView<'a>>,
    {
        self.call(
            "bufferSubData",
            &[
                Arg::UInt(target.0),
                Arg::Long(offset),
                Arg::Array(data.into()),
            ],
        );
    }

    /// Uploads an image, canvas, video or `ImageData` (`source`) to the texture bound to
    /// `target`.
    pub fn tex_image_2d(
        &self,
        target: GLenum,
        level: i32,
        internal_format: GLenum,
        format: GLenum,
        type_: GLenum,
        source: &V,
    ) {
        self.call(
            "texImage2D",
            &[
                Arg::UInt(target.0),
                Arg::Int(level),
                Arg::Int(internal_format.0 as i32),
                Arg::UInt(format.0),
                Arg::UInt(type_.0),
                Arg::Value(source),
            ],
        );
    }

    /// Specifies a texture image from raw pixel data. Passing `None` for `pixels` allocates the
    /// image without initializing it.
    #[allow(clippy::too_many_arguments)]
    pub fn tex_image_2d_with_pixels(
        &self,
        target: GLenum,
        level: i32,
        internal_format: GLenum,
        width: i32,
        height: i32,
        border: i32,
        format: GLenum,
        type_: GLenum,
        pixels: Option<ArrayView>,
    ) {
        self.call(
            "texImage2D",
            &[
                Arg::UInt(target.0),
                Arg::Int(level),
                Arg::Int(internal_format.0 as i32),
                Arg::Int(width),
                Arg::Int(height),
                Arg::Int(border),
                Arg::UInt(format.0),
                Arg::UInt(type_.0),
                pixels.map(Arg::Array).unwrap_or(Arg::Null),
            ],
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn tex_sub_image_2d(
        &self,
        target: GLenum,
        level: i32,
        x_offset: i32,
        y_offset: i32,
        format: GLenum,
        type_: GLenum,
        source: &V,
    ) {
        self.call(
            "texSubImage2D",
            &[
                Arg::UInt(target.0),
                Arg::Int(level),
                Arg::Int(x_offset),
                Arg::Int(y_offset),
                Arg::UInt(format.0),
                Arg::UInt(type_.0),
                Arg::Value(source),
            ],
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn tex_sub_image_2d_with_pixels(
        &self,
        target: GLenum,
        level: i32,
        x_offset: i32,
        y_offset: i32,
        width: i32,
        height: i32,
        format: GLenum,
        type_: GLenum,
        pixels: ArrayView,
    ) {
        self.call(
            "texSubImage2D",
            &[
                Arg::UInt(target.0),
                Arg::Int(level),
                Arg::Int(x_offset),
                Arg::Int(y_offset),
                Arg::Int(width),
                Arg::Int(height),
                Arg::UInt(format.0),
                Arg::UInt(type_.0),
                Arg::Array(pixels),
            ],
        );
    }

    /// Specifies a texture image in a compressed format made available by an extension.
    #[allow(clippy::too_many_arguments)]
    pub fn compressed_tex_image_2d(
        &self,
        target: GLenum,
        level: i32,
        internal_format: GLenum,
        width: i32,
        height: i32,
        border: i32,
        data: &[u8],
    ) {
        self.call(
            "compressedTexImage2D",
            &[
                Arg::UInt(target.0),
                Arg::Int(level),
                Arg::UInt(internal_format.0),
                Arg::Int(width),
                Arg::Int(height),
                Arg::Int(border),
                Arg::Array(ArrayView::U8(data)),
            ],
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn compressed_tex_sub_image_2d(
        &self,
        target: GLenum,
        level: i32,
        x_offset: i32,
        y_offset: i32,
        width: i32,
        height: i32,
        format: GLenum,
        data: &[u8],
    ) {
        self.call(
            "compressedTexSubImage2D",
            &[
                Arg::UInt(target.0),
                Arg::Int(level),
                Arg::Int(x_offset),
                Arg::Int(y_offset),
                Arg::Int(width),
                Arg::Int(height),
                Arg::UInt(format.0),
                Arg::Array(ArrayView::U8(data)),
            ],
        );
    }

    /// Copies pixels from the current color buffer into a new texture image.
    #[allow(clippy::too_many_arguments)]
    pub fn copy_tex_image_2d(
        &self,
        target: GLenum,
        level: i32,
        internal_format: GLenum,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        border: i32,
    ) {
        self.call(
            "copyTexImage2D",
            &[
                Arg::UInt(target.0),
                Arg::Int(level),
                Arg::UInt(internal_format.0),
                Arg::Int(x),
                Arg::Int(y),
                Arg::Int(width),
                Arg::Int(height),
                Arg::Int(border),
            ],
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn copy_tex_sub_image_2d(
        &self,
        target: GLenum,
        level: i32,
        x_offset: i32,
        y_offset: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) {
        self.call(
            "copyTexSubImage2D",
            &[
                Arg::UInt(target.0),
                Arg::Int(level),
                Arg::Int(x_offset),
                Arg::Int(y_offset),
                Arg::Int(x),
                Arg::Int(y),
                Arg::Int(width),
                Arg::Int(height),
            ],
        );
    }

    pub fn tex_parameteri(&self, target: GLenum, pname: GLenum, param: i32) {
        self.call(
            "texParameteri",
            &[Arg::UInt(target.0), Arg::UInt(pname.0), Arg::Int(param)],
        );
    }

    pub fn tex_parameterf(&self, target: GLenum, pname: GLenum, param: f32) {
        self.call(
            "texParameterf",
            &[
                Arg::UInt(target.0),
                Arg::UInt(pname.0),
                Arg::Float(param.into()),
            ],
        );
    }

    /// Generates the full mipmap chain for the texture bound to `target`.
    pub fn generate_mipmap(&self, target: GLenum) {
        self.call("generateMipmap", &[Arg::UInt(target.0)]);
    }

    /// Reads a block of pixels from the current color buffer into `pixels`, a foreign typed array
    /// matching `type_` (a `Uint8Array` for `UNSIGNED_BYTE`).
    #[allow(clippy::too_many_arguments)]
    pub fn read_pixels(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: GLenum,
        type_: GLenum,
        pixels: &V,
    ) {
        self.call(
            "readPixels",
            &[
                Arg::Int(x),
                Arg::Int(y),
                Arg::Int(width),
                Arg::Int(height),
                Arg::UInt(format.0),
                Arg::UInt(type_.0),
                Arg::Value(pixels),
            ],
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::context::mock_context;
    use crate::foreign::ArrayView;
    use crate::mock::{MockArg, MockArray, MockCall, MockValue};

    #[test]
    fn test_buffer_data_passes_array() {
        let (env, gl) = mock_context();
        let vertices = vec![0.0f32, 1.0, 2.0];

        gl.buffer_data(gl.ARRAY_BUFFER, &vertices, gl.STATIC_DRAW);

        assert_eq!(
            env.gl.calls(),
            vec![MockCall::new(
                "bufferData",
                vec![
                    MockArg::UInt(gl.ARRAY_BUFFER.0),
                    MockArg::Array(MockArray::F32(vertices.clone())),
                    MockArg::UInt(gl.STATIC_DRAW.0),
                ]
            )]
        );
    }

    #[test]
    fn test_buffer_data_size() {
        let (env, gl) = mock_context();

        gl.buffer_data_size(gl.ELEMENT_ARRAY_BUFFER, 1024, gl.DYNAMIC_DRAW);

        assert_eq!(
            env.gl.calls()[0].args,
            vec![
                MockArg::UInt(gl.ELEMENT_ARRAY_BUFFER.0),
                MockArg::Long(1024),
                MockArg::UInt(gl.DYNAMIC_DRAW.0),
            ]
        );
    }

    #[test]
    fn test_buffer_sub_data_offset() {
        let (env, gl) = mock_context();
        let indices = [0u16, 1, 2];

        gl.buffer_sub_data(gl.ELEMENT_ARRAY_BUFFER, 6, &indices[..]);

        assert_eq!(
            env.gl.calls()[0].args,
            vec![
                MockArg::UInt(gl.ELEMENT_ARRAY_BUFFER.0),
                MockArg::Long(6),
                MockArg::Array(MockArray::U16(vec![0, 1, 2])),
            ]
        );
    }

    #[test]
    fn test_tex_image_2d_with_source() {
        let (env, gl) = mock_context();
        let image = MockValue::object();

        gl.tex_image_2d(gl.TEXTURE_2D, 0, gl.RGBA, gl.RGBA, gl.UNSIGNED_BYTE, &image);

        let call = &env.gl.calls_to("texImage2D")[0];

        assert_eq!(call.args.len(), 6);
        assert_eq!(call.args[2], MockArg::Int(gl.RGBA.0 as i32));
        assert_eq!(call.args[5], MockArg::Value(image));
    }

    #[test]
    fn test_tex_image_2d_without_pixels() {
        let (env, gl) = mock_context();

        gl.tex_image_2d_with_pixels(
            gl.TEXTURE_2D,
            0,
            gl.RGB,
            256,
            128,
            0,
            gl.RGB,
            gl.UNSIGNED_BYTE,
            None,
        );

        let call = &env.gl.calls_to("texImage2D")[0];

        assert_eq!(call.args.len(), 9);
        assert_eq!(call.args[3], MockArg::Int(256));
        assert_eq!(call.args[4], MockArg::Int(128));
        assert_eq!(call.args[8], MockArg::Null);
    }

    #[test]
    fn test_tex_sub_image_2d_with_pixels() {
        let (env, gl) = mock_context();
        let pixels = [255u8, 0, 0, 255];

        gl.tex_sub_image_2d_with_pixels(
            gl.TEXTURE_2D,
            1,
            2,
            3,
            1,
            1,
            gl.RGBA,
            gl.UNSIGNED_BYTE,
            ArrayView::U8(&pixels),
        );

        let call = &env.gl.calls_to("texSubImage2D")[0];

        assert_eq!(
            call.args[8],
            MockArg::Array(MockArray::U8(vec![255, 0, 0, 255]))
        );
    }

    #[test]
    fn test_tex_parameters() {
        let (env, gl) = mock_context();

        gl.tex_parameteri(gl.TEXTURE_2D, gl.TEXTURE_MIN_FILTER, gl.LINEAR.0 as i32);
        gl.tex_parameterf(gl.TEXTURE_2D, gl.TEXTURE_WRAP_S, 0.5);

        assert_eq!(
            env.gl.calls(),
            vec![
                MockCall::new(
                    "texParameteri",
                    vec![
                        MockArg::UInt(gl.TEXTURE_2D.0),
                        MockArg::UInt(gl.TEXTURE_MIN_FILTER.0),
                        MockArg::Int(gl.LINEAR.0 as i32),
                    ]
                ),
                MockCall::new(
                    "texParameterf",
                    vec![
                        MockArg::UInt(gl.TEXTURE_2D.0),
                        MockArg::UInt(gl.TEXTURE_WRAP_S.0),
                        MockArg::Float(0.5),
                    ]
                ),
            ]
        );
    }

    #[test]
    fn test_read_pixels_passes_destination() {
        let (env, gl) = mock_context();
        let destination = MockValue::object();

        gl.read_pixels(0, 0, 2, 2, gl.RGBA, gl.UNSIGNED_BYTE, &destination);

        let call = &env.gl.calls_to("readPixels")[0];

        assert_eq!(call.args.len(), 7);
        assert_eq!(call.args[6], MockArg::Value(destination));
    }
}
