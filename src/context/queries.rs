use crate::constants::GLenum;
use crate::foreign::{Arg, ForeignValue};
use crate::handle::{Program, UniformLocation};

use super::Context;

/// State queries. The generic getters return whatever the host returns, which depends on `pname`
/// (a number, a boolean, a string, a typed array or an object); the suffixed variants coerce it.
impl<V> Context<V>
where
    V: ForeignValue,
{
    pub fn get_parameter(&self, pname: GLenum) -> V {
        self.call("getParameter", &[Arg::UInt(pname.0)])
    }

    pub fn get_parameter_i32(&self, pname: GLenum) -> i32 {
        self.get_parameter(pname).as_i32()
    }

    pub fn get_parameter_bool(&self, pname: GLenum) -> bool {
        self.get_parameter(pname).as_bool()
    }

    /// Coerces string parameters such as `VERSION`, `VENDOR` or `RENDERER`. Empty if the
    /// parameter is not a string.
    pub fn get_parameter_string(&self, pname: GLenum) -> String {
        self.get_parameter(pname).as_string()
    }

    /// Returns and clears the oldest error flag, or `NO_ERROR` if none is set.
    pub fn get_error(&self) -> GLenum {
        GLenum(self.call("getError", &[]).as_u32())
    }

    pub fn get_buffer_parameter(&self, target: GLenum, pname: GLenum) -> V {
        self.call(
            "getBufferParameter",
            &[Arg::UInt(target.0), Arg::UInt(pname.0)],
        )
    }

    pub fn get_buffer_parameter_i32(&self, target: GLenum, pname: GLenum) -> i32 {
        self.get_buffer_parameter(target, pname).as_i32()
    }

    pub fn get_tex_parameter(&self, target: GLenum, pname: GLenum) -> V {
        self.call(
            "getTexParameter",
            &[Arg::UInt(target.0), Arg::UInt(pname.0)],
        )
    }

    pub fn get_renderbuffer_parameter(&self, target: GLenum, pname: GLenum) -> V {
        self.call(
            "getRenderbufferParameter",
            &[Arg::UInt(target.0), Arg::UInt(pname.0)],
        )
    }

    pub fn get_renderbuffer_parameter_i32(&self, target: GLenum, pname: GLenum) -> i32 {
        self.get_renderbuffer_parameter(target, pname).as_i32()
    }

    pub fn get_framebuffer_attachment_parameter(
        &self,
        target: GLenum,
        attachment: GLenum,
        pname: GLenum,
    ) -> V {
        self.call(
            "getFramebufferAttachmentParameter",
            &[
                Arg::UInt(target.0),
                Arg::UInt(attachment.0),
                Arg::UInt(pname.0),
            ],
        )
    }

    /// Reads the current value of a uniform of `program`. `location` must have been queried
    /// from the same program.
    pub fn get_uniform(&self, program: &Program<V>, location: &UniformLocation<V>) -> V {
        self.call(
            "getUniform",
            &[
                Arg::Value(program.as_foreign()),
                Arg::Value(location.as_foreign()),
            ],
        )
    }

    pub fn get_vertex_attrib(&self, index: u32, pname: GLenum) -> V {
        self.call("getVertexAttrib", &[Arg::UInt(index), Arg::UInt(pname.0)])
    }

    /// Returns the byte offset configured for a vertex attribute with
    /// [Context::vertex_attrib_pointer]. `pname` must be `VERTEX_ATTRIB_ARRAY_POINTER`.
    pub fn get_vertex_attrib_offset(&self, index: u32, pname: GLenum) -> i64 {
        self.call(
            "getVertexAttribOffset",
            &[Arg::UInt(index), Arg::UInt(pname.0)],
        )
        .as_i64()
    }
}

#[cfg(test)]
mod tests {
    use crate::context::mock_context;
    use crate::foreign::ForeignValue;
    use crate::handle::{Program, UniformLocation};
    use crate::mock::{MockArg, MockCall, MockValue};

    #[test]
    fn test_get_error() {
        let (env, gl) = mock_context();
        let invalid_enum = gl.INVALID_ENUM;

        env.gl.respond("getError", MockValue::number(f64::from(invalid_enum.0)));

        assert_eq!(gl.get_error(), invalid_enum);
        assert_eq!(env.gl.calls(), vec![MockCall::new("getError", vec![])]);
    }

    #[test]
    fn test_get_parameter_returns_raw_value() {
        let (env, gl) = mock_context();
        let viewport = MockValue::array(vec![
            MockValue::number(0.0),
            MockValue::number(0.0),
            MockValue::number(300.0),
            MockValue::number(150.0),
        ]);

        env.gl.respond("getParameter", viewport.clone());

        let value = gl.get_parameter(gl.VIEWPORT);

        assert!(value.ptr_eq(&viewport));
        assert_eq!(value.index(2).as_i32(), 300);
    }

    #[test]
    fn test_typed_parameter_getters() {
        let (env, gl) = mock_context();
        let max_texture_size = gl.MAX_TEXTURE_SIZE.0;
        let depth_test = gl.DEPTH_TEST.0;

        env.gl.on_call("getParameter", move |args| match args {
            [MockArg::UInt(pname)] if *pname == max_texture_size => MockValue::number(4096.0),
            [MockArg::UInt(pname)] if *pname == depth_test => MockValue::bool(true),
            _ => MockValue::string("WebGL 1.0"),
        });

        assert_eq!(gl.get_parameter_i32(gl.MAX_TEXTURE_SIZE), 4096);
        assert!(gl.get_parameter_bool(gl.DEPTH_TEST));
        assert_eq!(gl.get_parameter_string(gl.VERSION), "WebGL 1.0");
        assert_eq!(gl.get_parameter_string(gl.MAX_TEXTURE_SIZE), "");
    }

    #[test]
    fn test_queries_leave_constants_untouched() {
        let (env, gl) = mock_context();
        let before = gl.constants().clone();

        env.gl.respond("getParameter", MockValue::number(1.0));
        env.gl.respond("getBufferParameter", MockValue::number(2.0));

        gl.get_parameter(gl.CURRENT_PROGRAM);
        gl.get_buffer_parameter_i32(gl.ARRAY_BUFFER, gl.BUFFER_SIZE);
        gl.get_renderbuffer_parameter_i32(gl.RENDERBUFFER, gl.RENDERBUFFER_WIDTH);
        gl.get_error();

        assert_eq!(gl.constants(), &before);
    }

    #[test]
    fn test_framebuffer_attachment_parameter() {
        let (env, gl) = mock_context();

        gl.get_framebuffer_attachment_parameter(
            gl.FRAMEBUFFER,
            gl.COLOR_ATTACHMENT0,
            gl.FRAMEBUFFER_ATTACHMENT_OBJECT_TYPE,
        );

        assert_eq!(
            env.gl.calls(),
            vec![MockCall::new(
                "getFramebufferAttachmentParameter",
                vec![
                    MockArg::UInt(gl.FRAMEBUFFER.0),
                    MockArg::UInt(gl.COLOR_ATTACHMENT0.0),
                    MockArg::UInt(gl.FRAMEBUFFER_ATTACHMENT_OBJECT_TYPE.0),
                ]
            )]
        );
    }

    #[test]
    fn test_get_uniform_passes_program_and_location() {
        let (env, gl) = mock_context();
        let program_object = MockValue::object();
        let location_object = MockValue::object();
        let program = Program::from_foreign(program_object.clone()).unwrap();
        let location = UniformLocation::from_foreign(location_object.clone()).unwrap();

        env.gl.respond("getUniform", MockValue::number(0.5));

        assert_eq!(gl.get_uniform(&program, &location).as_f64(), 0.5);
        assert_eq!(
            env.gl.calls()[0].args,
            vec![
                MockArg::Value(program_object),
                MockArg::Value(location_object),
            ]
        );
    }

    #[test]
    fn test_vertex_attrib_queries() {
        let (env, gl) = mock_context();

        env.gl.respond("getVertexAttribOffset", MockValue::number(48.0));

        assert_eq!(
            gl.get_vertex_attrib_offset(2, gl.VERTEX_ATTRIB_ARRAY_POINTER),
            48
        );
        assert!(gl.get_vertex_attrib(2, gl.CURRENT_VERTEX_ATTRIB).is_undefined());

        let methods: Vec<_> = env.gl.calls().into_iter().map(|c| c.method).collect();

        assert_eq!(methods, vec!["getVertexAttribOffset", "getVertexAttrib"]);
    }
}
