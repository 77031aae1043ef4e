use crate::constants::GLenum;
use crate::foreign::{Arg, ForeignValue};
use crate::handle::{Buffer, Framebuffer, Renderbuffer, Texture};

use super::Context;

impl<V> Context<V>
where
    V: ForeignValue,
{
    /// Creates a buffer object. Returns `None` if the host returned `null`, which happens when
    /// the context is lost.
    pub fn create_buffer(&self) -> Option<Buffer<V>> {
        Buffer::from_foreign(self.call("createBuffer", &[]))
    }

    pub fn delete_buffer(&self, buffer: Option<&Buffer<V>>) {
        self.call(
            "deleteBuffer",
            &[Arg::nullable(buffer.map(|b| b.as_foreign()))],
        );
    }

    pub fn is_buffer(&self, buffer: Option<&Buffer<V>>) -> bool {
        self.call("isBuffer", &[Arg::nullable(buffer.map(|b| b.as_foreign()))])
            .as_bool()
    }

    /// Binds `buffer` to `target` (`ARRAY_BUFFER` or `ELEMENT_ARRAY_BUFFER`). Passing `None`
    /// unbinds the current buffer.
    pub fn bind_buffer(&self, target: GLenum, buffer: Option<&Buffer<V>>) {
        self.call(
            "bindBuffer",
            &[
                Arg::UInt(target.0),
                Arg::nullable(buffer.map(|b| b.as_foreign())),
            ],
        );
    }

    pub fn create_texture(&self) -> Option<Texture<V>> {
        Texture::from_foreign(self.call("createTexture", &[]))
    }

    pub fn delete_texture(&self, texture: Option<&Texture<V>>) {
        self.call(
            "deleteTexture",
            &[Arg::nullable(texture.map(|t| t.as_foreign()))],
        );
    }

    pub fn is_texture(&self, texture: Option<&Texture<V>>) -> bool {
        self.call(
            "isTexture",
            &[Arg::nullable(texture.map(|t| t.as_foreign()))],
        )
        .as_bool()
    }

    /// Binds `texture` to `target` on the active texture unit.
    pub fn bind_texture(&self, target: GLenum, texture: Option<&Texture<V>>) {
        self.call(
            "bindTexture",
            &[
                Arg::UInt(target.0),
                Arg::nullable(texture.map(|t| t.as_foreign())),
            ],
        );
    }

    /// Selects the texture unit subsequent texture calls apply to, e.g. `gl.TEXTURE0 + 2`.
    pub fn active_texture(&self, texture: GLenum) {
        self.call("activeTexture", &[Arg::UInt(texture.0)]);
    }

    pub fn create_framebuffer(&self) -> Option<Framebuffer<V>> {
        Framebuffer::from_foreign(self.call("createFramebuffer", &[]))
    }

    pub fn delete_framebuffer(&self, framebuffer: Option<&Framebuffer<V>>) {
        self.call(
            "deleteFramebuffer",
            &[Arg::nullable(framebuffer.map(|f| f.as_foreign()))],
        );
    }

    pub fn is_framebuffer(&self, framebuffer: Option<&Framebuffer<V>>) -> bool {
        self.call(
            "isFramebuffer",
            &[Arg::nullable(framebuffer.map(|f| f.as_foreign()))],
        )
        .as_bool()
    }

    /// Binds `framebuffer` to `target`. Passing `None` binds the default framebuffer.
    pub fn bind_framebuffer(&self, target: GLenum, framebuffer: Option<&Framebuffer<V>>) {
        self.call(
            "bindFramebuffer",
            &[
                Arg::UInt(target.0),
                Arg::nullable(framebuffer.map(|f| f.as_foreign())),
            ],
        );
    }

    pub fn create_renderbuffer(&self) -> Option<Renderbuffer<V>> {
        Renderbuffer::from_foreign(self.call("createRenderbuffer", &[]))
    }

    pub fn delete_renderbuffer(&self, renderbuffer: Option<&Renderbuffer<V>>) {
        self.call(
            "deleteRenderbuffer",
            &[Arg::nullable(renderbuffer.map(|r| r.as_foreign()))],
        );
    }

    pub fn is_renderbuffer(&self, renderbuffer: Option<&Renderbuffer<V>>) -> bool {
        self.call(
            "isRenderbuffer",
            &[Arg::nullable(renderbuffer.map(|r| r.as_foreign()))],
        )
        .as_bool()
    }

    pub fn bind_renderbuffer(&self, target: GLenum, renderbuffer: Option<&Renderbuffer<V>>) {
        self.call(
            "bindRenderbuffer",
            &[
                Arg::UInt(target.0),
                Arg::nullable(renderbuffer.map(|r| r.as_foreign())),
            ],
        );
    }

    /// Creates or replaces the data store of the bound renderbuffer.
    pub fn renderbuffer_storage(
        &self,
        target: GLenum,
        internal_format: GLenum,
        width: i32,
        height: i32,
    ) {
        self.call(
            "renderbufferStorage",
            &[
                Arg::UInt(target.0),
                Arg::UInt(internal_format.0),
                Arg::Int(width),
                Arg::Int(height),
            ],
        );
    }

    /// Attaches a renderbuffer to the bound framebuffer.
    pub fn framebuffer_renderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffer_target: GLenum,
        renderbuffer: Option<&Renderbuffer<V>>,
    ) {
        self.call(
            "framebufferRenderbuffer",
            &[
                Arg::UInt(target.0),
                Arg::UInt(attachment.0),
                Arg::UInt(renderbuffer_target.0),
                Arg::nullable(renderbuffer.map(|r| r.as_foreign())),
            ],
        );
    }

    /// Attaches a level of a 2D or cube map face texture to the bound framebuffer.
    pub fn framebuffer_texture_2d(
        &self,
        target: GLenum,
        attachment: GLenum,
        texture_target: GLenum,
        texture: Option<&Texture<V>>,
        level: i32,
    ) {
        self.call(
            "framebufferTexture2D",
            &[
                Arg::UInt(target.0),
                Arg::UInt(attachment.0),
                Arg::UInt(texture_target.0),
                Arg::nullable(texture.map(|t| t.as_foreign())),
                Arg::Int(level),
            ],
        );
    }

    /// Returns the completeness status of the framebuffer bound to `target`, e.g.
    /// `FRAMEBUFFER_COMPLETE`.
    pub fn check_framebuffer_status(&self, target: GLenum) -> GLenum {
        GLenum(
            self.call("checkFramebufferStatus", &[Arg::UInt(target.0)])
                .as_u32(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::context::mock_context;
    use crate::mock::{MockArg, MockCall, MockValue};

    #[test]
    fn test_create_buffer_returns_host_object() {
        let (env, gl) = mock_context();
        let object = MockValue::object();

        env.gl.respond("createBuffer", object.clone());

        let buffer = gl.create_buffer().unwrap();

        assert!(buffer.as_foreign().ptr_eq(&object));
        assert_eq!(env.gl.calls(), vec![MockCall::new("createBuffer", vec![])]);
    }

    #[test]
    fn test_create_returns_none_when_host_returns_null() {
        let (env, gl) = mock_context();

        env.gl.respond("createTexture", MockValue::null());

        assert!(gl.create_texture().is_none());
        assert!(gl.create_framebuffer().is_none());
    }

    #[test]
    fn test_bind_buffer_passes_handle() {
        let (env, gl) = mock_context();
        let object = MockValue::object();

        env.gl.respond("createBuffer", object.clone());

        let buffer = gl.create_buffer().unwrap();

        env.gl.clear_calls();

        gl.bind_buffer(gl.ARRAY_BUFFER, Some(&buffer));
        gl.bind_buffer(gl.ARRAY_BUFFER, None);

        assert_eq!(
            env.gl.calls(),
            vec![
                MockCall::new(
                    "bindBuffer",
                    vec![MockArg::UInt(gl.ARRAY_BUFFER.0), MockArg::Value(object)]
                ),
                MockCall::new(
                    "bindBuffer",
                    vec![MockArg::UInt(gl.ARRAY_BUFFER.0), MockArg::Null]
                ),
            ]
        );
    }

    #[test]
    fn test_delete_and_is_renderbuffer() {
        let (env, gl) = mock_context();

        env.gl.respond("createRenderbuffer", MockValue::object());
        env.gl.respond("isRenderbuffer", MockValue::bool(false));

        let renderbuffer = gl.create_renderbuffer().unwrap();

        gl.delete_renderbuffer(Some(&renderbuffer));

        assert!(!gl.is_renderbuffer(Some(&renderbuffer)));

        let methods: Vec<_> = env.gl.calls().into_iter().map(|c| c.method).collect();

        assert_eq!(
            methods,
            vec!["createRenderbuffer", "deleteRenderbuffer", "isRenderbuffer"]
        );
    }

    #[test]
    fn test_framebuffer_renderbuffer_uses_standard_name() {
        let (env, gl) = mock_context();

        gl.framebuffer_renderbuffer(gl.FRAMEBUFFER, gl.DEPTH_ATTACHMENT, gl.RENDERBUFFER, None);

        assert_eq!(
            env.gl.calls(),
            vec![MockCall::new(
                "framebufferRenderbuffer",
                vec![
                    MockArg::UInt(gl.FRAMEBUFFER.0),
                    MockArg::UInt(gl.DEPTH_ATTACHMENT.0),
                    MockArg::UInt(gl.RENDERBUFFER.0),
                    MockArg::Null,
                ]
            )]
        );
    }

    #[test]
    fn test_check_framebuffer_status() {
        let (env, gl) = mock_context();
        let complete = gl.FRAMEBUFFER_COMPLETE;

        env.gl.respond(
            "checkFramebufferStatus",
            MockValue::number(f64::from(complete.0)),
        );

        assert_eq!(gl.check_framebuffer_status(gl.FRAMEBUFFER), complete);
    }

    #[test]
    fn test_active_texture_offset() {
        let (env, gl) = mock_context();

        gl.active_texture(gl.TEXTURE0 + 3);

        assert_eq!(
            env.gl.calls()[0].args,
            vec![MockArg::UInt(gl.TEXTURE0.0 + 3)]
        );
    }
}
