use failure::Fail;

/// Error returned when a [Context](crate::Context) could not be created.
///
/// These are the only errors the binding raises. Failures inside the rendering context itself are
/// recorded by the context and must be polled with
/// [Context::get_error](crate::Context::get_error) or read from the shader and program info logs.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Fail)]
pub enum ContextError {
    /// The host environment does not provide WebGL at all.
    #[fail(display = "Your browser doesn't appear to support webgl.")]
    Unsupported,

    /// The canvas rejected both the `webgl` and the `experimental-webgl` context requests.
    #[fail(display = "Creating a webgl context has failed.")]
    CreationFailed,
}
