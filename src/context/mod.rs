//! The rendering context binding.
//!
//! [Context] wraps one foreign WebGL rendering context. Apart from creating the context and copying
//! its constants, it does nothing on its own: every method is a single synchronous call on the
//! underlying context, with its arguments passed through in order and its result coerced to a
//! concrete type. The binding keeps no GL state; every query goes to the host.
//!
//! Errors that occur inside the rendering context are not reported by the methods that caused
//! them. As in WebGL itself, they are recorded by the context and must be polled with
//! [Context::get_error], or read from [Context::get_shader_info_log] and
//! [Context::get_program_info_log].

mod drawing;
mod queries;
mod resources;
mod shaders;
mod state;
mod uniforms;
mod upload;

use std::ops::Deref;

use log::debug;
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use crate::attributes::ContextAttributes;
use crate::constants::Constants;
use crate::error::ContextError;
use crate::foreign::{Arg, ForeignValue};

const CONTEXT_TYPE: &str = "webgl";
const LEGACY_CONTEXT_TYPE: &str = "experimental-webgl";

/// A WebGL 1.0 rendering context.
///
/// Derefs to its [Constants], so constants read as they would in JavaScript:
///
/// ```
/// # use webgl_bridge::mock::MockEnvironment;
/// # use webgl_bridge::Context;
/// # let env = MockEnvironment::new();
/// let gl = Context::new(&env.global, &env.canvas, None).unwrap();
///
/// gl.clear(gl.COLOR_BUFFER_BIT | gl.DEPTH_BUFFER_BIT);
/// ```
#[derive(Clone, Debug)]
pub struct Context<V> {
    gl: V,
    constants: Constants,
}

impl<V> Context<V>
where
    V: ForeignValue,
{
    /// Requests a rendering context from `canvas`.
    ///
    /// `global` is the host's global object; it is only used to check that the host supports
    /// WebGL at all. The context is first requested as `"webgl"` and, if the canvas refuses, as
    /// `"experimental-webgl"`. Both requests pass `attributes`, or
    /// [ContextAttributes::default] if none are given.
    ///
    /// # Errors
    ///
    /// Returns [ContextError::Unsupported] if `global` has no `WebGLRenderingContext`, and
    /// [ContextError::CreationFailed] if the canvas refuses both context types.
    pub fn new(
        global: &V,
        canvas: &V,
        attributes: Option<ContextAttributes>,
    ) -> Result<Self, ContextError> {
        if global.get("WebGLRenderingContext").is_nullish() {
            return Err(ContextError::Unsupported);
        }

        let attributes = attributes.unwrap_or_default();

        let mut gl = request_context(canvas, CONTEXT_TYPE, &attributes);

        if gl.is_nullish() {
            debug!(
                "Canvas refused a `{}` context, falling back to `{}`",
                CONTEXT_TYPE, LEGACY_CONTEXT_TYPE
            );

            gl = request_context(canvas, LEGACY_CONTEXT_TYPE, &attributes);

            if gl.is_nullish() {
                return Err(ContextError::CreationFailed);
            }
        }

        Ok(Context::from_foreign(gl))
    }

    /// Wraps a rendering context that was obtained by other means.
    pub fn from_foreign(gl: V) -> Self {
        let constants = Constants::from_foreign(&gl);

        Context { gl, constants }
    }

    /// The underlying foreign rendering context.
    pub fn foreign(&self) -> &V {
        &self.gl
    }

    pub fn into_foreign(self) -> V {
        self.gl
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    fn call(&self, method: &str, args: &[Arg<V>]) -> V {
        self.gl.call(method, args)
    }

    /// Returns the attributes the context was actually created with. These may differ from the
    /// requested attributes.
    ///
    /// Returns `None` if the context is lost.
    pub fn get_context_attributes(&self) -> Option<ContextAttributes> {
        let attributes = self.call("getContextAttributes", &[]);

        if attributes.is_nullish() {
            None
        } else {
            Some(ContextAttributes::from_foreign(&attributes))
        }
    }

    pub fn is_context_lost(&self) -> bool {
        self.call("isContextLost", &[]).as_bool()
    }

    /// Returns the names of the extensions the context supports, in the order the host reports
    /// them. Empty if the context is lost.
    pub fn get_supported_extensions(&self) -> Vec<String> {
        let extensions = self.call("getSupportedExtensions", &[]);

        if extensions.is_nullish() {
            return Vec::new();
        }

        (0..extensions.length())
            .map(|i| extensions.index(i).as_string())
            .collect()
    }

    /// Enables the extension called `name` and returns its extension object, or `None` if the
    /// extension is not supported.
    pub fn get_extension(&self, name: &str) -> Option<V> {
        let extension = self.call("getExtension", &[Arg::Str(name)]);

        if extension.is_nullish() {
            None
        } else {
            Some(extension)
        }
    }

    /// The width of the drawing buffer in pixels.
    pub fn drawing_buffer_width(&self) -> i32 {
        self.gl.get("drawingBufferWidth").as_i32()
    }

    /// The height of the drawing buffer in pixels.
    pub fn drawing_buffer_height(&self) -> i32 {
        self.gl.get("drawingBufferHeight").as_i32()
    }
}

impl Context<JsValue> {
    /// Requests a rendering context from an HTML canvas, see [Context::new].
    pub fn from_canvas(
        canvas: &HtmlCanvasElement,
        attributes: Option<ContextAttributes>,
    ) -> Result<Self, ContextError> {
        let global: JsValue = js_sys::global().into();
        let canvas: &JsValue = canvas.as_ref();

        Context::new(&global, canvas, attributes)
    }
}

impl<V> Deref for Context<V> {
    type Target = Constants;

    fn deref(&self) -> &Constants {
        &self.constants
    }
}

fn request_context<V>(canvas: &V, context_type: &str, attributes: &ContextAttributes) -> V
where
    V: ForeignValue,
{
    canvas.call(
        "getContext",
        &[Arg::Str(context_type), Arg::Attributes(attributes)],
    )
}

#[cfg(test)]
pub(crate) fn mock_context() -> (crate::mock::MockEnvironment, Context<crate::mock::MockValue>) {
    let env = crate::mock::MockEnvironment::new();
    let context = Context::new(&env.global, &env.canvas, None).unwrap();

    (env, context)
}
