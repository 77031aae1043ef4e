//! A WebGL 1.0 rendering context binding over a generic foreign value bridge.
//!
//! The binding is written against [ForeignValue], a small abstraction of a dynamically typed host
//! value (property access, method calls and coercions). In the browser the host values are
//! [wasm_bindgen::JsValue]s and a context is obtained from a canvas:
//!
//! ```no_run
//! use web_sys::HtmlCanvasElement;
//! use webgl_bridge::Context;
//!
//! # fn run(canvas: HtmlCanvasElement) -> Result<(), webgl_bridge::ContextError> {
//! let gl = Context::from_canvas(&canvas, None)?;
//!
//! gl.clear_color(0.0, 0.0, 0.0, 1.0);
//! gl.clear(gl.COLOR_BUFFER_BIT);
//! # Ok(())
//! # }
//! ```
//!
//! Outside the browser, the [mock] host stands in for the rendering context and records every
//! call made on it.
//!
//! Each [Context] method makes exactly one call on the underlying rendering context. The binding
//! does not track GL state or object lifetimes, and it does not turn GL errors into Rust errors:
//! those are polled with [Context::get_error] as they would be in JavaScript.

mod attributes;
mod constants;
mod context;
mod error;
mod foreign;
mod info;
mod js;

pub mod handle;
pub mod mock;

pub use crate::attributes::ContextAttributes;
pub use crate::constants::{ConstantEntry, Constants, GLenum, CONSTANT_TABLE};
pub use crate::context::Context;
pub use crate::error::ContextError;
pub use crate::foreign::{Arg, ArrayView, ForeignValue};
pub use crate::info::{ActiveInfo, ShaderPrecisionFormat};
