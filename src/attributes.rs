use serde_derive::{Deserialize, Serialize};

use crate::foreign::ForeignValue;

/// The drawing buffer attributes of a rendering context.
///
/// Passed to the canvas when a context is requested, and read back from a live context with
/// [Context::get_context_attributes](crate::Context::get_context_attributes). The values read back
/// may differ from the requested ones if the host could not honor them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextAttributes {
    /// Whether the drawing buffer has an alpha channel for destination alpha operations and for
    /// compositing with the page.
    pub alpha: bool,

    /// Whether the drawing buffer has a depth buffer of at least 16 bits.
    pub depth: bool,

    /// Whether the drawing buffer has a stencil buffer of at least 8 bits.
    pub stencil: bool,

    /// Whether the drawing buffer performs antialiasing, if the implementation supports it.
    pub antialias: bool,

    /// Whether the page compositor treats the drawing buffer's colors as having premultiplied
    /// alpha. Ignored when `alpha` is `false`.
    pub premultiplied_alpha: bool,

    /// Whether the drawing buffer keeps its contents until they are cleared or overwritten,
    /// rather than being cleared after compositing.
    pub preserve_drawing_buffer: bool,
}

impl ContextAttributes {
    /// Reads the attributes from a foreign attributes object, as returned by the host's
    /// `getContextAttributes`.
    pub fn from_foreign<V>(attributes: &V) -> Self
    where
        V: ForeignValue,
    {
        ContextAttributes {
            alpha: attributes.get("alpha").as_bool(),
            depth: attributes.get("depth").as_bool(),
            stencil: attributes.get("stencil").as_bool(),
            antialias: attributes.get("antialias").as_bool(),
            premultiplied_alpha: attributes.get("premultipliedAlpha").as_bool(),
            preserve_drawing_buffer: attributes.get("preserveDrawingBuffer").as_bool(),
        }
    }
}

impl Default for ContextAttributes {
    fn default() -> Self {
        ContextAttributes {
            alpha: true,
            depth: true,
            stencil: false,
            antialias: true,
            premultiplied_alpha: true,
            preserve_drawing_buffer: false,
        }
    }
}
