//! [ForeignValue] for [JsValue], backed by `js_sys::Reflect`.

use js_sys::{
    Array, Float32Array, Function, Int16Array, Int32Array, Int8Array, Reflect, Uint16Array,
    Uint32Array, Uint8Array,
};
use log::{error, warn};
use wasm_bindgen::{JsCast, JsValue};

use crate::foreign::{Arg, ArrayView, ForeignValue};

impl ForeignValue for JsValue {
    fn is_null(&self) -> bool {
        JsValue::is_null(self)
    }

    fn is_undefined(&self) -> bool {
        JsValue::is_undefined(self)
    }

    fn get(&self, name: &str) -> Self {
        if !self.is_object() && !self.is_function() {
            return JsValue::UNDEFINED;
        }

        Reflect::get(self, &JsValue::from_str(name)).unwrap_or_else(|err| {
            warn!("Reading property `{}` threw: {:?}", name, err);

            JsValue::UNDEFINED
        })
    }

    fn call(&self, method: &str, args: &[Arg<Self>]) -> Self {
        let function = match ForeignValue::get(self, method).dyn_into::<Function>() {
            Ok(function) => function,
            Err(_) => {
                warn!("`{}` is not a function on {:?}", method, self);

                return JsValue::UNDEFINED;
            }
        };

        let js_args: Array = args.iter().map(to_js).collect();

        Reflect::apply(&function, self, &js_args).unwrap_or_else(|err| {
            error!("Call to `{}` threw: {:?}", method, err);

            JsValue::UNDEFINED
        })
    }

    fn as_bool(&self) -> bool {
        JsValue::as_bool(self).unwrap_or(false)
    }

    fn as_f64(&self) -> f64 {
        JsValue::as_f64(self).unwrap_or(0.0)
    }

    fn as_string(&self) -> String {
        JsValue::as_string(self).unwrap_or_default()
    }

    fn index(&self, index: usize) -> Self {
        if !self.is_object() {
            return JsValue::UNDEFINED;
        }

        Reflect::get_u32(self, index as u32).unwrap_or(JsValue::UNDEFINED)
    }
}

fn to_js(arg: &Arg<JsValue>) -> JsValue {
    match arg {
        Arg::Null => JsValue::NULL,
        Arg::Bool(value) => JsValue::from_bool(*value),
        Arg::Int(value) => JsValue::from(*value),
        Arg::UInt(value) => JsValue::from(*value),
        Arg::Long(value) => JsValue::from_f64(*value as f64),
        Arg::Float(value) => JsValue::from_f64(*value),
        Arg::Str(value) => JsValue::from_str(value),
        Arg::Value(value) => (*value).clone(),
        Arg::Array(view) => array_to_js(*view),
        Arg::Attributes(attributes) => {
            #[allow(deprecated)]
            let options = JsValue::from_serde(attributes);

            options.unwrap_or_else(|err| {
                error!("Could not convert context attributes: {}", err);

                JsValue::UNDEFINED
            })
        }
    }
}

// The typed arrays are copies: a view into WASM memory would be invalidated by any allocation
// made before the host reads it.
fn array_to_js(view: ArrayView) -> JsValue {
    match view {
        ArrayView::I8(data) => Int8Array::from(data).into(),
        ArrayView::U8(data) => Uint8Array::from(data).into(),
        ArrayView::I16(data) => Int16Array::from(data).into(),
        ArrayView::U16(data) => Uint16Array::from(data).into(),
        ArrayView::I32(data) => Int32Array::from(data).into(),
        ArrayView::U32(data) => Uint32Array::from(data).into(),
        ArrayView::F32(data) => Float32Array::from(data).into(),
    }
}
