//! An in-memory host for exercising code written against [ForeignValue] without a browser.
//!
//! A [MockValue] behaves like a small subset of JavaScript values. Objects hold properties and can
//! be scripted to answer method calls; every call made on an object is recorded as a [MockCall]
//! with owned copies of its arguments, so tests can assert on exactly what was forwarded.
//!
//! ```
//! use webgl_bridge::mock::{MockArg, MockEnvironment};
//! use webgl_bridge::Context;
//!
//! let env = MockEnvironment::new();
//! let gl = Context::new(&env.global, &env.canvas, None).unwrap();
//!
//! gl.clear_color(0.0, 0.0, 0.0, 1.0);
//!
//! let calls = env.gl.calls_to("clearColor");
//!
//! assert_eq!(calls.len(), 1);
//! assert_eq!(calls[0].args[3], MockArg::Float(1.0));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::attributes::ContextAttributes;
use crate::constants::{GLenum, CONSTANT_TABLE};
use crate::foreign::{Arg, ArrayView, ForeignValue};

type Responder = Rc<dyn Fn(&[MockArg]) -> MockValue>;

enum Kind {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Array(Vec<MockValue>),
    Object,
}

struct Node {
    kind: Kind,
    properties: RefCell<HashMap<String, MockValue>>,
    responders: RefCell<HashMap<String, Responder>>,
    calls: RefCell<Vec<MockCall>>,
}

/// A reference to a mock host value. Clones refer to the same value; equality is identity.
#[derive(Clone)]
pub struct MockValue {
    node: Rc<Node>,
}

impl MockValue {
    fn new(kind: Kind) -> Self {
        MockValue {
            node: Rc::new(Node {
                kind,
                properties: RefCell::new(HashMap::new()),
                responders: RefCell::new(HashMap::new()),
                calls: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn undefined() -> Self {
        MockValue::new(Kind::Undefined)
    }

    pub fn null() -> Self {
        MockValue::new(Kind::Null)
    }

    pub fn bool(value: bool) -> Self {
        MockValue::new(Kind::Bool(value))
    }

    pub fn number(value: f64) -> Self {
        MockValue::new(Kind::Number(value))
    }

    pub fn string<S>(value: S) -> Self
    where
        S: Into<String>,
    {
        MockValue::new(Kind::Str(value.into()))
    }

    pub fn array(elements: Vec<MockValue>) -> Self {
        MockValue::new(Kind::Array(elements))
    }

    /// A new empty object.
    pub fn object() -> Self {
        MockValue::new(Kind::Object)
    }

    /// Sets a property. Only objects hold properties; on other values this has no effect.
    pub fn set(&self, name: &str, value: MockValue) {
        if let Kind::Object = self.node.kind {
            self.node
                .properties
                .borrow_mut()
                .insert(name.to_string(), value);
        }
    }

    /// Answers every call of `method` with the result of `responder`.
    pub fn on_call<F>(&self, method: &str, responder: F)
    where
        F: Fn(&[MockArg]) -> MockValue + 'static,
    {
        self.node
            .responders
            .borrow_mut()
            .insert(method.to_string(), Rc::new(responder));
    }

    /// Answers every call of `method` with `value`.
    pub fn respond(&self, method: &str, value: MockValue) {
        self.on_call(method, move |_| value.clone());
    }

    /// All calls made on this value, in call order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.node.calls.borrow().clone()
    }

    /// The calls of `method` made on this value, in call order.
    pub fn calls_to(&self, method: &str) -> Vec<MockCall> {
        self.node
            .calls
            .borrow()
            .iter()
            .filter(|call| call.method == method)
            .cloned()
            .collect()
    }

    pub fn clear_calls(&self) {
        self.node.calls.borrow_mut().clear();
    }

    /// Whether `self` and `other` refer to the same value.
    pub fn ptr_eq(&self, other: &MockValue) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl PartialEq for MockValue {
    fn eq(&self, other: &MockValue) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for MockValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.node.kind {
            Kind::Undefined => write!(f, "undefined"),
            Kind::Null => write!(f, "null"),
            Kind::Bool(value) => write!(f, "{}", value),
            Kind::Number(value) => write!(f, "{}", value),
            Kind::Str(value) => write!(f, "{:?}", value),
            Kind::Array(elements) => f.debug_list().entries(elements.iter()).finish(),
            Kind::Object => write!(f, "[object {:p}]", Rc::as_ptr(&self.node)),
        }
    }
}

impl ForeignValue for MockValue {
    fn is_null(&self) -> bool {
        match self.node.kind {
            Kind::Null => true,
            _ => false,
        }
    }

    fn is_undefined(&self) -> bool {
        match self.node.kind {
            Kind::Undefined => true,
            _ => false,
        }
    }

    fn get(&self, name: &str) -> Self {
        match &self.node.kind {
            Kind::Object => self
                .node
                .properties
                .borrow()
                .get(name)
                .cloned()
                .unwrap_or_else(MockValue::undefined),
            Kind::Array(elements) if name == "length" => MockValue::number(elements.len() as f64),
            _ => MockValue::undefined(),
        }
    }

    fn call(&self, method: &str, args: &[Arg<Self>]) -> Self {
        if let Kind::Object = self.node.kind {
            let args: Vec<MockArg> = args.iter().map(MockArg::from).collect();

            self.node.calls.borrow_mut().push(MockCall {
                method: method.to_string(),
                args: args.clone(),
            });

            let responder = self.node.responders.borrow().get(method).cloned();

            match responder {
                Some(responder) => responder(&args),
                None => MockValue::undefined(),
            }
        } else {
            MockValue::undefined()
        }
    }

    fn as_bool(&self) -> bool {
        match self.node.kind {
            Kind::Bool(value) => value,
            _ => false,
        }
    }

    fn as_f64(&self) -> f64 {
        match self.node.kind {
            Kind::Number(value) => value,
            _ => 0.0,
        }
    }

    fn as_string(&self) -> String {
        match &self.node.kind {
            Kind::Str(value) => value.clone(),
            _ => String::new(),
        }
    }

    fn index(&self, index: usize) -> Self {
        match &self.node.kind {
            Kind::Array(elements) => elements
                .get(index)
                .cloned()
                .unwrap_or_else(MockValue::undefined),
            _ => MockValue::undefined(),
        }
    }
}

/// A recorded method call.
#[derive(Clone, PartialEq, Debug)]
pub struct MockCall {
    pub method: String,
    pub args: Vec<MockArg>,
}

impl MockCall {
    pub fn new(method: &str, args: Vec<MockArg>) -> Self {
        MockCall {
            method: method.to_string(),
            args,
        }
    }
}

/// An owned copy of an [Arg].
#[derive(Clone, PartialEq, Debug)]
pub enum MockArg {
    Null,
    Bool(bool),
    Int(i32),
    UInt(u32),
    Long(i64),
    Float(f64),
    Str(String),
    Value(MockValue),
    Array(MockArray),
    Attributes(ContextAttributes),
}

impl MockArg {
    pub fn as_value(&self) -> Option<&MockValue> {
        match self {
            MockArg::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<'a> From<&Arg<'a, MockValue>> for MockArg {
    fn from(arg: &Arg<'a, MockValue>) -> Self {
        match arg {
            Arg::Null => MockArg::Null,
            Arg::Bool(value) => MockArg::Bool(*value),
            Arg::Int(value) => MockArg::Int(*value),
            Arg::UInt(value) => MockArg::UInt(*value),
            Arg::Long(value) => MockArg::Long(*value),
            Arg::Float(value) => MockArg::Float(*value),
            Arg::Str(value) => MockArg::Str(value.to_string()),
            Arg::Value(value) => MockArg::Value((*value).clone()),
            Arg::Array(view) => MockArg::Array(MockArray::from(*view)),
            Arg::Attributes(attributes) => MockArg::Attributes(**attributes),
        }
    }
}

/// An owned copy of an [ArrayView].
#[derive(Clone, PartialEq, Debug)]
pub enum MockArray {
    I8(Vec<i8>),
    U8(Vec<u8>),
    I16(Vec<i16>),
    U16(Vec<u16>),
    I32(Vec<i32>),
    U32(Vec<u32>),
    F32(Vec<f32>),
}

impl MockArray {
    pub fn byte_len(&self) -> usize {
        match self {
            MockArray::I8(data) => data.len(),
            MockArray::U8(data) => data.len(),
            MockArray::I16(data) => data.len() * 2,
            MockArray::U16(data) => data.len() * 2,
            MockArray::I32(data) => data.len() * 4,
            MockArray::U32(data) => data.len() * 4,
            MockArray::F32(data) => data.len() * 4,
        }
    }
}

impl<'a> From<ArrayView<'a>> for MockArray {
    fn from(view: ArrayView<'a>) -> Self {
        match view {
            ArrayView::I8(data) => MockArray::I8(data.to_vec()),
            ArrayView::U8(data) => MockArray::U8(data.to_vec()),
            ArrayView::I16(data) => MockArray::I16(data.to_vec()),
            ArrayView::U16(data) => MockArray::U16(data.to_vec()),
            ArrayView::I32(data) => MockArray::I32(data.to_vec()),
            ArrayView::U32(data) => MockArray::U32(data.to_vec()),
            ArrayView::F32(data) => MockArray::F32(data.to_vec()),
        }
    }
}

/// A browser-like environment: a global object that advertises WebGL support, a canvas, and the
/// rendering context the canvas hands out for `"webgl"`.
///
/// Every constant in [CONSTANT_TABLE] is set on the context to a distinct value, see
/// [MockEnvironment::constant].
pub struct MockEnvironment {
    pub global: MockValue,
    pub canvas: MockValue,
    pub gl: MockValue,
}

impl MockEnvironment {
    pub fn new() -> Self {
        let global = MockValue::object();
        let canvas = MockValue::object();
        let gl = MockValue::object();

        global.set("WebGLRenderingContext", MockValue::object());

        for (index, entry) in CONSTANT_TABLE.iter().enumerate() {
            gl.set(
                entry.name,
                MockValue::number(f64::from(MockEnvironment::constant_value(index))),
            );
        }

        let context = gl.clone();

        canvas.on_call("getContext", move |args| match args.first() {
            Some(MockArg::Str(context_type)) if context_type == "webgl" => context.clone(),
            _ => MockValue::null(),
        });

        MockEnvironment { global, canvas, gl }
    }

    fn constant_value(index: usize) -> u32 {
        0x1000 + index as u32
    }

    /// The value the mock context reports for the constant called `name`.
    pub fn constant(&self, name: &str) -> Option<GLenum> {
        CONSTANT_TABLE
            .iter()
            .position(|entry| entry.name == name)
            .map(|index| GLenum(MockEnvironment::constant_value(index)))
    }
}

impl Default for MockEnvironment {
    fn default() -> Self {
        MockEnvironment::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calls_are_recorded_in_order() {
        let object = MockValue::object();

        object.call("first", &[Arg::Int(1)]);
        object.call("second", &[Arg::Str("a"), Arg::Bool(true)]);

        let calls = object.calls();

        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].method, "first");
        assert_eq!(calls[1].args, vec![MockArg::Str("a".to_string()), MockArg::Bool(true)]);
    }

    #[test]
    fn test_responder_receives_args() {
        let object = MockValue::object();

        object.on_call("double", |args| match args {
            [MockArg::Int(value)] => MockValue::number(f64::from(*value) * 2.0),
            _ => MockValue::undefined(),
        });

        assert_eq!(object.call("double", &[Arg::Int(21)]).as_i32(), 42);
        assert!(object.call("missing", &[]).is_undefined());
    }

    #[test]
    fn test_array_access() {
        let array = MockValue::array(vec![MockValue::string("a"), MockValue::string("b")]);

        assert_eq!(array.length(), 2);
        assert_eq!(array.index(1).as_string(), "b");
        assert!(array.index(2).is_undefined());
    }

    #[test]
    fn test_non_objects() {
        let null = MockValue::null();

        assert!(null.get("anything").is_undefined());
        assert!(null.call("anything", &[]).is_undefined());
        assert!(null.calls().is_empty());
        assert_eq!(MockValue::string("x").as_f64(), 0.0);
        assert!(!MockValue::number(1.0).as_bool());
    }

    #[test]
    fn test_environment_canvas_rejects_other_context_types() {
        let env = MockEnvironment::new();

        assert!(env
            .canvas
            .call("getContext", &[Arg::Str("webgl")])
            .ptr_eq(&env.gl));
        assert!(env
            .canvas
            .call("getContext", &[Arg::Str("experimental-webgl")])
            .is_null());
        assert_eq!(
            env.constant("ARRAY_BUFFER").map(|v| v.id()),
            Some(env.gl.get("ARRAY_BUFFER").as_u32())
        );
    }
}
