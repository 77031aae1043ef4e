use crate::constants::GLenum;
use crate::foreign::{Arg, ForeignValue};

use super::Context;

impl<V> Context<V>
where
    V: ForeignValue,
{
    /// Draws `count` vertices from the enabled vertex attribute arrays, starting at `first`.
    pub fn draw_arrays(&self, mode: GLenum, first: i32, count: i32) {
        self.call(
            "drawArrays",
            &[Arg::UInt(mode.0), Arg::Int(first), Arg::Int(count)],
        );
    }

    /// Draws `count` indexed vertices, reading indices of type `type_` from the buffer bound to
    /// `ELEMENT_ARRAY_BUFFER` starting at byte `offset`.
    pub fn draw_elements(&self, mode: GLenum, count: i32, type_: GLenum, offset: i64) {
        self.call(
            "drawElements",
            &[
                Arg::UInt(mode.0),
                Arg::Int(count),
                Arg::UInt(type_.0),
                Arg::Long(offset),
            ],
        );
    }

    /// Blocks until all previously issued commands have completed.
    pub fn finish(&self) {
        self.call("finish", &[]);
    }

    pub fn flush(&self) {
        self.call("flush", &[]);
    }
}
