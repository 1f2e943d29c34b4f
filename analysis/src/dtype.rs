// dtype.rs — Element types carried by symbols.
//
// A closed set of value types the generated code can hold. Downstream
// emission maps them to C type names via `c_name`; the symbol model builds
// pointer and struct types on top of them.

use serde::{Deserialize, Serialize};

/// Element type of a scalar, array cell, or pointee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DType {
    Int32,
    Int64,
    Float,
    Double,
    /// Flag word written by one thread and polled by another; must not be
    /// cached in a register by the generated code.
    VolatileInt,
    /// No value type. A `Pointer` with a `Void` pointee is a generic address.
    Void,
}

impl DType {
    /// C type name used by the code-emission backend.
    pub fn c_name(&self) -> &'static str {
        match self {
            DType::Int32 => "int",
            DType::Int64 => "long",
            DType::Float => "float",
            DType::Double => "double",
            DType::VolatileInt => "volatile int",
            DType::Void => "void",
        }
    }
}
