//! Runtime type introspection on top of `std::any::Any`.
//!
//! A [`Type`] is a runtime descriptor carrying the operations needed to build
//! and mutate values of a [`Reflect`] type; a [`Value`] is a boxed value
//! paired with its descriptor. The container, function and channel values
//! are dynamic counterparts of `Vec`, `HashMap`, `fn` and channels whose
//! element types are checked when used instead of at compile time.

mod chan;
mod func;
mod map;
mod slice;
mod types;
mod value;

pub use chan::{make_chan, ChanReceiver, ChanValue};
pub use func::{make_func, DynFn, FuncType, FuncValue};
pub use map::{make_map, make_map_with_size, MapValue};
pub use slice::{make_slice, SliceValue};
pub use types::{Field, Kind, Method, Reflect, Type};
pub use value::{BoundMethod, FieldMut, Value};
