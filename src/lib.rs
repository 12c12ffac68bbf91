//! Codec for router flow export protocols: NetFlow v5, NetFlow v9 and IPFIX.
//!
//! Records are declared once through [`wire_schema!`], which fixes the
//! order members appear on the wire, and are then sized, encoded and
//! decoded by the generic engine in [`schema`]. Template driven data sets
//! are decoded into [`Value`]s and read back by field name through a
//! [`view::View`].

#[macro_use]
extern crate tracing;

pub mod config;
pub mod data;
mod error;
pub mod field;
pub mod ipfix;
pub mod netflow5;
pub mod netflow9;
pub mod schema;
pub mod set;
pub mod state;
mod stream;
pub mod template;
pub mod value;
pub mod view;
pub mod wire;

pub use elements;
pub use error::{Error, ErrorKind};
pub use value::Value;
