//! Closed lookup tables shared by the profiler.
//!
//! - [`dialects`]: service type → connection scheme
//! - [`converters`]: scalar kind name → converter
//!
//! Both tables are fixed at compile time. Entries are plain enum variants,
//! so the tables can be read from any number of threads without locking.

pub mod converters;
pub mod dialects;

pub use converters::{ByteaToHex, CustomType, HexByteString, ScalarConverter, UuidString};
pub use dialects::{Dialect, Scheme};
