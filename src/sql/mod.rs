//! Statement text: values always travel as bound parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
