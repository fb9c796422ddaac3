pub mod dialects;
pub mod params;

pub use dialects::{supported_dialects, Dialect};
pub use params::{merge, ParamMap};
