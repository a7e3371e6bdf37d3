pub mod types;

pub mod encode;
pub mod scan;

pub use encode::{encode, encode_line};
pub use scan::scan;
