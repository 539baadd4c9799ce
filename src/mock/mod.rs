//! Mock API simulation layer

pub mod data;
pub mod responder;

pub use responder::MockResponder;
