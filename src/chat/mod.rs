//! Scripted chat widget logic.

mod responder;

pub use responder::respond;
