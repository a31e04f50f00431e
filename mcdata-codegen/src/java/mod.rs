//! Java code generation modules.

pub mod emitter;
pub mod writer;

pub use emitter::JavaEmitter;
pub use writer::SourceWriter;
