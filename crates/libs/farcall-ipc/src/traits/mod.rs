mod channel;
mod diagnostics;

pub use channel::InvocationChannel;
pub use diagnostics::DiagnosticSink;
