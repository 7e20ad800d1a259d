use crate::diagnostics::Diagnostic;

/// Receives advisory diagnostics from the resolver.
///
/// Reporting never blocks or fails a lookup.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}
