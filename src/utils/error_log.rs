/// Fire-and-forget error reporting used by the upload handler. Recording
/// must never fail or block a response; implementations only append.
pub trait ErrorLog: Send + Sync {
    fn record(&self, message: &str);
}

/// Production sink, forwards to the tracing subscriber installed in main.
#[derive(Debug, Clone, Default)]
pub struct TracingErrorLog;

impl ErrorLog for TracingErrorLog {
    fn record(&self, message: &str) {
        tracing::error!("{}", message);
    }
}
