pub mod naive;
#[cfg(test)]
mod properties;
#[cfg(test)]
mod scenarios;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Route the library's tracing output to the test writer, filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set; safe to call from every test.
pub fn test_run() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}
