//! Tokio runtime helper for the sync entry point.
//!
//! Storage (libsql) and the gloss client (reqwest) are async, but a run is a
//! strictly sequential walk over the vocabulary list. The binary drives the
//! whole run on one current-thread runtime so there is exactly one worker.

/// Run a future to completion on a fresh current-thread runtime.
///
/// Must not be called from inside another Tokio runtime.
///
/// # Errors
/// Returns the I/O error raised when the runtime cannot be built.
pub fn block_on<F, T>(future: F) -> std::io::Result<T>
where
    F: std::future::Future<Output = T>,
{
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(rt.block_on(future))
}

#[cfg(test)]
#[path = "runtime_test.rs"]
mod tests;
