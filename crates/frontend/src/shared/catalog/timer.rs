use futures::future::{self, Either, LocalBoxFuture};
use std::future::Future;

use super::CatalogError;

/// Source of sleep futures used to bound request duration
pub trait Timer {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;
}

/// Timer backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::TimeoutFuture::new(ms))
    }
}

/// Run `request`, failing with [`CatalogError::TimedOut`] if it is still pending after `after_ms`
///
/// The request itself is not aborted, only dropped.
pub async fn with_timeout<T, F, W>(timer: &W, after_ms: u32, request: F) -> Result<T, CatalogError>
where
    F: Future<Output = Result<T, CatalogError>>,
    W: Timer + ?Sized,
{
    let request = std::pin::pin!(request);
    match future::select(request, timer.sleep(after_ms)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            log::warn!("Request timed out after {} ms", after_ms);
            Err(CatalogError::TimedOut { after_ms })
        }
    }
}
