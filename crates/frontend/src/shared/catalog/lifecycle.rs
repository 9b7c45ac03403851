//! Single-entity fetch lifecycle: `Idle -> Loading -> (Ready | Failed)`
//!
//! Every `begin` issues a ticket with a new sequence number. Only the result
//! carrying the latest ticket may change state; anything older was superseded
//! and is dropped.

use contracts::domain::common::CatalogEntity;

use super::api::{fetch_entity, CatalogApi};
use super::timer::{with_timeout, Timer};
use super::CatalogError;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(CatalogError),
}

/// Proof that a request was started; `seq` orders requests of one lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchLifecycle<T> {
    state: FetchState<T>,
    latest: u64,
}

impl<T> Default for FetchLifecycle<T> {
    fn default() -> Self {
        Self {
            state: FetchState::Idle,
            latest: 0,
        }
    }
}

impl<T> FetchLifecycle<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CatalogError> {
        match &self.state {
            FetchState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Start a request for `id`, superseding any request still in flight
    ///
    /// An empty identifier never reaches the network: the lifecycle goes
    /// straight to `Failed(InvalidIdentifier)`.
    pub fn begin(&mut self, id: &str) -> Result<FetchTicket, CatalogError> {
        self.latest += 1;
        if id.trim().is_empty() {
            self.state = FetchState::Failed(CatalogError::InvalidIdentifier);
            return Err(CatalogError::InvalidIdentifier);
        }
        self.state = FetchState::Loading;
        Ok(FetchTicket { seq: self.latest })
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.seq == self.latest
    }

    /// Apply a result; returns `false` and leaves state untouched when the ticket is stale
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<T, CatalogError>) -> bool {
        if !self.is_current(ticket) || !self.is_loading() {
            return false;
        }
        self.state = match result {
            Ok(data) => FetchState::Ready(data),
            Err(e) => FetchState::Failed(e),
        };
        true
    }

}

impl<T: Clone> FetchLifecycle<T> {
    /// Apply a result and return the entity when it became the current data
    ///
    /// Stale results and failures return `None`; only the returned value may seed a form.
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<T, CatalogError>) -> Option<T> {
        if self.complete(ticket, result) {
            self.data().cloned()
        } else {
            None
        }
    }
}

/// One bounded fetch of an entity; the network call is the only side effect
pub async fn fetch_with_timeout<E, A, W>(
    api: &A,
    timer: &W,
    timeout_ms: u32,
    id: &str,
) -> Result<E, CatalogError>
where
    E: CatalogEntity,
    A: CatalogApi + ?Sized,
    W: Timer + ?Sized,
{
    log::debug!("Loading {} {}", E::element_name(), id);
    let result = with_timeout(timer, timeout_ms, fetch_entity::<E, A>(api, id)).await;
    if let Err(e) = &result {
        log::warn!("Failed to load {} {}: {}", E::element_name(), id, e);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::testing::{ExpiredTimer, FakeApi, NeverTimer};
    use contracts::domain::a001_product::aggregate::Product;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_happy_path() {
        let mut lc = FetchLifecycle::<&str>::new();
        assert_eq!(lc.state(), &FetchState::Idle);

        let t = lc.begin("p1").unwrap();
        assert!(lc.is_loading());
        assert!(lc.complete(t, Ok("widget")));
        assert_eq!(lc.data(), Some(&"widget"));
    }

    #[test]
    fn test_empty_identifier_fails_fast() {
        let mut lc = FetchLifecycle::<&str>::new();
        assert_eq!(lc.begin(""), Err(CatalogError::InvalidIdentifier));
        assert_eq!(lc.begin("   "), Err(CatalogError::InvalidIdentifier));
        assert_eq!(lc.error(), Some(&CatalogError::InvalidIdentifier));
    }

    #[test]
    fn test_superseded_result_is_discarded_when_it_arrives_last() {
        let mut lc = FetchLifecycle::<&str>::new();
        let a = lc.begin("A").unwrap();
        let b = lc.begin("B").unwrap();

        assert!(lc.complete(b, Ok("from B")));
        assert!(!lc.complete(a, Ok("from A")));
        assert_eq!(lc.data(), Some(&"from B"));
    }

    #[test]
    fn test_superseded_result_is_discarded_when_it_arrives_first() {
        let mut lc = FetchLifecycle::<&str>::new();
        let a = lc.begin("A").unwrap();
        let b = lc.begin("B").unwrap();

        assert!(!lc.complete(a, Err(CatalogError::FetchFailed("boom".into()))));
        assert!(lc.is_loading());
        assert!(lc.complete(b, Err(CatalogError::FetchFailed("B down".into()))));
        assert_eq!(
            lc.error(),
            Some(&CatalogError::FetchFailed("B down".into()))
        );
    }

    #[test]
    fn test_reload_resets_terminal_state() {
        let mut lc = FetchLifecycle::<&str>::new();
        let t = lc.begin("A").unwrap();
        lc.complete(t, Err(CatalogError::FetchFailed("x".into())));

        let t = lc.begin("A").unwrap();
        assert!(lc.is_loading());
        assert!(lc.complete(t, Ok("ok")));
        assert!(!lc.complete(t, Ok("late")));
        assert_eq!(lc.data(), Some(&"ok"));
    }

    fn product(id: &str, name: &str) -> Product {
        serde_json::from_value(json!({"_id": id, "name": name, "purchaseprice": 1})).unwrap()
    }

    #[test]
    fn test_settle_seeds_only_from_latest_when_stale_arrives_last() {
        let mut lc = FetchLifecycle::<Product>::new();
        let a = lc.begin("A").unwrap();
        let b = lc.begin("B").unwrap();

        let seeded = lc.settle(b, Ok(product("B", "Bolt")));
        assert_eq!(seeded.map(|p| p.name), Some("Bolt".to_string()));
        assert_eq!(lc.settle(a, Ok(product("A", "Anvil"))), None);
        assert_eq!(lc.data().map(|p| p.id.as_str()), Some("B"));
    }

    #[test]
    fn test_settle_seeds_only_from_latest_when_stale_arrives_first() {
        let mut lc = FetchLifecycle::<Product>::new();
        let a = lc.begin("A").unwrap();
        let b = lc.begin("B").unwrap();

        assert_eq!(lc.settle(a, Ok(product("A", "Anvil"))), None);
        assert!(lc.is_loading());
        let seeded = lc.settle(b, Ok(product("B", "Bolt")));
        assert_eq!(seeded.map(|p| p.id), Some("B".to_string()));
    }

    #[test]
    fn test_settle_failure_seeds_nothing() {
        let mut lc = FetchLifecycle::<Product>::new();
        let t = lc.begin("A").unwrap();
        assert_eq!(lc.settle(t, Err(CatalogError::FetchFailed("HTTP 404".into()))), None);
        assert_eq!(lc.error(), Some(&CatalogError::FetchFailed("HTTP 404".into())));
    }

    #[test]
    fn test_interleaved_async_requests_keep_latest() {
        let lifecycle = Rc::new(RefCell::new(FetchLifecycle::<String>::new()));
        let (tx_a, rx_a) = oneshot::channel::<String>();
        let (tx_b, rx_b) = oneshot::channel::<String>();

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        for (id, rx) in [("A", rx_a), ("B", rx_b)] {
            let ticket = lifecycle.borrow_mut().begin(id).unwrap();
            let lifecycle = lifecycle.clone();
            spawner
                .spawn_local(async move {
                    let result = rx.await.map_err(|_| CatalogError::FetchFailed("cancelled".into()));
                    lifecycle.borrow_mut().complete(ticket, result);
                })
                .unwrap();
        }

        tx_b.send("B".into()).unwrap();
        pool.run_until_stalled();
        tx_a.send("A".into()).unwrap();
        pool.run_until_stalled();

        assert_eq!(lifecycle.borrow().data().map(String::as_str), Some("B"));
    }

    #[test]
    fn test_fetch_with_timeout_success_and_failure() {
        let api = FakeApi::new().with_json(
            "/product/product/p1",
            json!({"data": {"_id": "p1", "name": "Widget", "purchaseprice": 10}}),
        );
        let product: Product = block_on(fetch_with_timeout(&api, &NeverTimer, 15_000, "p1")).unwrap();
        assert_eq!(product.id, "p1");

        let missing: Result<Product, _> =
            block_on(fetch_with_timeout(&api, &NeverTimer, 15_000, "p2"));
        assert!(matches!(missing, Err(CatalogError::FetchFailed(_))));
    }

    #[test]
    fn test_timeout_surfaces_as_failed_state() {
        let mut lc = FetchLifecycle::<Product>::new();
        let ticket = lc.begin("p1").unwrap();

        let never = futures::future::pending::<Result<Product, CatalogError>>();
        let result = block_on(with_timeout(&ExpiredTimer, 10_000, never));

        assert!(lc.complete(ticket, result));
        assert_eq!(
            lc.error(),
            Some(&CatalogError::TimedOut { after_ms: 10_000 })
        );
    }
}
