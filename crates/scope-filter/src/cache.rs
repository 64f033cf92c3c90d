use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::OnceCell;

/// Run-scoped memo table mapping each key to a pending or completed value.
///
/// Concurrent callers asking for the same key share one computation. A failed
/// computation leaves the slot empty so a later caller may retry it.
pub(crate) struct MemoCache<K, V> {
    slots: Mutex<HashMap<K, Arc<OnceCell<V>>>>,
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub(crate) fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) async fn get_or_try_init<F, Fut, E>(&self, key: K, init: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let slot = self.slot(key);
        slot.get_or_try_init(init).await.cloned()
    }

    #[cfg(test)]
    pub(crate) fn completed(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    fn slot(&self, key: K) -> Arc<OnceCell<V>> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(key).or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn computes_each_key_once() {
        let cache: MemoCache<String, usize> = MemoCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_try_init("a".to_string(), || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, ()>(42)
                })
                .await;
            assert_eq!(value, Ok(42));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.completed(), 1);
    }

    #[tokio::test]
    async fn concurrent_requests_share_one_computation() {
        let cache: MemoCache<&str, usize> = MemoCache::new();
        let calls = AtomicUsize::new(0);

        let lookups = (0..10).map(|_| {
            cache.get_or_try_init("shared", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                tokio::task::yield_now().await;
                Ok::<_, ()>(7)
            })
        });
        let results = futures::future::join_all(lookups).await;

        assert!(results.iter().all(|r| *r == Ok(7)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_computation_is_not_cached() {
        let cache: MemoCache<&str, usize> = MemoCache::new();

        let first = cache.get_or_try_init("k", || async { Err("boom") }).await;
        let second = cache.get_or_try_init("k", || async { Ok::<_, &str>(1) }).await;

        assert_eq!(first, Err("boom"));
        assert_eq!(second, Ok(1));
    }

    #[tokio::test]
    async fn distinct_keys_are_independent() {
        let cache: MemoCache<u8, u8> = MemoCache::new();

        let a = cache.get_or_try_init(1, || async { Ok::<_, ()>(10) }).await;
        let b = cache.get_or_try_init(2, || async { Ok::<_, ()>(20) }).await;

        assert_eq!((a, b), (Ok(10), Ok(20)));
        assert_eq!(cache.completed(), 2);
    }
}
