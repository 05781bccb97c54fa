//! 키별 유효시간(TTL) 캐시.
//!
//! 한 키에 대한 조회는 슬롯 단위 비동기 락으로 직렬화되므로,
//! 캐시 미스 중 동시에 들어온 호출은 하나의 fetch 결과를 공유한다.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;

struct Entry<V> {
    value: V,
    // None이면 만료되지 않는다(Instant 범위를 넘는 TTL).
    expires_at: Option<Instant>,
}

impl<V> Entry<V> {
    fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now().checked_add(ttl),
        }
    }

    fn is_fresh(&self) -> bool {
        self.expires_at.is_none_or(|at| at > Instant::now())
    }
}

type Slot<V> = Arc<tokio::sync::Mutex<Option<Entry<V>>>>;

pub struct TtlCache<V> {
    slots: Mutex<HashMap<String, Slot<V>>>,
}

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }
}

impl<V: Clone> TtlCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 유효한 값이 있으면 돌려주고, 없거나 만료됐으면 `fetch`로 채운다.
    /// fetch 실패 시 슬롯은 비어 있는 상태로 남아 다음 호출이 다시 시도한다.
    pub async fn get_or_try_insert_with<F, Fut, E>(
        &self,
        key: &str,
        ttl: Duration,
        fetch: F,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let slot = self.slot(key);
        let mut guard = slot.lock().await;

        if let Some(entry) = guard.as_ref()
            && entry.is_fresh()
        {
            tracing::trace!(key, "cache hit");
            return Ok(entry.value.clone());
        }

        *guard = None;
        tracing::debug!(key, "cache miss, fetching");
        let value = fetch().await?;
        *guard = Some(Entry::new(value.clone(), ttl));
        Ok(value)
    }

    /// fetch 없이 현재 유효한 값만 조회한다.
    #[cfg(test)]
    pub(crate) async fn peek(&self, key: &str) -> Option<V> {
        let slot = self.existing_slot(key)?;
        let guard = slot.lock().await;
        guard
            .as_ref()
            .filter(|entry| entry.is_fresh())
            .map(|entry| entry.value.clone())
    }

    pub async fn invalidate(&self, key: &str) {
        if let Some(slot) = self.existing_slot(key) {
            *slot.lock().await = None;
        }
    }

    pub async fn clear(&self) {
        let slots: Vec<Slot<V>> = self.lock_slots().values().cloned().collect();
        for slot in slots {
            *slot.lock().await = None;
        }
    }

    fn slot(&self, key: &str) -> Slot<V> {
        self.lock_slots()
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(None)))
            .clone()
    }

    fn existing_slot(&self, key: &str) -> Option<Slot<V>> {
        self.lock_slots().get(key).cloned()
    }

    fn lock_slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, Slot<V>>> {
        // 슬롯 맵은 삽입만 하므로 poison 상태여도 내용은 유효하다.
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }
}
