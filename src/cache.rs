use crate::calendar::HolidaySource;
use crate::model::CalendarDate;
use chrono::Datelike;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Capacité de cache injectée (jamais d'état global).
pub trait Cache<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;
    fn set(&self, key: K, value: V);
}

/// Cache clé/valeur en mémoire avec expiration.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: Mutex<HashMap<K, (Instant, V)>>,
}

impl<K, V> TtlCache<K, V> {
    /// `Duration::ZERO` désactive le cache (chaque entrée expire aussitôt).
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<K, (Instant, V)>> {
        // aucune invariante ne dépend d'une écriture interrompue
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl<K, V> Cache<K, V> for TtlCache<K, V>
where
    K: Eq + Hash + Send,
    V: Clone + Send,
{
    fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.lock();
        let (inserted, value) = entries.get(key)?;
        if inserted.elapsed() < self.ttl {
            return Some(value.clone());
        }
        entries.remove(key);
        None
    }

    fn set(&self, key: K, value: V) {
        if self.ttl.is_zero() {
            return;
        }
        self.lock().insert(key, (Instant::now(), value));
    }
}

/// Mémoïse par année les fériés d'une autre source.
pub struct CachedHolidays<S, C> {
    inner: S,
    cache: C,
}

impl<S, C> CachedHolidays<S, C>
where
    S: HolidaySource,
    C: Cache<i32, Vec<CalendarDate>>,
{
    pub fn new(inner: S, cache: C) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }
}

impl<S, C> HolidaySource for CachedHolidays<S, C>
where
    S: HolidaySource,
    C: Cache<i32, Vec<CalendarDate>>,
{
    fn holidays_in_year(&self, year: i32) -> Vec<CalendarDate> {
        if let Some(hit) = self.cache.get(&year) {
            return hit;
        }
        #[cfg(feature = "logging")]
        tracing::debug!(year, "holiday cache miss");
        let dates = self.inner.holidays_in_year(year);
        self.cache.set(year, dates.clone());
        dates
    }

    fn is_holiday(&self, day: CalendarDate) -> bool {
        self.holidays_in_year(day.year()).binary_search(&day).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{FrenchHolidays, HolidayList};
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[derive(Default)]
    struct Counting {
        calls: AtomicUsize,
    }

    impl HolidaySource for Counting {
        fn holidays_in_year(&self, year: i32) -> Vec<CalendarDate> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            FrenchHolidays.holidays_in_year(year)
        }
    }

    #[test]
    fn ttl_cache_get_set() {
        let cache: TtlCache<String, u32> = TtlCache::new(Duration::from_secs(60));
        assert_eq!(cache.get(&"paris-lyon".to_string()), None);
        cache.set("paris-lyon".to_string(), 465);
        assert_eq!(cache.get(&"paris-lyon".to_string()), Some(465));
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn zero_ttl_never_stores() {
        let cache: TtlCache<i32, u32> = TtlCache::new(Duration::ZERO);
        cache.set(1, 1);
        assert_eq!(cache.get(&1), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn expired_entries_are_evicted() {
        let cache: TtlCache<i32, u32> = TtlCache::new(Duration::from_millis(1));
        cache.set(7, 42);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(cache.get(&7), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn cached_holidays_compute_each_year_once() {
        let cached = CachedHolidays::new(
            Counting::default(),
            TtlCache::new(Duration::from_secs(3600)),
        );
        assert!(cached.is_holiday(date(2025, 5, 1)));
        assert!(cached.is_holiday(date(2025, 5, 8)));
        assert!(!cached.is_holiday(date(2025, 5, 2)));
        assert!(cached.is_holiday(date(2026, 1, 1)));
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 2);
        assert_eq!(cached.cache().len(), 2);
    }

    #[test]
    fn cached_custom_list() {
        let list = HolidayList::new(vec![date(2025, 12, 26), date(2025, 12, 24)]);
        let cached = CachedHolidays::new(list, TtlCache::new(Duration::from_secs(60)));
        assert!(cached.is_holiday(date(2025, 12, 24)));
        assert!(!cached.is_holiday(date(2025, 12, 25)));
    }
}
