use std::any::TypeId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock, Weak};

use parking_lot::RwLock;
use tracing::debug;

use super::value::{decapitalize, DynamicShape, Navigable, Shape};

static GLOBAL_CACHE: LazyLock<AccessorCache> = LazyLock::new(AccessorCache::default);

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub max_entries: usize,
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 256,
            enabled: true,
        }
    }
}

/// Accessors discovered for one shape, keyed by logical property name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessorTable {
    shape_name: String,
    plain: HashMap<String, String>,
    boolean: HashMap<String, String>,
}

impl AccessorTable {
    /// Build the table from the target's method list: zero-argument `getX` methods
    /// become plain accessors and `isX` methods boolean accessors for property `x`.
    pub fn discover(target: &dyn Navigable) -> Self {
        let mut table = AccessorTable {
            shape_name: target.shape().name().to_string(),
            ..Default::default()
        };

        for method in target.methods() {
            if method.arity != 0 {
                continue;
            }
            if let Some(prop) = property_name(&method.name, "get") {
                table.plain.insert(prop, method.name.to_string());
            } else if let Some(prop) = property_name(&method.name, "is") {
                table.boolean.insert(prop, method.name.to_string());
            }
        }

        table
    }

    pub fn shape_name(&self) -> &str {
        &self.shape_name
    }

    /// Method to invoke for `property`; a plain getter wins over a boolean one.
    pub fn resolve(&self, property: &str) -> Option<&str> {
        if property.is_empty() {
            return None;
        }
        let key = decapitalize(property);
        self.plain
            .get(&key)
            .or_else(|| self.boolean.get(&key))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.plain.len() + self.boolean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn property_name(method: &str, prefix: &str) -> Option<String> {
    let rest = method.strip_prefix(prefix)?;
    let first = rest.chars().next()?;
    if !first.is_uppercase() {
        return None;
    }
    Some(decapitalize(rest))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ShapeKey {
    Type(TypeId),
    Dynamic(usize),
}

impl ShapeKey {
    fn of(shape: &Shape) -> Self {
        match shape {
            Shape::Type { id, .. } => ShapeKey::Type(*id),
            Shape::Dynamic(d) => ShapeKey::Dynamic(Arc::as_ptr(d) as usize),
        }
    }
}

struct CacheEntry {
    table: Arc<AccessorTable>,
    // Dynamic shapes are held weakly so the cache never keeps them alive.
    anchor: Option<Weak<DynamicShape>>,
    inserted: u64,
}

impl CacheEntry {
    fn is_alive(&self) -> bool {
        self.anchor.as_ref().map_or(true, |w| w.strong_count() > 0)
    }

    fn serves(&self, shape: &Shape) -> bool {
        match (&self.anchor, shape) {
            (None, Shape::Type { .. }) => true,
            (Some(weak), Shape::Dynamic(d)) => weak
                .upgrade()
                .is_some_and(|live| Arc::ptr_eq(&live, d)),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: usize,
    pub builds: usize,
}

/// Shape-keyed memo of accessor tables.
///
/// Lookups take the read lock. A miss builds the table without holding any lock and
/// publishes it under the write lock; if another thread published first, its table is
/// returned instead, so every caller sees one complete table per shape.
pub struct AccessorCache {
    config: CacheConfig,
    entries: RwLock<HashMap<ShapeKey, CacheEntry>>,
    clock: AtomicU64,
    hits: AtomicUsize,
    builds: AtomicUsize,
}

impl Default for AccessorCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl AccessorCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(HashMap::new()),
            clock: AtomicU64::new(0),
            hits: AtomicUsize::new(0),
            builds: AtomicUsize::new(0),
        }
    }

    /// The process-wide cache used by [`Navigator::new`](super::Navigator::new).
    pub fn global() -> &'static AccessorCache {
        &GLOBAL_CACHE
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn table_for(&self, target: &dyn Navigable) -> Arc<AccessorTable> {
        if !self.config.enabled {
            self.builds.fetch_add(1, Ordering::Relaxed);
            return Arc::new(AccessorTable::discover(target));
        }

        let shape = target.shape();
        let key = ShapeKey::of(&shape);

        if let Some(entry) = self.entries.read().get(&key) {
            if entry.serves(&shape) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return entry.table.clone();
            }
        }

        let table = Arc::new(AccessorTable::discover(target));
        self.builds.fetch_add(1, Ordering::Relaxed);
        debug!(
            shape = shape.name(),
            accessors = table.len(),
            "built accessor table"
        );

        let mut entries = self.entries.write();
        if let Some(existing) = entries.get(&key) {
            if existing.serves(&shape) {
                return existing.table.clone();
            }
        }

        enforce_capacity(&mut entries, self.config.max_entries.max(1));
        let anchor = match &shape {
            Shape::Type { .. } => None,
            Shape::Dynamic(d) => Some(Arc::downgrade(d)),
        };
        entries.insert(
            key,
            CacheEntry {
                table: table.clone(),
                anchor,
                inserted: self.clock.fetch_add(1, Ordering::Relaxed),
            },
        );
        table
    }

    /// Drop entries whose dynamic shapes are no longer alive.
    pub fn purge(&self) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, e| e.is_alive());
        before - entries.len()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.read().len(),
            hits: self.hits.load(Ordering::Relaxed),
            builds: self.builds.load(Ordering::Relaxed),
        }
    }
}

fn enforce_capacity(entries: &mut HashMap<ShapeKey, CacheEntry>, max_entries: usize) {
    if entries.len() < max_entries {
        return;
    }
    entries.retain(|_, e| e.is_alive());

    // Still full: evict the oldest insertions.
    while entries.len() >= max_entries {
        let oldest = entries
            .iter()
            .min_by_key(|(_, e)| e.inserted)
            .map(|(k, _)| *k);
        match oldest {
            Some(k) => {
                entries.remove(&k);
                debug!("evicted accessor table");
            }
            None => break,
        }
    }
}
