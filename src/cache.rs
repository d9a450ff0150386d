//! Rendered-page cache keyed by path. Mutating actions invalidate the
//! affected path so the next request re-renders from the database.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct PageCache {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.entries.read().expect("cache lock poisoned").get(path).cloned()
    }

    pub fn put(&self, path: &str, html: String) {
        self.entries
            .write()
            .expect("cache lock poisoned")
            .insert(path.to_string(), html);
    }

    /// Drop the cached render for `path`, if any.
    pub fn invalidate(&self, path: &str) {
        self.entries.write().expect("cache lock poisoned").remove(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidate_removes_only_that_path() {
        let cache = PageCache::new();
        cache.put("/dashboard/invoices", "<p>a</p>".into());
        cache.put("/dashboard/customers", "<p>b</p>".into());

        cache.invalidate("/dashboard/invoices");

        assert_eq!(cache.get("/dashboard/invoices"), None);
        assert_eq!(cache.get("/dashboard/customers"), Some("<p>b</p>".into()));
    }

    #[test]
    fn invalidate_missing_path_is_noop() {
        let cache = PageCache::new();
        cache.invalidate("/dashboard/invoices");
        assert_eq!(cache.get("/dashboard/invoices"), None);
    }
}
