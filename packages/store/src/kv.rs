/// Synchronous string key/value storage that survives page loads.
///
/// Mirrors the browser's `localStorage` contract: reads never block on I/O
/// the caller can observe, and writes are best-effort. Implementations swallow
/// their own failures so a broken or full storage area degrades to "nothing
/// persisted" instead of surfacing errors into the UI.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
