use std::cell::RefCell;
use std::rc::Rc;

type Listener<T> = Rc<dyn Fn(&T)>;

/// Single-threaded shared state with change listeners.
///
/// The UI runs on one event loop, so state lives in `Rc<RefCell<_>>`. Borrows
/// are released before listeners run, so a listener may read the value or
/// trigger another update.
pub struct Shared<T> {
    value: Rc<RefCell<T>>,
    listeners: Rc<RefCell<Vec<Listener<T>>>>,
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            listeners: Rc::clone(&self.listeners),
        }
    }
}

impl<T: Clone> Shared<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Mutate the value, then notify every listener with the new snapshot.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.value.borrow_mut());
        let snapshot = self.get();
        let listeners: Vec<Listener<T>> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_update_notifies_with_new_value() {
        let shared = Shared::new(1u32);
        let seen = Rc::new(Cell::new(0u32));
        let sink = Rc::clone(&seen);
        shared.subscribe(move |v| sink.set(*v));

        shared.update(|v| *v += 41);
        assert_eq!(shared.get(), 42);
        assert_eq!(seen.get(), 42);
    }

    #[test]
    fn test_listener_may_read_back() {
        let shared = Shared::new(String::from("a"));
        let reader = shared.clone();
        let seen = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&seen);
        shared.subscribe(move |_| *sink.borrow_mut() = reader.get());

        shared.update(|v| v.push('b'));
        assert_eq!(*seen.borrow(), "ab");
    }
}
