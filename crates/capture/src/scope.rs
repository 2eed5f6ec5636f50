//! crates/capture/src/scope.rs
//! Thread-local stack of nested scope values with guaranteed release.

use std::cell::RefCell;
use std::marker::PhantomData;

use serde_json::Value;

thread_local! {
    static SCOPES: RefCell<ScopeStack> = const { RefCell::new(ScopeStack::new()) };
}

struct ScopeStack {
    frames: Vec<(u64, Value)>,
    next_id: u64,
}

impl ScopeStack {
    const fn new() -> Self {
        Self {
            frames: Vec::new(),
            next_id: 0,
        }
    }
}

/// Pushes `value` as the innermost active scope for the current thread.
///
/// The returned [`ScopeGuard`] releases the scope when dropped, on every
/// exit path including unwinding. Scopes are thread-local: values pushed on
/// one thread are never visible to snapshots taken on another.
///
/// # Examples
///
/// ```
/// use capture::scope;
///
/// let _outer = scope::begin("request 7");
/// {
///     let _inner = scope::begin("retry 2");
///     assert_eq!(scope::snapshot().len(), 2);
/// }
/// assert_eq!(scope::snapshot().len(), 1);
/// ```
pub fn begin(value: impl Into<Value>) -> ScopeGuard {
    let value = value.into();
    let id = SCOPES.with(|stack| {
        let mut stack = stack.borrow_mut();
        let id = stack.next_id;
        stack.next_id += 1;
        stack.frames.push((id, value));
        id
    });
    ScopeGuard {
        id,
        _not_send: PhantomData,
    }
}

/// Returns the scopes active on the current thread, outermost first.
#[must_use]
pub fn snapshot() -> Vec<Value> {
    SCOPES.with(|stack| {
        stack
            .borrow()
            .frames
            .iter()
            .map(|(_, value)| value.clone())
            .collect()
    })
}

/// Returns how many scopes are active on the current thread.
#[must_use]
pub fn depth() -> usize {
    SCOPES.with(|stack| stack.borrow().frames.len())
}

/// RAII token releasing one active scope.
///
/// Dropping the guard removes exactly the frame it was issued for and
/// restores the prior innermost scope. Guards are `!Send`: a scope must be
/// released on the thread that pushed it.
#[must_use = "dropping the guard immediately ends the scope"]
pub struct ScopeGuard {
    id: u64,
    _not_send: PhantomData<*const ()>,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        // try_with: a guard outliving its thread's storage is a no-op.
        let _ = SCOPES.try_with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(position) = stack.frames.iter().rposition(|(id, _)| *id == self.id) {
                stack.frames.remove(position);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn begin_and_drop_restore_prior_state() {
        assert_eq!(depth(), 0);
        {
            let _outer = begin("outer");
            assert_eq!(depth(), 1);
            {
                let _inner = begin("inner");
                assert_eq!(depth(), 2);
            }
            assert_eq!(depth(), 1);
        }
        assert_eq!(depth(), 0);
    }

    #[test]
    fn snapshot_orders_outermost_first() {
        let _outer = begin("outer");
        let _inner = begin("inner");

        let scopes = snapshot();
        assert_eq!(scopes, vec![json!("outer"), json!("inner")]);
    }

    #[test]
    fn snapshot_clones_do_not_track_later_pushes() {
        let _outer = begin("outer");
        let frozen = snapshot();
        let _inner = begin("inner");

        assert_eq!(frozen.len(), 1);
        assert_eq!(snapshot().len(), 2);
    }

    #[test]
    fn out_of_order_drop_removes_only_its_own_frame() {
        let outer = begin("outer");
        let inner = begin("inner");

        drop(outer);
        assert_eq!(snapshot(), vec![json!("inner")]);

        drop(inner);
        assert_eq!(depth(), 0);
    }

    #[test]
    fn guard_releases_during_unwind() {
        let result = std::panic::catch_unwind(|| {
            let _scope = begin("doomed");
            panic!("boom");
        });
        assert!(result.is_err());
        assert_eq!(depth(), 0);
    }

    #[test]
    fn structured_values_are_supported() {
        let _scope = begin(json!({ "request": 7, "user": "ada" }));
        let scopes = snapshot();
        assert_eq!(scopes[0]["user"], "ada");
    }

    #[test]
    fn threads_do_not_share_scopes() {
        let _scope = begin("main thread");
        let other = std::thread::spawn(|| depth()).join().unwrap();
        assert_eq!(other, 0);
        assert_eq!(depth(), 1);
    }
}
