//! The process-wide registry
//!
//! Writers take the lock for the duration of their own update only.
//! A panic while the lock is held cannot leave a half-written value behind,
//! so a poisoned lock is simply recovered.
use std::cell::Cell;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Error, Key, Params, Value};

static RC_PARAMS: LazyLock<RwLock<Params>> = LazyLock::new(|| RwLock::new(Params::default()));

thread_local! {
    // set while this thread holds the write lock in `rc_update`
    static IN_UPDATE: Cell<bool> = const { Cell::new(false) };
}

fn check_not_in_update() {
    if IN_UPDATE.get() {
        panic!("the style registry is accessed from within rc_update; use the given Params instead");
    }
}

fn read() -> RwLockReadGuard<'static, Params> {
    check_not_in_update();
    RC_PARAMS.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Params> {
    check_not_in_update();
    RC_PARAMS.write().unwrap_or_else(PoisonError::into_inner)
}

struct UpdateFlag;

impl UpdateFlag {
    fn set() -> Self {
        IN_UPDATE.set(true);
        UpdateFlag
    }
}

impl Drop for UpdateFlag {
    fn drop(&mut self) {
        IN_UPDATE.set(false);
    }
}

/// Get the value of a key in the process-wide registry
pub fn rc_get(key: Key) -> Value {
    read().get(key).clone()
}

/// Set the value of a key in the process-wide registry, and return the previous value
pub fn rc_set<V>(key: Key, value: V) -> Result<Value, Error>
where
    V: Into<Value>,
{
    write().set(key, value)
}

/// Set a key by name from its rc text form in the process-wide registry
pub fn rc_set_str(name: &str, text: &str) -> Result<Value, Error> {
    write().set_str(name, text)
}

/// A snapshot of the process-wide registry
pub fn rc_params() -> Params {
    read().clone()
}

/// Run `f` with exclusive access to the process-wide registry.
///
/// Other threads observe either none or all of the changes made by `f`.
///
/// The registry lock is held while `f` runs and is not reentrant: `f` must work on
/// the `Params` it is given and not call the other `rc_*` functions.
/// Doing so panics, instead of deadlocking the thread.
pub fn rc_update<F, R>(f: F) -> R
where
    F: FnOnce(&mut Params) -> R,
{
    let mut params = write();
    let _flag = UpdateFlag::set();
    f(&mut params)
}

/// Restore the defaults in the process-wide registry
pub fn rc_defaults() {
    log::debug!("restoring default style parameters");
    write().reset_all();
}

/// Apply `overrides` to the process-wide registry, run `body`, then restore the
/// registry as it was before the overrides.
///
/// The registry is restored even if `body` panics.
/// If `overrides` fails, the registry is restored and `body` is not run.
/// `overrides` runs under the registry lock, with the same restrictions as in [`rc_update`].
/// `body` is free to use the `rc_*` functions.
pub fn rc_context<O, F, R>(overrides: O, body: F) -> Result<R, Error>
where
    O: FnOnce(&mut Params) -> Result<(), Error>,
    F: FnOnce() -> R,
{
    let restore = Restore(Some(rc_params()));
    rc_update(overrides)?;
    let res = body();
    drop(restore);
    Ok(res)
}

struct Restore(Option<Params>);

impl Drop for Restore {
    fn drop(&mut self) {
        if let Some(params) = self.0.take() {
            *write() = params;
        }
    }
}

#[cfg(test)]
mod tests {
    use plotive_base::color;

    use super::*;
    use crate::tests::lock_global;

    #[test]
    fn test_set_get() {
        let _guard = lock_global();
        rc_defaults();

        assert_eq!(rc_set(Key::FontSize, 7.0).unwrap(), Value::Float(10.0));
        assert_eq!(rc_get(Key::FontSize), Value::Float(7.0));
        rc_set_str("ytick.color", "red").unwrap();
        assert_eq!(rc_get(Key::YTickColor), Value::Color(color::RED));

        rc_defaults();
        assert_eq!(rc_params(), Params::default());
    }

    #[test]
    fn test_context_restores() {
        let _guard = lock_global();
        rc_defaults();
        rc_set(Key::AxesLineWidth, 0.7).unwrap();

        let inner = rc_context(
            |p| {
                p.set(Key::AxesLineWidth, 2.0)?;
                p.set(Key::FontSize, 12.0)?;
                Ok(())
            },
            || (rc_get(Key::AxesLineWidth), rc_get(Key::FontSize)),
        )
        .unwrap();
        assert_eq!(inner, (Value::Float(2.0), Value::Float(12.0)));

        assert_eq!(rc_get(Key::AxesLineWidth), Value::Float(0.7));
        assert_eq!(rc_get(Key::FontSize), Value::Float(10.0));
        rc_defaults();
    }

    #[test]
    fn test_context_failed_override() {
        let _guard = lock_global();
        rc_defaults();

        let mut ran = false;
        let res = rc_context(
            |p| {
                p.set(Key::FontSize, 12.0)?;
                p.set(Key::AxesLineWidth, 0.0)?;
                Ok(())
            },
            || ran = true,
        );
        assert!(matches!(res, Err(Error::NotPositive { key: Key::AxesLineWidth, .. })));
        assert!(!ran);
        assert_eq!(rc_params(), Params::default());
    }

    #[test]
    fn test_context_restores_on_panic() {
        let _guard = lock_global();
        rc_defaults();

        let res = std::panic::catch_unwind(|| {
            let _ = rc_context(
                |p| p.set(Key::FontSize, 12.0).map(|_| ()),
                || -> u32 { panic!("rendering failed") },
            );
        });
        assert!(res.is_err());
        assert_eq!(rc_get(Key::FontSize), Value::Float(10.0));
    }

    #[test]
    fn test_reentrant_update_panics() {
        let _guard = lock_global();
        rc_defaults();

        let res = std::panic::catch_unwind(|| rc_update(|_| rc_get(Key::FontSize)));
        assert!(res.is_err());

        let res = std::panic::catch_unwind(|| {
            rc_context(|_| rc_set(Key::FontSize, 7.0).map(|_| ()), || ())
        });
        assert!(res.is_err());

        // the registry stays usable from this thread
        rc_set(Key::FontSize, 7.0).unwrap();
        assert_eq!(rc_get(Key::FontSize), Value::Float(7.0));
        rc_defaults();
    }
}
