//! Reader/writer lock backing every queue instance.
//!
//! Both backends hand out guards directly from `read` and `write` and never
//! poison, so the queue code is written once against either of them.

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        pub(crate) use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
    } else if #[cfg(feature = "spin")] {
        pub(crate) use spin::{RwLock, RwLockReadGuard, RwLockWriteGuard};
    } else {
        compile_error!("enable either the `std` or the `spin` feature to select a lock backend");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    #[test]
    fn test_std_selects_parking_lot() {
        let lock: parking_lot::RwLock<u8> = RwLock::new(1);
        *lock.write() += 1;
        assert_eq!(*lock.read(), 2);
    }

    #[cfg(all(feature = "spin", not(feature = "std")))]
    #[test]
    fn test_no_std_selects_spin() {
        let lock: spin::RwLock<u8> = RwLock::new(1);
        *lock.write() += 1;
        assert_eq!(*lock.read(), 2);
    }
}
