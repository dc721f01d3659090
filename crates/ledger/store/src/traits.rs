use crate::StorageResult;

/// Point-read / point-write key-value state supplied by the host.
///
/// Keys and values are opaque bytes. `put_state` overwrites any prior value.
/// Implementations take `&self` and manage their own interior mutability, so a
/// single store can be shared by the identity gate and the ledger engine
/// during one invocation.
pub trait StateStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key was never written.
    fn get_state(&self, key: &[u8]) -> StorageResult<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing whatever was there.
    fn put_state(&self, key: &[u8], value: &[u8]) -> StorageResult<()>;
}

impl<T: StateStore + ?Sized> StateStore for &T {
    fn get_state(&self, key: &[u8]) -> StorageResult<Option<Vec<u8>>> {
        (**self).get_state(key)
    }

    fn put_state(&self, key: &[u8], value: &[u8]) -> StorageResult<()> {
        (**self).put_state(key, value)
    }
}

impl<T: StateStore + ?Sized> StateStore for Box<T> {
    fn get_state(&self, key: &[u8]) -> StorageResult<Option<Vec<u8>>> {
        (**self).get_state(key)
    }

    fn put_state(&self, key: &[u8], value: &[u8]) -> StorageResult<()> {
        (**self).put_state(key, value)
    }
}
