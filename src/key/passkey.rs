//! The capability token.

use core::fmt;
use core::marker::PhantomData;

use crate::primitives::list::{AllowList, Permits};

use super::principal::{Principal, Seal};

/// Proof that the holder is one of the principals in the allow-list `S`.
///
/// A `Passkey` is zero-sized and carries nothing but its type. The only
/// way to obtain one is [`Passkey::new`], which consumes the seal of a
/// principal listed in `S`; it cannot be defaulted, cloned, copied or
/// built with a struct literal.
///
/// Guarded operations take it by value and never look at it:
///
/// ```
/// use tola_passkey::{Passkey, Principal, allow_list};
///
/// #[derive(Principal)]
/// pub struct Janitor;
///
/// pub struct Vault;
///
/// impl Vault {
///     pub fn sweep(&self, _key: Passkey<allow_list![Janitor]>) -> &'static str {
///         "swept"
///     }
/// }
///
/// impl Janitor {
///     pub fn clean(&self, vault: &Vault) -> &'static str {
///         vault.sweep(Self::passkey())
///     }
/// }
///
/// assert_eq!(Janitor.clean(&Vault), "swept");
/// ```
#[must_use = "a passkey only proves authorization when handed to a guarded operation"]
pub struct Passkey<S> {
    _allow: PhantomData<fn() -> S>,
}

impl<S: AllowList> Passkey<S> {
    /// Number of principals allowed to construct this passkey.
    pub const ALLOWED: usize = S::LEN;

    /// Exchange a principal's seal for a passkey.
    ///
    /// Compiles only if the seal's principal is listed in `S`, and only if
    /// that principal names this seal as its own.
    #[inline(always)]
    pub fn new<K, I>(seal: K) -> Self
    where
        K: Seal,
        K::Principal: Principal<Seal = K>,
        S: Permits<K::Principal, I>,
    {
        drop(seal);
        Passkey {
            _allow: PhantomData,
        }
    }
}

impl<S: AllowList> fmt::Debug for Passkey<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Passkey")?;
        let mut list = f.debug_list();
        S::entries(&mut list);
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::mem;
    use std::format;

    use crate::{Principal, allow_list};

    use super::*;

    #[derive(Principal)]
    struct Reader;

    #[derive(Principal)]
    struct Writer;

    type ReadKey = Passkey<allow_list![Reader, Writer]>;
    type WriteKey = Passkey<allow_list![Writer]>;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_zero_sized() {
        assert_eq!(mem::size_of::<ReadKey>(), 0);
        assert_eq!(mem::size_of::<WriteKey>(), 0);
        assert_eq!(mem::size_of::<Passkey<allow_list![Reader]>>(), 0);
    }

    #[test]
    fn test_send_sync() {
        assert_send_sync::<ReadKey>();
        assert_send_sync::<WriteKey>();
    }

    #[test]
    fn test_allowed_count() {
        assert_eq!(ReadKey::ALLOWED, 2);
        assert_eq!(WriteKey::ALLOWED, 1);
    }

    #[test]
    fn test_listed_principals_construct() {
        let _: ReadKey = Reader::passkey();
        let _: ReadKey = Writer::passkey();
        let _: WriteKey = Writer::passkey();
        let _: ReadKey = Passkey::new(Reader::passkey_seal());
    }

    #[test]
    fn test_debug_lists_principals() {
        let key: ReadKey = Writer::passkey();
        let out = format!("{key:?}");
        assert!(out.starts_with("Passkey["));
        assert!(out.contains("Reader"));
        assert!(out.contains("Writer"));
        assert!(out.find("Reader") < out.find("Writer"));
    }
}
