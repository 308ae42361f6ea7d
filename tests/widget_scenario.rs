//! Widget / ClassA / ClassB: the reference passkey scenario.
//!
//! `ClassD` has no way in; its failing twin lives in `src/compile_fail.rs`
//! (`UnlistedCaller`).

use std::sync::atomic::{AtomicUsize, Ordering};

use tola_passkey::prelude::*;

// =============================================================================
// Guarded resource
// =============================================================================

pub type WidgetKey = passkey![a::ClassA, b::ClassB];

#[derive(Default)]
pub struct Widget {
    accessed: AtomicUsize,
}

impl Widget {
    pub fn secret(&self, _key: WidgetKey) -> usize {
        tracing::info!("Secret accessed!");
        self.accessed.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn accessed(&self) -> usize {
        self.accessed.load(Ordering::SeqCst)
    }
}

// =============================================================================
// Authorized callers, each in its own module
// =============================================================================

mod a {
    use super::Widget;
    use tola_passkey::Principal;

    #[derive(Principal)]
    pub struct ClassA;

    impl ClassA {
        pub fn access(&self, w: &Widget) -> usize {
            w.secret(Self::passkey())
        }
    }
}

mod b {
    use super::Widget;
    use tola_passkey::{Passkey, Principal};

    #[derive(Principal)]
    pub struct ClassB;

    impl ClassB {
        pub fn access(&self, w: &Widget) -> usize {
            // Long form: exchange the seal explicitly
            w.secret(Passkey::new(Self::passkey_seal()))
        }
    }
}

mod d {
    use tola_passkey::{Passkey, Principal, allow_list};

    /// Not in `WidgetKey`; can hold a widget but never call `secret`.
    #[derive(Principal)]
    pub struct ClassD;

    fn audit(_key: Passkey<allow_list![ClassD]>) -> &'static str {
        "audited"
    }

    impl ClassD {
        pub fn audit(&self) -> &'static str {
            audit(Self::passkey())
        }
    }
}

use a::ClassA;
use b::ClassB;

// =============================================================================
// Tests
// =============================================================================

#[test]
fn test_listed_callers_reach_secret() {
    let w = Widget::default();

    assert_eq!(ClassA.access(&w), 1);
    assert_eq!(ClassB.access(&w), 2);
    assert_eq!(w.accessed(), 2);
}

#[test]
fn test_effect_once_per_call() {
    let w = Widget::default();

    for expected in 1..=5 {
        assert_eq!(ClassA.access(&w), expected);
    }
    assert_eq!(w.accessed(), 5);
}

#[test]
fn test_invocations_share_no_state() {
    let first = Widget::default();
    let second = Widget::default();

    ClassA.access(&first);
    ClassB.access(&second);
    ClassB.access(&second);

    assert_eq!(first.accessed(), 1);
    assert_eq!(second.accessed(), 2);
}

#[test]
fn test_widget_key_allow_list() {
    assert_eq!(WidgetKey::ALLOWED, 2);
    assert_eq!(std::mem::size_of::<WidgetKey>(), 0);
}

#[test]
fn test_unlisted_principal_keeps_its_own_grants() {
    // ClassD is absent from WidgetKey, not from every list.
    assert_eq!(d::ClassD.audit(), "audited");
}
