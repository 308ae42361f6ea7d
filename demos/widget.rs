//! Widget with a passkey-gated secret.
//!
//! ```text
//! RUST_LOG=trace cargo run --example widget --features tracing
//! ```

use tola_passkey::prelude::*;
use tracing_subscriber::EnvFilter;

pub struct Widget;

impl Widget {
    #[guarded(class_a::ClassA, class_b::ClassB)]
    pub fn secret(&self) {
        tracing::info!("Secret accessed!");
    }
}

mod class_a {
    use super::Widget;
    use tola_passkey::Principal;

    #[derive(Principal)]
    pub struct ClassA;

    impl ClassA {
        pub fn access(&self, w: &Widget) {
            w.secret(Self::passkey());
        }
    }
}

mod class_b {
    use super::Widget;
    use tola_passkey::Principal;

    #[derive(Principal)]
    pub struct ClassB;

    impl ClassB {
        pub fn access(&self, w: &Widget) {
            w.secret(Self::passkey());
        }
    }
}

mod class_d {
    #[allow(dead_code)]
    pub struct ClassD;

    // Not a friend of Widget; this does not compile:
    //
    // impl ClassD {
    //     pub fn access(&self, w: &super::Widget) {
    //         w.secret(Self::passkey());
    //     }
    // }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let w = Widget;
    class_a::ClassA.access(&w);
    class_b::ClassB.access(&w);

    let _ = class_d::ClassD;
}
