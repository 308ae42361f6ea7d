// Twin of `GuardedUnlisted` / `GuardedWithoutKey` / `GuardedMixedForms`.
use tola_passkey::prelude::*;

#[derive(Principal)] pub struct ClassA;

type Key = passkey![ClassA];

pub struct Widget;
impl Widget {
    #[guarded(ClassA)]
    pub fn secret(&self) {}
}

#[guarded(token = Key)]
fn other() {}

impl ClassA {
    pub fn access(&self, w: &Widget) {
        w.secret(Self::passkey());
        other(Self::passkey());
    }
}

fn main() {
    ClassA.access(&Widget);
}
