// Twin of `IndirectRelay`: a listed principal may go through a generic helper.
use tola_passkey::prelude::*;
use tola_passkey::{AllowList, Permits, Seal};

#[derive(Principal)] pub struct ClassA;

fn secret(_key: Passkey<allow_list![ClassA]>) {}

fn relay<K, I>(seal: K)
where
    K: Seal,
    K::Principal: Principal<Seal = K>,
    allow_list![ClassA]: AllowList + Permits<K::Principal, I>,
{
    secret(Passkey::new(seal));
}

impl ClassA {
    fn access(&self) {
        relay(Self::passkey_seal());
    }
}

fn main() {
    ClassA.access();
}
