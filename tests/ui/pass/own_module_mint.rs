// Twin of `ForeignMint` / `ForeignSealMint` / `SealLiteral`: the same
// calls made from inside the principal's module.
mod a {
    use tola_passkey::{Passkey, Principal, allow_list};

    #[derive(Principal)] pub struct ClassA;

    pub fn secret(_key: Passkey<allow_list![ClassA]>) {}

    pub fn inside() {
        secret(ClassA::passkey());
        secret(Passkey::new(ClassA::passkey_seal()));
        secret(Passkey::new(ClassAPasskeySeal { _private: core::marker::PhantomData }));
    }

    pub mod child {
        pub fn nested() {
            super::secret(super::ClassA::passkey());
        }
    }
}

fn main() {
    a::inside();
    a::child::nested();
}
