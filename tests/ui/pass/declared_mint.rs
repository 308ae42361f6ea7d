// Twin of `DeclaredSealLiteral` / `DeclaredForeignMint` /
// `DeclaredForeignSealMint`: the same calls made from inside the module
// that invoked `impl_principal!`.
mod audit {
    use tola_passkey::{Passkey, allow_list};

    pub struct Auditor;
    tola_passkey::impl_principal!(pub Auditor);

    pub fn review(_key: Passkey<allow_list![Auditor]>) {}

    pub fn inside() {
        review(Auditor::passkey());
        review(Passkey::new(Auditor::passkey_seal()));
        review(Passkey::new(AuditorPasskeySeal { _private: () }));
    }
}

fn main() {
    audit::inside();
}
