//! Build-failure checks.
//!
//! Every block below must be rejected by the compiler. Each one has a
//! compiling twin in `tests/` or `tests/ui/pass/` that differs only in the
//! offending line.

/// A principal that is not in the allow-list cannot build the passkey.
///
/// ```compile_fail
/// use tola_passkey::prelude::*;
///
/// #[derive(Principal)] pub struct ClassA;
/// #[derive(Principal)] pub struct ClassB;
/// #[derive(Principal)] pub struct ClassD;
///
/// pub struct Widget;
/// impl Widget {
///     pub fn secret(&self, _key: Passkey<allow_list![ClassA, ClassB]>) {}
/// }
///
/// impl ClassD {
///     pub fn access(&self, w: &Widget) {
///         w.secret(Self::passkey());
///     }
/// }
///
/// fn main() {}
/// ```
pub struct UnlistedCaller;

/// Going through `Passkey::new` with the unlisted principal's own seal
/// fails the same way.
///
/// ```compile_fail
/// use tola_passkey::prelude::*;
///
/// #[derive(Principal)] pub struct ClassA;
/// #[derive(Principal)] pub struct ClassD;
///
/// fn secret(_key: Passkey<allow_list![ClassA]>) {}
///
/// impl ClassD {
///     pub fn access(&self) {
///         secret(Passkey::new(Self::passkey_seal()));
///     }
/// }
///
/// fn main() {}
/// ```
pub struct UnlistedSeal;

/// A type with no `Principal` impl at all has no seal to offer.
///
/// ```compile_fail
/// use tola_passkey::prelude::*;
///
/// #[derive(Principal)] pub struct ClassA;
/// pub struct ClassD;
///
/// fn secret(_key: Passkey<allow_list![ClassA]>) {}
///
/// impl ClassD {
///     pub fn access(&self) {
///         secret(Self::passkey());
///     }
/// }
///
/// fn main() {}
/// ```
pub struct NotAPrincipal;

/// Borrowing a listed principal's mint from another module is a privacy
/// error: `passkey()` is private to the principal's module.
///
/// ```compile_fail
/// mod a {
///     use tola_passkey::Principal;
///     #[derive(Principal)] pub struct ClassA;
/// }
///
/// mod d {
///     use tola_passkey::{Passkey, allow_list};
///     use super::a::ClassA;
///
///     pub fn secret(_key: Passkey<allow_list![ClassA]>) {}
///
///     pub fn sneak() {
///         secret(ClassA::passkey());
///     }
/// }
///
/// fn main() {}
/// ```
pub struct ForeignMint;

/// The seal mint is private too.
///
/// ```compile_fail
/// mod a {
///     use tola_passkey::Principal;
///     #[derive(Principal)] pub struct ClassA;
/// }
///
/// mod d {
///     use tola_passkey::{Passkey, allow_list};
///     use super::a::ClassA;
///
///     pub fn secret(_key: Passkey<allow_list![ClassA]>) {}
///
///     pub fn sneak() {
///         secret(Passkey::new(ClassA::passkey_seal()));
///     }
/// }
///
/// fn main() {}
/// ```
pub struct ForeignSealMint;

/// A seal cannot be built with a struct literal outside its module.
///
/// ```compile_fail
/// mod a {
///     use tola_passkey::Principal;
///     #[derive(Principal)] pub struct ClassA;
/// }
///
/// mod d {
///     use core::marker::PhantomData;
///     use tola_passkey::{Passkey, allow_list};
///     use super::a::{ClassA, ClassAPasskeySeal};
///
///     pub fn secret(_key: Passkey<allow_list![ClassA]>) {}
///
///     pub fn sneak() {
///         secret(Passkey::new(ClassAPasskeySeal { _private: PhantomData }));
///     }
/// }
///
/// fn main() {}
/// ```
pub struct SealLiteral;

/// `impl_principal!` seals are just as closed: no literal outside the
/// module.
///
/// ```compile_fail
/// mod audit {
///     pub struct Auditor;
///     tola_passkey::impl_principal!(pub Auditor);
/// }
///
/// mod d {
///     use tola_passkey::{Passkey, allow_list};
///     use super::audit::{Auditor, AuditorPasskeySeal};
///
///     pub fn review(_key: Passkey<allow_list![Auditor]>) {}
///
///     pub fn sneak() {
///         review(Passkey::new(AuditorPasskeySeal { _private: () }));
///     }
/// }
///
/// fn main() {}
/// ```
pub struct DeclaredSealLiteral;

/// Nor can another module call an `impl_principal!` type's `passkey()`.
///
/// ```compile_fail
/// mod audit {
///     pub struct Auditor;
///     tola_passkey::impl_principal!(pub Auditor);
/// }
///
/// mod d {
///     use tola_passkey::{Passkey, allow_list};
///     use super::audit::Auditor;
///
///     pub fn review(_key: Passkey<allow_list![Auditor]>) {}
///
///     pub fn sneak() {
///         review(Auditor::passkey());
///     }
/// }
///
/// fn main() {}
/// ```
pub struct DeclaredForeignMint;

/// Or its `passkey_seal()`.
///
/// ```compile_fail
/// mod audit {
///     pub struct Auditor;
///     tola_passkey::impl_principal!(pub Auditor);
/// }
///
/// mod d {
///     use tola_passkey::{Passkey, allow_list};
///     use super::audit::Auditor;
///
///     pub fn review(_key: Passkey<allow_list![Auditor]>) {}
///
///     pub fn sneak() {
///         review(Passkey::new(Auditor::passkey_seal()));
///     }
/// }
///
/// fn main() {}
/// ```
pub struct DeclaredForeignSealMint;

/// A home-made seal that claims to be a listed principal is refused: the
/// principal does not name it back.
///
/// ```compile_fail
/// use tola_passkey::{Passkey, Principal, Seal, allow_list};
///
/// #[derive(Principal)] pub struct ClassA;
///
/// pub struct Forged;
/// impl Seal for Forged {
///     type Principal = ClassA;
/// }
///
/// fn secret(_key: Passkey<allow_list![ClassA]>) {}
///
/// fn main() {
///     secret(Passkey::new(Forged));
/// }
/// ```
pub struct ForgedSeal;

/// Membership cannot be granted from outside the crate: `Permits` is sealed.
///
/// ```compile_fail
/// use tola_passkey::{Cons, Here, Nil, Passkey, Permits, Principal};
///
/// #[derive(Principal)] pub struct ClassA;
/// #[derive(Principal)] pub struct ClassD;
///
/// impl Permits<ClassD, Here> for Cons<ClassA, Nil> {}
///
/// fn main() {}
/// ```
pub struct ForgedMembership;

/// The passkey itself has a private field.
///
/// ```compile_fail
/// use core::marker::PhantomData;
/// use tola_passkey::{Passkey, Principal, allow_list};
///
/// #[derive(Principal)] pub struct ClassA;
///
/// fn main() {
///     let _key: Passkey<allow_list![ClassA]> = Passkey { _allow: PhantomData };
/// }
/// ```
pub struct PasskeyLiteral;

/// No `Default`.
///
/// ```compile_fail
/// use tola_passkey::{Passkey, Principal, allow_list};
///
/// #[derive(Principal)] pub struct ClassA;
///
/// fn main() {
///     let _key = <Passkey<allow_list![ClassA]>>::default();
/// }
/// ```
pub struct PasskeyDefault;

/// No `Clone`: a passkey handed to one operation cannot be duplicated for
/// another.
///
/// ```compile_fail
/// use tola_passkey::{Passkey, Principal, allow_list};
///
/// #[derive(Principal)] pub struct ClassA;
///
/// fn secret(_key: Passkey<allow_list![ClassA]>) {}
///
/// impl ClassA {
///     fn twice(&self) {
///         let key: Passkey<allow_list![ClassA]> = Self::passkey();
///         secret(key.clone());
///         secret(key);
///     }
/// }
///
/// fn main() {}
/// ```
pub struct PasskeyClone;

/// No `Copy` either: the key is moved into the first call.
///
/// ```compile_fail
/// use tola_passkey::{Passkey, Principal, allow_list};
///
/// #[derive(Principal)] pub struct ClassA;
///
/// fn secret(_key: Passkey<allow_list![ClassA]>) {}
///
/// impl ClassA {
///     fn twice(&self) {
///         let key: Passkey<allow_list![ClassA]> = Self::passkey();
///         secret(key);
///         secret(key);
///     }
/// }
///
/// fn main() {}
/// ```
pub struct PasskeyCopy;

/// Disjoint allow-lists grant nothing across each other.
///
/// ```compile_fail
/// use tola_passkey::prelude::*;
///
/// #[derive(Principal)] pub struct ClassA;
/// #[derive(Principal)] pub struct ClassC;
///
/// pub struct Widget;
/// impl Widget {
///     pub fn open(&self, _key: Passkey<allow_list![ClassA]>) {}
///     pub fn audit(&self, _key: Passkey<allow_list![ClassC]>) {}
/// }
///
/// impl ClassA {
///     pub fn access(&self, w: &Widget) {
///         w.open(Self::passkey());
///         w.audit(Self::passkey());
///     }
/// }
///
/// fn main() {}
/// ```
pub struct CrossToken;

/// A passkey for one list cannot stand in for another, even on the same
/// resource.
///
/// ```compile_fail
/// use tola_passkey::prelude::*;
///
/// #[derive(Principal)] pub struct ClassA;
/// #[derive(Principal)] pub struct ClassC;
///
/// pub struct Widget;
/// impl Widget {
///     pub fn open(&self, _key: Passkey<allow_list![ClassA, ClassC]>) {}
///     pub fn audit(&self, _key: Passkey<allow_list![ClassC]>) {}
/// }
///
/// impl ClassA {
///     pub fn access(&self, w: &Widget) {
///         let key: Passkey<allow_list![ClassA, ClassC]> = Self::passkey();
///         w.audit(key);
///     }
/// }
///
/// fn main() {}
/// ```
pub struct KeySubstitution;

/// An unlisted helper cannot launder access through a generic function.
///
/// ```compile_fail
/// use tola_passkey::prelude::*;
/// use tola_passkey::{AllowList, Permits, Seal};
///
/// #[derive(Principal)] pub struct ClassA;
/// #[derive(Principal)] pub struct ClassD;
///
/// fn secret(_key: Passkey<allow_list![ClassA]>) {}
///
/// fn relay<K, I>(seal: K)
/// where
///     K: Seal,
///     K::Principal: Principal<Seal = K>,
///     allow_list![ClassA]: AllowList + Permits<K::Principal, I>,
/// {
///     secret(Passkey::new(seal));
/// }
///
/// impl ClassD {
///     fn access(&self) {
///         relay(Self::passkey_seal());
///     }
/// }
///
/// fn main() {}
/// ```
pub struct IndirectRelay;

/// `#[guarded]` operations enforce the same list.
///
/// ```compile_fail
/// use tola_passkey::prelude::*;
///
/// #[derive(Principal)] pub struct ClassA;
/// #[derive(Principal)] pub struct ClassD;
///
/// pub struct Widget;
/// impl Widget {
///     #[guarded(ClassA)]
///     pub fn secret(&self) {}
/// }
///
/// impl ClassD {
///     pub fn access(&self, w: &Widget) {
///         w.secret(Self::passkey());
///     }
/// }
///
/// fn main() {}
/// ```
pub struct GuardedUnlisted;

/// Calling a `#[guarded]` operation without a passkey does not compile.
///
/// ```compile_fail
/// use tola_passkey::prelude::*;
///
/// #[derive(Principal)] pub struct ClassA;
///
/// pub struct Widget;
/// impl Widget {
///     #[guarded(ClassA)]
///     pub fn secret(&self) {}
/// }
///
/// fn main() {
///     Widget.secret();
/// }
/// ```
pub struct GuardedWithoutKey;

/// Duplicate principals are rejected by `allow_list!`.
///
/// ```compile_fail
/// use tola_passkey::prelude::*;
///
/// #[derive(Principal)] pub struct ClassA;
///
/// type Key = Passkey<allow_list![ClassA, ClassA]>;
///
/// fn main() {}
/// ```
pub struct DuplicatePrincipal;

/// An empty allow-list is rejected by `allow_list!`.
///
/// ```compile_fail
/// use tola_passkey::prelude::*;
///
/// type Key = Passkey<allow_list![]>;
///
/// fn main() {}
/// ```
pub struct EmptyAllowList;

/// `#[guarded]` takes either principals or `token = ..`, not both.
///
/// ```compile_fail
/// use tola_passkey::prelude::*;
///
/// #[derive(Principal)] pub struct ClassA;
///
/// type Key = passkey![ClassA];
///
/// #[guarded(ClassA, token = Key)]
/// fn secret() {}
///
/// fn main() {}
/// ```
pub struct GuardedMixedForms;
