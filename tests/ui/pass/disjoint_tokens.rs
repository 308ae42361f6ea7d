// Twin of `CrossToken` / `KeySubstitution`: each key goes to its own op.
use tola_passkey::prelude::*;

#[derive(Principal)] pub struct ClassA;
#[derive(Principal)] pub struct ClassC;

pub struct Widget;
impl Widget {
    pub fn open(&self, _key: Passkey<allow_list![ClassA, ClassC]>) {}
    pub fn audit(&self, _key: Passkey<allow_list![ClassC]>) {}
}

impl ClassA {
    pub fn access(&self, w: &Widget) {
        let key: Passkey<allow_list![ClassA, ClassC]> = Self::passkey();
        w.open(key);
    }
}

impl ClassC {
    pub fn access(&self, w: &Widget) {
        w.open(Self::passkey());
        w.audit(Self::passkey());
    }
}

fn main() {
    ClassA.access(&Widget);
    ClassC.access(&Widget);
}
