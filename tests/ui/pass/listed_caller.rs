// Twin of `UnlistedCaller`: the caller is listed.
use tola_passkey::prelude::*;

#[derive(Principal)] pub struct ClassA;
#[derive(Principal)] pub struct ClassB;
#[derive(Principal)] pub struct ClassD;

pub struct Widget;
impl Widget {
    pub fn secret(&self, _key: Passkey<allow_list![ClassA, ClassB]>) {}
}

impl ClassB {
    pub fn access(&self, w: &Widget) {
        w.secret(Self::passkey());
    }
}

fn main() {
    ClassB.access(&Widget);
    let _ = ClassD;
}
