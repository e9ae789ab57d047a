use expected_rail::advanced::{Alt, Member, Never, Succ, Union, Zero};
use std::cell::Cell;
use std::rc::Rc;

type Abc = Alt<u8, Alt<String, Alt<char, Never>>>;

#[test]
fn index_tracks_live_alternative() {
    assert_eq!(Abc::inject(1u8).index(), 0);
    assert_eq!(Abc::inject(String::from("b")).index(), 1);
    assert_eq!(Abc::inject('c').index(), 2);
    assert_eq!(<Abc as Union>::LEN, 3);
}

#[test]
fn get_by_type_only_matches_live_alternative() {
    let v = Abc::inject('c');

    assert_eq!(Member::<char, _>::get(&v), Some(&'c'));
    assert_eq!(Member::<u8, _>::get(&v), None);
    assert_eq!(Member::<String, _>::get(&v), None);
    assert!(v.is::<char, _>());
}

#[test]
fn get_by_ordinal_infers_type() {
    let v = Abc::inject(String::from("mid"));

    let by_ordinal = <Abc as Member<_, Succ<Zero>>>::get(&v);
    assert_eq!(by_ordinal.map(String::as_str), Some("mid"));
    assert_eq!(<Abc as Member<String, Succ<Zero>>>::ORDINAL, 1);
}

#[test]
fn take_returns_union_on_mismatch() {
    let v = Abc::inject(9u8);

    let back = Member::<char, _>::take(v).unwrap_err();
    assert_eq!(back, Alt::Here(9));
    assert_eq!(Member::<u8, _>::take(back), Ok(9));
}

#[test]
fn get_mut_edits_in_place() {
    let mut v = Abc::inject(String::from("ab"));

    if let Some(s) = Member::<String, _>::get_mut(&mut v) {
        s.push('c');
    }
    assert_eq!(Member::<String, _>::get(&v).map(String::as_str), Some("abc"));
}

struct DropCounter(Rc<Cell<usize>>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn emplace_drops_previous_alternative_once() {
    let drops = Rc::new(Cell::new(0));
    let mut v: Alt<DropCounter, Alt<u8, Never>> = Alt::Here(DropCounter(drops.clone()));

    v.emplace(3u8);

    assert_eq!(drops.get(), 1);
    assert_eq!(v.index(), 1);
    drop(v);
    assert_eq!(drops.get(), 1);
}

fn failing_build() -> String {
    panic!("construction failed")
}

#[test]
fn emplace_panicking_constructor_keeps_previous_alternative() {
    let mut v = Abc::inject('k');

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        v.emplace(failing_build());
    }));

    assert!(outcome.is_err());
    assert_eq!(Member::<char, _>::get(&v), Some(&'k'));
}

#[test]
fn equality_requires_matching_ordinals() {
    type Twins = Alt<u8, Alt<u16, Never>>;

    assert_eq!(Twins::inject(1u8), Twins::inject(1u8));
    assert_ne!(Twins::inject(1u8), Twins::inject(1u16));
    assert_ne!(Twins::inject(1u8), Twins::inject(2u8));
}

#[test]
fn swap_exchanges_alternatives() {
    let mut a = Abc::inject(1u8);
    let mut b = Abc::inject('z');

    a.swap(&mut b);

    assert_eq!(a.index(), 2);
    assert_eq!(b.index(), 0);
}

#[test]
fn display_delegates_to_live_alternative() {
    let v = Abc::inject(String::from("shown"));
    assert_eq!(v.to_string(), "shown");
}
