use expected_rail::advanced::Alt;
use expected_rail::{swap, Expected, Unexpected};

#[derive(Debug, Clone, PartialEq)]
struct NotFound(String);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Timeout(u64);

type Lookup = Expected<u32, (NotFound, Timeout)>;

#[test]
fn default_holds_default_value() {
    let lookup = Lookup::default();

    assert!(lookup.has_value());
    assert_eq!(lookup.value(), Ok(&0));
}

#[test]
fn from_value_wraps_success() {
    let lookup: Lookup = 7.into();

    assert_eq!(lookup.index(), 0);
    assert_eq!(*lookup, 7);
}

#[test]
fn fail_places_error_at_its_ordinal() {
    let missing = Lookup::fail(NotFound("k".into()));
    let slow = Lookup::fail(Timeout(30));

    assert_eq!(missing.index(), 1);
    assert_eq!(slow.index(), 2);
    assert!(missing.is_error());
    assert!(!slow.has_error::<NotFound, _>());
}

#[test]
fn from_unexpected_accepts_subset_lists() {
    let err = Unexpected::<(Timeout,)>::new(Timeout(2));

    let lookup = Lookup::from_unexpected(err);

    assert_eq!(lookup.error::<Timeout, _>(), Ok(&Timeout(2)));
}

#[test]
fn from_result_accepts_ok_and_err() {
    let ok: Result<u32, Unexpected<(Timeout,)>> = Ok(5);
    let err: Result<u32, Unexpected<(Timeout,)>> = Err(Unexpected::new(Timeout(1)));

    assert_eq!(Lookup::from_result(ok).value(), Ok(&5));
    assert!(Lookup::from_result(err).has_error::<Timeout, _>());
}

#[test]
fn variant_round_trip_preserves_alternative() {
    let lookup = Lookup::fail(Timeout(8));

    let repr = lookup.clone().into_variant();
    assert!(matches!(repr, Alt::There(_)));
    assert_eq!(Lookup::from_variant(repr), lookup);
    assert!(matches!(lookup.as_variant(), Alt::There(_)));
}

#[test]
fn widen_keeps_success_and_error_identity() {
    let ok: Expected<u32, (Timeout,)> = Expected::new(1);
    let slow: Expected<u32, (Timeout,)> = Expected::fail(Timeout(3));

    let ok_wide: Lookup = ok.widen();
    let slow_wide: Lookup = slow.widen_cloned();

    assert_eq!(ok_wide.value(), Ok(&1));
    assert_eq!(slow_wide.error::<Timeout, _>(), Ok(&Timeout(3)));
    assert!(slow.has_error::<Timeout, _>());
}

#[test]
fn widen_into_reordered_list() {
    let lookup = Lookup::fail(NotFound("x".into()));

    let reordered: Expected<u32, (Timeout, bool, NotFound)> = lookup.widen();

    assert_eq!(reordered.index(), 3);
    assert_eq!(reordered.error::<NotFound, _>(), Ok(&NotFound("x".into())));
}

#[test]
fn emplace_replaces_error_with_value() {
    let mut lookup = Lookup::fail(Timeout(1));

    lookup.emplace(10);
    if let Ok(value) = lookup.value_mut() {
        *value += 1;
    }

    assert_eq!(lookup.value(), Ok(&11));
}

#[test]
fn emplace_drops_the_replaced_value_once() {
    use std::rc::Rc;

    let shared = Rc::new(());
    let mut slot: Expected<Rc<()>, (Timeout,)> = Expected::new(shared.clone());

    slot.emplace(Rc::new(()));
    assert_eq!(Rc::strong_count(&shared), 1);

    slot.emplace_with(|| shared.clone());
    assert_eq!(Rc::strong_count(&shared), 2);
    assert!(slot.value().is_ok_and(|held| Rc::ptr_eq(held, &shared)));
}

#[test]
fn emplace_with_panicking_constructor_keeps_error() {
    let mut lookup = Lookup::fail(Timeout(4));

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        lookup.emplace_with(|| panic!("no value today"));
    }));

    assert!(outcome.is_err());
    assert_eq!(lookup.error::<Timeout, _>(), Ok(&Timeout(4)));
}

#[test]
fn swap_exchanges_any_alternatives() {
    let mut left = Lookup::new(1);
    let mut right = Lookup::fail(NotFound("r".into()));

    left.swap(&mut right);
    assert!(left.has_error::<NotFound, _>());
    assert_eq!(right.value(), Ok(&1));

    swap(&mut left, &mut right);
    assert_eq!(left.value(), Ok(&1));
    assert!(right.has_error::<NotFound, _>());
}

#[test]
fn value_mut_edits_success() {
    let mut lookup = Lookup::new(2);

    if let Ok(value) = lookup.value_mut() {
        *value *= 21;
    }

    assert_eq!(lookup.into_value(), Ok(42));
}

#[test]
fn value_on_error_names_the_live_error() {
    let lookup = Lookup::fail(Timeout(9));

    let signal = lookup.value().unwrap_err();

    assert_eq!(signal.index(), 2);
    assert!(signal.type_name().ends_with("Timeout"));
    assert!(!signal.is_value_present());
    assert_eq!(lookup.clone().into_value().unwrap_err(), signal);
}

#[test]
fn error_on_success_reports_value_present() {
    let lookup = Lookup::new(3);

    let signal = lookup.error::<Timeout, _>().unwrap_err();

    assert!(signal.is_value_present());
    assert_eq!(signal.type_name(), "u32");
}

#[test]
fn error_of_other_type_reports_actual_error() {
    let lookup = Lookup::fail(NotFound("gone".into()));

    let signal = lookup.error::<Timeout, _>().unwrap_err();
    assert_eq!(signal.index(), 1);
    assert!(signal.type_name().ends_with("NotFound"));

    let signal = lookup.into_error::<Timeout, _>().unwrap_err();
    assert_eq!(signal.index(), 1);
}

#[test]
fn into_error_moves_matching_error_out() {
    let lookup = Lookup::fail(NotFound("gone".into()));

    assert_eq!(lookup.into_error::<NotFound, _>(), Ok(NotFound("gone".into())));
}

#[test]
fn unexpected_copies_error_side() {
    let lookup = Lookup::fail(Timeout(6));

    let err = lookup.unexpected().unwrap();

    assert_eq!(err.index(), 1);
    assert_eq!(err.get::<Timeout, _>(), Some(&Timeout(6)));
    assert!(lookup.has_error::<Timeout, _>());
    assert!(Lookup::new(0).unexpected().unwrap_err().is_value_present());
}

#[test]
fn into_unexpected_moves_error_side() {
    let err = Lookup::fail(NotFound("n".into())).into_unexpected().unwrap();

    assert!(err.is::<NotFound, _>());
    assert!(Lookup::new(1).into_unexpected().is_err());
}

fn fetch(fail_with: Option<Timeout>) -> Lookup {
    match fail_with {
        Some(timeout) => Lookup::fail(timeout),
        None => Lookup::new(100),
    }
}

fn doubled(fail_with: Option<Timeout>) -> Result<u32, Unexpected<(NotFound, Timeout)>> {
    let value = fetch(fail_with).into_result()?;
    Ok(value * 2)
}

#[test]
fn into_result_supports_question_mark() {
    assert_eq!(doubled(None), Ok(200));
    assert_eq!(
        doubled(Some(Timeout(5))).unwrap_err().get::<Timeout, _>(),
        Some(&Timeout(5))
    );
}

#[test]
fn result_conversion_via_from() {
    let result: Result<u32, Unexpected<(NotFound, Timeout)>> = Lookup::new(4).into();

    assert_eq!(result, Ok(4));
}

#[test]
fn as_result_borrows_both_sides() {
    let ok = Lookup::new(4);
    let slow = Lookup::fail(Timeout(2));

    assert_eq!(ok.as_result(), Ok(&4));
    assert!(slow.as_result().is_err());
}

#[test]
fn map_transforms_only_success() {
    let ok = Lookup::new(4).map(|v| v.to_string());
    let slow = Lookup::fail(Timeout(2)).map(|v| v.to_string());

    assert_eq!(ok.value().map(String::as_str), Ok("4"));
    assert_eq!(slow.error::<Timeout, _>(), Ok(&Timeout(2)));
}

#[test]
fn sole_error_accessors() {
    let failed: Expected<u8, (Timeout,)> = Expected::fail(Timeout(1));
    let ok: Expected<u8, (Timeout,)> = Expected::new(1);

    assert!(failed.has_sole_error());
    assert_eq!(failed.sole_error(), Ok(&Timeout(1)));
    assert_eq!(failed.into_sole_error(), Ok(Timeout(1)));
    assert!(!ok.has_sole_error());
    assert!(ok.sole_error().unwrap_err().is_value_present());
}

#[test]
fn empty_error_list_always_succeeds() {
    let only: Expected<&str, ()> = Expected::new("ok");

    assert!(only.has_value());
    assert_eq!(only.into_inner(), "ok");
}

#[test]
fn deref_reads_success() {
    let mut lookup = Lookup::new(5);

    *lookup += 1;

    assert_eq!(*lookup, 6);
}

#[test]
#[should_panic(expected = "holding error #2")]
fn deref_panics_on_error() {
    let lookup = Lookup::fail(Timeout(1));
    let value = *lookup;
    assert_eq!(value, 0);
}

#[test]
fn equality_compares_alternative_and_payload() {
    assert_eq!(Lookup::new(1), Lookup::new(1));
    assert_ne!(Lookup::new(1), Lookup::new(2));
    assert_ne!(Lookup::new(1), Lookup::fail(Timeout(1)));
    assert_eq!(Lookup::fail(Timeout(1)), Lookup::fail(Timeout(1)));
}

#[test]
fn copy_when_all_alternatives_are_copy() {
    let original: Expected<u8, (Timeout, char)> = Expected::fail('c');
    let copied = original;

    assert_eq!(original, copied);
}

#[test]
fn debug_labels_the_side() {
    assert_eq!(format!("{:?}", Lookup::new(3)), "Value(3)");
    assert!(format!("{:?}", Lookup::fail(Timeout(3))).starts_with("Error("));
}

#[test]
fn hash_agrees_with_equality() {
    use std::collections::HashSet;

    let items: [Expected<u8, (char,)>; 3] = [Expected::new(1), Expected::new(1), Expected::fail('a')];
    let set: HashSet<_> = items.into_iter().collect();

    assert_eq!(set.len(), 2);
}

#[test]
fn borrowed_error_types_use_unchecked_queries() {
    fn parse(input: &str) -> Expected<u16, (&str,)> {
        match input.parse() {
            Ok(port) => Expected::new(port),
            Err(_) => Expected::fail(input),
        }
    }

    let line = String::from("port=eighty");
    let bad = parse(&line[5..]);
    assert!(!bad.has_value());
    assert_eq!(bad.index(), 1);
    assert!(bad.as_result().is_err());

    let rejected = bad.into_result().unwrap_err();
    assert_eq!(rejected.get::<&str, _>(), Some(&"eighty"));

    assert_eq!(parse("8080").into_result().ok(), Some(8080));
}
