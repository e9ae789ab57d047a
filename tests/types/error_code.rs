use expected_rail::advanced::{FMT_CATEGORY, PARSE_CATEGORY, UTF8_CATEGORY};
use expected_rail::{ErrorCode, IntoErrorCode};
use std::collections::HashSet;

#[test]
fn accessors_return_parts() {
    let code = ErrorCode::new("net", 7, String::from("host unreachable"));

    assert_eq!(code.category(), "net");
    assert_eq!(code.value(), 7);
    assert_eq!(code.message(), "host unreachable");
    assert!(!code.is_os_error());
}

#[test]
fn equality_ignores_message() {
    let a = ErrorCode::new("net", 7, "a");
    let b = ErrorCode::new("net", 7, "b");
    let c = ErrorCode::new("disk", 7, "a");

    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<_> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn display_shows_message_category_and_value() {
    assert_eq!(ErrorCode::new("net", 7, "down").to_string(), "down (net:7)");
}

#[test]
fn parse_int_kinds_get_distinct_values() {
    let empty = "".parse::<u8>().unwrap_err().into_error_code();
    let digit = "x".parse::<u8>().unwrap_err().into_error_code();
    let overflow = "300".parse::<u8>().unwrap_err().into_error_code();
    let underflow = "-300".parse::<i8>().unwrap_err().into_error_code();

    assert_eq!(empty.category(), PARSE_CATEGORY);
    assert_eq!(
        [empty.value(), digit.value(), overflow.value(), underflow.value()],
        [1, 2, 3, 4]
    );
}

#[test]
fn other_std_errors_have_fixed_codes() {
    let float = "f".parse::<f64>().unwrap_err().into_error_code();
    let boolean = "maybe".parse::<bool>().unwrap_err().into_error_code();
    let utf8 = String::from_utf8(vec![0xff]).unwrap_err().into_error_code();
    let fmt = std::fmt::Error.into_error_code();

    assert_eq!((float.category(), float.value()), (PARSE_CATEGORY, 6));
    assert_eq!((boolean.category(), boolean.value()), (PARSE_CATEGORY, 7));
    assert_eq!((utf8.category(), utf8.value()), (UTF8_CATEGORY, 1));
    assert_eq!((fmt.category(), fmt.value()), (FMT_CATEGORY, 1));
}

#[test]
fn error_code_normalizes_to_itself() {
    let code = ErrorCode::new("x", 1, "y");

    assert_eq!(code.clone().into_error_code().message(), "y");
}

#[cfg(feature = "std")]
#[test]
fn os_errors_use_system_category() {
    use std::io;

    let code = ErrorCode::os(2);
    let from_io = ErrorCode::from(&io::Error::from_raw_os_error(2));

    assert!(code.is_os_error());
    assert_eq!(code, from_io);
    assert!(!code.message().is_empty());
}

#[cfg(feature = "std")]
#[test]
fn io_errors_without_os_number_use_kind_table() {
    use std::io;

    let code = io::Error::new(io::ErrorKind::PermissionDenied, "ro").into_error_code();

    assert_eq!(code.category(), "io");
    assert_eq!(code.value(), 2);
    assert_eq!(ErrorCode::from(io::ErrorKind::Other).value(), 20);
}

#[cfg(feature = "serde")]
#[test]
fn serde_keeps_all_fields() {
    let code = ErrorCode::new("net", 7, "down");

    let json = serde_json::to_string(&code).unwrap();
    let back: ErrorCode = serde_json::from_str(&json).unwrap();

    assert_eq!(json, r#"{"category":"net","value":7,"message":"down"}"#);
    assert_eq!(back.message(), "down");
}
