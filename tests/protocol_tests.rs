use broadside::{CodecError, Message};
use proptest::prelude::*;

#[test]
fn test_shoot_encodes_and_decodes() {
    let msg = Message::Shoot { row: 4, col: 5 };
    assert_eq!(msg.encode(), "SHOOT|4,5");
    assert_eq!(Message::decode("SHOOT|4,5").unwrap(), msg);
    // keywords are matched without regard to case
    assert_eq!(Message::decode("Shoot|4,5").unwrap(), msg);
}

#[test]
fn test_sunk_with_and_without_ship() {
    assert_eq!(
        Message::decode("SUNK|2,3|CRUISER").unwrap(),
        Message::Sunk {
            row: 2,
            col: 3,
            ship: Some("CRUISER".to_string())
        }
    );
    assert_eq!(
        Message::decode("SUNK|2,3").unwrap(),
        Message::Sunk {
            row: 2,
            col: 3,
            ship: None
        }
    );
    assert_eq!(
        Message::decode("SUNK|2,3|").unwrap(),
        Message::Sunk {
            row: 2,
            col: 3,
            ship: None
        }
    );
    let bare = Message::Sunk {
        row: 9,
        col: 0,
        ship: None,
    };
    assert_eq!(bare.encode(), "SUNK|9,0");
}

#[test]
fn test_keyword_messages() {
    assert_eq!(Message::GameOver.encode(), "GAME_OVER");
    assert_eq!(Message::Ready.encode(), "READY");
    assert_eq!(Message::decode("GAME_OVER").unwrap(), Message::GameOver);
    assert_eq!(Message::decode("ready\r\n").unwrap(), Message::Ready);
}

#[test]
fn test_unknown_keyword_is_kept() {
    assert_eq!(
        Message::decode("SURRENDER").unwrap(),
        Message::Other("SURRENDER".to_string())
    );
    // only the keyword survives
    assert_eq!(
        Message::decode("PING|1,2").unwrap(),
        Message::Other("PING".to_string())
    );
}

#[test]
fn test_result_extra_fields_ignored() {
    assert_eq!(
        Message::decode("HIT|1,1|CARRIER").unwrap(),
        Message::Hit { row: 1, col: 1 }
    );
}

#[test]
fn test_malformed_lines_fail() {
    assert_eq!(Message::decode("").unwrap_err(), CodecError::Empty);
    assert_eq!(Message::decode("   \t").unwrap_err(), CodecError::Empty);
    assert_eq!(
        Message::decode("SHOOT").unwrap_err(),
        CodecError::MissingCoordinates {
            kind: "SHOOT".to_string()
        }
    );
    assert_eq!(
        Message::decode("MISS|45").unwrap_err(),
        CodecError::BadCoordinateCount {
            field: "45".to_string()
        }
    );
    assert_eq!(
        Message::decode("HIT|1,2,3").unwrap_err(),
        CodecError::BadCoordinateCount {
            field: "1,2,3".to_string()
        }
    );
    assert_eq!(
        Message::decode("SHOOT|a,5").unwrap_err(),
        CodecError::BadInteger {
            value: "a".to_string()
        }
    );
    assert!(matches!(
        Message::decode("SHOOT|-1,5"),
        Err(CodecError::BadInteger { .. })
    ));
    assert!(matches!(
        Message::decode("SHOOT|4,"),
        Err(CodecError::BadInteger { .. })
    ));
    assert!(matches!(
        Message::decode("SUNK|300,1|DESTROYER"),
        Err(CodecError::BadInteger { .. })
    ));
}

fn ship_name() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Z_]{1,12}")
}

fn message() -> impl Strategy<Value = Message> {
    prop_oneof![
        (any::<u8>(), any::<u8>()).prop_map(|(row, col)| Message::Shoot { row, col }),
        (any::<u8>(), any::<u8>()).prop_map(|(row, col)| Message::Hit { row, col }),
        (any::<u8>(), any::<u8>()).prop_map(|(row, col)| Message::Miss { row, col }),
        (any::<u8>(), any::<u8>(), ship_name())
            .prop_map(|(row, col, ship)| Message::Sunk { row, col, ship }),
        Just(Message::GameOver),
        Just(Message::Ready),
    ]
}

proptest! {
    #[test]
    fn encode_then_decode_is_identity(msg in message()) {
        let line = msg.encode();
        prop_assert!(!line.contains('\n'));
        prop_assert_eq!(Message::decode(&line).unwrap(), msg);
    }

    #[test]
    fn decode_never_panics(line in "\\PC{0,40}") {
        let _ = Message::decode(&line);
    }
}
