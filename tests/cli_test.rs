#![cfg(feature = "std")]

use std::io::Cursor;

use broadside::{parse_target, CliPlayer, GameEngine, Player, TargetError};

#[test]
fn test_parse_target_accepts_row_col() {
    let engine = GameEngine::new();
    assert_eq!(parse_target("4,5", &engine), Ok((4, 5)));
    assert_eq!(parse_target(" 0 , 9 \n", &engine), Ok((0, 9)));
}

#[test]
fn test_parse_target_rejects_bad_input() {
    let mut engine = GameEngine::new();
    engine.note_attempt(2, 2).unwrap();

    assert_eq!(parse_target("45", &engine), Err(TargetError::Format));
    assert_eq!(parse_target("1,2,3", &engine), Err(TargetError::Format));
    assert_eq!(parse_target("a,1", &engine), Err(TargetError::NotANumber));
    assert_eq!(parse_target("-1,3", &engine), Err(TargetError::OutOfRange));
    assert_eq!(parse_target("3,10", &engine), Err(TargetError::OutOfRange));
    assert_eq!(parse_target("2,2", &engine), Err(TargetError::AlreadyAttempted));
}

#[test]
fn test_cli_player_reprompts_until_valid() {
    let mut engine = GameEngine::new();
    engine.note_attempt(0, 0).unwrap();

    let input = Cursor::new("hello\n11,1\n0,0\n7,3\n");
    let mut player = CliPlayer::with_input(input);
    assert_eq!(player.select_target(&engine).unwrap(), (7, 3));
}

#[test]
fn test_cli_player_fails_when_input_ends() {
    let engine = GameEngine::new();
    let mut player = CliPlayer::with_input(Cursor::new("bad\n"));
    let err = player.select_target(&engine).unwrap_err();
    assert!(err.to_string().contains("input closed"));
}
