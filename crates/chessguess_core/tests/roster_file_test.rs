//! Loading rosters from disk.

use chessguess_core::{Roster, RosterErrorKind, Title};
use std::io::Write;

#[test]
fn test_loads_roster_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"
[[player]]
name = "Hou Yifan"
born = 1994
elo = 2686
nationality = "CHN"
title = "GM"
portrait = "Hou-Yifan.jpeg"

[[player]]
name = "Club Regular"
born = 1962
elo = 1950
nationality = "ENG"
portrait = "club.jpeg"
"#
    )
    .expect("write roster");

    let roster = Roster::from_file(file.path()).expect("valid roster");
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.get("Hou Yifan").unwrap().title(), Title::Grandmaster);
    assert_eq!(roster.get("Club Regular").unwrap().title(), Title::Untitled);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Roster::from_file(dir.path().join("absent.toml")).expect_err("missing");
    assert!(matches!(err.kind(), RosterErrorKind::Io(_)));
}

#[test]
fn test_bad_nationality_in_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"
[[player]]
name = "Someone"
born = 1990
elo = 2300
nationality = "Norway"
portrait = "x.jpeg"
"#
    )
    .expect("write roster");

    let err = Roster::from_file(file.path()).expect_err("invalid");
    assert!(matches!(
        err.kind(),
        RosterErrorKind::InvalidNationality { code, .. } if code == "Norway"
    ));
    assert!(err.to_string().contains("Norway"));
}
