use approx::assert_relative_eq;
use aruco_boards_charuco::{
    charuco_hash_code, ArucoCharucoBoard, CharucoBoardConfig, CharucoBoardReport,
    CharucoDetection, HashScheme, ImageSize, PredefinedDictionary,
};
use nalgebra::Point2;
use std::fs;

#[test]
fn ten_by_seven_board_hash_tracks_square_counts() {
    let mut board = ArucoCharucoBoard::new(CharucoBoardConfig::new(10, 7, 0.05, 0.04));
    let h = board.aruco_hash_code();
    assert_eq!(h, charuco_hash_code(10, 7, 0.04, 0.05));

    board.set_squares_y(8).expect("rebuild");
    assert_ne!(board.aruco_hash_code(), h);

    board.set_squares_y(7).expect("rebuild");
    assert_eq!(board.aruco_hash_code(), h);
}

#[test]
fn config_file_drives_descriptor() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("board.json");
    fs::write(
        &path,
        r#"{
            "squares_x": 5,
            "squares_y": 7,
            "square_side_length": 100.0,
            "marker_side_length": 80.0,
            "margins_size": 20,
            "dictionary": "DICT_6X6_250"
        }"#,
    )
    .expect("write config");

    let cfg = CharucoBoardConfig::load_json(&path).expect("load config");
    let board = ArucoCharucoBoard::new(cfg);
    assert_eq!(board.dictionary(), PredefinedDictionary::Dict6x6_250);
    assert_eq!(board.image_size(), ImageSize::new(540, 740));
    assert_relative_eq!(board.axis_length(), 250.0);

    let out = dir.path().join("copy.json");
    cfg.write_json(&out).expect("write copy");
    let again = CharucoBoardConfig::load_json(&out).expect("reload");
    assert_eq!(again, cfg);
}

#[test]
fn report_captures_build_failure() {
    let board = ArucoCharucoBoard::new(CharucoBoardConfig::new(1, 1, 0.05, 0.04))
        .with_hash_scheme(HashScheme::Legacy);
    let report = CharucoBoardReport::from_board(&board);
    assert!(report.marker_count.is_none());
    assert!(report
        .error
        .as_deref()
        .is_some_and(|e| e.contains(">= 2")));
    assert_eq!(report.hash_scheme, HashScheme::Legacy);

    let json = serde_json::to_value(&report).expect("ser");
    assert_eq!(json["hash_scheme"], "legacy");
    assert_eq!(json["config"]["squares_x"], 1);
}

#[test]
fn tracker_snapshot_maps_to_object_points() {
    let mut board = ArucoCharucoBoard::new(CharucoBoardConfig::new(5, 4, 0.03, 0.02));
    let det = CharucoDetection::new(
        vec![Point2::new(100.0, 80.0), Point2::new(140.0, 80.0)],
        vec![0, 1],
        true,
    )
    .expect("snapshot");
    board.set_detection(det);

    let charuco = board.board().expect("board");
    let (object, image) = board.detection().object_points(charuco);
    assert_eq!(object.len(), 2);
    assert_eq!(image.len(), 2);
    assert_relative_eq!(object[1].x - object[0].x, 0.03, epsilon = 1e-6);
}
