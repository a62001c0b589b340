//! Full flow: catalog on disk, level image on disk, play, record completion.

use std::{fs, path::Path};

use image::{Rgba, RgbaImage};
use picross_catalog::{ElapsedTime, LevelCatalog};
use picross_core::{Clue, Position};
use picross_game::{GameSession, SessionError};
use picross_level::AssetLayout;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

const CROSS_CELLS: [(usize, usize); 5] = [(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)];

fn write_level(root: &Path, name: &str, width: u32, height: u32, black: &[(usize, usize)]) {
    let mut image = RgbaImage::from_pixel(width, height, WHITE);
    for &(row, col) in black {
        image.put_pixel(u32::try_from(col).unwrap(), u32::try_from(row).unwrap(), BLACK);
    }
    let images = root.join("images");
    fs::create_dir_all(&images).unwrap();
    image.save(images.join(format!("{name}.png"))).unwrap();
}

fn keys(clues: &[Clue]) -> Vec<String> {
    clues.iter().map(Clue::display_key).collect()
}

#[test]
fn test_cross_level_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_level(root, "cross", 3, 3, &CROSS_CELLS);
    let catalog_path = root.join("level_data.txt");
    fs::write(
        &catalog_path,
        "smile - complete - 00:30\ncross - incomplete - --:--\n",
    )
    .unwrap();

    let layout = AssetLayout::rooted_at(root);
    let mut catalog = LevelCatalog::load(&catalog_path).unwrap();
    let (id, record) = catalog.next_incomplete().unwrap();
    assert_eq!((id, record.name.as_str()), (1, "cross"));

    let mut session = GameSession::for_catalog_level(&layout, &catalog, id).unwrap();
    assert_eq!(keys(session.level().row_clues()), ["1 1", "1", "1 1"]);
    assert_eq!(keys(session.level().column_clues()), ["1 1", "1", "1 1"]);

    for (row, col) in CROSS_CELLS {
        session.apply_move(Position::new(row, col), true).unwrap();
        session.tick();
    }
    assert_eq!(session.progress(), 100);
    assert!(session.is_solved());

    session.apply_move(Position::new(1, 1), false).unwrap();
    assert!(session.progress() < 100);
    assert!(!session.is_solved());
    assert!(matches!(
        session.complete(&mut catalog, &catalog_path),
        Err(SessionError::NotSolved)
    ));

    session.tick();
    session.apply_move(Position::new(1, 1), true).unwrap();
    assert!(session.is_solved());

    // Ticks counted: one after each of the first four moves (the fifth move
    // solved the grid) plus one while unsolved.
    let elapsed = session.complete(&mut catalog, &catalog_path).unwrap();
    assert_eq!(elapsed, ElapsedTime::from_secs(5));

    let reloaded = LevelCatalog::load(&catalog_path).unwrap();
    assert_eq!(reloaded, catalog);
    assert!(reloaded.is_all_complete());
    assert_eq!(
        fs::read_to_string(&catalog_path).unwrap(),
        "smile - complete - 00:30\ncross - complete - 00:05\n"
    );

    catalog.reset_all();
    catalog.save(&catalog_path).unwrap();
    let reloaded = LevelCatalog::load(&catalog_path).unwrap();
    assert!(
        reloaded
            .records()
            .iter()
            .all(|r| r.status.is_incomplete() && r.elapsed.is_none())
    );
    assert_eq!(reloaded.find("cross").map(|(id, _)| id), Some(1));
}

#[test]
fn test_non_square_level_clue_lengths() {
    let dir = tempfile::tempdir().unwrap();
    write_level(dir.path(), "bar", 5, 2, &[(0, 1), (0, 2), (0, 3), (1, 4)]);
    let catalog = LevelCatalog::from_names(["bar"]).unwrap();

    let layout = AssetLayout::rooted_at(dir.path());
    let mut session = GameSession::for_catalog_level(&layout, &catalog, 0).unwrap();
    let level = session.level();
    assert_eq!((level.width(), level.height()), (5, 2));
    assert_eq!(keys(level.row_clues()), ["3", "1"]);
    assert_eq!(keys(level.column_clues()), ["", "1", "1", "1", "1"]);

    assert!(matches!(
        session.apply_move(Position::new(2, 0), true),
        Err(SessionError::Grid(_))
    ));
    session.apply_move(Position::new(1, 4), true).unwrap();
    assert_eq!(session.solved_rows(), [false, true]);
}

#[test]
fn test_missing_level_image() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = LevelCatalog::from_names(["ghost"]).unwrap();
    let layout = AssetLayout::rooted_at(dir.path());

    assert!(matches!(
        GameSession::for_catalog_level(&layout, &catalog, 0),
        Err(SessionError::Level(_))
    ));
    assert!(matches!(
        GameSession::for_catalog_level(&layout, &catalog, 3),
        Err(SessionError::Catalog(_))
    ));
}
