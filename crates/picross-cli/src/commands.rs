use std::{fs, io::Write, path::Path};

use picross_catalog::{LevelCatalog, Messages, UNRECORDED_TIME};
use picross_core::{BoolGrid, Clue};
use picross_game::GameSession;
use picross_level::Level;

use crate::{
    config::{Command, Config},
    error::CliError,
};

const ALL_COMPLETE_FALLBACK: &str = "All levels are complete.";

pub(crate) fn run(
    config: &Config,
    command: &Command,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        Command::Levels => list_levels(config, out),
        Command::Next => show_next(config, out),
        Command::Show { name } => show_level(config, name, out),
        Command::Check { name, grid } => check_grid(config, name, grid, out),
        Command::Reset => reset(config, out),
        Command::HelpText => help_text(config, out),
    }
}

fn list_levels(config: &Config, out: &mut impl Write) -> Result<(), CliError> {
    let catalog = LevelCatalog::load(&config.catalog)?;
    for (id, record) in catalog.records().iter().enumerate() {
        let time = record
            .elapsed
            .map_or_else(|| UNRECORDED_TIME.to_owned(), |t| t.to_string());
        writeln!(
            out,
            "{id:>3}  {:<20} {:<10} {time}",
            record.name, record.status
        )?;
    }
    Ok(())
}

fn show_next(config: &Config, out: &mut impl Write) -> Result<(), CliError> {
    let catalog = LevelCatalog::load(&config.catalog)?;
    if let Some((id, record)) = catalog.next_incomplete() {
        writeln!(out, "{id} {}", record.name)?;
        return Ok(());
    }

    let prompt = match Messages::load(&config.messages)? {
        Some(messages) if !messages.all_complete.is_empty() => messages.all_complete,
        _ => ALL_COMPLETE_FALLBACK.to_owned(),
    };
    writeln!(out, "{prompt}")?;
    Ok(())
}

fn load_catalog_level(config: &Config, name: &str) -> Result<Level, CliError> {
    let catalog = LevelCatalog::load(&config.catalog)?;
    let (id, _) = catalog.find(name).ok_or_else(|| CliError::UnknownLevel {
        name: name.to_owned(),
    })?;
    Ok(Level::load(&config.layout, name, id)?)
}

fn write_clues(out: &mut impl Write, title: &str, clues: &[Clue]) -> Result<(), CliError> {
    writeln!(out, "{title}:")?;
    for (i, clue) in clues.iter().enumerate() {
        writeln!(out, "  {i:>3}: {clue}")?;
    }
    Ok(())
}

fn show_level(config: &Config, name: &str, out: &mut impl Write) -> Result<(), CliError> {
    let level = load_catalog_level(config, name)?;
    writeln!(
        out,
        "{} (id {}): {}x{}",
        level.name(),
        level.id(),
        level.width(),
        level.height()
    )?;
    write_clues(out, "rows", level.row_clues())?;
    write_clues(out, "columns", level.column_clues())?;
    writeln!(out, "solution:")?;
    write!(out, "{}", level.solution())?;
    Ok(())
}

fn read_grid(path: &Path) -> Result<BoolGrid, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })?;
    text.parse().map_err(|source| CliError::Grid {
        path: path.to_owned(),
        source,
    })
}

fn format_indices(flags: &[bool]) -> String {
    let solved: Vec<String> = flags
        .iter()
        .enumerate()
        .filter(|(_, solved)| **solved)
        .map(|(i, _)| i.to_string())
        .collect();
    if solved.is_empty() {
        "none".to_owned()
    } else {
        solved.join(" ")
    }
}

fn check_grid(
    config: &Config,
    name: &str,
    grid_path: &Path,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let level = load_catalog_level(config, name)?;
    let attempt = read_grid(grid_path)?;
    if !attempt.same_dimensions(level.solution()) {
        return Err(CliError::SizeMismatch {
            name: name.to_owned(),
            width: level.width(),
            height: level.height(),
            found_width: attempt.width(),
            found_height: attempt.height(),
        });
    }

    let mut session = GameSession::new(level);
    for pos in attempt.positions().filter(|&pos| attempt[pos]) {
        session.apply_move(pos, true)?;
    }

    writeln!(out, "progress: {}%", session.progress())?;
    writeln!(out, "solved rows: {}", format_indices(&session.solved_rows()))?;
    writeln!(
        out,
        "solved columns: {}",
        format_indices(&session.solved_columns())
    )?;
    writeln!(out, "solved: {}", if session.is_solved() { "yes" } else { "no" })?;
    Ok(())
}

fn reset(config: &Config, out: &mut impl Write) -> Result<(), CliError> {
    let mut catalog = LevelCatalog::load(&config.catalog)?;
    catalog.reset_all();
    catalog.save(&config.catalog)?;
    writeln!(out, "reset {} levels", catalog.len())?;
    Ok(())
}

fn help_text(config: &Config, out: &mut impl Write) -> Result<(), CliError> {
    match Messages::load(&config.messages)? {
        Some(messages) => writeln!(out, "{}", messages.help)?,
        None => log::warn!("no message file at {}", config.messages.display()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use image::{Rgba, RgbaImage};
    use picross_catalog::CatalogError;
    use picross_level::AssetLayout;

    use super::*;

    struct Fixture {
        dir: tempfile::TempDir,
        config: Config,
    }

    impl Fixture {
        fn new(catalog: &str) -> Self {
            let dir = tempfile::tempdir().unwrap();
            let root = dir.path();
            fs::write(root.join("level_data.txt"), catalog).unwrap();

            let images = root.join("images");
            fs::create_dir_all(&images).unwrap();
            let mut image = RgbaImage::from_pixel(3, 2, Rgba([255, 255, 255, 255]));
            for x in 0..3 {
                image.put_pixel(x, 0, Rgba([0, 0, 0, 255]));
            }
            image.put_pixel(1, 1, Rgba([0, 0, 0, 255]));
            image.save(images.join("tee.png")).unwrap();

            let config = Config {
                layout: AssetLayout::rooted_at(root),
                catalog: root.join("level_data.txt"),
                messages: root.join("messages.txt"),
            };
            Self { dir, config }
        }

        fn run(&self, command: &Command) -> Result<String, CliError> {
            let mut out = Vec::new();
            run(&self.config, command, &mut out)?;
            Ok(String::from_utf8(out).unwrap())
        }

        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }
    }

    #[test]
    fn test_levels_lists_records() {
        let fixture = Fixture::new("tee - complete - 03:04\nbox - incomplete\n");
        let output = fixture.run(&Command::Levels).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  0  tee "));
        assert!(lines[0].ends_with(" complete   03:04"));
        assert!(lines[1].starts_with("  1  box "));
        assert!(lines[1].ends_with(" incomplete --:--"));
        assert_eq!(UNRECORDED_TIME, "--:--");
    }

    #[test]
    fn test_next_and_all_complete_prompt() {
        let fixture = Fixture::new("tee - complete - 00:01\nbox - incomplete\n");
        assert_eq!(fixture.run(&Command::Next).unwrap(), "1 box\n");

        let fixture = Fixture::new("tee - complete - 00:01\n");
        assert_eq!(
            fixture.run(&Command::Next).unwrap(),
            format!("{ALL_COMPLETE_FALLBACK}\n")
        );

        fs::write(
            fixture.path("messages.txt"),
            "Fill the grid.\n[--DELIMITER--]\nPlay again?\n",
        )
        .unwrap();
        assert_eq!(fixture.run(&Command::Next).unwrap(), "Play again?\n");
        assert_eq!(fixture.run(&Command::HelpText).unwrap(), "Fill the grid.\n");
    }

    #[test]
    fn test_show_prints_clues_and_solution() {
        let fixture = Fixture::new("tee - incomplete\n");
        let output = fixture
            .run(&Command::Show {
                name: "tee".to_owned(),
            })
            .unwrap();
        assert!(output.starts_with("tee (id 0): 3x2\n"));
        assert!(output.contains("rows:\n    0: 3\n    1: 1\n"));
        assert!(output.contains("columns:\n    0: 1\n    1: 2\n    2: 1\n"));
        assert!(output.ends_with("solution:\n###\n.#.\n"));
    }

    #[test]
    fn test_check_reports_progress() {
        let fixture = Fixture::new("tee - incomplete\n");
        fs::write(fixture.path("attempt.txt"), "###\n...\n").unwrap();
        let output = fixture
            .run(&Command::Check {
                name: "tee".to_owned(),
                grid: fixture.path("attempt.txt"),
            })
            .unwrap();
        assert_eq!(
            output,
            "progress: 83%\nsolved rows: 0\nsolved columns: 0 2\nsolved: no\n"
        );

        fs::write(fixture.path("attempt.txt"), "###\n.#.\n").unwrap();
        let output = fixture
            .run(&Command::Check {
                name: "tee".to_owned(),
                grid: fixture.path("attempt.txt"),
            })
            .unwrap();
        assert!(output.ends_with("solved: yes\n"));
    }

    #[test]
    fn test_check_rejects_wrong_size() {
        let fixture = Fixture::new("tee - incomplete\n");
        fs::write(fixture.path("attempt.txt"), "##\n##\n").unwrap();
        let result = fixture.run(&Command::Check {
            name: "tee".to_owned(),
            grid: fixture.path("attempt.txt"),
        });
        assert!(matches!(
            result,
            Err(CliError::SizeMismatch {
                width: 3,
                height: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_reset_rewrites_catalog() {
        let fixture = Fixture::new("tee - complete - 00:10\nbox - complete - 00:20\n");
        assert_eq!(fixture.run(&Command::Reset).unwrap(), "reset 2 levels\n");
        assert_eq!(
            fs::read_to_string(fixture.path("level_data.txt")).unwrap(),
            "tee - incomplete - --:--\nbox - incomplete - --:--\n"
        );
    }

    #[test]
    fn test_errors_are_reported() {
        let fixture = Fixture::new("tee - finished\n");
        assert!(matches!(
            fixture.run(&Command::Levels),
            Err(CliError::Catalog(CatalogError::CorruptRecord { line: 1, .. }))
        ));

        let fixture = Fixture::new("tee - incomplete\n");
        assert!(matches!(
            fixture.run(&Command::Show {
                name: "nope".to_owned()
            }),
            Err(CliError::UnknownLevel { .. })
        ));

        fs::remove_file(fixture.path("level_data.txt")).unwrap();
        assert!(matches!(
            fixture.run(&Command::Next),
            Err(CliError::Catalog(CatalogError::NotFound { .. }))
        ));
    }
}
