use std::path::{Path, PathBuf};

use picross_core::{BoolGrid, Clue, Line, Position, compute_clue};

use crate::{AssetLayout, PixelSource};

/// Errors that can occur while loading a level.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LevelError {
    /// The level image is missing or cannot be decoded.
    #[display("level image {} could not be read", path.display())]
    AssetNotFound {
        /// Path that was tried.
        path: PathBuf,
        /// Underlying decoder error.
        source: image::ImageError,
    },
    /// The level image has no pixels.
    #[display("level image for {name:?} is empty")]
    EmptyImage {
        /// Level name.
        name: String,
    },
}

/// A nonogram level derived from a picture.
///
/// The solution has one cell per pixel: rows follow the image's vertical axis
/// and columns its horizontal axis. It is computed once and never changes;
/// neither do the clues derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    name: String,
    id: usize,
    solution: BoolGrid,
    row_clues: Vec<Clue>,
    column_clues: Vec<Clue>,
    solved_image: Option<PathBuf>,
}

impl Level {
    /// Loads level `name` from `<images_dir>/<name>.png`.
    ///
    /// `id` is the level's position in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::AssetNotFound`] if the image cannot be opened or
    /// decoded, and [`LevelError::EmptyImage`] if it has no pixels.
    pub fn load(layout: &AssetLayout, name: &str, id: usize) -> Result<Self, LevelError> {
        let path = layout.image_path(name);
        let image = image::open(&path).map_err(|source| LevelError::AssetNotFound {
            path: path.clone(),
            source,
        })?;
        let mut level = Self::from_pixels(name, id, &image)?;
        level.solved_image = Some(layout.solved_image_path(name));
        log::debug!(
            "loaded level {name:?} (id {id}, {}x{}) from {}",
            level.width(),
            level.height(),
            path.display()
        );
        Ok(level)
    }

    /// Builds a level from an already decoded picture.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::EmptyImage`] if the picture has no pixels.
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_pixels<P>(name: &str, id: usize, pixels: &P) -> Result<Self, LevelError>
    where
        P: PixelSource + ?Sized,
    {
        let (width, height) = pixels.dimensions();
        let solution = BoolGrid::from_fn(width as usize, height as usize, |Position { row, col }| {
            pixels.is_black(col as u32, row as u32)
        });
        Self::from_solution(name, id, solution)
    }

    /// Builds a level from a solution grid.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::EmptyImage`] if the grid has no cells.
    pub fn from_solution(name: &str, id: usize, solution: BoolGrid) -> Result<Self, LevelError> {
        if solution.is_empty() {
            return Err(LevelError::EmptyImage {
                name: name.to_owned(),
            });
        }
        let row_clues = Line::all_rows(solution.height())
            .map(|line| compute_clue(line.cells(&solution)))
            .collect();
        let column_clues = Line::all_columns(solution.width())
            .map(|line| compute_clue(line.cells(&solution)))
            .collect();
        Ok(Self {
            name: name.to_owned(),
            id,
            solution,
            row_clues,
            column_clues,
            solved_image: None,
        })
    }

    /// Returns the level name, which is also its image file stem.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the level's catalog index.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.solution.width()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.solution.height()
    }

    /// Returns the solution grid.
    #[must_use]
    pub fn solution(&self) -> &BoolGrid {
        &self.solution
    }

    /// Returns the clue of every row, top to bottom.
    #[must_use]
    pub fn row_clues(&self) -> &[Clue] {
        &self.row_clues
    }

    /// Returns the clue of every column, left to right.
    #[must_use]
    pub fn column_clues(&self) -> &[Clue] {
        &self.column_clues
    }

    /// Returns the stored clue for `line`.
    ///
    /// # Panics
    ///
    /// Panics if `line` lies outside the level.
    #[must_use]
    pub fn clue(&self, line: Line) -> &Clue {
        match line {
            Line::Row { row } => &self.row_clues[row],
            Line::Column { col } => &self.column_clues[col],
        }
    }

    /// Returns the path of the reveal picture, if the level was loaded from disk.
    #[must_use]
    pub fn solved_image_path(&self) -> Option<&Path> {
        self.solved_image.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn write_image(dir: &Path, name: &str, image: &RgbaImage) {
        let images = dir.join("images");
        std::fs::create_dir_all(&images).unwrap();
        image.save(images.join(format!("{name}.png"))).unwrap();
    }

    #[test]
    fn test_pixels_map_to_rows_and_columns() {
        // 4 wide, 2 tall: the solution must have 2 rows of 4 cells.
        let mut image = RgbaImage::from_pixel(4, 2, WHITE);
        image.put_pixel(3, 0, BLACK);
        image.put_pixel(0, 1, BLACK);
        image.put_pixel(1, 1, BLACK);

        let level = Level::from_pixels("wide", 7, &image).unwrap();
        assert_eq!(level.name(), "wide");
        assert_eq!(level.id(), 7);
        assert_eq!(level.width(), 4);
        assert_eq!(level.height(), 2);
        assert_eq!(level.solution().to_string(), "...#\n##..\n");
        assert_eq!(level.row_clues().len(), 2);
        assert_eq!(level.column_clues().len(), 4);

        let rows: Vec<_> = level.row_clues().iter().map(Clue::display_key).collect();
        assert_eq!(rows, ["1", "2"]);
        let cols: Vec<_> = level.column_clues().iter().map(Clue::display_key).collect();
        assert_eq!(cols, ["1", "1", "", "1"]);
        assert_eq!(level.clue(Line::Column { col: 3 }).runs(), [1]);
        assert_eq!(level.solved_image_path(), None);
    }

    #[test]
    fn test_stored_clues_match_recomputation() {
        let solution: BoolGrid = "\
##.#
.###
#..#
"
        .parse()
        .unwrap();
        let level = Level::from_solution("mixed", 0, solution.clone()).unwrap();
        for line in Line::all_rows(level.height()).chain(Line::all_columns(level.width())) {
            assert_eq!(level.clue(line), &compute_clue(line.cells(&solution)));
        }
    }

    #[test]
    fn test_empty_solution_rejected() {
        let result = Level::from_solution("void", 0, BoolGrid::new(0, 0));
        assert!(matches!(result, Err(LevelError::EmptyImage { name }) if name == "void"));
    }

    #[test]
    fn test_load_from_disk_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut image = RgbaImage::from_pixel(3, 3, WHITE);
        for (x, y) in [(0, 0), (2, 0), (1, 1), (0, 2), (2, 2)] {
            image.put_pixel(x, y, BLACK);
        }
        write_image(dir.path(), "cross", &image);

        let layout = AssetLayout::rooted_at(dir.path());
        let first = Level::load(&layout, "cross", 2).unwrap();
        let second = Level::load(&layout, "cross", 2).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.solution().to_string(), "#.#\n.#.\n#.#\n");
        assert_eq!(
            first.solved_image_path(),
            Some(layout.solved_image_path("cross").as_path())
        );
    }

    #[test]
    fn test_missing_image_reports_asset_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let layout = AssetLayout::rooted_at(dir.path());
        let result = Level::load(&layout, "nope", 0);
        assert!(matches!(
            result,
            Err(LevelError::AssetNotFound { path, .. }) if path == layout.image_path("nope")
        ));
    }

    #[test]
    fn test_undecodable_image_reports_asset_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let images = dir.path().join("images");
        std::fs::create_dir_all(&images).unwrap();
        std::fs::write(images.join("garbage.png"), b"definitely not a png").unwrap();

        let layout = AssetLayout::rooted_at(dir.path());
        let result = Level::load(&layout, "garbage", 0);
        assert!(matches!(result, Err(LevelError::AssetNotFound { .. })));
    }
}
