/// Uniform 3x3 grid geometry and cell cropping
///
/// Cells are computed with integer division, so when the composite's sides
/// are not multiples of 3 the remainder strip on the right and bottom edges
/// belongs to no cell.

use image::DynamicImage;

/// Number of rows and columns in the composite grid
pub const GRID_SIZE: u32 = 3;

/// Which grid cell holds which day's illustration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPosition {
    pub row: u32,
    pub col: u32,
    pub day: u8,
}

/// Fixed sheet layout:
/// - Row 0: days 1, 2, 3
/// - Row 1: days 4, 5 (third cell unused)
/// - Row 2: days 6, 7 (third cell unused)
pub const DAY_POSITIONS: [DayPosition; 7] = [
    DayPosition { row: 0, col: 0, day: 1 },
    DayPosition { row: 0, col: 1, day: 2 },
    DayPosition { row: 0, col: 2, day: 3 },
    DayPosition { row: 1, col: 0, day: 4 },
    DayPosition { row: 1, col: 1, day: 5 },
    DayPosition { row: 2, col: 0, day: 6 },
    DayPosition { row: 2, col: 1, day: 7 },
];

/// Size of a single grid cell in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGeometry {
    pub cell_width: u32,
    pub cell_height: u32,
}

/// Half-open pixel rectangle `[left, right) x [top, bottom)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

impl CellGeometry {
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        Self {
            cell_width: width / GRID_SIZE,
            cell_height: height / GRID_SIZE,
        }
    }

    /// Rectangle covered by the given day's cell
    pub fn crop_box(&self, position: DayPosition) -> CropBox {
        let left = position.col * self.cell_width;
        let top = position.row * self.cell_height;

        CropBox {
            left,
            top,
            right: left + self.cell_width,
            bottom: top + self.cell_height,
        }
    }
}

/// Extract one day's cell as an independently owned image
pub fn crop_day(image: &DynamicImage, geometry: CellGeometry, position: DayPosition) -> DynamicImage {
    let bounds = geometry.crop_box(position);
    image.crop_imm(bounds.left, bounds.top, bounds.width(), bounds.height())
}

/// Crop every day cell, in layout order
pub fn crop_all(image: &DynamicImage) -> Vec<(DayPosition, DynamicImage)> {
    let geometry = CellGeometry::from_dimensions(image.width(), image.height());

    DAY_POSITIONS
        .iter()
        .map(|&position| (position, crop_day(image, geometry, position)))
        .collect()
}
