use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;
use crate::skybox::layout::Cell;

/// Edge length in pixels of a square face. Always positive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FaceSize(u32);

impl FaceSize {
    pub fn new(size: i64) -> Result<Self, Error> {
        if size <= 0 {
            return Err(Error::InvalidFaceSize(size.to_string()));
        }

        // The right-most and bottom-most cells must still be addressable.
        match u32::try_from(size) {
            Ok(size) if size.checked_mul(4).is_some() => Ok(Self(size)),
            _ => Err(Error::InvalidFaceSize(size.to_string())),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn region(self, cell: Cell) -> CropRegion {
        CropRegion {
            left: cell.column * self.0,
            top: cell.row * self.0,
            width: self.0,
            height: self.0,
        }
    }

    pub fn regions(self, cells: &[Cell; 6]) -> [CropRegion; 6] {
        cells.map(|cell| self.region(cell))
    }
}

impl FromStr for FaceSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(size) => FaceSize::new(size),
            Err(_) => Err(Error::InvalidFaceSize(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for FaceSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pixel rectangle of one face inside the source texture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CropRegion {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    /// Whether the region lies completely inside an image of the given dimensions.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        let right = u64::from(self.left) + u64::from(self.width);
        let bottom = u64::from(self.top) + u64::from(self.height);
        right <= u64::from(width) && bottom <= u64::from(height)
    }
}

impl std::fmt::Display for CropRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{}+{}+{}",
            self.width, self.height, self.left, self.top
        )
    }
}

pub fn compute_regions(face_size: i64, cells: &[Cell; 6]) -> Result<[CropRegion; 6], Error> {
    Ok(FaceSize::new(face_size)?.regions(cells))
}
