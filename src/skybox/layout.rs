use std::str::FromStr;

use crate::error::Error;

/// A (column, row) position in the implicit face grid of a skybox texture.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub column: u32,
    pub row: u32,
}

impl Cell {
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

impl From<(u32, u32)> for Cell {
    fn from((column, row): (u32, u32)) -> Self {
        Self { column, row }
    }
}

/// Face arrangements supported by the slicer.
///
/// Both layouts put Left, Front, Right and Back side by side in the middle row. They only
/// differ in which column holds the Top and Bottom faces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Top above and Bottom below the Front face.
    TopBottomFront,
    /// Top above and Bottom below the Right face.
    TopBottomRight,
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::TopBottomFront, Layout::TopBottomRight];

    pub fn id(self) -> &'static str {
        match self {
            Layout::TopBottomFront => "front",
            Layout::TopBottomRight => "right",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Layout::TopBottomFront => "Top face above the front face, bottom face below the front face",
            Layout::TopBottomRight => "Top face above the right face, bottom face below the right face",
        }
    }

    /// Grid cells in `Face::ALL` order.
    pub fn cells(self) -> [Cell; 6] {
        let pole_column = match self {
            Layout::TopBottomFront => 1,
            Layout::TopBottomRight => 2,
        };

        [
            Cell::new(0, 1),
            Cell::new(1, 1),
            Cell::new(2, 1),
            Cell::new(3, 1),
            Cell::new(pole_column, 0),
            Cell::new(pole_column, 2),
        ]
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .into_iter()
            .find(|layout| layout.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownLayout(s.to_string()))
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

pub fn resolve(layout_id: &str) -> Result<[Cell; 6], Error> {
    Ok(layout_id.parse::<Layout>()?.cells())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(pairs: [(u32, u32); 6]) -> [Cell; 6] {
        pairs.map(Cell::from)
    }

    #[test]
    fn front_layout_places_poles_in_column_one() {
        assert_eq!(
            resolve("front").unwrap(),
            cells([(0, 1), (1, 1), (2, 1), (3, 1), (1, 0), (1, 2)])
        );
    }

    #[test]
    fn right_layout_places_poles_in_column_two() {
        assert_eq!(
            resolve("right").unwrap(),
            cells([(0, 1), (1, 1), (2, 1), (3, 1), (2, 0), (2, 2)])
        );
    }

    #[test]
    fn layouts_share_the_middle_row() {
        let front = resolve("front").unwrap();
        let right = resolve("right").unwrap();
        assert_eq!(front[..4], right[..4]);
        assert_ne!(front[4..], right[4..]);
    }

    #[test]
    fn identifiers_are_case_insensitive() {
        assert_eq!("RIGHT".parse::<Layout>(), Ok(Layout::TopBottomRight));
        assert_eq!(" front ".parse::<Layout>(), Ok(Layout::TopBottomFront));
    }

    #[test]
    fn unknown_layout_is_rejected() {
        assert_eq!(
            resolve("cross"),
            Err(Error::UnknownLayout(String::from("cross")))
        );
        assert!(matches!(resolve(""), Err(Error::UnknownLayout(_))));
    }

    #[test]
    fn ids_round_trip_through_parse() {
        for layout in Layout::ALL {
            assert_eq!(layout.id().parse::<Layout>(), Ok(layout));
        }
    }
}
