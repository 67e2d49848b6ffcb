use serde::Serialize;

pub mod extract;
pub mod job;
pub mod layout;
pub mod region;

/// One of the six square sub-images of a skybox texture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Face {
    Left,
    Front,
    Right,
    Back,
    Top,
    Bottom,
}

impl Face {
    /// Fixed face order. Layout cells and crop regions are indexed in parallel with it.
    pub const ALL: [Face; 6] = [
        Face::Left,
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Top,
        Face::Bottom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Face::Left => "Left",
            Face::Front => "Front",
            Face::Right => "Right",
            Face::Back => "Back",
            Face::Top => "Top",
            Face::Bottom => "Bottom",
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
