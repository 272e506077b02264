use rgb_int::Rgb24;

/// One of the three curves that get plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Function,
    Derivative,
    Integral,
}

impl Series {
    pub const ALL: [Self; 3] =
        [Self::Function, Self::Derivative, Self::Integral];

    pub fn index(self) -> usize {
        match self {
            Self::Function => 0,
            Self::Derivative => 1,
            Self::Integral => 2,
        }
    }

    pub fn colour(self) -> Rgb24 {
        match self {
            Self::Function => Rgb24::new(255, 0, 0),
            Self::Derivative => Rgb24::new(0, 255, 0),
            Self::Integral => Rgb24::new(0, 0, 255),
        }
    }
}
