use crate::config::constants::{BOLT_POSITIONS, STAR_POSITIONS};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PriorityMark {
    Star,
    Bolt,
    None,
}

impl PriorityMark {
    pub const fn from_position(position: usize) -> Self {
        if position < STAR_POSITIONS {
            Self::Star
        } else if position < BOLT_POSITIONS {
            Self::Bolt
        } else {
            Self::None
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Star => "⭐",
            Self::Bolt => "⚡",
            Self::None => "",
        }
    }
}
