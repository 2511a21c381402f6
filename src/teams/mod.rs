pub mod distribute;
pub mod palette;

pub use distribute::{distribute, distribute_with_rng, shuffle_with_rng};
pub use palette::{team_color_for, TEAM_COLORS};
