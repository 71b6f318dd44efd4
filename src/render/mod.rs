//! Rendering systems for the orrery.
//!
//! Builds the static scene once at startup (starfield, Sun, planets, orbit
//! rings) and animates it every frame.

mod background;
pub mod highlight;
pub mod orbits;
pub mod planets;
pub mod sun;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::highlight::HighlightPlugin;
use self::orbits::OrbitPathPlugin;
use self::planets::PlanetPlugin;
use self::sun::SunPlugin;

// Re-export for use in other modules
pub use self::background::{STAR_COUNT, Starfield, star_positions};
pub use self::highlight::{HoveredNeo, SelectedNeo};
pub use self::planets::{PLANETS, Planet, advance_planets};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            BackgroundPlugin,
            SunPlugin,
            PlanetPlugin,
            OrbitPathPlugin,
            HighlightPlugin,
        ));
    }
}
