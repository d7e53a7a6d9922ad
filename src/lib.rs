//! Seam carving on luminosity gradients.
//!
//! Narrow an image one column at a time by removing the top-to-bottom
//! path of pixels whose brightness changes least.

mod ternary;

pub mod config;
pub mod energy;
pub mod error;
pub mod luminosity;
pub mod runner;
pub mod seam;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use config::{Config, Mode};
pub use energy::{calculate_energy, energy_at};
pub use error::SeamError;
pub use luminosity::luminosity;
pub use seam::Seam;
pub use seamcarver::{carve_once, carve_or_keep, remove_vertical_seam, SeamCarver};
pub use seamfinder::{energy_to_vertical_seam, LuminositySeams, SeamFinder};
