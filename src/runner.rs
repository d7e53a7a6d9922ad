// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::config::{Config, Mode};
use crate::energy::{calculate_energy, energy_image};
use crate::error::SeamError;
use crate::luminosity::{luminosity_image, luminosity_map};
use crate::seamcarver::{carve_or_keep, show_seam};
use image::{GenericImageView, Pixel, Primitive};
use log::info;
use std::fs;

/// The luminosity table followed by the energy table, one row per line.
pub fn tables_text<I, P, S>(image: &I) -> String
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    format!(
        "Luminosity:\n{}Energy:\n{}",
        luminosity_map(image),
        calculate_energy(image)
    )
}

/// Load the input, produce whatever the mode asks for, and save it.
/// A refused seam count is not an error here: the untouched image is
/// written, and the refusal has already been logged.
pub fn run(config: &Config) -> Result<(), SeamError> {
    let image = image::open(&config.input)?.to_rgba8();
    info!(
        "{}: {}x{}, mode {:?}",
        config.input.display(),
        image.width(),
        image.height(),
        config.mode
    );

    match config.mode {
        Mode::Carve => carve_or_keep(image, config.seams).save(&config.output)?,
        Mode::Energy => energy_image(&image).save(&config.output)?,
        Mode::Luminosity => luminosity_image(&image).save(&config.output)?,
        Mode::Seam => show_seam(&image).save(&config.output)?,
        Mode::Table => fs::write(&config.output, tables_text(&image))?,
    }

    info!("wrote {}", config.output.display());
    Ok(())
}
