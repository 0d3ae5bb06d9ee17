//! Rasterizes the roster into a shareable PNG.
//!
//! Each tier is a banded section: a header bar carrying the tier color and
//! a point-weight gauge, then one column per match with a cell row per
//! assigned player, colored by readiness.

use std::io::Cursor;

use anyhow::{Context, Result};
use image::{ImageFormat, Rgb, RgbImage};

use crate::config::settings::ExportSettings;
use crate::domain::{ShadowWar, WarType};

const BACKGROUND: Rgb<u8> = Rgb([17, 17, 17]);
const EMPTY_SLOT: Rgb<u8> = Rgb([34, 34, 34]);
const READY: Rgb<u8> = Rgb([76, 175, 80]);
const PENDING: Rgb<u8> = Rgb([120, 120, 120]);
const GAUGE: Rgb<u8> = Rgb([240, 240, 240]);

const TIER_COLORS: [Rgb<u8>; 4] = [
    Rgb([168, 85, 247]),
    Rgb([59, 130, 246]),
    Rgb([234, 179, 8]),
    Rgb([107, 114, 128]),
];

/// Names of assigned players that have not confirmed readiness.
///
/// The caller decides whether to prompt before rendering; the rasterizer
/// itself is unconditional.
pub fn pending_players(war: &ShadowWar) -> Vec<String> {
    war.players()
        .filter(|p| !p.is_ready)
        .map(|p| p.name.clone())
        .collect()
}

/// Rasterization surface for the roster tree
pub trait RosterRasterizer {
    fn rasterize(&self, war: &ShadowWar) -> Result<Vec<u8>>;
}

pub struct PngRasterizer {
    settings: ExportSettings,
}

impl PngRasterizer {
    pub fn new(settings: ExportSettings) -> Self {
        Self { settings }
    }

    fn draw(&self, war: &ShadowWar) -> RgbImage {
        let s = &self.settings;
        let columns = war
            .war_types
            .iter()
            .map(|t| t.matches.len())
            .max()
            .unwrap_or(0)
            .max(1) as u32;
        let width = s.margin + columns * (s.cell_width + s.margin);
        let height = s.margin
            + war
                .war_types
                .iter()
                .map(|t| self.tier_height(t) + s.margin)
                .sum::<u32>();

        let mut image = RgbImage::from_pixel(width.max(1), height.max(1), BACKGROUND);
        let max_points = war.war_types.iter().map(|t| t.points).max().unwrap_or(1).max(1);

        let mut y = s.margin;
        for (index, tier) in war.war_types.iter().enumerate() {
            self.draw_tier(&mut image, tier, index, y, width, max_points);
            y += self.tier_height(tier) + s.margin;
        }

        image
    }

    fn draw_tier(
        &self,
        image: &mut RgbImage,
        tier: &WarType,
        index: usize,
        y: u32,
        width: u32,
        max_points: i32,
    ) {
        let s = &self.settings;
        let band_width = width.saturating_sub(2 * s.margin);
        let color = TIER_COLORS[index % TIER_COLORS.len()];

        fill_rect(image, s.margin, y, band_width, s.header_height, color);

        // point-weight gauge along the bottom edge of the header band
        let gauge_width = band_width * tier.points.max(0) as u32 / max_points as u32;
        fill_rect(image, s.margin, y + s.header_height - 4, gauge_width, 4, GAUGE);

        let rows = self.tier_rows(tier);
        let rows_top = y + s.header_height + s.margin;

        for (column, war_match) in tier.matches.iter().enumerate() {
            let x = s.margin + column as u32 * (s.cell_width + s.margin);
            for row in 0..rows {
                let cell_color = match war_match.players.get(row as usize) {
                    Some(player) if player.is_ready => READY,
                    Some(_) => PENDING,
                    None => EMPTY_SLOT,
                };
                fill_rect(
                    image,
                    x,
                    rows_top + row * s.row_height,
                    s.cell_width,
                    s.row_height - 2,
                    cell_color,
                );
            }
        }
    }

    fn tier_height(&self, tier: &WarType) -> u32 {
        let s = &self.settings;
        s.header_height + s.margin + self.tier_rows(tier) * s.row_height
    }

    fn tier_rows(&self, tier: &WarType) -> u32 {
        let occupied = tier
            .matches
            .iter()
            .map(|m| m.players.len())
            .max()
            .unwrap_or(0) as u32;
        occupied.max(self.settings.min_rows_per_match)
    }
}

impl RosterRasterizer for PngRasterizer {
    fn rasterize(&self, war: &ShadowWar) -> Result<Vec<u8>> {
        let image = self.draw(war);
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .context("Failed to encode roster image")?;
        Ok(bytes)
    }
}

fn fill_rect(image: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    let x_end = (x + width).min(image.width());
    let y_end = (y + height).min(image.height());
    for py in y..y_end {
        for px in x..x_end {
            image.put_pixel(px, py, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::WarSettings;
    use crate::domain::{reassignment, MatchRef, Player};

    fn war_with_players() -> ShadowWar {
        let mut war = ShadowWar::empty(&WarSettings::default());
        reassignment::add_player(&mut war, MatchRef::new(0, 0), Player::new("Kasreyn", "Wizard"))
            .unwrap();
        reassignment::add_player(&mut war, MatchRef::new(0, 0), Player::new("Invasion", "Crusader"))
            .unwrap();
        reassignment::toggle_ready(&mut war, MatchRef::new(0, 0), 0);
        war
    }

    #[test]
    fn pending_players_lists_unready_names() {
        let war = war_with_players();
        assert_eq!(pending_players(&war), vec!["Invasion".to_string()]);
    }

    #[test]
    fn rasterize_produces_a_decodable_png() {
        use image::GenericImageView;

        let settings = ExportSettings::default();
        let rasterizer = PngRasterizer::new(settings.clone());
        let war = war_with_players();

        let bytes = rasterizer.rasterize(&war).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();

        let expected_width = settings.margin + 3 * (settings.cell_width + settings.margin);
        assert_eq!(decoded.width(), expected_width);
        assert!(decoded.height() > 0);
    }

    #[test]
    fn empty_war_still_renders_placeholder_rows() {
        let settings = ExportSettings::default();
        let rasterizer = PngRasterizer::new(settings);
        let war = ShadowWar::empty(&WarSettings::default());

        let bytes = rasterizer.rasterize(&war).unwrap();
        assert!(image::load_from_memory(&bytes).is_ok());
    }
}
