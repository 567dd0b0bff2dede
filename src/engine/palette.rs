use crate::config::RgbColor;

/// Series colors used when a dataset carries no `borderColor`.
pub const DEFAULT_PALETTE: [RgbColor; 7] = [
    RgbColor::new(54, 162, 235),
    RgbColor::new(255, 99, 132),
    RgbColor::new(255, 159, 64),
    RgbColor::new(255, 205, 86),
    RgbColor::new(75, 192, 192),
    RgbColor::new(153, 102, 255),
    RgbColor::new(201, 203, 207),
];

#[must_use]
pub fn default_series_color(dataset_index: usize) -> RgbColor {
    DEFAULT_PALETTE[dataset_index % DEFAULT_PALETTE.len()]
}
