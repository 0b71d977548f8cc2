//! Tunables for the canvas and the playback timer.

use std::time::Duration;

/// Viewport and overlay settings for the diagram canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasConfig {
	pub min_zoom: f64,
	pub max_zoom: f64,
	/// Multiplier applied per wheel notch or zoom button press.
	pub zoom_step: f64,
	/// Fraction of the viewport left empty around the nodes by fit view.
	pub fit_padding: f64,
	pub background_gap: f64,
	pub background_dot_size: f64,
	pub minimap_width: f64,
	pub minimap_height: f64,
}

impl Default for CanvasConfig {
	fn default() -> Self {
		Self {
			min_zoom: 0.5,
			max_zoom: 2.0,
			zoom_step: 1.1,
			fit_padding: 0.1,
			background_gap: 12.0,
			background_dot_size: 1.0,
			minimap_width: 200.0,
			minimap_height: 150.0,
		}
	}
}

impl CanvasConfig {
	pub fn clamp_zoom(&self, k: f64) -> f64 {
		k.clamp(self.min_zoom, self.max_zoom)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackConfig {
	/// Delay between consecutive log entries.
	pub interval: Duration,
}

impl Default for PlaybackConfig {
	fn default() -> Self {
		Self {
			interval: Duration::from_millis(800),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zoom_is_clamped_to_configured_range() {
		let config = CanvasConfig::default();
		assert_eq!(config.clamp_zoom(0.1), 0.5);
		assert_eq!(config.clamp_zoom(1.3), 1.3);
		assert_eq!(config.clamp_zoom(9.0), 2.0);
	}

	#[test]
	fn playback_interval_defaults_to_800ms() {
		assert_eq!(
			PlaybackConfig::default().interval,
			Duration::from_millis(800)
		);
	}
}
