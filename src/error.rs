use thiserror::Error;

/// Failures while wiring the diagram canvas to the DOM.
#[derive(Debug, Error)]
pub enum CanvasError {
	#[error("no browser window available")]
	NoWindow,

	#[error("2d rendering context unavailable")]
	NoContext,

	#[error("javascript error: {0}")]
	Js(String),
}

impl From<wasm_bindgen::JsValue> for CanvasError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// Reasons a new edge is refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConnectError {
	#[error("node not found: {0}")]
	UnknownNode(String),

	#[error("node {0} cannot connect to itself")]
	SelfLoop(String),

	#[error("node {0} has no outgoing handle")]
	NoSourceHandle(String),

	#[error("node {0} has no incoming handle")]
	NoTargetHandle(String),

	#[error("edge already exists: from={from}, to={to}")]
	Duplicate { from: String, to: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
	#[error("playback is already running")]
	AlreadyRunning,
}
