pub mod execution_panel;
pub mod flow_canvas;
