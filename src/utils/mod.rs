pub mod error_log;
pub mod font_metrics;
pub mod pdf_canvas;
