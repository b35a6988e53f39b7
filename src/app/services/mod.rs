//! Services layer - small helpers shared across the application.

pub mod text_ops;
