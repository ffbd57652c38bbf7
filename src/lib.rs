#![warn(clippy::all)]
#![allow(clippy::too_many_arguments)]

// models
pub mod cubic;
