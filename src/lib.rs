// Reusable library API — visible to both CLI and WASM builds
pub mod alphabet;
pub mod direction;
pub mod errors;
pub mod fill;
pub mod generator;
pub mod grid;
pub mod locations;
pub mod log;
pub mod placement;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use generator::{generate, generate_with_rng, recommended_size, GenerateError, GeneratorConfig, Puzzle, Reveal};
