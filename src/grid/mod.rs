//! Grid factorization and matrix layout.

pub mod factor;
pub mod matrix;

pub use factor::{get_grid_factors, suggest_better_counts, GridFactors};
pub use matrix::{build_matrix, LetterGrid, PAD_CHAR};
