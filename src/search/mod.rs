pub mod alpha_beta;
pub mod evaluation;
pub mod monte_carlo;
pub mod parallel;
pub mod weights;

pub use alpha_beta::*;
pub use evaluation::*;
pub use monte_carlo::*;
pub use parallel::*;
pub use weights::*;
