pub mod events;
pub mod reducer;

pub use events::{GenerationOutcome, StudioEvent};
pub use reducer::reduce;
