pub mod time_slots;

pub use time_slots::{generate, generate_for_token, BoundaryPolicy, BOUNDARY_POLICY};
