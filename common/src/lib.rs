//! Models shared between the dashboard backend and the Yew frontend.
//!
//! Everything here crosses the HTTP boundary as JSON, so every type derives
//! `Serialize`/`Deserialize` and carries no behaviour beyond small lookups.

pub mod model;
pub mod requests;
