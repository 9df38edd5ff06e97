//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`bugs`, `notifications`) so individual
//! components can depend on small focused models. Structs hold plain data;
//! components mutate them through `RwSignal::update`.

pub mod bugs;
pub mod notifications;
