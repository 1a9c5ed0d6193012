//! Client-side state models.
//!
//! DESIGN
//! ======
//! Every model here is owned by one component instance and wrapped in that
//! component's own `RwSignal`; nothing is shared through context except the
//! read-only site content.

pub mod carousel;
pub mod contact;
pub mod nav;
pub mod particles;
pub mod pointer;
pub mod reveal;
