//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections receive plain display data from `content` and keep their visual
//! state (pointer, scroll, carousel position, form fields) local.
//! `gated_reveal` and `scroll_reveal` are the two wrappers other sections
//! compose.

pub mod about;
pub mod contact_form;
pub mod course_carousel;
pub mod footer;
pub mod gated_reveal;
pub mod hero;
pub mod nav_bar;
pub mod platform_features;
pub mod scroll_reveal;
pub mod testimonials;
pub mod virtual_lab;
