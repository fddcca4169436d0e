//! Raycasts against the concrete shape types.
//!
//! Both casts return the fraction of the ray's segment at which first contact
//! occurs: 0 is the ray's origin, 1 its endpoint. A miss is reported as
//! `f64::INFINITY` rather than an `Option` so that callers choosing among
//! several candidate hits can take a plain minimum.

pub mod ray_circle;
pub mod ray_rect;

pub use ray_circle::*;
pub use ray_rect::*;
