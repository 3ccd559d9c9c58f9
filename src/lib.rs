//! Placement transforms for path-following geometry.
//!
//! The [`geom`] module turns paths into ordered lists of 4x4 placement
//! transforms (position, orientation, scale and twist per frame), resamples
//! and smooths paths, and rounds corners. The [`shape`] module is the boundary
//! to a solid-modelling engine: frame lists are handed to it to instance a
//! template at every frame or to hull consecutive placements into one solid.
//!
//! All functions are pure and synchronous. Enable the `parallel` feature to
//! build frames and hull segments on the rayon thread pool.
//!
//! Angles are in degrees. Degenerate directions are detected with
//! [`geom::Tolerance::OVERLAP`] (0.01). Curve helpers default to
//! [`geom::DEFAULT_SUBDIVISIONS`] (10) steps.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod geom;
pub mod shape;
