//! Base types shared by the plotive-rc crates.
// Plotive is released under the MIT License with the following copyright:
// Copyright (c) 2025-2026 Rémi Thebault

pub mod color;

pub use color::ColorU8;
