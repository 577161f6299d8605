// SPDX-License-Identifier: MPL-2.0
//! Custom widgets built on the advanced API.

pub mod photo_shield;

pub use photo_shield::{photo_shield, PhotoShield};
