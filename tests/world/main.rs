//! Integration tests for Layer 2: World
//!
//! Tests for the room/mob registry, navigation, and world definitions.

mod definitions;
mod navigation;
mod registry;
