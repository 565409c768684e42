//! # Crossword Generator
//!
//! A crossword placement engine. Given a list of words (with clues) and a
//! board size, the [`Generator`](generator::Generator) builds a crossword in
//! which every word crosses at least one other, no two words touch where they
//! should not, and each word is numbered within its direction. The result is
//! a [`Crossword`](crossword::Crossword), which players then solve clue by
//! clue.
//!
//! Placement is a bounded, deterministic heuristic: the same inputs always
//! produce the same crossword, but not every word is guaranteed a place.

pub mod catalog;
pub mod crossword;
pub mod generator;
pub mod grid;
pub mod placement;
pub mod score;
pub mod suggest;
