//! Pure simulation logic for the BizQuest startup game.
//!
//! This crate contains all game logic that is independent of any storage,
//! UI, or runtime. Functions take plain data and return results, making
//! them unit-testable and portable across the terminal client, the headless
//! harness, and any future frontend.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`business`] | Playable business archetype catalog (5 fixed businesses) |
//! | [`decisions`] | Pricing/marketing/quality/staffing decision enums and lookup tables |
//! | [`simulation`] | The monthly round simulator (demand, revenue, expenses, satisfaction) |
//! | [`outcome`] | End-of-game title classifier and star rating |
//! | [`session`] | Five-month session state: budget, history, phase transitions |

pub mod business;
pub mod decisions;
pub mod outcome;
pub mod session;
pub mod simulation;
