//! Screen navigation for embedded UIs — one live page, bounded back history.
//!
//! This crate is `no_std` by default; it only uses `core` + `heapless`.
//!
//! ```text
//! ViewManager ── create() ──▶ Page descriptor ──▶ page object
//!      │                                              │
//!      └── on_delete / load_screen ──▶ Toolkit ◀──────┘ (destroys old page,
//!                                                        fires DeleteHook)
//! ```
//!
//! # Features
//!
//! - `std`: `std::error::Error` for [`NavError`]
//! - `defmt`: `defmt::Format` derives and defmt log output
//! - `tracing`: log through `tracing` (implies `std`)
//! - `serde`: (de)serialize [`ManagerConfig`] and [`Transition`]

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::panic)]
#![warn(missing_docs)]

#[macro_use]
mod log;

pub mod config;
pub mod error;
pub mod history;
pub mod manager;
pub mod page;
pub mod toolkit;

pub use config::{LoadAnim, ManagerConfig, Transition, MAX_HISTORY_DEPTH};
pub use error::NavError;
pub use history::History;
pub use manager::ViewManager;
pub use page::{same_page, Page, PageInfo};
pub use toolkit::{DeleteHook, Toolkit};
