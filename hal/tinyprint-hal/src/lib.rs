//! tinyprint Hardware Abstraction Layer
//!
//! The formatter only ever needs one thing from the hardware: a way to
//! push bytes out. This crate defines that capability so the engine in
//! `tinyprint-core` can stream to any serial port without knowing which
//! chip or driver sits behind it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tinyprint-core (engine, StreamSink)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tinyprint-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ board UART    │       │ embedded-io   │
//! │ driver        │       │ writer (IoTx) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`] - Blocking serial transmit

#![no_std]
#![deny(unsafe_code)]

pub mod uart;

pub use uart::{IoTx, UartTx};
