/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # Teller
//!
//! An ATM built from three actors on the [`teller_core`] framework:
//!
//! - **[`AtmController`]**: the protocol state machine. Each state binds only the
//!   messages it accepts and moves to the next state on a match.
//! - **[`BankMachine`]**: verifies PINs, approves withdrawals and reports balances,
//!   answering through the reply-to sender carried by each request.
//! - **[`InterfaceMachine`]**: the display, cash dispenser and card slot.
//!
//! The `atm` binary wires them together on three threads and drives the controller
//! from the keyboard.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use teller::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let bank = ActorThread::spawn(BankMachine::default())?;
//!     let interface = ActorThread::spawn(InterfaceMachine::stdout())?;
//!     let atm = ActorThread::spawn(AtmController::new(bank.sender(), interface.sender()))?;
//!
//!     atm.sender().send(CardInserted::new("acc1234".to_string()));
//!
//!     bank.close();
//!     atm.close();
//!     interface.close();
//!     atm.join()?;
//!     bank.join()?;
//!     interface.join()?;
//!     Ok(())
//! }
//! ```

/// The ATM protocol state machine.
pub(crate) mod atm;
/// The bank actor.
pub(crate) mod bank;
/// TOML configuration.
pub mod config;
/// The hardware-interface actor.
pub(crate) mod interface;
/// Keyboard-to-message mapping used by the `atm` binary.
pub mod keypad;
/// The controller, bank and interface message sets.
pub mod messages;

pub use atm::{AtmController, AtmState, DEFAULT_PIN_LENGTH};
pub use bank::BankMachine;
pub use config::{ConfigError, TellerConfig};
pub use interface::InterfaceMachine;

/// A prelude module for conveniently importing the most commonly used items.
///
/// Re-exports the whole [`teller_core::prelude`], the three actors, the configuration
/// root and every message type.
pub mod prelude {
    pub use teller_core::prelude::*;

    pub use crate::atm::{AtmController, AtmState};
    pub use crate::bank::BankMachine;
    pub use crate::config::TellerConfig;
    pub use crate::interface::InterfaceMachine;
    pub use crate::messages::*;
}
