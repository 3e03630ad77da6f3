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
#![forbid(missing_docs)]

//! # Teller Core
//!
//! Blocking active-object messaging primitives. Every actor owns one
//! [`Receiver`](crate::common::Receiver) whose mailbox is drained by exactly one
//! thread, while any number of threads enqueue into it through cheap, clonable
//! [`Sender`](crate::common::Sender) handles.
//!
//! ## Key Concepts
//!
//! - **Mailbox**: an unbounded FIFO of [`Envelope`](crate::message::Envelope)s with a
//!   blocking `wait_and_pop`.
//! - **Sender**: a copyable handle used to enqueue from any thread. A detached sender
//!   silently drops what it is given.
//! - **Dispatcher**: a single-use builder of `(payload type, handler)` bindings. Its
//!   explicit `run` blocks until one binding accepts a message or the mailbox yields
//!   [`SystemSignal::Close`](crate::message::SystemSignal::Close).
//! - **Actor**: a state owner that repeatedly builds dispatchers over its own mailbox,
//!   usually run on its own OS thread through [`ActorThread`](crate::common::ActorThread).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use teller_core::prelude::*;
//!
//! #[derive(Debug, Clone)]
//! struct Ping(u32);
//!
//! #[teller_message]
//! enum CounterMessage {
//!     Ping(Ping),
//! }
//!
//! let receiver = Receiver::<CounterMessage>::new();
//! receiver.sender().send(Ping(1));
//! let mut total = 0;
//! receiver
//!     .wait::<u32>()
//!     .handle(|total, ping: Ping| *total += ping.0)
//!     .run(&mut total);
//! ```

// Lets generated code refer to `::teller_core` from inside this crate.
extern crate self as teller_core;

/// Mailboxes, senders, receivers, the dispatcher and actor threads.
pub(crate) mod common;

/// Envelopes and system signals carried by mailboxes.
pub(crate) mod message;

/// Core traits implemented by messages, payloads and actors.
pub(crate) mod traits;

pub use common::{ActorThread, Dispatcher, Flow, Mailbox, Receiver, Sender, TellerError};
pub use message::{Envelope, SystemSignal};
pub use traits::{Actor, ActorMessage, Payload};

/// A prelude module for conveniently importing the most commonly used items.
///
/// ## Macros (from `teller-macro`)
/// *   [`teller_macro::teller_message`]: Attribute macro turning a closed enum into a
///     dispatchable message set.
///
/// ## Core Types
/// *   [`crate::common::Mailbox`], [`crate::common::Sender`], [`crate::common::Receiver`]
/// *   [`crate::common::Dispatcher`] and its [`crate::common::Flow`] outcome
/// *   [`crate::common::ActorThread`] and [`crate::common::TellerError`]
/// *   [`crate::message::Envelope`] and [`crate::message::SystemSignal`]
/// *   [`crate::traits::ActorMessage`], [`crate::traits::Payload`], [`crate::traits::Actor`]
pub mod prelude {
    pub use teller_macro::*;

    pub use crate::common::{ActorThread, Dispatcher, Flow, Mailbox, Receiver, Sender, TellerError};
    pub use crate::message::{Envelope, SystemSignal};
    pub use crate::traits::{Actor, ActorMessage, Payload};
}
