//! Blocking messaging primitives.
//!
//! *   [`Mailbox`]: The unbounded FIFO with a blocking dequeue owned by one receiver.
//! *   [`Sender`]: A clonable handle for enqueueing from any thread.
//! *   [`Receiver`]: Owns a mailbox and starts dispatchers over it.
//! *   [`Dispatcher`]: The chainable `(payload type, handler)` builder with an explicit `run`.
//! *   [`Flow`]: What a dispatcher's `run` reports back.
//! *   [`ActorThread`]: Runs an [`Actor`](crate::traits::Actor) on its own OS thread.
//! *   [`TellerError`]: Errors raised while spawning or joining actor threads.

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

// --- Public Re-exports ---
pub use actor_thread::ActorThread;
pub use dispatcher::Dispatcher;
pub use error::TellerError;
pub use flow::Flow;
pub use mailbox::Mailbox;
pub use receiver::Receiver;
pub use sender::Sender;

// --- Submodules ---

/// Defines [`ActorThread`].
mod actor_thread;
/// Defines [`Dispatcher`].
mod dispatcher;
/// Defines [`TellerError`].
mod error;
/// Defines [`Flow`].
mod flow;
/// Defines [`Mailbox`].
mod mailbox;
/// Defines [`Receiver`].
mod receiver;
/// Defines [`Sender`].
mod sender;
