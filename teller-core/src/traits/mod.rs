//! Core traits of the Teller framework.
//!
//! *   [`ActorMessage`]: Marker trait for every message set a mailbox can carry.
//! *   [`Payload`]: Moves one variant's payload out of a message set, or hands the
//!     message back untouched so the next binding can try it.
//! *   [`Actor`]: An owner of a receiver that advances one dispatch at a time.

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
pub use actor::Actor;
pub use actor_message::ActorMessage;
pub use payload::Payload;

// --- Submodules ---

/// Defines the [`Actor`] trait.
mod actor;
/// Defines the [`ActorMessage`] marker trait.
mod actor_message;
/// Defines the [`Payload`] extraction trait.
mod payload;
