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
use crate::traits::ActorMessage;

/// A payload type that appears as exactly one variant of the message set `M`.
///
/// This is the type discriminator of a [`Dispatcher`](crate::common::Dispatcher)
/// binding. Matching is a move: on success the payload leaves the message, on failure
/// the message is handed back unchanged so an older binding can be tried without
/// cloning.
///
/// `#[teller_message]` implements this trait (and `From<P> for M`) for every
/// single-field tuple variant of the annotated enum. Hand-written implementations
/// follow the same shape:
///
/// ```rust,ignore
/// impl Payload<Command> for Stop {
///     fn extract(message: Command) -> Result<Self, Command> {
///         match message {
///             Command::Stop(stop) => Ok(stop),
///             other => Err(other),
///         }
///     }
/// }
/// ```
pub trait Payload<M: ActorMessage>: Sized + Into<M> {
    /// Moves this payload out of `message` if it carries this variant.
    ///
    /// # Errors
    ///
    /// Returns the untouched `message` when it is a different variant.
    fn extract(message: M) -> Result<Self, M>;
}
