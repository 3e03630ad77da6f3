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
use tracing::{info, trace};

use crate::common::{Flow, Sender};
use crate::traits::ActorMessage;

/// An independent owner of one mailbox that advances by building a fresh
/// [`Dispatcher`](crate::common::Dispatcher) per step.
///
/// Implementors decide what a step is: a state machine builds one dispatcher tailored
/// to its current state, a stateless service builds the same dispatcher every time.
/// The default [`run`](Actor::run) repeats [`step`](Actor::step) until it reports
/// [`Flow::Closed`].
pub trait Actor {
    /// The closed message set accepted by this actor's mailbox.
    type Message: ActorMessage;

    /// A short, human-readable name used for thread names and tracing fields.
    fn name(&self) -> &str;

    /// Returns a handle into this actor's own mailbox.
    fn sender(&self) -> Sender<Self::Message>;

    /// Performs one unit of work, blocking on the mailbox if the current step needs a
    /// message.
    fn step(&mut self) -> Flow;

    /// Drives the actor until its mailbox yields [`SystemSignal::Close`](crate::message::SystemSignal::Close).
    ///
    /// Blocks the calling thread; spawn it with [`ActorThread`](crate::common::ActorThread)
    /// or call it from a dedicated thread.
    fn run(&mut self) {
        info!(actor = self.name(), "actor started");
        let mut steps: u64 = 0;
        while !self.step().is_closed() {
            steps += 1;
            trace!(actor = self.name(), steps, "step complete");
        }
        info!(actor = self.name(), steps, "actor closed");
    }
}
