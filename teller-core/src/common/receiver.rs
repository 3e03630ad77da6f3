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
use std::sync::Arc;

use crate::common::{Dispatcher, Mailbox, Sender};
use crate::message::Envelope;
use crate::traits::ActorMessage;

/// Owns an actor's mailbox.
///
/// Others reach the mailbox through [`Sender`]s obtained from [`Receiver::sender`]; the
/// owning actor drains it by starting a fresh [`Dispatcher`] with [`Receiver::wait`]
/// each time it wants the next message.
#[derive(Debug)]
pub struct Receiver<M> {
    mailbox: Arc<Mailbox<M>>,
}

impl<M> Default for Receiver<M> {
    fn default() -> Self {
        Self {
            mailbox: Arc::new(Mailbox::default()),
        }
    }
}

impl<M: ActorMessage> Receiver<M> {
    /// Creates a receiver with an empty mailbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle through which any thread can enqueue into this mailbox.
    pub fn sender(&self) -> Sender<M> {
        Sender::attached(Arc::clone(&self.mailbox))
    }

    /// Starts an empty dispatcher over this mailbox.
    ///
    /// `C` is the context every handler receives mutably when the dispatcher runs,
    /// usually the actor itself. The dispatcher shares the mailbox rather than borrowing
    /// the receiver, so the actor can hand itself to [`Dispatcher::run`].
    pub fn wait<'a, C>(&self) -> Dispatcher<'a, M, C> {
        Dispatcher::new(Arc::clone(&self.mailbox))
    }

    /// Blocks for the next envelope and returns it without any dispatching.
    pub fn recv(&self) -> Envelope<M> {
        self.mailbox.wait_and_pop()
    }

    /// Number of envelopes currently waiting in the mailbox.
    pub fn pending(&self) -> usize {
        self.mailbox.len()
    }
}

impl<M: ActorMessage> From<&Receiver<M>> for Sender<M> {
    fn from(receiver: &Receiver<M>) -> Self {
        receiver.sender()
    }
}
