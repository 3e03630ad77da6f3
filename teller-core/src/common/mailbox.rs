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
use std::collections::VecDeque;
use std::fmt::Debug;

use parking_lot::{Condvar, Mutex};
use static_assertions::assert_impl_all;
use tracing::trace;

use crate::message::Envelope;
use crate::traits::ActorMessage;

/// A thread-safe, unbounded FIFO of [`Envelope`]s with a blocking dequeue.
///
/// Any number of threads may [`push`](Mailbox::push) concurrently; exactly one thread,
/// the owning actor's, is expected to call [`wait_and_pop`](Mailbox::wait_and_pop).
/// The internal lock is held only for the enqueue or dequeue itself, never while a
/// handler runs.
///
/// There is no capacity bound and no timed wait. A producer that outpaces its consumer
/// grows the queue without limit, and a consumer whose producers have all gone quiet
/// blocks forever; the only way to wake it is to enqueue something.
#[derive(Debug)]
pub struct Mailbox<M> {
    queue: Mutex<VecDeque<Envelope<M>>>,
    available: Condvar,
}

impl<M> Default for Mailbox<M> {
    fn default() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            available: Condvar::new(),
        }
    }
}

impl<M: ActorMessage> Mailbox<M> {
    /// Creates an empty mailbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `envelope` to the tail and wakes every blocked waiter.
    pub fn push(&self, envelope: Envelope<M>) {
        let mut queue = self.queue.lock();
        queue.push_back(envelope);
        trace!(pending = queue.len(), "envelope enqueued");
        self.available.notify_all();
    }

    /// Blocks until the mailbox is non-empty, then removes and returns its head.
    pub fn wait_and_pop(&self) -> Envelope<M> {
        let mut queue = self.queue.lock();
        loop {
            if let Some(envelope) = queue.pop_front() {
                trace!(pending = queue.len(), "envelope dequeued");
                return envelope;
            }
            self.available.wait(&mut queue);
        }
    }

    /// Number of envelopes waiting to be dequeued at the moment of the call.
    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    /// Returns `true` if nothing is waiting to be dequeued at the moment of the call.
    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}

assert_impl_all!(Mailbox<u32>: Send, Sync);
