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
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use static_assertions::assert_impl_all;
use tracing::trace;

use crate::common::Mailbox;
use crate::message::{Envelope, SystemSignal};
use crate::traits::ActorMessage;

/// A clonable handle for enqueueing into one actor's mailbox from any thread.
///
/// Cloning bumps a reference count, so senders are cheap to store inside messages as
/// reply-to addresses. A sender keeps its mailbox alive for as long as the sender
/// itself lives.
///
/// A *detached* sender (see [`Sender::detached`], also the `Default`) is not wired to
/// any mailbox and silently discards everything sent through it. It stands in for a
/// collaborator that has not been connected yet.
///
/// Equality is identity: two senders are equal when they point at the same mailbox, or
/// when both are detached.
pub struct Sender<M> {
    mailbox: Option<Arc<Mailbox<M>>>,
}

impl<M> Sender<M> {
    pub(crate) fn attached(mailbox: Arc<Mailbox<M>>) -> Self {
        Self {
            mailbox: Some(mailbox),
        }
    }

    /// Creates a sender that is not connected to any mailbox.
    pub const fn detached() -> Self {
        Self { mailbox: None }
    }

    /// Returns `true` if sends through this handle are discarded.
    pub const fn is_detached(&self) -> bool {
        self.mailbox.is_none()
    }
}

impl<M: ActorMessage> Sender<M> {
    /// Enqueues `message` into the target mailbox, or drops it if this sender is detached.
    ///
    /// Accepts the message set itself or any payload type convertible into it.
    pub fn send(&self, message: impl Into<M>) {
        self.push(Envelope::Message(message.into()));
    }

    /// Enqueues [`SystemSignal::Close`], asking the owning actor to leave its run loop.
    ///
    /// Termination is not immediate: the actor observes `Close` only after draining
    /// everything queued before it, and only once its current dispatch returns.
    pub fn close(&self) {
        self.push(Envelope::Signal(SystemSignal::Close));
    }

    fn push(&self, envelope: Envelope<M>) {
        match &self.mailbox {
            Some(mailbox) => mailbox.push(envelope),
            None => trace!(?envelope, "detached sender discarded envelope"),
        }
    }
}

impl<M> Default for Sender<M> {
    fn default() -> Self {
        Self::detached()
    }
}

impl<M> Clone for Sender<M> {
    fn clone(&self) -> Self {
        Self {
            mailbox: self.mailbox.clone(),
        }
    }
}

impl<M> Debug for Sender<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.mailbox {
            Some(mailbox) => f
                .debug_tuple("Sender")
                .field(&Arc::as_ptr(mailbox))
                .finish(),
            None => f.write_str("Sender(detached)"),
        }
    }
}

impl<M> PartialEq for Sender<M> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.mailbox, &other.mailbox) {
            (Some(lhs), Some(rhs)) => Arc::ptr_eq(lhs, rhs),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<M> Eq for Sender<M> {}

assert_impl_all!(Sender<u32>: Send, Sync, Clone);
