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
use static_assertions::assert_impl_all;

use crate::message::SystemSignal;

/// The unit of storage inside a [`Mailbox`](crate::common::Mailbox).
///
/// Application traffic and framework signals share one FIFO so that a
/// [`SystemSignal::Close`] queued behind ordinary messages is only observed after
/// every message sent before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope<M> {
    /// An application message of the mailbox's message set.
    Message(M),
    /// A framework control signal.
    Signal(SystemSignal),
}

impl<M> Envelope<M> {
    /// Returns `true` if this envelope carries [`SystemSignal::Close`].
    #[inline]
    pub fn is_close(&self) -> bool {
        matches!(self, Self::Signal(SystemSignal::Close))
    }

    /// Returns the application message, or `None` for a signal.
    pub fn into_message(self) -> Option<M> {
        match self {
            Self::Message(message) => Some(message),
            Self::Signal(_) => None,
        }
    }
}

impl<M> From<SystemSignal> for Envelope<M> {
    fn from(signal: SystemSignal) -> Self {
        Self::Signal(signal)
    }
}

assert_impl_all!(Envelope<u32>: Send, Sync);
