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
/// What a [`Dispatcher`](crate::common::Dispatcher) run reports back to its caller.
///
/// `Closed` is the ordinary way an actor learns it should stop; it is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Flow {
    /// A binding accepted exactly one message and its handler ran.
    Handled,
    /// [`SystemSignal::Close`](crate::message::SystemSignal::Close) was dequeued; no
    /// handler ran.
    Closed,
}

impl Flow {
    /// Returns `true` for [`Flow::Closed`].
    #[inline]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns `true` for [`Flow::Handled`].
    #[inline]
    pub const fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}
