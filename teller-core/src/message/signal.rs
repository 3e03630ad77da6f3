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

/// Represents framework-level signals delivered through an actor's mailbox.
///
/// These signals are distinct from the application's closed message set and are
/// handled by the root of every [`Dispatcher`](crate::common::Dispatcher), never by
/// user bindings.
///
/// This enum is marked `#[non_exhaustive]` so further signals can be added without a
/// breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SystemSignal {
    /// Instructs an actor to leave its run loop.
    ///
    /// A dispatcher that pops `Close` returns [`Flow::Closed`](crate::common::Flow::Closed)
    /// immediately without invoking any handler. The actor's `run` loop then returns.
    /// Send it exactly once per actor; a second `Close` would stay queued unobserved.
    Close,
}
