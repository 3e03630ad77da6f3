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
use std::fmt::Debug;

/// A marker trait for types that can travel through a [`Mailbox`](crate::common::Mailbox).
///
/// Messages must be `Send` so producers on any thread can enqueue them, `Debug` so the
/// framework can trace discarded traffic, and `'static` because a mailbox owns what it
/// holds until the draining thread takes it.
///
/// A blanket implementation is provided; a message set normally only needs
/// `#[teller_message]` (which derives `Debug` and `Clone`) to qualify.
pub trait ActorMessage: Debug + Send + 'static {}

impl<T> ActorMessage for T where T: Debug + Send + 'static {}
