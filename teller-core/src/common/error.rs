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
/// Errors raised while managing actor threads.
#[derive(Debug, thiserror::Error)]
pub enum TellerError {
    /// The operating system refused to start the actor's thread.
    #[error("failed to spawn thread for actor `{actor}`: {source}")]
    Spawn {
        /// Name of the actor that could not be started.
        actor: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The actor's thread ended by panicking, typically inside a handler.
    #[error("actor `{actor}` panicked: {reason}")]
    ActorPanicked {
        /// Name of the actor whose thread panicked.
        actor: String,
        /// The panic message, when it was a string.
        reason: String,
    },
}
