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
use std::any::Any;
use std::thread::{self, JoinHandle};

use tracing::{debug, instrument};

use crate::common::{Sender, TellerError};
use crate::traits::{Actor, ActorMessage};

/// An [`Actor`] running on its own named OS thread.
///
/// Keeps the actor's [`Sender`] so the spawning code can keep talking to it, and the join
/// handle so shutdown can wait for the run loop to finish.
#[derive(Debug)]
pub struct ActorThread<M> {
    name: String,
    sender: Sender<M>,
    handle: JoinHandle<()>,
}

impl<M: ActorMessage> ActorThread<M> {
    /// Moves `actor` onto a new thread named after it and starts its run loop.
    ///
    /// # Errors
    ///
    /// Returns [`TellerError::Spawn`] if the thread cannot be created.
    #[instrument(skip(actor), fields(actor = actor.name()))]
    pub fn spawn<A>(mut actor: A) -> Result<Self, TellerError>
    where
        A: Actor<Message = M> + Send + 'static,
    {
        let name = actor.name().to_string();
        let sender = actor.sender();
        let handle = thread::Builder::new()
            .name(name.clone())
            .spawn(move || actor.run())
            .map_err(|source| TellerError::Spawn {
                actor: name.clone(),
                source,
            })?;
        debug!("actor thread spawned");
        Ok(Self {
            name,
            sender,
            handle,
        })
    }

    /// The actor's name, also used as its thread name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a handle into the actor's mailbox.
    pub fn sender(&self) -> Sender<M> {
        self.sender.clone()
    }

    /// Sends [`SystemSignal::Close`](crate::message::SystemSignal::Close) to the actor.
    pub fn close(&self) {
        self.sender.close();
    }

    /// Waits for the actor's run loop to return.
    ///
    /// Blocks forever if the actor was never sent `Close`.
    ///
    /// # Errors
    ///
    /// Returns [`TellerError::ActorPanicked`] if the thread ended in a panic.
    pub fn join(self) -> Result<(), TellerError> {
        let Self { name, handle, .. } = self;
        handle.join().map_err(|payload| TellerError::ActorPanicked {
            reason: panic_reason(payload.as_ref()),
            actor: name.clone(),
        })?;
        debug!(actor = %name, "actor thread joined");
        Ok(())
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|reason| (*reason).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}
