//! Signed-in session shared by the CLI commands and the TUI.
//!
//! This is the only place the current session lives. Writes go through a
//! single actor task and are acknowledged once applied, so a read right after
//! [`AppState::update`] returns sees the new value.

use crate::error::DashboardError;

use client_core::session::Session;

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::{OnceCell, RwLock, mpsc, oneshot};

const COMMAND_BUFFER: usize = 32;

/// Commands that mutate application state.
#[derive(Debug, Clone)]
pub enum StateCommand {
    /// Signed in (login or restore)
    SetSession(Session),

    /// Signed out, or the token was rejected
    ClearSession,
}

struct Envelope {
    command: StateCommand,
    applied: oneshot::Sender<()>,
}

#[derive(Clone, Default)]
pub struct AppState {
    commands: Arc<OnceCell<mpsc::Sender<Envelope>>>,
    session: Arc<RwLock<Option<Session>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a state command and wait until the actor has applied it.
    ///
    /// The actor is spawned on first use, inside the caller's runtime.
    pub async fn update(&self, command: StateCommand) -> Result<(), DashboardError> {
        let commands = self
            .commands
            .get_or_init(|| async { spawn_actor(Arc::clone(&self.session)) })
            .await;

        let (applied, done) = oneshot::channel();
        commands
            .send(Envelope { command, applied })
            .await
            .map_err(|e| DashboardError::dashboard(format!("State actor died: {e}")))?;

        done.await
            .map_err(|_| DashboardError::dashboard("State actor dropped a command"))
    }

    pub async fn get_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.session.read().await.is_some()
    }
}

fn spawn_actor(session: Arc<RwLock<Option<Session>>>) -> mpsc::Sender<Envelope> {
    let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
    tokio::spawn(state_actor(rx, session));
    info!("State actor spawned");
    tx
}

async fn state_actor(
    mut commands: mpsc::Receiver<Envelope>,
    session: Arc<RwLock<Option<Session>>>,
) {
    while let Some(Envelope { command, applied }) = commands.recv().await {
        let mut slot = session.write().await;

        match command {
            StateCommand::SetSession(next) => {
                match slot.as_ref() {
                    Some(current) if current.user != next.user => warn!(
                        "Replacing session of {} with {}",
                        current.user.greeting_name(),
                        next.user.greeting_name()
                    ),
                    Some(_) => {}
                    None => info!("Session set for {}", next.user.greeting_name()),
                }
                *slot = Some(next);
            }
            StateCommand::ClearSession => {
                if slot.take().is_some() {
                    info!("Session cleared");
                }
            }
        }

        drop(slot);
        // The caller may have given up waiting; the command still stands
        let _ = applied.send(());
    }

    warn!("State actor stopped");
}
