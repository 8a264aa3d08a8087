//! Panel host: maps generation lifecycle onto display messages.
//!
//! The panel receives a [`PanelCommand`] from its view, runs the generator
//! and answers with a sequence of [`PanelEvent`]s: `ShowLoading`, then
//! either `ShowResult` or `ShowError`. Both message types serialize to the
//! `{"command": ...}` JSON shape used by webview message passing.

use aiblock_codegen::CodeGenerator;
use aiblock_interface::{CredentialSource, TextGenerator};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Message from the view to the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum PanelCommand {
    /// Transform `html` according to `prompt`
    Generate {
        /// Markup to transform
        html: String,
        /// Styling instruction
        prompt: String,
    },
}

/// Message from the panel to the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum::AsRefStr)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum PanelEvent {
    /// Generation started
    ShowLoading,
    /// Generation succeeded
    ShowResult {
        /// Generated markup
        html: String,
        /// Generated stylesheet
        css: String,
    },
    /// Generation failed
    ShowError {
        /// User-facing message
        message: String,
    },
}

/// What the panel is currently displaying.
///
/// Only one of loading, result or error is visible at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PanelView {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Waiting for the model
    Loading,
    /// Last generation result
    Result {
        /// Generated markup
        html: String,
        /// Generated stylesheet
        css: String,
    },
    /// Last error message
    Error(String),
}

/// Explicit panel state: last-entered inputs and the current view.
///
/// Inputs serialize so a host can persist and restore them; the view is
/// transient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PanelState {
    /// Last markup entered
    html: String,
    /// Last instruction entered
    prompt: String,
    /// Current view
    #[serde(skip)]
    view: PanelView,
}

impl PanelState {
    /// Remember the latest inputs.
    pub fn record_input(&mut self, html: impl Into<String>, prompt: impl Into<String>) {
        self.html = html.into();
        self.prompt = prompt.into();
    }

    /// Update the view for an outgoing event.
    pub fn apply(&mut self, event: &PanelEvent) {
        self.view = match event {
            PanelEvent::ShowLoading => PanelView::Loading,
            PanelEvent::ShowResult { html, css } => PanelView::Result {
                html: html.clone(),
                css: css.clone(),
            },
            PanelEvent::ShowError { message } => PanelView::Error(message.clone()),
        };
    }
}

/// Panel host wrapping a [`CodeGenerator`].
pub struct Panel<T, C>
where
    T: TextGenerator,
    C: CredentialSource,
{
    generator: CodeGenerator<T, C>,
    state: PanelState,
}

impl<T, C> Panel<T, C>
where
    T: TextGenerator,
    C: CredentialSource,
{
    /// Create a panel with empty state.
    pub fn new(generator: CodeGenerator<T, C>) -> Self {
        Self::with_state(generator, PanelState::default())
    }

    /// Create a panel restoring previously saved state.
    pub fn with_state(generator: CodeGenerator<T, C>, state: PanelState) -> Self {
        Self { generator, state }
    }

    /// Current panel state.
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Underlying generator.
    pub fn generator(&self) -> &CodeGenerator<T, C> {
        &self.generator
    }

    /// Handle one command from the view.
    ///
    /// Blank submissions are ignored and produce no events. Otherwise emits
    /// `ShowLoading` followed by `ShowResult` or `ShowError`, and returns the
    /// final event. A closed event channel is logged and otherwise ignored.
    #[instrument(skip_all)]
    pub async fn handle(
        &mut self,
        command: PanelCommand,
        events: &mpsc::Sender<PanelEvent>,
    ) -> Option<PanelEvent> {
        let PanelCommand::Generate { html, prompt } = command;
        self.state.record_input(html.as_str(), prompt.as_str());

        if html.trim().is_empty() || prompt.trim().is_empty() {
            debug!("Ignoring submission with empty input");
            return None;
        }

        self.emit(PanelEvent::ShowLoading, events).await;

        let outcome = match self.generator.generate(&prompt, &html).await {
            Ok(code) => {
                let (html, css) = code.into_parts();
                info!("Generation succeeded");
                PanelEvent::ShowResult { html, css }
            }
            Err(e) => {
                if e.kind().is_user_actionable() {
                    info!(error = %e.kind(), "Generation needs user action");
                } else {
                    warn!(error = %e, "Generation failed");
                }
                PanelEvent::ShowError {
                    message: e.user_message(),
                }
            }
        };

        self.emit(outcome.clone(), events).await;
        Some(outcome)
    }

    async fn emit(&mut self, event: PanelEvent, events: &mpsc::Sender<PanelEvent>) {
        self.state.apply(&event);
        let name: &str = event.as_ref();
        debug!(event = name, "Emitting panel event");
        if events.send(event).await.is_err() {
            warn!("Panel event receiver closed");
        }
    }
}
