use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use sl_core::ports::{
    HostError, Notification, NotifierPort, PluginLifecyclePort, SelectionPort, StyleBinding,
    StyleResolverPort,
};
use sl_core::{Command, InvalidCommand, LibraryId, StyleField, StyleRef, SuggestionData};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::messages;
use crate::usecases::library::{PublishError, PublishLibrary, RemoveLibrary, ToggleLibrary};

/// A run event from the host: the chosen command and the data of the
/// suggestion picked for each parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunRequest {
    pub command: String,
    #[serde(default)]
    pub parameters: HashMap<String, SuggestionData>,
}

impl RunRequest {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            parameters: HashMap::new(),
        }
    }

    pub fn with_parameter(mut self, key: impl Into<String>, data: SuggestionData) -> Self {
        self.parameters.insert(key.into(), data);
        self
    }
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    InvalidCommand(#[from] InvalidCommand),

    #[error("no parameter supplied for command {0}")]
    MissingParameter(Command),

    #[error("nothing selected")]
    EmptySelection,

    #[error("style {reference} is not available")]
    StyleUnavailable {
        reference: StyleRef,
        #[source]
        source: Option<HostError>,
    },

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error(transparent)]
    Library(#[from] anyhow::Error),
}

impl DispatchError {
    /// Notice shown to the user for this failure.
    pub fn notification(&self) -> Notification {
        match self {
            DispatchError::EmptySelection => Notification::info(messages::EMPTY_SELECTION),
            DispatchError::StyleUnavailable { .. } => Notification::error(messages::STYLE_UNAVAILABLE),
            DispatchError::InvalidCommand(_) => Notification::error(messages::INVALID_COMMAND),
            DispatchError::MissingParameter(command) => {
                Notification::error(messages::missing_parameter(command.key()))
            }
            DispatchError::Publish(PublishError::QuotaExceeded { .. }) => {
                Notification::error(messages::QUOTA_EXCEEDED)
            }
            DispatchError::Publish(err) => Notification::error(messages::failed(&err.to_string())),
            DispatchError::Library(err) => Notification::error(messages::failed(&format!("{err:#}"))),
        }
    }
}

/// Use case dispatching a run event.
///
/// Style commands resolve the picked style before any node is touched, then
/// assign one field on every selected node that has it. Library commands
/// delegate to their use cases. Every path notifies the user and closes the
/// plugin exactly once.
pub struct RunCommand {
    resolver: Arc<dyn StyleResolverPort>,
    selection: Arc<dyn SelectionPort>,
    notifier: Arc<dyn NotifierPort>,
    lifecycle: Arc<dyn PluginLifecyclePort>,
    publish: PublishLibrary,
    toggle: ToggleLibrary,
    remove: RemoveLibrary,
    notify_timeout_ms: u64,
}

/// Library use cases the dispatcher delegates to.
pub struct LibraryCommands {
    pub publish: PublishLibrary,
    pub toggle: ToggleLibrary,
    pub remove: RemoveLibrary,
}

impl RunCommand {
    pub fn new(
        resolver: Arc<dyn StyleResolverPort>,
        selection: Arc<dyn SelectionPort>,
        notifier: Arc<dyn NotifierPort>,
        lifecycle: Arc<dyn PluginLifecyclePort>,
        libraries: LibraryCommands,
        notify_timeout_ms: u64,
    ) -> Self {
        Self {
            resolver,
            selection,
            notifier,
            lifecycle,
            publish: libraries.publish,
            toggle: libraries.toggle,
            remove: libraries.remove,
            notify_timeout_ms,
        }
    }

    #[tracing::instrument(
        name = "usecase.run_command.execute",
        skip(self, request),
        fields(command = %request.command)
    )]
    pub async fn execute(&self, request: &RunRequest) -> Result<(), DispatchError> {
        let result = self.dispatch(request).await;
        if let Err(err) = &result {
            warn!(error = %err, "Command failed");
            self.notify(err.notification());
        }
        self.lifecycle.close_plugin();
        result
    }

    async fn dispatch(&self, request: &RunRequest) -> Result<(), DispatchError> {
        let command: Command = request.command.parse()?;
        match command {
            Command::Publish => {
                let outcome = self.publish.execute().await?;
                self.notify(Notification::info(messages::published(
                    &outcome.library,
                    &outcome.stats,
                    outcome.updated,
                )));
            }
            Command::Toggle => {
                let library = library_parameter(request, command)?;
                let active = self.toggle.execute(&library)?;
                self.notify(Notification::info(messages::toggled(&library, active)));
            }
            Command::Delete => {
                let library = library_parameter(request, command)?;
                self.remove.execute(&library).await?;
                self.notify(Notification::info(messages::removed(&library)));
            }
            Command::Fill | Command::Stroke | Command::Text | Command::Effect | Command::Grid => {
                let data = parameter(request, command)?;
                let field = command
                    .style_field()
                    .ok_or(DispatchError::MissingParameter(command))?;
                self.apply(field, data).await?;
            }
        }
        Ok(())
    }

    async fn apply(&self, field: StyleField, data: &SuggestionData) -> Result<(), DispatchError> {
        let nodes = self.selection.selection();
        if nodes.is_empty() {
            return Err(DispatchError::EmptySelection);
        }

        let binding = self.resolve(data).await?;

        let mut applied = 0;
        for node in &nodes {
            match self.selection.bind(node, field, &binding) {
                Ok(true) => applied += 1,
                Ok(false) => debug!(node = %node, field = field.property(), "Node has no such field"),
                Err(err) => warn!(node = %node, error = %err, "Failed to assign style"),
            }
        }
        info!(
            field = field.property(),
            applied,
            selected = nodes.len(),
            "Applied style"
        );
        Ok(())
    }

    async fn resolve(&self, data: &SuggestionData) -> Result<StyleBinding, DispatchError> {
        let reference = data.style_ref();
        let resolved = match (&reference, data.is_variable) {
            (StyleRef::Local(id), false) => self.resolver.style_by_id(id).await,
            (StyleRef::Local(id), true) => self.resolver.variable_by_id(id).await,
            (StyleRef::Remote(key), false) => self.resolver.import_style_by_key(key).await.map(Some),
            (StyleRef::Remote(key), true) => {
                self.resolver.import_variable_by_key(key).await.map(Some)
            }
        };

        match resolved {
            Ok(Some(id)) if data.is_variable => Ok(StyleBinding::Variable(id)),
            Ok(Some(id)) => Ok(StyleBinding::Style(id)),
            Ok(None) => Err(DispatchError::StyleUnavailable {
                reference,
                source: None,
            }),
            Err(err) => Err(DispatchError::StyleUnavailable {
                reference,
                source: Some(err),
            }),
        }
    }

    fn notify(&self, notification: Notification) {
        self.notifier
            .notify(notification.with_timeout(self.notify_timeout_ms));
    }
}

fn parameter(request: &RunRequest, command: Command) -> Result<&SuggestionData, DispatchError> {
    request
        .parameters
        .get(command.key())
        .ok_or(DispatchError::MissingParameter(command))
}

fn library_parameter(request: &RunRequest, command: Command) -> Result<LibraryId, DispatchError> {
    parameter(request, command).map(|data| LibraryId::new(data.id.clone()))
}
