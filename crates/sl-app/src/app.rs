use crate::deps::AppDeps;
use crate::usecases::library::{
    LibraryStore, ListLibraries, PublishLibrary, RemoveLibrary, ToggleLibrary,
};
use crate::usecases::suggestions::{HandleInput, StyleSuggestions};
use crate::usecases::{ActiveLibraries, LibraryCommands, RunCommand};

/// The plugin's use cases, wired from one set of ports.
pub struct App {
    handle_input: HandleInput,
    run_command: RunCommand,
}

impl App {
    /// Create new App instance from dependencies.
    ///
    /// This constructor signature IS the dependency manifest.
    pub fn new(deps: AppDeps) -> Self {
        let store = LibraryStore::new(deps.storage);
        let active = ActiveLibraries::new(deps.metadata, deps.settings.active_libraries_key);

        let handle_input = HandleInput::new(
            StyleSuggestions::new(
                deps.catalog.clone(),
                store.clone(),
                active.clone(),
                deps.settings.include_color_variables,
            ),
            ListLibraries::new(deps.catalog.clone(), store.clone(), active.clone()),
        );
        let run_command = RunCommand::new(
            deps.resolver,
            deps.selection,
            deps.notifier,
            deps.lifecycle,
            LibraryCommands {
                publish: PublishLibrary::new(deps.catalog, store.clone(), deps.clock),
                toggle: ToggleLibrary::new(active.clone()),
                remove: RemoveLibrary::new(store, active),
            },
            deps.settings.notify_timeout_ms,
        );

        Self {
            handle_input,
            run_command,
        }
    }

    pub fn handle_input(&self) -> &HandleInput {
        &self.handle_input
    }

    pub fn run_command(&self) -> &RunCommand {
        &self.run_command
    }
}
