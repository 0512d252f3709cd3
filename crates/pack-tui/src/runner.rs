//! Main TUI runner - entry point and event loop

use pack_app::signals;
use pack_app::{process_message, AppState, Message};
use pack_core::prelude::*;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Run the TUI until the user quits
pub async fn run(mut state: AppState) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!(
        items = state.items.len(),
        sort = %state.list_view.sort_by,
        icons = %state.settings.ui.icons,
        "Starting TUI"
    );

    let mut term = ratatui::try_init()
        .map_err(|e| Error::TerminalInit(e.to_string()))
        .context("Entering the alternate screen")?;

    // Signal handler sends Message::Quit on SIGINT/SIGTERM
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);

    // Restore even when the loop failed; the loop error wins
    let restored = ratatui::try_restore()
        .map_err(|e| Error::TerminalRestore(e.to_string()))
        .context("Leaving the alternate screen");
    let result = result.and(restored);

    info!(items = state.items.len(), "TUI stopped");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (from signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}
