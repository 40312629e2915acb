use crate::config::Config;
use crate::router::Router;
use crate::tui::Tui;
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

/// How long to wait for input before redrawing.
const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Main application: the terminal plus the screen router.
pub struct App {
    tui: Tui,
    router: Router,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf) -> Result<Self> {
        Ok(Self {
            tui: Tui::new()?,
            router: Router::new(config, config_path),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let result = self.tui.enter().and_then(|()| {
            info!("Starting on {}", self.router.flow().screen());
            self.event_loop()
        });

        // Restore the terminal even if entering it or the loop failed
        restore_outcome(result, self.tui.exit())
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            let router = &mut self.router;
            self.tui.terminal_mut().draw(|frame| router.draw(frame))?;

            if self.router.should_quit() {
                info!("Exiting");
                return Ok(());
            }

            if let Some(event) = self.tui.poll_event(POLL_TIMEOUT)? {
                self.router.handle_event(event)?;
            }
        }
    }
}

/// The run result wins; a failed terminal restore is only logged.
fn restore_outcome(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(e) = restored {
        error!("Failed to restore terminal: {:#}", e);
    }
    result
}
