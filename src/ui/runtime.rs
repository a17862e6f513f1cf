use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event};

use super::App;
use super::loading::spawn_loader;
use super::state::ExplorerOutcome;
use crate::countries::DataProvider;

/// Load countries from `provider` and run the explorer with default settings.
pub fn run(provider: impl DataProvider + Send + 'static) -> Result<ExplorerOutcome> {
	super::ExplorerUi::new(provider).run()
}

impl<'a> App<'a> {
	/// Start the background load and pump the terminal event loop until the
	/// user exits.
	pub fn run(&mut self, provider: Box<dyn DataProvider + Send>) -> Result<ExplorerOutcome> {
		self.set_load_updates(spawn_loader(provider)?);

		let mut terminal = ratatui::init();
		terminal.clear()?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<ExplorerOutcome> = 'event_loop: loop {
			self.pump_load_updates();
			if self.loading {
				self.throbber_state.calc_next();
			}

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			if let Some(outcome) = self.drain_events(&mut pending_events) {
				break Ok(outcome);
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}

#[cfg(test)]
mod tests;
