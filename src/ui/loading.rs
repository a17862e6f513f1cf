use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::{Context, Result};
use tracing::warn;

use super::App;
use crate::countries::{DataProvider, Explorer};

/// Run the one-shot dataset load on a background thread.
///
/// The explorer produced by [`Explorer::initialize`] is sent back once; a
/// failed fetch has already been logged and arrives as an empty explorer.
pub fn spawn_loader(provider: Box<dyn DataProvider + Send>) -> Result<Receiver<Explorer>> {
	let (tx, rx) = mpsc::channel();
	thread::Builder::new()
		.name("country-loader".into())
		.spawn(move || {
			let explorer = Explorer::initialize(provider.as_ref());
			let _ = tx.send(explorer);
		})
		.context("failed to spawn country loader thread")?;
	Ok(rx)
}

impl<'a> App<'a> {
	pub(crate) fn set_load_updates(&mut self, updates: Receiver<Explorer>) {
		self.load_updates = Some(updates);
		self.loading = true;
	}

	pub(crate) fn pump_load_updates(&mut self) {
		let Some(rx) = self.load_updates.take() else {
			return;
		};

		match rx.try_recv() {
			Ok(explorer) => self.hydrate(explorer),
			Err(TryRecvError::Empty) => self.load_updates = Some(rx),
			Err(TryRecvError::Disconnected) => {
				warn!("countries: loader exited without a result");
				self.loading = false;
			}
		}
	}

	/// Install a freshly loaded explorer, re-applying anything typed while the
	/// load was in flight.
	fn hydrate(&mut self, explorer: Explorer) {
		self.explorer = explorer;
		self.loading = false;
		if self.search_input.text().is_empty() {
			self.list_state.select(Some(0));
		} else {
			self.apply_search();
		}
	}
}
