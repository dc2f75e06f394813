//! # TUI Adapter
//!
//! The ratatui-specific layer behind `nakshatra-lok watch`: a live dashboard
//! that recomputes a [`Snapshot`](crate::core::Snapshot) on every tick.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The loop blocks on input for whatever is left of the current tick, then
//! redraws only when the tick elapsed or the terminal was resized.

mod component;
mod components;
mod event;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use log::info;
use ratatui::DefaultTerminal;

use crate::core::engine::{NakshatraStrategy, snapshot_now};
use crate::core::location::Location;
use crate::tui::event::{TuiEvent, poll_event_timeout};

pub fn run(location: Location, strategy: NakshatraStrategy, tick: Duration) -> io::Result<()> {
    info!(
        "Starting dashboard for {} ({}, {}), tick {:?}",
        location.name, location.latitude, location.longitude, tick
    );

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &location, strategy, tick);
    ratatui::restore();

    info!("Dashboard closed");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    location: &Location,
    strategy: NakshatraStrategy,
    tick: Duration,
) -> io::Result<()> {
    let mut snapshot = snapshot_now(location, strategy);
    let mut last_tick = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_dashboard(f, &snapshot, strategy))?;
            needs_redraw = false;
        }

        let timeout = tick.saturating_sub(last_tick.elapsed());
        match poll_event_timeout(timeout)? {
            Some(TuiEvent::Quit) => return Ok(()),
            Some(TuiEvent::Resize) => needs_redraw = true,
            None => {}
        }

        if last_tick.elapsed() >= tick {
            snapshot = snapshot_now(location, strategy);
            last_tick = Instant::now();
            needs_redraw = true;
        }
    }
}
