//! Interactive lookup session
//!
//! Reads commands line by line and runs backend calls on their own tasks so
//! the prompt never waits on the network. Completions come back over a
//! channel and are applied to the controller here, on the only task that
//! owns it.

use std::io::Write;

use anyhow::Result;
use epc_viewer::app::{run_effect, Effect, UserAction, ViewController};
use epc_viewer::view::render_screen;
use epc_viewer::{ControllerEvent, EpcBackend};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::commands::{help_text, parse_command, Command, Selection};

pub struct Session<B: EpcBackend + 'static> {
    controller: ViewController<B>,
    events_tx: mpsc::UnboundedSender<ControllerEvent>,
    events_rx: mpsc::UnboundedReceiver<ControllerEvent>,
    /// Effects spawned whose completion has not come back yet
    in_flight: usize,
}

impl<B: EpcBackend + 'static> Session<B> {
    pub fn new(controller: ViewController<B>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            controller,
            events_tx,
            events_rx,
            in_flight: 0,
        }
    }

    /// Run until `quit` or end of input.
    ///
    /// On end of input, requests still in flight are waited for so their
    /// outcome is shown.
    pub async fn run<R, W>(mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(
            out,
            "EPC lookup (backend: {})\nType `help` for commands.\n",
            self.controller.base_url()
        )?;

        // Startup health check; the prompt is usable straight away
        self.spawn(Effect::CheckHealth);

        let mut lines = input.lines();
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if !self.handle_line(&line, out)? {
                        return Ok(());
                    }
                }
                Some(event) = self.events_rx.recv() => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    self.apply(event);
                    self.render(out)?;
                }
            }
        }

        while self.in_flight > 0 {
            let Some(event) = self.events_rx.recv().await else {
                break;
            };
            self.in_flight -= 1;
            self.apply(event);
            self.render(out)?;
        }

        Ok(())
    }

    /// Returns `false` when the session should end
    fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(e) => {
                writeln!(out, "{}\n\n{}", e, help_text())?;
                return Ok(true);
            }
        };

        let action = match command {
            Command::Quit => return Ok(false),
            Command::Help => {
                writeln!(out, "{}", help_text())?;
                return Ok(true);
            }
            Command::Show => {
                self.render(out)?;
                return Ok(true);
            }
            Command::Health => UserAction::CheckHealth,
            Command::Search { postcode } => UserAction::Search { postcode },
            Command::Select(Selection::Address(address)) => UserAction::SelectAddress { address },
            Command::Select(Selection::Number(0)) => UserAction::SelectAddress {
                address: String::new(),
            },
            Command::Select(Selection::Number(n)) => {
                let selector = self.controller.state().selector();
                match selector.option(n) {
                    Some(address) => UserAction::SelectAddress {
                        address: address.to_string(),
                    },
                    None => {
                        writeln!(out, "{}", no_such_address(n, selector.options().len()))?;
                        return Ok(true);
                    }
                }
            }
        };

        tracing::debug!(action = action.name(), "user action");
        self.apply(action.into());
        self.render(out)?;
        Ok(true)
    }

    fn apply(&mut self, event: ControllerEvent) {
        if let Some(effect) = self.controller.handle(event) {
            self.spawn(effect);
        }
    }

    fn spawn(&mut self, effect: Effect) {
        let backend = self.controller.backend();
        let tx = self.events_tx.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let event = run_effect(backend.as_ref(), effect).await;
            // Receiver only goes away when the session has ended
            let _ = tx.send(event);
        });
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        let screen = render_screen(self.controller.state());
        if screen.is_empty() {
            writeln!(out, "---\n_Nothing to show. Try `search <postcode>`._\n")?;
        } else {
            write!(out, "---\n{}", screen)?;
        }
        out.flush()?;
        Ok(())
    }
}

fn no_such_address(n: usize, available: usize) -> String {
    match available {
        0 => format!("No address #{}: search for a postcode first", n),
        _ => format!("No address #{}: pick a number from 1 to {}", n, available),
    }
}
