// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, Continuation, DEBUG_TUI_MAIN_EVENT_LOOP, EditorEngine,
            EditorEvent, KeyEvent, RedrawRequest, Renderer, SignalEvent, TabManager,
            TerminalDriver, ok};

/// Everything the main event loop owns. Only the loop mutates it, one event at a time.
#[derive(Debug, Default)]
pub struct EditorState {
    pub tabs: TabManager,
    pub engine: EditorEngine,
    pub renderer: Renderer,
    /// Shown in the status bar until the next key event.
    pub status_message: Option<String>,
}

impl EditorState {
    #[must_use]
    pub fn new(tabs: TabManager, engine: EditorEngine, renderer: Renderer) -> Self {
        Self {
            tabs,
            engine,
            renderer,
            status_message: None,
        }
    }

    /// Apply one keystroke. Returns whether the loop keeps going and what to repaint.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> (Continuation, RedrawRequest) {
        let cleared_message = self.status_message.take().is_some();
        let base = if cleared_message {
            RedrawRequest::Cursor
        } else {
            RedrawRequest::Nothing
        };

        let Ok(editor_event) = EditorEvent::try_from(key_event) else {
            DEBUG_TUI_MAIN_EVENT_LOOP.then(|| {
                tracing::debug!(message = "unbound key", key_event = ?key_event);
            });
            return (Continuation::Continue, base);
        };

        let (continuation, redraw_request) = match editor_event {
            EditorEvent::Quit => (Continuation::Stop, RedrawRequest::Nothing),
            EditorEvent::Save => (Continuation::Continue, self.save_active_tab()),
            EditorEvent::CloseTab => {
                if self.tabs.delete_active_tab() {
                    (Continuation::Continue, RedrawRequest::Full)
                } else {
                    (Continuation::Stop, RedrawRequest::Nothing)
                }
            }
            EditorEvent::NextTab => (Continuation::Continue, full_if(self.tabs.next_tab())),
            EditorEvent::PrevTab => (Continuation::Continue, full_if(self.tabs.prev_tab())),
            _ => (Continuation::Continue, self.apply_to_active_tab(editor_event)),
        };

        DEBUG_TUI_MAIN_EVENT_LOOP.then(|| {
            tracing::debug!(
                message = "handle_key_event",
                key_event = ?key_event,
                editor_event = ?editor_event,
                continuation = ?continuation,
                redraw_request = ?redraw_request
            );
        });
        (continuation, base.merge(redraw_request))
    }

    /// React to a resize or an interrupt. A resize queries the new size from `driver`.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal size can't be queried.
    pub fn handle_signal_event(
        &mut self,
        signal_event: SignalEvent,
        driver: &impl TerminalDriver,
    ) -> CommonResult<(Continuation, RedrawRequest)> {
        match signal_event {
            SignalEvent::WindowChanged => {
                let window_size = driver.size()?;
                DEBUG_TUI_MAIN_EVENT_LOOP.then(|| {
                    tracing::debug!(message = "window changed", window_size = ?window_size);
                });
                self.tabs.set_window_size(window_size);
                Ok((Continuation::Continue, RedrawRequest::Full))
            }
            SignalEvent::Interrupt => {
                tracing::info!(message = "interrupted, quitting");
                Ok((Continuation::Stop, RedrawRequest::Nothing))
            }
        }
    }

    /// Paint what `redraw_request` asks for.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    pub fn render(
        &self,
        driver: &mut impl TerminalDriver,
        redraw_request: &RedrawRequest,
    ) -> CommonResult<()> {
        let ops = self.renderer.render(
            &self.tabs,
            &self.engine.config,
            self.status_message.as_deref(),
            redraw_request,
        );
        if ops.is_empty() {
            return ok!();
        }
        driver.paint(&ops)
    }

    fn apply_to_active_tab(&mut self, editor_event: EditorEvent) -> RedrawRequest {
        let Some(buffer) = self.tabs.active_editor_mut() else {
            return RedrawRequest::Nothing;
        };
        let was_dirty = buffer.is_dirty();
        let redraw_request = self
            .engine
            .apply_event(buffer, editor_event)
            .redraw_request();

        // The tab bar shows the dirty marker.
        if buffer.is_dirty() == was_dirty {
            redraw_request
        } else {
            RedrawRequest::Full
        }
    }

    fn save_active_tab(&mut self) -> RedrawRequest {
        let Some(buffer) = self.tabs.active_editor_mut() else {
            return RedrawRequest::Nothing;
        };
        let message = match buffer.save() {
            Ok(bytes_written) => {
                format!(
                    "Saved {bytes_written} bytes to {}",
                    buffer.path().display()
                )
            }
            Err(report) => {
                tracing::error!(
                    message = "save failed",
                    path = %buffer.path().display(),
                    error = ?report
                );
                format!("Save failed: {report}")
            }
        };
        self.status_message = Some(message);
        RedrawRequest::Full
    }
}

fn full_if(changed: bool) -> RedrawRequest {
    if changed {
        RedrawRequest::Full
    } else {
        RedrawRequest::Nothing
    }
}
