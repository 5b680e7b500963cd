use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use tokio::sync::mpsc::UnboundedSender;

use crate::widgets::carousel::AutoplayTick;

/// Everything the demo's single-threaded loop reacts to.
#[derive(Debug, Clone)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Posted by the carousel's autoplay task.
    Autoplay(AutoplayTick),
    /// Config file was successfully reloaded
    ConfigReload,
    /// Config reload failed
    ConfigError(String),
}

impl From<AutoplayTick> for AppEvent {
    fn from(tick: AutoplayTick) -> Self {
        AppEvent::Autoplay(tick)
    }
}

/// Reads terminal input on a background thread and forwards it to the
/// app's event queue.
pub struct EventHandler {
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl EventHandler {
    pub fn spawn(tx: UnboundedSender<AppEvent>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            // Short poll timeout so the stop flag is seen promptly
            let timeout = Duration::from_millis(50);
            while !thread_stop.load(Ordering::Relaxed) {
                match event::poll(timeout) {
                    Ok(false) => continue,
                    Ok(true) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal poll failed");
                        break;
                    }
                }
                let app_event = match event::read() {
                    Ok(Event::Key(key)) => AppEvent::Key(key),
                    Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                    Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                    Ok(_) => continue,
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal read failed");
                        break;
                    }
                };
                if tx.send(app_event).is_err() {
                    break;
                }
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
