//! Terminal spinner on its own thread, stopped through an explicit guard.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
const TICK: Duration = Duration::from_millis(120);

/// Animated "still working" indicator for long network phases.
///
/// The guard owns both the render thread and its stop flag; calling
/// [`Spinner::finish`] (or dropping the guard) stops the animation, clears
/// the line, and joins the thread. The indicator writes only to the
/// terminal — pipeline code holds the guard and nothing else.
pub struct Spinner {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    pub fn start(label: &str) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let label = label.to_owned();
        let handle = std::thread::spawn(move || {
            let mut frame = 0_usize;
            while !flag.load(Ordering::Relaxed) {
                print!("\r{} {label}", FRAMES[frame % FRAMES.len()]);
                let _ = io::stdout().flush();
                frame += 1;
                std::thread::sleep(TICK);
            }
            // Blank the spinner line before the next println.
            print!("\r{:width$}\r", "", width = label.len() + 2);
            let _ = io::stdout().flush();
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stops the animation and waits for the line to clear.
    pub fn finish(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.shutdown();
    }
}
