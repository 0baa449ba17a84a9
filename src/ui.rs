//! Stage progress for the command-line tools.
//!
//! Pretty mode shows an indicatif spinner per stage on stderr; plain mode
//! prints one line per stage. Per-frame progress stays on stdout and is not
//! handled here.

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

#[derive(Clone, Copy, Debug)]
pub enum UiMode {
    Auto,
    Plain,
    Pretty,
}

#[derive(Clone, Debug)]
pub struct Ui {
    mode: UiMode,
    stderr_is_tty: bool,
}

impl Ui {
    pub fn from_args(ui_flag: &str, stderr_is_tty: bool) -> Self {
        let mode = match ui_flag {
            "plain" => UiMode::Plain,
            "pretty" => UiMode::Pretty,
            _ => UiMode::Auto,
        };
        Self {
            mode,
            stderr_is_tty,
        }
    }

    /// Start a named stage; the returned guard reports completion on drop.
    pub fn stage(&self, name: &str) -> StageGuard {
        let pretty = match self.mode {
            UiMode::Pretty => true,
            UiMode::Plain => false,
            UiMode::Auto => self.stderr_is_tty,
        };

        if pretty {
            let spinner = ProgressBar::new_spinner();
            spinner.set_draw_target(ProgressDrawTarget::stderr());
            spinner.enable_steady_tick(Duration::from_millis(120));
            let style = ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner());
            spinner.set_style(style);
            spinner.set_message(format!("{name}…"));
            StageGuard::new(name, Some(spinner))
        } else {
            eprintln!("==> {}", name);
            StageGuard::new(name, None)
        }
    }
}

pub struct StageGuard {
    name: String,
    started: Instant,
    spinner: Option<ProgressBar>,
}

impl StageGuard {
    fn new(name: &str, spinner: Option<ProgressBar>) -> Self {
        Self {
            name: name.to_string(),
            started: Instant::now(),
            spinner,
        }
    }
}

impl Drop for StageGuard {
    fn drop(&mut self) {
        let elapsed = self.started.elapsed();
        let message = format!("✔ {} ({})", self.name, format_elapsed(elapsed));
        match &self.spinner {
            Some(spinner) => spinner.finish_with_message(message),
            None => eprintln!("{message}"),
        }
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    if elapsed.as_secs() >= 1 {
        format!("{:.2}s", elapsed.as_secs_f64())
    } else {
        format!("{}ms", elapsed.as_millis())
    }
}
