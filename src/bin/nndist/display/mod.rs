mod banner;
mod error;
mod progress;
mod tables;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use progress::Progress;
pub use tables::{print_report_rows, print_scan_summary};

#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
    pub can_prompt: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: crate::io::stderr_is_tty(),
            can_prompt: crate::io::stdin_is_tty(),
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet {
            Self {
                interactive: false,
                ..self
            }
        } else {
            self
        }
    }

    pub fn with_prompt(self, allowed: bool) -> Self {
        Self {
            can_prompt: self.can_prompt && allowed,
            ..self
        }
    }
}

/// Terminal outcome messages go to stdout so they survive `--quiet`.
pub fn print_notice(message: &str) {
    println!("{message}");
}
