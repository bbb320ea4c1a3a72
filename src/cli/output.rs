//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for the Marquee CLI.

use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the Marquee banner
    pub fn banner(&self) {
        if self.colored {
            println!(
                r#"
{}
{}
{}
{}
{}
"#,
                " __  __    _    ____   ___  _   _ _____ _____ ".bright_yellow().bold(),
                "|  \\/  |  / \\  |  _ \\ / _ \\| | | | ____| ____|".bright_yellow().bold(),
                "| |\\/| | / _ \\ | |_) | | | | | | |  _| |  _|  ".yellow().bold(),
                "| |  | |/ ___ \\|  _ <| |_| | |_| | |___| |___ ".yellow().bold(),
                "|_|  |_/_/   \\_\\_| \\_\\\\__\\_\\\\___/|_____|_____|".red().bold(),
            );
            println!(
                "   {} {}\n",
                "Movie Catalog Server".bright_white().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
        } else {
            println!(
                r#"
 __  __    _    ____   ___  _   _ _____ _____
|  \/  |  / \  |  _ \ / _ \| | | | ____| ____|
| |\/| | / _ \ | |_) | | | | | | |  _| |  _|
| |  | |/ ___ \|  _ <| |_| | |_| | |___| |___
|_|  |_/_/   \_\_| \_\\__\_\\___/|_____|_____|
"#
            );
            println!(
                "   Movie Catalog Server v{}\n",
                env!("CARGO_PKG_VERSION")
            );
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("{} {}", "✓".bright_green().bold(), message);
        } else {
            println!("[ok] {}", message);
        }
    }

    /// Print an informational message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("{} {}", "→".bright_blue(), message);
        } else {
            println!("[info] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("{} {}", "✗".bright_red().bold(), message);
        } else {
            eprintln!("[error] {}", message);
        }
    }

    /// Print a key/value configuration line
    pub fn config_line(&self, key: &str, value: &str) {
        if self.colored {
            println!("  {} {}", format!("{:<20}", key).bright_white(), value.dimmed());
        } else {
            println!("  {:<20} {}", key, value);
        }
    }
}
