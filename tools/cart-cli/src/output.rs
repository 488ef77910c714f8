//! Terminal rendering for carts, session actions and configuration.

use std::path::Path;

use cart_store::cart::{CartLineView, CartView, CommandOutcome};
use console::style;

use crate::config::CliConfig;
use crate::session::SessionAction;

/// Width reserved for a cost column.
const COST_WIDTH: usize = 10;

/// Output handler for CLI messages.
///
/// In JSON mode everything except [`Output::json`] and errors is silent, so
/// stdout carries a single machine-readable document.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Report one replayed session action and what it did to the cart.
    pub fn action(&self, index: usize, total: usize, action: &SessionAction, outcome: &CommandOutcome) {
        if self.json {
            return;
        }
        println!(
            "{} {}",
            style(format!("[{}/{}]", index, total)).dim(),
            action_line(action, outcome)
        );
        match outcome {
            CommandOutcome::ContinueShopping => self.info("Back to the product listing"),
            CommandOutcome::Checkout { checkout } if !checkout.is_implemented() => {
                eprintln!("{} {}", style("⚠").yellow(), checkout.message());
            }
            _ => {}
        }
    }

    /// Render the cart: total heading, one row per line item, item count.
    pub fn cart(&self, view: &CartView) {
        if self.json {
            return;
        }
        println!("\n{}", style(view.heading()).bold().underlined());
        if view.items.is_empty() {
            self.info("Your cart is empty");
            return;
        }

        let name_width = view.items.iter().map(|line| line.name.len()).max().unwrap_or(0);
        for line in &view.items {
            println!("  {}", cart_line_row(line, name_width));
        }
        self.success(&item_count_line(view.item_count));
    }

    /// Show the effective configuration and where it came from.
    pub fn config_summary(&self, config: &CliConfig, source: Option<&Path>) {
        if self.json {
            return;
        }
        println!("\n{}", style("Current Configuration").bold().underlined());
        let source = source.map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
        for (section, key, value) in config_entries(config) {
            println!("  {} {} = {}", style(format!("[{}]", section)).dim(), key, value);
        }
        println!("  {} {}", style("source:").dim(), source);
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

fn action_line(action: &SessionAction, outcome: &CommandOutcome) -> String {
    match outcome {
        CommandOutcome::Unchanged => format!("{} (no change)", action.label()),
        _ => action.label(),
    }
}

fn cart_line_row(line: &CartLineView, name_width: usize) -> String {
    format!(
        "{:name_width$}  {:>cost_width$}  x{:<4}  {}",
        line.name,
        line.cost,
        line.quantity,
        line.subtotal_label(),
        name_width = name_width,
        cost_width = COST_WIDTH,
    )
}

fn item_count_line(count: i64) -> String {
    match count {
        1 => "1 item in cart".to_string(),
        n => format!("{} items in cart", n),
    }
}

fn config_entries(config: &CliConfig) -> Vec<(&'static str, &'static str, String)> {
    vec![
        ("cart", "max_quantity_per_item", config.cart.max_quantity_per_item.to_string()),
        ("cart", "checkout_message", format!("{:?}", config.cart.checkout_message)),
        ("log", "level", format!("{:?}", config.log.level)),
    ]
}
