//! Generate command implementation.
//!
//! The `probekit generate` command prints checksum-valid card numbers with
//! expiry dates, one `NUMBER|MM|YYYY` line each.

use crate::cli::args::GenerateArgs;
use crate::config::{GeneratorSettings, ProbekitConfig};
use crate::error::Result;
use crate::luhn::{CardGenerator, MAX_BATCH_SIZE};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// A fully resolved generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    pub count: usize,
    pub prefix: String,
    pub length: usize,
    pub expiry_start_year: u16,
    pub seed: Option<u64>,
}

impl BatchRequest {
    /// Request using only configured values.
    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        Self {
            count: settings.count,
            prefix: settings.prefix.clone(),
            length: settings.length,
            expiry_start_year: settings.expiry_start_year,
            seed: None,
        }
    }

    /// Generate the batch and show one line per card.
    ///
    /// Returns how many cards were printed.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<usize> {
        if self.count > MAX_BATCH_SIZE {
            ui.warning(&format!(
                "Requested {} cards; generating the maximum of {}",
                self.count, MAX_BATCH_SIZE
            ));
        }

        let cards = match self.seed {
            Some(seed) => CardGenerator::seeded(seed),
            None => CardGenerator::new(),
        }
        .with_expiry_start_year(self.expiry_start_year)
        .generate_batch(self.count, &self.prefix, self.length)?;

        for card in &cards {
            ui.message(&card.to_string());
        }
        Ok(cards.len())
    }
}

/// The generate command implementation.
pub struct GenerateCommand {
    request: BatchRequest,
}

impl GenerateCommand {
    /// Create a new generate command; flags override configured defaults.
    pub fn new(config: &ProbekitConfig, args: GenerateArgs) -> Self {
        let defaults = BatchRequest::from_settings(&config.generator);
        Self {
            request: BatchRequest {
                count: args.count.unwrap_or(defaults.count),
                prefix: args.prefix.unwrap_or(defaults.prefix),
                length: args.length.unwrap_or(defaults.length),
                expiry_start_year: defaults.expiry_start_year,
                seed: args.seed,
            },
        }
    }

    /// The resolved request.
    pub fn request(&self) -> &BatchRequest {
        &self.request
    }
}

impl Command for GenerateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.request.count == 0 {
            ui.warning("Nothing to generate (count is 0)");
            return Ok(CommandResult::success());
        }

        self.request.run(ui)?;
        Ok(CommandResult::success())
    }
}
