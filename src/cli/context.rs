//! CLI context - bundles settings, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use randkey::{Mode, OsRandom, key, pass, strength};
use zeroize::Zeroize;

use super::{CliFlags, help::print_help, prompts, quiet};
use crate::settings::Settings;
use crate::terminal::{print_key_info, print_strength};

/// Why the CLI stopped before finishing normally.
pub enum Exit {
    /// Early exit - not an error, just done.
    Done,
    /// Options cannot produce a value; message already printed.
    Usage,
    Failed(randkey::Error),
}

impl From<randkey::Error> for Exit {
    fn from(e: randkey::Error) -> Self {
        Exit::Failed(e)
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
    rng: OsRandom,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;
        quiet::set(flags.quiet);

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
            rng: OsRandom::new(),
        })
    }

    /// Run CLI. Returns `Err(Exit::Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Exit> {
        self.handle_info_flags()?;
        self.apply_flags();
        self.handle_save();
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if self.flags.help {
            print_help();
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("randkey {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        let opts = &mut self.settings.options;

        if let Some(mode) = self.flags.mode {
            self.settings.mode = mode;
        }
        if let Some(len) = self.flags.length {
            opts.length = len;
        }

        if self.flags.no_upper {
            opts.uppercase = false;
        }
        if self.flags.no_lower {
            opts.lowercase = false;
        }
        if self.flags.no_numbers {
            opts.numbers = false;
        }
        if self.flags.no_symbols {
            opts.symbols = false;
        }
        if self.flags.avoid_ambiguous {
            opts.avoid_ambiguous = true;
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => self.clipboard = Some(c),
                Err(e) => {
                    log::debug!("clipboard init failed: {e}");
                    prompts::clipboard_fallback();
                }
            }
        }
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => prompts::settings_saved(),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    /// Generate values and handle output.
    pub fn generate_output(&mut self) -> Result<(), Exit> {
        let count = self.flags.number.unwrap_or(1);
        let mode = self.settings.mode;
        let opts = self.settings.options;

        let mut values = match mode.encoding() {
            None => {
                if !opts.any_category() {
                    prompts::empty_pool();
                    return Err(Exit::Usage);
                }
                pass::generate_batch(&self.rng, &opts, count)?
            }
            Some(encoding) => (0..count)
                .map(|_| key::generate(&self.rng, opts.length, encoding))
                .collect::<randkey::Result<Vec<_>>>()?,
        };

        // The filter can still empty a pool that had categories enabled.
        if values.iter().any(String::is_empty) && mode == Mode::Password {
            prompts::empty_pool();
            return Err(Exit::Usage);
        }

        if let Some(ctx) = self.clipboard.as_mut() {
            let mut joined = values.join("\n");
            match ctx.set_contents(joined.clone()) {
                Ok(()) => prompts::clipboard_copied(values.len()),
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                    self.print_values(&values);
                }
            }
            joined.zeroize();
        } else {
            self.print_values(&values);
        }

        for value in values.iter_mut() {
            value.zeroize();
        }
        Ok(())
    }

    fn print_values(&self, values: &[String]) {
        let mode = self.settings.mode;
        let opts = &self.settings.options;
        let charset = pass::charset::size(opts);

        for value in values {
            println!("{value}");
            if quiet::enabled() {
                continue;
            }
            match mode.encoding() {
                None => print_strength(
                    strength::score(value),
                    strength::entropy_bits(opts.length, charset),
                    charset,
                ),
                Some(encoding) => print_key_info(
                    opts.length,
                    (opts.length * 8) as f64,
                    key::encoded_len(opts.length, encoding),
                ),
            }
        }
    }
}
