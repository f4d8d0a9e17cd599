mod context;
mod flags;
mod help;
mod parse;
mod prompts;
mod quiet;

use context::{Context, Exit};
use flags::CliFlags;
use parse::parse;

/// Run the CLI and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            eprintln!("Try 'randkey --help' for more information.");
            return 2;
        }
    };

    match ctx.run() {
        Ok(()) | Err(Exit::Done) => 0,
        Err(Exit::Usage) => 2,
        Err(Exit::Failed(e)) => {
            log::error!("generation failed: {e}");
            prompts::error(&format!("Error: {e}"));
            1
        }
    }
}
