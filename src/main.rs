use std::env;

mod cli;
mod settings;
mod terminal;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    disable_core_dumps();

    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run(args));
}

/// Keep generated secrets out of core dumps.
#[cfg(target_os = "linux")]
fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
fn disable_core_dumps() {}
