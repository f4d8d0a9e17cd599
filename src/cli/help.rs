use crate::terminal::{box_bottom, box_line, box_opt, box_top};

pub fn print_help() {
    box_top("randkey");
    box_line("Random passwords and hex/base64 keys from the OS CSPRNG.");
    box_line("");
    box_line("Usage: randkey [OPTIONS]");
    box_line(&format!("Entropy source: {}", randkey::rand::entropy_source()));
    box_bottom();

    box_top("Mode");
    box_opt("-m, --mode <MODE>", "password (default), hex or base64");
    box_opt("--hex", "Same as --mode hex");
    box_opt("--base64", "Same as --mode base64");
    box_bottom();

    box_top("Options");
    box_opt(
        "-l, --length <N>",
        "Password length in characters, or key size in bytes (default 16)",
    );
    box_opt("-n, --number <N>", "How many values to generate (default 1)");
    box_opt("--no-upper", "Exclude A-Z");
    box_opt("--no-lower", "Exclude a-z");
    box_opt("--no-numbers", "Exclude 0-9");
    box_opt("--no-symbols", "Exclude !@#$%^&* and friends");
    box_opt("-a, --avoid-ambiguous", "Exclude look-alike characters 0 O I l 1");
    box_bottom();

    box_top("Output");
    box_opt("-b, --board", "Copy to clipboard instead of printing");
    box_opt("-q, --quiet", "Print bare values only, no strength line");
    box_bottom();

    box_top("Settings");
    box_opt("-s, --saved", "Start from saved settings");
    box_opt("--save", "Save the effective options as new defaults");
    box_opt("-h, --help", "Show this help");
    box_opt("-v, --version", "Show version");
    box_bottom();
}
