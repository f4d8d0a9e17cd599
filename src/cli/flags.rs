use randkey::Mode;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub avoid_ambiguous: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_numbers: bool,
    pub no_symbols: bool,
    pub mode: Option<Mode>,
    pub length: Option<usize>,
    pub number: Option<usize>,
}
