/// How much the CLI reports on stderr.
///
/// Table output always goes to stdout and is never affected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No diagnostics, errors only
    Quiet,
    /// Warnings
    #[default]
    Normal,
    /// Also report where the format came from and what was read
    Verbose,
}

impl Verbosity {
    /// Resolve from the `-q` / `-v` flags; quiet wins when both are given.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    pub fn is_verbose(self) -> bool {
        self >= Verbosity::Verbose
    }

    /// Warnings are shown at every level except `Quiet`.
    pub fn shows_warnings(self) -> bool {
        self > Verbosity::Quiet
    }

    /// Print a warning to stderr unless quiet.
    pub fn warn(self, msg: impl std::fmt::Display) {
        if self.shows_warnings() {
            eprintln!("warning: {msg}");
        }
    }

    /// Print a diagnostic line to stderr when verbose.
    pub fn note(self, msg: impl std::fmt::Display) {
        if self.is_verbose() {
            eprintln!("  {msg}");
        }
    }
}
