use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "todolist",
    about = concat!("todolist v", env!("CARGO_PKG_VERSION"), " - a task list in one plain file"),
    version
)]
pub struct Cli {
    /// Interactive mode with Unicode glyphs
    #[arg(short = 'u', conflicts_with = "ascii")]
    pub unicode: bool,

    /// Interactive mode with ASCII glyphs
    #[arg(short = 'g')]
    pub ascii: bool,

    /// Reserved
    #[arg(short = 'r', hide = true)]
    pub reserved_r: bool,

    /// Reserved
    #[arg(short = 'f', hide = true)]
    pub reserved_f: bool,

    /// Print the listing as JSON (headless, cannot be combined with texts)
    #[arg(long, conflicts_with = "texts")]
    pub json: bool,

    /// Create an empty list file if none exists
    #[arg(long)]
    pub init: bool,

    /// Task texts to append, in order
    pub texts: Vec<String>,
}

impl Cli {
    /// Whether the terminal UI should run
    pub fn interactive(&self) -> bool {
        self.unicode || self.ascii
    }

    /// Glyph style requested on the command line, overriding config
    pub fn unicode_override(&self) -> Option<bool> {
        if self.unicode {
            Some(true)
        } else if self.ascii {
            Some(false)
        } else {
            None
        }
    }

    /// The first reserved flag that was given, if any
    pub fn reserved_flag(&self) -> Option<&'static str> {
        if self.reserved_r {
            Some("-r")
        } else if self.reserved_f {
            Some("-f")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("todolist").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn texts_in_order() {
        let cli = parse(&["buy milk", "call mom"]);
        assert_eq!(cli.texts, vec!["buy milk", "call mom"]);
        assert!(!cli.interactive());
        assert_eq!(cli.unicode_override(), None);
    }

    #[test]
    fn glyph_flags() {
        let cli = parse(&["-u"]);
        assert!(cli.interactive());
        assert_eq!(cli.unicode_override(), Some(true));
        let cli = parse(&["-g", "task"]);
        assert_eq!(cli.unicode_override(), Some(false));
        assert_eq!(cli.texts, vec!["task"]);
    }

    #[test]
    fn unicode_and_ascii_conflict() {
        assert!(Cli::try_parse_from(["todolist", "-u", "-g"]).is_err());
    }

    #[test]
    fn json_conflicts_with_texts() {
        assert!(Cli::try_parse_from(["todolist", "--json", "buy milk"]).is_err());
        assert!(Cli::try_parse_from(["todolist", "buy milk", "--json"]).is_err());
        assert!(parse(&["--json"]).json);
    }

    #[test]
    fn reserved_flags_parse() {
        assert_eq!(parse(&["-r"]).reserved_flag(), Some("-r"));
        assert_eq!(parse(&["-f"]).reserved_flag(), Some("-f"));
        assert_eq!(parse(&[]).reserved_flag(), None);
    }
}
