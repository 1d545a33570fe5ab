use aether::model::NoteKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aether", bin_name = "aether", version)]
#[command(about = "Linked text, audio and sketch notes in a session shell", long_about = None)]
pub struct Cli {
    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output (debug logging; RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,

    /// Start with an empty store instead of the welcome notes
    #[arg(long)]
    pub no_welcome: bool,

    /// Read session commands from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,
}

/// One line typed into the session.
#[derive(Parser, Debug)]
#[command(name = "aether", no_binary_name = true, disable_help_subcommand = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Create a note and make it active
    #[command(alias = "n", display_order = 1)]
    New {
        /// text, audio or sketch
        #[arg(default_value = "text")]
        kind: NoteKind,
    },

    /// List notes, most recently updated first
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only notes of this kind
        #[arg(short, long)]
        kind: Option<NoteKind>,

        /// Search titles and content
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show notes in full (default: the active note)
    #[command(alias = "v", display_order = 3)]
    View {
        /// Indexes, ids or a title ("." is the active note)
        #[arg(num_args = 0..)]
        selectors: Vec<String>,
    },

    /// Make a note active
    #[command(display_order = 4)]
    Select { selector: String },

    /// Clear the active note
    #[command(display_order = 5)]
    Deselect,

    /// Replace a text note's HTML; the title follows its first block
    #[command(alias = "e", display_order = 10)]
    Edit {
        selector: String,

        /// Read the HTML from a file
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// HTML (words are joined with spaces)
        #[arg(trailing_var_arg = true, num_args = 0..)]
        html: Vec<String>,
    },

    /// Store an image file in a sketch note
    #[command(display_order = 11)]
    Sketch { selector: String, file: PathBuf },

    /// Send a recording to be transcribed into an audio note
    #[command(display_order = 12)]
    Record { selector: String, file: PathBuf },

    /// Request a summary of a text note
    #[command(display_order = 13)]
    Summarize {
        #[arg(default_value = ".")]
        selector: String,
    },

    /// Apply pending transcriptions and summaries
    #[command(display_order = 14)]
    Wait,

    /// Delete notes
    #[command(alias = "delete", display_order = 20)]
    Rm {
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Show the link graph
    #[command(display_order = 21)]
    Graph {
        /// Print nodes and edges as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which note a [[title]] reference links to
    #[command(display_order = 22)]
    Resolve {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Show or set configuration (takes effect next session)
    #[command(display_order = 30)]
    Config {
        key: Option<String>,
        value: Option<String>,
    },

    /// Print help for the session or one command
    #[command(display_order = 31)]
    Help { command: Option<String> },

    /// End the session
    #[command(alias = "exit", display_order = 32)]
    Quit,
}

/// Splits a session line into words. Single and double quotes group words;
/// a backslash escapes the next character outside single quotes.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) if c == q => quote = None,
            Some('"') if c == '\\' => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            Some(_) => current.push(c),
            None => match c {
                '"' | '\'' => {
                    quote = Some(c);
                    in_word = true;
                }
                '\\' => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                        in_word = true;
                    }
                }
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    if quote.is_some() {
        return Err("Unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Help text for the whole session, or for one command.
pub fn session_help(command: Option<&str>) -> String {
    let mut cmd = SessionLine::command();
    if let Some(name) = command {
        if let Some(sub) = cmd.find_subcommand_mut(name) {
            return sub.render_help().to_string();
        }
        return format!("Unknown command: {}\n", name);
    }

    let mut output = String::from("Commands:\n");
    for sub in cmd.get_subcommands() {
        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        output.push_str(&format!("  {:<12} {}\n", sub.get_name(), about));
    }
    output.push_str("\nSelectors: 1 (list index), . (active note), a UUID, or a title\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> SessionCommand {
        let words = split_line(line).unwrap();
        SessionLine::try_parse_from(words).unwrap().command
    }

    #[test]
    fn test_split_line_quotes() {
        assert_eq!(
            split_line(r#"edit . '<h1>Hi "there"</h1>' x"#).unwrap(),
            vec!["edit", ".", r#"<h1>Hi "there"</h1>"#, "x"]
        );
        assert_eq!(
            split_line(r#"resolve "About \"Linking\"""#).unwrap(),
            vec!["resolve", r#"About "Linking""#]
        );
        assert_eq!(split_line(r"a\ b  ''").unwrap(), vec!["a b", ""]);
        assert!(split_line("say 'oops").is_err());
        assert!(split_line("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_new_defaults_to_text() {
        assert!(matches!(parse("new"), SessionCommand::New { kind: NoteKind::Text }));
        assert!(matches!(parse("n sketch"), SessionCommand::New { kind: NoteKind::Sketch }));
        assert!(SessionLine::try_parse_from(["new", "video"]).is_err());
    }

    #[test]
    fn test_parse_edit_joins_words() {
        match parse("edit 2 <p>see [[About Linking]]</p>") {
            SessionCommand::Edit {
                selector,
                file,
                html,
            } => {
                assert_eq!(selector, "2");
                assert!(file.is_none());
                assert_eq!(html.join(" "), "<p>see [[About Linking]]</p>");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert!(matches!(parse("ls -k audio"), SessionCommand::List { kind: Some(NoteKind::Audio), .. }));
        assert!(matches!(parse("delete 1 2"), SessionCommand::Rm { .. }));
        assert!(matches!(parse("exit"), SessionCommand::Quit));
        assert!(matches!(parse("graph --json"), SessionCommand::Graph { json: true }));
    }

    #[test]
    fn test_session_help_lists_commands() {
        let help = session_help(None);
        assert!(help.contains("summarize"));
        assert!(help.contains("Selectors"));
        assert!(session_help(Some("record")).contains("transcribed"));
        assert!(session_help(Some("bogus")).contains("Unknown command"));
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["aether", "--no-welcome", "-v", "--config-dir", "/tmp/x"])
            .unwrap();
        assert!(cli.no_welcome);
        assert!(cli.verbose);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/x")));
        assert!(cli.script.is_none());
    }
}
