use super::local::{audio_mime_type, ExtractiveSummarizer, TextTrackTranscriber};
use super::print::{
    print_config, print_full_notes, print_graph_summary, print_messages, print_notes,
};
use super::render::MermaidRenderer;
use super::setup::{session_help, split_line, Cli, SessionCommand, SessionLine};
use aether::api::{AetherApi, ConfigAction, NoteFilter};
use aether::collab::{ensure_ready, AudioClip, Collaborators, GraphRenderer};
use aether::commands::sketch::{encode_data_url, PNG_MIME};
use aether::config::AetherConfig;
use aether::error::{AetherError, Result};
use aether::model::NoteKind;
use aether::store::memory::InMemoryStore;
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::{Path, PathBuf};

const PROMPT: &str = "aether> ";

struct AppContext {
    api: AetherApi<InMemoryStore>,
    renderer: MermaidRenderer,
}

enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    let interactive = cli.script.is_none() && io::stdin().is_terminal();
    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    if interactive {
        println!("{}", "AetherNotes session. Type `help` for commands.".dimmed());
        prompt()?;
    }

    for line in input.lines() {
        let line = line?;
        match handle_line(&mut ctx, &line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => eprintln!("{} {}", "Error:".red(), e),
        }
        if interactive {
            prompt()?;
        }
    }

    // Requests still in flight are applied before the session ends
    if !ctx.api.pending_jobs().is_empty() {
        let result = ctx.api.wait()?;
        print_messages(&result.messages);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "aether", "aether")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| AetherError::Config("Could not determine config dir".into()))?,
    };

    let config = AetherConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!("ignoring config in {}: {}", config_dir.display(), e);
        AetherConfig::default()
    });
    debug!("session config: {:?}", config);

    let store = InMemoryStore::new().with_link_dedup(config.dedup_links);
    let collaborators = Collaborators::new(
        Box::new(TextTrackTranscriber),
        Box::new(ExtractiveSummarizer::default()),
    );
    let mut api = AetherApi::new(store, collaborators).with_config_dir(config_dir);

    if config.seed_welcome && !cli.no_welcome {
        api.seed_welcome()?;
    }

    Ok(AppContext {
        api,
        renderer: MermaidRenderer::new(config.graph_direction),
    })
}

fn prompt() -> Result<()> {
    print!("{}", PROMPT);
    io::stdout().flush()?;
    Ok(())
}

fn handle_line(ctx: &mut AppContext, line: &str) -> Result<Flow> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Flow::Continue);
    }

    let words = split_line(line).map_err(AetherError::Api)?;
    let command = match SessionLine::try_parse_from(words) {
        Ok(parsed) => parsed.command,
        Err(e) => {
            // clap prints help to stdout and usage errors to stderr
            e.print()?;
            return Ok(Flow::Continue);
        }
    };

    match command {
        SessionCommand::New { kind } => handle_new(ctx, kind),
        SessionCommand::List { kind, search } => handle_list(ctx, kind, search),
        SessionCommand::View { selectors } => handle_view(ctx, selectors),
        SessionCommand::Select { selector } => handle_select(ctx, Some(&selector)),
        SessionCommand::Deselect => handle_select(ctx, None),
        SessionCommand::Edit {
            selector,
            file,
            html,
        } => handle_edit(ctx, &selector, file, html),
        SessionCommand::Sketch { selector, file } => handle_sketch(ctx, &selector, &file),
        SessionCommand::Record { selector, file } => handle_record(ctx, &selector, &file),
        SessionCommand::Summarize { selector } => handle_summarize(ctx, &selector),
        SessionCommand::Wait => handle_wait(ctx),
        SessionCommand::Rm { selectors } => handle_delete(ctx, selectors),
        SessionCommand::Graph { json } => handle_graph(ctx, json),
        SessionCommand::Resolve { title } => handle_resolve(ctx, title),
        SessionCommand::Config { key, value } => handle_config(ctx, key, value),
        SessionCommand::Help { command } => {
            print!("{}", session_help(command.as_deref()));
            Ok(())
        }
        SessionCommand::Quit => return Ok(Flow::Quit),
    }?;

    Ok(Flow::Continue)
}

fn handle_new(ctx: &mut AppContext, kind: NoteKind) -> Result<()> {
    let result = ctx.api.create_note(kind);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, kind: Option<NoteKind>, search: Option<String>) -> Result<()> {
    let filter = NoteFilter {
        kind,
        search_term: search,
    };
    let result = ctx.api.list_notes(&filter);
    print_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let selectors = if selectors.is_empty() {
        vec![".".to_string()]
    } else {
        selectors
    };
    let result = ctx.api.view_notes(&selectors)?;
    print_full_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_select(ctx: &mut AppContext, selector: Option<&str>) -> Result<()> {
    let result = ctx.api.select_note(selector)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    selector: &str,
    file: Option<PathBuf>,
    html: Vec<String>,
) -> Result<()> {
    let html = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => html.join(" "),
    };
    if html.trim().is_empty() {
        return Err(AetherError::Api("Nothing to save: give HTML or --file".into()));
    }

    let result = ctx.api.edit_text(selector, html)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_sketch(ctx: &mut AppContext, selector: &str, file: &Path) -> Result<()> {
    let bytes = std::fs::read(file)?;
    let result = ctx
        .api
        .save_sketch(selector, encode_data_url(PNG_MIME, &bytes))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_record(ctx: &mut AppContext, selector: &str, file: &Path) -> Result<()> {
    let clip = AudioClip::new(audio_mime_type(file), std::fs::read(file)?);
    let result = ctx.api.request_transcription(selector, clip)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_summarize(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let result = ctx.api.request_summary(selector)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_wait(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.wait()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_notes(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_graph(ctx: &mut AppContext, json: bool) -> Result<()> {
    let result = ctx.api.graph();
    let Some(graph) = &result.graph else {
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(graph)?);
        return Ok(());
    }

    ensure_ready(&ctx.renderer)?;
    let definition = ctx
        .renderer
        .render(graph)
        .map_err(|e| AetherError::Api(format!("Error rendering graph: {}", e)))?;
    print!("{}", definition);
    println!();
    print_graph_summary(graph);
    print_messages(&result.messages);
    Ok(())
}

fn handle_resolve(ctx: &mut AppContext, title: Vec<String>) -> Result<()> {
    let result = ctx.api.resolve_title(&title.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
