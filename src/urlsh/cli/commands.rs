use super::render::{
    print_messages, render_config, render_expanded, render_list, render_shortened, render_stats,
};
use super::setup::{Cli, Commands};
use clap::{CommandFactory, Parser};
use dialoguer::Confirm;
use directories::ProjectDirs;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, warn};
use urlsh::api::{ConfigAction, UrlshApi};
use urlsh::codegen::HashCodes;
use urlsh::config::UrlshConfig;
use urlsh::error::{Result, UrlshError};
use urlsh::logging::init_logging;
use urlsh::store::fs::FileStore;
use urlsh::title::NoTitles;

const HOME_ENV: &str = "URLSH_HOME";

struct AppContext {
    api: UrlshApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let mut ctx = init_context(&cli)?;

    match command {
        Commands::Shorten { url, code } => handle_shorten(&mut ctx, url, code.as_deref()),
        Commands::Expand { code } => handle_expand(&mut ctx, code),
        Commands::List => handle_list(&ctx),
        Commands::Stats => handle_stats(&ctx),
        Commands::Clean { yes } => handle_clean(&mut ctx, *yes),
        Commands::Delete { code, yes } => handle_delete(&mut ctx, code, *yes),
        Commands::Config { key, value } => handle_config(&ctx, key.clone(), value.clone()),
    }
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "urlsh", "urlsh")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            UrlshError::Config(format!(
                "could not determine a data directory; set {} or pass --dir",
                HOME_ENV
            ))
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = data_dir(cli)?;
    debug!("using data directory {}", dir.display());

    let config = UrlshConfig::load(&dir).unwrap_or_else(|e| {
        warn!("ignoring unreadable config: {}", e);
        UrlshConfig::default()
    });

    let mut api = UrlshApi::new(FileStore::in_dir(&dir), config, dir);
    if cli.hash {
        api = api.with_generator(HashCodes::new());
    }
    if cli.no_title {
        api = api.with_title_fetcher(NoTitles);
    }

    Ok(AppContext { api })
}

fn handle_shorten(ctx: &mut AppContext, url: &str, code: Option<&str>) -> Result<()> {
    let result = ctx.api.shorten(url, code)?;
    render_shortened(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_expand(ctx: &mut AppContext, code: &str) -> Result<()> {
    let result = ctx.api.expand(code)?;
    render_expanded(&result.affected_links);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    render_list(&result.listed_links);
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        render_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_clean(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let days = ctx.api.settings().cleanup_days;
    let stale = ctx.api.stale_links().len();

    if stale > 0
        && !confirm(
            &format!(
                "Remove {} unused URLs (0 clicks, older than {} days)?",
                stale, days
            ),
            yes,
        )?
    {
        println!("Cancelled");
        return Ok(());
    }

    let result = ctx.api.clean()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, code: &str, yes: bool) -> Result<()> {
    let link = ctx.api.lookup(code)?;

    if !confirm(&format!("Delete '{}' -> {}?", code, link.entry.url), yes)? {
        println!("Cancelled");
        return Ok(());
    }

    let result = ctx.api.delete(code)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        render_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

/// Ask a yes/no question on the terminal. `skip` answers yes without asking.
fn confirm(prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        warn!("stdin is not a terminal; pass --yes to confirm");
        return Ok(false);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| UrlshError::Io(std::io::Error::other(e.to_string())))
}
