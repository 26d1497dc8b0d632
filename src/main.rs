// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Command-line interface for the repocard binary.
//!
//! `fetch` renders a card from live GitHub data, `render` renders one offline
//! from a JSON record, and `themes` lists the built-in palettes. Logs go to
//! stderr so `--stdout` output can be piped directly.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};

use chrono::Utc;
use clap::{ArgAction, Args, Parser, Subcommand};
use repocard::{
    CardSettings, Error, RenderOptions, RepositoryRecord, StdRandom,
    artifact::{CardManifest, card_slug, write_card_assets},
    cache::cache_control,
    compose_card, fetch, load_options, render_error_card,
    theme::theme_names,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Command line interface for rendering repository cards.
#[derive(Debug, Parser,)]
#[command(name = "repocard", version, about = "Render GitHub repository cards as SVG")]
struct Cli
{
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Fetch a repository from GitHub and render its card.
    Fetch(FetchArgs,),
    /// Render a card from a repository record JSON file.
    Render(RenderArgs,),
    /// List built-in theme names.
    Themes,
}

#[derive(Debug, Args,)]
struct FetchArgs
{
    /// Repository to render, as `owner/name`.
    #[arg(long = "repo", value_name = "OWNER/NAME")]
    repo: String,

    /// GitHub token used for the GraphQL API.
    #[arg(long = "token", env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Args,)]
struct RenderArgs
{
    /// Path to a repository record in JSON.
    #[arg(long = "input", value_name = "PATH")]
    input: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

/// Options shared by every rendering command.
#[derive(Debug, Args, Default,)]
struct OutputArgs
{
    /// YAML document with render options.
    #[arg(long = "options", value_name = "PATH")]
    options: Option<PathBuf,>,

    /// Theme name overriding the options document.
    #[arg(long = "theme", value_name = "NAME")]
    theme: Option<String,>,

    /// Animation style overriding the options document.
    #[arg(long = "animation-style", value_name = "STYLE")]
    animation_style: Option<String,>,

    /// Directory that will receive the SVG and manifest artifacts.
    #[arg(long = "output", value_name = "DIR", default_value = "cards")]
    output: PathBuf,

    /// Print the SVG to stdout instead of writing artifacts.
    #[arg(long = "stdout", action = ArgAction::SetTrue)]
    stdout: bool,

    /// Requested cache lifetime, clamped to between four hours and one day.
    #[arg(long = "cache-seconds", value_name = "SECONDS")]
    cache_seconds: Option<u64,>,
}

impl OutputArgs
{
    fn render_options(&self,) -> Result<RenderOptions, Error,>
    {
        let mut options = match self.options.as_deref() {
            Some(path,) => load_options(path,)?,
            None => RenderOptions::default(),
        };
        if let Some(theme,) = &self.theme {
            options.theme = theme.clone();
        }
        if let Some(style,) = &self.animation_style {
            options.animation_style = style.clone();
        }
        Ok(options,)
    }
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main()
{
    init_tracing();

    if let Err(error,) = run(Cli::parse(),).await {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

fn init_tracing()
{
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info",),),)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr,),)
        .init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates option loading, fetch, and artifact errors.
async fn run(cli: Cli,) -> Result<(), Error,>
{
    match cli.command {
        Command::Fetch(args,) => run_fetch(args,).await,
        Command::Render(args,) => run_render(&args,),
        Command::Themes => write_themes(&mut io::stdout().lock(),),
    }
}

async fn run_fetch(args: FetchArgs,) -> Result<(), Error,>
{
    let options = args.output.render_options()?;
    let (owner, name,) = fetch::parse_slug(&args.repo,)?;
    let slug = slug_for(&args.repo,)?;

    let octocrab = fetch::client(&args.token,)?;
    match fetch::fetch_repository(&octocrab, owner, name,).await {
        Ok(record,) => emit_card(&record, &options, &slug, &args.output,),
        Err(error,) => {
            let message = error.to_string();
            warn!(repository = %args.repo, %message, "fetch failed, writing error card");
            let svg = render_error_card(&message, Some(&format!("Repository: {}", args.repo),),);
            let manifest = CardManifest {
                repository:      args.repo.clone(),
                width:           576.5,
                height:          120.0,
                theme:           options.theme.clone(),
                animation_style: "none".to_owned(),
                cache_control:   cache_control(args.output.cache_seconds,),
                error:           Some(message,),
            };
            emit_svg(&svg, &manifest, &slug, &args.output,)?;
            Err(error.into(),)
        }
    }
}

fn run_render(args: &RenderArgs,) -> Result<(), Error,>
{
    let options = args.output.render_options()?;
    let record = RepositoryRecord::load(&args.input,)?;
    let identity =
        if record.name_with_owner.is_empty() { record.name.as_str() } else { record.name_with_owner.as_str() };
    let slug = slug_for(identity,)?;
    emit_card(&record, &options, &slug, &args.output,)
}

fn slug_for(identity: &str,) -> Result<String, Error,>
{
    card_slug(identity,)
        .ok_or_else(|| Error::validation(format!("cannot derive a file name from '{identity}'"),),)
}

fn emit_card(
    record: &RepositoryRecord,
    options: &RenderOptions,
    slug: &str,
    output: &OutputArgs,
) -> Result<(), Error,>
{
    let settings: CardSettings = options.resolve();
    let card = compose_card(record, &settings, Utc::now(), &mut StdRandom::from_entropy(),);
    info!(repository = %record.name, height = card.height, "rendered card");

    let manifest = CardManifest {
        repository:      record.display_name(true,).to_owned(),
        width:           card.width,
        height:          card.height,
        theme:           options.theme.clone(),
        animation_style: settings.animation.style.name().to_owned(),
        cache_control:   cache_control(output.cache_seconds,),
        error:           None,
    };
    emit_svg(&card.svg, &manifest, slug, output,)
}

fn emit_svg(svg: &str, manifest: &CardManifest, slug: &str, output: &OutputArgs,) -> Result<(), Error,>
{
    if output.stdout {
        return write_stdout(&mut io::stdout().lock(), svg,);
    }
    write_card_assets(&output.output, slug, svg, manifest,)?;
    Ok((),)
}

fn write_stdout<W: Write,>(writer: &mut W, svg: &str,) -> Result<(), Error,>
{
    writeln!(writer, "{svg}").map_err(|source| repocard::card_io_error(Path::new("<stdout>",), source,),)
}

fn write_themes<W: Write,>(writer: &mut W,) -> Result<(), Error,>
{
    for name in theme_names() {
        writeln!(writer, "{name}")
            .map_err(|source| repocard::card_io_error(Path::new("<stdout>",), source,),)?;
    }
    Ok((),)
}
