use log::{error, info};
use redgreen::{
    resolve,
    resolver::{Builds, Commits},
    run_serve, Config, Page, Result, ServeOptions, Status,
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use structopt::StructOpt;

#[derive(StructOpt)]
/// Show whether the latest CI build is green, and which commits may have broken it if not
struct Options {
    #[structopt(short, long, parse(from_os_str))]
    /// config file to use, the built-in defaults are used when omitted
    config: Option<PathBuf>,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    #[structopt(name = "status")]
    /// Print the current build status
    Status(StatusOptions),

    #[structopt(name = "render")]
    /// Render the status page to a file
    Render(RenderOptions),

    #[structopt(name = "serve")]
    /// Serve the status page over http
    Serve(ServeOptions),
}

#[derive(StructOpt)]
struct StatusOptions {
    #[structopt(long)]
    /// print the status as json
    json: bool,
}

#[derive(StructOpt)]
struct RenderOptions {
    #[structopt(short, long, parse(from_os_str))]
    /// file to write the page to, stdout when omitted
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let opts = Options::from_args();

    // set up logging, allowing info level logging by default
    env_logger::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(opts).await {
        error!("{:?}", e);
        std::process::exit(1);
    }
}

async fn run(opts: Options) -> Result<()> {
    let config = match &opts.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    info!(
        "watching definition {} on {} of {}",
        config.builds.definition, config.builds.branch, config.builds.base_url
    );

    match opts.command {
        Command::Status(options) => {
            let status = current_status(&config).await?;
            if options.json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                print_summary(&status);
            }
            Ok(())
        }
        Command::Render(options) => {
            let page = Page::new(&config.page)?;
            let status = current_status(&config).await?;
            let html = page.render(Some(&status))?;
            match &options.output {
                Some(path) => write_page(path, &html),
                None => {
                    print!("{}", html);
                    Ok(())
                }
            }
        }
        Command::Serve(options) => run_serve(config, &options).await,
    }
}

async fn current_status(config: &Config) -> Result<Status> {
    let builds = Builds::new(&config.builds)?;
    let commits = Commits::new(&config.github)?;
    resolve(&builds, &commits).await
}

fn print_summary(status: &Status) {
    if status.is_green() {
        println!("Build is green: {}", status.url());
        return;
    }

    println!("Build is broken: {}", status.url());
    if let Some(commits) = status.commits() {
        println!("Potential first commits to break the build:");
        for commit in commits {
            println!(
                "  {} {} ({})",
                commit.sha.get(..7).unwrap_or(&commit.sha),
                commit.message,
                commit.author
            );
        }
    }
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html)?;
    info!("wrote {}", path.display());
    Ok(())
}
