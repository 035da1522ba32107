use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use breadcrumbs::{Breadcrumbs, TemplateSlot, TextTransform};
use breadcrumbs_config::Config;
use clap::{ArgAction, Parser, ValueEnum};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[command(
    name = "breadcrumbs",
    version,
    about = "Render a breadcrumb trail from a slash-separated path",
    long_about = None
)]
pub struct Cli {
    /// Path to decompose, e.g. /shoes/mens/casual/
    #[arg(value_name = "PATH")]
    path: String,

    /// Config file applied over ./.breadcrumbs.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Transform applied to each path segment
    #[arg(long, value_enum)]
    transform: Option<TransformArg>,

    /// Prepend a root breadcrumb with this text linking to "/"
    #[arg(long, value_name = "TEXT")]
    home: Option<String>,

    /// Outer wrapper template (must contain {breadcrumbs})
    #[arg(long, value_name = "TEMPLATE", allow_hyphen_values = true)]
    outer: Option<String>,

    /// Linked breadcrumb template (must contain {text} and {link})
    #[arg(long, value_name = "TEMPLATE", allow_hyphen_values = true)]
    item: Option<String>,

    /// Active breadcrumb template (must contain {breadcrumb})
    #[arg(long, value_name = "TEMPLATE", allow_hyphen_values = true)]
    active: Option<String>,

    /// Separator placed between breadcrumbs
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    separator: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TransformArg {
    Identity,
    Humanize,
    Uppercase,
    Lowercase,
}

impl From<TransformArg> for TextTransform {
    fn from(value: TransformArg) -> Self {
        match value {
            TransformArg::Identity => TextTransform::Identity,
            TransformArg::Humanize => TextTransform::Humanize,
            TransformArg::Uppercase => TextTransform::Uppercase,
            TransformArg::Lowercase => TextTransform::Lowercase,
        }
    }
}

/// Entry point for CLI execution. Returns the desired exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = env::current_dir().context("failed to resolve working directory")?;
    let config = Config::discover(&cwd, cli.config.as_deref())
        .context("failed to load breadcrumbs configuration")?;

    let rendered = render(&cli, &config)?;
    emit(&rendered)?;
    Ok(0)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // A logger may already be installed when embedded; keep the existing one.
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    );
}

fn render(cli: &Cli, config: &Config) -> Result<String> {
    let mut trail = config.breadcrumbs();
    apply_overrides(cli, &mut trail)?;

    if let Some(home) = &cli.home {
        trail.add(home.as_str(), Some("/"), None);
    }

    let transform = cli
        .transform
        .map(TextTransform::from)
        .unwrap_or(config.transform);
    log::debug!("decomposing {:?} with {transform} transform", cli.path);
    trail.add_from_path(&cli.path, |segment| transform.apply(segment));

    Ok(trail.render())
}

fn apply_overrides(cli: &Cli, trail: &mut Breadcrumbs) -> Result<()> {
    let overrides = [
        (TemplateSlot::Outer, &cli.outer),
        (TemplateSlot::Item, &cli.item),
        (TemplateSlot::Active, &cli.active),
        (TemplateSlot::Separator, &cli.separator),
    ];
    for (slot, value) in overrides {
        if let Some(html) = value {
            trail
                .set_template(slot, html.as_str())
                .with_context(|| format!("invalid --{slot} template"))?;
        }
    }
    Ok(())
}

fn emit(rendered: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match writeln!(handle, "{rendered}").and_then(|_| handle.flush()) {
        Ok(()) => Ok(()),
        Err(err) if should_ignore_pipe_error(&err) => Ok(()),
        Err(err) => Err(err).context("failed to write breadcrumbs to stdout"),
    }
}

fn should_ignore_pipe_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::WouldBlock
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("breadcrumbs").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn cli_transform_overrides_config() {
        let cli = parse(&["/mens-shoes/vans/", "--transform", "humanize", "--home", "Home"]);
        let rendered = render(&cli, &Config::default()).unwrap();
        assert!(rendered.contains(r#"<a href="/">Home</a>"#));
        assert!(rendered.contains(r#"<a href="/mens-shoes/">Mens Shoes</a>"#));
        assert!(rendered.contains(">Vans</span>"));
    }

    #[test]
    fn invalid_override_is_an_error() {
        let cli = parse(&["/a/", "--item", "{text}"]);
        let err = render(&cli, &Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "invalid --item template");
        assert!(format!("{err:#}").contains("{text},{link}"));
    }
}
