use std::env;

use anyhow::{anyhow, Context, Result};
use coursenav::courses::{load_or_default, workspace_root};
use coursenav::{LeafMode, NavRequest, Navigator};

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    let root = workspace_root()?;
    let config = load_or_default(&root)?;

    let navigator = Navigator::new(&config, root);
    let path = navigator.resolve(&args.into_request())?;
    println!("{}", path.display());

    Ok(())
}

struct CliArgs {
    category: String,
    mode: LeafMode,
    course: Option<String>,
    week: Option<String>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut category = None;
        let mut mode = None;
        let mut course = None;
        let mut week = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-c" => {
                    let value = args
                        .next()
                        .context("Expected a course identifier after -c")?;
                    course = Some(value);
                }
                "-w" => {
                    let value = args.next().context("Expected a week identifier after -w")?;
                    week = Some(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other if other.starts_with('-') => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
                positional if category.is_none() => {
                    category = Some(positional.to_string());
                }
                positional if mode.is_none() => {
                    mode = Some(parse_mode(positional)?);
                }
                other => {
                    return Err(anyhow!(
                        "Unexpected argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        let category =
            category.context("Expected a category alias. Run with --help for usage instructions.")?;
        Ok(Self {
            category,
            mode: mode.unwrap_or_default(),
            course,
            week,
        })
    }

    fn into_request(self) -> NavRequest {
        NavRequest {
            category: self.category,
            mode: self.mode,
            course: self.course,
            week: self.week,
        }
    }
}

fn parse_mode(value: &str) -> Result<LeafMode> {
    match value {
        "c" => Ok(LeafMode::Classwork),
        "h" => Ok(LeafMode::Homework),
        other => Err(anyhow!(
            "Invalid mode '{other}': expected 'c' (classwork) or 'h' (homework)."
        )),
    }
}

fn print_usage() {
    println!("cdl - resolve the directory of a course week");
    println!("Prints the resolved path; missing directories are created when");
    println!("an explicit identifier is given.");
    println!("Usage: cdl <category> [mode] [options]");
    println!("Arguments:");
    println!("  <category>   category alias from config.toml (defaults: p, a)");
    println!("  [mode]       'c' for classwork, 'h' for homework (default: h)");
    println!("Options:");
    println!("  -c <id>      course identifier; omitted: use the latest course");
    println!("  -w <id>      week identifier; omitted: use the latest week");
}
