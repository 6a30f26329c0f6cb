use anyhow::{bail, Result};
use std::env;
use std::path::PathBuf;

use expense_categorizer::{parse_category, Categorizer, Category, KeywordDictionary, Settings};

const USAGE: &str = "\
Usage: expense-categorizer [--dictionary <path>] <command> [--] [args...]

Commands:
  classify [--json] <text...>   Categorize an expense description
  categories                    List categories in priority order
  keywords <category>           List the keywords for a category";

/// Parsed command line
struct Args {
    dictionary: Option<PathBuf>,
    json: bool,
    positional: Vec<String>,
}

/// Flags are recognized until the description text starts (or after `--`);
/// from then on every token belongs to the text.
fn parse_args(raw: Vec<String>) -> Result<Args> {
    let mut args = Args {
        dictionary: None,
        json: false,
        positional: Vec::new(),
    };

    let mut iter = raw.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--" => {
                args.positional.extend(iter.by_ref());
                break;
            }
            "--dictionary" => match iter.next() {
                Some(path) => args.dictionary = Some(PathBuf::from(path)),
                None => bail!("--dictionary requires a path"),
            },
            "--json" => args.json = true,
            _ => {
                args.positional.push(arg);
                // Command plus first text token: the rest is description
                if args.positional.len() >= 2 {
                    args.positional.extend(iter.by_ref());
                    break;
                }
            }
        }
    }

    Ok(args)
}

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ {:#}", e);
        eprintln!("\n{}", USAGE);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = parse_args(env::args().skip(1).collect())?;

    let mut settings = Settings::load()?;
    if let Some(path) = &args.dictionary {
        settings.dictionary_path = Some(path.clone());
    }
    expense_categorizer::init_with_filter(&settings.log_filter);

    let dictionary = settings.dictionary()?;

    let Some((command, rest)) = args.positional.split_first() else {
        bail!("missing command");
    };

    match command.as_str() {
        "classify" => run_classify(&dictionary, &rest.join(" "), args.json),
        "categories" => run_categories(&dictionary),
        "keywords" => match rest.first() {
            Some(name) => run_keywords(&dictionary, name),
            None => bail!("keywords requires a category"),
        },
        other => bail!("unknown command: {}", other),
    }
}

fn run_classify(dictionary: &KeywordDictionary, text: &str, json: bool) -> Result<()> {
    let result = Categorizer::new(dictionary).classify(text);

    if json {
        println!("{}", result.to_json());
        return Ok(());
    }

    println!(
        "{}  {} ({}) - confidence {:.2}",
        result.category.icon(),
        result.category,
        result.category.label(),
        result.confidence
    );
    if let Some(keyword) = &result.matched_keyword {
        println!("   matched keyword: {:?}", keyword);
    }

    Ok(())
}

fn run_categories(dictionary: &KeywordDictionary) -> Result<()> {
    for category in Category::ALL {
        println!(
            "{}  {:<14} {:<22} {}  ({} keywords)",
            category.icon(),
            category.as_str(),
            category.label(),
            category.color(),
            dictionary.keywords_for(category).len()
        );
    }
    Ok(())
}

fn run_keywords(dictionary: &KeywordDictionary, name: &str) -> Result<()> {
    let category = parse_category(name);
    let keywords = dictionary.keywords_for(category);

    if keywords.is_empty() {
        println!("{} has no keywords (fallback category)", category);
        return Ok(());
    }

    println!("{} ({}):", category, category.label());
    for keyword in keywords {
        println!("  - {}", keyword);
    }
    Ok(())
}
