// src/cli.rs
//
// Terminal front end over the same loader / filter / reference pipeline as the GUI.
// A failed checklist load is fatal here; reference failures print their pane text.

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};

use crate::{
    checklist::ChecklistDocument,
    config::{consts::CHECKLIST_URL_ENV, options::AppOptions},
    core::Http,
    details::details_markup,
    filter::{self, CategorySelector},
    loader, markup,
    reference::{self, fetch_reference},
};

#[derive(Debug, Parser)]
#[command(name = "wstg", version, about = "Browse the OWASP WSTG checklist from the terminal")]
pub struct Cli {
    /// Checklist JSON source
    #[arg(long, global = true, env = CHECKLIST_URL_ENV)]
    pub checklist_url: Option<String>,

    /// Debug logging (RUST_LOG still wins)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print "<id> - <name>" for every matching test
    List {
        /// Exact category name; all categories when omitted
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive substring of the test id or name
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Print category names
    Categories,
    /// Print a test's details and the guidance scraped from its reference page
    Show {
        /// Test id, e.g. WSTG-INFO-01
        id: String,

        /// Skip the reference page download
        #[arg(long)]
        no_reference: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let options = AppOptions::default().with_checklist_url(cli.checklist_url);
    let http = Http::new(options.timeout).wrap_err("could not set up HTTP client")?;

    let doc = loader::fetch_checklist(&http, &options.checklist_url)
        .wrap_err_with(|| format!("could not load checklist from {}", options.checklist_url))?;

    match cli.command {
        Command::List { category, search } => list(&doc, category, &search),
        Command::Categories => {
            for name in doc.category_names() {
                println!("{name}");
            }
            Ok(())
        }
        Command::Show { id, no_reference } => show(&http, &doc, &id, no_reference),
    }
}

fn list(doc: &ChecklistDocument, category: Option<String>, search: &str) -> Result<()> {
    let selector = match category {
        Some(name) if doc.category(&name).is_none() => {
            return Err(eyre!("unknown category `{name}`"));
        }
        Some(name) => CategorySelector::Named(name),
        None => CategorySelector::All,
    };

    for entry in filter::filter(doc, &selector, search) {
        println!("{}", entry.label());
    }
    Ok(())
}

fn show(http: &Http, doc: &ChecklistDocument, id: &str, no_reference: bool) -> Result<()> {
    let entry = filter::find_by_id(doc, id).ok_or_else(|| eyre!("no test with id `{id}`"))?;

    println!("{}", entry.label());
    println!();
    println!("{}", markup::to_plain_text(&markup::parse(&details_markup(&entry))));

    if !no_reference {
        let result = fetch_reference(http, entry.test.reference_url());
        let text = markup::to_plain_text(&markup::parse(&reference::render(&result)));
        println!();
        println!("{text}");
    }
    Ok(())
}
