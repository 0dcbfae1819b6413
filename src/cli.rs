// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::DomainKind;
use crate::gui::router;
use crate::pipeline::Selection;
use crate::progress::Progress;
use crate::render::{ResultsView, NO_LINK_MSG, NO_RESULTS_MSG};
use crate::{api, cart, store};

pub struct Params {
    pub page: DomainKind,
    pub picks: Vec<String>,
    pub data_dir: PathBuf,
    pub refresh: bool,
    pub search: Option<String>,
    pub employer: Option<String>,
    pub show_cart: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            page: DomainKind::Regions,
            picks: Vec::new(),
            data_dir: PathBuf::from(crate::config::consts::DATA_DIR),
            refresh: false,
            search: None,
            employer: None,
            show_cart: false,
        }
    }
}

/// Prints one line per fetched source file.
struct CliProgress;
impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Fetching {total} source file(s)…");
    }
    fn item_done(&mut self, source_name: &str) {
        eprintln!("  fetched {source_name}");
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::default();
    parse_cli(&mut params)?;

    if let Some(q) = &params.search {
        let v = api::search_employers(q)?;
        println!("{}", serde_json::to_string_pretty(&v)?);
        return Ok(());
    }
    if let Some(name) = &params.employer {
        let v = api::employer_results(name)?;
        println!("{}", serde_json::to_string_pretty(&v)?);
        return Ok(());
    }
    if params.show_cart {
        let items = cart::Cart::default_location().items();
        for line in &items {
            println!("{} x{} = ${:.2}", line.name, line.qty, line.total);
        }
        println!("Total: ${:.2} ({} items)", cart::grand_total(&items), cart::total_qty(&items));
        return Ok(());
    }

    browse(&params)
}

/// Drive the cascade from the command line: bind `--pick` values in chain
/// order, then print either the next stage's options or the final results.
fn browse(params: &Params) -> Result<(), Box<dyn std::error::Error>> {
    let Some(page) = router::directory_page(params.page) else {
        return Err(format!("No directory page for {:?}", params.page).into());
    };
    let chain = page.chain;

    let mut prog = CliProgress;
    let records = store::load_or_fetch(params.page, &params.data_dir, params.refresh, Some(&mut prog))?;

    if params.picks.len() > chain.len() {
        return Err(format!(
            "Too many --pick values: {} facets in this chain",
            chain.len()
        ).into());
    }

    let mut sel = Selection::for_chain(chain);
    for (stage, value) in params.picks.iter().enumerate() {
        let options = chain.options(&records, &sel, stage);
        if !options.iter().any(|o| o == value) {
            return Err(format!(
                "No such {} option: {} (have: {})",
                chain.facets[stage].label,
                value,
                options.join(", ")
            ).into());
        }
        sel.set(stage, Some(value.clone()));
    }

    if sel.is_complete() {
        let listings = chain.results(&records, &sel)?;
        print_view(&ResultsView::build(chain, &sel, &listings));
    } else {
        let stage = sel.bound();
        let options = chain.options(&records, &sel, stage);
        println!("{} options:", chain.facets[stage].label);
        for o in &options {
            println!("  {o}");
        }
        if options.is_empty() {
            println!("  (none)");
        }
    }
    Ok(())
}

fn print_view(view: &ResultsView) {
    if view.is_empty() {
        println!("{NO_RESULTS_MSG}");
        return;
    }
    println!("Showing {} Employers", view.count);
    for (label, value) in &view.summary {
        println!("{label}: {value}");
    }
    println!();
    for entry in &view.entries {
        match &entry.href {
            Some(href) => println!("{} — {}", entry.name, href),
            None => println!("{}", entry.name),
        }
        if let Some(link) = &entry.contact {
            println!("  contact: {}", link.href);
        }
        if let Some(link) = &entry.careers {
            println!("  careers: {}", link.href);
        }
        if entry.href.is_none() && entry.contact.is_none() && entry.careers.is_none() {
            println!("  {NO_LINK_MSG}");
        }
    }
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--page" | "-p" => {
                let v = args.next().ok_or("Missing value for --page")?;
                params.page = match v.to_ascii_lowercase().as_str() {
                    "regions" => DomainKind::Regions,
                    "industries" => DomainKind::Industries,
                    "dateposted" | "date-posted" => DomainKind::DatePosted,
                    other => return Err(format!("Unknown page: {}", other).into()),
                };
            }
            "--pick" => {
                let v = args.next().ok_or("Missing value for --pick")?;
                params.picks.push(v);
            }
            "--data-dir" => {
                params.data_dir = PathBuf::from(args.next().ok_or("Missing data dir")?);
            }
            "--refresh" => params.refresh = true,
            "--search" => params.search = Some(args.next().ok_or("Missing search query")?),
            "--employer" => params.employer = Some(args.next().ok_or("Missing employer name")?),
            "--cart" => params.show_cart = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
