use clap::{Parser, Subcommand};
use log::{debug, error};
use std::process::ExitCode;

use salvage_lookup::i18n::{self, NameKind};
use salvage_lookup::{
    parse_recycles, ItemFilter, Language, LookupConfig, LookupError, LookupSession,
    MaterialLookup, Rarity, Resolution, SortPolicy,
};

#[derive(Parser, Debug)]
#[command(name = "salvage-lookup", version, about = "Find which items recycle into the materials you need")]
struct Cli {
    /// Catalog URL or path (overrides config)
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Display language: en or de (overrides saved preference)
    #[arg(long, global = true)]
    lang: Option<Language>,

    /// State file for the saved selection and language
    #[arg(long, global = true)]
    state: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a recycles string and print the yields
    Parse { text: String },
    /// List every material in the catalog
    Materials,
    /// Show items that recycle into a material
    Lookup {
        /// Material name; resolved by prefix when not exact
        material: String,
        /// Target quantity
        #[arg(short, long)]
        quantity: Option<u32>,
        /// yield_desc, yield_desc_then_items_needed or catalog
        #[arg(long)]
        sort: Option<SortPolicy>,
    },
    /// Rank materials matching a partial name
    Suggest { query: String },
    /// List catalog items
    Items {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// common, uncommon, rare, epic, legendary or unknown
        #[arg(long)]
        rarity: Option<Rarity>,
    },
    /// Show or change the saved language
    Language { language: Option<Language> },
    /// Show the saved selection and its results
    Selection,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            let message = e.to_string();
            eprintln!(
                "{}",
                i18n::t("error", Language::from_env(), &[("error", message.as_str())])
            );
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), LookupError> {
    // Parsing needs no catalog
    if let Command::Parse { text } = &cli.command {
        for yield_ in parse_recycles(text) {
            println!("{}", yield_);
        }
        return Ok(());
    }

    let mut config = LookupConfig::load()?;
    if let Some(catalog) = cli.catalog {
        config.catalog.source = catalog;
    }
    if let Some(state) = cli.state {
        config.storage.path = state;
    }
    if let Some(lang) = cli.lang {
        config.i18n.language = Some(lang);
    }
    if let Command::Language { .. } = cli.command {
        // report and change the saved preference, not an override
        config.i18n.language = None;
    }
    debug!("Effective config: {:?}", config);

    let mut session = MaterialLookup::builder().config(&config).build().await?;

    match cli.command {
        Command::Parse { .. } => {}
        Command::Materials => {
            for material in session.materials() {
                println!("{}", session.display_name(material, NameKind::Material));
            }
        }
        Command::Lookup {
            material,
            quantity,
            sort,
        } => {
            if let Some(policy) = sort {
                session.set_sort_policy(policy);
            }
            if session.catalog().index().contains(&material) {
                session.select_material(material);
            } else {
                match session.resolve_now(&material) {
                    Resolution::Selected(_) => {}
                    Resolution::TooShort | Resolution::Ambiguous(_) => {
                        print_suggestions(&session, &material);
                        return Ok(());
                    }
                }
            }
            if let Some(quantity) = quantity {
                session.set_quantity(quantity);
            }
            print_results(&session);
        }
        Command::Suggest { query } => print_suggestions(&session, &query),
        Command::Items {
            search,
            category,
            rarity,
        } => {
            let mut filter = ItemFilter::new();
            if let Some(search) = search {
                filter = filter.search(search);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(rarity) = rarity {
                filter = filter.rarity(rarity);
            }
            for item in session.items(&filter) {
                println!(
                    "{} [{}] {} | {}",
                    session.display_name(&item.name, NameKind::Item),
                    session.display_name(item.rarity.as_str(), NameKind::Rarity),
                    session.display_name(&item.category, NameKind::Category),
                    item.recycles
                );
            }
        }
        Command::Language { language } => {
            if let Some(language) = language {
                session.set_language(language);
            }
            println!("{}", session.language());
        }
        Command::Selection => print_results(&session),
    }

    Ok(())
}

fn print_suggestions(session: &LookupSession, query: &str) {
    let matches = session.suggestions(query);
    if matches.is_empty() {
        println!("{}", session.message("noItemsFound", &[("material", query)]));
        return;
    }
    println!("{}", session.message("didYouMean", &[]));
    for m in matches {
        println!("  {}", m.display);
    }
}

fn print_results(session: &LookupSession) {
    let selection = session.selection();
    if selection.is_empty() {
        println!("{}", session.message("selectMaterial", &[]));
        return;
    }

    let material = session.display_name(&selection.material, NameKind::Material);
    let results = session.results();
    if results.is_empty() {
        println!("{}", session.message("noItemsFound", &[("material", material)]));
        return;
    }

    println!("{}", session.message("itemsProducing", &[("material", material)]));
    let total = selection.target().to_string();
    for row in results {
        let quantity = row.quantity.to_string();
        let count = row.items_needed.to_string();
        println!(
            "  {:<32} {:<12} {}  ({})",
            session.display_name(&row.item.name, NameKind::Item),
            session.display_name(row.item.rarity.as_str(), NameKind::Rarity),
            session.message(
                "perItem",
                &[("quantity", quantity.as_str()), ("material", material)]
            ),
            session.message(
                "itemsNeeded",
                &[
                    ("count", count.as_str()),
                    ("total", total.as_str()),
                    ("material", material)
                ]
            ),
        );
    }
}
