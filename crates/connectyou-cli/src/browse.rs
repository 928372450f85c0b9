//! Interactive browsing over stdin.
//!
//! Each plain line replaces the search box content and goes through the
//! debounced search controller. Loads run concurrently; the page discards
//! any result that a newer load has superseded.

use std::future::Future;

use connectyou_client::{GatewayError, LocalSource, StoreSource};
use connectyou_core::{AppConfig, CategoryFilter, Store};
use connectyou_views::{
    category_options, LoadOutcome, LoadTicket, MapProvider, SearchController, StoresPage,
};
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::{load_repository, remote_client, static_map};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BrowseInput {
    /// New search box content.
    Text(String),
    Submit,
    Clear,
    Category(CategoryFilter),
    ShowMap,
    ReloadMap,
    Help,
    Quit,
}

pub(crate) fn parse_browse_line(line: &str) -> BrowseInput {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        return BrowseInput::Text(line.trim_end_matches(['\r', '\n']).to_owned());
    };

    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(n, a)| (n, a.trim()));
    match name {
        "submit" | "s" => BrowseInput::Submit,
        "clear" | "c" => BrowseInput::Clear,
        "type" | "t" => BrowseInput::Category(arg.parse().unwrap_or_default()),
        "map" => BrowseInput::ShowMap,
        "reload" => BrowseInput::ReloadMap,
        "quit" | "q" | "exit" => BrowseInput::Quit,
        _ => BrowseInput::Help,
    }
}

fn help_text() -> String {
    let categories = category_options()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Type to search. Commands:\n  :submit  :clear  :type <{categories}>  :map  :reload  :quit\n"
    )
}

type LoadResult = (LoadTicket, Result<Vec<Store>, GatewayError>);

/// Starts a ticketed load that does not borrow the page.
fn start_load<S, P>(page: &mut StoresPage<S, P>) -> impl Future<Output = LoadResult>
where
    S: StoreSource + Clone,
    P: MapProvider,
{
    let ticket = page.begin_load();
    let source = page.source().clone();
    async move {
        let result = source.fetch_stores(ticket.query()).await;
        (ticket, result)
    }
}

pub(crate) async fn run_browse(
    config: &AppConfig,
    remote: bool,
    category: CategoryFilter,
) -> anyhow::Result<()> {
    let repository = load_repository(config)?;
    let map = static_map(config);
    if remote {
        let page = StoresPage::new(repository, remote_client(config)?, map);
        browse_loop(page, config, category).await
    } else {
        let source = LocalSource::new(repository.clone());
        browse_loop(StoresPage::new(repository, source, map), config, category).await
    }
}

async fn browse_loop<S, P>(
    mut page: StoresPage<S, P>,
    config: &AppConfig,
    category: CategoryFilter,
) -> anyhow::Result<()>
where
    S: StoreSource + Clone,
    P: MapProvider,
{
    let (mut search, mut emissions) = SearchController::new(config.search_debounce());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight = FuturesUnordered::new();

    print!("{}", help_text());
    page.set_category(category);
    in_flight.push(start_load(&mut page));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_browse_line(&line) {
                    BrowseInput::Text(text) => search.input(text),
                    BrowseInput::Submit => search.submit(),
                    BrowseInput::Clear => search.clear(),
                    BrowseInput::Category(category) => {
                        println!("category: {category}");
                        page.set_category(category);
                        in_flight.push(start_load(&mut page));
                    }
                    BrowseInput::ShowMap => print!("{}", page.map().render()),
                    BrowseInput::ReloadMap => {
                        page.reload_map();
                        print!("{}", page.map().render());
                    }
                    BrowseInput::Help => print!("{}", help_text()),
                    BrowseInput::Quit => break,
                }
            }
            Some(text) = emissions.recv() => {
                page.set_search_text(text);
                in_flight.push(start_load(&mut page));
            }
            Some((ticket, result)) = in_flight.next(), if !in_flight.is_empty() => {
                if page.finish_load(ticket, result) == LoadOutcome::Applied {
                    print!("{}", page.list().render());
                }
            }
        }
    }

    tracing::debug!(pending = in_flight.len(), "browse session ended");
    Ok(())
}
