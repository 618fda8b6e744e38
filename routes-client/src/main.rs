//! Line-oriented terminal session for the route planner.
//!
//! Thin shell over the controllers: each input line is dispatched as a
//! field edit, a candidate pick, or a find-routes action, and the
//! resulting view state is printed as plain text.

use tokio::io::{AsyncBufReadExt, BufReader};

use routes_client::api::{RoutesApi, RoutesClient, RoutesClientConfig};
use routes_client::format::{format_distance, provider_color, unique_providers};
use routes_client::route_query::{RouteQueryController, RouteSearchState};
use routes_client::search::{SearchController, SearchState};
use routes_client::selection::{Field, SelectionState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = RoutesClientConfig::from_env();
    println!("Route planner (service: {})", config.base_url);

    let client = RoutesClient::new(config).expect("Failed to create routes client");

    if let Err(e) = client.health().await {
        eprintln!("Warning: routes service health check failed: {e}");
    }

    let selection = SelectionState::new();
    let origin = SearchController::new(client.clone(), Field::Origin, selection.clone());
    let destination = SearchController::new(client.clone(), Field::Destination, selection.clone());
    let route_query = RouteQueryController::new(client, selection);

    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "from" => edit_field(&origin, rest).await,
            "to" => edit_field(&destination, rest).await,
            "pick" => match rest.split_once(' ') {
                Some(("from", n)) => pick(&origin, n).await,
                Some(("to", n)) => pick(&destination, n).await,
                _ => println!("usage: pick from|to <number>"),
            },
            "find" => find(&route_query).await,
            "state" => print_session(&origin, &destination, &route_query).await,
            "help" => print_help(),
            "quit" | "exit" => break,
            "" => {}
            other => println!("unknown command: {other} (try 'help')"),
        }
    }
}

/// Feed an edited field value to its controller and show the candidates.
async fn edit_field<C: RoutesApi>(ctrl: &SearchController<C>, text: &str) {
    if let Some(pending) = ctrl.set_query(text).await {
        let worker = ctrl.clone();
        let lookup = tokio::spawn(async move { worker.resolve(pending).await });
        let _ = lookup.await;
    }
    print_options(&ctrl.state().await);
}

/// Select the n-th (1-based) candidate of a field.
async fn pick<C: RoutesApi>(ctrl: &SearchController<C>, n: &str) {
    let Ok(index) = n.trim().parse::<usize>() else {
        println!("usage: pick from|to <number>");
        return;
    };

    let state = ctrl.state().await;
    let Some(place) = state.options.get(index.wrapping_sub(1)) else {
        println!("no candidate {index}");
        return;
    };

    ctrl.select(place).await;
    println!("Selected: {}", ctrl.state().await.query);
}

/// Run the find-routes action and print the outcome.
async fn find<C: RoutesApi>(ctrl: &RouteQueryController<C>) {
    if let Some(pending) = ctrl.submit().await {
        println!("Finding routes...");
        ctrl.resolve(pending).await;
    }

    match ctrl.state().await {
        RouteSearchState::Success(routes) => print_routes(&routes),
        state => {
            if let Some(message) = state.message() {
                println!("{message}");
            }
        }
    }
}

fn print_options(state: &SearchState) {
    if !state.visible {
        if state.query.chars().count() < 2 {
            println!("(keep typing, two characters minimum)");
        } else {
            println!("No suggestions");
        }
        return;
    }

    for (i, place) in state.options.iter().enumerate() {
        let providers = if place.providers.is_empty() {
            "Unknown".to_string()
        } else {
            place.providers.join(", ")
        };
        println!(
            "  {}. {} ({}) - {}",
            i + 1,
            place.name,
            place.country_code,
            providers
        );
    }
}

fn print_routes(routes: &[routes_client::api::Route]) {
    println!(
        "Found {} route{}",
        routes.len(),
        if routes.len() == 1 { "" } else { "s" }
    );

    for (i, route) in routes.iter().enumerate() {
        let providers: Vec<String> = unique_providers(&route.segments)
            .into_iter()
            .map(|p| format!("{p} [{}]", provider_color(p)))
            .collect();
        println!(
            "Route {}: {} via {}",
            i + 1,
            format_distance(route.total_distance),
            providers.join(", ")
        );

        for segment in &route.segments {
            println!(
                "  {} -> {}  {}  ({})",
                segment.origin_name,
                segment.destination_name,
                format_distance(segment.distance),
                segment.provider
            );
        }
    }
}

async fn print_session<C: RoutesApi>(
    origin: &SearchController<C>,
    destination: &SearchController<C>,
    route_query: &RouteQueryController<C>,
) {
    let from = origin.state().await;
    let to = destination.state().await;
    println!("from: {:?} ({} candidates)", from.query, from.options.len());
    println!("to:   {:?} ({} candidates)", to.query, to.options.len());
    println!(
        "find enabled: {}",
        if route_query.can_submit().await {
            "yes"
        } else {
            "no"
        }
    );
    println!("routes: {:?}", route_query.state().await);
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  from <text>        edit the origin field");
    println!("  to <text>          edit the destination field");
    println!("  pick from|to <n>   select candidate n");
    println!("  find               search routes between the selections");
    println!("  state              show the session state");
    println!("  quit               leave");
    println!();
}
