//! Request handlers. Every response is plain text with status 200.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::Uri,
};

use crate::http::server::AppState;
use crate::query::{ListQuery, Lookup};
use crate::render::{PokemonList, TypeNames, GET_PLACEHOLDER};

/// `GET /list`: pokemon filtered by `type` and sorted by `sortby`.
pub async fn list_pokemon(State(state): State<AppState>, uri: Uri) -> String {
    tracing::info!(url = %uri, "/list");

    let query = ListQuery::from_query_string(uri.query());
    let records = state.pokedex.list(&query);
    tracing::debug!(
        types = ?query.types,
        sort_by = ?query.sort_by,
        matched = records.len(),
        "Pokemon list built"
    );
    PokemonList(&records).to_string()
}

/// `GET /list/types`: the name of every loaded type.
pub async fn list_types(State(state): State<AppState>, uri: Uri) -> String {
    tracing::info!(url = %uri, "/list/types");
    TypeNames(state.pokedex.types()).to_string()
}

/// `GET /get`: static acknowledgement, query ignored.
pub async fn get_placeholder(uri: Uri) -> &'static str {
    tracing::info!(url = %uri, "/get");
    GET_PLACEHOLDER
}

/// `GET /{name}`: look the name up as a type, pokemon and move.
///
/// A path that does not decode to UTF-8 names nothing and gets the
/// not-found text like any other miss.
pub async fn lookup_entity(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> String {
    match name {
        Ok(Path(name)) => render_lookup(&state, name.trim_start_matches('/')),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Undecodable lookup path");
            Lookup::default().to_string()
        }
    }
}

/// `GET /`: an empty name, which never matches.
pub async fn lookup_root(State(state): State<AppState>) -> String {
    render_lookup(&state, "")
}

fn render_lookup(state: &AppState, name: &str) -> String {
    let lookup = state.pokedex.lookup(name);
    match lookup.last_kind() {
        Some(kind) => tracing::debug!(name, kind, matches = lookup.match_count(), "Lookup hit"),
        None => tracing::debug!(name, "Lookup miss"),
    }
    lookup.to_string()
}
