//! Scope-dependent query strategies run for each fired search request

use std::collections::HashSet;

use futures::future::try_join_all;

use crate::config::SearchConfig;
use super::catalog::{self, AlbumSummary, CatalogItem, CatalogProvider};
use super::content::{self, ResultGroup};
use super::types::{SearchRequest, SearchScope};

/// Completed query for one request token
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub token: u64,
    pub groups: Vec<ResultGroup>,
    pub failed: bool,
}

/// Split `term` on whitespace and drop fragments shorter than
/// `min_fragment_len` characters.
pub fn term_fragments(term: &str, min_fragment_len: usize) -> Vec<&str> {
    term.split_whitespace()
        .filter(|fragment| fragment.chars().count() >= min_fragment_len)
        .collect()
}

/// Cleaned term, or `None` when nothing searchable is left
pub fn clean_term(term: &str, min_fragment_len: usize) -> Option<String> {
    let cleaned = term_fragments(term, min_fragment_len).join(" ");
    if cleaned.chars().count() < 2 {
        None
    } else {
        Some(cleaned)
    }
}

/// Run one request against the catalog. Provider errors fail soft into an
/// empty, failed outcome.
pub async fn execute(
    provider: &dyn CatalogProvider,
    request: &SearchRequest,
    config: &SearchConfig,
) -> SearchOutcome {
    let token = request.token;

    if request.term.is_empty() {
        tracing::debug!(token, "Empty term, committing no results");
        return SearchOutcome { token, groups: vec![], failed: false };
    }

    let Some(term) = clean_term(&request.term, config.min_fragment_len) else {
        tracing::debug!(token, term = %request.term, "Term too short, committing no results");
        return SearchOutcome { token, groups: vec![], failed: false };
    };

    let result = match request.scope {
        SearchScope::All => search_all(provider, &term, config.result_limit).await,
        SearchScope::Album | SearchScope::Artist => {
            search_intersection(provider, request.scope, &term, config).await
        }
        SearchScope::Song => search_songs(provider, &term, config.result_limit).await,
    };
    crate::log_catalog_result!("search", result);

    match result {
        Ok(mut groups) => {
            content::sort_groups(&mut groups);
            tracing::debug!(
                token,
                scope = ?request.scope,
                term = %term,
                groups = groups.len(),
                "Search completed"
            );
            SearchOutcome { token, groups, failed: false }
        }
        Err(e) => {
            tracing::debug!(token, term = %term, error = %e, "Committing no results for failed search");
            SearchOutcome { token, groups: vec![], failed: true }
        }
    }
}

async fn search_all(
    provider: &dyn CatalogProvider,
    term: &str,
    limit: usize,
) -> catalog::Result<Vec<ResultGroup>> {
    let items = provider.search_albums_and_songs(term, limit).await?;

    let mut groups = Vec::with_capacity(items.len());
    for item in items {
        match item {
            CatalogItem::Album(album) => {
                let detail = provider.resolve_album_detail(&album.id).await?;
                groups.push(ResultGroup::from_album_detail(detail));
            }
            CatalogItem::Song(song) => {
                let albums = provider.resolve_song_albums(&song.id).await?;
                groups.extend(albums.into_iter().map(|album| ResultGroup::from_song(album, &song)));
            }
        }
    }

    Ok(content::dedup_groups(groups))
}

/// Albums matching every fragment, in the order of the first fragment's hits
async fn search_intersection(
    provider: &dyn CatalogProvider,
    scope: SearchScope,
    term: &str,
    config: &SearchConfig,
) -> catalog::Result<Vec<ResultGroup>> {
    let fragments = term_fragments(term, config.min_fragment_len);
    let mut fragments = fragments.into_iter();

    let Some(first) = fragments.next() else {
        return Ok(vec![]);
    };
    let mut candidates = albums_by_fragment(provider, scope, first, config.result_limit).await?;

    for fragment in fragments {
        if candidates.is_empty() {
            break;
        }
        let hits: HashSet<String> = albums_by_fragment(provider, scope, fragment, config.result_limit)
            .await?
            .into_iter()
            .map(|album| album.id)
            .collect();
        candidates.retain(|album| hits.contains(&album.id));
    }

    let mut seen = HashSet::new();
    candidates.retain(|album| seen.insert(album.id.clone()));

    let details = try_join_all(
        candidates
            .iter()
            .map(|album| provider.resolve_album_detail(&album.id)),
    )
    .await?;

    Ok(details.into_iter().map(ResultGroup::from_album_detail).collect())
}

async fn albums_by_fragment(
    provider: &dyn CatalogProvider,
    scope: SearchScope,
    fragment: &str,
    limit: usize,
) -> catalog::Result<Vec<AlbumSummary>> {
    if scope == SearchScope::Artist {
        provider.search_albums_by_artist_fragment(fragment, limit).await
    } else {
        provider.search_albums_by_title_fragment(fragment, limit).await
    }
}

/// Songs fanned out into album-shaped groups holding only the matched songs
async fn search_songs(
    provider: &dyn CatalogProvider,
    term: &str,
    limit: usize,
) -> catalog::Result<Vec<ResultGroup>> {
    let songs = provider.search_songs_by_title(term, limit).await?;

    let mut groups = Vec::with_capacity(songs.len());
    for song in &songs {
        let albums = provider.resolve_song_albums(&song.id).await?;
        groups.extend(albums.into_iter().map(|album| ResultGroup::from_song(album, song)));
    }

    Ok(content::merge_groups(groups))
}
