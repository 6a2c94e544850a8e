use std::{marker::PhantomData, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use serde::de::DeserializeOwned;

use crate::{
    Res,
    spotify::client::SpotifyClient,
    types::{FollowedArtistsResponse, Paging},
};

/// One page of a listing and the cursor of the page after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

/// A listing that is read one page at a time.
///
/// `page(None)` returns the first page; every following call receives the
/// cursor the previous page returned.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    type Item;

    async fn page(&mut self, cursor: Option<&str>) -> Res<Page<Self::Item>>;
}

/// Reads every page of `source` and concatenates the items in page order.
///
/// Stops at the first page without a cursor. If any page fails the error is
/// returned and the items collected so far are dropped.
pub async fn drain<S: PageSource>(source: &mut S, label: &str) -> Res<Vec<S::Item>> {
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching {}...", label));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut items: Vec<S::Item> = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = match source.page(cursor.as_deref()).await {
            Ok(page) => page,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        items.extend(page.items);
        pb.set_message(format!("Fetched {} {}...", items.len(), label));

        match page.next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    pb.finish_and_clear();
    Ok(items)
}

/// Response bodies that carry one page of a listing.
pub trait IntoPage {
    type Item;

    fn into_page(self) -> Page<Self::Item>;
}

impl<T> IntoPage for Paging<T> {
    type Item = T;

    fn into_page(self) -> Page<T> {
        Page {
            items: self.items,
            next: self.next,
        }
    }
}

impl IntoPage for FollowedArtistsResponse {
    type Item = crate::types::Artist;

    fn into_page(self) -> Page<Self::Item> {
        self.artists.into_page()
    }
}

/// A Spotify listing whose cursor is the `next` URL of each page.
pub struct ApiPages<'a, R> {
    client: &'a SpotifyClient,
    first: String,
    _body: PhantomData<R>,
}

impl<'a, R> ApiPages<'a, R> {
    /// `first` is the absolute URL of the first page, query included.
    pub fn new(client: &'a SpotifyClient, first: String) -> Self {
        Self {
            client,
            first,
            _body: PhantomData,
        }
    }
}

impl<R> PageSource for ApiPages<'_, R>
where
    R: DeserializeOwned + IntoPage,
{
    type Item = R::Item;

    async fn page(&mut self, cursor: Option<&str>) -> Res<Page<Self::Item>> {
        let url = cursor.unwrap_or(self.first.as_str());
        let body = self.client.get::<R>(url).await?;
        Ok(body.into_page())
    }
}
