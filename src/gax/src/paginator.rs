// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Adapters to iterate over paginated list operations.
//!
//! List operations return one page of results at a time. Each page includes a
//! cursor to request the next page. The [Paginator] type converts such
//! operations into a [futures::Stream] of pages, and [ItemPaginator] into a
//! stream of the items in those pages.
//!
//! # Example
//! ```
//! # use ibm_cloud_networking_gax::paginator::*;
//! # tokio_test::block_on(async {
//! struct Page { items: Vec<i32>, next: String }
//! impl internal::PageableResponse for Page {
//!     type PageItem = i32;
//!     fn items(self) -> Vec<i32> { self.items }
//!     fn next_page_token(&self) -> String { self.next.clone() }
//! }
//!
//! let execute = |token: String| async move {
//!     let page = match token.as_str() {
//!         "" => Page { items: vec![1, 2], next: "p2".to_string() },
//!         _ => Page { items: vec![3], next: String::new() },
//!     };
//!     Ok::<Page, std::io::Error>(page)
//! };
//! let mut items = internal::new_paginator(String::new(), execute).items();
//! let mut got = Vec::new();
//! while let Some(item) = items.next().await {
//!     got.push(item?);
//! }
//! assert_eq!(got, vec![1, 2, 3]);
//! # Ok::<(), std::io::Error>(()) });
//! ```

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Not part of the public API, subject to change without notice.
#[doc(hidden)]
pub mod internal {
    use super::*;

    /// Describes a type that can be iterated over asyncly when used with [Paginator].
    pub trait PageableResponse {
        type PageItem: Send;

        /// Consumes the page returning the items in it.
        fn items(self) -> Vec<Self::PageItem>;

        /// The cursor to fetch the next page, empty if this is the last page.
        fn next_page_token(&self) -> String;
    }

    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch the next page.
    pub fn new_paginator<T, E, F>(
        seed_token: String,
        execute: impl Fn(String) -> F + Clone + Send + 'static,
    ) -> Paginator<T, E>
    where
        T: PageableResponse + Send + 'static,
        E: Send + 'static,
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Paginator::new(seed_token, execute)
    }
}

use internal::PageableResponse;

type ControlFlow = std::ops::ControlFlow<(), String>;

/// Converts a list operation into a [futures::Stream] of pages.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    fn new<F>(seed_token: String, execute: impl Fn(String) -> F + Clone + Send + 'static) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page_resp) => {
                        let tok = page_resp.next_page_token();
                        let next_state = if tok.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(tok)
                        };
                        Some((Ok(page_resp), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts this paginator into a stream of the items in each page.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator {
            pages: self,
            current: Vec::new().into_iter(),
        }
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// Iterates over the items of a paginated list operation.
///
/// Errors fetching a page are returned once, and terminate the iteration.
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    pages: Paginator<T, E>,
    current: std::vec::IntoIter<T::PageItem>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Returns the next item.
    pub async fn next(&mut self) -> Option<Result<T::PageItem, E>> {
        loop {
            if let Some(item) = self.current.next() {
                return Some(Ok(item));
            }
            match self.pages.next().await? {
                Ok(page) => self.current = page.items().into_iter(),
                Err(e) => return Some(Err(e)),
            }
        }
    }

    /// Converts this paginator into a [futures::Stream] of items.
    pub fn into_stream(self) -> impl Stream<Item = Result<T::PageItem, E>> + Send
    where
        T::PageItem: 'static,
    {
        unfold(self, |mut items| async move {
            items.next().await.map(|item| (item, items))
        })
    }
}
