// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.
//
// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! Cursor-following iteration over paginated API results.

use super::error::{ClientError, ClientResult};
use super::models::Page;
use futures::stream::{self, BoxStream, StreamExt};
use std::collections::VecDeque;
use std::future::Future;
use tracing::debug;

struct PageState<T, F> {
    fetch: F,
    after: String,
    page_size: usize,
    buffer: VecDeque<T>,
    has_more: bool,
    remaining: Option<usize>,
}

/// Turn a page fetcher into a lazy stream of its results.
///
/// `fetch` is called with the current cursor and page size. The first call
/// uses `after`; later calls use the previous page's `next_offset`. A new page
/// is requested only once the buffered one has been drained, so at most one
/// page is held in memory. The stream ends when the server reports no more
/// results, returns an empty page, or `limit` items have been yielded. With a
/// limit of zero no request is made at all.
pub(crate) fn paginate<T, F, Fut>(
    after: String,
    page_size: usize,
    limit: Option<usize>,
    fetch: F,
) -> BoxStream<'static, ClientResult<T>>
where
    T: Send + 'static,
    F: FnMut(String, usize) -> Fut + Send + 'static,
    Fut: Future<Output = ClientResult<Page<T>>> + Send + 'static,
{
    let page_size = match limit {
        Some(limit) => page_size.min(limit).max(1),
        None => page_size.max(1),
    };
    let state = PageState {
        fetch,
        after,
        page_size,
        buffer: VecDeque::new(),
        has_more: true,
        remaining: limit,
    };

    stream::try_unfold(state, |mut state| async move {
        loop {
            if state.remaining == Some(0) {
                return Ok::<_, ClientError>(None);
            }
            if let Some(item) = state.buffer.pop_front() {
                if let Some(remaining) = state.remaining.as_mut() {
                    *remaining -= 1;
                }
                return Ok(Some((item, state)));
            }
            if !state.has_more {
                return Ok(None);
            }

            let page = (state.fetch)(state.after.clone(), state.page_size).await?;
            debug!(
                "Fetched page after={} count={} has_more={}",
                state.after,
                page.results.len(),
                page.pagination.has_more
            );
            if page.results.is_empty() {
                return Ok(None);
            }
            state.has_more = page.pagination.has_more;
            state.after = page.pagination.next_offset;
            state.buffer = page.results.into();
        }
    })
    .boxed()
}
