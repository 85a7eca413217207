//! # Paginated Sequence
//!
//! 遅延取得されるシーケンスの抽象化
//!
//! 要素は `fetch_next` を呼んだ時点で必要に応じて次のページを取得する。
//! ページ取得はそれぞれブロッキングポイントで、取得に失敗するとシーケンスは終了する。

use async_trait::async_trait;
use std::collections::VecDeque;

use crate::domain::errors::ApiError;

/// 1ページ分の取得結果
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 後続ページが存在するか
    pub more: bool,
}

/// ページ取得処理
#[async_trait]
pub trait PageFetcher<T>: Send {
    /// `offset` から始まるページを取得
    async fn fetch_page(&mut self, offset: usize) -> Result<Page<T>, ApiError>;
}

/// メモリ上のリストを1ページとして返す
struct StaticPage<T> {
    items: Option<Vec<T>>,
}

#[async_trait]
impl<T: Send + 'static> PageFetcher<T> for StaticPage<T> {
    async fn fetch_page(&mut self, _offset: usize) -> Result<Page<T>, ApiError> {
        Ok(Page {
            items: self.items.take().unwrap_or_default(),
            more: false,
        })
    }
}

/// 遅延シーケンス
pub struct Paginated<T> {
    fetcher: Box<dyn PageFetcher<T>>,
    buffered: VecDeque<T>,
    offset: usize,
    exhausted: bool,
    pages_fetched: usize,
}

impl<T: Send + 'static> Paginated<T> {
    pub fn new(fetcher: Box<dyn PageFetcher<T>>) -> Self {
        Self {
            fetcher,
            buffered: VecDeque::new(),
            offset: 0,
            exhausted: false,
            pages_fetched: 0,
        }
    }

    /// 取得済みのリストから作成
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::new(Box::new(StaticPage { items: Some(items) }))
    }

    /// 次の要素を返す
    ///
    /// バッファが空なら次のページを取得する。
    /// 空ページ、または `more == false` のページで終端とする。
    pub async fn fetch_next(&mut self) -> Result<Option<T>, ApiError> {
        loop {
            if let Some(item) = self.buffered.pop_front() {
                return Ok(Some(item));
            }
            if self.exhausted {
                return Ok(None);
            }

            let page = self.fetcher.fetch_page(self.offset).await?;
            self.pages_fetched += 1;
            self.offset += page.items.len();
            self.exhausted = !page.more || page.items.is_empty();
            self.buffered.extend(page.items);
        }
    }

    /// 全要素を取得
    pub async fn collect_all(mut self) -> Result<Vec<T>, ApiError> {
        let mut items = Vec::new();
        while let Some(item) = self.fetch_next().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// 全要素を数える
    pub async fn count(mut self) -> Result<usize, ApiError> {
        let mut count = 0;
        while self.fetch_next().await?.is_some() {
            count += 1;
        }
        Ok(count)
    }

    /// これまでに取得したページ数
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }
}
