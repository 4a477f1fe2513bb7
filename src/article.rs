/// Data structures for Article Compass
use serde::{Deserialize, Serialize};

/// A saved article: one row in the remote sheet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub url: String,
    pub title: String,
    pub timestamp: String,
}

impl Article {
    pub fn new(url: String, title: String, timestamp: String) -> Article {
        Article {
            url,
            title,
            timestamp,
        }
    }
}

/// The sheet's read response. A fresh sheet may answer without an
/// `articles` field at all, or with an explicit null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleFeed {
    #[serde(default)]
    pub articles: Option<Vec<Article>>,
}

impl ArticleFeed {
    /// Rows arrive in capture order; the reader wants the most recent
    /// capture at index 0.
    pub fn into_newest_first(self) -> Vec<Article> {
        let mut articles = self.articles.unwrap_or_default();
        articles.reverse();
        articles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_creation() {
        let article = Article::new(
            "https://example.com/post".to_string(),
            "Example Post".to_string(),
            "2024-01-01T00:00:00Z".to_string(),
        );

        assert_eq!(article.url, "https://example.com/post");
        assert_eq!(article.title, "Example Post");
        assert_eq!(article.timestamp, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_serialization() {
        let article = Article::new(
            "https://example.com".to_string(),
            "Example".to_string(),
            "2024-01-02T10:30:00Z".to_string(),
        );

        let json = serde_json::to_string(&article).unwrap();
        let deserialized: Article = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, article);
    }

    #[test]
    fn test_wire_shape() {
        let article = Article::new(
            "https://example.com".to_string(),
            "Example".to_string(),
            "2024-03-04T05:06:07.000Z".to_string(),
        );

        let json = serde_json::to_string(&article).unwrap();

        assert_eq!(
            json,
            r#"{"url":"https://example.com","title":"Example","timestamp":"2024-03-04T05:06:07.000Z"}"#
        );
    }

    #[test]
    fn test_feed_newest_first() {
        let feed: ArticleFeed = serde_json::from_str(
            r#"{"articles":[
                {"url":"https://a.example","title":"A","timestamp":"2024-01-01T00:00:00Z"},
                {"url":"https://b.example","title":"B","timestamp":"2024-01-02T00:00:00Z"}
            ]}"#,
        )
        .unwrap();

        let articles = feed.into_newest_first();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "B");
        assert_eq!(articles[1].title, "A");
    }

    #[test]
    fn test_feed_missing_articles_field() {
        let feed: ArticleFeed = serde_json::from_str("{}").unwrap();
        assert!(feed.into_newest_first().is_empty());
    }

    #[test]
    fn test_feed_null_articles_field() {
        let feed: ArticleFeed = serde_json::from_str(r#"{"articles":null}"#).unwrap();
        assert!(feed.into_newest_first().is_empty());
    }

    #[test]
    fn test_feed_empty_articles_field() {
        let feed: ArticleFeed = serde_json::from_str(r#"{"articles":[]}"#).unwrap();
        assert!(feed.into_newest_first().is_empty());
    }
}
